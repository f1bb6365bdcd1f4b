use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD},
        DecodePaddingMode,
    },
    Engine,
};

use crate::notifykit_error;

/// Decoder for input whose padding has already been stripped. Any remaining `=` is an
/// error and leftover bits in the final symbol are discarded.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Errors produced by the base64 helpers
#[notifykit_error]
pub enum EncodingError {
    /// The text contains a character that does not fit in a single byte.
    #[error("character {character:?} at position {position} is outside the Latin-1 range")]
    UnencodableCharacter {
        /// The offending character.
        character: char,
        /// Its index, counted in characters.
        position: usize,
    },
    /// The input is not valid base64.
    #[error("invalid base64: {reason}")]
    InvalidBase64 {
        /// What the decoder rejected.
        reason: String,
    },
    /// The decoded bytes are not valid UTF-8.
    #[error("decoded data is not valid UTF-8: {reason}")]
    InvalidUtf8 {
        /// Where decoding stopped.
        reason: String,
    },
}

/// Base64-encodes `input`, treating every character as one byte.
///
/// Mirrors the browser `btoa` primitive: characters must lie in U+0000..=U+00FF.
/// Use [`encode_base64_utf8`] for arbitrary text.
///
/// # Errors
/// - `EncodingError::UnencodableCharacter` for the first character above U+00FF
///
/// # Examples
/// ```
/// use notifykit::common::encode_base64;
/// assert_eq!(encode_base64("hello").unwrap(), "aGVsbG8=");
/// ```
#[uniffi::export]
pub fn encode_base64(input: &str) -> Result<String, EncodingError> {
    let bytes = input
        .chars()
        .enumerate()
        .map(|(position, character)| {
            u8::try_from(character).map_err(|_| EncodingError::UnencodableCharacter {
                character,
                position,
            })
        })
        .collect::<Result<Vec<u8>, _>>()?;
    Ok(encode_base64_bytes(&bytes))
}

/// Decodes base64 `input`, mapping every decoded byte to one character.
///
/// Mirrors the browser `atob` primitive: ASCII whitespace is ignored, padding is optional.
///
/// # Errors
/// - `EncodingError::InvalidBase64` if `input` contains symbols outside the base64 alphabet
///   or has an impossible length
#[uniffi::export]
pub fn decode_base64(input: &str) -> Result<String, EncodingError> {
    let bytes = decode_base64_bytes(input)?;
    Ok(bytes.into_iter().map(char::from).collect())
}

/// Base64-encodes the UTF-8 bytes of `input`. Accepts any text.
#[uniffi::export]
#[must_use]
pub fn encode_base64_utf8(input: &str) -> String {
    encode_base64_bytes(input.as_bytes())
}

/// Decodes base64 `input` and interprets the result as UTF-8.
///
/// # Errors
/// - `EncodingError::InvalidBase64` if `input` is not valid base64
/// - `EncodingError::InvalidUtf8` if the decoded bytes are not UTF-8
#[uniffi::export]
pub fn decode_base64_utf8(input: &str) -> Result<String, EncodingError> {
    String::from_utf8(decode_base64_bytes(input)?).map_err(|e| EncodingError::InvalidUtf8 {
        reason: e.utf8_error().to_string(),
    })
}

/// Base64-encodes raw bytes with the standard, padded alphabet.
#[must_use]
pub fn encode_base64_bytes(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decodes base64 `input` to raw bytes using the forgiving rules of [`decode_base64`].
///
/// # Errors
/// - `EncodingError::InvalidBase64` if `input` is not valid base64
pub fn decode_base64_bytes(input: &str) -> Result<Vec<u8>, EncodingError> {
    let compact: String = input
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\n' | '\x0C' | '\r'))
        .collect();
    // only complete quanta may drop their padding
    let unpadded = if compact.len() % 4 == 0 {
        strip_padding(&compact)
    } else {
        compact.as_str()
    };
    FORGIVING
        .decode(unpadded)
        .map_err(|e| EncodingError::InvalidBase64 {
            reason: e.to_string(),
        })
}

/// Removes at most two trailing `=`.
fn strip_padding(input: &str) -> &str {
    let once = input.strip_suffix('=').unwrap_or(input);
    once.strip_suffix('=').unwrap_or(once)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(encode_base64("hello").unwrap(), "aGVsbG8=");
        assert_eq!(decode_base64("aGVsbG8=").unwrap(), "hello");
        assert_eq!(encode_base64("").unwrap(), "");
        assert_eq!(decode_base64("").unwrap(), "");
    }

    #[test]
    fn test_printable_ascii_round_trips() {
        let printable: String = (0x20u8..0x7f).map(char::from).collect();
        for end in 0..printable.len() {
            let s = &printable[..end];
            assert_eq!(decode_base64(&encode_base64(s).unwrap()).unwrap(), s);
        }
    }

    #[test]
    fn test_latin1_is_one_byte_per_character() {
        assert_eq!(encode_base64("é").unwrap(), "6Q==");
        assert_eq!(decode_base64("6Q==").unwrap(), "é");
    }

    #[test]
    fn test_multibyte_character_is_rejected() {
        let err = encode_base64("ok ✓").unwrap_err();
        match err {
            EncodingError::UnencodableCharacter {
                character,
                position,
            } => {
                assert_eq!(character, '✓');
                assert_eq!(position, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        assert!(matches!(
            decode_base64("!!!"),
            Err(EncodingError::InvalidBase64 { .. })
        ));
        // a single trailing symbol cannot encode a whole byte
        assert!(decode_base64("aGVsb").is_err());
        assert!(decode_base64("aG=Vs").is_err());
    }

    #[test]
    fn test_forgiving_decoding() {
        assert_eq!(decode_base64("aGVsbG8").unwrap(), "hello");
        assert_eq!(decode_base64(" aGVs\nbG8= ").unwrap(), "hello");
        assert_eq!(decode_base64("YR==").unwrap(), "a");
        assert_eq!(decode_base64("YQ==").unwrap(), "a");
        assert_eq!(decode_base64("YQ").unwrap(), "a");
    }

    #[test]
    fn test_padding_must_complete_a_quantum() {
        for input in ["YQ=", "aGVsbG8==", "YW=I", "YQ==="] {
            assert!(
                matches!(decode_base64(input), Err(EncodingError::InvalidBase64 { .. })),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_utf8_variants_round_trip() {
        let text = "Grüße, 世界 ✓";
        let encoded = encode_base64_utf8(text);
        assert_eq!(decode_base64_utf8(&encoded).unwrap(), text);
    }

    #[test]
    fn test_utf8_decode_rejects_invalid_bytes() {
        // 0xFF is never valid UTF-8
        let encoded = encode_base64_bytes(&[0x68, 0xFF]);
        assert!(matches!(
            decode_base64_utf8(&encoded),
            Err(EncodingError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn test_generic_variant_keeps_cause_chain() {
        use anyhow::Context;

        let result: anyhow::Result<()> = Err(anyhow::anyhow!("bad symbol"))
            .context("decoding attachment");
        let err = EncodingError::from_anyhow_result(result).unwrap_err();

        assert_eq!(
            err.to_string(),
            "generic error: decoding attachment (caused by: bad symbol)"
        );
    }
}
