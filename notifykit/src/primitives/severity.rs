use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Severity or intent of a user-facing message.
///
/// The tag travels with every alert and notification so the host can decide how to present it.
/// Within this crate it is informational only: every severity ends up in the same blocking alert.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, uniffi::Enum,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral informational message.
    #[default]
    Info,
    /// A completed operation or positive outcome.
    Success,
    /// A failure the user should know about.
    Error,
    /// A non-critical issue.
    Warning,
}

impl Severity {
    /// Returns the lowercase tag, e.g. `"success"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tag is not one of `info`, `success`, `error` or `warning`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity tag: {0}")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}
