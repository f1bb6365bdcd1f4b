use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse_macro_input, Data, DeriveInput, ImplItem, ImplItemFn, ItemImpl, Stmt, Type,
    Variant, Visibility,
};

/// Turns a plain enum into a notifykit error type.
///
/// The attribute:
/// 1. Derives `Debug`, `thiserror::Error` and `uniffi::Error` and marks the enum `#[uniffi(flat_error)]`
/// 2. Appends a `Generic { message: String }` variant unless one is declared already
/// 3. Implements `From<anyhow::Error>`, keeping the whole cause chain in `message`
/// 4. Adds `from_anyhow_result` / `from_anyhow_result_with_prefix` helpers
///
/// # Usage
///
/// ```rust,ignore
/// #[notifykit_error]
/// pub enum EncodingError {
///     #[error("invalid base64: {reason}")]
///     InvalidBase64 { reason: String },
/// }
/// ```
#[proc_macro_attribute]
pub fn notifykit_error(_args: TokenStream, input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(&input, "notifykit_error can only be applied to enums")
            .to_compile_error()
            .into();
    };

    let enum_name = &input.ident;
    let visibility = &input.vis;
    let generics = &input.generics;

    // derive and uniffi attributes are regenerated below
    let attrs = input
        .attrs
        .iter()
        .filter(|attr| !attr.path().is_ident("derive") && !attr.path().is_ident("uniffi"));

    let mut variants = data_enum.variants.clone();
    if !variants.iter().any(|variant| variant.ident == "Generic") {
        let generic_variant: Variant = syn::parse_quote! {
            /// Any other failure, carrying the rendered `anyhow` error chain.
            #[error("generic error: {message}")]
            Generic {
                /// The error message including its causes.
                message: String
            }
        };
        variants.push(generic_variant);
    }

    quote! {
        #[derive(Debug, thiserror::Error, uniffi::Error)]
        #[uniffi(flat_error)]
        #(#attrs)*
        #visibility enum #enum_name #generics {
            #variants
        }

        impl #generics From<anyhow::Error> for #enum_name #generics {
            fn from(err: anyhow::Error) -> Self {
                Self::Generic {
                    message: Self::render_anyhow_chain(&err),
                }
            }
        }

        impl #generics #enum_name #generics {
            /// Converts an `anyhow::Result` into a result carrying this error type.
            pub fn from_anyhow_result<T>(result: anyhow::Result<T>) -> Result<T, Self> {
                result.map_err(Self::from)
            }

            /// Converts an `anyhow::Result` into a result carrying this error type,
            /// prefixing the rendered message with `prefix`.
            pub fn from_anyhow_result_with_prefix<T>(
                result: anyhow::Result<T>,
                prefix: &str,
            ) -> Result<T, Self> {
                result.map_err(|err| Self::Generic {
                    message: format!("{}: {}", prefix, Self::render_anyhow_chain(&err)),
                })
            }

            fn render_anyhow_chain(err: &anyhow::Error) -> String {
                let mut message = err.to_string();
                let causes: Vec<String> = err.chain().skip(1).map(ToString::to_string).collect();
                if !causes.is_empty() {
                    message.push_str(" (caused by: ");
                    message.push_str(&causes.join(" -> "));
                    message.push(')');
                }
                message
            }
        }
    }
    .into()
}

/// Wraps `uniffi::export` on an impl block and opens a logging context in every public method.
///
/// Each `pub fn` gets `let _notifykit_log_ctx = crate::primitives::logger::LogContext::new("TypeName");`
/// as its first statement, so the crate logging macros prefix their output with `[TypeName]`.
/// Arguments are forwarded to `#[uniffi::export(..)]` untouched.
///
/// # Usage
///
/// ```rust,ignore
/// #[notifykit_export]
/// impl Notifier {
///     pub fn show_success(&self, message: String) -> Result<(), DialogError> {
///         crate::debug!("prefixed with [Notifier]");
///         self.show_notification(message, Some(Severity::Success))
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn notifykit_export(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut input_impl = parse_macro_input!(input as ItemImpl);
    let type_name = exported_type_name(&input_impl.self_ty);

    for item in &mut input_impl.items {
        if let ImplItem::Fn(method) = item {
            if matches!(method.vis, Visibility::Public(_)) {
                inject_log_context(method, &type_name);
            }
        }
    }

    let args = proc_macro2::TokenStream::from(args);
    quote! {
        #[uniffi::export(#args)]
        #input_impl
    }
    .into()
}

/// Last path segment of the implementing type, used as the log context label.
fn exported_type_name(self_ty: &Type) -> String {
    match self_ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map_or_else(|| "Unknown".to_string(), |segment| segment.ident.to_string()),
        _ => "Unknown".to_string(),
    }
}

fn inject_log_context(method: &mut ImplItemFn, type_name: &str) {
    let context_stmt: Stmt = syn::parse_quote! {
        let _notifykit_log_ctx = crate::primitives::logger::LogContext::new(#type_name);
    };
    method.block.stmts.insert(0, context_stmt);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exported_type_name_uses_last_segment() {
        let ty: Type = syn::parse_quote! { crate::notify::Notifier };
        assert_eq!(exported_type_name(&ty), "Notifier");
    }

    #[test]
    fn test_exported_type_name_falls_back_for_non_paths() {
        let ty: Type = syn::parse_quote! { &'static str };
        assert_eq!(exported_type_name(&ty), "Unknown");
    }

    #[test]
    fn test_inject_log_context_prepends_statement() {
        let mut method: ImplItemFn = syn::parse_quote! {
            pub fn show_alert(&self, message: String) {
                self.provider.alert(message);
            }
        };

        inject_log_context(&mut method, "Alerts");

        assert_eq!(method.block.stmts.len(), 2);
        let first = &method.block.stmts[0];
        let rendered = quote!(#first).to_string();
        assert!(rendered.contains("_notifykit_log_ctx"));
        assert!(rendered.contains("\"Alerts\""));
    }
}
