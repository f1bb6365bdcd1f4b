use std::sync::Arc;

use crate::notifykit_export;
use crate::primitives::dialog::{
    get_dialog_provider, present_alert, present_confirm, DialogError, DialogProvider,
};
use crate::primitives::logger::LogContext;
use crate::primitives::Severity;

/// Base64 helpers.
pub mod encoding;
pub use encoding::{
    decode_base64, decode_base64_bytes, decode_base64_utf8, encode_base64,
    encode_base64_bytes, encode_base64_utf8, EncodingError,
};

/// Alert and confirm dialogs bound to a specific provider.
///
/// The free functions [`show_alert`] and [`confirm_action`] do the same against the
/// globally registered provider.
#[derive(uniffi::Object)]
pub struct Alerts {
    provider: Arc<dyn DialogProvider>,
}

#[notifykit_export]
impl Alerts {
    /// Creates alert helpers that draw through `provider`.
    #[uniffi::constructor]
    #[must_use]
    pub fn new(provider: Arc<dyn DialogProvider>) -> Self {
        Self { provider }
    }

    /// Shows `message` in a blocking alert and returns once it is dismissed.
    ///
    /// `severity` defaults to `Info` and is only passed through to the provider.
    ///
    /// # Errors
    /// - `DialogError` if the provider fails to show the alert
    pub fn show_alert(
        &self,
        message: String,
        severity: Option<Severity>,
    ) -> Result<(), DialogError> {
        present_alert(
            self.provider.as_ref(),
            message,
            severity.unwrap_or_default(),
        )
    }

    /// Asks the user to confirm `message`. Returns `true` if they accepted.
    ///
    /// # Errors
    /// - `DialogError` if the provider fails to show the dialog
    pub fn confirm_action(&self, message: String) -> Result<bool, DialogError> {
        present_confirm(self.provider.as_ref(), message)
    }
}

/// Shows `message` in a blocking alert on the registered provider.
///
/// `severity` defaults to `Info` and does not change how the alert is shown.
///
/// # Errors
/// - `DialogError::NotInitialized` if no provider is registered
/// - `DialogError` if the provider fails to show the alert
#[uniffi::export]
pub fn show_alert(message: String, severity: Option<Severity>) -> Result<(), DialogError> {
    let _ctx = LogContext::new("Alerts");
    present_alert(
        get_dialog_provider()?.as_ref(),
        message,
        severity.unwrap_or_default(),
    )
}

/// Asks the user to confirm `message` on the registered provider.
///
/// # Errors
/// - `DialogError::NotInitialized` if no provider is registered
/// - `DialogError` if the provider fails to show the dialog
#[uniffi::export]
pub fn confirm_action(message: String) -> Result<bool, DialogError> {
    let _ctx = LogContext::new("Alerts");
    present_confirm(get_dialog_provider()?.as_ref(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::dialog::{RecordedDialog, RecordingDialogProvider};

    #[test]
    fn test_show_alert_defaults_to_info() {
        let provider = Arc::new(RecordingDialogProvider::answering(true));
        let alerts = Alerts::new(provider.clone());

        alerts.show_alert("Saved".to_string(), None).unwrap();
        alerts
            .show_alert("Careful".to_string(), Some(Severity::Warning))
            .unwrap();

        assert_eq!(
            provider.calls(),
            vec![
                RecordedDialog::Alert {
                    message: "Saved".to_string(),
                    severity: Severity::Info,
                },
                RecordedDialog::Alert {
                    message: "Careful".to_string(),
                    severity: Severity::Warning,
                },
            ]
        );
    }

    #[test]
    fn test_confirm_action_reflects_user_choice() {
        let accept = Alerts::new(Arc::new(RecordingDialogProvider::answering(true)));
        let cancel = Alerts::new(Arc::new(RecordingDialogProvider::answering(false)));

        assert!(accept.confirm_action("Delete file?".to_string()).unwrap());
        assert!(!cancel.confirm_action("Delete file?".to_string()).unwrap());
    }
}
