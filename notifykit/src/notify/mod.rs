//! Notifications are currently shown as blocking alerts. The severity is handed to the
//! dialog provider untouched, which leaves room for hosts to render toasts or banners instead.

use std::sync::Arc;

use crate::notifykit_export;
use crate::primitives::dialog::{get_dialog_provider, present_alert, DialogError, DialogProvider};
use crate::primitives::logger::LogContext;
use crate::primitives::Severity;

/// Severity-tagged notifications bound to a specific provider.
#[derive(uniffi::Object)]
pub struct Notifier {
    provider: Arc<dyn DialogProvider>,
}

#[notifykit_export]
impl Notifier {
    /// Creates a notifier that draws through `provider`.
    #[uniffi::constructor]
    #[must_use]
    pub fn new(provider: Arc<dyn DialogProvider>) -> Self {
        Self { provider }
    }

    /// Shows `message` tagged with `severity` (default `Info`).
    ///
    /// # Errors
    /// - `DialogError` if the provider fails to show the notification
    pub fn show_notification(
        &self,
        message: String,
        severity: Option<Severity>,
    ) -> Result<(), DialogError> {
        notify(self.provider.as_ref(), message, severity.unwrap_or_default())
    }

    /// Shows `message` as a success notification.
    ///
    /// # Errors
    /// - `DialogError` if the provider fails to show the notification
    pub fn show_success(&self, message: String) -> Result<(), DialogError> {
        self.show_notification(message, Some(Severity::Success))
    }

    /// Shows `message` as an error notification.
    ///
    /// # Errors
    /// - `DialogError` if the provider fails to show the notification
    pub fn show_error(&self, message: String) -> Result<(), DialogError> {
        self.show_notification(message, Some(Severity::Error))
    }

    /// Shows `message` as a warning notification.
    ///
    /// # Errors
    /// - `DialogError` if the provider fails to show the notification
    pub fn show_warning(&self, message: String) -> Result<(), DialogError> {
        self.show_notification(message, Some(Severity::Warning))
    }
}

fn notify(
    provider: &dyn DialogProvider,
    message: String,
    severity: Severity,
) -> Result<(), DialogError> {
    crate::trace!("routing {severity} notification to a blocking alert");
    present_alert(provider, message, severity)
}

/// Shows `message` tagged with `severity` (default `Info`) on the registered provider.
///
/// # Errors
/// - `DialogError::NotInitialized` if no provider is registered
/// - `DialogError` if the provider fails to show the notification
#[uniffi::export]
pub fn show_notification(message: String, severity: Option<Severity>) -> Result<(), DialogError> {
    let _ctx = LogContext::new("Notifier");
    notify(
        get_dialog_provider()?.as_ref(),
        message,
        severity.unwrap_or_default(),
    )
}

/// Shows `message` as a success notification on the registered provider.
///
/// # Errors
/// Same as [`show_notification`].
#[uniffi::export]
pub fn show_success(message: String) -> Result<(), DialogError> {
    show_notification(message, Some(Severity::Success))
}

/// Shows `message` as an error notification on the registered provider.
///
/// # Errors
/// Same as [`show_notification`].
#[uniffi::export]
pub fn show_error(message: String) -> Result<(), DialogError> {
    show_notification(message, Some(Severity::Error))
}

/// Shows `message` as a warning notification on the registered provider.
///
/// # Errors
/// Same as [`show_notification`].
#[uniffi::export]
pub fn show_warning(message: String) -> Result<(), DialogError> {
    show_notification(message, Some(Severity::Warning))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::dialog::{RecordedDialog, RecordingDialogProvider};

    fn alert(message: &str, severity: Severity) -> RecordedDialog {
        RecordedDialog::Alert {
            message: message.to_string(),
            severity,
        }
    }

    #[test]
    fn test_convenience_helpers_tag_once_each() {
        let cases: [(fn(&Notifier, String) -> Result<(), DialogError>, Severity); 3] = [
            (Notifier::show_success, Severity::Success),
            (Notifier::show_error, Severity::Error),
            (Notifier::show_warning, Severity::Warning),
        ];

        for (show, severity) in cases {
            let provider = Arc::new(RecordingDialogProvider::answering(false));
            let notifier = Notifier::new(provider.clone());

            show(&notifier, "Upload finished".to_string()).unwrap();

            assert_eq!(provider.calls(), vec![alert("Upload finished", severity)]);
        }
    }

    #[test]
    fn test_show_notification_defaults_to_info() {
        let provider = Arc::new(RecordingDialogProvider::answering(false));
        let notifier = Notifier::new(provider.clone());

        notifier
            .show_notification("Heads up".to_string(), None)
            .unwrap();

        assert_eq!(provider.calls(), vec![alert("Heads up", Severity::Info)]);
    }
}
