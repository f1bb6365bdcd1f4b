use std::panic::{AssertUnwindSafe, UnwindSafe};
use std::sync::{Arc, OnceLock};

use thiserror::Error;

use super::config::{current_environment, Environment};
use super::Severity;

/// Errors that can occur while showing a dialog
#[derive(Debug, Error, uniffi::Error)]
pub enum DialogError {
    /// The host cannot show dialogs right now
    #[error("dialogs unavailable: {0}")]
    Unavailable(String),
    /// No dialog provider has been registered with `set_dialog_provider`
    #[error("dialog provider not initialized")]
    NotInitialized,
    /// The foreign implementation threw or panicked inside the callback
    #[error("unexpected uniffi callback error: {0}")]
    UnexpectedUniFFICallbackError(String),
}

/// Converts unexpected UniFFI callback errors to `DialogError`.
///
/// Required for foreign trait support: when a Swift/Kotlin `DialogProvider` fails in a way
/// its signature does not describe, UniFFI hands us this error instead of panicking.
impl From<uniffi::UnexpectedUniFFICallbackError> for DialogError {
    fn from(error: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::UnexpectedUniFFICallbackError(error.reason)
    }
}

/// Blocking modal dialogs drawn by the host application.
///
/// A browser shell maps these to `alert()` / `confirm()`, mobile apps to their native alert
/// controllers, and terminal hosts can use [`super::terminal::TerminalDialogProvider`].
/// Both methods must block until the user dismisses the dialog.
///
/// # Examples
///
/// ```rust
/// use notifykit::primitives::dialog::{DialogError, DialogProvider};
/// use notifykit::primitives::Severity;
///
/// struct AlwaysYes;
///
/// impl DialogProvider for AlwaysYes {
///     fn alert(&self, message: String, severity: Severity) -> Result<(), DialogError> {
///         println!("[{severity}] {message}");
///         Ok(())
///     }
///
///     fn confirm(&self, _message: String) -> Result<bool, DialogError> {
///         Ok(true)
///     }
/// }
/// ```
#[uniffi::export(with_foreign)]
pub trait DialogProvider: Send + Sync {
    /// Shows `message` and returns once the user has dismissed it.
    ///
    /// `severity` is passed along for presentation purposes only; hosts are free to ignore it.
    ///
    /// # Errors
    /// - `DialogError::Unavailable` if the host cannot show the dialog
    fn alert(&self, message: String, severity: Severity) -> Result<(), DialogError>;

    /// Asks the user to confirm `message`. Returns `true` on accept and `false` on cancel.
    ///
    /// # Errors
    /// - `DialogError::Unavailable` if the host cannot show the dialog
    fn confirm(&self, message: String) -> Result<bool, DialogError>;
}

/// A global instance of the host-provided dialog provider
static DIALOG_PROVIDER_INSTANCE: OnceLock<Arc<dyn DialogProvider>> = OnceLock::new();

/// Registers the dialog provider used by the free functions in `common` and `notify`.
///
/// Should be called once during application startup. Later calls are ignored.
#[uniffi::export]
pub fn set_dialog_provider(provider: Arc<dyn DialogProvider>) {
    match DIALOG_PROVIDER_INSTANCE.set(provider) {
        Ok(()) => crate::debug!("dialog provider registered"),
        Err(_) => crate::warn!("dialog provider already set, ignoring"),
    }
}

/// Gets the registered dialog provider.
///
/// # Errors
/// - `DialogError::NotInitialized` if `set_dialog_provider` has not been called
pub fn get_dialog_provider() -> Result<&'static Arc<dyn DialogProvider>, DialogError> {
    DIALOG_PROVIDER_INSTANCE
        .get()
        .ok_or(DialogError::NotInitialized)
}

/// Invokes a provider callback, turning a panic during the call into an error.
///
/// UniFFI may panic while lifting the result of a foreign callback that threw
/// something outside its declared error type.
fn catch_callback_panic<T, F>(operation: &str, f: F) -> Result<T, DialogError>
where
    F: FnOnce() -> Result<T, DialogError> + UnwindSafe,
{
    std::panic::catch_unwind(f).unwrap_or_else(|_| {
        Err(DialogError::UnexpectedUniFFICallbackError(format!(
            "panic in DialogProvider.{operation} callback"
        )))
    })
}

/// Message bodies only reach the logs outside production.
fn describe_message(message: &str) -> String {
    match current_environment() {
        Environment::Development => format!("{message:?}"),
        Environment::Production => format!("<{} chars>", message.chars().count()),
    }
}

/// Shows a blocking alert on `provider`.
pub(crate) fn present_alert(
    provider: &dyn DialogProvider,
    message: String,
    severity: Severity,
) -> Result<(), DialogError> {
    crate::debug!("showing {severity} alert {}", describe_message(&message));
    catch_callback_panic(
        "alert",
        AssertUnwindSafe(|| provider.alert(message, severity)),
    )
    .inspect_err(|e| crate::error!("{severity} alert failed: {e}"))
}

/// Shows a blocking confirmation on `provider`.
pub(crate) fn present_confirm(
    provider: &dyn DialogProvider,
    message: String,
) -> Result<bool, DialogError> {
    crate::debug!("asking for confirmation {}", describe_message(&message));
    let accepted = catch_callback_panic("confirm", AssertUnwindSafe(|| provider.confirm(message)))
        .inspect_err(|e| crate::error!("confirmation failed: {e}"))?;
    crate::debug!("confirmation answered: {accepted}");
    Ok(accepted)
}

/// A single call received by [`RecordingDialogProvider`]
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedDialog {
    /// `alert` was called
    Alert {
        /// The message shown
        message: String,
        /// The severity tag passed along
        severity: Severity,
    },
    /// `confirm` was called
    Confirm {
        /// The message shown
        message: String,
    },
}

/// In-memory `DialogProvider` that records calls and answers confirmations with a fixed choice
#[cfg(test)]
pub struct RecordingDialogProvider {
    answer: bool,
    calls: std::sync::Mutex<Vec<RecordedDialog>>,
}

#[cfg(test)]
impl RecordingDialogProvider {
    /// Creates a provider whose simulated user answers every confirmation with `answer`
    #[must_use]
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Returns every call received so far
    pub fn calls(&self) -> Vec<RecordedDialog> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl DialogProvider for RecordingDialogProvider {
    fn alert(&self, message: String, severity: Severity) -> Result<(), DialogError> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedDialog::Alert { message, severity });
        Ok(())
    }

    fn confirm(&self, message: String) -> Result<bool, DialogError> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedDialog::Confirm { message });
        Ok(self.answer)
    }
}
