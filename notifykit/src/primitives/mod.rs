/// Severity tag carried by alerts and notifications.
pub mod severity;
pub use severity::{Severity, UnknownSeverity};

/// Host-implemented blocking dialogs.
pub mod dialog;

/// Native dialog provider for terminal hosts.
pub mod terminal;

/// Logging bridge to the host.
pub mod logger;

/// Global configuration.
pub mod config;
