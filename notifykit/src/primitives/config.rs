use std::sync::OnceLock;

use crate::notifykit_export;

static CONFIG_INSTANCE: OnceLock<NotifyKitConfig> = OnceLock::new();

/// The environment the host runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum Environment {
    /// Local development. Dialog text is included in debug logs.
    Development,
    /// Production. Dialog text never reaches the logs.
    Production,
}

impl Environment {
    /// Returns the string representation of the environment
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Global configuration for notifykit
#[derive(Debug, Clone, uniffi::Object)]
pub struct NotifyKitConfig {
    environment: Environment,
}

#[notifykit_export]
impl NotifyKitConfig {
    /// Creates a configuration for `environment`.
    ///
    /// ## Swift
    ///
    /// ```swift
    /// let config = NotifyKitConfig(environment: .production)
    /// ```
    #[uniffi::constructor]
    #[must_use]
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }

    /// Gets the configured environment
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }
}

/// Initializes the global configuration.
///
/// Call once at application startup. Subsequent calls are ignored with a warning.
///
/// ## Swift
///
/// ```swift
/// NotifyKit.initConfig(environment: .development)
/// ```
#[uniffi::export]
pub fn init_config(environment: Environment) {
    match CONFIG_INSTANCE.set(NotifyKitConfig::new(environment)) {
        Ok(()) => crate::info!("notifykit config initialized with environment: {environment}"),
        Err(_) => crate::warn!("notifykit config already initialized, ignoring"),
    }
}

/// Gets the current environment, defaulting to `Production` until `init_config` is called.
#[must_use]
pub fn current_environment() -> Environment {
    CONFIG_INSTANCE
        .get()
        .map_or(Environment::Production, NotifyKitConfig::environment)
}

/// Gets the global configuration, if initialized.
#[must_use]
pub fn get_config() -> Option<&'static NotifyKitConfig> {
    CONFIG_INSTANCE.get()
}

/// Checks whether `init_config` has been called.
#[must_use]
pub fn is_initialized() -> bool {
    CONFIG_INSTANCE.get().is_some()
}
