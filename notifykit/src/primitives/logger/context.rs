use std::cell::RefCell;

thread_local! {
    static LOG_CONTEXT: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Scope guard that prefixes log output with `[label]` until dropped.
///
/// `#[notifykit_export]` opens one of these at the top of every exported method.
///
/// ```rust
/// use notifykit::primitives::logger::{get_context, LogContext};
///
/// {
///     let _ctx = LogContext::new("Notifier");
///     assert_eq!(get_context().as_deref(), Some("[Notifier]"));
/// }
/// assert_eq!(get_context(), None);
/// ```
pub struct LogContext {
    previous: Option<String>,
}

impl LogContext {
    /// Opens a logging context that lasts until the returned guard is dropped.
    #[must_use]
    pub fn new(label: &str) -> Self {
        let previous = LOG_CONTEXT.with(|ctx| ctx.replace(Some(format!("[{label}]"))));
        Self { previous }
    }
}

impl Drop for LogContext {
    fn drop(&mut self) {
        LOG_CONTEXT.with(|ctx| {
            (*ctx.borrow_mut()).clone_from(&self.previous);
        });
    }
}

/// Gets the current logging context, if any.
#[must_use]
pub fn get_context() -> Option<String> {
    LOG_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Runs a block inside a logging context.
///
/// ```rust
/// use notifykit::with_log_context;
///
/// with_log_context!("Alerts" => {
///     log::info!("prefixed with [Alerts] when using notifykit::info!");
/// });
/// ```
#[macro_export]
macro_rules! with_log_context {
    ($label:expr => $block:block) => {{
        let _ctx = $crate::primitives::logger::LogContext::new($label);
        $block
    }};
}
