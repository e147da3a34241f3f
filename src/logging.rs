//! Cross-platform logging for the reader.
//!
//! Web builds write straight to the browser console; native builds go
//! through `tracing`. Only the levels this app actually emits are wired up:
//! debug for fetch tracing, warn for payload oddities, error for failures.

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Warn,
    Error,
}

#[cfg(target_arch = "wasm32")]
pub fn emit(level: Level, msg: &str) {
    match level {
        Level::Debug => web_sys::console::debug_1(&msg.into()),
        Level::Warn => web_sys::console::warn_1(&msg.into()),
        Level::Error => web_sys::console::error_1(&msg.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn emit(level: Level, msg: &str) {
    match level {
        Level::Debug => tracing::debug!("{}", msg),
        Level::Warn => tracing::warn!("{}", msg),
        Level::Error => tracing::error!("{}", msg),
    }
}

/// Log a debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::Level::Debug, &format!($($arg)*))
    };
}

/// Log a warning
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::Level::Warn, &format!($($arg)*))
    };
}

/// Log an error
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::Level::Error, &format!($($arg)*))
    };
}
