//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`, plus helpers that
//! capture the call site for error records.
//!
//! # Examples
//!
//! ```no_run
//! use rust_dual_logger::prelude::*;
//! use rust_dual_logger::{error, info};
//!
//! let logger = Logger::new("log.txt", "logs", "INFO")?;
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! if let Err(err) = std::fs::read_to_string("missing.toml") {
//!     error!(logger, cause = err; "could not read {}", "missing.toml");
//! }
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message with automatic formatting.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warn-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message, optionally with the error that caused it.
///
/// With `cause = err;` the record carries an [`ErrorContext`](crate::ErrorContext)
/// pointing at the macro call site.
#[macro_export]
macro_rules! error {
    ($logger:expr, cause = $err:expr; $($arg:tt)+) => {
        $logger.error_with_context(format!($($arg)+), $crate::error_context!($err))
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Name of the enclosing function, without its module path.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        let name = name.strip_suffix("::__here").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        name.rsplit("::").next().unwrap_or(name)
    }};
}

/// [`SourceLocation`](crate::SourceLocation) of the macro call site.
#[macro_export]
macro_rules! here {
    () => {
        $crate::SourceLocation::new(file!(), line!(), $crate::function_name!())
    };
}

/// [`ErrorContext`](crate::ErrorContext) for an error value, located at the call site.
///
/// ```
/// use rust_dual_logger::error_context;
///
/// let err = "x".parse::<i32>().unwrap_err();
/// let ctx = error_context!(err);
/// assert!(ctx.to_string().starts_with("(File: "));
/// ```
#[macro_export]
macro_rules! error_context {
    ($err:expr) => {
        $crate::ErrorContext::from_error(&$err, $crate::here!())
    };
}
