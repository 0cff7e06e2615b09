//! # Rust Dual Logger
//!
//! A small, synchronous logger that sends every accepted record to two
//! places at once: a colorized console line and an append-only text file.
//!
//! ## Features
//!
//! - **Level gating**: DEBUG < INFO < WARN < ERROR, configured case-insensitively
//! - **Durable file output**: one line per record, flushed before the call returns
//! - **Consistent timestamps**: console and file show the same second
//! - **Deterministic cleanup**: idempotent `close`, closing on drop and scoped use
//!
//! Loggers are always built explicitly; the crate creates no global instance.
//!
//! ```no_run
//! use rust_dual_logger::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let logger = Logger::new("logs.txt", "my_logs", "info")?;
//!     logger.info("This is an info message.");
//!     logger.warn("This is a warning message.");
//!     logger.close()
//! }
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        ErrorContext, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, Result, Sink, SourceLocation, TimestampFormat,
    };
    pub use crate::sinks::{ConsoleSink, FileSink};
}

pub use crate::core::{
    ErrorContext, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, Result, Sink, SourceLocation, TimestampFormat,
};
pub use sinks::{ConsoleSink, FileSink};
