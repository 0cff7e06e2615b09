//! Basic logger usage example
//!
//! Demonstrates level filtering with a console and file sink.
//!
//! Run with: cargo run --example basic_usage

use rust_dual_logger::prelude::*;
use rust_dual_logger::{error, here, info};

fn load_settings(path: &str) -> std::result::Result<String, std::io::Error> {
    std::fs::read_to_string(path)
}

fn main() -> Result<()> {
    let logger = Logger::new("logs.txt", "my_logs", "INFO")?;

    logger.debug("This is a debug message."); // below INFO, not printed
    logger.info("This is an info message.");
    logger.warn("This is a warning message.");
    logger.error("This is an error message.");

    let path = "settings.missing";
    if let Err(err) = load_settings(path) {
        error!(logger, cause = err; "could not load {}", path);
    }

    let ctx = ErrorContext::new(here!(), "manually described failure");
    logger.error_with_context("explicit context", ctx);

    info!(logger, "written to {}", logger.log_path().display());
    logger.close()
}
