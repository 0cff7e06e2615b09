//! Scoped logger example
//!
//! The log file is released when the scope ends, even if the work inside it panics.
//!
//! Run with: cargo run --example scoped_logger

use rust_dual_logger::prelude::*;

fn main() -> Result<()> {
    let config = LoggerConfig {
        log_file_name: "scoped.txt".to_string(),
        level: LogLevel::Debug,
        ..LoggerConfig::default()
    };

    let processed = Logger::from_config(config)?.scope(|logger| {
        let mut processed = 0;
        for item in 1..=5 {
            logger.debug(format!("Processing item {}/5", item));
            if item == 3 {
                logger.warn("Item 3 took longer than expected");
            }
            processed += 1;
        }
        processed
    });

    println!("processed {} items", processed);
    Ok(())
}
