//! Logger configuration
//!
//! Configuration is fixed once a [`Logger`](super::Logger) is built. It can be
//! assembled in code through [`LoggerBuilder`](super::LoggerBuilder) or loaded
//! from JSON:
//!
//! ```
//! use rust_dual_logger::{LogLevel, LoggerConfig};
//!
//! let config = LoggerConfig::from_json_str(r#"{ "log_dir": "my_logs", "level": "info" }"#).unwrap();
//! assert_eq!(config.level, LogLevel::Info);
//! assert_eq!(config.log_file_name, "log.txt");
//! ```

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";
pub const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub log_file_name: String,
    pub log_dir: PathBuf,
    /// Threshold; records below it are discarded
    pub level: LogLevel,
    pub timestamp_format: TimestampFormat,
    /// Colorize console output
    pub use_colors: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_file_name: DEFAULT_LOG_FILE_NAME.to_string(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            level: LogLevel::Debug,
            timestamp_format: TimestampFormat::default(),
            use_colors: true,
        }
    }
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation("reading logger config", path.display().to_string(), e)
        })?;
        Self::from_json_str(&raw)
    }

    /// `<log_dir>/<log_file_name>`
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file_name)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.log_file_name.trim().is_empty() {
            return Err(LoggerError::config(
                "log_file_name",
                "file name must not be empty",
                [DEFAULT_LOG_FILE_NAME],
            ));
        }
        if let TimestampFormat::Custom(ref pattern) = self.timestamp_format {
            if !self.timestamp_format.is_valid() {
                return Err(LoggerError::config(
                    "timestamp_format",
                    format!("unsupported strftime pattern '{}'", pattern),
                    ["Classic", "Iso8601", "Rfc3339", "Unix", "Custom(<strftime pattern>)"],
                ));
            }
        }
        Ok(())
    }
}
