//! File sink implementation

use crate::core::{LogLevel, LogRecord, LoggerConfig, LoggerError, Result, Sink};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};

/// Append-only text file sink, flushed after every record.
///
/// The sink observes its owner's configuration through a `Weak` link: it can
/// read the threshold but never keeps the configuration (or the logger that
/// owns it) alive. Once the owner is gone the sink behaves as closed.
pub struct FileSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    owner: Weak<LoggerConfig>,
}

impl FileSink {
    /// Create the log directory (with parents) and open the log file for appending
    pub fn open(config: &Arc<LoggerConfig>) -> Result<Self> {
        let path = config.log_path();

        fs::create_dir_all(&config.log_dir).map_err(|e| {
            LoggerError::io_operation(
                "creating log directory",
                config.log_dir.display().to_string(),
                e,
            )
        })?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::io_operation("opening log file", path.display().to_string(), e))?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
            owner: Arc::downgrade(config),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.writer.is_none() || self.owner.strong_count() == 0
    }

    /// Whether the owner's threshold lets `level` through
    pub fn accepts(&self, level: LogLevel) -> bool {
        self.owner
            .upgrade()
            .is_some_and(|config| level >= config.level)
    }
}

impl Sink for FileSink {
    fn write(&mut self, record: &LogRecord) -> Result<()> {
        if self.owner.strong_count() == 0 {
            return Err(LoggerError::LoggerClosed);
        }
        if !self.accepts(record.level()) {
            return Ok(());
        }

        let writer = self.writer.as_mut().ok_or(LoggerError::LoggerClosed)?;

        let mut line = record.render_plain();
        line.push('\n');

        writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| {
                LoggerError::io_operation("writing log record", self.path.display().to_string(), e)
            })
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        match self.writer.take() {
            Some(mut writer) => {
                writer.flush()?;
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
