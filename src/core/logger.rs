//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    error_context::ErrorContext,
    log_level::LogLevel,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    sink::Sink,
    timestamp::TimestampFormat,
};
use crate::sinks::{ConsoleSink, FileSink};
use parking_lot::Mutex;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

struct Sinks {
    console: ConsoleSink,
    file: FileSink,
    closed: bool,
}

/// Level-gated logger writing each accepted record to the console and to a file.
///
/// Every call runs on the caller's thread: the record is formatted, written
/// to both sinks and the file is flushed before the call returns. The sink
/// pair sits behind a mutex, so a logger shared between threads never
/// interleaves partial lines.
///
/// # Example
///
/// ```no_run
/// use rust_dual_logger::Logger;
///
/// let logger = Logger::new("logs.txt", "my_logs", "INFO")?;
/// logger.debug("This is a debug message."); // below INFO, discarded
/// logger.info("This is an info message.");
/// logger.close()?;
/// # Ok::<(), rust_dual_logger::LoggerError>(())
/// ```
pub struct Logger {
    config: Arc<LoggerConfig>,
    sinks: Mutex<Sinks>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger writing to `<log_dir>/<log_file_name>`
    ///
    /// `level` is matched case-insensitively against DEBUG, INFO, WARN and
    /// ERROR. An unknown level fails before anything touches the disk.
    pub fn new(
        log_file_name: impl Into<String>,
        log_dir: impl Into<PathBuf>,
        level: &str,
    ) -> Result<Self> {
        Self::builder()
            .file_name(log_file_name)
            .dir(log_dir)
            .level(level)
            .build()
    }

    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        let console = ConsoleSink::with_colors(config.use_colors);
        Self::with_console(config, console)
    }

    fn with_console(config: LoggerConfig, console: ConsoleSink) -> Result<Self> {
        config.validate()?;
        let config = Arc::new(config);
        let file = FileSink::open(&config)?;

        Ok(Self {
            config,
            sinks: Mutex::new(Sinks {
                console,
                file,
                closed: false,
            }),
            metrics: LoggerMetrics::new(),
        })
    }

    /// Write a record to every sink, continuing past a failing sink
    ///
    /// Returns the first failure after all sinks have been tried.
    fn process_sync(sinks: &mut Sinks, record: &LogRecord) -> Result<()> {
        let mut first_error = None;

        let targets: [&mut dyn Sink; 2] = [&mut sinks.console, &mut sinks.file];
        for sink in targets {
            if let Err(e) = sink.write(record) {
                eprintln!("[LOGGER ERROR] {} sink failed: {}", sink.name(), e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.config.level
    }

    pub fn min_level(&self) -> LogLevel {
        self.config.level
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn log_path(&self) -> PathBuf {
        self.config.log_path()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn is_closed(&self) -> bool {
        self.sinks.lock().closed
    }

    /// Log a record and report what happened
    ///
    /// Returns `Ok(false)` when the level is below the threshold (nothing is
    /// formatted or written), `Ok(true)` when both sinks took the record, and
    /// the first sink error otherwise. Emitting after [`close`](Self::close)
    /// fails with [`LoggerError::LoggerClosed`] without touching either sink.
    pub fn try_log(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        context: Option<ErrorContext>,
    ) -> Result<bool> {
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return Ok(false);
        }

        let mut sinks = self.sinks.lock();
        if sinks.closed {
            self.metrics.record_dropped();
            return Err(LoggerError::LoggerClosed);
        }

        let message = message.into();
        let record =
            LogRecord::new(level, &message, &self.config.timestamp_format).with_context(context);

        match Self::process_sync(&mut sinks, &record) {
            Ok(()) => {
                self.metrics.record_logged();
                Ok(true)
            }
            Err(e) => {
                self.metrics.record_dropped();
                Err(e)
            }
        }
    }

    fn emit(&self, level: LogLevel, message: impl Into<String>, context: Option<ErrorContext>) {
        // Failures are already reported per sink and counted as dropped
        let _ = self.try_log(level, message, context);
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.emit(level, message, None);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Error record carrying the location and description of its cause
    pub fn error_with_context(&self, message: impl Into<String>, context: ErrorContext) {
        self.emit(LogLevel::Error, message, Some(context));
    }

    /// Error record with an optional cause; `None` omits the context suffix
    pub fn error_opt(&self, message: impl Into<String>, context: Option<ErrorContext>) {
        self.emit(LogLevel::Error, message, context);
    }

    pub fn flush(&self) -> Result<()> {
        let mut sinks = self.sinks.lock();
        sinks.console.flush()?;
        sinks.file.flush()?;
        Ok(())
    }

    /// Flush and release the log file
    ///
    /// Calling this more than once is a no-op. Dropping the logger closes it
    /// too.
    pub fn close(&self) -> Result<()> {
        let mut sinks = self.sinks.lock();
        if sinks.closed {
            return Ok(());
        }
        sinks.closed = true;

        let console = sinks.console.close();
        let file = sinks.file.close();
        console.and(file)
    }

    /// Run `f` with this logger and close it when `f` returns or unwinds
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rust_dual_logger::Logger;
    ///
    /// let answer = Logger::new("log.txt", "logs", "debug")?.scope(|logger| {
    ///     logger.info("computing");
    ///     42
    /// });
    /// assert_eq!(answer, 42);
    /// # Ok::<(), rust_dual_logger::LoggerError>(())
    /// ```
    pub fn scope<R>(self, f: impl FnOnce(&Logger) -> R) -> R {
        // `self` is dropped on unwind, which closes the file
        let result = f(&self);
        if let Err(e) = self.close() {
            eprintln!("[LOGGER ERROR] Failed to close logger: {}", e);
        }
        result
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            eprintln!("[LOGGER ERROR] Failed to close logger during drop: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```no_run
/// use rust_dual_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .file_name("app.log")
///     .dir("/tmp/app-logs")
///     .level("warn")
///     .timestamp_format(TimestampFormat::Iso8601)
///     .colors(false)
///     .build()?;
/// # Ok::<(), LoggerError>(())
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    level: Option<String>,
    console_writer: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::default())
    }

    /// Start from an existing configuration
    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            level: None,
            console_writer: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.config.log_file_name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.log_dir = dir.into();
        self
    }

    /// Set the threshold from text; parsed (case-insensitively) by `build`
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Set the threshold directly
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self.level = None;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.timestamp_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, use_colors: bool) -> Self {
        self.config.use_colors = use_colors;
        self
    }

    /// Send console output somewhere other than stdout
    #[must_use = "builder methods return a new value"]
    pub fn console_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.console_writer = Some(Box::new(writer));
        self
    }

    /// Build the Logger, creating the log directory and file
    pub fn build(mut self) -> Result<Logger> {
        if let Some(ref level) = self.level {
            self.config.level = level.parse()?;
        }

        let mut console = ConsoleSink::with_colors(self.config.use_colors);
        if let Some(writer) = self.console_writer {
            console = console.with_writer(writer);
        }

        Logger::with_console(self.config, console)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SourceLocation;
    use std::fs;
    use tempfile::TempDir;

    fn quiet_logger(dir: &TempDir, level: &str) -> Logger {
        Logger::builder()
            .dir(dir.path())
            .file_name("unit.log")
            .level(level)
            .console_writer(std::io::sink())
            .build()
            .expect("Failed to build logger")
    }

    #[test]
    fn test_builder_defaults() {
        let builder = LoggerBuilder::default();
        assert_eq!(builder.config, LoggerConfig::default());
        assert!(builder.level.is_none());
    }

    #[test]
    fn test_level_text_parsed_on_build() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let logger = quiet_logger(&dir, "wArN");
        assert_eq!(logger.min_level(), LogLevel::Warn);
        assert!(!logger.is_enabled(LogLevel::Info));
        assert!(logger.is_enabled(LogLevel::Error));
    }

    #[test]
    fn test_min_level_overrides_text() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let logger = Logger::builder()
            .dir(dir.path())
            .level("nonsense")
            .min_level(LogLevel::Error)
            .console_writer(std::io::sink())
            .build()
            .unwrap();
        assert_eq!(logger.min_level(), LogLevel::Error);
    }

    #[test]
    fn test_try_log_reports_filtering() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let logger = quiet_logger(&dir, "INFO");

        assert!(!logger.try_log(LogLevel::Debug, "hidden", None).unwrap());
        assert!(logger.try_log(LogLevel::Info, "shown", None).unwrap());

        assert_eq!(logger.metrics().filtered_count(), 1);
        assert_eq!(logger.metrics().total_logged(), 1);
    }

    #[test]
    fn test_emit_after_close_is_dropped() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let logger = quiet_logger(&dir, "DEBUG");

        logger.info("before");
        logger.close().unwrap();
        logger.info("after");

        assert!(logger.is_closed());
        assert_eq!(logger.metrics().dropped_count(), 1);
        assert!(matches!(
            logger.try_log(LogLevel::Error, "again", None),
            Err(LoggerError::LoggerClosed)
        ));

        let content = fs::read_to_string(logger.log_path()).unwrap();
        assert!(content.contains("before"));
        assert!(!content.contains("after"));
    }

    #[test]
    fn test_error_opt_none_has_no_suffix() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let logger = quiet_logger(&dir, "ERROR");

        logger.error_opt("plain failure", None);
        logger.error_opt(
            "located failure",
            Some(ErrorContext::new(SourceLocation::new("x.rs", 3, "go"), "bad input")),
        );

        let content = fs::read_to_string(logger.log_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[ERROR] plain failure"));
        assert!(lines[1].ends_with(
            "[ERROR] located failure (File: x.rs, Line: 3, Function: go, Error: bad input)"
        ));
    }

    #[test]
    fn test_logger_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Logger>();
    }
}
