//! Log record structure

use super::error_context::ErrorContext;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Local};

/// A single accepted event, built once and rendered to every sink.
///
/// The clock is read exactly once per record and the textual stamp is
/// rendered at construction, so every sink prints the same time.
#[derive(Debug, Clone)]
pub struct LogRecord {
    level: LogLevel,
    timestamp: DateTime<Local>,
    stamp: String,
    message: String,
    context: Option<ErrorContext>,
}

impl LogRecord {
    /// Escape backslashes, line breaks and tabs so a record always occupies one line
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\\', "\\\\")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: &str, format: &TimestampFormat) -> Self {
        Self::at(level, message, Local::now(), format)
    }

    /// Build a record for a fixed point in time
    pub fn at(level: LogLevel, message: &str, timestamp: DateTime<Local>, format: &TimestampFormat) -> Self {
        Self {
            level,
            stamp: format.format(&timestamp),
            timestamp,
            message: Self::sanitize_message(message),
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: Option<ErrorContext>) -> Self {
        self.context = context.map(|mut ctx| {
            ctx.location.file = Self::sanitize_message(&ctx.location.file);
            ctx.location.function = Self::sanitize_message(&ctx.location.function);
            ctx.description = Self::sanitize_message(&ctx.description);
            ctx
        });
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }

    /// The rendered timestamp shared by all sinks
    pub fn stamp(&self) -> &str {
        &self.stamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        self.context.as_ref()
    }

    /// `<stamp> [<LEVEL>] <message>[ <context>]`, without a line terminator
    pub fn render_plain(&self) -> String {
        let mut output = format!("{} [{}] {}", self.stamp, self.level, self.message);
        if let Some(ref context) = self.context {
            output.push(' ');
            output.push_str(&context.to_string());
        }
        output
    }
}
