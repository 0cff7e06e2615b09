//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Rejected configuration value, with the values that would have been accepted
    #[error("Invalid configuration for {component}: {message} (expected one of: {})", .expected.join(", "))]
    InvalidConfiguration {
        component: String,
        message: String,
        expected: Vec<String>,
    },

    /// IO error with context (directory or file could not be created/opened)
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON config error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Record emitted after `close()`
    #[error("Logger already closed")]
    LoggerClosed,
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config<I, S>(component: impl Into<String>, message: impl Into<String>, expected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
            expected: expected.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Valid values carried by an `InvalidConfiguration` error
    pub fn expected_values(&self) -> &[String] {
        match self {
            LoggerError::InvalidConfiguration { expected, .. } => expected,
            _ => &[],
        }
    }
}
