//! Causing-error context attached to error records
//!
//! The logger never walks the call stack itself. Callers hand it a
//! [`SourceLocation`] (usually via the [`here!`](crate::here) macro) and a
//! description of the failure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an error was observed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub function: String,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }
}

/// Location plus description of the error that caused an error record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorContext {
    pub location: SourceLocation,
    pub description: String,
}

impl ErrorContext {
    pub fn new(location: SourceLocation, description: impl Into<String>) -> Self {
        Self {
            location,
            description: description.into(),
        }
    }

    /// Build a context from any error value, using its `Display` text as the description
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_dual_logger::{here, ErrorContext};
    ///
    /// let err = "abc".parse::<u32>().unwrap_err();
    /// let ctx = ErrorContext::from_error(&err, here!());
    /// assert_eq!(ctx.description, "invalid digit found in string");
    /// ```
    pub fn from_error<E>(error: &E, location: SourceLocation) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::new(location, error.to_string())
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(File: {}, Line: {}, Function: {}, Error: {})",
            self.location.file, self.location.line, self.location.function, self.description
        )
    }
}
