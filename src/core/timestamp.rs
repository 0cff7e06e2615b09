//! Timestamp formatting utilities
//!
//! Records are stamped in local time. The default `Classic` format is the
//! second-resolution `YYYY-MM-DD|HH:MM:SS` layout used by the log file.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// strftime pattern behind [`TimestampFormat::Classic`]
pub const CLASSIC_PATTERN: &str = "%Y-%m-%d|%H:%M:%S";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_dual_logger::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Classic.format(&at), "2025-01-08|10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08|10:30:45`
    #[default]
    Classic,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+01:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Whether every specifier of a `Custom` pattern is known to chrono
    pub fn is_valid(&self) -> bool {
        match self {
            TimestampFormat::Custom(pattern) => {
                !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
            }
            _ => true,
        }
    }

    /// Render `datetime`; an unusable `Custom` pattern falls back to `Classic`
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Classic => datetime.format(CLASSIC_PATTERN).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::Custom(format_str) if self.is_valid() => {
                datetime.format(format_str).to_string()
            }
            TimestampFormat::Custom(_) => datetime.format(CLASSIC_PATTERN).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(123)
    }

    #[test]
    fn test_classic_format() {
        assert_eq!(
            TimestampFormat::Classic.format(&fixed_datetime()),
            "2025-01-08|10:30:45"
        );
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert!(result.starts_with("2025-01-08T10:30:45.123"));
    }

    #[test]
    fn test_unix_format() {
        let result = TimestampFormat::Unix.format(&fixed_datetime());
        let parsed: i64 = result.parse().expect("valid unix timestamp");
        assert_eq!(parsed, fixed_datetime().timestamp());
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_rfc3339_format() {
        let at = fixed_datetime();
        let result = TimestampFormat::Rfc3339.format(&at);
        assert!(result.starts_with("2025-01-08T10:30:45"));
        let parsed = DateTime::parse_from_rfc3339(&result).expect("valid RFC 3339");
        assert_eq!(parsed.timestamp_millis(), at.timestamp_millis());
    }

    #[test]
    fn test_invalid_custom_pattern() {
        let format = TimestampFormat::Custom("%Q".to_string());
        assert!(!format.is_valid());
        assert!(TimestampFormat::Custom("%Y %H".to_string()).is_valid());
        assert!(TimestampFormat::Classic.is_valid());

        // never panics, even if a bad pattern slips past validation
        assert_eq!(format.format(&fixed_datetime()), "2025-01-08|10:30:45");
    }

    #[test]
    fn test_default_is_classic() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Classic);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TimestampFormat::Classic).expect("serialize");
        assert_eq!(json, "\"Classic\"");

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
