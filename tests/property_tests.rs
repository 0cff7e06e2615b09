//! Property-based tests for rust_dual_logger using proptest

use proptest::prelude::*;
use rust_dual_logger::prelude::*;
use std::fs;
use tempfile::TempDir;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]
}

/// Randomly re-case every character of a level name
fn mixed_case(name: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), name.len()).prop_map(move |upper| {
        name.chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
        prop_assert_eq!(format!("{}", level), level.to_str());
    }

    #[test]
    fn test_log_level_ordering_follows_rank(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, a.rank() <= b.rank());
        prop_assert_eq!(a < b, a.rank() < b.rank());
    }

    #[test]
    fn test_level_parse_ignores_case(
        (name, input) in prop_oneof![
            Just("DEBUG"), Just("INFO"), Just("WARN"), Just("ERROR")
        ].prop_flat_map(|name| (Just(name), mixed_case(name)))
    ) {
        let parsed: LogLevel = input.parse().unwrap();
        prop_assert_eq!(parsed.to_str(), name);
    }

    #[test]
    fn test_unknown_level_rejected(input in "[a-zA-Z]{1,10}") {
        let known = ["DEBUG", "INFO", "WARN", "ERROR"];
        prop_assume!(!known.contains(&input.to_uppercase().as_str()));

        let err = input.parse::<LogLevel>().unwrap_err();
        let is_invalid_config = matches!(err, LoggerError::InvalidConfiguration { .. });
        prop_assert!(is_invalid_config);
    }

    /// A record reaches the file iff its rank is at least the threshold
    #[test]
    fn test_threshold_gates_file_output(
        threshold in any_level(),
        emitted in proptest::collection::vec(any_level(), 0..16),
    ) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let logger = Logger::builder()
            .dir(temp_dir.path())
            .min_level(threshold)
            .console_writer(std::io::sink())
            .build()
            .expect("Failed to build logger");

        for (i, level) in emitted.iter().enumerate() {
            logger.log(*level, format!("message {}", i));
        }

        let content = fs::read_to_string(logger.log_path()).unwrap();
        let expected: Vec<String> = emitted
            .iter()
            .enumerate()
            .filter(|(_, level)| level.rank() >= threshold.rank())
            .map(|(i, level)| format!("[{}] message {}", level, i))
            .collect();
        let lines: Vec<&str> = content.lines().collect();

        prop_assert_eq!(lines.len(), expected.len());
        for (line, want) in lines.iter().zip(&expected) {
            prop_assert!(line.ends_with(want.as_str()), "{} vs {}", line, want);
        }
        prop_assert_eq!(
            logger.metrics().filtered_count() as usize,
            emitted.len() - expected.len()
        );
    }

    /// Arbitrary messages never split a record across lines
    #[test]
    fn test_any_message_is_one_line(message in any::<String>()) {
        let record = LogRecord::new(LogLevel::Info, &message, &TimestampFormat::Classic);
        prop_assert_eq!(record.render_plain().lines().count(), 1);
    }
}
