//! Property-based tests for leveled_log using proptest

use leveled_log::prelude::*;
use proptest::prelude::*;
use std::cell::Cell;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::NotSet),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
        Just(LogLevel::Critical),
    ]
}

fn logger_at(threshold: LogLevel) -> (Logger, Arc<MemoryHandler>) {
    let memory = Arc::new(MemoryHandler::new());
    let logger = Logger::builder("prop")
        .level(threshold)
        .handler(memory.clone())
        .build()
        .unwrap();
    (logger, memory)
}

// ============================================================================
// Level Registry Tests
// ============================================================================

proptest! {
    /// Name and numeric level lookups agree in both directions
    #[test]
    fn test_registry_roundtrip(level in any_level()) {
        let name = leveled_log::level_name_for(level.value()).unwrap();
        prop_assert_eq!(leveled_log::numeric_level_for(name).unwrap(), level.value());
    }

    /// Values outside the registry are rejected
    #[test]
    fn test_unregistered_values_rejected(value in 0u32..1000) {
        prop_assume!(LogLevel::from_value(value).is_none());
        prop_assert!(leveled_log::level_name_for(value).is_err());
    }

    /// Parsing accepts case-insensitive input
    #[test]
    fn test_level_parse_case_insensitive(level in any_level(), lower in any::<bool>()) {
        let input = if lower {
            level.to_str().to_lowercase()
        } else {
            level.to_str().to_string()
        };
        prop_assert_eq!(input.parse::<LogLevel>().unwrap(), level);
    }
}

// ============================================================================
// Filtering Tests
// ============================================================================

proptest! {
    /// A submission is recorded exactly when its level meets the threshold
    #[test]
    fn test_filter_matches_ordering(
        threshold in any_level(),
        level in any_level(),
        message in "[a-z]{1,16}",
    ) {
        let (logger, memory) = logger_at(threshold);

        let returned = logger.submit(level, message.clone(), Vec::new()).unwrap();

        prop_assert_eq!(&returned, &message);
        prop_assert_eq!(memory.len(), usize::from(level >= threshold));
    }

    /// Producers run once when enabled and never when suppressed
    #[test]
    fn test_producer_runs_iff_enabled(
        threshold in any_level(),
        level in any_level(),
        value in any::<i64>(),
    ) {
        let (logger, memory) = logger_at(threshold);
        let calls = Cell::new(0u32);

        let returned = logger
            .submit_lazy(level, || {
                calls.set(calls.get() + 1);
                value
            }, Vec::new())
            .unwrap();

        if level >= threshold {
            prop_assert_eq!(returned, Some(value));
            prop_assert_eq!(calls.get(), 1);
            prop_assert_eq!(memory.messages(), vec![value.to_string()]);
        } else {
            prop_assert_eq!(returned, None);
            prop_assert_eq!(calls.get(), 0);
            prop_assert!(memory.is_empty());
        }
    }

    /// Text messages are recorded verbatim
    #[test]
    fn test_text_recorded_verbatim(message in ".*") {
        let (logger, memory) = logger_at(LogLevel::NotSet);
        logger.critical(message.as_str()).unwrap();
        prop_assert_eq!(memory.messages(), vec![message]);
    }

    /// Numbers are recorded using their display form
    #[test]
    fn test_numbers_use_display(value in any::<i128>()) {
        let (logger, memory) = logger_at(LogLevel::Debug);
        logger.info(value).unwrap();
        prop_assert_eq!(memory.messages(), vec![value.to_string()]);
    }
}

// ============================================================================
// Record Tests
// ============================================================================

proptest! {
    /// Reading arguments never exposes internal state
    #[test]
    fn test_arguments_copy_isolated(values in prop::collection::vec(any::<i64>(), 0..8)) {
        let args: Vec<serde_json::Value> = values.iter().map(|v| serde_json::json!(v)).collect();
        let record = LogRecord::new("msg", &args, LogLevel::Info.value(), "prop").unwrap();

        let mut read = record.arguments();
        read.push(serde_json::json!("extra"));

        prop_assert_eq!(record.arguments(), args);
    }
}
