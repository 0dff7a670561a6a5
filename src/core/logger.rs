//! Main logger implementation
//!
//! A [`Logger`] filters each submission against its threshold and, when the
//! submission passes, builds a [`LogRecord`] and hands it to every registered
//! handler in registration order, on the calling thread.
//!
//! Every logging call hands its message back to the caller, so a call can be
//! inlined into an expression:
//!
//! ```
//! use leveled_log::prelude::*;
//!
//! let logger = Logger::new("app", "INFO")?;
//! let port = logger.info(8080)?;
//! assert_eq!(port, 8080);
//!
//! // A producer only runs when the level is enabled
//! let skipped = logger.debug_lazy(|| "expensive".to_string())?;
//! assert_eq!(skipped, None);
//! # Ok::<(), leveled_log::LoggerError>(())
//! ```

use super::{
    error::Result,
    handler::SharedHandler,
    log_level::{level_name_for, numeric_level_for, LogLevel},
    log_record::LogRecord,
    log_value::Loggable,
    metrics::LoggerMetrics,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Minimum severity a logger records, kept as a level and its registered name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Threshold {
    level: u32,
    name: &'static str,
}

impl Threshold {
    fn from_level(level: u32) -> Result<Self> {
        Ok(Self {
            level,
            name: level_name_for(level)?,
        })
    }

    fn from_name(name: &str) -> Result<Self> {
        Self::from_level(numeric_level_for(name)?)
    }
}

/// Leveled logger
///
/// The threshold and handler list may be changed at any time through `&self`;
/// each is guarded by its own lock, so a `Logger` can be shared across threads.
/// A submission reads the threshold once and dispatches to the handler list as
/// it stood when the record was built.
pub struct Logger {
    name: String,
    threshold: RwLock<Threshold>,
    handlers: RwLock<Vec<SharedHandler>>,
    /// Metrics for observability (accepted, suppressed, handler failures)
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger with no handlers
    ///
    /// Any name is accepted, including the empty string. Fails with
    /// [`LoggerError::UnknownLevelName`](super::LoggerError::UnknownLevelName)
    /// if `threshold_name` is not a registered level.
    pub fn new(name: impl Into<String>, threshold_name: &str) -> Result<Self> {
        Self::with_handlers(name, threshold_name, Vec::new())
    }

    pub fn with_handlers(
        name: impl Into<String>,
        threshold_name: &str,
        handlers: Vec<SharedHandler>,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            threshold: RwLock::new(Threshold::from_name(threshold_name)?),
            handlers: RwLock::new(handlers),
            metrics: LoggerMetrics::new(),
        })
    }

    /// Create a logger from a deserialized configuration
    pub fn from_config(config: &LoggerConfig, handlers: Vec<SharedHandler>) -> Result<Self> {
        LoggerBuilder::from_config(config).handlers(handlers).build()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold_level(&self) -> u32 {
        self.threshold.read().level
    }

    pub fn threshold_name(&self) -> &'static str {
        self.threshold.read().name
    }

    pub fn set_threshold(&self, level: LogLevel) {
        *self.threshold.write() = Threshold {
            level: level.value(),
            name: level.to_str(),
        };
    }

    /// Change the threshold by numeric level; the name follows
    pub fn set_threshold_level(&self, level: u32) -> Result<()> {
        *self.threshold.write() = Threshold::from_level(level)?;
        Ok(())
    }

    /// Change the threshold by level name; the numeric level follows
    pub fn set_threshold_name(&self, name: &str) -> Result<()> {
        *self.threshold.write() = Threshold::from_name(name)?;
        Ok(())
    }

    /// Handles to the registered handlers, in registration order
    pub fn handlers(&self) -> Vec<SharedHandler> {
        self.handlers.read().clone()
    }

    pub fn set_handlers(&self, handlers: Vec<SharedHandler>) {
        *self.handlers.write() = handlers;
    }

    pub fn add_handler(&self, handler: SharedHandler) {
        self.handlers.write().push(handler);
    }

    pub fn clear_handlers(&self) {
        self.handlers.write().clear();
    }

    /// Whether a submission at `level` would pass the threshold
    #[inline]
    pub fn is_enabled(&self, level: impl Into<u32>) -> bool {
        self.threshold.read().level <= level.into()
    }

    /// Get the logger metrics
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Log a literal value and hand it back
    ///
    /// When `level` is below the threshold nothing is formatted or dispatched
    /// and `message` is returned untouched. Otherwise the message is coerced
    /// to text, a record is built with `args` as-is, and every handler accepts
    /// it in registration order. The first handler error aborts the fan-out
    /// and is returned; later handlers are not called.
    pub fn submit<T: Loggable>(
        &self,
        level: impl Into<u32>,
        message: T,
        args: Vec<Value>,
    ) -> Result<T> {
        let level = level.into();
        if !self.accept_level(level) {
            return Ok(message);
        }

        let text = message.to_log_text()?;
        self.dispatch(level, text, args)?;
        Ok(message)
    }

    /// Log a lazily produced value
    ///
    /// The producer runs exactly once if `level` passes the threshold and
    /// never otherwise. Returns `None` for a suppressed submission, since no
    /// value was produced, and `Some(value)` for an accepted one.
    pub fn submit_lazy<T, F>(
        &self,
        level: impl Into<u32>,
        producer: F,
        args: Vec<Value>,
    ) -> Result<Option<T>>
    where
        T: Loggable,
        F: FnOnce() -> T,
    {
        let level = level.into();
        if !self.accept_level(level) {
            return Ok(None);
        }

        let value = producer();
        let text = value.to_log_text()?;
        self.dispatch(level, text, args)?;
        Ok(Some(value))
    }

    fn accept_level(&self, level: u32) -> bool {
        let enabled = self.is_enabled(level);
        if enabled {
            self.metrics.record_accepted();
        } else {
            self.metrics.record_suppressed();
        }
        enabled
    }

    fn dispatch(&self, level: u32, message: String, args: Vec<Value>) -> Result<()> {
        let record = LogRecord::from_parts(message, args, level, &self.name)?;

        // Snapshot so a handler may reconfigure this logger without deadlocking
        let handlers = self.handlers();
        for handler in &handlers {
            if let Err(e) = handler.accept(&record) {
                self.metrics.record_handler_failure();
                return Err(e);
            }
        }

        self.metrics.record_dispatched();
        Ok(())
    }

    #[inline]
    pub fn debug<T: Loggable>(&self, message: T) -> Result<T> {
        self.submit(LogLevel::Debug, message, Vec::new())
    }

    #[inline]
    pub fn info<T: Loggable>(&self, message: T) -> Result<T> {
        self.submit(LogLevel::Info, message, Vec::new())
    }

    #[inline]
    pub fn warning<T: Loggable>(&self, message: T) -> Result<T> {
        self.submit(LogLevel::Warning, message, Vec::new())
    }

    #[inline]
    pub fn error<T: Loggable>(&self, message: T) -> Result<T> {
        self.submit(LogLevel::Error, message, Vec::new())
    }

    #[inline]
    pub fn critical<T: Loggable>(&self, message: T) -> Result<T> {
        self.submit(LogLevel::Critical, message, Vec::new())
    }

    #[inline]
    pub fn debug_lazy<T: Loggable, F: FnOnce() -> T>(&self, producer: F) -> Result<Option<T>> {
        self.submit_lazy(LogLevel::Debug, producer, Vec::new())
    }

    #[inline]
    pub fn info_lazy<T: Loggable, F: FnOnce() -> T>(&self, producer: F) -> Result<Option<T>> {
        self.submit_lazy(LogLevel::Info, producer, Vec::new())
    }

    #[inline]
    pub fn warning_lazy<T: Loggable, F: FnOnce() -> T>(&self, producer: F) -> Result<Option<T>> {
        self.submit_lazy(LogLevel::Warning, producer, Vec::new())
    }

    #[inline]
    pub fn error_lazy<T: Loggable, F: FnOnce() -> T>(&self, producer: F) -> Result<Option<T>> {
        self.submit_lazy(LogLevel::Error, producer, Vec::new())
    }

    #[inline]
    pub fn critical_lazy<T: Loggable, F: FnOnce() -> T>(&self, producer: F) -> Result<Option<T>> {
        self.submit_lazy(LogLevel::Critical, producer, Vec::new())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers: Vec<String> = self
            .handlers
            .read()
            .iter()
            .map(|h| h.name().to_string())
            .collect();
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("threshold", &self.threshold_name())
            .field("handlers", &handlers)
            .finish()
    }
}

/// Serializable logger settings
///
/// ```
/// use leveled_log::{Logger, LoggerConfig};
///
/// let config: LoggerConfig = serde_json::from_str(r#"{"name": "db", "level": "warning"}"#)?;
/// let logger = Logger::from_config(&config, Vec::new())?;
/// assert_eq!(logger.threshold_name(), "WARNING");
/// # Ok::<(), leveled_log::LoggerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub name: String,
    #[serde(default = "LoggerConfig::default_level")]
    pub level: String,
}

impl LoggerConfig {
    fn default_level() -> String {
        LogLevel::default().to_str().to_string()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use leveled_log::prelude::*;
/// use std::sync::Arc;
///
/// let memory = Arc::new(MemoryHandler::new());
/// let logger = Logger::builder("worker")
///     .level(LogLevel::Debug)
///     .handler(memory.clone())
///     .build()?;
///
/// logger.debug("ready")?;
/// assert_eq!(memory.messages(), vec!["ready".to_string()]);
/// # Ok::<(), leveled_log::LoggerError>(())
/// ```
pub struct LoggerBuilder {
    name: String,
    level: LevelSpec,
    handlers: Vec<SharedHandler>,
}

enum LevelSpec {
    Level(LogLevel),
    Value(u32),
    Name(String),
}

impl LoggerBuilder {
    /// Create a new builder at the default `INFO` threshold
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: LevelSpec::Level(LogLevel::default()),
            handlers: Vec::new(),
        }
    }

    /// Start from deserialized settings
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(config.name.clone()).level_name(&config.level)
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = LevelSpec::Level(level);
        self
    }

    /// Set the threshold by numeric level, checked in `build`
    #[must_use = "builder methods return a new value"]
    pub fn level_value(mut self, level: u32) -> Self {
        self.level = LevelSpec::Value(level);
        self
    }

    /// Set the threshold by level name, checked in `build`
    #[must_use = "builder methods return a new value"]
    pub fn level_name(mut self, name: &str) -> Self {
        self.level = LevelSpec::Name(name.to_string());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn handler(mut self, handler: SharedHandler) -> Self {
        self.handlers.push(handler);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn handlers(mut self, handlers: impl IntoIterator<Item = SharedHandler>) -> Self {
        self.handlers.extend(handlers);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        let threshold = match self.level {
            LevelSpec::Level(level) => Threshold {
                level: level.value(),
                name: level.to_str(),
            },
            LevelSpec::Value(level) => Threshold::from_level(level)?,
            LevelSpec::Name(name) => Threshold::from_name(&name)?,
        };

        Ok(Logger {
            name: self.name,
            threshold: RwLock::new(threshold),
            handlers: RwLock::new(self.handlers),
            metrics: LoggerMetrics::new(),
        })
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Handler, LogRecord, LoggerError};
    use parking_lot::Mutex;
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Default)]
    struct Capture {
        records: Mutex<Vec<LogRecord>>,
    }

    impl Handler for Capture {
        fn accept(&self, record: &LogRecord) -> Result<()> {
            self.records.lock().push(record.clone());
            Ok(())
        }
    }

    fn capture_logger(threshold: &str) -> (Logger, Arc<Capture>) {
        let capture = Arc::new(Capture::default());
        let handler: SharedHandler = capture.clone();
        let logger = Logger::with_handlers("test", threshold, vec![handler]).unwrap();
        (logger, capture)
    }

    #[test]
    fn test_new_resolves_threshold() {
        let logger = Logger::new("app", "warning").unwrap();
        assert_eq!(logger.name(), "app");
        assert_eq!(logger.threshold_level(), 30);
        assert_eq!(logger.threshold_name(), "WARNING");
        assert!(logger.handlers().is_empty());
    }

    #[test]
    fn test_new_unknown_threshold() {
        let err = Logger::new("app", "VERBOSE").unwrap_err();
        assert!(matches!(err, LoggerError::UnknownLevelName { .. }));
    }

    #[test]
    fn test_threshold_stays_in_sync() {
        let logger = Logger::new("app", "INFO").unwrap();

        logger.set_threshold_level(40).unwrap();
        assert_eq!(logger.threshold_name(), "ERROR");

        logger.set_threshold_name("debug").unwrap();
        assert_eq!(logger.threshold_level(), 10);

        logger.set_threshold(LogLevel::Critical);
        assert_eq!(logger.threshold_level(), 50);
        assert_eq!(logger.threshold_name(), "CRITICAL");
    }

    #[test]
    fn test_failed_threshold_change_keeps_previous() {
        let logger = Logger::new("app", "INFO").unwrap();
        assert!(logger.set_threshold_level(33).is_err());
        assert!(logger.set_threshold_name("LOUD").is_err());
        assert_eq!(logger.threshold_level(), 20);
        assert_eq!(logger.threshold_name(), "INFO");
    }

    #[test]
    fn test_literal_pass_through() {
        let (logger, capture) = capture_logger("INFO");

        assert_eq!(logger.debug(7i32).unwrap(), 7);
        assert!(capture.records.lock().is_empty());

        assert_eq!(logger.info(7i32).unwrap(), 7);
        let records = capture.records.lock();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message(), "7");
        assert_eq!(records[0].level_name(), "INFO");
        assert_eq!(records[0].logger_name(), "test");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let (logger, capture) = capture_logger("WARNING");
        logger.warning("at threshold").unwrap();
        assert_eq!(capture.records.lock().len(), 1);
    }

    #[test]
    fn test_lazy_suppressed_never_runs() {
        let (logger, capture) = capture_logger("ERROR");
        let mut calls = 0;

        let result = logger
            .info_lazy(|| {
                calls += 1;
                "expensive"
            })
            .unwrap();

        assert_eq!(result, None);
        assert_eq!(calls, 0);
        assert!(capture.records.lock().is_empty());
    }

    #[test]
    fn test_lazy_accepted_runs_once() {
        let (logger, capture) = capture_logger("DEBUG");
        let mut calls = 0;

        let result = logger
            .error_lazy(|| {
                calls += 1;
                vec![1, 2]
            })
            .unwrap();

        assert_eq!(result, Some(vec![1, 2]));
        assert_eq!(calls, 1);
        assert_eq!(capture.records.lock()[0].message(), "[1,2]");
    }

    #[test]
    fn test_args_carried_unstringified() {
        let (logger, capture) = capture_logger("DEBUG");
        logger
            .submit(LogLevel::Info, "login", vec![json!(42), json!({"user": "ada"})])
            .unwrap();

        let records = capture.records.lock();
        assert_eq!(records[0].arguments(), vec![json!(42), json!({"user": "ada"})]);
    }

    #[test]
    fn test_submit_unknown_level_when_enabled() {
        let (logger, capture) = capture_logger("DEBUG");
        let err = logger.submit(35u32, "odd", Vec::new()).unwrap_err();
        assert!(matches!(err, LoggerError::UnknownLevel { level: 35 }));
        assert!(capture.records.lock().is_empty());
    }

    #[test]
    fn test_submit_unknown_level_when_suppressed() {
        let (logger, _capture) = capture_logger("ERROR");
        assert_eq!(logger.submit(35u32, "odd", Vec::new()).unwrap(), "odd");
    }

    #[test]
    fn test_handler_can_reconfigure_logger() {
        let logger = Arc::new(Logger::new("app", "DEBUG").unwrap());
        let inner = Arc::downgrade(&logger);
        logger.add_handler(Arc::new(move |_record: &LogRecord| -> Result<()> {
            if let Some(logger) = inner.upgrade() {
                logger.set_threshold(LogLevel::Error);
                logger.clear_handlers();
            }
            Ok(())
        }));

        logger.info("first").unwrap();
        assert_eq!(logger.threshold_name(), "ERROR");
        assert!(logger.handlers().is_empty());
    }

    #[test]
    fn test_metrics_track_submissions() {
        let (logger, _capture) = capture_logger("INFO");
        logger.debug("dropped").unwrap();
        logger.info("kept").unwrap();
        logger.debug_lazy(|| "dropped").unwrap();

        let metrics = logger.metrics();
        assert_eq!(metrics.accepted(), 1);
        assert_eq!(metrics.suppressed(), 2);
        assert_eq!(metrics.dispatched(), 1);
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder("svc").build().unwrap();
        assert_eq!(logger.threshold_name(), "INFO");
        assert!(logger.handlers().is_empty());
    }

    #[test]
    fn test_builder_level_variants() {
        let logger = Logger::builder("svc").level_value(50).build().unwrap();
        assert_eq!(logger.threshold_name(), "CRITICAL");

        let err = Logger::builder("svc").level_value(51).build().unwrap_err();
        assert!(err.is_unknown_level());

        let err = Logger::builder("svc").level_name("LOUD").build().unwrap_err();
        assert!(err.is_unknown_level());
    }

    #[test]
    fn test_empty_name_accepted_by_every_constructor() {
        let built = Logger::builder("").build().unwrap();
        let direct = Logger::new("", "INFO").unwrap();
        let config = LoggerConfig {
            name: String::new(),
            level: "INFO".to_string(),
        };
        let configured = Logger::from_config(&config, Vec::new()).unwrap();

        assert_eq!(built.name(), "");
        assert_eq!(direct.name(), built.name());
        assert_eq!(configured.name(), built.name());
    }

    #[test]
    fn test_config_default_level() {
        let config: LoggerConfig = serde_json::from_str(r#"{"name": "db"}"#).unwrap();
        assert_eq!(config.level, "INFO");
        let logger = Logger::from_config(&config, Vec::new()).unwrap();
        assert_eq!(logger.name(), "db");
        assert_eq!(logger.threshold_level(), 20);
    }

    #[test]
    fn test_debug_output() {
        let (logger, _capture) = capture_logger("INFO");
        let rendered = format!("{:?}", logger);
        assert!(rendered.contains("\"test\""));
        assert!(rendered.contains("INFO"));
    }
}
