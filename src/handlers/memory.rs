//! In-memory handler that keeps every record it accepts

use crate::core::{Handler, LogLevel, LogRecord, Result};
use parking_lot::Mutex;

/// Collects accepted records in arrival order
///
/// Useful for tests and for surfacing recent log lines inside an application.
/// Share one instance between several loggers to collect all of their output
/// in a single place.
#[derive(Debug, Default)]
pub struct MemoryHandler {
    min_level: u32,
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip records below this level, independent of the logger's threshold
    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level.value();
        self
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|record| record.message().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Handler for MemoryHandler {
    fn accept(&self, record: &LogRecord) -> Result<()> {
        if record.level() >= self.min_level {
            self.records.lock().push(record.clone());
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
