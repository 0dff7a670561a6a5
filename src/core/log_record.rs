//! Log record structure

use super::error::Result;
use super::log_level::level_name_for;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Immutable snapshot of one accepted logging event
///
/// Fields are private and only reachable through accessors; reference-typed
/// fields are handed out as fresh copies so a reader can never reach into
/// the stored record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    message: String,
    arguments: Vec<Value>,
    level: u32,
    level_name: &'static str,
    logger_name: String,
    timestamp: DateTime<Utc>,
}

impl LogRecord {
    /// Build a record, resolving the level name through the level registry
    ///
    /// Fails with [`LoggerError::UnknownLevel`](super::LoggerError::UnknownLevel)
    /// when `level` is not registered. The clock is read exactly once, here.
    pub fn new(
        message: impl Into<String>,
        arguments: &[Value],
        level: u32,
        logger_name: impl Into<String>,
    ) -> Result<Self> {
        let logger_name: String = logger_name.into();
        Self::from_parts(message.into(), arguments.to_vec(), level, &logger_name)
    }

    pub(crate) fn from_parts(
        message: String,
        arguments: Vec<Value>,
        level: u32,
        logger_name: &str,
    ) -> Result<Self> {
        let level_name = level_name_for(level)?;

        Ok(Self {
            message,
            arguments,
            level,
            level_name,
            logger_name: logger_name.to_string(),
            timestamp: Utc::now(),
        })
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extra arguments, as a fresh copy on every call
    pub fn arguments(&self) -> Vec<Value> {
        self.arguments.clone()
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn level_name(&self) -> &str {
        self.level_name
    }

    #[inline]
    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }

    /// Capture time of the record, returned by value
    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Arguments joined as compact JSON, for line-oriented handlers
    pub fn format_arguments(&self) -> String {
        self.arguments
            .iter()
            .map(|arg| match arg {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
