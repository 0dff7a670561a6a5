//! Timestamp formatting for handler output
//!
//! Records carry a `DateTime<Utc>`; handlers that write text pick one of
//! these formats to render it.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use leveled_log::TimestampFormat;
/// use chrono::Utc;
///
/// let timestamp = TimestampFormat::Iso8601.format(&Utc::now())?;
/// assert!(timestamp.ends_with('Z'));
///
/// assert!(TimestampFormat::Custom("%Q".to_string()).validate().is_err());
/// # Ok::<(), leveled_log::LoggerError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 format: `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Check that a `Custom` pattern only uses known strftime specifiers
    pub fn validate(&self) -> Result<()> {
        match self {
            TimestampFormat::Custom(format_str)
                if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) =>
            {
                Err(invalid_pattern(format_str))
            }
            _ => Ok(()),
        }
    }

    /// Render `datetime`, failing instead of panicking on a bad `Custom` pattern
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        Ok(match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                self.validate()?;
                let mut out = String::new();
                write!(out, "{}", datetime.format(format_str))
                    .map_err(|_| invalid_pattern(format_str))?;
                out
            }
        })
    }
}

fn invalid_pattern(format_str: &str) -> LoggerError {
    LoggerError::config(
        "TimestampFormat",
        format!("invalid strftime pattern '{}'", format_str),
    )
}
