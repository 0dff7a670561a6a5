//! Log level definitions and the level registry
//!
//! Levels are numeric severities; higher is more severe. The registry maps
//! between a level's numeric value and its symbolic name.

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LogLevel {
    NotSet = 0,
    Debug = 10,
    #[default]
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

impl LogLevel {
    /// Every registered level, ordered by severity
    pub const ALL: [LogLevel; 6] = [
        LogLevel::NotSet,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    #[inline]
    pub const fn value(self) -> u32 {
        self as u32
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::NotSet => "NOTSET",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Look up the registered level with this numeric value
    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.value() == value)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::NotSet => BrightBlack,
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Critical => BrightRed,
        }
    }
}

impl From<LogLevel> for u32 {
    fn from(level: LogLevel) -> Self {
        level.value()
    }
}

impl TryFrom<u32> for LogLevel {
    type Error = LoggerError;

    fn try_from(value: u32) -> Result<Self> {
        LogLevel::from_value(value).ok_or_else(|| LoggerError::unknown_level(value))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "NOTSET" => Ok(LogLevel::NotSet),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            _ => Err(LoggerError::unknown_level_name(s)),
        }
    }
}

/// Symbolic name registered for a numeric level
pub fn level_name_for(level: u32) -> Result<&'static str> {
    LogLevel::try_from(level).map(|level| level.to_str())
}

/// Numeric value registered for a level name
pub fn numeric_level_for(name: &str) -> Result<u32> {
    name.parse::<LogLevel>().map(LogLevel::value)
}
