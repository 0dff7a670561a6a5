//! Core logger types and traits

pub mod error;
pub mod handler;
pub mod log_level;
pub mod log_record;
pub mod log_value;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use handler::{Handler, SharedHandler};
pub use log_level::{level_name_for, numeric_level_for, LogLevel};
pub use log_record::LogRecord;
pub use log_value::{LogValue, Loggable, Opaque, Structured, Symbol, ABSENT, UNREPRESENTABLE};
pub use logger::{Logger, LoggerBuilder, LoggerConfig};
pub use metrics::LoggerMetrics;
pub use timestamp::TimestampFormat;
