//! Logging macros with variadic extra arguments.
//!
//! Each macro forwards to [`Logger::submit`](crate::Logger::submit), or to
//! [`Logger::submit_lazy`](crate::Logger::submit_lazy) when the message is
//! written as a `|| expr` producer. Extra arguments after the message are
//! converted with `serde_json::Value::from` and stored unstringified in the
//! record.
//!
//! # Examples
//!
//! ```
//! use leveled_log::prelude::*;
//! use leveled_log::{info, debug};
//!
//! let logger = Logger::new("server", "INFO")?;
//!
//! // Basic logging, value handed back
//! let port = info!(logger, 8080)?;
//! assert_eq!(port, 8080);
//!
//! // With extra arguments
//! info!(logger, "user logged in", "ada", 42)?;
//!
//! // Lazy message, skipped at a disabled level
//! let dump = debug!(logger, || format!("{:?}", vec![0u8; 1024]))?;
//! assert!(dump.is_none());
//! # Ok::<(), leveled_log::LoggerError>(())
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use leveled_log::prelude::*;
/// # let logger = Logger::new("app", "DEBUG")?;
/// use leveled_log::log;
/// log!(logger, LogLevel::Info, "Simple message")?;
/// log!(logger, LogLevel::Error, "Error code", 500)?;
/// log!(logger, LogLevel::Debug, || "computed".to_string(), true)?;
/// # Ok::<(), leveled_log::LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, || $producer:expr $(, $arg:expr)* $(,)?) => {
        $logger.submit_lazy(
            $level,
            || $producer,
            ::std::vec![$($crate::serde_json::Value::from($arg)),*],
        )
    };
    ($logger:expr, $level:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $logger.submit(
            $level,
            $message,
            ::std::vec![$($crate::serde_json::Value::from($arg)),*],
        )
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($rest)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($rest)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($rest)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($rest)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($rest)+)
    };
}
