//! # Leveled Log
//!
//! A leveled logging facade: a named logger holds a minimum severity and a
//! list of shared handlers, filters every submission against that severity
//! and fans accepted records out to its handlers.
//!
//! ## Features
//!
//! - **Pass-through calls**: every logging call returns the logged value
//! - **Lazy messages**: producers run only when the level is enabled
//! - **Shared handlers**: one handler instance may serve many loggers
//! - **Thread Safe**: threshold and handlers are guarded for concurrent use

pub mod core;
pub mod handlers;
pub mod macros;

#[doc(hidden)]
pub use serde_json;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::handlers::ConsoleHandler;
    pub use crate::handlers::MemoryHandler;
    pub use crate::core::{
        Handler, LogLevel, LogRecord, LogValue, Loggable, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, Opaque, Result, SharedHandler, Structured, Symbol,
        TimestampFormat,
    };
}

#[cfg(feature = "console")]
pub use crate::handlers::ConsoleHandler;
pub use crate::handlers::MemoryHandler;
pub use crate::core::{
    level_name_for, numeric_level_for, Handler, LogLevel, LogRecord, LogValue, Loggable, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Opaque, Result, SharedHandler,
    Structured, Symbol, TimestampFormat, ABSENT, UNREPRESENTABLE,
};
