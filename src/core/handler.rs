//! Handler trait for log record destinations

use super::{error::Result, log_record::LogRecord};
use std::sync::Arc;

/// Receives every record a logger accepts
///
/// Handlers are shared between loggers, so `accept` takes `&self`; stateful
/// handlers keep their state behind interior mutability.
pub trait Handler: Send + Sync {
    fn accept(&self, record: &LogRecord) -> Result<()>;

    fn name(&self) -> &str {
        "handler"
    }
}

/// Non-owning handle to a handler that may be registered on several loggers
pub type SharedHandler = Arc<dyn Handler>;

impl<F> Handler for F
where
    F: Fn(&LogRecord) -> Result<()> + Send + Sync,
{
    fn accept(&self, record: &LogRecord) -> Result<()> {
        self(record)
    }

    fn name(&self) -> &str {
        "closure"
    }
}
