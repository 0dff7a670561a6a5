//! Basic logger usage example
//!
//! Demonstrates threshold filtering, pass-through return values, lazy
//! messages and a handler shared between two loggers.
//!
//! Run with: cargo run --example basic_usage

use leveled_log::prelude::*;
use leveled_log::{info, warning};
use std::collections::BTreeMap;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Leveled Log - Basic Usage Example ===\n");

    let console: SharedHandler = Arc::new(ConsoleHandler::new());
    let memory = Arc::new(MemoryHandler::new());

    let logger = Logger::builder("app")
        .level(LogLevel::Debug)
        .handler(Arc::clone(&console))
        .handler(memory.clone())
        .build()?;

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.warning("This is a warning message")?;
    logger.error("This is an error message")?;
    logger.critical("This is a critical message")?;

    println!("\n2. Logging calls hand their value back:");
    let port = logger.info(8080)?;
    println!("   listening on {}", port);

    println!("\n3. Structured values and extra arguments:");
    let mut settings = BTreeMap::new();
    settings.insert("workers", 4);
    settings.insert("backlog", 128);
    logger.info(settings)?;
    warning!(logger, "slow request", "/api/users", 1520)?;

    println!("\n4. Raising the threshold skips lazy work:");
    logger.set_threshold(LogLevel::Warning);
    let dump = logger.debug_lazy(|| {
        println!("   (never printed)");
        "expensive dump"
    })?;
    println!("   lazy debug result: {:?}", dump);
    info!(logger, "hidden at WARNING")?;

    println!("\n5. Sharing a handler between loggers:");
    let db = Logger::with_handlers("db", "INFO", vec![console])?;
    db.info("connected")?;

    println!("\n   app logger kept {} records in memory", memory.len());
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
