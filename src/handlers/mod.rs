//! Handler implementations

#[cfg(feature = "console")]
pub mod console;
pub mod memory;

#[cfg(feature = "console")]
pub use console::ConsoleHandler;
pub use memory::MemoryHandler;

pub use crate::core::{Handler, SharedHandler};
