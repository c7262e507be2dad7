//! Logger implementations

pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod memory;

pub use console::{ConsoleLogger, ConsoleTarget};
#[cfg(feature = "file")]
pub use file::{FileLogger, FileOptions};
pub use memory::MemoryLogger;

// Re-export the capability for implementors of custom loggers
pub use crate::core::{BaseLogger, Logger};
