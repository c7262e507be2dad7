//! # Rust Multi Logger
//!
//! One call site, many destinations. A log call is broadcast to every
//! logger registered in a process-wide registry; each logger applies its own
//! threshold, format and on/off state.
//!
//! ## Features
//!
//! - **Multiple Loggers**: console, file, in-memory and custom loggers side by side
//! - **Independent Thresholds**: each logger filters by its own [`LogLevel`]
//! - **Fatal Termination**: [`fatal`] reaches every logger before unwinding
//! - **Thread Safe**: the registry is created once and guarded by a lock
//!
//! ## Quick start
//!
//! ```
//! use rust_multi_logger::prelude::*;
//! use std::sync::Arc;
//!
//! rust_multi_logger::info("Service started");
//!
//! let audit = Arc::new(MemoryLogger::with_level_and_format(LogLevel::Error, "***error:'%s'"));
//! rust_multi_logger::register_logger("audit", audit.clone()).unwrap();
//!
//! rust_multi_logger::error("Disk failure");
//! assert!(audit.contains("***error:'Disk failure'"));
//! # rust_multi_logger::unregister_logger("audit").unwrap();
//! ```

pub mod appenders;
pub mod core;
pub mod dispatch;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "file")]
    pub use crate::appenders::{FileLogger, FileOptions};
    pub use crate::appenders::{ConsoleLogger, ConsoleTarget, MemoryLogger};
    pub use crate::core::{
        BaseLogger, DispatchMetrics, FatalSignal, LogLevel, Logger, LoggerError, LoggerRegistry,
        RegistryBuilder, Result, TimestampFormat, DEFAULT_LOGGER_KEY,
    };
}

#[cfg(feature = "file")]
pub use crate::appenders::{FileLogger, FileOptions};
pub use crate::appenders::{ConsoleLogger, ConsoleTarget, MemoryLogger};
pub use crate::core::{
    BaseLogger, DispatchMetrics, FatalSignal, LogLevel, Logger, LoggerError, LoggerRegistry,
    RegistryBuilder, Result, TimestampFormat, DEFAULT_LOGGER_KEY,
};
pub use crate::dispatch::{
    debug, debug_f, default_logger, error, error_f, fatal, fatal_f, get_logger, info, info_f,
    log_all, log_formatted_all, metrics, register_logger, trace, trace_f, unregister_logger,
    warning, warning_f,
};
