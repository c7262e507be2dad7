//! Core logger types and traits

pub mod error;
pub mod fatal;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod registry;
pub mod template;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use fatal::FatalSignal;
pub use log_level::LogLevel;
pub use logger::{BaseLogger, Logger};
pub use metrics::DispatchMetrics;
pub use registry::{LoggerRegistry, RegistryBuilder, DEFAULT_LOGGER_KEY};
pub use timestamp::TimestampFormat;
