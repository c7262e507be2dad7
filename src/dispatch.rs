//! Process-wide logging entry points
//!
//! Thin wrappers over [`LoggerRegistry::global`]. The first call to any of
//! them creates the global registry with a console logger at the `Info`
//! threshold under the empty key.
//!
//! Only [`fatal`] (and [`log_all`] at [`LogLevel::Fatal`]) terminate: after
//! broadcasting they unwind with a [`FatalSignal`](crate::FatalSignal). The
//! formatted variants, [`fatal_f`] included, only broadcast.

use crate::core::{DispatchMetrics, LogLevel, Logger, LoggerRegistry, Result};
use std::fmt::Display;
use std::sync::Arc;

/// Register an additional logger under `key`; see [`LoggerRegistry::register`].
pub fn register_logger(
    key: impl Into<String>,
    logger: Arc<dyn Logger>,
) -> Result<Option<Arc<dyn Logger>>> {
    LoggerRegistry::global().register(key, logger)
}

/// Remove the logger registered under `key`; see [`LoggerRegistry::unregister`].
pub fn unregister_logger(key: &str) -> Result<Arc<dyn Logger>> {
    LoggerRegistry::global().unregister(key)
}

/// Logger registered under `key`, or `None`.
pub fn get_logger(key: &str) -> Option<Arc<dyn Logger>> {
    LoggerRegistry::global().get(key)
}

/// The default console logger.
pub fn default_logger() -> Arc<dyn Logger> {
    LoggerRegistry::global().default_logger()
}

/// Dispatch counters of the global registry.
pub fn metrics() -> &'static DispatchMetrics {
    LoggerRegistry::global().metrics()
}

/// Log `value` at `level` to every registered logger.
///
/// At [`LogLevel::Fatal`] this behaves like [`fatal`]: the unwinding
/// [`FatalSignal`](crate::FatalSignal) carries `value` itself.
pub fn log_all<T: Display + Send + 'static>(level: LogLevel, value: T) {
    let registry = LoggerRegistry::global();
    if level.is_fatal() {
        registry.fatal(value)
    } else {
        registry.log_all(level, &value);
    }
}

/// Log a template with arguments at `level` to every registered logger.
pub fn log_formatted_all(level: LogLevel, format: &str, args: &[&dyn Display]) {
    LoggerRegistry::global().log_formatted_all(level, format, args);
}

pub fn debug(value: impl Display) {
    LoggerRegistry::global().log_all(LogLevel::Debug, &value);
}

pub fn trace(value: impl Display) {
    LoggerRegistry::global().log_all(LogLevel::Trace, &value);
}

pub fn info(value: impl Display) {
    LoggerRegistry::global().log_all(LogLevel::Info, &value);
}

pub fn warning(value: impl Display) {
    LoggerRegistry::global().log_all(LogLevel::Warning, &value);
}

pub fn error(value: impl Display) {
    LoggerRegistry::global().log_all(LogLevel::Error, &value);
}

/// Log `value` at `Fatal` to every logger, then unwind with a
/// [`FatalSignal`](crate::FatalSignal) whose payload is `value`.
///
/// ```should_panic
/// rust_multi_logger::fatal("configuration missing");
/// ```
pub fn fatal<T: Display + Send + 'static>(value: T) -> ! {
    LoggerRegistry::global().fatal(value)
}

/// Log a formatted message at `Debug`.
///
/// ```
/// rust_multi_logger::debug_f("Person: %v, Car: %v", &[&"Michael", &2020]);
/// ```
pub fn debug_f(format: &str, args: &[&dyn Display]) {
    log_formatted_all(LogLevel::Debug, format, args);
}

pub fn trace_f(format: &str, args: &[&dyn Display]) {
    log_formatted_all(LogLevel::Trace, format, args);
}

pub fn info_f(format: &str, args: &[&dyn Display]) {
    log_formatted_all(LogLevel::Info, format, args);
}

pub fn warning_f(format: &str, args: &[&dyn Display]) {
    log_formatted_all(LogLevel::Warning, format, args);
}

pub fn error_f(format: &str, args: &[&dyn Display]) {
    log_formatted_all(LogLevel::Error, format, args);
}

/// Log a formatted message at `Fatal`. Does not terminate.
pub fn fatal_f(format: &str, args: &[&dyn Display]) {
    log_formatted_all(LogLevel::Fatal, format, args);
}
