//! Logger registry and broadcast dispatch
//!
//! A [`LoggerRegistry`] maps string keys to [`Logger`] instances and hands
//! every log call to all of them. The empty key holds the default logger: it
//! exists from construction, cannot be replaced through [`register`] and
//! cannot be removed through [`unregister`], but it can be stopped.
//!
//! The process-wide registry behind the crate-level functions is created on
//! first use by [`LoggerRegistry::global`]. Construction runs exactly once even
//! when several threads race for it; every caller observes the same instance.
//!
//! [`register`]: LoggerRegistry::register
//! [`unregister`]: LoggerRegistry::unregister

use super::{
    error::{LoggerError, Result},
    fatal::FatalSignal,
    log_level::LogLevel,
    logger::Logger,
    metrics::DispatchMetrics,
};
use crate::appenders::ConsoleLogger;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, OnceLock};

/// Key of the default logger.
pub const DEFAULT_LOGGER_KEY: &str = "";

static GLOBAL_REGISTRY: OnceLock<LoggerRegistry> = OnceLock::new();

pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, Arc<dyn Logger>>>,
    default_logger: Arc<dyn Logger>,
    metrics: DispatchMetrics,
}

impl LoggerRegistry {
    /// Registry holding only a console logger at the `Info` threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_logger(Arc::new(ConsoleLogger::new()))
    }

    /// Registry whose default entry is `logger`.
    #[must_use]
    pub fn with_default_logger(logger: Arc<dyn Logger>) -> Self {
        let mut loggers: HashMap<String, Arc<dyn Logger>> = HashMap::new();
        loggers.insert(DEFAULT_LOGGER_KEY.to_string(), Arc::clone(&logger));
        Self {
            loggers: RwLock::new(loggers),
            default_logger: logger,
            metrics: DispatchMetrics::new(),
        }
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The process-wide registry, created with [`LoggerRegistry::new`] on first access.
    pub fn global() -> &'static LoggerRegistry {
        GLOBAL_REGISTRY.get_or_init(LoggerRegistry::new)
    }

    /// Install `registry` as the process-wide registry.
    ///
    /// Fails if the global registry was already created, either by an earlier
    /// call to this function or by any logging call.
    pub fn init_global(registry: LoggerRegistry) -> Result<&'static LoggerRegistry> {
        GLOBAL_REGISTRY.set(registry).map_err(|_| {
            LoggerError::config("LoggerRegistry", "global registry is already initialized")
        })?;
        Ok(Self::global())
    }

    /// Add `logger` under `key`, replacing any logger already registered there.
    ///
    /// Returns the replaced logger, if any. The empty key is reserved for the
    /// default logger and is rejected with [`LoggerError::EmptyKey`].
    pub fn register(
        &self,
        key: impl Into<String>,
        logger: Arc<dyn Logger>,
    ) -> Result<Option<Arc<dyn Logger>>> {
        let key = key.into();
        if key.is_empty() {
            return Err(LoggerError::EmptyKey);
        }
        Ok(self.loggers.write().insert(key, logger))
    }

    /// Remove and return the logger registered under `key`.
    ///
    /// Unknown keys fail with [`LoggerError::LoggerNotFound`]. The default
    /// logger fails with [`LoggerError::DefaultLoggerProtected`]; stop it
    /// instead.
    pub fn unregister(&self, key: &str) -> Result<Arc<dyn Logger>> {
        if key == DEFAULT_LOGGER_KEY {
            return Err(LoggerError::DefaultLoggerProtected);
        }
        self.loggers
            .write()
            .remove(key)
            .ok_or_else(|| LoggerError::not_found(key))
    }

    /// Logger registered under `key`, or `None`.
    pub fn get(&self, key: &str) -> Option<Arc<dyn Logger>> {
        self.loggers.read().get(key).cloned()
    }

    pub fn default_logger(&self) -> Arc<dyn Logger> {
        Arc::clone(&self.default_logger)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.loggers.read().contains_key(key)
    }

    /// Registered keys, in no particular order. Includes the empty default key.
    pub fn keys(&self) -> Vec<String> {
        self.loggers.read().keys().cloned().collect()
    }

    /// Number of registered loggers, the default one included.
    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    /// Always `false`: the default logger cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }

    pub fn metrics(&self) -> &DispatchMetrics {
        &self.metrics
    }

    /// Send `value` to every registered logger at `level`.
    ///
    /// Each logger applies its own threshold and stopped state. If `level` is
    /// [`LogLevel::Fatal`], the call unwinds with a [`FatalSignal`] once every
    /// logger has been called, whether or not any of them wrote the message.
    pub fn log_all(&self, level: LogLevel, value: &dyn Display) {
        self.broadcast(level, |logger| logger.log(level, value));
        if level.is_fatal() {
            let message = value.to_string();
            self.raise_fatal(message.clone(), Box::new(message));
        }
    }

    /// Send a template and its arguments to every registered logger at `level`.
    ///
    /// Unlike [`log_all`](Self::log_all) this never raises a [`FatalSignal`],
    /// even at [`LogLevel::Fatal`].
    pub fn log_formatted_all(&self, level: LogLevel, format: &str, args: &[&dyn Display]) {
        self.broadcast(level, |logger| logger.log_formatted(level, format, args));
    }

    /// Broadcast `value` at [`LogLevel::Fatal`], then unwind with a
    /// [`FatalSignal`] carrying `value` itself as payload.
    pub fn fatal<T: Display + Send + 'static>(&self, value: T) -> ! {
        self.broadcast(LogLevel::Fatal, |logger| logger.log(LogLevel::Fatal, &value));
        let message = value.to_string();
        self.raise_fatal(message, Box::new(value))
    }

    fn raise_fatal(&self, message: String, payload: Box<dyn std::any::Any + Send>) -> ! {
        self.metrics.record_fatal();
        FatalSignal::new(message, payload).raise()
    }

    /// Loggers are copied out of the map first so no lock is held while they
    /// write; a logger may itself use the registry.
    fn snapshot(&self) -> Vec<(String, Arc<dyn Logger>)> {
        self.loggers
            .read()
            .iter()
            .map(|(key, logger)| (key.clone(), Arc::clone(logger)))
            .collect()
    }

    /// Call `emit` on every logger, isolating failures and panics so the
    /// remaining loggers still receive the message.
    fn broadcast<F>(&self, level: LogLevel, emit: F)
    where
        F: Fn(&dyn Logger) -> Result<()>,
    {
        self.metrics.record_broadcast();

        for (key, logger) in self.snapshot() {
            let result = panic::catch_unwind(AssertUnwindSafe(|| emit(logger.as_ref())));

            match result {
                Ok(Ok(())) => {
                    self.metrics.record_delivered();
                }
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Logger {} ({}) failed at {}: {}",
                        display_key(&key),
                        logger.name(),
                        level,
                        e
                    );
                    self.metrics.record_failure();
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Logger {} ({}) panicked at {}: {}. \
                         Other loggers continue to function.",
                        display_key(&key),
                        logger.name(),
                        level,
                        panic_message(panic_info.as_ref())
                    );
                    self.metrics.record_panic();
                }
            }
        }
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("keys", &self.keys())
            .field("metrics", &self.metrics)
            .finish()
    }
}

fn display_key(key: &str) -> String {
    if key.is_empty() {
        "<default>".to_string()
    } else {
        format!("'{}'", key)
    }
}

fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Builder for [`LoggerRegistry`]
///
/// # Example
///
/// ```
/// use rust_multi_logger::prelude::*;
/// use std::sync::Arc;
///
/// let registry = LoggerRegistry::builder()
///     .default_logger(Arc::new(MemoryLogger::with_level(LogLevel::All)))
///     .logger("errors", Arc::new(MemoryLogger::with_level(LogLevel::Error)))
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    default_logger: Option<Arc<dyn Logger>>,
    loggers: Vec<(String, Arc<dyn Logger>)>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the console default with `logger`.
    #[must_use]
    pub fn default_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.default_logger = Some(logger);
        self
    }

    /// Register an additional logger. Later entries with the same key win.
    #[must_use]
    pub fn logger(mut self, key: impl Into<String>, logger: Arc<dyn Logger>) -> Self {
        self.loggers.push((key.into(), logger));
        self
    }

    /// Build the registry. Fails with [`LoggerError::EmptyKey`] if an
    /// additional logger was given the empty key.
    pub fn build(self) -> Result<LoggerRegistry> {
        let registry = match self.default_logger {
            Some(logger) => LoggerRegistry::with_default_logger(logger),
            None => LoggerRegistry::new(),
        };
        for (key, logger) in self.loggers {
            registry.register(key, logger)?;
        }
        Ok(registry)
    }
}
