//! Logger capability and the reusable base behaviour
//!
//! Every destination registered with a [`LoggerRegistry`](super::LoggerRegistry)
//! implements [`Logger`]. Filtering is the logger's own business: the registry
//! hands every message to every logger and each one decides, through
//! [`Logger::is_log_allowed`], whether to write it.
//!
//! [`BaseLogger`] holds the state every sink needs (threshold, optional
//! custom format, stopped flag). A concrete sink embeds one and forwards to
//! it, implementing only the actual write.

use super::{error::Result, log_level::LogLevel, template};
use parking_lot::RwLock;
use std::fmt::{self, Display};
use std::sync::atomic::{AtomicBool, Ordering};

/// Capability set every log destination must provide.
///
/// All methods take `&self` so a logger can be shared as `Arc<dyn Logger>`
/// between the registry and the code that configures it. Implementations must
/// perform the [`is_log_allowed`](Logger::is_log_allowed) check themselves.
///
/// # Examples
///
/// ```
/// use rust_multi_logger::core::{BaseLogger, Logger, LogLevel, Result};
/// use std::fmt::Display;
///
/// struct StderrLogger {
///     base: BaseLogger,
/// }
///
/// impl Logger for StderrLogger {
///     fn log(&self, level: LogLevel, value: &dyn Display) -> Result<()> {
///         if self.base.is_log_allowed(level) {
///             eprintln!("{}", self.base.render(level, value));
///         }
///         Ok(())
///     }
///
///     fn log_formatted(&self, level: LogLevel, format: &str, args: &[&dyn Display]) -> Result<()> {
///         if self.base.is_log_allowed(level) {
///             eprintln!("{}", self.base.render_formatted(format, args));
///         }
///         Ok(())
///     }
///
///     fn level(&self) -> LogLevel { self.base.level() }
///     fn set_level(&self, level: LogLevel) { self.base.set_level(level) }
///     fn start(&self) { self.base.start() }
///     fn stop(&self) { self.base.stop() }
///     fn is_log_allowed(&self, level: LogLevel) -> bool { self.base.is_log_allowed(level) }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Write one value at `level`, using the logger's format or the default
    /// `"<LEVEL>: [<value>]"` layout.
    fn log(&self, level: LogLevel, value: &dyn Display) -> Result<()>;

    /// Write a message built from a caller supplied template and arguments.
    /// The logger's own format is not applied.
    fn log_formatted(&self, level: LogLevel, format: &str, args: &[&dyn Display]) -> Result<()>;

    /// Current threshold.
    fn level(&self) -> LogLevel;

    /// Change the threshold. Messages below it are dropped by this logger.
    fn set_level(&self, level: LogLevel);

    /// Resume writing messages.
    fn start(&self);

    /// Stop writing messages until [`start`](Logger::start) is called.
    fn stop(&self);

    /// `true` when the logger is running and `level` reaches the threshold.
    fn is_log_allowed(&self, level: LogLevel) -> bool;

    /// Short name used in diagnostics.
    fn name(&self) -> &str {
        "logger"
    }
}

impl fmt::Debug for dyn Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name())
            .field("level", &self.level())
            .finish()
    }
}

/// Threshold, format and stop/start state shared by all built-in sinks.
///
/// Threshold changes are visible to other threads immediately, but are not
/// ordered against messages that are already being broadcast. Avoid changing
/// the level from one thread while another is logging if the exact cut-over
/// point matters.
#[derive(Debug)]
pub struct BaseLogger {
    level: RwLock<LogLevel>,
    format: Option<String>,
    stopped: AtomicBool,
}

impl BaseLogger {
    /// Running logger with the default message layout.
    pub fn new(level: LogLevel) -> Self {
        Self {
            level: RwLock::new(level),
            format: None,
            stopped: AtomicBool::new(false),
        }
    }

    /// Running logger with a custom template such as `"***error:'%s'"`.
    /// An empty template selects the default layout.
    pub fn with_format(level: LogLevel, format: impl Into<String>) -> Self {
        let format = format.into();
        Self {
            level: RwLock::new(level),
            format: (!format.is_empty()).then_some(format),
            stopped: AtomicBool::new(false),
        }
    }

    #[inline]
    pub fn is_log_allowed(&self, level: LogLevel) -> bool {
        !self.is_stopped() && level >= *self.level.read()
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    pub fn start(&self) {
        self.stopped.store(false, Ordering::Release);
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Custom template, if one was configured.
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Build the message for a single value.
    pub fn render(&self, level: LogLevel, value: &dyn Display) -> String {
        match self.format {
            Some(ref format) => template::render(format, &[value]),
            None => format!("{}: [{}]", level.to_str(), value),
        }
    }

    /// Build a message from an explicit template; the custom format is ignored.
    pub fn render_formatted(&self, format: &str, args: &[&dyn Display]) -> String {
        template::render(format, args)
    }
}

impl Default for BaseLogger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}
