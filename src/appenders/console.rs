//! Console logger implementation

use crate::core::{BaseLogger, LogLevel, Logger, Result, TimestampFormat};
#[cfg(feature = "console")]
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::io::Write;

/// Stream a [`ConsoleLogger`] writes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Writes each message as one line on stdout (or stderr).
///
/// Without a custom format a line looks like `2025/01/08 10:30:45 INFO: [message]`.
pub struct ConsoleLogger {
    base: BaseLogger,
    target: ConsoleTarget,
    timestamp_format: TimestampFormat,
    #[cfg(feature = "console")]
    use_colors: bool,
}

impl ConsoleLogger {
    /// Console logger at the `Info` threshold with the default layout.
    pub fn new() -> Self {
        Self::from_base(BaseLogger::default())
    }

    /// Console logger with the given threshold and message template, e.g.
    /// `ConsoleLogger::with_level_and_format(LogLevel::Debug, "***debug:'%s'")`.
    pub fn with_level_and_format(level: LogLevel, format: impl Into<String>) -> Self {
        Self::from_base(BaseLogger::with_format(level, format))
    }

    fn from_base(base: BaseLogger) -> Self {
        Self {
            base,
            target: ConsoleTarget::default(),
            timestamp_format: TimestampFormat::default(),
            #[cfg(feature = "console")]
            use_colors: false,
        }
    }

    /// Select stdout or stderr
    ///
    /// # Example
    ///
    /// ```
    /// use rust_multi_logger::appenders::{ConsoleLogger, ConsoleTarget};
    ///
    /// let logger = ConsoleLogger::new().with_target(ConsoleTarget::Stderr);
    /// ```
    #[must_use]
    pub fn with_target(mut self, target: ConsoleTarget) -> Self {
        self.target = target;
        self
    }

    /// Set the timestamp format for this logger
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_multi_logger::appenders::ConsoleLogger;
    /// use rust_multi_logger::TimestampFormat;
    ///
    /// let logger = ConsoleLogger::new()
    ///     .with_timestamp_format(TimestampFormat::Iso8601);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Colour each line by its level
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    fn write_line(&self, level: LogLevel, message: &str) -> Result<()> {
        let line = self.timestamp_format.stamp(message)?;
        #[cfg(feature = "console")]
        let line = if self.use_colors {
            line.color(level.color_code()).to_string()
        } else {
            line
        };
        #[cfg(not(feature = "console"))]
        let _ = level;

        match self.target {
            ConsoleTarget::Stdout => writeln!(std::io::stdout().lock(), "{}", line)?,
            ConsoleTarget::Stderr => writeln!(std::io::stderr().lock(), "{}", line)?,
        }
        Ok(())
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, value: &dyn Display) -> Result<()> {
        if !self.base.is_log_allowed(level) {
            return Ok(());
        }
        self.write_line(level, &self.base.render(level, value))
    }

    fn log_formatted(&self, level: LogLevel, format: &str, args: &[&dyn Display]) -> Result<()> {
        if !self.base.is_log_allowed(level) {
            return Ok(());
        }
        self.write_line(level, &self.base.render_formatted(format, args))
    }

    fn level(&self) -> LogLevel {
        self.base.level()
    }

    fn set_level(&self, level: LogLevel) {
        self.base.set_level(level)
    }

    fn start(&self) {
        self.base.start()
    }

    fn stop(&self) {
        self.base.stop()
    }

    fn is_log_allowed(&self, level: LogLevel) -> bool {
        self.base.is_log_allowed(level)
    }

    fn name(&self) -> &str {
        "console"
    }
}
