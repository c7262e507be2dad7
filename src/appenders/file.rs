//! File logger implementation

use crate::core::{BaseLogger, LogLevel, Logger, LoggerError, Result, TimestampFormat};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Where a [`FileLogger`] writes and how its file is named.
///
/// The file name is `<file_prefix>_<pid><file_extension>`, or
/// `<file_prefix>_<pid>_<correlation_id><file_extension>` when a correlation
/// id is set, so separate loggers of one process can keep separate files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOptions {
    /// Existing directory the process can write to
    pub directory: PathBuf,
    /// Short prefix made of characters valid in file names
    pub file_prefix: String,
    /// Extension including the leading dot, e.g. `".log"`
    pub file_extension: String,
    /// Optional caller-chosen id appended to the file name
    pub correlation_id: Option<String>,
}

impl FileOptions {
    pub fn new(
        directory: impl Into<PathBuf>,
        file_prefix: impl Into<String>,
        file_extension: impl Into<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            file_prefix: file_prefix.into(),
            file_extension: file_extension.into(),
            correlation_id: None,
        }
    }

    #[must_use]
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    pub fn file_name(&self) -> String {
        match self.correlation_id {
            Some(ref id) => format!(
                "{}_{}_{}{}",
                self.file_prefix,
                std::process::id(),
                id,
                self.file_extension
            ),
            None => format!(
                "{}_{}{}",
                self.file_prefix,
                std::process::id(),
                self.file_extension
            ),
        }
    }

    /// Full path of the log file.
    pub fn path(&self) -> PathBuf {
        self.directory.join(self.file_name())
    }

    /// Reject name parts that would escape the configured directory.
    pub fn validate(&self) -> Result<()> {
        let has_separator = |s: &str| s.contains('/') || s.contains('\\');

        if has_separator(&self.file_prefix) {
            return Err(LoggerError::config(
                "FileOptions",
                format!("file prefix '{}' contains a path separator", self.file_prefix),
            ));
        }
        if !self.file_extension.is_empty() && !self.file_extension.starts_with('.') {
            return Err(LoggerError::config(
                "FileOptions",
                format!("file extension '{}' must start with '.'", self.file_extension),
            ));
        }
        if has_separator(&self.file_extension) {
            return Err(LoggerError::config(
                "FileOptions",
                format!("file extension '{}' contains a path separator", self.file_extension),
            ));
        }
        if let Some(ref id) = self.correlation_id {
            if has_separator(id) {
                return Err(LoggerError::config(
                    "FileOptions",
                    format!("correlation id '{}' contains a path separator", id),
                ));
            }
        }
        Ok(())
    }
}

impl Default for FileOptions {
    /// Current directory, prefix `mLog`, extension `.log`.
    fn default() -> Self {
        Self::new(".", "mLog", ".log")
    }
}

/// Appends each message as one line to a file.
///
/// The file is opened, locked, written and closed on every call, so several
/// loggers (or processes) may point at the same file and a crash never loses
/// buffered output.
pub struct FileLogger {
    base: BaseLogger,
    options: FileOptions,
    timestamp_format: TimestampFormat,
}

impl FileLogger {
    /// `Info` threshold, default layout and [`FileOptions::default`].
    pub fn new() -> Self {
        Self {
            base: BaseLogger::default(),
            options: FileOptions::default(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// File logger with the given threshold, template and options.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rust_multi_logger::appenders::{FileLogger, FileOptions};
    /// use rust_multi_logger::LogLevel;
    ///
    /// let logger = FileLogger::with_options(
    ///     LogLevel::Error,
    ///     "***error:'%s'",
    ///     FileOptions::new("./", "mLog", ".txt"),
    /// )
    /// .unwrap();
    /// ```
    pub fn with_options(
        level: LogLevel,
        format: impl Into<String>,
        options: FileOptions,
    ) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            base: BaseLogger::with_format(level, format),
            options,
            timestamp_format: TimestampFormat::default(),
        })
    }

    /// Set the timestamp format for this logger
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn options(&self) -> &FileOptions {
        &self.options
    }

    /// Path of the file this logger appends to.
    pub fn path(&self) -> PathBuf {
        self.options.path()
    }

    fn write_line(&self, message: &str) -> Result<()> {
        let mut line = self.timestamp_format.stamp(message)?;
        line.push('\n');

        let path = self.options.path();
        let display = path.display().to_string();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::io_operation("opening log file", &display, e))?;

        file.lock_exclusive()
            .map_err(|e| LoggerError::io_operation("locking log file", &display, e))?;

        let written = file
            .write_all(line.as_bytes())
            .map_err(|e| LoggerError::io_operation("writing log file", &display, e));

        // closing the handle would release the lock too
        let _ = FileExt::unlock(&file);
        written
    }
}

impl Default for FileLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for FileLogger {
    fn log(&self, level: LogLevel, value: &dyn Display) -> Result<()> {
        if !self.base.is_log_allowed(level) {
            return Ok(());
        }
        self.write_line(&self.base.render(level, value))
    }

    fn log_formatted(&self, level: LogLevel, format: &str, args: &[&dyn Display]) -> Result<()> {
        if !self.base.is_log_allowed(level) {
            return Ok(());
        }
        self.write_line(&self.base.render_formatted(format, args))
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
        "file"
    }
}
