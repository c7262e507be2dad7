//! In-memory logger
//!
//! Keeps written messages in memory instead of doing I/O. Handy as a
//! custom destination in tests and for hosts that want to show recent log
//! lines themselves.
//!
//! By default every line is kept. A long-running host should set a cap with
//! [`MemoryLogger::with_max_lines`]; the oldest lines are then dropped first.

use crate::core::{BaseLogger, LogLevel, Logger, Result};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug)]
pub struct MemoryLogger {
    base: BaseLogger,
    lines: Mutex<VecDeque<String>>,
    max_lines: Option<usize>,
    received: AtomicU64,
}

impl MemoryLogger {
    /// Threshold `Info`, default message layout.
    pub fn new() -> Self {
        Self::from_base(BaseLogger::default())
    }

    pub fn with_level(level: LogLevel) -> Self {
        Self::from_base(BaseLogger::new(level))
    }

    pub fn with_level_and_format(level: LogLevel, format: impl Into<String>) -> Self {
        Self::from_base(BaseLogger::with_format(level, format))
    }

    fn from_base(base: BaseLogger) -> Self {
        Self {
            base,
            lines: Mutex::new(VecDeque::new()),
            max_lines: None,
            received: AtomicU64::new(0),
        }
    }

    /// Keep only the newest `max_lines` messages.
    #[must_use]
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    pub fn max_lines(&self) -> Option<usize> {
        self.max_lines
    }

    /// Messages retained so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().iter().cloned().collect()
    }

    /// All messages joined by newlines, with a trailing newline.
    pub fn contents(&self) -> String {
        self.lines
            .lock()
            .iter()
            .fold(String::new(), |mut acc, line| {
                acc.push_str(line);
                acc.push('\n');
                acc
            })
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|line| line.contains(needle))
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }

    /// Number of log calls this logger was handed, including filtered ones.
    pub fn received(&self) -> u64 {
        self.received.load(Ordering::Relaxed)
    }

    fn push(&self, message: String) {
        let mut lines = self.lines.lock();
        lines.push_back(message);
        if let Some(max) = self.max_lines {
            while lines.len() > max {
                lines.pop_front();
            }
        }
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, value: &dyn Display) -> Result<()> {
        self.received.fetch_add(1, Ordering::Relaxed);
        if self.base.is_log_allowed(level) {
            self.push(self.base.render(level, value));
        }
        Ok(())
    }

    fn log_formatted(&self, level: LogLevel, format: &str, args: &[&dyn Display]) -> Result<()> {
        self.received.fetch_add(1, Ordering::Relaxed);
        if self.base.is_log_allowed(level) {
            self.push(self.base.render_formatted(format, args));
        }
        Ok(())
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
        "memory"
    }
}
