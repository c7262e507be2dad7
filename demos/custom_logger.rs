//! Custom logger example
//!
//! Implements `Logger` on top of `BaseLogger` and registers it next to the
//! default console logger.
//!
//! Run with: cargo run --example custom_logger

use rust_multi_logger::prelude::*;
use std::fmt::Display;
use std::sync::Arc;

/// Writes messages as tab-separated `level<TAB>message` records on stderr.
struct TsvLogger {
    base: BaseLogger,
}

impl TsvLogger {
    fn new(level: LogLevel) -> Self {
        Self {
            base: BaseLogger::new(level),
        }
    }

    fn write(&self, level: LogLevel, message: &str) {
        eprintln!("{}\t{}", level.name(), message);
    }
}

impl Logger for TsvLogger {
    fn log(&self, level: LogLevel, value: &dyn Display) -> Result<()> {
        if self.base.is_log_allowed(level) {
            self.write(level, &value.to_string());
        }
        Ok(())
    }

    fn log_formatted(&self, level: LogLevel, format: &str, args: &[&dyn Display]) -> Result<()> {
        if self.base.is_log_allowed(level) {
            self.write(level, &self.base.render_formatted(format, args));
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
        "tsv"
    }
}

fn main() -> Result<()> {
    rust_multi_logger::register_logger("tsv", Arc::new(TsvLogger::new(LogLevel::Warning)))?;

    rust_multi_logger::info("console only");
    rust_multi_logger::warning("console and tsv");
    rust_multi_logger::error_f("code=%d reason=%q", &[&503, &"upstream timeout"]);

    let metrics = rust_multi_logger::metrics();
    println!(
        "broadcasts={} delivered={} failures={}",
        metrics.broadcasts(),
        metrics.delivered(),
        metrics.failures()
    );

    Ok(())
}
