//! File logging example
//!
//! Registers two file loggers next to the default console logger.
//!
//! Run with: cargo run --example file_logging

use rust_multi_logger::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Multi Logger - File Logging Example ===\n");

    let dir = std::env::temp_dir();

    // Everything from INFO up, default layout
    let all = Arc::new(FileLogger::with_options(
        LogLevel::Info,
        "",
        FileOptions::new(&dir, "mLog", ".log"),
    )?);
    rust_multi_logger::register_logger("file", all.clone())?;

    // Errors only, custom layout, one file per worker
    let errors = Arc::new(FileLogger::with_options(
        LogLevel::Error,
        "***error:'%s'",
        FileOptions::new(&dir, "mLog", ".txt").with_correlation_id("worker-1"),
    )?);
    rust_multi_logger::register_logger("txt_file", errors.clone())?;

    rust_multi_logger::info("Application started");
    rust_multi_logger::warning("Cache is cold");
    rust_multi_logger::error("Failed to reach upstream");

    println!("\nAll messages: {}", all.path().display());
    println!("Errors only:  {}", errors.path().display());

    rust_multi_logger::unregister_logger("txt_file")?;
    rust_multi_logger::unregister_logger("file")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
