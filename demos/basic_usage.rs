//! Basic logger usage example
//!
//! Demonstrates the default console logger, thresholds and stop/start.
//!
//! Run with: cargo run --example basic_usage

use rust_multi_logger::prelude::*;
use rust_multi_logger::{info, infof};

fn main() -> Result<()> {
    println!("=== Rust Multi Logger - Basic Usage Example ===\n");

    println!("1. Default logger (threshold INFO):");
    rust_multi_logger::debug("This is a debug message (hidden)");
    rust_multi_logger::trace("This is a trace message (hidden)");
    rust_multi_logger::info("This is an info message");
    rust_multi_logger::warning("This is a warning message");
    rust_multi_logger::error("This is an error message");

    println!("\n2. Threshold lowered to ALL:");
    let default = rust_multi_logger::default_logger();
    let previous = default.level();
    default.set_level(LogLevel::All);
    rust_multi_logger::debug("Debug message (visible)");
    rust_multi_logger::trace("Trace message (visible)");
    default.set_level(previous);

    println!("\n3. Formatted messages:");
    rust_multi_logger::info_f("Person: %v, Car: %v", &[&"Michael", &2020]);
    infof!("%d items processed in %v", 42, "12ms");
    info!("Rust formatting works too: {:>6.2}", 12.3456);

    println!("\n4. Stop and start:");
    default.stop();
    rust_multi_logger::info("Message 1 (hidden)");
    default.start();
    rust_multi_logger::info("Message 2");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
