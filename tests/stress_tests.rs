//! Stress tests for concurrent registry use
//!
//! These tests verify:
//! - The global registry is created exactly once under concurrent first use
//! - Registration and unregistration can run while other threads broadcast
//! - Concurrent file logging never interleaves partial lines

use rust_multi_logger::appenders::{FileLogger, FileOptions, MemoryLogger};
use rust_multi_logger::core::{LogLevel, Logger, LoggerRegistry, TimestampFormat};
use std::sync::{Arc, Barrier};
use std::thread;
use tempfile::TempDir;

#[test]
fn test_global_registry_created_once() {
    const THREADS: usize = 16;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                LoggerRegistry::global() as *const LoggerRegistry as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();

    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(LoggerRegistry::global().default_logger().level(), LogLevel::Info);
}

#[test]
fn test_register_while_broadcasting() {
    let default = Arc::new(MemoryLogger::with_level(LogLevel::All));
    let registry = Arc::new(LoggerRegistry::with_default_logger(default.clone()));

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..250 {
                    registry.log_all(LogLevel::Info, &format!("thread {} message {}", t, i));
                }
            })
        })
        .collect();

    let churners: Vec<_> = (0..2)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..200 {
                    let key = format!("churn-{}-{}", t, i % 5);
                    registry
                        .register(key.clone(), Arc::new(MemoryLogger::new()))
                        .expect("non-empty key");
                    let _ = registry.unregister(&key);
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(churners) {
        handle.join().expect("thread panicked");
    }

    // The default logger is never removed, so it sees every message.
    assert_eq!(default.lines().len(), 1000);
    assert_eq!(registry.metrics().broadcasts(), 1000);
    assert_eq!(registry.metrics().failures(), 0);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_level_changes_during_logging() {
    let default = Arc::new(MemoryLogger::with_level(LogLevel::Info));
    let registry = Arc::new(LoggerRegistry::with_default_logger(default.clone()));

    let toggler = {
        let logger = registry.default_logger();
        thread::spawn(move || {
            for i in 0..500 {
                logger.set_level(if i % 2 == 0 { LogLevel::All } else { LogLevel::Fatal });
                if i % 7 == 0 {
                    logger.stop();
                } else {
                    logger.start();
                }
            }
            logger.set_level(LogLevel::Info);
            logger.start();
        })
    };

    let writer = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            for i in 0..500 {
                registry.log_all(LogLevel::Warning, &i);
            }
        })
    };

    toggler.join().expect("toggler panicked");
    writer.join().expect("writer panicked");

    assert!(default.lines().len() <= 500);
    assert_eq!(default.received(), 500);
    assert_eq!(default.level(), LogLevel::Info);
}

#[test]
fn test_concurrent_file_logging() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Arc::new(
        FileLogger::with_options(
            LogLevel::Info,
            "",
            FileOptions::new(temp_dir.path(), "stress", ".log"),
        )
        .expect("valid options")
        .with_timestamp_format(TimestampFormat::Disabled),
    );
    let registry = Arc::new(LoggerRegistry::with_default_logger(logger.clone()));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..50 {
                    registry.log_all(LogLevel::Info, &format!("t{}-m{}", t, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    let content = std::fs::read_to_string(logger.path()).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 400);
    assert!(lines
        .iter()
        .all(|line| line.starts_with("INFO: [t") && line.ends_with(']')));
}
