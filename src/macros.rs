//! Logging macros for ergonomic message formatting.
//!
//! Two families are provided:
//!
//! - `debug!` .. `fatal!` take Rust `format!` syntax and call the plain
//!   entry points ([`debug`](crate::debug) .. [`fatal`](crate::fatal)).
//! - `debugf!` .. `fatalf!` take a printf-style template followed by the
//!   arguments and call the formatted entry points
//!   ([`debug_f`](crate::debug_f) .. [`fatal_f`](crate::fatal_f)).
//!
//! # Examples
//!
//! ```
//! use rust_multi_logger::{info, infof};
//!
//! let port = 8080;
//! info!("Server listening on port {}", port);
//! infof!("Person: %v, Car: %v", "Michael", 2020);
//! ```

/// Log a `format!`-style message at the given level.
///
/// ```
/// use rust_multi_logger::{log, LogLevel};
/// log!(LogLevel::Warning, "Retry {} of {}", 1, 3);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::log_all($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::debug(format!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::trace(format!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::info(format!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        $crate::warning(format!($($arg)+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::error(format!($($arg)+))
    };
}

/// Log a fatal-level message, then unwind with a `FatalSignal`.
///
/// ```should_panic
/// use rust_multi_logger::fatal;
/// fatal!("Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::fatal(format!($($arg)+))
    };
}

/// Log a printf-style template with arguments at the given level.
///
/// ```
/// use rust_multi_logger::{logf, LogLevel};
/// logf!(LogLevel::Error, "code=%d reason=%s", 500, "internal");
/// ```
#[macro_export]
macro_rules! logf {
    ($level:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_formatted_all(
            $level,
            $format,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}

#[macro_export]
macro_rules! debugf {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf!($crate::LogLevel::Debug, $format $(, $arg)*)
    };
}

#[macro_export]
macro_rules! tracef {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf!($crate::LogLevel::Trace, $format $(, $arg)*)
    };
}

#[macro_export]
macro_rules! infof {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf!($crate::LogLevel::Info, $format $(, $arg)*)
    };
}

#[macro_export]
macro_rules! warningf {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf!($crate::LogLevel::Warning, $format $(, $arg)*)
    };
}

#[macro_export]
macro_rules! errorf {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf!($crate::LogLevel::Error, $format $(, $arg)*)
    };
}

/// Formatted fatal message. Like [`fatal_f`](crate::fatal_f) it does not terminate.
#[macro_export]
macro_rules! fatalf {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf!($crate::LogLevel::Fatal, $format $(, $arg)*)
    };
}
