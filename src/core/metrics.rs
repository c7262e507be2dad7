//! Dispatch metrics for observability
//!
//! Counters describing what the registry did with each broadcast: how many
//! calls went out, how many loggers accepted them, and how many failed or
//! panicked.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for registry dispatch
///
/// # Example
///
/// ```
/// use rust_multi_logger::DispatchMetrics;
///
/// let metrics = DispatchMetrics::new();
///
/// metrics.record_broadcast();
/// metrics.record_delivered();
/// metrics.record_failure();
///
/// assert_eq!(metrics.broadcasts(), 1);
/// assert_eq!(metrics.delivered(), 1);
/// assert_eq!(metrics.failures(), 1);
/// ```
#[derive(Debug)]
pub struct DispatchMetrics {
    /// Number of log calls broadcast to the registered loggers
    broadcasts: AtomicU64,

    /// Number of individual logger calls that returned `Ok`
    delivered: AtomicU64,

    /// Number of individual logger calls that returned an error
    failures: AtomicU64,

    /// Number of individual logger calls that panicked
    panics: AtomicU64,

    /// Number of fatal broadcasts (each one ends in a `FatalSignal`)
    fatal_signals: AtomicU64,
}

impl DispatchMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            broadcasts: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            panics: AtomicU64::new(0),
            fatal_signals: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn broadcasts(&self) -> u64 {
        self.broadcasts.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn panics(&self) -> u64 {
        self.panics.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn fatal_signals(&self) -> u64 {
        self.fatal_signals.load(Ordering::Relaxed)
    }

    /// Record a broadcast, returning the previous count
    #[inline]
    pub fn record_broadcast(&self) -> u64 {
        self.broadcasts.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failure(&self) -> u64 {
        self.failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_panic(&self) -> u64 {
        self.panics.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_fatal(&self) -> u64 {
        self.fatal_signals.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of logger calls that failed or panicked, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if no logger has been called yet.
    pub fn failure_rate(&self) -> f64 {
        let failed = (self.failures() + self.panics()) as f64;
        let total = self.delivered() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.broadcasts.store(0, Ordering::Relaxed);
        self.delivered.store(0, Ordering::Relaxed);
        self.failures.store(0, Ordering::Relaxed);
        self.panics.store(0, Ordering::Relaxed);
        self.fatal_signals.store(0, Ordering::Relaxed);
    }
}

impl Default for DispatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DispatchMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            broadcasts: AtomicU64::new(self.broadcasts()),
            delivered: AtomicU64::new(self.delivered()),
            failures: AtomicU64::new(self.failures()),
            panics: AtomicU64::new(self.panics()),
            fatal_signals: AtomicU64::new(self.fatal_signals()),
        }
    }
}
