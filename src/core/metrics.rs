//! Logger metrics for observability
//!
//! Counters for monitoring logger health: blocks delivered, calls suppressed
//! because no sink was registered, and failed sink writes.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use rust_block_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_logged();
/// metrics.record_failed_write();
///
/// assert_eq!(metrics.total_logged(), 1);
/// assert_eq!(metrics.failed_writes(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Blocks composed and dispatched to the sinks
    total_logged: AtomicU64,

    /// Calls skipped without evaluating the message
    suppressed: AtomicU64,

    /// Sink writes that returned an error or panicked
    failed_writes: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            failed_writes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_logged(&self) -> u64 {
        self.total_logged.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed_write(&self) -> u64 {
        self.failed_writes.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of sink writes that failed, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been logged.
    pub fn failure_rate(&self, sinks: usize) -> f64 {
        let attempts = self.total_logged() as f64 * sinks as f64;
        if attempts == 0.0 {
            return 0.0;
        }
        (self.failed_writes() as f64 / attempts) * 100.0
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.total_logged.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.failed_writes.store(0, Ordering::Relaxed);
    }
}
