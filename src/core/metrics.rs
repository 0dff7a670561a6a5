//! Logger metrics for observability
//!
//! Counters for how many submissions a logger accepted, suppressed and
//! delivered, and how many dispatches a handler aborted.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use leveled_log::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_accepted();
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.accepted(), 1);
/// assert_eq!(metrics.suppressed(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Submissions that passed the threshold
    accepted: AtomicU64,

    /// Submissions dropped by the threshold
    suppressed: AtomicU64,

    /// Records delivered to every registered handler
    dispatched: AtomicU64,

    /// Dispatches aborted by a failing handler
    handler_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            accepted: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            dispatched: AtomicU64::new(0),
            handler_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn handler_failures(&self) -> u64 {
        self.handler_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_accepted(&self) {
        self.accepted.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_suppressed(&self) {
        self.suppressed.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_dispatched(&self) {
        self.dispatched.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_handler_failure(&self) {
        self.handler_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Percentage of submissions suppressed by the threshold (0.0 - 100.0)
    pub fn suppression_rate(&self) -> f64 {
        let suppressed = self.suppressed();
        let total = suppressed + self.accepted();
        if total == 0 {
            return 0.0;
        }
        (suppressed as f64 / total as f64) * 100.0
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.accepted.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.dispatched.store(0, Ordering::Relaxed);
        self.handler_failures.store(0, Ordering::Relaxed);
    }
}
