//! Logger metrics for observability
//!
//! Counters describing what the dispatcher did with each call: delivered
//! straight to a sink, buffered for later, drained on attach, or filtered
//! by the threshold.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use rust_log_facade::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_buffered();
/// metrics.record_drained(1);
///
/// assert_eq!(metrics.buffered_count(), 1);
/// assert_eq!(metrics.drained_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Messages handed directly to an attached sink
    delivered: AtomicU64,

    /// Messages queued because no sink was attached
    buffered: AtomicU64,

    /// Queued messages later handed to a newly attached sink
    drained: AtomicU64,

    /// Calls rejected by the threshold
    filtered: AtomicU64,

    /// Templates with more placeholders than values
    placeholder_overflows: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            delivered: AtomicU64::new(0),
            buffered: AtomicU64::new(0),
            drained: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            placeholder_overflows: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn delivered_count(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn buffered_count(&self) -> u64 {
        self.buffered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn drained_count(&self) -> u64 {
        self.drained.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn placeholder_overflow_count(&self) -> u64 {
        self.placeholder_overflows.load(Ordering::Relaxed)
    }

    /// Record a message handed directly to a sink
    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a message placed in a channel queue
    #[inline]
    pub fn record_buffered(&self) -> u64 {
        self.buffered.fetch_add(1, Ordering::Relaxed)
    }

    /// Record `count` queued messages drained into a sink
    #[inline]
    pub fn record_drained(&self, count: usize) -> u64 {
        self.drained.fetch_add(count as u64, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_placeholder_overflow(&self) -> u64 {
        self.placeholder_overflows.fetch_add(1, Ordering::Relaxed)
    }

    /// Messages still waiting in queues, as far as these counters know.
    pub fn outstanding(&self) -> u64 {
        self.buffered_count().saturating_sub(self.drained_count())
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.delivered.store(0, Ordering::Relaxed);
        self.buffered.store(0, Ordering::Relaxed);
        self.drained.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.placeholder_overflows.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            delivered: AtomicU64::new(self.delivered_count()),
            buffered: AtomicU64::new(self.buffered_count()),
            drained: AtomicU64::new(self.drained_count()),
            filtered: AtomicU64::new(self.filtered_count()),
            placeholder_overflows: AtomicU64::new(self.placeholder_overflow_count()),
        }
    }
}
