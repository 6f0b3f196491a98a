//! Metrics hooks for filter operations
//!
//! A filter reports every add, test and reset to a [`MetricsRecorder`].
//! The default recorder is [`NoOpMetrics`]; attach a [`Metrics`] to count.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use sync_bloom::{BloomFilter, Metrics};
//!
//! let metrics = Arc::new(Metrics::new());
//! let filter = BloomFilter::init(100, 0.01).unwrap().with_metrics(metrics.clone());
//!
//! filter.add(b"a");
//! filter.test(b"a");
//! assert_eq!(metrics.snapshot().tests_performed, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Metrics collector for filter operations
///
/// Thread-safe counters for monitoring one or more filters.
#[derive(Debug, Default)]
pub struct Metrics {
    /// Total add calls
    pub elements_added: AtomicU64,
    /// Total test calls
    pub tests_performed: AtomicU64,
    /// Test calls that reported "possibly present"
    pub tests_positive: AtomicU64,
    /// Total reset calls
    pub resets: AtomicU64,
    /// Cumulative add time in nanoseconds, lock wait included
    pub add_time_ns: AtomicU64,
    /// Cumulative test time in nanoseconds, lock wait included
    pub test_time_ns: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an add
    pub fn record_add(&self, duration: Duration) {
        self.elements_added.fetch_add(1, Ordering::Relaxed);
        self.add_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    /// Record a test and whether it reported presence
    pub fn record_test(&self, duration: Duration, found: bool) {
        self.tests_performed.fetch_add(1, Ordering::Relaxed);
        self.test_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
        if found {
            self.tests_positive.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a reset
    pub fn record_reset(&self) {
        self.resets.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            elements_added: self.elements_added.load(Ordering::Relaxed),
            tests_performed: self.tests_performed.load(Ordering::Relaxed),
            tests_positive: self.tests_positive.load(Ordering::Relaxed),
            resets: self.resets.load(Ordering::Relaxed),
            avg_add_ns: average(&self.add_time_ns, &self.elements_added),
            avg_test_ns: average(&self.test_time_ns, &self.tests_performed),
        }
    }

    /// Ratio of positive tests to all tests
    ///
    /// Includes true positives as well as false positives.
    pub fn observed_positive_rate(&self) -> f64 {
        let total = self.tests_performed.load(Ordering::Relaxed);
        let positive = self.tests_positive.load(Ordering::Relaxed);
        if total > 0 {
            positive as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.elements_added.store(0, Ordering::Relaxed);
        self.tests_performed.store(0, Ordering::Relaxed);
        self.tests_positive.store(0, Ordering::Relaxed);
        self.resets.store(0, Ordering::Relaxed);
        self.add_time_ns.store(0, Ordering::Relaxed);
        self.test_time_ns.store(0, Ordering::Relaxed);
    }
}

fn average(total: &AtomicU64, count: &AtomicU64) -> u64 {
    let total = total.load(Ordering::Relaxed);
    let count = count.load(Ordering::Relaxed);
    if count > 0 {
        total / count
    } else {
        0
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub elements_added: u64,
    pub tests_performed: u64,
    pub tests_positive: u64,
    pub resets: u64,
    pub avg_add_ns: u64,
    pub avg_test_ns: u64,
}

/// Trait for custom metrics recording implementations
///
/// Implement this to forward filter activity to an external metrics system.
pub trait MetricsRecorder: Send + Sync {
    fn record_add(&self, duration: Duration);

    fn record_test(&self, duration: Duration, found: bool);

    fn record_reset(&self);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Debug, Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_add(&self, _: Duration) {}
    fn record_test(&self, _: Duration, _: bool) {}
    fn record_reset(&self) {}
}

impl MetricsRecorder for Metrics {
    fn record_add(&self, duration: Duration) {
        Metrics::record_add(self, duration);
    }

    fn record_test(&self, duration: Duration, found: bool) {
        Metrics::record_test(self, duration, found);
    }

    fn record_reset(&self) {
        Metrics::record_reset(self);
    }
}
