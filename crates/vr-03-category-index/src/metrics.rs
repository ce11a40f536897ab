//! Metrics hooks for category registry operations
//!
//! Counts what the registry did with each record and how each lookup was
//! answered, so the observed false positive share of filter hits can be
//! watched.
//!
//! ## Usage
//!
//! ```
//! use vr_03_category_index::metrics::Metrics;
//! use vr_03_category_index::MetricsRecorder;
//!
//! let metrics = Metrics::new();
//! metrics.record_lookup_false_positive();
//! metrics.record_lookup_found();
//! assert_eq!(metrics.snapshot().false_positives, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for registry operations
///
/// Thread-safe counters; every method takes `&self`.
#[derive(Default, Debug)]
pub struct Metrics {
    /// Categories created on first sight
    pub categories_created: AtomicU64,
    /// Records written to a category index
    pub records_indexed: AtomicU64,
    /// Records skipped because the citizen is not vaccinated
    pub records_skipped: AtomicU64,
    /// Records rejected because their id was already indexed
    pub duplicates_rejected: AtomicU64,
    /// Lookups answered `NotFound` by the filter alone
    pub lookups_rejected: AtomicU64,
    /// Lookups answered `Found`
    pub lookups_found: AtomicU64,
    /// Lookups answered `FalsePositive`
    pub false_positives: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total lookups performed
    pub fn lookups_performed(&self) -> u64 {
        self.lookups_rejected.load(Ordering::Relaxed)
            + self.lookups_found.load(Ordering::Relaxed)
            + self.false_positives.load(Ordering::Relaxed)
    }

    /// Share of filter hits that the index did not confirm
    ///
    /// A filter hit is any lookup that reached the index (`Found` or
    /// `FalsePositive`).
    pub fn observed_false_positive_rate(&self) -> f64 {
        let found = self.lookups_found.load(Ordering::Relaxed);
        let false_positives = self.false_positives.load(Ordering::Relaxed);
        let hits = found + false_positives;
        if hits > 0 {
            false_positives as f64 / hits as f64
        } else {
            0.0
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.categories_created.store(0, Ordering::Relaxed);
        self.records_indexed.store(0, Ordering::Relaxed);
        self.records_skipped.store(0, Ordering::Relaxed);
        self.duplicates_rejected.store(0, Ordering::Relaxed);
        self.lookups_rejected.store(0, Ordering::Relaxed);
        self.lookups_found.store(0, Ordering::Relaxed);
        self.false_positives.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricsSnapshot {
    pub categories_created: u64,
    pub records_indexed: u64,
    pub records_skipped: u64,
    pub duplicates_rejected: u64,
    pub lookups_performed: u64,
    pub lookups_rejected: u64,
    pub lookups_found: u64,
    pub false_positives: u64,
    pub observed_false_positive_rate: f64,
}

/// Trait for custom metrics recording implementations
pub trait MetricsRecorder: Send + Sync {
    fn record_category_created(&self);
    fn record_indexed(&self);
    fn record_skipped(&self);
    fn record_duplicate(&self);
    fn record_lookup_rejected(&self);
    fn record_lookup_found(&self);
    fn record_lookup_false_positive(&self);
    fn snapshot(&self) -> MetricsSnapshot;
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default, Debug)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_category_created(&self) {}
    fn record_indexed(&self) {}
    fn record_skipped(&self) {}
    fn record_duplicate(&self) {}
    fn record_lookup_rejected(&self) {}
    fn record_lookup_found(&self) {}
    fn record_lookup_false_positive(&self) {}

    fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot::default()
    }
}

impl MetricsRecorder for Metrics {
    fn record_category_created(&self) {
        self.categories_created.fetch_add(1, Ordering::Relaxed);
    }

    fn record_indexed(&self) {
        self.records_indexed.fetch_add(1, Ordering::Relaxed);
    }

    fn record_skipped(&self) {
        self.records_skipped.fetch_add(1, Ordering::Relaxed);
    }

    fn record_duplicate(&self) {
        self.duplicates_rejected.fetch_add(1, Ordering::Relaxed);
    }

    fn record_lookup_rejected(&self) {
        self.lookups_rejected.fetch_add(1, Ordering::Relaxed);
    }

    fn record_lookup_found(&self) {
        self.lookups_found.fetch_add(1, Ordering::Relaxed);
    }

    fn record_lookup_false_positive(&self) {
        self.false_positives.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            categories_created: self.categories_created.load(Ordering::Relaxed),
            records_indexed: self.records_indexed.load(Ordering::Relaxed),
            records_skipped: self.records_skipped.load(Ordering::Relaxed),
            duplicates_rejected: self.duplicates_rejected.load(Ordering::Relaxed),
            lookups_performed: self.lookups_performed(),
            lookups_rejected: self.lookups_rejected.load(Ordering::Relaxed),
            lookups_found: self.lookups_found.load(Ordering::Relaxed),
            false_positives: self.false_positives.load(Ordering::Relaxed),
            observed_false_positive_rate: self.observed_false_positive_rate(),
        }
    }
}
