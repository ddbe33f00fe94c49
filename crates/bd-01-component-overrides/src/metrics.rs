//! Metrics hooks for override resolution
//!
//! Counts how often scopes are resolved and how often the single-slot memo
//! saves a merge.
//!
//! ## Usage
//!
//! ```ignore
//! use bd_01_component_overrides::metrics::Metrics;
//! use std::sync::Arc;
//!
//! let metrics = Arc::new(Metrics::new());
//! let mut resolver = OverrideResolver::with_metrics(metrics.clone());
//! resolver.resolve(&parent, &local);
//! assert_eq!(metrics.snapshot().resolutions, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Resolution counters
#[derive(Default)]
pub struct Metrics {
    /// Total `resolve` calls
    pub resolutions: AtomicU64,
    /// Calls answered from the memo slot
    pub memo_hits: AtomicU64,
    /// Calls that had to merge
    pub memo_misses: AtomicU64,
    /// Calls that returned the parent unchanged (empty overrides)
    pub identity_fast_paths: AtomicU64,
    /// Override functions evaluated
    pub function_evaluations: AtomicU64,
    /// Scopes entered
    pub scopes_entered: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            resolutions: self.resolutions.load(Ordering::Relaxed),
            memo_hits: self.memo_hits.load(Ordering::Relaxed),
            memo_misses: self.memo_misses.load(Ordering::Relaxed),
            identity_fast_paths: self.identity_fast_paths.load(Ordering::Relaxed),
            function_evaluations: self.function_evaluations.load(Ordering::Relaxed),
            scopes_entered: self.scopes_entered.load(Ordering::Relaxed),
        }
    }

    /// Fraction of resolutions served from the memo
    pub fn hit_rate(&self) -> f64 {
        let total = self.resolutions.load(Ordering::Relaxed);
        let hits = self.memo_hits.load(Ordering::Relaxed);
        if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        }
    }

    pub fn reset(&self) {
        self.resolutions.store(0, Ordering::Relaxed);
        self.memo_hits.store(0, Ordering::Relaxed);
        self.memo_misses.store(0, Ordering::Relaxed);
        self.identity_fast_paths.store(0, Ordering::Relaxed);
        self.function_evaluations.store(0, Ordering::Relaxed);
        self.scopes_entered.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub resolutions: u64,
    pub memo_hits: u64,
    pub memo_misses: u64,
    pub identity_fast_paths: u64,
    pub function_evaluations: u64,
    pub scopes_entered: u64,
}

/// Trait for custom metrics recording implementations
pub trait MetricsRecorder: Send + Sync {
    fn record_resolution(&self);
    fn record_memo_hit(&self);
    fn record_memo_miss(&self);
    fn record_identity_fast_path(&self);
    fn record_function_evaluation(&self);
    fn record_scope_entered(&self);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_resolution(&self) {}
    fn record_memo_hit(&self) {}
    fn record_memo_miss(&self) {}
    fn record_identity_fast_path(&self) {}
    fn record_function_evaluation(&self) {}
    fn record_scope_entered(&self) {}
}

impl MetricsRecorder for Metrics {
    fn record_resolution(&self) {
        self.resolutions.fetch_add(1, Ordering::Relaxed);
    }

    fn record_memo_hit(&self) {
        self.memo_hits.fetch_add(1, Ordering::Relaxed);
    }

    fn record_memo_miss(&self) {
        self.memo_misses.fetch_add(1, Ordering::Relaxed);
    }

    fn record_identity_fast_path(&self) {
        self.identity_fast_paths.fetch_add(1, Ordering::Relaxed);
    }

    fn record_function_evaluation(&self) {
        self.function_evaluations.fetch_add(1, Ordering::Relaxed);
    }

    fn record_scope_entered(&self) {
        self.scopes_entered.fetch_add(1, Ordering::Relaxed);
    }
}
