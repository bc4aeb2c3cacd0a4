//! Metrics registry
//!
//! Counters only, monotonic, reset on process start. Relaxed atomics;
//! a snapshot is not a consistent cut across counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::executor::Backend;

#[derive(Debug, Default)]
pub struct MetricsRegistry {
    queries_executed: AtomicU64,
    queries_rejected: AtomicU64,
    queries_failed: AtomicU64,
    store_queries: AtomicU64,
    scan_queries: AtomicU64,
    rows_scanned: AtomicU64,
    source_unavailable: AtomicU64,
    records_loaded: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_queries_executed(&self) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
    }

    /// Caller input failed validation
    pub fn increment_queries_rejected(&self) {
        self.queries_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_queries_failed(&self) {
        self.queries_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts one routing decision
    pub fn record_backend(&self, backend: Backend) {
        let counter = match backend {
            Backend::Store => &self.store_queries,
            Backend::Scan => &self.scan_queries,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_rows_scanned(&self, rows: u64) {
        self.rows_scanned.fetch_add(rows, Ordering::Relaxed);
    }

    pub fn increment_source_unavailable(&self) {
        self.source_unavailable.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_records_loaded(&self, records: u64) {
        self.records_loaded.fetch_add(records, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            queries_rejected: self.queries_rejected.load(Ordering::Relaxed),
            queries_failed: self.queries_failed.load(Ordering::Relaxed),
            store_queries: self.store_queries.load(Ordering::Relaxed),
            scan_queries: self.scan_queries.load(Ordering::Relaxed),
            rows_scanned: self.rows_scanned.load(Ordering::Relaxed),
            source_unavailable: self.source_unavailable.load(Ordering::Relaxed),
            records_loaded: self.records_loaded.load(Ordering::Relaxed),
        }
    }

    /// Snapshot as a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self.snapshot()).unwrap_or_default()
    }
}

/// Point-in-time counter values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub queries_executed: u64,
    pub queries_rejected: u64,
    pub queries_failed: u64,
    pub store_queries: u64,
    pub scan_queries: u64,
    pub rows_scanned: u64,
    pub source_unavailable: u64,
    pub records_loaded: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let metrics = MetricsRegistry::new();
        let snap = metrics.snapshot();
        assert_eq!(snap.queries_executed, 0);
        assert_eq!(snap.rows_scanned, 0);
    }

    #[test]
    fn test_backend_counters() {
        let metrics = MetricsRegistry::new();
        metrics.record_backend(Backend::Scan);
        metrics.record_backend(Backend::Scan);
        metrics.record_backend(Backend::Store);

        let snap = metrics.snapshot();
        assert_eq!(snap.scan_queries, 2);
        assert_eq!(snap.store_queries, 1);
    }

    #[test]
    fn test_to_json() {
        let metrics = MetricsRegistry::new();
        metrics.add_rows_scanned(40);
        metrics.add_records_loaded(7);

        let json = metrics.to_json();
        assert_eq!(json["rows_scanned"], 40);
        assert_eq!(json["records_loaded"], 7);
        assert_eq!(json["queries_failed"], 0);
    }
}
