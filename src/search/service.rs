//! Backend selection and bulk load
//!
//! Each query re-reads the store's row count and routes:
//! - count > 0: predicate tree + sort policy against the record store
//! - count = 0: criteria scan over the fallback row source
//!
//! The decision is never cached, so a load between two queries is seen
//! by the second.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::criteria::{CriteriaError, SearchCriteria, SearchParams, DEFAULT_PAGE_SIZE};
use crate::executor::{Backend, SearchPage};
use crate::observability::{Event, Logger, MetricsRegistry, ObservationScope};
use crate::planner::{ExplainPlan, PredicateBuilder};
use crate::record::SaleRecord;
use crate::scan::ScanEngine;
use crate::source::{RowSource, SourceError};
use crate::store::RecordStore;

use super::errors::{SearchError, SearchResult};

/// Outcome of a bulk load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadReport {
    /// Store was already populated; nothing was read
    pub already_loaded: bool,
    /// Records in the store before the load
    pub existing: u64,
    /// Records inserted by this load
    pub loaded: u64,
}

/// Page size bounds applied to caller input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_size: usize,
    /// Largest accepted size; `None` accepts any positive size
    pub max_size: Option<usize>,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_PAGE_SIZE,
            max_size: None,
        }
    }
}

/// The query service shared by the HTTP and CLI surfaces
#[derive(Clone)]
pub struct SearchService {
    store: Arc<dyn RecordStore>,
    source: Arc<dyn RowSource>,
    metrics: Arc<MetricsRegistry>,
    limits: PageLimits,
}

impl SearchService {
    pub fn new(
        store: Arc<dyn RecordStore>,
        source: Arc<dyn RowSource>,
        metrics: Arc<MetricsRegistry>,
    ) -> Self {
        Self {
            store,
            source,
            metrics,
            limits: PageLimits::default(),
        }
    }

    pub fn with_page_limits(mut self, limits: PageLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn page_limits(&self) -> PageLimits {
        self.limits
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    /// Normalizes caller input within the page limits.
    ///
    /// Rejections are counted and logged; the query never runs.
    pub fn prepare(&self, params: SearchParams) -> SearchResult<SearchCriteria> {
        params
            .normalize_within(self.limits.default_size, self.limits.max_size)
            .map_err(|e| self.reject(e))
    }

    /// `prepare` for URL query pairs. Unparseable numbers are rejected
    /// the same way as every other invalid input.
    pub fn prepare_pairs<K, V>(&self, pairs: &[(K, V)]) -> SearchResult<SearchCriteria>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let params = SearchParams::from_pairs(pairs).map_err(|e| self.reject(e))?;
        self.prepare(params)
    }

    fn reject(&self, e: CriteriaError) -> SearchError {
        self.metrics.increment_queries_rejected();
        Logger::event(
            Event::QueryRejected,
            &[("code", e.code()), ("reason", e.to_string().as_str())],
        );
        SearchError::from(e)
    }

    /// Picks the backend for the next query from the current row count
    pub fn select_backend(&self) -> SearchResult<Backend> {
        let count = self.store.count()?;
        Ok(if count > 0 {
            Backend::Store
        } else {
            Backend::Scan
        })
    }

    /// Runs one query on whichever backend is selected now
    pub fn search(&self, criteria: &SearchCriteria) -> SearchResult<SearchPage> {
        let query_id = Uuid::new_v4().to_string();
        let scope = ObservationScope::with_fields("QUERY", vec![("query_id", query_id.clone())]);

        match self.dispatch(&query_id, criteria) {
            Ok(page) => {
                self.metrics.increment_queries_executed();
                let total = page.total_elements.to_string();
                let returned = page.len().to_string();
                scope.complete_with_fields(&[
                    ("backend", page.backend.as_str()),
                    ("returned", returned.as_str()),
                    ("total", total.as_str()),
                ]);
                Ok(page)
            }
            Err(e) => {
                self.metrics.increment_queries_failed();
                if e.is_unavailable() {
                    self.metrics.increment_source_unavailable();
                    Logger::event(
                        Event::SourceUnavailable,
                        &[
                            ("query_id", query_id.as_str()),
                            ("source", self.source.describe().as_str()),
                        ],
                    );
                }
                scope.fail(e.code(), &e.to_string());
                Err(e)
            }
        }
    }

    fn dispatch(&self, query_id: &str, criteria: &SearchCriteria) -> SearchResult<SearchPage> {
        let backend = self.select_backend()?;
        self.metrics.record_backend(backend);
        Logger::event(
            Event::BackendSelected,
            &[("backend", backend.as_str()), ("query_id", query_id)],
        );

        match backend {
            Backend::Store => {
                let predicate = PredicateBuilder::build(criteria);
                let page = self
                    .store
                    .find_page(&predicate, criteria.sort(), criteria.page())?;
                Ok(page)
            }
            Backend::Scan => {
                let report = ScanEngine::search(self.source.as_ref(), criteria)?;
                self.metrics.add_rows_scanned(report.rows_scanned);
                Ok(report.page)
            }
        }
    }

    /// Explain plan annotated with the backend that would serve it now
    pub fn explain(&self, criteria: &SearchCriteria) -> SearchResult<ExplainPlan> {
        let backend = self.select_backend()?;
        Ok(ExplainPlan::from_criteria(criteria).with_backend(backend.as_str()))
    }

    /// Copies every source record into the store, in source order.
    ///
    /// Does nothing when the store already holds records. A source error,
    /// or a source with no data rows, aborts the load before anything is
    /// inserted.
    pub fn load_from_source(&self) -> SearchResult<LoadReport> {
        let existing = self.store.count()?;
        if existing > 0 {
            Logger::event(
                Event::LoadSkipped,
                &[("existing", existing.to_string().as_str())],
            );
            return Ok(LoadReport {
                already_loaded: true,
                existing,
                loaded: 0,
            });
        }

        let scope = ObservationScope::with_fields("LOAD", vec![("source", self.source.describe())]);
        let records = match self.read_source() {
            Ok(records) => records,
            Err(e) => {
                scope.fail(e.code(), &e.to_string());
                return Err(e);
            }
        };

        let loaded = match self.store.insert_all(records) {
            Ok(n) => n as u64,
            Err(e) => {
                let e = SearchError::from(e);
                scope.fail(e.code(), &e.to_string());
                return Err(e);
            }
        };

        self.metrics.add_records_loaded(loaded);
        scope.complete_with_fields(&[("loaded", loaded.to_string().as_str())]);

        Ok(LoadReport {
            already_loaded: false,
            existing,
            loaded,
        })
    }

    fn read_source(&self) -> SearchResult<Vec<SaleRecord>> {
        let records = self
            .source
            .open()?
            .collect::<Result<Vec<_>, _>>()?;
        if records.is_empty() {
            return Err(SourceError::Empty(self.source.describe()).into());
        }
        Ok(records)
    }
}
