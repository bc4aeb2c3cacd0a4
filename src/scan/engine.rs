//! Fallback scan engine
//!
//! Canonical algorithm only: filter the entire source, sort the entire
//! filtered set, then slice the page. Only matching records are kept in
//! memory; the source itself is streamed once.

use crate::criteria::SearchCriteria;
use crate::executor::{Backend, ResultSorter, SearchPage};
use crate::record::SaleRecord;
use crate::source::{RowSource, SourceResult};

use super::matcher::CriteriaMatcher;

/// Outcome of one scan
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub page: SearchPage,
    /// Rows read from the source before the page was cut
    pub rows_scanned: u64,
}

/// Answers queries by scanning a row source
pub struct ScanEngine;

impl ScanEngine {
    /// Runs one query against a fresh handle of `source`.
    ///
    /// The handle is dropped before returning on every path. The first
    /// source error aborts the scan and is returned as is.
    pub fn search(source: &dyn RowSource, criteria: &SearchCriteria) -> SourceResult<ScanReport> {
        let matcher = CriteriaMatcher::new(criteria);
        let stream = source.open()?;

        let mut matched: Vec<SaleRecord> = Vec::new();
        let mut rows_scanned = 0u64;
        for record in stream {
            let record = record?;
            rows_scanned += 1;
            if matcher.matches(&record) {
                matched.push(record);
            }
        }

        ResultSorter::sort(&mut matched, criteria.sort());

        Ok(ScanReport {
            page: SearchPage::from_sorted(matched, criteria.page(), Backend::Scan),
            rows_scanned,
        })
    }
}
