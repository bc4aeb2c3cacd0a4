//! In-process record store
//!
//! Records live in insertion order behind a read-write lock. Queries take
//! a read lock for the duration of filter and sort, so a concurrent bulk
//! insert is either fully visible or not visible at all.

use std::sync::RwLock;

use crate::criteria::PageRequest;
use crate::executor::{Backend, PredicateFilter, ResultSorter, SearchPage};
use crate::planner::{Predicate, SortPolicy};
use crate::record::SaleRecord;

use super::errors::{StoreError, StoreResult};
use super::RecordStore;

/// Record store held in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<SaleRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `records`
    pub fn with_records(records: Vec<SaleRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl RecordStore for MemoryStore {
    fn count(&self) -> StoreResult<u64> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.len() as u64)
    }

    fn find_page(
        &self,
        predicate: &Predicate,
        sort: &SortPolicy,
        page: PageRequest,
    ) -> StoreResult<SearchPage> {
        if predicate.is_always_false() {
            return Ok(SearchPage::empty(page, Backend::Store));
        }

        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut matched: Vec<SaleRecord> = records
            .iter()
            .filter(|r| PredicateFilter::matches(r, predicate))
            .cloned()
            .collect();
        drop(records);

        ResultSorter::sort(&mut matched, sort);
        Ok(SearchPage::from_sorted(matched, page, Backend::Store))
    }

    fn insert_all(&self, batch: Vec<SaleRecord>) -> StoreResult<usize> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let inserted = batch.len();
        records.extend(batch);
        Ok(inserted)
    }
}
