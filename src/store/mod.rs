//! Structured record store
//!
//! The preferred backend. A store evaluates predicate trees, applies the
//! sort policy over the full match set and returns the requested page
//! with a total count.
//!
//! # Invariants
//!
//! - `count()` reflects every committed insert
//! - `find_page` ordering matches the fallback scan for the same criteria

mod errors;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;

use crate::criteria::PageRequest;
use crate::executor::SearchPage;
use crate::planner::{Predicate, SortPolicy};
use crate::record::SaleRecord;

/// A store that can answer predicate queries over sale records
pub trait RecordStore: Send + Sync {
    /// Number of records currently held
    fn count(&self) -> StoreResult<u64>;

    /// Filters by `predicate`, orders by `sort`, returns the `page` window
    fn find_page(
        &self,
        predicate: &Predicate,
        sort: &SortPolicy,
        page: PageRequest,
    ) -> StoreResult<SearchPage>;

    /// Inserts a batch, returning how many records were added
    fn insert_all(&self, records: Vec<SaleRecord>) -> StoreResult<usize>;
}
