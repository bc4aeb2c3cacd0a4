//! Search service
//!
//! Entry point for queries: normalizes caller input within the page
//! limits, picks a backend per query, and owns the bulk load from the row
//! source into the store.

mod errors;
mod service;

pub use errors::{SearchError, SearchResult};
pub use service::{LoadReport, PageLimits, SearchService};
