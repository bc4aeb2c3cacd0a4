//! Executor subsystem
//!
//! Shared evaluation pieces used by both backends, so that a query yields
//! the same page whichever backend serves it.
//!
//! # Execution Flow (strict order)
//!
//! 1. Filter every candidate record against the predicate
//! 2. Sort the complete filtered set
//! 3. Cut the requested page window
//!
//! # Invariants
//!
//! - Sorting is stable and deterministic
//! - The page window is taken after the full sort, never before

mod filters;
mod result;
mod sorter;

pub use filters::PredicateFilter;
pub use result::{Backend, SearchPage};
pub use sorter::ResultSorter;
