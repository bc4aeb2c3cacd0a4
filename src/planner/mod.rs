//! Query planning for sale-record searches
//!
//! Turns normalized criteria into what a structured store needs: a
//! predicate tree and a sort policy.
//!
//! # Design Principles
//!
//! - Deterministic: same criteria -> same tree
//! - Pure: building a tree performs no I/O
//! - Explicit: contradictory ranges become `False`, not errors

mod ast;
mod builder;
mod explain;
mod sort;

pub use ast::{Field, Literal, Predicate};
pub use builder::PredicateBuilder;
pub use explain::ExplainPlan;
pub use sort::{SortDirection, SortKey, SortPolicy};
