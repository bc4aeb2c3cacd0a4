//! Fallback scan path
//!
//! Used when the record store is empty. Applies the same matching and
//! ordering contract as the store path directly over a row source.

mod engine;
mod matcher;

pub use engine::{ScanEngine, ScanReport};
pub use matcher::CriteriaMatcher;
