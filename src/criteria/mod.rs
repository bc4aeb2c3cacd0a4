//! Search criteria model
//!
//! Converts raw caller input into the normalized criteria shared by the
//! structured-store path and the fallback scan path.
//!
//! # Rules
//!
//! - Blank or absent strings are absent filters, never "match nothing"
//! - Malformed date bounds fail the request before it runs
//! - Numeric bounds pass through as given; min > max is left for the
//!   range policy to turn into an empty result

mod errors;
mod page;
mod range;
mod search;

pub use errors::{CriteriaError, CriteriaResult};
pub use page::{PageRequest, DEFAULT_PAGE_SIZE};
pub use range::{InclusiveRange, RangeConstraint};
pub use search::{SearchCriteria, SearchParams};
