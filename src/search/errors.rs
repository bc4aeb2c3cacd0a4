//! Search service errors

use thiserror::Error;

use crate::criteria::CriteriaError;
use crate::source::SourceError;
use crate::store::StoreError;

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Caller input rejected; nothing ran
    #[error(transparent)]
    Validation(#[from] CriteriaError),

    /// Fallback row source failed or could not be opened
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Record store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SearchError {
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::Validation(e) => e.code(),
            SearchError::Source(e) => e.code(),
            SearchError::Store(e) => e.code(),
        }
    }

    /// True when the query could not run because the source is missing.
    ///
    /// Distinguishes "could not run" from "ran, zero matches".
    pub fn is_unavailable(&self) -> bool {
        matches!(self, SearchError::Source(e) if e.is_unavailable())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, SearchError::Validation(_))
    }
}
