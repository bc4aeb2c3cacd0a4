//! Criteria validation errors
//!
//! Error codes:
//! - RETAIL_INVALID_DATE
//! - RETAIL_INVALID_NUMBER
//! - RETAIL_INVALID_PAGE_SIZE
//! - RETAIL_PAGE_SIZE_TOO_LARGE

use thiserror::Error;

/// Result type for criteria normalization
pub type CriteriaResult<T> = Result<T, CriteriaError>;

/// Caller input that cannot be normalized into search criteria.
///
/// The query is never executed when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    /// Date bound not in `YYYY-MM-DD` form
    #[error("Invalid date for '{field}': '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    /// Numeric parameter that is not an integer in range
    #[error("Invalid number for '{field}': '{value}'")]
    InvalidNumber { field: String, value: String },

    /// Page size must be positive
    #[error("Page size must be a positive integer, got {0}")]
    InvalidPageSize(usize),

    /// Page size above the configured maximum
    #[error("Page size {size} exceeds maximum {max}")]
    PageSizeTooLarge { size: usize, max: usize },
}

impl CriteriaError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            CriteriaError::InvalidDate { .. } => "RETAIL_INVALID_DATE",
            CriteriaError::InvalidNumber { .. } => "RETAIL_INVALID_NUMBER",
            CriteriaError::InvalidPageSize(_) => "RETAIL_INVALID_PAGE_SIZE",
            CriteriaError::PageSizeTooLarge { .. } => "RETAIL_PAGE_SIZE_TOO_LARGE",
        }
    }
}
