//! Record store errors
//!
//! Error codes:
//! - RETAIL_STORE_LOCK_POISONED

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A writer panicked while holding the store lock
    #[error("Record store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::LockPoisoned => "RETAIL_STORE_LOCK_POISONED",
        }
    }
}
