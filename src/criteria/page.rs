//! Page requests

use std::ops::Range;

use serde::Serialize;

use super::errors::{CriteriaError, CriteriaResult};

/// Page size used when the caller does not give one
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A zero-based page index with a positive page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    index: usize,
    size: usize,
}

impl PageRequest {
    /// Creates a page request. Size must be positive.
    pub fn new(index: usize, size: usize) -> CriteriaResult<Self> {
        if size == 0 {
            return Err(CriteriaError::InvalidPageSize(size));
        }
        Ok(Self { index, size })
    }

    /// First page with the default size
    pub fn first() -> Self {
        Self {
            index: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Position of the first record of this page in the full ordered result
    pub fn offset(&self) -> usize {
        self.index.saturating_mul(self.size)
    }

    /// `[index*size, min((index+1)*size, total))`, empty when past the end
    pub fn window(&self, total: usize) -> Range<usize> {
        let start = self.offset().min(total);
        let end = self.offset().saturating_add(self.size).min(total);
        start..end
    }

    /// Number of pages needed for `total` records
    pub fn page_count(&self, total: u64) -> u64 {
        total.div_ceil(self.size as u64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}
