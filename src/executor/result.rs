//! Result pages

use std::fmt;

use serde::Serialize;

use crate::criteria::PageRequest;
use crate::record::SaleRecord;

/// Which backend produced a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Structured record store
    Store,
    /// Sequential scan over the raw row source
    Scan,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Store => "store",
            Backend::Scan => "scan",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page of an ordered result set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    /// Records on this page, in result order
    pub content: Vec<SaleRecord>,
    /// Matches across all pages
    pub total_elements: u64,
    /// `ceil(total_elements / size)`
    pub total_pages: u64,
    /// Zero-based page index
    pub page: usize,
    /// Requested page size
    pub size: usize,
    pub backend: Backend,
}

impl SearchPage {
    /// Cuts the requested window out of a fully sorted result set
    pub fn from_sorted(mut sorted: Vec<SaleRecord>, page: PageRequest, backend: Backend) -> Self {
        let total = sorted.len();
        let window = page.window(total);
        let content: Vec<SaleRecord> = sorted.drain(window).collect();

        Self {
            content,
            total_elements: total as u64,
            total_pages: page.page_count(total as u64),
            page: page.index(),
            size: page.size(),
            backend,
        }
    }

    /// A page with no matches
    pub fn empty(page: PageRequest, backend: Backend) -> Self {
        Self::from_sorted(Vec::new(), page, backend)
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SaleRecord> {
        self.content.iter()
    }
}
