//! Fallback row sources
//!
//! A row source yields sale records lazily, one parsed row at a time.
//! Opening a source acquires a read handle; dropping the returned stream
//! releases it.
//!
//! # Invariants
//!
//! - A source that cannot be opened reports `SourceError::Unavailable`,
//!   never an empty stream
//! - Streams end after the first error

mod csv;
mod errors;

pub use self::csv::{CsvRecords, CsvRowSource};
pub use errors::{SourceError, SourceResult};

use crate::record::SaleRecord;

/// Lazy, single-pass sequence of records from one open source handle
pub type RecordStream = Box<dyn Iterator<Item = SourceResult<SaleRecord>> + Send>;

/// A restartable producer of sale records
pub trait RowSource: Send + Sync {
    /// Opens a fresh read handle
    fn open(&self) -> SourceResult<RecordStream>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// Row source over records already in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryRowSource {
    records: Option<Vec<SaleRecord>>,
}

impl MemoryRowSource {
    pub fn new(records: Vec<SaleRecord>) -> Self {
        Self {
            records: Some(records),
        }
    }

    /// A source that always fails to open
    pub fn unavailable() -> Self {
        Self { records: None }
    }
}

impl RowSource for MemoryRowSource {
    fn open(&self) -> SourceResult<RecordStream> {
        match &self.records {
            Some(records) => Ok(Box::new(records.clone().into_iter().map(Ok))),
            None => Err(SourceError::Unavailable(
                "in-memory source not configured".into(),
            )),
        }
    }

    fn describe(&self) -> String {
        match &self.records {
            Some(records) => format!("memory:{} records", records.len()),
            None => "memory:unavailable".into(),
        }
    }
}
