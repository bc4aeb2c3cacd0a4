//! Delimited-text row source
//!
//! Resolution order on every `open`:
//! 1. Local file, when it exists
//! 2. Remote URL, when configured
//! 3. Otherwise `SourceError::Unavailable`
//!
//! Each `open` gets its own reader. The underlying file or HTTP body is
//! released when the returned stream is dropped, whichever way the caller
//! exits.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::record::{parse_row, RowLayout, SaleRecord};

use super::errors::{SourceError, SourceResult};
use super::{RecordStream, RowSource};

/// Row source over a CSV file with a header row
#[derive(Debug, Clone)]
pub struct CsvRowSource {
    local_path: PathBuf,
    remote_url: Option<String>,
}

impl CsvRowSource {
    pub fn new(local_path: impl Into<PathBuf>, remote_url: Option<String>) -> Self {
        Self {
            local_path: local_path.into(),
            remote_url: remote_url.filter(|url| !url.trim().is_empty()),
        }
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn remote_url(&self) -> Option<&str> {
        self.remote_url.as_deref()
    }

    fn open_local(&self) -> SourceResult<Box<dyn Read + Send>> {
        let file = File::open(&self.local_path).map_err(|source| SourceError::Io {
            path: self.local_path.display().to_string(),
            source,
        })?;
        Ok(Box::new(file))
    }

    fn open_remote(&self, url: &str) -> SourceResult<Box<dyn Read + Send>> {
        let response = reqwest::blocking::get(url).map_err(|e| {
            if e.is_connect() || e.is_timeout() || e.is_builder() {
                SourceError::Unavailable(format!(
                    "'{}' not found and remote '{}' unreachable: {}",
                    self.local_path.display(),
                    url,
                    e
                ))
            } else {
                SourceError::Remote(e.to_string())
            }
        })?;

        let response = response
            .error_for_status()
            .map_err(|e| SourceError::Remote(e.to_string()))?;
        Ok(Box::new(response))
    }
}

impl RowSource for CsvRowSource {
    fn open(&self) -> SourceResult<RecordStream> {
        let input = if self.local_path.is_file() {
            self.open_local()?
        } else {
            match &self.remote_url {
                Some(url) => self.open_remote(url)?,
                None => {
                    return Err(SourceError::Unavailable(format!(
                        "'{}' not found and no remote URL configured",
                        self.local_path.display()
                    )))
                }
            }
        };

        Ok(Box::new(CsvRecords::new(input)?))
    }

    fn describe(&self) -> String {
        match &self.remote_url {
            Some(url) => format!("csv:{} (remote {})", self.local_path.display(), url),
            None => format!("csv:{}", self.local_path.display()),
        }
    }
}

/// Lazy record stream over an open delimited reader
pub struct CsvRecords {
    reader: Reader<Box<dyn Read + Send>>,
    layout: RowLayout,
    row: StringRecord,
    done: bool,
}

impl CsvRecords {
    /// Reads the header row and prepares the column layout
    pub fn new(input: Box<dyn Read + Send>) -> SourceResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input);
        let layout = RowLayout::from_headers(reader.headers()?);

        Ok(Self {
            reader,
            layout,
            row: StringRecord::new(),
            done: false,
        })
    }

    fn next_record(&mut self) -> SourceResult<Option<SaleRecord>> {
        if !self.reader.read_record(&mut self.row)? {
            return Ok(None);
        }

        parse_row(&self.layout, &self.row)
            .map(Some)
            .map_err(|e| SourceError::MalformedRow {
                line: self.row.position().map(|p| p.line()).unwrap_or_default(),
                column: e.column,
                value: e.value,
            })
    }
}

impl Iterator for CsvRecords {
    type Item = SourceResult<SaleRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
