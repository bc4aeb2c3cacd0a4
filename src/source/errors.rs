//! Row source errors
//!
//! Error codes:
//! - RETAIL_SOURCE_UNAVAILABLE
//! - RETAIL_SOURCE_IO_ERROR
//! - RETAIL_SOURCE_REMOTE_ERROR
//! - RETAIL_SOURCE_MALFORMED_ROW
//! - RETAIL_SOURCE_EMPTY
//! - RETAIL_SOURCE_READ_ERROR

use std::io;

use thiserror::Error;

/// Result type for row source operations
pub type SourceResult<T> = Result<T, SourceError>;

#[derive(Debug, Error)]
pub enum SourceError {
    /// Neither the local file nor a remote location could be opened
    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    /// Local file exists but could not be read
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Remote location answered with a failure
    #[error("Remote source error: {0}")]
    Remote(String),

    /// A row whose date cell is not a valid date. Aborts the read.
    #[error("Malformed row at line {line}: column '{column}' has invalid value '{value}'")]
    MalformedRow {
        line: u64,
        column: &'static str,
        value: String,
    },

    /// Source opened but held no data rows. Only a load treats this as
    /// an error; a scan of an empty source is an empty result.
    #[error("Data source '{0}' has no data rows")]
    Empty(String),

    /// The delimited reader itself failed
    #[error("Delimited read error: {0}")]
    Csv(#[from] csv::Error),
}

impl SourceError {
    pub fn code(&self) -> &'static str {
        match self {
            SourceError::Unavailable(_) => "RETAIL_SOURCE_UNAVAILABLE",
            SourceError::Io { .. } => "RETAIL_SOURCE_IO_ERROR",
            SourceError::Remote(_) => "RETAIL_SOURCE_REMOTE_ERROR",
            SourceError::MalformedRow { .. } => "RETAIL_SOURCE_MALFORMED_ROW",
            SourceError::Empty(_) => "RETAIL_SOURCE_EMPTY",
            SourceError::Csv(_) => "RETAIL_SOURCE_READ_ERROR",
        }
    }

    /// True when the source could not be opened at all
    pub fn is_unavailable(&self) -> bool {
        matches!(self, SourceError::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_is_distinguishable() {
        let err = SourceError::Unavailable("no file".into());
        assert!(err.is_unavailable());
        assert_eq!(err.code(), "RETAIL_SOURCE_UNAVAILABLE");

        let err = SourceError::MalformedRow {
            line: 4,
            column: "Date",
            value: "yesterday".into(),
        };
        assert!(!err.is_unavailable());
        assert!(err.to_string().contains("line 4"));

        let err = SourceError::Empty("csv:data/sales_data.csv".into());
        assert!(!err.is_unavailable());
        assert_eq!(err.code(), "RETAIL_SOURCE_EMPTY");
    }
}
