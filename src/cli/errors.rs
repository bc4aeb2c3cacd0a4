//! CLI error types
//!
//! Every CLI error ends the process with a non-zero status.

use std::fmt;
use std::io;

use crate::config::ConfigError;
use crate::search::SearchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file missing or invalid
    ConfigError,
    /// stdin/stdout failure
    IoError,
    /// stdin did not hold valid search JSON
    InvalidInput,
    /// The search or load itself failed
    SearchFailed,
    /// Service could not start
    BootFailed,
}

impl CliErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "RETAIL_CLI_CONFIG_ERROR",
            Self::IoError => "RETAIL_CLI_IO_ERROR",
            Self::InvalidInput => "RETAIL_CLI_INVALID_INPUT",
            Self::SearchFailed => "RETAIL_CLI_SEARCH_FAILED",
            Self::BootFailed => "RETAIL_CLI_BOOT_FAILED",
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidInput, msg)
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::invalid_input(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

impl From<SearchError> for CliError {
    fn from(e: SearchError) -> Self {
        Self::new(CliErrorCode::SearchFailed, format!("{}: {}", e.code(), e))
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceError;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config_error("missing file");
        assert_eq!(err.to_string(), "RETAIL_CLI_CONFIG_ERROR: missing file");
    }

    #[test]
    fn test_search_error_keeps_inner_code() {
        let err = CliError::from(SearchError::from(SourceError::Unavailable("x".into())));
        assert_eq!(err.code(), &CliErrorCode::SearchFailed);
        assert!(err.message().starts_with("RETAIL_SOURCE_UNAVAILABLE"));
    }
}
