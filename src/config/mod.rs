//! Service configuration
//!
//! Loaded from a JSON file; every field has a default, so `{}` is a valid
//! configuration. The `CSV_URL` environment variable, when non-blank,
//! replaces `source.remote_url`.
//!
//! ```json
//! {
//!   "server": { "host": "0.0.0.0", "port": 8080, "allowed_origins": [] },
//!   "source": { "local_path": "data/sales_data.csv", "remote_url": null },
//!   "startup_load_enabled": false,
//!   "default_page_size": 10,
//!   "max_page_size": null
//! }
//! ```

use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::criteria::DEFAULT_PAGE_SIZE;
use crate::source::CsvRowSource;

/// Environment variable overriding the remote source location
pub const CSV_URL_ENV: &str = "CSV_URL";

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "./retaildb.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "RETAIL_CONFIG_READ_ERROR",
            ConfigError::Parse(_) => "RETAIL_CONFIG_PARSE_ERROR",
            ConfigError::Invalid(_) => "RETAIL_CONFIG_INVALID",
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// HTTP listener
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind; must be an IP literal
    #[serde(default = "default_host")]
    pub host: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Browser origins allowed to call the API. Empty allows any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Allowed origins as header values; `None` means any origin
    pub fn cors_origins(&self) -> ConfigResult<Option<Vec<HeaderValue>>> {
        if self.allowed_origins.is_empty() {
            return Ok(None);
        }

        self.allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin.trim()).map_err(|_| {
                    ConfigError::Invalid(format!("server.allowed_origins: bad origin '{}'", origin))
                })
            })
            .collect::<ConfigResult<Vec<_>>>()
            .map(Some)
    }
}

/// Fallback row source location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Local delimited file, tried first
    #[serde(default = "default_local_path")]
    pub local_path: PathBuf,

    /// Remote delimited file, tried when the local file is missing
    #[serde(default)]
    pub remote_url: Option<String>,
}

fn default_local_path() -> PathBuf {
    PathBuf::from("data/sales_data.csv")
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            local_path: default_local_path(),
            remote_url: None,
        }
    }
}

impl SourceConfig {
    pub fn row_source(&self) -> CsvRowSource {
        CsvRowSource::new(self.local_path.clone(), self.remote_url.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub source: SourceConfig,

    /// Copy the source into the store when `serve` starts
    #[serde(default)]
    pub startup_load_enabled: bool,

    /// Page size when the caller gives none
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Largest page size a caller may request; unset means no cap
    #[serde(default)]
    pub max_page_size: Option<usize>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            source: SourceConfig::default(),
            startup_load_enabled: false,
            default_page_size: default_page_size(),
            max_page_size: None,
        }
    }
}

impl Config {
    /// Reads, applies `CSV_URL`, and validates a config file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let mut config = Self::from_json(&content)?;
        config.override_remote_url(std::env::var(CSV_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus `CSV_URL`, for commands run without a config file
    pub fn from_env() -> ConfigResult<Self> {
        let mut config = Self::default();
        config.override_remote_url(std::env::var(CSV_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Replaces the remote URL when `url` is non-blank
    pub fn override_remote_url(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.source.remote_url = Some(url);
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be > 0".into()));
        }

        if self.default_page_size == 0 {
            return Err(ConfigError::Invalid("default_page_size must be > 0".into()));
        }

        if let Some(max) = self.max_page_size {
            if max < self.default_page_size {
                return Err(ConfigError::Invalid(format!(
                    "max_page_size ({}) must be >= default_page_size ({})",
                    max, self.default_page_size
                )));
            }
        }

        self.server.cors_origins()?;
        Ok(())
    }
}
