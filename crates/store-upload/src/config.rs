//! Upload configuration.
//!
//! Defaults can be overridden by a TOML file and then by command-line flags:
//!
//! ```toml
//! endpoint = "https://erp.example.com/api/stores/import"
//! timeout_secs = 300
//! body_preview_chars = 2000
//! ```

use std::path::Path;
use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{Result, UploadError};

/// Import route used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/stores/import";

/// Upper bound on the wait for the import response.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Number of response body characters shown to the operator.
pub const DEFAULT_BODY_PREVIEW_CHARS: usize = 2000;

/// Settings for a single upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UploadConfig {
    /// Absolute URL of the import route.
    pub endpoint: String,
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
    /// How much of the response body to print.
    pub body_preview_chars: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            body_preview_chars: DEFAULT_BODY_PREVIEW_CHARS,
        }
    }
}

impl UploadConfig {
    /// Loads settings from a TOML file; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| UploadError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| UploadError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Replace the endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replace the timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parses the endpoint, accepting only absolute http and https URLs.
    pub fn endpoint_url(&self) -> Result<Url> {
        let invalid = |reason: String| UploadError::InvalidEndpoint {
            url: self.endpoint.clone(),
            reason,
        };
        let url = Url::parse(&self.endpoint).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }
}
