//! Client configuration loaded from TOML.
//!
//! Every key is optional in the file; missing keys take the defaults below.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{RequestError, Result};

/// Root directory shown at startup and by `go_root`.
pub const ROOT_DIR: &str = "/";

/// Settings for one browsing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Player base URL (scheme, host, optional port).
    pub base_url: String,
    /// Status poll period in milliseconds.
    pub poll_interval_ms: u64,
    /// Optional per-request timeout in milliseconds.
    pub request_timeout_ms: Option<u64>,
    /// Directory listed on startup.
    pub start_dir: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1".to_string(),
            poll_interval_ms: 1000,
            request_timeout_ms: None,
            start_dir: ROOT_DIR.to_string(),
        }
    }
}

impl ClientConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: ClientConfig = toml::from_str(raw).map_err(|e| RequestError::InvalidConfig {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.base_url).map_err(|e| RequestError::InvalidConfig {
            message: format!("base_url '{}': {}", self.base_url, e),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RequestError::InvalidConfig {
                message: format!("base_url must be http or https, got '{}'", url.scheme()),
            });
        }
        if self.poll_interval_ms == 0 {
            return Err(RequestError::InvalidConfig {
                message: "poll_interval_ms must be greater than zero".to_string(),
            });
        }
        if self.start_dir.is_empty() {
            return Err(RequestError::InvalidConfig {
                message: "start_dir must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
