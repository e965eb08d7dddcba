//! Navigator client configuration

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::NavigatorError;

/// Configuration for the campus navigator client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Base URL of the navigator web service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of tile existence checks in flight at once
    #[serde(default = "default_tile_probe_concurrency")]
    pub tile_probe_concurrency: usize,
}

fn default_base_url() -> String {
    "https://navigator.tu-dresden.de/".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("campus-navigator/", env!("CARGO_PKG_VERSION")).to_string()
}

const fn default_tile_probe_concurrency() -> usize {
    8
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            tile_probe_concurrency: default_tile_probe_concurrency(),
        }
    }
}

impl NavigatorConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            tile_probe_concurrency: 2,
            ..Default::default()
        }
    }

    /// Parsed base URL, always ending in `/` so relative paths join below it
    ///
    /// # Errors
    ///
    /// Returns `NavigatorError::ConfigurationError` if `base_url` is not an
    /// absolute URL.
    pub fn base_url(&self) -> Result<Url, NavigatorError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| NavigatorError::ConfigurationError(format!("base_url: {e}")))?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        let url = Url::parse(&self.base_url).map_err(|e| format!("base_url is invalid: {e}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err("base_url must use http or https".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }

        if self.tile_probe_concurrency == 0 {
            return Err("tile_probe_concurrency must be greater than 0".to_string());
        }

        Ok(())
    }
}
