//! Remote API configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Where the collection resource lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the `/foods` paths are joined onto
    /// Env: FOODBOARD_API_URL
    /// Default: "http://localhost:3333"
    pub base_url: String,

    /// Per-request timeout in seconds
    /// Env: FOODBOARD_API_TIMEOUT
    /// Default: 10
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: "http://localhost:3333".to_string(), timeout_secs: 10 }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: Self) {
        self.base_url = other.base_url;
        self.timeout_secs = other.timeout_secs;
    }

    /// Apply environment variables
    pub fn apply_env_vars(&mut self) {
        if let Ok(url) = env::var("FOODBOARD_API_URL") {
            self.base_url = url;
        }

        if let Ok(timeout) = env::var("FOODBOARD_API_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.timeout_secs = t;
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            bail!("Invalid base_url: cannot be empty");
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            bail!("Invalid base_url '{}': must start with http:// or https://", self.base_url);
        }

        if self.timeout_secs == 0 {
            bail!("Invalid timeout_secs: must be greater than 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ApiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_http_url() {
        let cfg = ApiConfig::default().with_base_url("ftp://example.com");
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let cfg = ApiConfig { timeout_secs: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }
}
