//! Configuration system for Foodboard
//!
//! # Configuration Hierarchy
//!
//! Configuration values are resolved in the following order (highest priority wins):
//!
//! 1. **Code** (builder methods, CLI flags) - Highest priority
//! 2. **Environment Variables** - Override file config
//! 3. **Config File** (foodboard.toml) - Override defaults
//! 4. **Defaults** - Lowest priority
//!
//! # Example
//!
//! ```no_run
//! use foodboard_core::config::FoodboardConfig;
//!
//! let config = FoodboardConfig::load()?;
//! println!("API at {}", config.api.base_url);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3333"
//! timeout_secs = 10
//!
//! [logging]
//! level = "debug"
//! format = "json"
//! ```

pub mod api;
pub mod logging;

pub use api::ApiConfig;
pub use logging::LoggingConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "foodboard.toml";

/// Complete Foodboard configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodboardConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

impl FoodboardConfig {
    /// Load configuration with full supersedence chain
    ///
    /// Priority order (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file (foodboard.toml)
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from a specific file. A missing file means defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut config = Self::default();

        if path.exists() {
            let file_config = Self::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.merge(file_config);
        }

        config.apply_env_vars();

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.as_ref().display()))
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: Self) {
        self.api.merge(other.api);
        self.logging.merge(other.logging);
    }

    /// Apply environment variables to configuration
    pub fn apply_env_vars(&mut self) {
        self.api.apply_env_vars();
        self.logging.apply_env_vars();
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogFormat;
    use std::sync::Mutex;

    // Environment variables are process-wide; tests touching them run one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_VARS: [&str; 4] = [
        "FOODBOARD_API_URL",
        "FOODBOARD_API_TIMEOUT",
        "FOODBOARD_LOG_LEVEL",
        "FOODBOARD_LOG_FORMAT",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    fn write_config(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("foodboard.toml");
        std::fs::write(
            &path,
            r#"
[api]
base_url = "http://file.example"
timeout_secs = 7

[logging]
level = "warn"
"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = FoodboardConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:3333");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_means_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let config = FoodboardConfig::load_from(dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.api.timeout_secs, FoodboardConfig::default().api.timeout_secs);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("foodboard.toml");
        std::fs::write(
            &path,
            r#"
[api]
base_url = "https://foods.example.com/api"
timeout_secs = 3

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        let config = FoodboardConfig::from_file(&path).unwrap();
        assert_eq!(config.api.base_url, "https://foods.example.com/api");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_partial_file_keeps_section_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("foodboard.toml");
        std::fs::write(&path, "[api]\ntimeout_secs = 42\n").unwrap();

        let config = FoodboardConfig::from_file(&path).unwrap();
        assert_eq!(config.api.timeout_secs, 42);
        assert_eq!(config.api.base_url, "http://localhost:3333");
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_invalid_toml_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("foodboard.toml");
        std::fs::write(&path, "[api\nbase_url = ").unwrap();

        let err = FoodboardConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn test_env_overrides_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir);

        std::env::set_var("FOODBOARD_API_URL", "https://env.example/api");
        std::env::set_var("FOODBOARD_API_TIMEOUT", "30");
        std::env::set_var("FOODBOARD_LOG_LEVEL", "trace");
        std::env::set_var("FOODBOARD_LOG_FORMAT", "logfmt");
        let config = FoodboardConfig::load_from(&path).unwrap();
        clear_env();

        assert_eq!(config.api.base_url, "https://env.example/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.format, LogFormat::Logfmt);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unparsable_env_keeps_file_values() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir);

        std::env::set_var("FOODBOARD_API_TIMEOUT", "soon");
        std::env::set_var("FOODBOARD_LOG_FORMAT", "xml");
        let config = FoodboardConfig::load_from(&path).unwrap();
        clear_env();

        assert_eq!(config.api.base_url, "http://file.example");
        assert_eq!(config.api.timeout_secs, 7);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_file_without_env_keeps_file_values() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        let dir = tempfile::tempdir().unwrap();

        let config = FoodboardConfig::load_from(write_config(&dir)).unwrap();

        assert_eq!(config.api.timeout_secs, 7);
        assert_eq!(config.logging.level, "warn");
    }
}
