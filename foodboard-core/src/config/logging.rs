//! Logging configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;

use crate::logging::LogFormat;

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Env: FOODBOARD_LOG_LEVEL
    pub level: String,
    /// Env: FOODBOARD_LOG_FORMAT
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: LogFormat::Human }
    }
}

impl LoggingConfig {
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(level) = env::var("FOODBOARD_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(format) = env::var("FOODBOARD_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.format = f;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !LEVELS.contains(&self.level.to_ascii_lowercase().as_str()) {
            bail!("Invalid log level '{}': expected one of {}", self.level, LEVELS.join(", "));
        }
        Ok(())
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        let cfg = LoggingConfig { level: "DEBUG".to_string(), ..Default::default() };
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_level_fails() {
        let cfg = LoggingConfig { level: "loud".to_string(), ..Default::default() };
        assert!(cfg.validate().is_err());
    }
}
