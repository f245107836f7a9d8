//! Log formatting options for different output styles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How log lines are rendered
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Example: 2024-01-15 10:30:00.123 INFO  [foodboard_core::sync] Loaded 3 food plates
    #[default]
    Human,

    /// Example: {"timestamp":"2024-01-15T10:30:00Z","level":"INFO","target":"...","message":"..."}
    Json,

    /// Example: timestamp=2024-01-15T10:30:00Z level=INFO target=... message="..."
    Logfmt,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" | "text" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            "logfmt" => Ok(LogFormat::Logfmt),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// One log event, detached from `log::Record` lifetimes
#[derive(Debug, Clone)]
pub struct LogLine {
    pub timestamp: DateTime<Utc>,
    pub level: log::Level,
    pub target: String,
    pub message: String,
}

impl LogLine {
    pub fn new(level: log::Level, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self { timestamp: Utc::now(), level, target: target.into(), message: message.into() }
    }

    pub fn from_record(record: &log::Record) -> Self {
        Self::new(record.level(), record.target(), record.args().to_string())
    }
}

impl LogFormat {
    pub fn format_line(&self, line: &LogLine) -> String {
        match self {
            LogFormat::Human => format_human(line),
            LogFormat::Json => format_json(line),
            LogFormat::Logfmt => format_logfmt(line),
        }
    }
}

fn format_json(line: &LogLine) -> String {
    let json = serde_json::json!({
        "timestamp": line.timestamp.to_rfc3339(),
        "level": line.level.to_string(),
        "target": line.target,
        "message": line.message,
    });
    json.to_string()
}

fn format_human(line: &LogLine) -> String {
    let timestamp = line.timestamp.format("%Y-%m-%d %H:%M:%S%.3f");
    format!("{} {:5} [{}] {}", timestamp, line.level.to_string(), line.target, line.message)
}

fn format_logfmt(line: &LogLine) -> String {
    format!(
        "timestamp={} level={} target={} message=\"{}\"",
        line.timestamp.to_rfc3339(),
        line.level,
        line.target,
        line.message.replace('"', "\\\"")
    )
}
