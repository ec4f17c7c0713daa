//! Application configuration.
//!
//! TOML on disk, dates as `YYYY-MM-DD` strings parsed on access. Only the
//! dataset source is required; the calendar window defaults to the
//! dashboard's shipped range.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from reading or interpreting a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path} failed: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("parse config TOML: {0}")]
    ParseFailed(String),

    #[error("invalid {field} date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    #[error("calendar window start {start} is after end {end}")]
    WindowInverted { start: String, end: String },
}

/// Where the dataset CSV comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// An `http(s)://` URL or a local path.
    pub source: String,
}

/// The range the holiday rules are expanded over at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub start: String,
    pub end: String,
}

impl Default for CalendarConfig {
    /// The dashboard's shipped query window.
    fn default() -> Self {
        Self {
            start: "2022-01-01".into(),
            end: "2025-12-31".into(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Optional fixed watchlist for the selection control. When absent the
    /// catalog falls back to the symbols present in the loaded table.
    #[serde(default)]
    pub symbols: Option<Vec<String>>,

    pub data: DataConfig,

    #[serde(default)]
    pub calendar: CalendarConfig,
}

impl AppConfig {
    /// A config pointing at `source` with all defaults.
    pub fn for_source(source: impl Into<String>) -> Self {
        Self {
            symbols: None,
            data: DataConfig {
                source: source.into(),
            },
            calendar: CalendarConfig::default(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|err| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|err| ConfigError::ParseFailed(err.to_string()))
    }

    /// The parsed calendar window, validated as `start <= end`.
    pub fn calendar_window(&self) -> Result<(NaiveDate, NaiveDate), ConfigError> {
        let start = parse_date("calendar.start", &self.calendar.start)?;
        let end = parse_date("calendar.end", &self.calendar.end)?;
        if start > end {
            return Err(ConfigError::WindowInverted {
                start: self.calendar.start.clone(),
                end: self.calendar.end.clone(),
            });
        }
        Ok((start, end))
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ConfigError::InvalidDate {
        field,
        value: value.to_string(),
    })
}
