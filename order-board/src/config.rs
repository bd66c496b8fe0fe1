//! Configuration for the order board

use std::env;
use std::str::FromStr;

use common::error::{Error, Result};

/// How replies are rendered on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human readable line per order or level
    Text,
    /// One JSON document per reply
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::ConfigurationError(format!(
                "Unknown output format '{}', expected 'text' or 'json'",
                other
            ))),
        }
    }
}

/// Configuration for the order board binary
#[derive(Debug, Clone)]
pub struct OrderBoardConfig {
    /// Tracing filter directive
    pub log_filter: String,
    /// Reply rendering
    pub output: OutputFormat,
}

impl Default for OrderBoardConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl OrderBoardConfig {
    /// Create a new configuration using environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create a new configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_filter = match lookup("BOARD_LOG") {
            Some(filter) if filter.trim().is_empty() => {
                return Err(Error::ConfigurationError("BOARD_LOG must not be empty".to_string()));
            }
            Some(filter) => filter,
            None => defaults.log_filter,
        };

        let output = match lookup("BOARD_OUTPUT") {
            Some(format) => format.parse()?,
            None => defaults.output,
        };

        Ok(Self { log_filter, output })
    }
}
