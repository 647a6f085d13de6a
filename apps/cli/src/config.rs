//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::Serialize;
use std::env;
use std::str::FromStr;

/// Where order text comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    /// The three built-in sample orders.
    #[default]
    Samples,
    /// A single order read from standard input.
    Stdin,
}

impl FromStr for InputSource {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "samples" => Ok(InputSource::Samples),
            "stdin" => Ok(InputSource::Stdin),
            _ => Err(()),
        }
    }
}

/// How receipts are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The plain receipt text.
    #[default]
    Text,
    /// Pretty-printed `ReceiptSummary` JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CliConfig {
    /// Input source (`TALLY_INPUT`)
    pub input: InputSource,

    /// Output format (`TALLY_FORMAT`)
    pub format: OutputFormat,

    /// Tracing filter directive (`TALLY_LOG`)
    pub log_filter: String,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = CliConfig {
            input: match lookup("TALLY_INPUT") {
                Some(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("TALLY_INPUT".to_string()))?,
                None => InputSource::default(),
            },

            format: match lookup("TALLY_FORMAT") {
                Some(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("TALLY_FORMAT".to_string()))?,
                None => OutputFormat::default(),
            },

            log_filter: lookup("TALLY_LOG").unwrap_or_else(|| "warn".to_string()),
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
