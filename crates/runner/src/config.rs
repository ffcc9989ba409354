//! Run configuration
//!
//! Supports a JSON file with three optional sections:
//! - `series`: generator seed, length, distributions and episodes
//! - `detector`: thresholds and volume window
//! - `chart`: panel size, or `enabled: false` to skip charts
//!
//! Every field has a default, so `{}` reproduces the reference run.

use pumpwatch_detector::DetectorConfig;
use pumpwatch_report::ChartConfig;
use pumpwatch_series::SeriesConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root configuration for a detection run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Synthetic series generation
    pub series: SeriesConfig,

    /// Detection thresholds
    pub detector: DetectorConfig,

    /// Chart rendering
    pub chart: ChartConfig,
}

impl RunConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            source: e,
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
