use pumpwatch_core::SeriesError;
use pumpwatch_detector::DetectorError;
use pumpwatch_report::ReportError;
use pumpwatch_series::GeneratorError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum RunError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Detector error: {0}")]
    Detector(#[from] DetectorError),

    #[error("Invalid series: {0}")]
    Series(#[from] SeriesError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

pub type Result<T> = std::result::Result<T, RunError>;
