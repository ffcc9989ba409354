//! Pipeline - one detection run
//!
//! Pulls a series from a source, checks it is ordered, annotates it and
//! summarises the flags. Rendering is left to the caller.

use pumpwatch_core::{AnnotatedRecord, Record, SeriesSource, validate_series};
use pumpwatch_detector::{DetectionSummary, ManipulationDetector};
use pumpwatch_series::SyntheticSeries;

use crate::config::RunConfig;
use crate::error::Result;

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Series as produced by the source
    pub records: Vec<Record>,
    /// Detector output, aligned with `records`
    pub annotated: Vec<AnnotatedRecord>,
    pub summary: DetectionSummary,
}

/// Generator plus detector, built from a validated `RunConfig`
pub struct Pipeline {
    config: RunConfig,
    source: SyntheticSeries,
    detector: ManipulationDetector,
}

impl Pipeline {
    /// Create a pipeline with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(RunConfig::default())
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(config: RunConfig) -> Result<Self> {
        let source = SyntheticSeries::new(config.series.clone())?;
        let detector = ManipulationDetector::try_new(config.detector.clone())?;

        Ok(Self {
            config,
            source,
            detector,
        })
    }

    /// Get current configuration
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run against the configured synthetic series
    pub fn run(&self) -> Result<PipelineOutput> {
        self.run_source(&self.source)
    }

    /// Run against any series source
    pub fn run_source<S: SeriesSource + ?Sized>(&self, source: &S) -> Result<PipelineOutput> {
        let records = source.records();
        log::info!("Loaded {} records from {} source", records.len(), source.name());

        validate_series(&records)?;

        let annotated = self.detector.annotate(&records);
        let summary = DetectionSummary::from_annotated(&annotated);

        log::info!(
            "Detected {} suspicious days out of {} ({:.1}%)",
            summary.suspicious_days(),
            summary.total_days,
            summary.suspicious_pct()
        );

        Ok(PipelineOutput {
            records,
            annotated,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunError;
    use pumpwatch_core::SeriesError;

    #[test]
    fn test_default_pipeline_runs() {
        let output = Pipeline::new().unwrap().run().unwrap();
        assert_eq!(output.records.len(), 100);
        assert_eq!(output.annotated.len(), 100);
        assert_eq!(output.summary.total_days, 100);
    }

    #[test]
    fn test_empty_source_rejected() {
        let pipeline = Pipeline::new().unwrap();
        let err = pipeline.run_source(&Vec::<Record>::new()).unwrap_err();
        assert!(matches!(err, RunError::Series(SeriesError::Empty)));
    }

    #[test]
    fn test_config_error_keeps_source_chain() {
        use std::error::Error;

        let err = RunError::from(RunConfig::from_json("{ \"series\": 3 }").unwrap_err());
        let config_err = err.source().unwrap();
        assert!(config_err.to_string().starts_with("Failed to parse config"));
        assert!(config_err.source().unwrap().is::<serde_json::Error>());
    }

    #[test]
    fn test_invalid_detector_config_rejected() {
        let mut config = RunConfig::default();
        config.detector.volume_window = 0;
        assert!(matches!(
            Pipeline::with_config(config),
            Err(RunError::Detector(_))
        ));
    }
}
