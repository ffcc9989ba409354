//! Manipulation Detector
//!
//! One forward pass over the series. A `RollingMean` carries the trailing
//! volume window and the previous record carries the price delta, so each
//! record is annotated in O(1).

use pumpwatch_core::{AnnotatedRecord, Record, RollingMean, pct_change, ratio};

use crate::config::DetectorConfig;
use crate::error::Result;

/// Rule-based pump-and-dump detector
#[derive(Debug, Clone, Default)]
pub struct ManipulationDetector {
    config: DetectorConfig,
}

impl ManipulationDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Create a detector after validating the configuration
    pub fn try_new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Get current configuration
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Annotate every record with its signals and suspicious flag.
    ///
    /// The output has the same length and order as `records`. The input is
    /// only read.
    pub fn annotate(&self, records: &[Record]) -> Vec<AnnotatedRecord> {
        let mut window = RollingMean::new(self.config.volume_window);
        let mut previous: Option<&Record> = None;
        let mut annotated = Vec::with_capacity(records.len());

        for record in records {
            window.push(record.volume);

            let price_change_pct = previous.and_then(|prev| pct_change(prev.price, record.price));
            let avg_volume = window.mean();
            let volume_spike = avg_volume.and_then(|avg| ratio(record.volume, avg));
            let suspicious = self.is_suspicious(price_change_pct, volume_spike);

            if suspicious {
                log::debug!(
                    "Suspicious day {}: price change {:.2}%, volume spike {:.2}x",
                    record.date,
                    price_change_pct.unwrap_or_default(),
                    volume_spike.unwrap_or_default()
                );
            }

            annotated.push(AnnotatedRecord {
                record: *record,
                price_change_pct,
                avg_volume,
                volume_spike,
                suspicious,
            });
            previous = Some(record);
        }

        log::info!(
            "Annotated {} records, {} flagged suspicious",
            annotated.len(),
            annotated.iter().filter(|r| r.suspicious).count()
        );

        annotated
    }

    /// Both signals must be present and strictly above their thresholds
    fn is_suspicious(&self, price_change_pct: Option<f64>, volume_spike: Option<f64>) -> bool {
        match (price_change_pct, volume_spike) {
            (Some(change), Some(spike)) => {
                change.abs() > self.config.price_move_threshold_pct
                    && spike > self.config.volume_spike_threshold
            }
            _ => false,
        }
    }
}

/// Annotate `records` with the default thresholds
pub fn detect_manipulation(records: &[Record]) -> Vec<AnnotatedRecord> {
    ManipulationDetector::default().annotate(records)
}
