//! Detection thresholds
//!
//! The defaults are untuned constants. They are kept as named values so a
//! run can be reproduced, not because they carry statistical weight.

use serde::{Deserialize, Serialize};

use crate::error::{DetectorError, Result};

/// Absolute daily price move (percent) a day must exceed
pub const PRICE_MOVE_THRESHOLD_PCT: f64 = 5.0;

/// Volume / trailing-average ratio a day must exceed
pub const VOLUME_SPIKE_THRESHOLD: f64 = 2.0;

/// Number of records in the trailing volume average, current day included
pub const VOLUME_WINDOW: usize = 20;

/// Configuration for the manipulation detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Flag when |price_change_pct| is strictly above this
    pub price_move_threshold_pct: f64,
    /// Flag when volume_spike is strictly above this
    pub volume_spike_threshold: f64,
    /// Trailing window length for avg_volume
    pub volume_window: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            price_move_threshold_pct: PRICE_MOVE_THRESHOLD_PCT,
            volume_spike_threshold: VOLUME_SPIKE_THRESHOLD,
            volume_window: VOLUME_WINDOW,
        }
    }
}

impl DetectorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.volume_window == 0 {
            return Err(DetectorError::InvalidWindow(self.volume_window));
        }
        check_threshold("price_move_threshold_pct", self.price_move_threshold_pct)?;
        check_threshold("volume_spike_threshold", self.volume_spike_threshold)?;
        Ok(())
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DetectorError::InvalidThreshold { name, value });
    }
    Ok(())
}
