use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;

/// A record plus the signals derived from it and its history
///
/// `None` means "not computed": not enough history, or a zero denominator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRecord {
    #[serde(flatten)]
    pub record: Record,
    /// Percent change vs. the previous record
    pub price_change_pct: Option<f64>,
    /// Trailing mean volume over the detector window
    pub avg_volume: Option<f64>,
    /// `volume / avg_volume`
    pub volume_spike: Option<f64>,
    pub suspicious: bool,
}

impl AnnotatedRecord {
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.record.date
    }

    #[inline]
    pub fn price(&self) -> f64 {
        self.record.price
    }

    #[inline]
    pub fn volume(&self) -> f64 {
        self.record.volume
    }
}
