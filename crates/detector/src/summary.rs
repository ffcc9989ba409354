use pumpwatch_core::AnnotatedRecord;
use serde::{Deserialize, Serialize};

/// Aggregate view of one detector run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionSummary {
    /// Number of records analyzed
    pub total_days: usize,
    /// Flagged records, in series order
    pub flagged: Vec<AnnotatedRecord>,
}

impl DetectionSummary {
    pub fn from_annotated(annotated: &[AnnotatedRecord]) -> Self {
        Self {
            total_days: annotated.len(),
            flagged: annotated.iter().filter(|r| r.suspicious).copied().collect(),
        }
    }

    /// Number of flagged days
    pub fn suspicious_days(&self) -> usize {
        self.flagged.len()
    }

    /// Share of flagged days in percent (0 for an empty run)
    pub fn suspicious_pct(&self) -> f64 {
        if self.total_days == 0 {
            return 0.0;
        }
        self.suspicious_days() as f64 / self.total_days as f64 * 100.0
    }
}
