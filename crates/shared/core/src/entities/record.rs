use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{SeriesError, SeriesResult};

/// One daily observation of a single asset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub date: NaiveDate,
    pub price: f64,
    pub volume: f64,
}

impl Record {
    pub fn new(date: NaiveDate, price: f64, volume: f64) -> Self {
        Self {
            date,
            price,
            volume,
        }
    }
}

/// Check that a series is non-empty and strictly increasing by date.
///
/// The detector itself never calls this; callers that take series from
/// outside the process use it before annotating.
pub fn validate_series(records: &[Record]) -> SeriesResult<()> {
    if records.is_empty() {
        return Err(SeriesError::Empty);
    }

    for (index, pair) in records.windows(2).enumerate() {
        if pair[1].date <= pair[0].date {
            return Err(SeriesError::NonIncreasingDate {
                index: index + 1,
                previous: pair[0].date,
                current: pair[1].date,
            });
        }
    }

    Ok(())
}
