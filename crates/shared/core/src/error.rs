use chrono::NaiveDate;
use thiserror::Error;

/// Domain-level errors for malformed input series
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    #[error("Series is empty")]
    Empty,

    #[error("Date at index {index} ({current}) does not follow {previous}")]
    NonIncreasingDate {
        index: usize,
        previous: NaiveDate,
        current: NaiveDate,
    },
}

pub type SeriesResult<T> = std::result::Result<T, SeriesError>;
