use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("Series must contain at least one day")]
    NoDays,

    #[error("Invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Episode {index} covers days {start}..{end} but the series has {days} days")]
    EpisodeOutOfRange {
        index: usize,
        start: usize,
        end: usize,
        days: usize,
    },

    #[error("{days} days from {start} run past the last representable date")]
    DateOutOfRange { start: NaiveDate, days: usize },

    #[error("Distribution error: {0}")]
    Distribution(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
