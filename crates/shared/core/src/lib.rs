//! Pumpwatch Core Domain
//!
//! Pure domain types for the Pumpwatch manipulation detector.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod ports;
pub mod stats;

// Re-export commonly used types at crate root
pub use entities::{AnnotatedRecord, Record, validate_series};
pub use error::{SeriesError, SeriesResult};
pub use ports::SeriesSource;
pub use stats::{RollingMean, pct_change, ratio};
