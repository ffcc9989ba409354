//! Pumpwatch Manipulation Detector
//!
//! Flags days where a large price move coincides with abnormal trading volume,
//! the footprint of a pump-and-dump.
//!
//! ## Signals
//!
//! ```text
//!  price[i-1], price[i] ──► price_change_pct ──► |Δ%| > 5 ──┐
//!                                                          AND ──► suspicious
//!  volume[i-19..=i] ──► avg_volume ──► volume_spike > 2 ────┘
//! ```
//!
//! Each signal uses only the current and earlier records. Where history is
//! too short or a denominator is zero the signal is `None`, and a `None`
//! signal never flags a day.

pub mod config;
pub mod detector;
pub mod error;
pub mod summary;

// Re-export main types
pub use config::{
    DetectorConfig, PRICE_MOVE_THRESHOLD_PCT, VOLUME_SPIKE_THRESHOLD, VOLUME_WINDOW,
};
pub use detector::{ManipulationDetector, detect_manipulation};
pub use error::{DetectorError, Result};
pub use summary::DetectionSummary;
