//! Synthetic series generator
//!
//! Produces a deterministic daily random walk for a single asset and plants
//! pump-and-dump episodes in it, giving the detector something to find.
//!
//! - **Prices**: `initial_price` plus the running sum of normal steps
//! - **Volumes**: independent normal draws around `volume_mean`
//! - **Episodes**: per-day price offsets and a volume multiplier over a range

pub mod config;
pub mod error;
pub mod generator;

pub use config::{ManipulationEpisode, SeriesConfig};
pub use error::{GeneratorError, Result};
pub use generator::SyntheticSeries;
