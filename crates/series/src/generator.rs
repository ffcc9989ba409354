//! Seeded random-walk generator
//!
//! Draws every price step first, then every volume, from one `StdRng`, so a
//! seed fixes the whole series. Episodes are applied on top of the drawn walk.

use pumpwatch_core::{Record, SeriesSource};
use rand::prelude::*;
use rand_distr::Normal;

use crate::config::SeriesConfig;
use crate::error::{GeneratorError, Result};

/// Synthetic daily series with planted manipulations
#[derive(Debug, Clone)]
pub struct SyntheticSeries {
    config: SeriesConfig,
    price_steps: Normal<f64>,
    volumes: Normal<f64>,
}

impl SyntheticSeries {
    /// Create a generator after validating the configuration
    pub fn new(config: SeriesConfig) -> Result<Self> {
        config.validate()?;

        let price_steps = Normal::new(0.0, config.price_step_std)
            .map_err(|e| GeneratorError::Distribution(e.to_string()))?;
        let volumes = Normal::new(config.volume_mean, config.volume_std)
            .map_err(|e| GeneratorError::Distribution(e.to_string()))?;

        Ok(Self {
            config,
            price_steps,
            volumes,
        })
    }

    /// Get current configuration
    pub fn config(&self) -> &SeriesConfig {
        &self.config
    }

    /// Generate the series
    pub fn generate(&self) -> Vec<Record> {
        let days = self.config.days;
        let mut rng = StdRng::seed_from_u64(self.config.seed);

        let mut level = self.config.initial_price;
        let mut prices: Vec<f64> = (0..days)
            .map(|_| {
                level += self.price_steps.sample(&mut rng);
                level
            })
            .collect();
        let mut volumes: Vec<f64> = (0..days).map(|_| self.volumes.sample(&mut rng)).collect();

        for episode in &self.config.episodes {
            for (k, offset) in episode.price_offsets.iter().enumerate() {
                prices[episode.start + k] += offset;
                volumes[episode.start + k] *= episode.volume_multiplier;
            }
            log::debug!(
                "Planted {}-day episode from day {} (volume x{})",
                episode.len(),
                episode.start,
                episode.volume_multiplier
            );
        }

        let dates = std::iter::successors(Some(self.config.start_date), |d| d.succ_opt());
        let records: Vec<Record> = dates
            .zip(prices.into_iter().zip(volumes))
            .map(|(date, (price, volume))| Record::new(date, price, volume))
            .collect();

        log::info!(
            "Generated {} days from {} with seed {} and {} episodes",
            records.len(),
            self.config.start_date,
            self.config.seed,
            self.config.episodes.len()
        );

        records
    }
}

impl SeriesSource for SyntheticSeries {
    fn records(&self) -> Vec<Record> {
        self.generate()
    }

    fn name(&self) -> &str {
        "synthetic"
    }
}
