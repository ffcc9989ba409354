//! Generator configuration
//!
//! Defaults reproduce the reference run: 100 days from 2025-04-01, seed 50,
//! a pump-and-dump at day 30 and a pump at day 70.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};

/// One planted manipulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManipulationEpisode {
    /// Index of the first affected day
    pub start: usize,
    /// Added to the price of day `start + k`
    pub price_offsets: Vec<f64>,
    /// Volume multiplier applied across the episode
    pub volume_multiplier: f64,
}

impl ManipulationEpisode {
    pub fn new(start: usize, price_offsets: Vec<f64>, volume_multiplier: f64) -> Self {
        Self {
            start,
            price_offsets,
            volume_multiplier,
        }
    }

    /// Sharp rise then crash, triple volume
    pub fn pump_and_dump(start: usize) -> Self {
        Self::new(start, vec![5.0, 15.0, 25.0, 20.0, 10.0, -10.0], 3.0)
    }

    /// Short pump, 2.5x volume
    pub fn pump(start: usize) -> Self {
        Self::new(start, vec![8.0, 20.0, 15.0], 2.5)
    }

    /// Number of days covered
    pub fn len(&self) -> usize {
        self.price_offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.price_offsets.is_empty()
    }

    /// One past the last affected day; `None` if that overflows `usize`
    pub fn end(&self) -> Option<usize> {
        self.start.checked_add(self.len())
    }

    /// Whether day `index` falls inside the episode
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && self.end().is_some_and(|end| index < end)
    }
}

/// Configuration for the synthetic series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// RNG seed; the same seed always yields the same series
    pub seed: u64,
    /// Number of daily records
    pub days: usize,
    /// Date of the first record
    pub start_date: NaiveDate,
    /// Price before the first step
    pub initial_price: f64,
    /// Std dev of the daily price step
    pub price_step_std: f64,
    pub volume_mean: f64,
    pub volume_std: f64,
    /// Manipulations planted after the walk is drawn
    pub episodes: Vec<ManipulationEpisode>,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            seed: 50,
            days: 100,
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap_or(NaiveDate::MIN),
            initial_price: 100.0,
            price_step_std: 2.0,
            volume_mean: 1000.0,
            volume_std: 200.0,
            episodes: vec![
                ManipulationEpisode::pump_and_dump(30),
                ManipulationEpisode::pump(70),
            ],
        }
    }
}

impl SeriesConfig {
    /// Same configuration without planted episodes
    pub fn without_episodes(mut self) -> Self {
        self.episodes.clear();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.days == 0 {
            return Err(GeneratorError::NoDays);
        }

        if self.last_date().is_none() {
            return Err(GeneratorError::DateOutOfRange {
                start: self.start_date,
                days: self.days,
            });
        }

        check_finite("initial_price", self.initial_price)?;
        check_finite("volume_mean", self.volume_mean)?;
        check_std("price_step_std", self.price_step_std)?;
        check_std("volume_std", self.volume_std)?;

        for (index, episode) in self.episodes.iter().enumerate() {
            if episode.end().is_none_or(|end| end > self.days) {
                return Err(GeneratorError::EpisodeOutOfRange {
                    index,
                    start: episode.start,
                    end: episode.start.saturating_add(episode.len()),
                    days: self.days,
                });
            }
            check_finite("volume_multiplier", episode.volume_multiplier)?;
            for &offset in &episode.price_offsets {
                check_finite("price_offset", offset)?;
            }
        }

        Ok(())
    }

    /// Date of the final record, if it is representable
    pub fn last_date(&self) -> Option<NaiveDate> {
        let offset = u64::try_from(self.days.checked_sub(1)?).ok()?;
        self.start_date.checked_add_days(Days::new(offset))
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(GeneratorError::InvalidParameter { name, value });
    }
    Ok(())
}

fn check_std(name: &'static str, value: f64) -> Result<()> {
    check_finite(name, value)?;
    if value < 0.0 {
        return Err(GeneratorError::InvalidParameter { name, value });
    }
    Ok(())
}
