//! Trailing-window mean with a compensated running sum

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Fixed-size trailing window over the most recent values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollingMean {
    /// Values in the window, oldest first
    values: VecDeque<f64>,
    /// Window size
    window_size: usize,
    /// Running sum of the finite values in the window
    sum: f64,
    /// Low-order bits lost by `sum` (Neumaier)
    compensation: f64,
    /// NaN or infinite values currently in the window
    non_finite: usize,
}

impl RollingMean {
    /// Create a new rolling mean over `window_size` values
    pub fn new(window_size: usize) -> Self {
        let window_size = window_size.max(1);
        Self {
            values: VecDeque::with_capacity(window_size),
            window_size,
            sum: 0.0,
            compensation: 0.0,
            non_finite: 0,
        }
    }

    /// Add a value, evicting the oldest once the window is full
    #[inline]
    pub fn push(&mut self, value: f64) {
        if self.values.len() >= self.window_size {
            if let Some(removed) = self.values.pop_front() {
                if removed.is_finite() {
                    self.accumulate(-removed);
                } else {
                    self.non_finite -= 1;
                }
            }
        }

        if value.is_finite() {
            self.accumulate(value);
        } else {
            self.non_finite += 1;
        }
        self.values.push_back(value);
    }

    /// Mean of the full window.
    ///
    /// `None` until `window_size` values were pushed, and while a NaN or
    /// infinite value is still inside the window.
    #[inline]
    pub fn mean(&self) -> Option<f64> {
        if !self.is_full() || self.non_finite > 0 {
            return None;
        }
        let mean = (self.sum + self.compensation) / self.values.len() as f64;
        mean.is_finite().then_some(mean)
    }

    /// Check if window is full
    #[inline]
    pub fn is_full(&self) -> bool {
        self.values.len() >= self.window_size
    }

    fn accumulate(&mut self, value: f64) {
        let total = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - total) + value;
        } else {
            self.compensation += (value - total) + self.sum;
        }
        self.sum = total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rolling_mean_needs_full_window() {
        let mut stats = RollingMean::new(5);

        for i in 1..=4 {
            stats.push(i as f64);
            assert!(stats.mean().is_none());
        }

        stats.push(5.0);
        assert!(stats.is_full());
        assert_relative_eq!(stats.mean().unwrap(), 3.0);

        // Add one more, window shifts
        stats.push(6.0);
        assert_relative_eq!(stats.mean().unwrap(), 4.0); // (2+3+4+5+6)/5
    }

    #[test]
    fn test_zero_window_is_one() {
        let mut stats = RollingMean::new(0);
        stats.push(7.0);
        assert_relative_eq!(stats.mean().unwrap(), 7.0);
        stats.push(9.0);
        assert_relative_eq!(stats.mean().unwrap(), 9.0);
    }

    #[test]
    fn test_small_values_survive_large_eviction() {
        let mut stats = RollingMean::new(20);
        stats.push(1e20);
        for _ in 0..40 {
            stats.push(1.0);
        }
        assert_eq!(stats.mean(), Some(1.0));
    }

    #[test]
    fn test_mixed_magnitudes_match_direct_mean() {
        // huge prefix that has fully left the window from day 45 on
        let values: Vec<f64> = (0..200)
            .map(|i| {
                let base = match i % 5 {
                    0 => 1e15,
                    1 => 3.0e-3,
                    2 => 7.0,
                    3 => 2.5e9,
                    _ => 0.125,
                };
                let scale = if i < 25 { 1e6 } else { 1.0 };
                base * scale * (1.0 + i as f64 / 100.0)
            })
            .collect();

        let mut stats = RollingMean::new(20);
        for (i, &value) in values.iter().enumerate() {
            stats.push(value);
            if i >= 19 {
                let direct = values[i - 19..=i].iter().sum::<f64>() / 20.0;
                assert_relative_eq!(stats.mean().unwrap(), direct, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_nan_leaves_window() {
        let mut stats = RollingMean::new(3);
        stats.push(f64::NAN);
        stats.push(2.0);
        stats.push(4.0);
        assert!(stats.mean().is_none());

        stats.push(6.0);
        assert_relative_eq!(stats.mean().unwrap(), 4.0);
    }

    #[test]
    fn test_infinities_leave_window() {
        let mut stats = RollingMean::new(2);
        stats.push(f64::INFINITY);
        stats.push(f64::NEG_INFINITY);
        assert!(stats.mean().is_none());

        stats.push(1.0);
        assert!(stats.mean().is_none());
        stats.push(3.0);
        assert_relative_eq!(stats.mean().unwrap(), 2.0);
    }
}
