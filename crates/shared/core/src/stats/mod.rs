//! Rolling statistics and ratios for daily series
//!
//! Every helper returns `Option<f64>`: a missing value means the statistic
//! could not be computed (short history, zero denominator, NaN input) and is
//! never coerced to zero.

mod rolling;

pub use rolling::RollingMean;

/// Finite quotient, or `None` for a zero denominator or a non-finite result
#[inline]
pub fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    let value = numerator / denominator;
    value.is_finite().then_some(value)
}

/// Percentage change from `old` to `new`: (new - old) / old * 100
#[inline]
pub fn pct_change(old: f64, new: f64) -> Option<f64> {
    ratio(new - old, old).map(|r| r * 100.0)
}
