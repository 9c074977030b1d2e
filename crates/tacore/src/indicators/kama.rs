//! Kaufman Adaptive Moving Average (KAMA).
//!
//! KAMA adapts its smoothing constant to market efficiency: it follows price
//! closely in directional markets and flattens out in choppy ones.
//!
//! # Formula
//!
//! 1. Efficiency Ratio `ER = |x[i] − x[i−P]| / Σ|x[j] − x[j−1]|` over the
//!    window.
//! 2. Smoothing constant `SC = (ER·(fast − slow) + slow)²` with
//!    `fast = 2/(2+1)` and `slow = 2/(30+1)`.
//! 3. `KAMA[i] = KAMA[i−1] + SC·(x[i] − KAMA[i−1])`, seeded with the sample
//!    just before the first output.
//!
//! Lookback is `period` plus the configured KAMA unstable period.

use crate::error::Result;
use crate::settings::{self, Settings, UnstableIndicator};
use crate::traits::{validate_period, validate_series, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for KAMA under the global configuration:
/// `period + unstable(Kama)`.
#[inline]
#[must_use]
pub fn kama_lookback(period: usize) -> usize {
    kama_lookback_with(&settings::snapshot(), period)
}

/// Lookback for KAMA under an explicit configuration.
#[inline]
#[must_use]
pub fn kama_lookback_with(config: &Settings, period: usize) -> usize {
    period + config.unstable_period(UnstableIndicator::Kama)
}

/// Computes KAMA under the global configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn kama<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    kama_with(&settings::snapshot(), data, period)
}

/// Computes KAMA under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn kama_with<T: SeriesElement>(config: &Settings, data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_series(data)?;
    let lookback = kama_lookback_with(config, period);
    if data.len() <= lookback {
        return Ok(Vec::new());
    }

    let fast_sc = T::two() / T::constant(3.0); // 2 / (2 + 1)
    let slow_sc = T::two() / T::constant(31.0); // 2 / (30 + 1)
    let sc_diff = fast_sc - slow_sc;

    // Rolling sum of absolute one-bar changes over the window
    let mut volatility = T::zero();
    for i in 1..=period {
        volatility = volatility + (data[i] - data[i - 1]).abs();
    }

    // Seed with the sample preceding the first computed bar, then run the
    // recurrence through the suppressed region.
    let first_compute = period;
    let mut prev = data[first_compute - 1];
    let mut out = alloc_series(data.len() - lookback)?;

    for i in first_compute..data.len() {
        if i > first_compute {
            volatility = volatility + (data[i] - data[i - 1]).abs()
                - (data[i - period] - data[i - period - 1]).abs();
        }
        let direction = (data[i] - data[i - period]).abs();
        let er = if volatility > T::zero() {
            direction / volatility
        } else {
            T::zero()
        };
        let sc_raw = er * sc_diff + slow_sc;
        let sc = sc_raw * sc_raw;
        prev = prev + sc * (data[i] - prev);
        if i >= lookback {
            out[i - lookback] = prev;
        }
    }
    Ok(out)
}
