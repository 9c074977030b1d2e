//! Exponential Moving Average (EMA).
//!
//! A recursive average giving more weight to recent samples:
//! `ema[i] = α·x[i] + (1-α)·ema[i-1]` with `α = 2/(period+1)`. The Wilder
//! variant (`α = 1/period`) backs RSI, ATR and the directional-movement
//! family.
//!
//! # Seeding and alignment
//!
//! In classic compatibility mode the recurrence is seeded with the SMA of
//! the first `period` samples and the first output appears after
//! `period - 1` bars plus the configured EMA unstable period. Under
//! Metastock compatibility the seed is the raw first sample and the
//! recurrence warms up across the suppressed region; the first valid index
//! does not move, but early values differ.
//!
//! Each call is a self-contained computation: no state survives between
//! calls, so re-invoking on identical input is bit-identical.

use crate::error::Result;
use crate::settings::{self, CompatibilityMode, Settings, UnstableIndicator};
use crate::traits::{validate_period, validate_series, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for EMA under the global configuration:
/// `period - 1 + unstable(Ema)`.
#[inline]
#[must_use]
pub fn ema_lookback(period: usize) -> usize {
    ema_lookback_with(&settings::snapshot(), period)
}

/// Lookback for EMA under an explicit configuration.
#[inline]
#[must_use]
pub fn ema_lookback_with(config: &Settings, period: usize) -> usize {
    period - 1 + config.unstable_period(UnstableIndicator::Ema)
}

/// Computes the EMA with standard smoothing (`α = 2/(period+1)`) under the
/// global configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn ema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    ema_with(&settings::snapshot(), data, period)
}

/// Computes the EMA under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn ema_with<T: SeriesElement>(config: &Settings, data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    let alpha = T::two() / T::from_usize(period + 1)?;
    ema_core(config, data, period, alpha)
}

/// Computes the EMA with Wilder's smoothing (`α = 1/period`) under an
/// explicit configuration.
///
/// Wilder's smoothing with period N is equivalent to a standard EMA with
/// period 2N − 1; RSI, ATR and ADX use it internally.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn ema_wilder_with<T: SeriesElement>(
    config: &Settings,
    data: &[T],
    period: usize,
) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    let alpha = T::one() / T::from_usize(period)?;
    ema_core(config, data, period, alpha)
}

/// Computes the Wilder-smoothed EMA under the global configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn ema_wilder<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    ema_wilder_with(&settings::snapshot(), data, period)
}

/// Shared EMA recurrence: seed per the compatibility mode, run the
/// suppressed warm-up region, then emit `n - lookback` values.
fn ema_core<T: SeriesElement>(
    config: &Settings,
    data: &[T],
    period: usize,
    alpha: T,
) -> Result<Vec<T>> {
    validate_series(data)?;
    let lookback = ema_lookback_with(config, period);
    if data.len() <= lookback {
        return Ok(Vec::new());
    }

    let one_minus_alpha = T::one() - alpha;

    // Seed selection: classic uses the first full window's SMA, Metastock
    // the raw first sample.
    let (mut prev, mut next_input) = match config.compatibility_mode() {
        CompatibilityMode::Classic => {
            let mut sum = T::zero();
            for &x in &data[..period] {
                sum = sum + x;
            }
            (sum / T::from_usize(period)?, period)
        }
        CompatibilityMode::Metastock => (data[0], 1),
    };

    // Warm the recurrence through the rest of the suppressed region.
    while next_input <= lookback {
        prev = alpha * data[next_input] + one_minus_alpha * prev;
        next_input += 1;
    }

    let mut out = alloc_series(data.len() - lookback)?;
    out[0] = prev;
    for i in (lookback + 1)..data.len() {
        prev = alpha * data[i] + one_minus_alpha * prev;
        out[i - lookback] = prev;
    }
    Ok(out)
}
