//! Chaikin Accumulation/Distribution line and oscillator.
//!
//! The A/D line accumulates volume weighted by where the close sits inside
//! the bar's range (the "close location value"):
//!
//! ```text
//! CLV = ((close − low) − (high − close)) / (high − low)
//! AD  = AD_prev + CLV · volume
//! ```
//!
//! A zero-range bar contributes nothing. The oscillator is the difference
//! between a fast and a slow EMA of the A/D line (conventionally 3/10).

use crate::error::Result;
use crate::indicators::ema::{ema_lookback_with, ema_with};
use crate::settings::{self, Settings};
use crate::traits::{validate_hlcv, validate_period, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for the A/D line: 0.
#[inline]
#[must_use]
pub const fn ad_lookback() -> usize {
    0
}

/// Lookback for the A/D oscillator under the global configuration: the
/// slower EMA's lookback.
#[inline]
#[must_use]
pub fn ad_osc_lookback(fast_period: usize, slow_period: usize) -> usize {
    let config = settings::snapshot();
    ema_lookback_with(&config, fast_period).max(ema_lookback_with(&config, slow_period))
}

/// Computes the Accumulation/Distribution line.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn ad<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    volume: &[T],
) -> Result<Vec<T>> {
    validate_hlcv(high, low, close, volume)?;
    let mut out = alloc_series(high.len())?;
    let mut total = T::zero();
    for i in 0..high.len() {
        let range = high[i] - low[i];
        if range > T::zero() {
            let clv = ((close[i] - low[i]) - (high[i] - close[i])) / range;
            total = total + clv * volume[i];
        }
        out[i] = total;
    }
    Ok(out)
}

/// Computes the Chaikin A/D Oscillator (fast EMA − slow EMA of the A/D
/// line) under the global configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for periods outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn ad_osc<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    volume: &[T],
    fast_period: usize,
    slow_period: usize,
) -> Result<Vec<T>> {
    ad_osc_with(&settings::snapshot(), high, low, close, volume, fast_period, slow_period)
}

/// Computes the Chaikin A/D Oscillator under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for periods outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn ad_osc_with<T: SeriesElement>(
    config: &Settings,
    high: &[T],
    low: &[T],
    close: &[T],
    volume: &[T],
    fast_period: usize,
    slow_period: usize,
) -> Result<Vec<T>> {
    validate_period(fast_period, 2)?;
    validate_period(slow_period, 2)?;
    validate_hlcv(high, low, close, volume)?;

    let lookback =
        ema_lookback_with(config, fast_period).max(ema_lookback_with(config, slow_period));
    if high.len() <= lookback {
        return Ok(Vec::new());
    }

    let line = ad(high, low, close, volume)?;
    let fast = ema_with(config, &line, fast_period)?;
    let slow = ema_with(config, &line, slow_period)?;
    let out_len = high.len() - lookback;
    let fast_offset = fast.len() - out_len;
    let slow_offset = slow.len() - out_len;

    let mut out = alloc_series(out_len)?;
    for i in 0..out_len {
        out[i] = fast[i + fast_offset] - slow[i + slow_offset];
    }
    Ok(out)
}
