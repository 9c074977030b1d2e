//! TRIX: one-bar rate of change of a triple-smoothed EMA.
//!
//! Three EMA passes remove most short-term noise; the final 1-bar percent
//! change measures the smoothed trend's slope. Lookback is three EMA stages
//! plus one bar.

use crate::error::Result;
use crate::indicators::ema::{ema_lookback_with, ema_with};
use crate::settings::{self, Settings};
use crate::traits::{validate_period, validate_series, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for TRIX under the global configuration:
/// `3 × ema_lookback + 1`.
#[inline]
#[must_use]
pub fn trix_lookback(period: usize) -> usize {
    trix_lookback_with(&settings::snapshot(), period)
}

/// Lookback for TRIX under an explicit configuration.
#[inline]
#[must_use]
pub fn trix_lookback_with(config: &Settings, period: usize) -> usize {
    3 * ema_lookback_with(config, period) + 1
}

/// Computes TRIX under the global configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn trix<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    trix_with(&settings::snapshot(), data, period)
}

/// Computes TRIX under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn trix_with<T: SeriesElement>(config: &Settings, data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_series(data)?;
    if data.len() <= trix_lookback_with(config, period) {
        return Ok(Vec::new());
    }

    let e1 = ema_with(config, data, period)?;
    let e2 = ema_with(config, &e1, period)?;
    let e3 = ema_with(config, &e2, period)?;

    let hundred = T::hundred();
    let mut out = alloc_series(e3.len() - 1)?;
    for i in 1..e3.len() {
        let prev = e3[i - 1];
        out[i - 1] = if prev == T::zero() {
            T::zero()
        } else {
            hundred * (e3[i] - prev) / prev
        };
    }
    Ok(out)
}
