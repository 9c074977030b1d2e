//! Double Exponential Moving Average (DEMA).
//!
//! `DEMA = 2·EMA(x) − EMA(EMA(x))`. The double application reduces the lag
//! a plain EMA introduces. Lookback is twice the EMA lookback.

use crate::error::Result;
use crate::indicators::ema::{ema_lookback_with, ema_with};
use crate::settings::{self, Settings};
use crate::traits::{validate_period, validate_series, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for DEMA under the global configuration: `2 × ema_lookback`.
#[inline]
#[must_use]
pub fn dema_lookback(period: usize) -> usize {
    dema_lookback_with(&settings::snapshot(), period)
}

/// Lookback for DEMA under an explicit configuration.
#[inline]
#[must_use]
pub fn dema_lookback_with(config: &Settings, period: usize) -> usize {
    2 * ema_lookback_with(config, period)
}

/// Computes the Double EMA under the global configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn dema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    dema_with(&settings::snapshot(), data, period)
}

/// Computes the Double EMA under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn dema_with<T: SeriesElement>(config: &Settings, data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_series(data)?;
    if data.len() <= dema_lookback_with(config, period) {
        return Ok(Vec::new());
    }

    let ema1 = ema_with(config, data, period)?;
    let ema2 = ema_with(config, &ema1, period)?;
    let stage = ema_lookback_with(config, period);

    let mut out = alloc_series(ema2.len())?;
    let two = T::two();
    for (i, v) in out.iter_mut().enumerate() {
        *v = two * ema1[i + stage] - ema2[i];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::approx_eq;

    #[test]
    fn test_dema_length_and_alignment() {
        let data: Vec<f64> = (0..30).map(|i| f64::from(i).mul_add(0.5, 40.0)).collect();
        let out = dema(&data, 5).unwrap();
        assert_eq!(out.len(), data.len() - 8);
    }

    #[test]
    fn test_dema_constant_series() {
        let data = [9.0_f64; 20];
        for v in dema(&data, 4).unwrap() {
            assert!(approx_eq(v, 9.0, 1e-10));
        }
    }

    #[test]
    fn test_dema_tracks_trend_tighter_than_ema() {
        let data: Vec<f64> = (1..=40).map(f64::from).collect();
        let dema_out = dema(&data, 6).unwrap();
        let ema_out = crate::indicators::ema::ema(&data, 6).unwrap();
        let offset = ema_out.len() - dema_out.len();
        // On a steady ramp DEMA lags less, i.e. sits closer to price
        for (i, v) in dema_out.iter().enumerate() {
            assert!(*v > ema_out[i + offset] - 1e-9);
        }
    }

    #[test]
    fn test_dema_short_input_empty_output() {
        let data = [1.0_f64; 8];
        assert!(dema(&data, 5).unwrap().is_empty());
        assert_eq!(dema(&data, 4).unwrap().len(), 2);
    }
}
