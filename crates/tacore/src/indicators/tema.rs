//! Triple Exponential Moving Average (TEMA).
//!
//! `TEMA = 3·EMA1 − 3·EMA2 + EMA3` where each stage is an EMA of the one
//! before. Lookback is three EMA stages.

use crate::error::Result;
use crate::indicators::ema::{ema_lookback_with, ema_with};
use crate::settings::{self, Settings};
use crate::traits::{validate_period, validate_series, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for TEMA under the global configuration: `3 × ema_lookback`.
#[inline]
#[must_use]
pub fn tema_lookback(period: usize) -> usize {
    tema_lookback_with(&settings::snapshot(), period)
}

/// Lookback for TEMA under an explicit configuration.
#[inline]
#[must_use]
pub fn tema_lookback_with(config: &Settings, period: usize) -> usize {
    3 * ema_lookback_with(config, period)
}

/// Computes the Triple EMA under the global configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn tema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    tema_with(&settings::snapshot(), data, period)
}

/// Computes the Triple EMA under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn tema_with<T: SeriesElement>(config: &Settings, data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_series(data)?;
    if data.len() <= tema_lookback_with(config, period) {
        return Ok(Vec::new());
    }

    let ema1 = ema_with(config, data, period)?;
    let ema2 = ema_with(config, &ema1, period)?;
    let ema3 = ema_with(config, &ema2, period)?;
    let stage = ema_lookback_with(config, period);

    let mut out = alloc_series(ema3.len())?;
    let three = T::constant(3.0);
    for (i, v) in out.iter_mut().enumerate() {
        *v = three * ema1[i + 2 * stage] - three * ema2[i + stage] + ema3[i];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::approx_eq;

    #[test]
    fn test_tema_length() {
        let data: Vec<f64> = (0..40).map(f64::from).collect();
        let out = tema(&data, 5).unwrap();
        assert_eq!(out.len(), data.len() - 12);
    }

    #[test]
    fn test_tema_constant_series() {
        let data = [2.5_f64; 25];
        for v in tema(&data, 4).unwrap() {
            assert!(approx_eq(v, 2.5, 1e-10));
        }
    }

    #[test]
    fn test_tema_converges_on_linear_ramp() {
        // TEMA's three-stage correction tracks a straight line essentially
        // without lag once warm
        let data: Vec<f64> = (0..60).map(|i| f64::from(i).mul_add(2.0, 10.0)).collect();
        let out = tema(&data, 5).unwrap();
        let lookback = data.len() - out.len();
        let last = out[out.len() - 1];
        let expected = data[lookback + out.len() - 1];
        assert!((last - expected).abs() < 0.5);
    }

    #[test]
    fn test_tema_short_input_empty_output() {
        let data = [1.0_f64; 12];
        assert!(tema(&data, 5).unwrap().is_empty());
    }
}
