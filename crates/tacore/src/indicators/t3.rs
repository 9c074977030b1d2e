//! Tillson T3 Moving Average.
//!
//! Six cascaded EMAs blended with a volume-factor polynomial:
//!
//! ```text
//! T3 = c1·e6 + c2·e5 + c3·e4 + c4·e3
//! c1 = -v³, c2 = 3v² + 3v³, c3 = -6v² - 3v - 3v³, c4 = 1 + 3v + v³ + 3v²
//! ```
//!
//! with `v` the volume factor (default 0.7). Lookback is six EMA stages,
//! `6·(period − 1)`, plus the configured T3 unstable period.

use crate::error::{Error, Result};
use crate::settings::{self, Settings, UnstableIndicator};
use crate::traits::{validate_period, validate_series, SeriesElement};
use crate::utils::alloc_series;

/// Default volume factor.
pub const DEFAULT_VOLUME_FACTOR: f64 = 0.7;

/// Lookback for T3 under the global configuration:
/// `6·(period − 1) + unstable(T3)`.
#[inline]
#[must_use]
pub fn t3_lookback(period: usize) -> usize {
    t3_lookback_with(&settings::snapshot(), period)
}

/// Lookback for T3 under an explicit configuration.
#[inline]
#[must_use]
pub fn t3_lookback_with(config: &Settings, period: usize) -> usize {
    6 * (period - 1) + config.unstable_period(UnstableIndicator::T3)
}

/// Computes T3 with the default volume factor (0.7) under the global
/// configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn t3<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    t3_full(data, period, T::constant(DEFAULT_VOLUME_FACTOR))
}

/// Computes T3 with an explicit volume factor under the global
/// configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput` for an empty series, or `Error::InvalidParameter` if
/// the volume factor is outside [0, 1].
pub fn t3_full<T: SeriesElement>(data: &[T], period: usize, v_factor: T) -> Result<Vec<T>> {
    t3_with(&settings::snapshot(), data, period, v_factor)
}

/// Computes T3 under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput` for an empty series, or `Error::InvalidParameter` if
/// the volume factor is outside [0, 1].
pub fn t3_with<T: SeriesElement>(
    config: &Settings,
    data: &[T],
    period: usize,
    v_factor: T,
) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_series(data)?;
    if !(v_factor >= T::zero() && v_factor <= T::one()) {
        return Err(Error::InvalidParameter {
            name: "v_factor",
            reason: "volume factor must be within [0, 1]",
        }
        .record());
    }
    let lookback = t3_lookback_with(config, period);
    if data.len() <= lookback {
        return Ok(Vec::new());
    }

    // Six plain EMA stages; the warm-up suppression is applied once at the
    // end rather than per stage, so run the stages with a throwaway config
    // carrying no EMA unstable period.
    let mut stage_config = config.clone();
    stage_config.set_unstable_period(UnstableIndicator::Ema, 0);
    let e1 = crate::indicators::ema::ema_with(&stage_config, data, period)?;
    let e2 = crate::indicators::ema::ema_with(&stage_config, &e1, period)?;
    let e3 = crate::indicators::ema::ema_with(&stage_config, &e2, period)?;
    let e4 = crate::indicators::ema::ema_with(&stage_config, &e3, period)?;
    let e5 = crate::indicators::ema::ema_with(&stage_config, &e4, period)?;
    let e6 = crate::indicators::ema::ema_with(&stage_config, &e5, period)?;

    let v2 = v_factor * v_factor;
    let v3 = v2 * v_factor;
    let three = T::constant(3.0);
    let six = T::constant(6.0);
    let c1 = -v3;
    let c2 = three * v2 + three * v3;
    let c3 = -six * v2 - three * v_factor - three * v3;
    let c4 = T::one() + three * v_factor + v3 + three * v2;

    let stage = period - 1;
    // Number of leading blended values suppressed beyond the six stages
    let extra = lookback - 6 * stage;
    let mut out = alloc_series(e6.len() - extra)?;
    for (i, v) in out.iter_mut().enumerate() {
        let j = i + extra;
        *v = c1 * e6[j] + c2 * e5[j + stage] + c3 * e4[j + 2 * stage] + c4 * e3[j + 3 * stage];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{approx_eq, EPSILON};

    #[test]
    fn test_t3_length() {
        let data: Vec<f64> = (0..60).map(|i| (f64::from(i) * 0.2).sin() + 20.0).collect();
        let out = t3(&data, 5).unwrap();
        assert_eq!(out.len(), data.len() - 24);
    }

    #[test]
    fn test_t3_constant_series() {
        // Every EMA stage of a constant is the constant, and the blend
        // coefficients sum to 1
        let data = [11.0_f64; 40];
        for v in t3(&data, 4).unwrap() {
            assert!(approx_eq(v, 11.0, 1e-9));
        }
    }

    #[test]
    fn test_t3_volume_factor_bounds() {
        let data = [1.0_f64; 30];
        assert!(matches!(
            t3_full(&data, 3, -0.1),
            Err(Error::InvalidParameter { name: "v_factor", .. })
        ));
        assert!(matches!(
            t3_full(&data, 3, 1.5),
            Err(Error::InvalidParameter { name: "v_factor", .. })
        ));
        assert!(t3_full(&data, 3, 0.0).is_ok());
        assert!(t3_full(&data, 3, 1.0).is_ok());
    }

    #[test]
    fn test_t3_zero_volume_factor_is_triple_smoothed_ema() {
        // With v = 0, coefficients reduce to T3 = e3
        let data: Vec<f64> = (0..50).map(|i| f64::from(i % 13)).collect();
        let out = t3_full(&data, 4, 0.0).unwrap();
        let e1 = crate::indicators::ema::ema(&data, 4).unwrap();
        let e2 = crate::indicators::ema::ema(&e1, 4).unwrap();
        let e3 = crate::indicators::ema::ema(&e2, 4).unwrap();
        // e3 has lookback 3 stages; t3 output is trimmed to 6 stages
        let offset = e3.len() - out.len();
        for (i, v) in out.iter().enumerate() {
            assert!(approx_eq(*v, e3[i + offset], EPSILON));
        }
    }

    #[test]
    fn test_t3_unstable_period() {
        let mut config = Settings::new();
        config.set_unstable_period(UnstableIndicator::T3, 5);
        let data: Vec<f64> = (0..50).map(|i| (f64::from(i) * 0.9).cos() + 30.0).collect();
        let plain = t3_with(&Settings::new(), &data, 4, 0.7).unwrap();
        let trimmed = t3_with(&config, &data, 4, 0.7).unwrap();
        assert_eq!(plain.len(), trimmed.len() + 5);
        for (a, b) in plain[5..].iter().zip(&trimmed) {
            assert!(approx_eq(*a, *b, EPSILON));
        }
    }
}
