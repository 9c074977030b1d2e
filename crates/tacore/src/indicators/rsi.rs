//! Relative Strength Index (RSI).
//!
//! Measures the magnitude of recent gains against recent losses on a 0–100
//! scale:
//!
//! ```text
//! RSI = 100 · avgGain / (avgGain + avgLoss)
//! ```
//!
//! with both averages Wilder-smoothed over `period` one-bar changes. A
//! window with no movement at all (both averages zero) yields 0.
//!
//! # Alignment
//!
//! Classic mode seeds the averages from the first `period` changes, putting
//! the first output at input index `period` (lookback `period` plus the
//! configured RSI unstable period). Metastock mode starts at the very first
//! bar: the seed accumulates the first `period − 1` changes, still divides
//! by `period`, and the first output lands one bar earlier.

use crate::error::Result;
use crate::settings::{self, CompatibilityMode, Settings, UnstableIndicator};
use crate::traits::{validate_period, validate_series, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for RSI under the global configuration.
#[inline]
#[must_use]
pub fn rsi_lookback(period: usize) -> usize {
    rsi_lookback_with(&settings::snapshot(), period)
}

/// Lookback for RSI under an explicit configuration:
/// `period + unstable(Rsi)`, one less in Metastock mode.
#[inline]
#[must_use]
pub fn rsi_lookback_with(config: &Settings, period: usize) -> usize {
    let base = period + config.unstable_period(UnstableIndicator::Rsi);
    match config.compatibility_mode() {
        CompatibilityMode::Classic => base,
        CompatibilityMode::Metastock => base - 1,
    }
}

/// Computes the RSI under the global configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn rsi<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    rsi_with(&settings::snapshot(), data, period)
}

/// Computes the RSI under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn rsi_with<T: SeriesElement>(config: &Settings, data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_series(data)?;
    let lookback = rsi_lookback_with(config, period);
    if data.len() <= lookback {
        return Ok(Vec::new());
    }

    let period_t = T::from_usize(period)?;
    let period_minus = T::from_usize(period - 1)?;
    let hundred = T::hundred();

    // Seed window: `period` changes in classic mode, `period - 1` under
    // Metastock (both divided by `period`).
    let seed_changes = match config.compatibility_mode() {
        CompatibilityMode::Classic => period,
        CompatibilityMode::Metastock => period - 1,
    };
    let mut gain_sum = T::zero();
    let mut loss_sum = T::zero();
    for i in 1..=seed_changes {
        let diff = data[i] - data[i - 1];
        if diff > T::zero() {
            gain_sum = gain_sum + diff;
        } else {
            loss_sum = loss_sum - diff;
        }
    }
    let mut avg_gain = gain_sum / period_t;
    let mut avg_loss = loss_sum / period_t;

    let emit = |gain: T, loss: T| -> T {
        let total = gain + loss;
        if total == T::zero() {
            T::zero()
        } else {
            hundred * gain / total
        }
    };

    let mut out = alloc_series(data.len() - lookback)?;
    let first_compute = seed_changes;
    if first_compute >= lookback {
        out[0] = emit(avg_gain, avg_loss);
    }
    for i in (first_compute + 1)..data.len() {
        let diff = data[i] - data[i - 1];
        let (gain, loss) = if diff > T::zero() {
            (diff, T::zero())
        } else {
            (T::zero(), -diff)
        };
        avg_gain = (avg_gain * period_minus + gain) / period_t;
        avg_loss = (avg_loss * period_minus + loss) / period_t;
        if i >= lookback {
            out[i - lookback] = emit(avg_gain, avg_loss);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{approx_eq, EPSILON, LOOSE_EPSILON};

    #[test]
    fn test_rsi_length_and_range() {
        let data: Vec<f64> = (0..40).map(|i| (f64::from(i) * 0.8).sin() * 3.0 + 30.0).collect();
        let out = rsi(&data, 14).unwrap();
        assert_eq!(out.len(), data.len() - 14);
        for v in out {
            assert!((0.0..=100.0).contains(&v));
        }
    }

    #[test]
    fn test_rsi_all_gains_is_100() {
        let data: Vec<f64> = (1..=20).map(f64::from).collect();
        for v in rsi(&data, 5).unwrap() {
            assert!(approx_eq(v, 100.0, EPSILON));
        }
    }

    #[test]
    fn test_rsi_all_losses_is_0() {
        let data: Vec<f64> = (1..=20).rev().map(f64::from).collect();
        for v in rsi(&data, 5).unwrap() {
            assert!(approx_eq(v, 0.0, EPSILON));
        }
    }

    #[test]
    fn test_rsi_flat_series_is_0() {
        // No movement: both averages stay zero
        let data = [50.0_f64; 12];
        for v in rsi(&data, 4).unwrap() {
            assert!(approx_eq(v, 0.0, EPSILON));
        }
    }

    #[test]
    fn test_rsi_matches_wilder_recomputation() {
        let data = [
            44.34_f64, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89,
            46.03, 45.61, 46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
        ];
        let period = 14;
        let out = rsi(&data, period).unwrap();

        // Independent straightforward Wilder recomputation
        let mut gain = 0.0;
        let mut loss = 0.0;
        for i in 1..=period {
            let d = data[i] - data[i - 1];
            if d > 0.0 {
                gain += d;
            } else {
                loss -= d;
            }
        }
        let mut avg_gain = gain / period as f64;
        let mut avg_loss = loss / period as f64;
        let mut expected = vec![100.0 * avg_gain / (avg_gain + avg_loss)];
        for i in (period + 1)..data.len() {
            let d = data[i] - data[i - 1];
            let (g, l) = if d > 0.0 { (d, 0.0) } else { (0.0, -d) };
            avg_gain = (avg_gain * (period - 1) as f64 + g) / period as f64;
            avg_loss = (avg_loss * (period - 1) as f64 + l) / period as f64;
            expected.push(100.0 * avg_gain / (avg_gain + avg_loss));
        }
        assert_eq!(out.len(), expected.len());
        for (a, b) in out.iter().zip(&expected) {
            assert!(approx_eq(*a, *b, LOOSE_EPSILON));
        }
    }

    #[test]
    fn test_rsi_metastock_shifts_one_bar_earlier() {
        let mut config = Settings::new();
        config.set_compatibility_mode(CompatibilityMode::Metastock);
        let data: Vec<f64> = (0..25).map(|i| (f64::from(i) * 1.1).cos() * 2.0 + 40.0).collect();
        let classic = rsi_with(&Settings::new(), &data, 7).unwrap();
        let metastock = rsi_with(&config, &data, 7).unwrap();
        assert_eq!(metastock.len(), classic.len() + 1);
    }

    #[test]
    fn test_rsi_unstable_period_only_trims() {
        let mut config = Settings::new();
        config.set_unstable_period(UnstableIndicator::Rsi, 5);
        let data: Vec<f64> = (0..30).map(|i| (f64::from(i) * 0.6).sin() + 25.0).collect();
        let plain = rsi_with(&Settings::new(), &data, 6).unwrap();
        let trimmed = rsi_with(&config, &data, 6).unwrap();
        assert_eq!(plain.len(), trimmed.len() + 5);
        for (a, b) in plain[5..].iter().zip(&trimmed) {
            assert!(approx_eq(*a, *b, EPSILON));
        }
    }
}
