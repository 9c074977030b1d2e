//! Chande Momentum Oscillator (CMO).
//!
//! An RSI relative measuring net momentum on a −100..100 scale:
//!
//! ```text
//! CMO = 100 · (avgGain − avgLoss) / (avgGain + avgLoss)
//! ```
//!
//! with the same Wilder-smoothed gain/loss averages as RSI
//! (`CMO = 2·RSI − 100` analytically). A window with no movement yields 0.
//! Alignment mirrors RSI: lookback `period + unstable(Cmo)`, one bar less
//! under Metastock compatibility with its first-bar seeding.

use crate::error::Result;
use crate::settings::{self, CompatibilityMode, Settings, UnstableIndicator};
use crate::traits::{validate_period, validate_series, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for CMO under the global configuration.
#[inline]
#[must_use]
pub fn cmo_lookback(period: usize) -> usize {
    cmo_lookback_with(&settings::snapshot(), period)
}

/// Lookback for CMO under an explicit configuration:
/// `period + unstable(Cmo)`, one less in Metastock mode.
#[inline]
#[must_use]
pub fn cmo_lookback_with(config: &Settings, period: usize) -> usize {
    let base = period + config.unstable_period(UnstableIndicator::Cmo);
    match config.compatibility_mode() {
        CompatibilityMode::Classic => base,
        CompatibilityMode::Metastock => base - 1,
    }
}

/// Computes the CMO under the global configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn cmo<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    cmo_with(&settings::snapshot(), data, period)
}

/// Computes the CMO under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn cmo_with<T: SeriesElement>(config: &Settings, data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_series(data)?;
    let lookback = cmo_lookback_with(config, period);
    if data.len() <= lookback {
        return Ok(Vec::new());
    }

    let period_t = T::from_usize(period)?;
    let period_minus = T::from_usize(period - 1)?;
    let hundred = T::hundred();

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
            hundred * (gain - loss) / total
        }
    };

    let mut out = alloc_series(data.len() - lookback)?;
    if seed_changes >= lookback {
        out[0] = emit(avg_gain, avg_loss);
    }
    for i in (seed_changes + 1)..data.len() {
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
