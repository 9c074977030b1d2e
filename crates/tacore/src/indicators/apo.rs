//! Absolute and Percentage Price Oscillators (APO / PPO).
//!
//! Both compare a fast and a slow moving average of the same series:
//! APO is their difference in price units, PPO normalizes it as a
//! percentage of the slow average. The smoothing method is selectable; the
//! conventional parameters are 12/26 EMA.
//!
//! A fast period at or above the slow period is accepted and produces the
//! sign-flipped/degenerate line.

use crate::error::Result;
use crate::indicators::ma::{ma_lookback_with, ma_with};
use crate::settings::{self, MaType, Settings};
use crate::traits::{validate_period, validate_series, SeriesElement};
use crate::utils::alloc_series;

/// Lookback of APO/PPO under the global configuration: the larger of the
/// two MA lookbacks.
#[inline]
#[must_use]
pub fn apo_lookback(fast_period: usize, slow_period: usize, ma_type: MaType) -> usize {
    let config = settings::snapshot();
    ma_lookback_with(&config, fast_period, ma_type)
        .max(ma_lookback_with(&config, slow_period, ma_type))
}

fn two_leg_ma<T: SeriesElement>(
    config: &Settings,
    data: &[T],
    fast_period: usize,
    slow_period: usize,
    ma_type: MaType,
) -> Result<Option<(Vec<T>, Vec<T>, usize)>> {
    validate_period(fast_period, 2)?;
    validate_period(slow_period, 2)?;
    validate_series(data)?;
    let lookback = ma_lookback_with(config, fast_period, ma_type)
        .max(ma_lookback_with(config, slow_period, ma_type));
    if data.len() <= lookback {
        return Ok(None);
    }
    let fast = ma_with(config, data, fast_period, ma_type)?;
    let slow = ma_with(config, data, slow_period, ma_type)?;
    let out_len = data.len() - lookback;
    Ok(Some((fast, slow, out_len)))
}

/// Computes the Absolute Price Oscillator (`fast MA − slow MA`).
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for periods outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn apo<T: SeriesElement>(
    data: &[T],
    fast_period: usize,
    slow_period: usize,
    ma_type: MaType,
) -> Result<Vec<T>> {
    let config = settings::snapshot();
    let Some((fast, slow, out_len)) = two_leg_ma(&config, data, fast_period, slow_period, ma_type)?
    else {
        return Ok(Vec::new());
    };
    let fast_offset = fast.len() - out_len;
    let slow_offset = slow.len() - out_len;
    let mut out = alloc_series(out_len)?;
    for i in 0..out_len {
        out[i] = fast[i + fast_offset] - slow[i + slow_offset];
    }
    Ok(out)
}

/// Computes the Percentage Price Oscillator
/// (`100 · (fast MA − slow MA) / slow MA`). A zero slow average yields 0.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for periods outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn ppo<T: SeriesElement>(
    data: &[T],
    fast_period: usize,
    slow_period: usize,
    ma_type: MaType,
) -> Result<Vec<T>> {
    let config = settings::snapshot();
    let Some((fast, slow, out_len)) = two_leg_ma(&config, data, fast_period, slow_period, ma_type)?
    else {
        return Ok(Vec::new());
    };
    let fast_offset = fast.len() - out_len;
    let slow_offset = slow.len() - out_len;
    let hundred = T::hundred();
    let mut out = alloc_series(out_len)?;
    for i in 0..out_len {
        let s = slow[i + slow_offset];
        out[i] = if s == T::zero() {
            T::zero()
        } else {
            hundred * (fast[i + fast_offset] - s) / s
        };
    }
    Ok(out)
}
