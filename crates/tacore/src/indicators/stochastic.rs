//! Stochastic Oscillator (fast and slow variants).
//!
//! %K locates the close within the high-low range of the lookback window:
//!
//! ```text
//! %K = 100 · (close − lowest low) / (highest high − lowest low)
//! %D = MA(%K)
//! ```
//!
//! The slow variant smooths raw %K once more before the %D stage. Both
//! outputs are trimmed to the same length, aligned at the first valid %D
//! bar.
//!
//! A flat window (highest high equals lowest low) yields %K = 50: a stable
//! midpoint for an indeterminate 0/0, rather than NaN.

use crate::error::Result;
use crate::indicators::ma::{ma_lookback_with, ma_with};
use crate::kernels::rolling_extrema::{rolling_max_into, rolling_min_into};
use crate::settings::{self, MaType, Settings};
use crate::traits::{validate_hlc, validate_period, SeriesElement};
use crate::utils::alloc_series;

/// %K and %D lines, equally trimmed.
#[derive(Debug, Clone)]
pub struct StochOutput<T> {
    /// The %K line.
    pub k: Vec<T>,
    /// The %D (signal) line.
    pub d: Vec<T>,
}

/// Lookback of [`stoch_fast`] under the global configuration.
#[inline]
#[must_use]
pub fn stoch_fast_lookback(fast_k_period: usize, fast_d_period: usize, fast_d_ma_type: MaType) -> usize {
    let config = settings::snapshot();
    fast_k_period - 1 + ma_lookback_with(&config, fast_d_period, fast_d_ma_type)
}

/// Lookback of [`stoch`] (slow) under the global configuration.
#[inline]
#[must_use]
pub fn stoch_lookback(
    fast_k_period: usize,
    slow_k_period: usize,
    slow_k_ma_type: MaType,
    slow_d_period: usize,
    slow_d_ma_type: MaType,
) -> usize {
    let config = settings::snapshot();
    fast_k_period - 1
        + ma_lookback_with(&config, slow_k_period, slow_k_ma_type)
        + ma_lookback_with(&config, slow_d_period, slow_d_ma_type)
}

/// Raw %K with the flat-window midpoint rule; trimmed by
/// `fast_k_period - 1`.
fn raw_k<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    fast_k_period: usize,
) -> Result<Vec<T>> {
    let n = close.len();
    let out_len = n - (fast_k_period - 1);
    let mut highest = alloc_series(out_len)?;
    let mut lowest = alloc_series(out_len)?;
    rolling_max_into(high, fast_k_period, &mut highest);
    rolling_min_into(low, fast_k_period, &mut lowest);

    let hundred = T::hundred();
    let fifty = T::fifty();
    let mut out = alloc_series(out_len)?;
    for i in 0..out_len {
        let range = highest[i] - lowest[i];
        out[i] = if range == T::zero() {
            fifty
        } else {
            hundred * (close[i + fast_k_period - 1] - lowest[i]) / range
        };
    }
    Ok(out)
}

/// Computes the Fast Stochastic under the global configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for periods outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn stoch_fast<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    fast_k_period: usize,
    fast_d_period: usize,
    fast_d_ma_type: MaType,
) -> Result<StochOutput<T>> {
    stoch_fast_with(
        &settings::snapshot(),
        high,
        low,
        close,
        fast_k_period,
        fast_d_period,
        fast_d_ma_type,
    )
}

/// Computes the Fast Stochastic under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for periods outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn stoch_fast_with<T: SeriesElement>(
    config: &Settings,
    high: &[T],
    low: &[T],
    close: &[T],
    fast_k_period: usize,
    fast_d_period: usize,
    fast_d_ma_type: MaType,
) -> Result<StochOutput<T>> {
    validate_period(fast_k_period, 2)?;
    validate_period(fast_d_period, 2)?;
    validate_hlc(high, low, close)?;

    let total =
        fast_k_period - 1 + ma_lookback_with(config, fast_d_period, fast_d_ma_type);
    if close.len() <= total {
        return Ok(StochOutput {
            k: Vec::new(),
            d: Vec::new(),
        });
    }

    let k_full = raw_k(high, low, close, fast_k_period)?;
    let d = ma_with(config, &k_full, fast_d_period, fast_d_ma_type)?;
    let out_len = d.len();
    let k_offset = k_full.len() - out_len;

    let mut k = alloc_series(out_len)?;
    k.copy_from_slice(&k_full[k_offset..]);
    Ok(StochOutput { k, d })
}

/// Computes the Slow Stochastic under the global configuration.
///
/// Raw %K is smoothed by `slow_k_period` first; %D then smooths the slow
/// %K. The conventional parameters are 5/3/3 with SMA smoothing.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for periods outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn stoch<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    fast_k_period: usize,
    slow_k_period: usize,
    slow_k_ma_type: MaType,
    slow_d_period: usize,
    slow_d_ma_type: MaType,
) -> Result<StochOutput<T>> {
    stoch_with(
        &settings::snapshot(),
        high,
        low,
        close,
        fast_k_period,
        slow_k_period,
        slow_k_ma_type,
        slow_d_period,
        slow_d_ma_type,
    )
}

/// Computes the Slow Stochastic under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for periods outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
#[allow(clippy::too_many_arguments)]
pub fn stoch_with<T: SeriesElement>(
    config: &Settings,
    high: &[T],
    low: &[T],
    close: &[T],
    fast_k_period: usize,
    slow_k_period: usize,
    slow_k_ma_type: MaType,
    slow_d_period: usize,
    slow_d_ma_type: MaType,
) -> Result<StochOutput<T>> {
    validate_period(fast_k_period, 2)?;
    validate_period(slow_k_period, 2)?;
    validate_period(slow_d_period, 2)?;
    validate_hlc(high, low, close)?;

    let total = fast_k_period - 1
        + ma_lookback_with(config, slow_k_period, slow_k_ma_type)
        + ma_lookback_with(config, slow_d_period, slow_d_ma_type);
    if close.len() <= total {
        return Ok(StochOutput {
            k: Vec::new(),
            d: Vec::new(),
        });
    }

    let k_raw = raw_k(high, low, close, fast_k_period)?;
    let k_slow = ma_with(config, &k_raw, slow_k_period, slow_k_ma_type)?;
    let d = ma_with(config, &k_slow, slow_d_period, slow_d_ma_type)?;
    let out_len = d.len();
    let k_offset = k_slow.len() - out_len;

    let mut k = alloc_series(out_len)?;
    k.copy_from_slice(&k_slow[k_offset..]);
    Ok(StochOutput { k, d })
}
