//! True Range, Average True Range (ATR) and Normalized ATR.
//!
//! True Range extends the bar's high-low span to cover gaps against the
//! prior close:
//!
//! ```text
//! TR[i] = max(high[i] − low[i], |high[i] − close[i-1]|, |low[i] − close[i-1]|)
//! ```
//!
//! ATR is the Wilder-smoothed average of TR; NATR rescales ATR as a
//! percentage of the close so different price levels compare.

use crate::error::Result;
use crate::settings::{self, Settings, UnstableIndicator};
use crate::traits::{validate_hlc, validate_period, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for [`true_range`]: 1 (needs the prior close).
#[inline]
#[must_use]
pub const fn true_range_lookback() -> usize {
    1
}

/// Lookback for ATR under the global configuration:
/// `period + unstable(Atr)`.
#[inline]
#[must_use]
pub fn atr_lookback(period: usize) -> usize {
    atr_lookback_with(&settings::snapshot(), period)
}

/// Lookback for ATR under an explicit configuration.
#[inline]
#[must_use]
pub fn atr_lookback_with(config: &Settings, period: usize) -> usize {
    period + config.unstable_period(UnstableIndicator::Atr)
}

/// Lookback for NATR under the global configuration:
/// `period + unstable(Natr)`.
#[inline]
#[must_use]
pub fn natr_lookback(period: usize) -> usize {
    natr_lookback_with(&settings::snapshot(), period)
}

/// Lookback for NATR under an explicit configuration.
#[inline]
#[must_use]
pub fn natr_lookback_with(config: &Settings, period: usize) -> usize {
    period + config.unstable_period(UnstableIndicator::Natr)
}

/// Computes the per-bar True Range.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn true_range<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    validate_hlc(high, low, close)?;
    if high.len() <= true_range_lookback() {
        return Ok(Vec::new());
    }
    let mut out = alloc_series(high.len() - 1)?;
    for i in 1..high.len() {
        out[i - 1] = single_true_range(high[i], low[i], close[i - 1]);
    }
    Ok(out)
}

#[inline]
fn single_true_range<T: SeriesElement>(high: T, low: T, prev_close: T) -> T {
    let span = high - low;
    let up_gap = (high - prev_close).abs();
    let down_gap = (low - prev_close).abs();
    span.max(up_gap).max(down_gap)
}

/// Computes the Average True Range under the global configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn atr<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    atr_with(&settings::snapshot(), high, low, close, period)
}

/// Computes the Average True Range under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn atr_with<T: SeriesElement>(
    config: &Settings,
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_hlc(high, low, close)?;
    let lookback = atr_lookback_with(config, period);
    if high.len() <= lookback {
        return Ok(Vec::new());
    }

    let period_t = T::from_usize(period)?;
    let period_minus = T::from_usize(period - 1)?;

    // Seed: plain average of the first `period` true ranges
    let mut acc = T::zero();
    for i in 1..=period {
        acc = acc + single_true_range(high[i], low[i], close[i - 1]);
    }
    let mut prev = acc / period_t;

    let mut out = alloc_series(high.len() - lookback)?;
    if period >= lookback {
        out[0] = prev;
    }
    for i in (period + 1)..high.len() {
        let tr = single_true_range(high[i], low[i], close[i - 1]);
        prev = (prev * period_minus + tr) / period_t;
        if i >= lookback {
            out[i - lookback] = prev;
        }
    }
    Ok(out)
}

/// Computes the Normalized ATR (`100 · ATR / close`) under the global
/// configuration.
///
/// A zero close yields 0 for that bar.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn natr<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    natr_with(&settings::snapshot(), high, low, close, period)
}

/// Computes the Normalized ATR under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn natr_with<T: SeriesElement>(
    config: &Settings,
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<T>> {
    // NATR keeps its own unstable entry; run the ATR core against it.
    let mut atr_config = config.clone();
    atr_config.set_unstable_period(
        UnstableIndicator::Atr,
        config.unstable_period(UnstableIndicator::Natr),
    );
    let mut out = atr_with(&atr_config, high, low, close, period)?;
    let lookback = natr_lookback_with(config, period);
    let hundred = T::hundred();
    for (i, v) in out.iter_mut().enumerate() {
        let c = close[i + lookback];
        *v = if c == T::zero() { T::zero() } else { hundred * *v / c };
    }
    Ok(out)
}
