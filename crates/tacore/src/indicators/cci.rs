//! Commodity Channel Index (CCI).
//!
//! Measures the typical price's distance from its own average, scaled by
//! the window's mean absolute deviation:
//!
//! ```text
//! TP  = (high + low + close) / 3
//! CCI = (TP − SMA(TP)) / (0.015 · meanDeviation)
//! ```
//!
//! A window with zero deviation yields 0. Lookback is `period - 1`.

use crate::error::Result;
use crate::traits::{validate_hlc, validate_period, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for CCI: `period - 1`.
#[inline]
#[must_use]
pub const fn cci_lookback(period: usize) -> usize {
    period - 1
}

/// Computes the Commodity Channel Index.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn cci<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_hlc(high, low, close)?;
    if high.len() < period {
        return Ok(Vec::new());
    }

    let n = high.len();
    let three = T::constant(3.0);
    let mut tp = alloc_series(n)?;
    for i in 0..n {
        tp[i] = (high[i] + low[i] + close[i]) / three;
    }

    let period_t = T::from_usize(period)?;
    let scale = T::constant(0.015);
    let mut out = alloc_series(n - cci_lookback(period))?;
    for end in (period - 1)..n {
        let window = &tp[end + 1 - period..=end];
        let mut sum = T::zero();
        for &x in window {
            sum = sum + x;
        }
        let mean = sum / period_t;
        let mut dev = T::zero();
        for &x in window {
            dev = dev + (x - mean).abs();
        }
        let mean_dev = dev / period_t;
        out[end + 1 - period] = if mean_dev == T::zero() {
            T::zero()
        } else {
            (tp[end] - mean) / (scale * mean_dev)
        };
    }
    Ok(out)
}
