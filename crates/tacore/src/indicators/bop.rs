//! Balance of Power (BOP).
//!
//! Per-bar measure of which side controlled the session:
//! `(close − open) / (high − low)`, 0 on a zero-range bar. No lookback.

use crate::error::Result;
use crate::traits::{validate_ohlc, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for BOP: 0.
#[inline]
#[must_use]
pub const fn bop_lookback() -> usize {
    0
}

/// Computes the Balance of Power.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn bop<T: SeriesElement>(open: &[T], high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    validate_ohlc(open, high, low, close)?;
    let mut out = alloc_series(open.len())?;
    for i in 0..open.len() {
        let range = high[i] - low[i];
        out[i] = if range == T::zero() {
            T::zero()
        } else {
            (close[i] - open[i]) / range
        };
    }
    Ok(out)
}
