//! On Balance Volume (OBV).
//!
//! A running total of volume signed by the close's direction: volume adds
//! on an up close, subtracts on a down close, and is ignored on an
//! unchanged close. The first bar's volume seeds the total. No lookback.

use crate::error::Result;
use crate::traits::{validate_pair, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for OBV: 0.
#[inline]
#[must_use]
pub const fn obv_lookback() -> usize {
    0
}

/// Computes On Balance Volume.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn obv<T: SeriesElement>(close: &[T], volume: &[T]) -> Result<Vec<T>> {
    validate_pair(close, volume)?;
    let mut out = alloc_series(close.len())?;
    let mut total = volume[0];
    out[0] = total;
    for i in 1..close.len() {
        if close[i] > close[i - 1] {
            total = total + volume[i];
        } else if close[i] < close[i - 1] {
            total = total - volume[i];
        }
        out[i] = total;
    }
    Ok(out)
}
