//! Simple Moving Average (SMA).
//!
//! The arithmetic mean of the most recent `period` samples, maintained as a
//! running sum for O(n) total work.
//!
//! # Example
//!
//! ```
//! use tacore::indicators::sma::sma;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let out = sma(&data, 3).unwrap();
//! // Output is trimmed by the lookback (period - 1)
//! assert_eq!(out.len(), 3);
//! assert!((out[0] - 2.0).abs() < 1e-10);
//! ```

use crate::error::Result;
use crate::traits::{validate_period, validate_series, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for SMA: `period - 1`.
#[inline]
#[must_use]
pub const fn sma_lookback(period: usize) -> usize {
    period - 1
}

/// Computes the Simple Moving Average over `period` samples.
///
/// The output holds one value per full window, starting with the window
/// ending at input index `period - 1`. A non-empty input shorter than
/// `period` yields an empty output.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn sma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_series(data)?;
    if data.len() < period {
        return Ok(Vec::new());
    }

    let period_t = T::from_usize(period)?;
    let mut out = alloc_series(data.len() - sma_lookback(period))?;

    let mut running = T::zero();
    for &x in &data[..period] {
        running = running + x;
    }
    out[0] = running / period_t;
    for i in period..data.len() {
        running = running + data[i] - data[i - period];
        out[i + 1 - period] = running / period_t;
    }
    Ok(out)
}
