//! Triangular Moving Average (TRIMA).
//!
//! An SMA of an SMA: the resulting window weights form a triangle peaking at
//! the middle of the window, so TRIMA smooths twice as much as a plain SMA
//! of the same period while keeping the same `period - 1` lookback.
//!
//! For an odd period `P`, TRIMA(P) = SMA(ceil(P/2)) applied to
//! SMA(floor(P/2)+1); for an even period, SMA(P/2+1) applied to SMA(P/2).

use crate::error::Result;
use crate::indicators::sma::sma;
use crate::traits::{validate_period, validate_series, SeriesElement};

/// Lookback for TRIMA: `period - 1`.
#[inline]
#[must_use]
pub const fn trima_lookback(period: usize) -> usize {
    period - 1
}

/// Computes the Triangular Moving Average over `period` samples.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn trima<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_series(data)?;
    if data.len() < period {
        return Ok(Vec::new());
    }

    // Split the triangle into two SMA passes whose lookbacks sum to
    // period - 1.
    let (first, second) = if period % 2 == 1 {
        ((period / 2) + 1, (period / 2) + 1)
    } else {
        (period / 2, (period / 2) + 1)
    };

    // period 2 degenerates to a single SMA pass (first half-window is one
    // sample wide)
    if first == 1 {
        return sma(data, second);
    }
    let inner = sma(data, first)?;
    sma(&inner, second)
}
