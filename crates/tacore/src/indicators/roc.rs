//! Rate of Change family: ROC, ROCP, ROCR, ROCR100.
//!
//! Four scalings of the same `period`-bar price ratio:
//!
//! ```text
//! roc      = 100 · (x/xₚ − 1)
//! roc_p    = (x − xₚ) / xₚ
//! roc_r    = x / xₚ
//! roc_r100 = 100 · x / xₚ
//! ```
//!
//! with `xₚ = x[i − period]`. A zero reference price yields 0 for that bar.
//! Lookback is `period`; a period of 1 is accepted.

use crate::error::Result;
use crate::traits::{validate_period, validate_series, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for the ROC family: `period`.
#[inline]
#[must_use]
pub const fn roc_lookback(period: usize) -> usize {
    period
}

fn roc_map<T: SeriesElement>(
    data: &[T],
    period: usize,
    map: impl Fn(T, T) -> T,
) -> Result<Vec<T>> {
    validate_period(period, 1)?;
    validate_series(data)?;
    if data.len() <= period {
        return Ok(Vec::new());
    }
    let mut out = alloc_series(data.len() - period)?;
    for i in period..data.len() {
        let prev = data[i - period];
        out[i - period] = if prev == T::zero() {
            T::zero()
        } else {
            map(data[i], prev)
        };
    }
    Ok(out)
}

/// Rate of change as a percentage: `100 · (x/xₚ − 1)`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 1..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn roc<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    roc_map(data, period, |x, p| T::hundred() * (x / p - T::one()))
}

/// Rate of change as a plain fraction: `(x − xₚ) / xₚ`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 1..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn roc_p<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    roc_map(data, period, |x, p| (x - p) / p)
}

/// Rate of change as a ratio: `x / xₚ`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 1..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn roc_r<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    roc_map(data, period, |x, p| x / p)
}

/// Rate of change as a ratio scaled to 100: `100 · x / xₚ`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 1..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn roc_r100<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    roc_map(data, period, |x, p| T::hundred() * x / p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{approx_eq, EPSILON};

    #[test]
    fn test_roc_family_consistency() {
        let data = [10.0_f64, 12.0, 15.0, 12.0, 18.0];
        let period = 2;
        let r = roc(&data, period).unwrap();
        let p = roc_p(&data, period).unwrap();
        let rr = roc_r(&data, period).unwrap();
        let rr100 = roc_r100(&data, period).unwrap();
        assert_eq!(r.len(), 3);
        for i in 0..r.len() {
            assert!(approx_eq(r[i], 100.0 * p[i], EPSILON));
            assert!(approx_eq(rr[i], p[i] + 1.0, EPSILON));
            assert!(approx_eq(rr100[i], 100.0 * rr[i], EPSILON));
        }
        // Spot value: 15/10 - 1 = 50%
        assert!(approx_eq(r[0], 50.0, EPSILON));
    }

    #[test]
    fn test_roc_zero_reference_guard() {
        let data = [0.0_f64, 5.0, 10.0];
        let out = roc(&data, 2).unwrap();
        assert!(approx_eq(out[0], 0.0, EPSILON));
    }

    #[test]
    fn test_roc_constant_series() {
        let data = [7.0_f64; 8];
        for v in roc(&data, 3).unwrap() {
            assert!(approx_eq(v, 0.0, EPSILON));
        }
        for v in roc_r(&data, 3).unwrap() {
            assert!(approx_eq(v, 1.0, EPSILON));
        }
    }
}
