//! Momentum (MOM).
//!
//! The raw price change over `period` bars: `x[i] − x[i−period]`. Lookback
//! is `period`; a period of 1 (single-bar change) is accepted.

use crate::error::Result;
use crate::traits::{validate_period, validate_series, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for MOM: `period`.
#[inline]
#[must_use]
pub const fn mom_lookback(period: usize) -> usize {
    period
}

/// Computes the Momentum.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 1..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn mom<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, 1)?;
    validate_series(data)?;
    if data.len() <= period {
        return Ok(Vec::new());
    }
    let mut out = alloc_series(data.len() - period)?;
    for i in period..data.len() {
        out[i - period] = data[i] - data[i - period];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{approx_eq, EPSILON};

    #[test]
    fn test_mom_basic() {
        let data = [1.0_f64, 4.0, 2.0, 8.0, 5.0];
        let out = mom(&data, 2).unwrap();
        assert_eq!(out.len(), 3);
        assert!(approx_eq(out[0], 1.0, EPSILON));
        assert!(approx_eq(out[1], 4.0, EPSILON));
        assert!(approx_eq(out[2], 3.0, EPSILON));
    }

    #[test]
    fn test_mom_period_one_is_diff() {
        let data = [3.0_f64, 5.0, 4.0];
        let out = mom(&data, 1).unwrap();
        assert_eq!(out, vec![2.0, -1.0]);
    }

    #[test]
    fn test_mom_constant_series_is_zero() {
        let data = [9.0_f64; 10];
        for v in mom(&data, 3).unwrap() {
            assert!(approx_eq(v, 0.0, EPSILON));
        }
    }

    #[test]
    fn test_mom_short_input_empty() {
        let data = [1.0_f64, 2.0, 3.0];
        assert!(mom(&data, 3).unwrap().is_empty());
    }
}
