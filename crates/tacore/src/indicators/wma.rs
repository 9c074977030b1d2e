//! Weighted Moving Average (WMA).
//!
//! Linearly weighted window average: the most recent sample carries weight
//! `period`, the one before `period - 1`, down to weight 1. Maintained with
//! running plain and weighted sums for O(n) total work.

use crate::error::Result;
use crate::traits::{validate_period, validate_series, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for WMA: `period - 1`.
#[inline]
#[must_use]
pub const fn wma_lookback(period: usize) -> usize {
    period - 1
}

/// Computes the linearly Weighted Moving Average over `period` samples.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn wma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_series(data)?;
    if data.len() < period {
        return Ok(Vec::new());
    }

    // Triangular weight total: period * (period + 1) / 2
    let weight_total = T::from_usize(period * (period + 1) / 2)?;
    let mut out = alloc_series(data.len() - wma_lookback(period))?;

    // plain_sum tracks the window sum; weighted_sum tracks sum(w_j * x_j).
    // Sliding one bar subtracts plain_sum once from weighted_sum and adds
    // the incoming sample at full weight.
    let mut plain_sum = T::zero();
    let mut weighted_sum = T::zero();
    for (j, &x) in data[..period].iter().enumerate() {
        plain_sum = plain_sum + x;
        weighted_sum = weighted_sum + T::from_usize(j + 1)? * x;
    }
    out[0] = weighted_sum / weight_total;

    let period_t = T::from_usize(period)?;
    for i in period..data.len() {
        weighted_sum = weighted_sum - plain_sum + period_t * data[i];
        plain_sum = plain_sum + data[i] - data[i - period];
        out[i + 1 - period] = weighted_sum / weight_total;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, EPSILON};

    #[test]
    fn test_wma_basic() {
        let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let out = wma(&data, 3).unwrap();
        assert_eq!(out.len(), 3);
        // (1*1 + 2*2 + 3*3) / 6 = 14/6
        assert!(approx_eq(out[0], 14.0 / 6.0, EPSILON));
        // (2*1 + 3*2 + 4*3) / 6 = 20/6
        assert!(approx_eq(out[1], 20.0 / 6.0, EPSILON));
        // (3*1 + 4*2 + 5*3) / 6 = 26/6
        assert!(approx_eq(out[2], 26.0 / 6.0, EPSILON));
    }

    #[test]
    fn test_wma_sliding_matches_direct_recomputation() {
        let data: Vec<f64> = (0..30).map(|i| (f64::from(i) * 0.9).cos() * 3.0 + 20.0).collect();
        let period = 7;
        let out = wma(&data, period).unwrap();
        let weight_total = f64::from((period * (period + 1) / 2) as u32);
        for (i, &v) in out.iter().enumerate() {
            let mut direct = 0.0;
            for j in 0..period {
                direct += data[i + j] * (j + 1) as f64;
            }
            assert!(approx_eq(v, direct / weight_total, 1e-9), "index {i}");
        }
    }

    #[test]
    fn test_wma_constant_series() {
        let data = [4.2_f64; 10];
        for v in wma(&data, 5).unwrap() {
            assert!(approx_eq(v, 4.2, EPSILON));
        }
    }

    #[test]
    fn test_wma_weights_recent_samples_more_than_sma() {
        // On a rising series WMA must sit above SMA
        let data: Vec<f64> = (1..=15).map(f64::from).collect();
        let wma_out = wma(&data, 5).unwrap();
        let sma_out = crate::indicators::sma::sma(&data, 5).unwrap();
        for (w, s) in wma_out.iter().zip(&sma_out) {
            assert!(w > s);
        }
    }

    #[test]
    fn test_wma_validation() {
        let data = [1.0_f64, 2.0];
        assert!(matches!(wma(&data, 1), Err(Error::InvalidPeriod { .. })));
        assert!(wma(&data, 3).unwrap().is_empty());
    }
}
