//! Williams %R.
//!
//! Locates the close within the window's high-low range on a 0..−100
//! scale (0 at the window high, −100 at the window low):
//!
//! ```text
//! %R = −100 · (highest high − close) / (highest high − lowest low)
//! ```
//!
//! A flat window yields the midpoint −50, mirroring the stochastic's
//! flat-window rule. Lookback is `period - 1`.

use crate::error::Result;
use crate::kernels::rolling_extrema::{rolling_max_into, rolling_min_into};
use crate::traits::{validate_hlc, validate_period, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for Williams %R: `period - 1`.
#[inline]
#[must_use]
pub const fn willr_lookback(period: usize) -> usize {
    period - 1
}

/// Computes Williams %R.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn willr<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_hlc(high, low, close)?;
    if high.len() < period {
        return Ok(Vec::new());
    }

    let out_len = high.len() - willr_lookback(period);
    let mut highest = alloc_series(out_len)?;
    let mut lowest = alloc_series(out_len)?;
    rolling_max_into(high, period, &mut highest);
    rolling_min_into(low, period, &mut lowest);

    let hundred = T::hundred();
    let fifty = T::fifty();
    let mut out = alloc_series(out_len)?;
    for i in 0..out_len {
        let range = highest[i] - lowest[i];
        out[i] = if range == T::zero() {
            -fifty
        } else {
            -hundred * (highest[i] - close[i + period - 1]) / range
        };
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{approx_eq, EPSILON};

    #[test]
    fn test_willr_range() {
        let high = vec![12.0_f64, 13.0, 12.5, 14.0, 13.5, 14.5, 15.0, 14.0];
        let low: Vec<f64> = high.iter().map(|x| x - 2.0).collect();
        let close: Vec<f64> = high.iter().map(|x| x - 0.5).collect();
        let out = willr(&high, &low, &close, 5).unwrap();
        assert_eq!(out.len(), 4);
        for v in out {
            assert!((-100.0..=0.0).contains(&v));
        }
    }

    #[test]
    fn test_willr_close_at_high_is_zero() {
        let high: Vec<f64> = (1..=10).map(f64::from).collect();
        let low: Vec<f64> = high.iter().map(|x| x - 1.0).collect();
        let close = high.clone();
        for v in willr(&high, &low, &close, 4).unwrap() {
            assert!(approx_eq(v, 0.0, EPSILON));
        }
    }

    #[test]
    fn test_willr_close_at_low_is_minus_100() {
        let high: Vec<f64> = (1..=10).rev().map(|x| f64::from(x) + 1.0).collect();
        let low: Vec<f64> = high.iter().map(|x| x - 1.0).collect();
        let close = low.clone();
        for v in willr(&high, &low, &close, 4).unwrap() {
            assert!(approx_eq(v, -100.0, EPSILON));
        }
    }

    #[test]
    fn test_willr_flat_window_is_midpoint() {
        let flat = [8.0_f64; 8];
        for v in willr(&flat, &flat, &flat, 4).unwrap() {
            assert!(approx_eq(v, -50.0, EPSILON));
        }
    }

    #[test]
    fn test_willr_mirrors_stochastic_k() {
        use crate::settings::MaType;
        let high = vec![10.0_f64, 11.0, 12.0, 11.5, 12.5, 13.0, 12.0, 11.0, 10.5, 11.5];
        let low: Vec<f64> = high.iter().map(|x| x - 1.0).collect();
        let close: Vec<f64> = high.iter().map(|x| x - 0.3).collect();
        let wr = willr(&high, &low, &close, 5).unwrap();
        let st = crate::indicators::stochastic::stoch_fast(&high, &low, &close, 5, 2, MaType::Sma)
            .unwrap();
        // %R = %K − 100 wherever both are defined
        let offset = wr.len() - st.k.len();
        for (i, k) in st.k.iter().enumerate() {
            assert!(approx_eq(wr[i + offset], k - 100.0, 1e-9));
        }
    }
}
