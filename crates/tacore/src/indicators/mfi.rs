//! Money Flow Index (MFI).
//!
//! A volume-weighted RSI over the typical price: raw money flow
//! (`typical price × volume`) is classified as positive or negative by the
//! typical price's direction, and the ratio of the positive share is scaled
//! to 0–100 over the window:
//!
//! ```text
//! MFI = 100 · Σ positive flow / (Σ positive flow + Σ negative flow)
//! ```
//!
//! A window with no directional flow yields 0. Lookback is
//! `period + unstable(Mfi)`.

use crate::error::Result;
use crate::settings::{self, Settings, UnstableIndicator};
use crate::traits::{validate_hlcv, validate_period, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for MFI under the global configuration:
/// `period + unstable(Mfi)`.
#[inline]
#[must_use]
pub fn mfi_lookback(period: usize) -> usize {
    mfi_lookback_with(&settings::snapshot(), period)
}

/// Lookback for MFI under an explicit configuration.
#[inline]
#[must_use]
pub fn mfi_lookback_with(config: &Settings, period: usize) -> usize {
    period + config.unstable_period(UnstableIndicator::Mfi)
}

/// Computes the Money Flow Index under the global configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn mfi<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    volume: &[T],
    period: usize,
) -> Result<Vec<T>> {
    mfi_with(&settings::snapshot(), high, low, close, volume, period)
}

/// Computes the Money Flow Index under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn mfi_with<T: SeriesElement>(
    config: &Settings,
    high: &[T],
    low: &[T],
    close: &[T],
    volume: &[T],
    period: usize,
) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_hlcv(high, low, close, volume)?;
    let lookback = mfi_lookback_with(config, period);
    let n = high.len();
    if n <= lookback {
        return Ok(Vec::new());
    }

    let three = T::constant(3.0);
    let typical = |i: usize| (high[i] + low[i] + close[i]) / three;

    // Signed money flow per bar, defined from bar 1
    let mut pos_flow = alloc_series::<T>(n)?;
    let mut neg_flow = alloc_series::<T>(n)?;
    let mut prev_tp = typical(0);
    for i in 1..n {
        let tp = typical(i);
        let raw = tp * volume[i];
        if tp > prev_tp {
            pos_flow[i] = raw;
            neg_flow[i] = T::zero();
        } else if tp < prev_tp {
            pos_flow[i] = T::zero();
            neg_flow[i] = raw;
        } else {
            pos_flow[i] = T::zero();
            neg_flow[i] = T::zero();
        }
        prev_tp = tp;
    }

    let hundred = T::hundred();
    let mut pos_sum = T::zero();
    let mut neg_sum = T::zero();
    for i in 1..=period {
        pos_sum = pos_sum + pos_flow[i];
        neg_sum = neg_sum + neg_flow[i];
    }

    let emit = |pos: T, neg: T| -> T {
        let total = pos + neg;
        if total == T::zero() {
            T::zero()
        } else {
            hundred * pos / total
        }
    };

    let mut out = alloc_series(n - lookback)?;
    if period >= lookback {
        out[0] = emit(pos_sum, neg_sum);
    }
    for i in (period + 1)..n {
        pos_sum = pos_sum + pos_flow[i] - pos_flow[i - period];
        neg_sum = neg_sum + neg_flow[i] - neg_flow[i - period];
        if i >= lookback {
            out[i - lookback] = emit(pos_sum, neg_sum);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{approx_eq, EPSILON};

    fn bars() -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
        let close: Vec<f64> = (0..30)
            .map(|i| 40.0 + (f64::from(i) * 0.8).sin() * 3.0)
            .collect();
        let high: Vec<f64> = close.iter().map(|c| c + 1.0).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 1.0).collect();
        let volume: Vec<f64> = (0..30).map(|i| 1000.0 + f64::from(i % 5) * 100.0).collect();
        (high, low, close, volume)
    }

    #[test]
    fn test_mfi_length_and_bounds() {
        let (high, low, close, volume) = bars();
        let out = mfi(&high, &low, &close, &volume, 14).unwrap();
        assert_eq!(out.len(), close.len() - 14);
        for v in out {
            assert!((0.0..=100.0).contains(&v));
        }
    }

    #[test]
    fn test_mfi_all_rising_is_100() {
        let close: Vec<f64> = (1..=20).map(f64::from).collect();
        let high: Vec<f64> = close.iter().map(|c| c + 0.5).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 0.5).collect();
        let volume = vec![500.0_f64; 20];
        for v in mfi(&high, &low, &close, &volume, 5).unwrap() {
            assert!(approx_eq(v, 100.0, EPSILON));
        }
    }

    #[test]
    fn test_mfi_flat_is_zero() {
        let flat = [10.0_f64; 15];
        let volume = [100.0_f64; 15];
        for v in mfi(&flat, &flat, &flat, &volume, 5).unwrap() {
            assert!(approx_eq(v, 0.0, EPSILON));
        }
    }

    #[test]
    fn test_mfi_windowed_recomputation() {
        let (high, low, close, volume) = bars();
        let period = 6;
        let out = mfi(&high, &low, &close, &volume, period).unwrap();
        let tp: Vec<f64> = (0..close.len())
            .map(|i| (high[i] + low[i] + close[i]) / 3.0)
            .collect();
        for (k, v) in out.iter().enumerate() {
            let end = k + period;
            let mut pos = 0.0;
            let mut neg = 0.0;
            for i in (end + 1 - period)..=end {
                let flow = tp[i] * volume[i];
                if tp[i] > tp[i - 1] {
                    pos += flow;
                } else if tp[i] < tp[i - 1] {
                    neg += flow;
                }
            }
            let expected = if pos + neg == 0.0 { 0.0 } else { 100.0 * pos / (pos + neg) };
            assert!(approx_eq(*v, expected, 1e-9), "index {end}");
        }
    }
}
