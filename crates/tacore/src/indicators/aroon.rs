//! Aroon and Aroon Oscillator.
//!
//! Aroon measures how recently the highest high / lowest low occurred
//! inside a `period + 1` bar window:
//!
//! ```text
//! AroonUp   = 100 · (period − bars since highest high) / period
//! AroonDown = 100 · (period − bars since lowest low) / period
//! ```
//!
//! Both lines live in [0, 100]; the oscillator is their difference
//! (up − down, in [−100, 100]). Lookback is `period`. Ties for the extreme
//! resolve to the most recent bar.

use crate::error::Result;
use crate::kernels::rolling_extrema::{rolling_max_index_into, rolling_min_index_into};
use crate::traits::{validate_pair, validate_period, SeriesElement};
use crate::utils::{alloc_int_series, alloc_series};

/// Aroon up and down lines, equally trimmed.
#[derive(Debug, Clone)]
pub struct AroonOutput<T> {
    /// Bars-since-low line.
    pub down: Vec<T>,
    /// Bars-since-high line.
    pub up: Vec<T>,
}

/// Lookback for Aroon: `period`.
#[inline]
#[must_use]
pub const fn aroon_lookback(period: usize) -> usize {
    period
}

/// Computes the Aroon up/down lines.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn aroon<T: SeriesElement>(high: &[T], low: &[T], period: usize) -> Result<AroonOutput<T>> {
    validate_period(period, 2)?;
    validate_pair(high, low)?;
    let lookback = aroon_lookback(period);
    if high.len() <= lookback {
        return Ok(AroonOutput {
            down: Vec::new(),
            up: Vec::new(),
        });
    }

    let window = period + 1;
    let out_len = high.len() - lookback;
    let mut high_idx = alloc_int_series(out_len, 0usize)?;
    let mut low_idx = alloc_int_series(out_len, 0usize)?;
    rolling_max_index_into(high, window, &mut high_idx);
    rolling_min_index_into(low, window, &mut low_idx);

    let period_t = T::from_usize(period)?;
    let hundred = T::hundred();
    let mut up = alloc_series(out_len)?;
    let mut down = alloc_series(out_len)?;
    for i in 0..out_len {
        let bar = i + lookback;
        let since_high = T::from_usize(bar - high_idx[i])?;
        let since_low = T::from_usize(bar - low_idx[i])?;
        up[i] = hundred * (period_t - since_high) / period_t;
        down[i] = hundred * (period_t - since_low) / period_t;
    }
    Ok(AroonOutput { down, up })
}

/// Computes the Aroon Oscillator (`up − down`).
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn aroon_osc<T: SeriesElement>(high: &[T], low: &[T], period: usize) -> Result<Vec<T>> {
    let lines = aroon(high, low, period)?;
    let mut out = alloc_series(lines.up.len())?;
    for i in 0..out.len() {
        out[i] = lines.up[i] - lines.down[i];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{approx_eq, EPSILON};

    #[test]
    fn test_aroon_fresh_high_is_100() {
        // Monotone rise: every bar is a fresh high, lows fall out of range
        let high: Vec<f64> = (1..=15).map(f64::from).collect();
        let low: Vec<f64> = high.iter().map(|x| x - 0.5).collect();
        let out = aroon(&high, &low, 4).unwrap();
        for v in &out.up {
            assert!(approx_eq(*v, 100.0, EPSILON));
        }
        for v in &out.down {
            assert!(approx_eq(*v, 0.0, EPSILON));
        }
    }

    #[test]
    fn test_aroon_lengths_and_bounds() {
        let high = vec![3.0_f64, 5.0, 4.0, 6.0, 2.0, 7.0, 5.5, 6.5, 8.0, 7.5];
        let low: Vec<f64> = high.iter().map(|x| x - 1.0).collect();
        let out = aroon(&high, &low, 4).unwrap();
        assert_eq!(out.up.len(), high.len() - 4);
        assert_eq!(out.up.len(), out.down.len());
        for v in out.up.iter().chain(&out.down) {
            assert!((0.0..=100.0).contains(v));
        }
    }

    #[test]
    fn test_aroon_counts_bars_since_extreme() {
        // Peak at index 1, then fading: at bar 4 (window 0..=4) the high is
        // 3 bars old
        let high = [5.0_f64, 9.0, 7.0, 6.0, 5.5];
        let low = [4.0_f64, 8.0, 6.0, 5.0, 4.5];
        let out = aroon(&high, &low, 4).unwrap();
        assert_eq!(out.up.len(), 1);
        assert!(approx_eq(out.up[0], 100.0 * (4.0 - 3.0) / 4.0, EPSILON));
    }

    #[test]
    fn test_aroon_osc_is_difference() {
        let high = vec![3.0_f64, 5.0, 4.0, 6.0, 2.0, 7.0, 5.5, 6.5];
        let low: Vec<f64> = high.iter().map(|x| x - 1.0).collect();
        let lines = aroon(&high, &low, 3).unwrap();
        let osc = aroon_osc(&high, &low, 3).unwrap();
        for i in 0..osc.len() {
            assert!(approx_eq(osc[i], lines.up[i] - lines.down[i], EPSILON));
        }
    }
}
