//! Moving Average Convergence Divergence (MACD).
//!
//! - **MACD line**: fast MA − slow MA of price
//! - **Signal line**: MA of the MACD line
//! - **Histogram**: MACD line − signal line
//!
//! [`macd`] uses the standard 12/26 EMA legs with an EMA signal;
//! [`macd_ext`] lets every leg pick its own smoothing method; [`macd_fix`]
//! pins the legs at 12/26 and only varies the signal period.
//!
//! All three outputs are trimmed to the same length, aligned at the first
//! bar where the signal line is valid. A fast period at or above the slow
//! period is accepted and simply produces the arithmetically implied
//! (sign-flipped or degenerate) line.

use crate::error::Result;
use crate::indicators::ma::{ma_lookback_with, ma_with};
use crate::settings::{self, MaType, Settings};
use crate::traits::{validate_period, validate_series, SeriesElement};
use crate::utils::alloc_series;

/// The three MACD output series, equally trimmed.
#[derive(Debug, Clone)]
pub struct MacdOutput<T> {
    /// Fast MA minus slow MA.
    pub macd: Vec<T>,
    /// Smoothed MACD line.
    pub signal: Vec<T>,
    /// MACD line minus signal line.
    pub histogram: Vec<T>,
}

/// Lookback of [`macd`] under the global configuration.
#[inline]
#[must_use]
pub fn macd_lookback(fast_period: usize, slow_period: usize, signal_period: usize) -> usize {
    let config = settings::snapshot();
    macd_ext_lookback_with(
        &config,
        fast_period,
        MaType::Ema,
        slow_period,
        MaType::Ema,
        signal_period,
        MaType::Ema,
    )
}

/// Lookback of [`macd_ext`] under an explicit configuration.
#[must_use]
pub fn macd_ext_lookback_with(
    config: &Settings,
    fast_period: usize,
    fast_ma_type: MaType,
    slow_period: usize,
    slow_ma_type: MaType,
    signal_period: usize,
    signal_ma_type: MaType,
) -> usize {
    let line = ma_lookback_with(config, fast_period, fast_ma_type)
        .max(ma_lookback_with(config, slow_period, slow_ma_type));
    line + ma_lookback_with(config, signal_period, signal_ma_type)
}

/// Computes MACD with EMA legs (conventional 12/26/9 parameters) under the
/// global configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for any period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn macd<T: SeriesElement>(
    data: &[T],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdOutput<T>> {
    macd_ext(
        data,
        fast_period,
        MaType::Ema,
        slow_period,
        MaType::Ema,
        signal_period,
        MaType::Ema,
    )
}

/// Computes MACD with a fixed 12/26 EMA pair and a configurable signal
/// period.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a signal period outside 2..=100000,
/// or `Error::EmptyInput` for an empty series.
pub fn macd_fix<T: SeriesElement>(data: &[T], signal_period: usize) -> Result<MacdOutput<T>> {
    macd(data, 12, 26, signal_period)
}

/// Computes MACD with per-leg moving-average types under the global
/// configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for any period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn macd_ext<T: SeriesElement>(
    data: &[T],
    fast_period: usize,
    fast_ma_type: MaType,
    slow_period: usize,
    slow_ma_type: MaType,
    signal_period: usize,
    signal_ma_type: MaType,
) -> Result<MacdOutput<T>> {
    macd_ext_with(
        &settings::snapshot(),
        data,
        fast_period,
        fast_ma_type,
        slow_period,
        slow_ma_type,
        signal_period,
        signal_ma_type,
    )
}

/// Computes MACD with per-leg moving-average types under an explicit
/// configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for any period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
#[allow(clippy::too_many_arguments)]
pub fn macd_ext_with<T: SeriesElement>(
    config: &Settings,
    data: &[T],
    fast_period: usize,
    fast_ma_type: MaType,
    slow_period: usize,
    slow_ma_type: MaType,
    signal_period: usize,
    signal_ma_type: MaType,
) -> Result<MacdOutput<T>> {
    validate_period(fast_period, 2)?;
    validate_period(slow_period, 2)?;
    validate_period(signal_period, 2)?;
    validate_series(data)?;

    let total_lookback = macd_ext_lookback_with(
        config,
        fast_period,
        fast_ma_type,
        slow_period,
        slow_ma_type,
        signal_period,
        signal_ma_type,
    );
    if data.len() <= total_lookback {
        return Ok(MacdOutput {
            macd: Vec::new(),
            signal: Vec::new(),
            histogram: Vec::new(),
        });
    }

    let fast = ma_with(config, data, fast_period, fast_ma_type)?;
    let slow = ma_with(config, data, slow_period, slow_ma_type)?;
    let line_lookback = ma_lookback_with(config, fast_period, fast_ma_type)
        .max(ma_lookback_with(config, slow_period, slow_ma_type));

    // Difference of the two legs, aligned to the later-starting one
    let line_len = data.len() - line_lookback;
    let mut macd_line = alloc_series(line_len)?;
    let fast_offset = fast.len() - line_len;
    let slow_offset = slow.len() - line_len;
    for i in 0..line_len {
        macd_line[i] = fast[i + fast_offset] - slow[i + slow_offset];
    }

    let signal = ma_with(config, &macd_line, signal_period, signal_ma_type)?;
    let out_len = signal.len();
    let line_offset = macd_line.len() - out_len;

    let mut macd_out = alloc_series(out_len)?;
    let mut histogram = alloc_series(out_len)?;
    for i in 0..out_len {
        macd_out[i] = macd_line[i + line_offset];
        histogram[i] = macd_out[i] - signal[i];
    }

    Ok(MacdOutput {
        macd: macd_out,
        signal,
        histogram,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{approx_eq, EPSILON};

    fn trending() -> Vec<f64> {
        (0..80)
            .map(|i| 100.0 + f64::from(i) * 0.5 + (f64::from(i) * 0.4).sin() * 2.0)
            .collect()
    }

    #[test]
    fn test_macd_output_lengths_equal() {
        let data = trending();
        let out = macd(&data, 12, 26, 9).unwrap();
        assert_eq!(out.macd.len(), out.signal.len());
        assert_eq!(out.macd.len(), out.histogram.len());
        assert_eq!(out.macd.len(), data.len() - (25 + 8));
    }

    #[test]
    fn test_macd_histogram_is_line_minus_signal() {
        let data = trending();
        let out = macd(&data, 5, 13, 4).unwrap();
        for i in 0..out.macd.len() {
            assert!(approx_eq(out.histogram[i], out.macd[i] - out.signal[i], EPSILON));
        }
    }

    #[test]
    fn test_macd_positive_in_uptrend() {
        let data: Vec<f64> = (0..120).map(|i| 50.0 + f64::from(i)).collect();
        let out = macd(&data, 12, 26, 9).unwrap();
        // A steady uptrend keeps the fast EMA above the slow EMA
        for v in &out.macd {
            assert!(*v > 0.0);
        }
    }

    #[test]
    fn test_macd_fix_matches_macd() {
        let data = trending();
        let fixed = macd_fix(&data, 9).unwrap();
        let plain = macd(&data, 12, 26, 9).unwrap();
        assert_eq!(fixed.macd.len(), plain.macd.len());
        for (a, b) in fixed.macd.iter().zip(&plain.macd) {
            assert!(approx_eq(*a, *b, EPSILON));
        }
    }

    #[test]
    fn test_macd_ext_sma_legs() {
        let data = trending();
        let out = macd_ext(&data, 5, MaType::Sma, 10, MaType::Sma, 3, MaType::Sma).unwrap();
        assert_eq!(out.macd.len(), data.len() - (9 + 2));
        // Recompute one bar directly from SMAs
        let fast = crate::indicators::sma::sma(&data, 5).unwrap();
        let slow = crate::indicators::sma::sma(&data, 10).unwrap();
        let line_at = |i: usize| fast[i - 4] - slow[i - 9];
        let first_signal_bar = 11; // line lookback 9 + signal lookback 2
        let expected =
            (line_at(first_signal_bar) + line_at(first_signal_bar - 1) + line_at(first_signal_bar - 2)) / 3.0;
        assert!(approx_eq(out.signal[0], expected, EPSILON));
    }

    #[test]
    fn test_macd_inverted_periods_allowed() {
        let data = trending();
        // fast >= slow is degenerate but permitted
        let out = macd(&data, 26, 12, 9).unwrap();
        let normal = macd(&data, 12, 26, 9).unwrap();
        assert_eq!(out.macd.len(), normal.macd.len());
        for (a, b) in out.macd.iter().zip(&normal.macd) {
            assert!(approx_eq(*a, -*b, EPSILON));
        }
    }

    #[test]
    fn test_macd_short_input_empty() {
        let data = vec![1.0_f64; 30];
        let out = macd(&data, 12, 26, 9).unwrap();
        assert!(out.macd.is_empty());
        assert!(out.signal.is_empty());
        assert!(out.histogram.is_empty());
    }
}
