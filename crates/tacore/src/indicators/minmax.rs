//! Windowed extrema and sums: max, min, their indices, sum, midpoint and
//! midprice.
//!
//! All functions trim their output by the lookback (`period - 1`): the first
//! output sample corresponds to the first full window, and an input no
//! longer than the lookback yields an empty output. Rolling extrema use the
//! monotonic-deque kernel for O(n) total work; when several window positions
//! tie for the extreme value, the index functions report the most recent
//! occurrence.

use crate::error::Result;
use crate::kernels::rolling_extrema::{
    rolling_max_index_into, rolling_max_into, rolling_min_index_into, rolling_min_into,
};
use crate::traits::{validate_pair, validate_period, validate_series, SeriesElement};
use crate::utils::{alloc_int_series, alloc_series};

/// Lookback for every windowed reduction in this module: `period - 1`.
#[inline]
#[must_use]
pub const fn minmax_lookback(period: usize) -> usize {
    period - 1
}

/// Highest value over each `period`-sample window.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn max<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_series(data)?;
    if data.len() < period {
        return Ok(Vec::new());
    }
    let mut out = alloc_series(data.len() - minmax_lookback(period))?;
    rolling_max_into(data, period, &mut out);
    Ok(out)
}

/// Lowest value over each `period`-sample window.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn min<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_series(data)?;
    if data.len() < period {
        return Ok(Vec::new());
    }
    let mut out = alloc_series(data.len() - minmax_lookback(period))?;
    rolling_min_into(data, period, &mut out);
    Ok(out)
}

/// Absolute input index of the highest value over each window.
///
/// Ties resolve to the most recent (highest) index.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn max_index<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<usize>> {
    validate_period(period, 2)?;
    validate_series(data)?;
    if data.len() < period {
        return Ok(Vec::new());
    }
    let mut out = alloc_int_series(data.len() - minmax_lookback(period), 0usize)?;
    rolling_max_index_into(data, period, &mut out);
    Ok(out)
}

/// Absolute input index of the lowest value over each window.
///
/// Ties resolve to the most recent (highest) index.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn min_index<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<usize>> {
    validate_period(period, 2)?;
    validate_series(data)?;
    if data.len() < period {
        return Ok(Vec::new());
    }
    let mut out = alloc_int_series(data.len() - minmax_lookback(period), 0usize)?;
    rolling_min_index_into(data, period, &mut out);
    Ok(out)
}

/// Lowest and highest values over each window.
#[derive(Debug, Clone)]
pub struct MinMaxOutput<T> {
    /// Window minimums.
    pub min: Vec<T>,
    /// Window maximums.
    pub max: Vec<T>,
}

/// Lowest and highest values over each `period`-sample window, in one pass
/// pair.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn min_max<T: SeriesElement>(data: &[T], period: usize) -> Result<MinMaxOutput<T>> {
    Ok(MinMaxOutput {
        min: min(data, period)?,
        max: max(data, period)?,
    })
}

/// Indices of the lowest and highest values over each window.
#[derive(Debug, Clone)]
pub struct MinMaxIndexOutput {
    /// Absolute indices of window minimums.
    pub min_idx: Vec<usize>,
    /// Absolute indices of window maximums.
    pub max_idx: Vec<usize>,
}

/// Indices of the lowest and highest values over each window.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn min_max_index<T: SeriesElement>(data: &[T], period: usize) -> Result<MinMaxIndexOutput> {
    Ok(MinMaxIndexOutput {
        min_idx: min_index(data, period)?,
        max_idx: max_index(data, period)?,
    })
}

/// Sum over each `period`-sample window, maintained as a running total.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn sum<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_series(data)?;
    if data.len() < period {
        return Ok(Vec::new());
    }
    let mut out = alloc_series(data.len() - minmax_lookback(period))?;

    let mut running = T::zero();
    for &x in &data[..period] {
        running = running + x;
    }
    out[0] = running;
    for i in period..data.len() {
        running = running + data[i] - data[i - period];
        out[i + 1 - period] = running;
    }
    Ok(out)
}

/// Midpoint over each window: `(highest + lowest) / 2` of one series.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn midpoint<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_series(data)?;
    if data.len() < period {
        return Ok(Vec::new());
    }
    let out_len = data.len() - minmax_lookback(period);
    let mut highest = alloc_series(out_len)?;
    let mut lowest = alloc_series(out_len)?;
    rolling_max_into(data, period, &mut highest);
    rolling_min_into(data, period, &mut lowest);

    let two = T::two();
    for i in 0..out_len {
        highest[i] = (highest[i] + lowest[i]) / two;
    }
    Ok(highest)
}

/// Midprice over each window: `(highest high + lowest low) / 2`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput` for empty series, or `Error::LengthMismatch` when
/// `high` and `low` differ in length.
pub fn midprice<T: SeriesElement>(high: &[T], low: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_pair(high, low)?;
    if high.len() < period {
        return Ok(Vec::new());
    }
    let out_len = high.len() - minmax_lookback(period);
    let mut highest = alloc_series(out_len)?;
    let mut lowest = alloc_series(out_len)?;
    rolling_max_into(high, period, &mut highest);
    rolling_min_into(low, period, &mut lowest);

    let two = T::two();
    for i in 0..out_len {
        highest[i] = (highest[i] + lowest[i]) / two;
    }
    Ok(highest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, EPSILON};

    #[test]
    fn test_max_min_basic() {
        let data = [3.0_f64, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(max(&data, 3).unwrap(), vec![4.0, 4.0, 5.0]);
        assert_eq!(min(&data, 3).unwrap(), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_output_trimmed_by_lookback() {
        let data: Vec<f64> = (0..10).map(f64::from).collect();
        assert_eq!(max(&data, 4).unwrap().len(), 7);
        // Input no longer than the lookback: empty output, not an error.
        assert_eq!(max(&data[..3], 4).unwrap().len(), 0);
    }

    #[test]
    fn test_max_index_tie_break() {
        // Maxima at indices 0 and 2; the most recent must win.
        let data = [5.0_f64, 3.0, 5.0, 1.0];
        assert_eq!(max_index(&data, 4).unwrap(), vec![2]);
    }

    #[test]
    fn test_min_index_reports_absolute_index() {
        let data = [4.0_f64, 2.0, 3.0, 1.0, 5.0];
        assert_eq!(min_index(&data, 3).unwrap(), vec![1, 3, 3]);
    }

    #[test]
    fn test_min_max_struct_lengths_agree() {
        let data = [2.0_f64, 9.0, 4.0, 7.0, 1.0, 6.0];
        let out = min_max(&data, 3).unwrap();
        assert_eq!(out.min.len(), out.max.len());
        assert_eq!(out.min, vec![2.0, 4.0, 1.0, 1.0]);
        assert_eq!(out.max, vec![9.0, 9.0, 7.0, 7.0]);
    }

    #[test]
    fn test_sum_matches_recomputation() {
        let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let out = sum(&data, 3).unwrap();
        assert_eq!(out, vec![6.0, 9.0, 12.0]);
    }

    #[test]
    fn test_midpoint() {
        let data = [1.0_f64, 5.0, 3.0];
        let out = midpoint(&data, 3).unwrap();
        assert!(approx_eq(out[0], 3.0, EPSILON));
    }

    #[test]
    fn test_midprice() {
        let high = [10.0_f64, 12.0, 11.0];
        let low = [8.0_f64, 9.0, 10.0];
        let out = midprice(&high, &low, 3).unwrap();
        assert!(approx_eq(out[0], 10.0, EPSILON)); // (12 + 8) / 2
    }

    #[test]
    fn test_invalid_period_rejected() {
        let data = [1.0_f64, 2.0, 3.0];
        assert!(matches!(
            max(&data, 1),
            Err(Error::InvalidPeriod { period: 1, .. })
        ));
        assert!(matches!(sum(&data, 100_001), Err(Error::InvalidPeriod { .. })));
    }
}
