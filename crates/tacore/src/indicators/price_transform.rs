//! Price transforms: average, median, typical and weighted close price.
//!
//! Per-bar recombinations of the OHLC fields, no lookback:
//!
//! - [`avg_price`]: `(open + high + low + close) / 4`
//! - [`med_price`]: `(high + low) / 2`
//! - [`typ_price`]: `(high + low + close) / 3`
//! - [`wcl_price`]: `(high + low + 2·close) / 4`

use crate::error::Result;
use crate::traits::{validate_hlc, validate_ohlc, SeriesElement};
use crate::utils::alloc_series;

/// Lookback of every price transform: 0.
#[inline]
#[must_use]
pub const fn price_transform_lookback() -> usize {
    0
}

/// Average of the four bar prices.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn avg_price<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<T>> {
    validate_ohlc(open, high, low, close)?;
    let four = T::four();
    let mut out = alloc_series(open.len())?;
    for i in 0..open.len() {
        out[i] = (open[i] + high[i] + low[i] + close[i]) / four;
    }
    Ok(out)
}

/// Midpoint of the bar's range.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn med_price<T: SeriesElement>(high: &[T], low: &[T]) -> Result<Vec<T>> {
    crate::traits::validate_pair(high, low)?;
    let two = T::two();
    let mut out = alloc_series(high.len())?;
    for i in 0..high.len() {
        out[i] = (high[i] + low[i]) / two;
    }
    Ok(out)
}

/// Typical price: range midpoint weighted toward the close.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn typ_price<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    validate_hlc(high, low, close)?;
    let three = T::constant(3.0);
    let mut out = alloc_series(high.len())?;
    for i in 0..high.len() {
        out[i] = (high[i] + low[i] + close[i]) / three;
    }
    Ok(out)
}

/// Weighted close price: the close counted twice.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn wcl_price<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    validate_hlc(high, low, close)?;
    let four = T::four();
    let two = T::two();
    let mut out = alloc_series(high.len())?;
    for i in 0..high.len() {
        out[i] = (high[i] + low[i] + two * close[i]) / four;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{approx_eq, EPSILON};

    #[test]
    fn test_price_transforms() {
        let open = [10.0_f64];
        let high = [12.0_f64];
        let low = [8.0_f64];
        let close = [11.0_f64];
        assert!(approx_eq(avg_price(&open, &high, &low, &close).unwrap()[0], 10.25, EPSILON));
        assert!(approx_eq(med_price(&high, &low).unwrap()[0], 10.0, EPSILON));
        assert!(approx_eq(typ_price(&high, &low, &close).unwrap()[0], 31.0 / 3.0, EPSILON));
        assert!(approx_eq(wcl_price(&high, &low, &close).unwrap()[0], 10.5, EPSILON));
    }

    #[test]
    fn test_outputs_keep_input_length() {
        let series = vec![5.0_f64; 17];
        assert_eq!(avg_price(&series, &series, &series, &series).unwrap().len(), 17);
        assert_eq!(med_price(&series, &series).unwrap().len(), 17);
        assert_eq!(typ_price(&series, &series, &series).unwrap().len(), 17);
        assert_eq!(wcl_price(&series, &series, &series).unwrap().len(), 17);
    }

    #[test]
    fn test_flat_bar_all_transforms_agree() {
        let flat = [7.0_f64; 3];
        assert!(approx_eq(avg_price(&flat, &flat, &flat, &flat).unwrap()[1], 7.0, EPSILON));
        assert!(approx_eq(med_price(&flat, &flat).unwrap()[1], 7.0, EPSILON));
        assert!(approx_eq(typ_price(&flat, &flat, &flat).unwrap()[1], 7.0, EPSILON));
        assert!(approx_eq(wcl_price(&flat, &flat, &flat).unwrap()[1], 7.0, EPSILON));
    }
}
