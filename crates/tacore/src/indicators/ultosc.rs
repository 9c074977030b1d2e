//! Ultimate Oscillator.
//!
//! Blends buying pressure over three horizons to dodge the false signals a
//! single-period oscillator produces:
//!
//! ```text
//! BP = close − min(low, prev close)
//! TR = max(high, prev close) − min(low, prev close)
//! avgₖ = ΣBP over Pₖ / ΣTR over Pₖ
//! UO = 100 · (4·avg_short + 2·avg_mid + avg_long) / 7
//! ```
//!
//! Periods are sorted ascending before the 4/2/1 weights apply, so argument
//! order does not matter. Conventional periods: 7, 14, 28. Lookback is the
//! longest period.

use crate::error::Result;
use crate::traits::{validate_hlc, validate_period, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for the Ultimate Oscillator: the largest of the three periods.
#[inline]
#[must_use]
pub fn ultosc_lookback(period1: usize, period2: usize, period3: usize) -> usize {
    period1.max(period2).max(period3)
}

/// Computes the Ultimate Oscillator.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for any period outside 1..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn ultosc<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period1: usize,
    period2: usize,
    period3: usize,
) -> Result<Vec<T>> {
    validate_period(period1, 1)?;
    validate_period(period2, 1)?;
    validate_period(period3, 1)?;
    validate_hlc(high, low, close)?;

    let mut periods = [period1, period2, period3];
    periods.sort_unstable();
    let [short, mid, long] = periods;

    let lookback = ultosc_lookback(period1, period2, period3);
    let n = high.len();
    if n <= lookback {
        return Ok(Vec::new());
    }

    // Per-bar buying pressure and true range (defined from bar 1)
    let mut bp = alloc_series::<T>(n)?;
    let mut tr = alloc_series::<T>(n)?;
    for i in 1..n {
        let true_low = low[i].min(close[i - 1]);
        let true_high = high[i].max(close[i - 1]);
        bp[i] = close[i] - true_low;
        tr[i] = true_high - true_low;
    }

    let ratio = |sum_bp: T, sum_tr: T| -> T {
        if sum_tr == T::zero() {
            T::zero()
        } else {
            sum_bp / sum_tr
        }
    };
    let window_sums = |end: usize, period: usize| -> (T, T) {
        let mut s_bp = T::zero();
        let mut s_tr = T::zero();
        for i in (end + 1 - period)..=end {
            s_bp = s_bp + bp[i];
            s_tr = s_tr + tr[i];
        }
        (s_bp, s_tr)
    };

    let four = T::four();
    let two = T::two();
    let seven = T::constant(7.0);
    let hundred = T::hundred();
    let mut out = alloc_series(n - lookback)?;
    for end in lookback..n {
        let (bp1, tr1) = window_sums(end, short);
        let (bp2, tr2) = window_sums(end, mid);
        let (bp3, tr3) = window_sums(end, long);
        let blended = four * ratio(bp1, tr1) + two * ratio(bp2, tr2) + ratio(bp3, tr3);
        out[end - lookback] = hundred * blended / seven;
    }
    Ok(out)
}
