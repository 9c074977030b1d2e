//! Directional movement family: +DM/−DM, +DI/−DI, DX, ADX and ADXR.
//!
//! Wilder's trend-strength system. Per bar:
//!
//! ```text
//! +DM1 = high[i] − high[i-1]   if positive and larger than the down move
//! −DM1 = low[i-1] − low[i]     if positive and larger than the up move
//! ```
//!
//! The period variants accumulate these with Wilder's smoothing
//! (`S = S − S/P + new`), the DI lines normalize them by smoothed true
//! range, DX measures the spread between the DI lines, and ADX/ADXR smooth
//! DX into a trend-strength reading. All outputs are 0–100 scaled.

use crate::error::Result;
use crate::settings::{self, Settings, UnstableIndicator};
use crate::traits::{validate_hlc, validate_pair, validate_period, SeriesElement};
use crate::utils::alloc_series;

#[inline]
fn dm_pair<T: SeriesElement>(high: &[T], low: &[T], i: usize) -> (T, T) {
    let up = high[i] - high[i - 1];
    let down = low[i - 1] - low[i];
    let plus = if up > T::zero() && up > down { up } else { T::zero() };
    let minus = if down > T::zero() && down > up { down } else { T::zero() };
    (plus, minus)
}

#[inline]
fn bar_true_range<T: SeriesElement>(high: &[T], low: &[T], close: &[T], i: usize) -> T {
    let span = high[i] - low[i];
    let up_gap = (high[i] - close[i - 1]).abs();
    let down_gap = (low[i] - close[i - 1]).abs();
    span.max(up_gap).max(down_gap)
}

/// Lookback for [`plus_dm`] under the global configuration:
/// `period - 1 + unstable(PlusDm)`.
#[inline]
#[must_use]
pub fn plus_dm_lookback(period: usize) -> usize {
    period - 1 + settings::unstable_period(UnstableIndicator::PlusDm)
}

/// Lookback for [`minus_dm`] under the global configuration:
/// `period - 1 + unstable(MinusDm)`.
#[inline]
#[must_use]
pub fn minus_dm_lookback(period: usize) -> usize {
    period - 1 + settings::unstable_period(UnstableIndicator::MinusDm)
}

/// Lookback for [`plus_di`] under the global configuration:
/// `period + unstable(PlusDi)`.
#[inline]
#[must_use]
pub fn plus_di_lookback(period: usize) -> usize {
    period + settings::unstable_period(UnstableIndicator::PlusDi)
}

/// Lookback for [`minus_di`] under the global configuration:
/// `period + unstable(MinusDi)`.
#[inline]
#[must_use]
pub fn minus_di_lookback(period: usize) -> usize {
    period + settings::unstable_period(UnstableIndicator::MinusDi)
}

/// Lookback for [`dx`] under the global configuration:
/// `period + unstable(Dx)`.
#[inline]
#[must_use]
pub fn dx_lookback(period: usize) -> usize {
    dx_lookback_with(&settings::snapshot(), period)
}

/// Lookback for [`dx`] under an explicit configuration.
#[inline]
#[must_use]
pub fn dx_lookback_with(config: &Settings, period: usize) -> usize {
    period + config.unstable_period(UnstableIndicator::Dx)
}

/// Lookback for [`adx`] under the global configuration:
/// `2·period - 1 + unstable(Adx)`.
#[inline]
#[must_use]
pub fn adx_lookback(period: usize) -> usize {
    adx_lookback_with(&settings::snapshot(), period)
}

/// Lookback for [`adx`] under an explicit configuration.
#[inline]
#[must_use]
pub fn adx_lookback_with(config: &Settings, period: usize) -> usize {
    2 * period - 1 + config.unstable_period(UnstableIndicator::Adx)
}

/// Lookback for [`adxr`] under the global configuration:
/// `adx_lookback + period - 1 + unstable(Adxr)`.
#[inline]
#[must_use]
pub fn adxr_lookback(period: usize) -> usize {
    adxr_lookback_with(&settings::snapshot(), period)
}

/// Lookback for [`adxr`] under an explicit configuration.
#[inline]
#[must_use]
pub fn adxr_lookback_with(config: &Settings, period: usize) -> usize {
    adx_lookback_with(config, period) + period - 1 + config.unstable_period(UnstableIndicator::Adxr)
}

/// Wilder-smoothed Plus Directional Movement under the global
/// configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn plus_dm<T: SeriesElement>(high: &[T], low: &[T], period: usize) -> Result<Vec<T>> {
    smoothed_dm(&settings::snapshot(), high, low, period, true, UnstableIndicator::PlusDm)
}

/// Wilder-smoothed Minus Directional Movement under the global
/// configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn minus_dm<T: SeriesElement>(high: &[T], low: &[T], period: usize) -> Result<Vec<T>> {
    smoothed_dm(&settings::snapshot(), high, low, period, false, UnstableIndicator::MinusDm)
}

fn smoothed_dm<T: SeriesElement>(
    config: &Settings,
    high: &[T],
    low: &[T],
    period: usize,
    plus: bool,
    unstable: UnstableIndicator,
) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_pair(high, low)?;
    let lookback = period - 1 + config.unstable_period(unstable);
    if high.len() <= lookback {
        return Ok(Vec::new());
    }

    let period_t = T::from_usize(period)?;
    let pick = |i: usize| {
        let (p, m) = dm_pair(high, low, i);
        if plus {
            p
        } else {
            m
        }
    };

    let mut acc = T::zero();
    for i in 1..period {
        acc = acc + pick(i);
    }

    let mut out = alloc_series(high.len() - lookback)?;
    if period - 1 >= lookback {
        out[0] = acc;
    }
    for i in period..high.len() {
        acc = acc - acc / period_t + pick(i);
        if i >= lookback {
            out[i - lookback] = acc;
        }
    }
    Ok(out)
}

/// Shared DI recurrence: emits `(plus_di, minus_di)` per bar from index
/// `period` on, via the callback.
fn di_sweep<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
    mut emit: impl FnMut(usize, T, T),
) -> Result<()> {
    let period_t = T::from_usize(period)?;
    let hundred = T::hundred();

    let mut plus_acc = T::zero();
    let mut minus_acc = T::zero();
    let mut tr_acc = T::zero();
    for i in 1..period {
        let (p, m) = dm_pair(high, low, i);
        plus_acc = plus_acc + p;
        minus_acc = minus_acc + m;
        tr_acc = tr_acc + bar_true_range(high, low, close, i);
    }

    for i in period..high.len() {
        let (p, m) = dm_pair(high, low, i);
        plus_acc = plus_acc - plus_acc / period_t + p;
        minus_acc = minus_acc - minus_acc / period_t + m;
        tr_acc = tr_acc - tr_acc / period_t + bar_true_range(high, low, close, i);
        let (pdi, mdi) = if tr_acc == T::zero() {
            (T::zero(), T::zero())
        } else {
            (hundred * plus_acc / tr_acc, hundred * minus_acc / tr_acc)
        };
        emit(i, pdi, mdi);
    }
    Ok(())
}

/// Plus Directional Indicator (`100 · smoothed +DM / smoothed TR`) under
/// the global configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn plus_di<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<T>> {
    di_component(&settings::snapshot(), high, low, close, period, true, UnstableIndicator::PlusDi)
}

/// Minus Directional Indicator (`100 · smoothed −DM / smoothed TR`) under
/// the global configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn minus_di<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<T>> {
    di_component(&settings::snapshot(), high, low, close, period, false, UnstableIndicator::MinusDi)
}

fn di_component<T: SeriesElement>(
    config: &Settings,
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
    plus: bool,
    unstable: UnstableIndicator,
) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_hlc(high, low, close)?;
    let lookback = period + config.unstable_period(unstable);
    if high.len() <= lookback {
        return Ok(Vec::new());
    }

    let mut out = alloc_series(high.len() - lookback)?;
    di_sweep(high, low, close, period, |i, pdi, mdi| {
        if i >= lookback {
            out[i - lookback] = if plus { pdi } else { mdi };
        }
    })?;
    Ok(out)
}

/// Directional Movement Index:
/// `100 · |+DI − −DI| / (+DI + −DI)`, 0 when both DI lines are 0.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn dx<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    dx_with(&settings::snapshot(), high, low, close, period)
}

/// Computes DX under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn dx_with<T: SeriesElement>(
    config: &Settings,
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_hlc(high, low, close)?;
    let lookback = dx_lookback_with(config, period);
    if high.len() <= lookback {
        return Ok(Vec::new());
    }

    let hundred = T::hundred();
    let mut out = alloc_series(high.len() - lookback)?;
    di_sweep(high, low, close, period, |i, pdi, mdi| {
        if i >= lookback {
            let total = pdi + mdi;
            out[i - lookback] = if total == T::zero() {
                T::zero()
            } else {
                hundred * (pdi - mdi).abs() / total
            };
        }
    })?;
    Ok(out)
}

/// Average Directional Movement Index: Wilder-smoothed DX under the global
/// configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn adx<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    adx_with(&settings::snapshot(), high, low, close, period)
}

/// Computes ADX under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn adx_with<T: SeriesElement>(
    config: &Settings,
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_hlc(high, low, close)?;
    let lookback = adx_lookback_with(config, period);
    if high.len() <= lookback {
        return Ok(Vec::new());
    }

    // DX values exist from bar `period`; the seed averages the first
    // `period` of them, landing at bar `2·period - 1`.
    let hundred = T::hundred();
    let period_t = T::from_usize(period)?;
    let period_minus = T::from_usize(period - 1)?;
    let seed_end = 2 * period - 1;

    let mut out = alloc_series(high.len() - lookback)?;
    let mut seed_sum = T::zero();
    let mut prev = T::nan();
    di_sweep(high, low, close, period, |i, pdi, mdi| {
        let total = pdi + mdi;
        let dx_val = if total == T::zero() {
            T::zero()
        } else {
            hundred * (pdi - mdi).abs() / total
        };
        if i < seed_end {
            seed_sum = seed_sum + dx_val;
        } else if i == seed_end {
            prev = (seed_sum + dx_val) / period_t;
        } else {
            prev = (prev * period_minus + dx_val) / period_t;
        }
        if i >= lookback {
            out[i - lookback] = prev;
        }
    })?;
    Ok(out)
}

/// ADX Rating: the average of today's ADX and the ADX from `period - 1`
/// bars ago.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn adxr<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    adxr_with(&settings::snapshot(), high, low, close, period)
}

/// Computes ADXR under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput`, or `Error::LengthMismatch` on malformed input.
pub fn adxr_with<T: SeriesElement>(
    config: &Settings,
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<T>> {
    validate_period(period, 2)?;
    validate_hlc(high, low, close)?;
    let lookback = adxr_lookback_with(config, period);
    if high.len() <= lookback {
        return Ok(Vec::new());
    }

    let adx_series = adx_with(config, high, low, close, period)?;
    let span = period - 1 + config.unstable_period(UnstableIndicator::Adxr);
    let two = T::two();
    let mut out = alloc_series(adx_series.len() - span)?;
    for (i, v) in out.iter_mut().enumerate() {
        *v = (adx_series[i + span] + adx_series[i]) / two;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{approx_eq, EPSILON};

    fn trending_bars(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let mut high = Vec::with_capacity(n);
        let mut low = Vec::with_capacity(n);
        let mut close = Vec::with_capacity(n);
        for i in 0..n {
            let base = 100.0 + i as f64 * 0.8 + (i as f64 * 0.9).sin() * 1.5;
            high.push(base + 1.0);
            low.push(base - 1.0);
            close.push(base + 0.3);
        }
        (high, low, close)
    }

    #[test]
    fn test_dm_pair_selection() {
        // Up move dominates
        let high = [10.0_f64, 12.0];
        let low = [9.0_f64, 10.0];
        let (p, m) = dm_pair(&high, &low, 1);
        assert!(approx_eq(p, 2.0, EPSILON));
        assert!(approx_eq(m, 0.0, EPSILON));

        // Down move dominates
        let high = [10.0_f64, 10.5];
        let low = [9.0_f64, 7.0];
        let (p, m) = dm_pair(&high, &low, 1);
        assert!(approx_eq(p, 0.0, EPSILON));
        assert!(approx_eq(m, 2.0, EPSILON));

        // Inside bar: neither
        let high = [10.0_f64, 9.5];
        let low = [9.0_f64, 9.2];
        let (p, m) = dm_pair(&high, &low, 1);
        assert!(approx_eq(p, 0.0, EPSILON));
        assert!(approx_eq(m, 0.0, EPSILON));
    }

    #[test]
    fn test_lengths() {
        let (high, low, close) = trending_bars(40);
        assert_eq!(plus_dm(&high, &low, 5).unwrap().len(), 40 - 4);
        assert_eq!(plus_di(&high, &low, &close, 5).unwrap().len(), 40 - 5);
        assert_eq!(dx(&high, &low, &close, 5).unwrap().len(), 40 - 5);
        assert_eq!(adx(&high, &low, &close, 5).unwrap().len(), 40 - 9);
        assert_eq!(adxr(&high, &low, &close, 5).unwrap().len(), 40 - 13);
    }

    #[test]
    fn test_di_dominance_in_uptrend() {
        let (high, low, close) = trending_bars(60);
        let pdi = plus_di(&high, &low, &close, 14).unwrap();
        let mdi = minus_di(&high, &low, &close, 14).unwrap();
        // Steadily rising bars keep +DI above −DI
        let tail = pdi.len() - 20;
        for i in tail..pdi.len() {
            assert!(pdi[i] > mdi[i], "index {i}");
        }
    }

    #[test]
    fn test_dx_adx_bounded() {
        let (high, low, close) = trending_bars(80);
        for v in dx(&high, &low, &close, 14).unwrap() {
            assert!((0.0..=100.0).contains(&v));
        }
        for v in adx(&high, &low, &close, 14).unwrap() {
            assert!((0.0..=100.0).contains(&v));
        }
    }

    #[test]
    fn test_adx_high_in_strong_trend() {
        let high: Vec<f64> = (0..80).map(|i| 101.0 + i as f64).collect();
        let low: Vec<f64> = (0..80).map(|i| 99.0 + i as f64).collect();
        let close: Vec<f64> = (0..80).map(|i| 100.5 + i as f64).collect();
        let out = adx(&high, &low, &close, 14).unwrap();
        // A perfectly one-sided market drives DX to 100 and ADX toward it
        assert!(out[out.len() - 1] > 90.0);
    }

    #[test]
    fn test_adxr_averages_spaced_adx() {
        let (high, low, close) = trending_bars(60);
        let a = adx(&high, &low, &close, 5).unwrap();
        let r = adxr(&high, &low, &close, 5).unwrap();
        for (i, v) in r.iter().enumerate() {
            assert!(approx_eq(*v, (a[i + 4] + a[i]) / 2.0, EPSILON));
        }
    }

    #[test]
    fn test_adx_unstable_period() {
        let mut config = Settings::new();
        config.set_unstable_period(UnstableIndicator::Adx, 3);
        let (high, low, close) = trending_bars(50);
        let plain = adx_with(&Settings::new(), &high, &low, &close, 6).unwrap();
        let trimmed = adx_with(&config, &high, &low, &close, 6).unwrap();
        assert_eq!(plain.len(), trimmed.len() + 3);
        for (a, b) in plain[3..].iter().zip(&trimmed) {
            assert!(approx_eq(*a, *b, EPSILON));
        }
    }
}
