//! Shared shape heuristics for candlestick pattern recognition.
//!
//! Every recognizer measures candles with the same small vocabulary: real
//! body, upper/lower shadow, bar range, gaps, and "near / equal / doji"
//! tolerances expressed as fractions of recent averages. The thresholds
//! live in [`CandleSettings`] so all patterns share one sensitivity table.
//!
//! Averages over recent bars (average body, average range) clamp to the
//! bars actually available, so recognizers classify from the very first
//! full pattern window instead of waiting out an averaging warm-up. A
//! zero-range bar is handled throughout: it is a valid (degenerate) doji,
//! never an error.

use crate::traits::SeriesElement;

/// Bullish pattern signal.
pub const PATTERN_BULLISH: i32 = 100;
/// Bearish pattern signal.
pub const PATTERN_BEARISH: i32 = -100;
/// Confirmed bullish signal (Hikkake family).
pub const PATTERN_BULLISH_CONFIRMED: i32 = 200;
/// Confirmed bearish signal (Hikkake family).
pub const PATTERN_BEARISH_CONFIRMED: i32 = -200;
/// No pattern.
pub const PATTERN_NONE: i32 = 0;

/// Bars used for body/range averaging and trend detection.
pub const AVG_PERIOD: usize = 10;

/// Sensitivity thresholds for pattern components.
///
/// Fractions are of the average range unless stated otherwise.
#[derive(Debug, Clone, Copy)]
pub struct CandleSettings {
    /// Doji body threshold (fraction of range).
    pub body_doji: f64,
    /// Long body threshold (multiple of average body).
    pub body_long: f64,
    /// Very long body threshold (multiple of average body).
    pub body_very_long: f64,
    /// Short body threshold (multiple of average body).
    pub body_short: f64,
    /// Long shadow threshold (multiple of the candle's own body).
    pub shadow_long: f64,
    /// Very long shadow threshold (multiple of the candle's own body).
    pub shadow_very_long: f64,
    /// Very short shadow threshold (fraction of range).
    pub shadow_very_short: f64,
    /// "Near" price tolerance (fraction of range).
    pub near: f64,
    /// "Equal" price tolerance (fraction of range).
    pub equal: f64,
    /// "Far" distance threshold (fraction of range).
    pub far: f64,
}

impl Default for CandleSettings {
    fn default() -> Self {
        Self {
            body_doji: 0.1,
            body_long: 1.0,
            body_very_long: 3.0,
            body_short: 1.0,
            shadow_long: 1.0,
            shadow_very_long: 2.0,
            shadow_very_short: 0.1,
            near: 0.2,
            equal: 0.05,
            far: 0.6,
        }
    }
}

/// Absolute difference between open and close.
#[inline]
pub fn real_body<T: SeriesElement>(open: T, close: T) -> T {
    (close - open).abs()
}

/// Wick above the body.
#[inline]
pub fn upper_shadow<T: SeriesElement>(open: T, high: T, close: T) -> T {
    high - open.max(close)
}

/// Wick below the body.
#[inline]
pub fn lower_shadow<T: SeriesElement>(open: T, low: T, close: T) -> T {
    open.min(close) - low
}

/// High-low span of the bar.
#[inline]
pub fn candle_range<T: SeriesElement>(high: T, low: T) -> T {
    high - low
}

/// Close above open.
#[inline]
pub fn is_white<T: SeriesElement>(open: T, close: T) -> bool {
    close > open
}

/// Close below open.
#[inline]
pub fn is_black<T: SeriesElement>(open: T, close: T) -> bool {
    close < open
}

/// Higher of open/close.
#[inline]
pub fn body_top<T: SeriesElement>(open: T, close: T) -> T {
    open.max(close)
}

/// Lower of open/close.
#[inline]
pub fn body_bottom<T: SeriesElement>(open: T, close: T) -> T {
    open.min(close)
}

/// Midpoint of the body.
#[inline]
pub fn body_midpoint<T: SeriesElement>(open: T, close: T) -> T {
    (open + close) / T::two()
}

/// Full-range gap up between consecutive bars.
#[inline]
pub fn gap_up<T: SeriesElement>(prev_high: T, curr_low: T) -> bool {
    curr_low > prev_high
}

/// Full-range gap down between consecutive bars.
#[inline]
pub fn gap_down<T: SeriesElement>(prev_low: T, curr_high: T) -> bool {
    curr_high < prev_low
}

/// Gap up between bodies (wicks may overlap).
#[inline]
pub fn body_gap_up<T: SeriesElement>(
    prev_open: T,
    prev_close: T,
    curr_open: T,
    curr_close: T,
) -> bool {
    body_bottom(curr_open, curr_close) > body_top(prev_open, prev_close)
}

/// Gap down between bodies (wicks may overlap).
#[inline]
pub fn body_gap_down<T: SeriesElement>(
    prev_open: T,
    prev_close: T,
    curr_open: T,
    curr_close: T,
) -> bool {
    body_top(curr_open, curr_close) < body_bottom(prev_open, prev_close)
}

/// Average real body over up to [`AVG_PERIOD`] bars ending at `idx`,
/// clamped to the bars available.
pub fn average_body<T: SeriesElement>(open: &[T], close: &[T], idx: usize) -> T {
    let bars = AVG_PERIOD.min(idx + 1);
    let start = idx + 1 - bars;
    let mut sum = T::zero();
    for i in start..=idx {
        sum = sum + real_body(open[i], close[i]);
    }
    sum / T::from_usize(bars).unwrap_or_else(|_| T::one())
}

/// Average high-low range over up to [`AVG_PERIOD`] bars ending at `idx`,
/// clamped to the bars available.
pub fn average_range<T: SeriesElement>(high: &[T], low: &[T], idx: usize) -> T {
    let bars = AVG_PERIOD.min(idx + 1);
    let start = idx + 1 - bars;
    let mut sum = T::zero();
    for i in start..=idx {
        sum = sum + candle_range(high[i], low[i]);
    }
    sum / T::from_usize(bars).unwrap_or_else(|_| T::one())
}

/// Tolerance in price units for "near" comparisons at `idx`.
#[inline]
pub fn near_tolerance<T: SeriesElement>(high: &[T], low: &[T], idx: usize, s: &CandleSettings) -> T {
    average_range(high, low, idx) * T::constant(s.near)
}

/// Tolerance in price units for "equal" comparisons at `idx`.
#[inline]
pub fn equal_tolerance<T: SeriesElement>(
    high: &[T],
    low: &[T],
    idx: usize,
    s: &CandleSettings,
) -> T {
    average_range(high, low, idx) * T::constant(s.equal)
}

/// Doji test: body within the doji fraction of the bar's own range. A
/// zero-range bar qualifies (its body is necessarily zero too).
#[inline]
pub fn is_doji<T: SeriesElement>(open: T, high: T, low: T, close: T, s: &CandleSettings) -> bool {
    let body = real_body(open, close);
    let range = candle_range(high, low);
    if range <= T::zero() {
        return body <= T::zero();
    }
    body <= range * T::constant(s.body_doji)
}

/// Long-body test against the trailing average body.
#[inline]
pub fn is_long_body<T: SeriesElement>(
    open: &[T],
    close: &[T],
    idx: usize,
    s: &CandleSettings,
) -> bool {
    let avg = average_body(open, close, idx.saturating_sub(1));
    let body = real_body(open[idx], close[idx]);
    if avg <= T::zero() {
        return body > T::zero();
    }
    body > avg * T::constant(s.body_long)
}

/// Short-body test against the trailing average body.
#[inline]
pub fn is_short_body<T: SeriesElement>(
    open: &[T],
    close: &[T],
    idx: usize,
    s: &CandleSettings,
) -> bool {
    let avg = average_body(open, close, idx.saturating_sub(1));
    real_body(open[idx], close[idx]) <= avg * T::constant(s.body_short)
}

/// Very-short-shadow test against the bar's range.
#[inline]
pub fn is_very_short_shadow<T: SeriesElement>(shadow: T, range: T, s: &CandleSettings) -> bool {
    if range <= T::zero() {
        return true;
    }
    shadow < range * T::constant(s.shadow_very_short)
}

/// Long-shadow test against the bar's own body.
#[inline]
pub fn is_long_shadow<T: SeriesElement>(shadow: T, body: T, s: &CandleSettings) -> bool {
    shadow > body * T::constant(s.shadow_long) && shadow > T::zero()
}

/// Very-long-shadow test against the bar's own body.
#[inline]
pub fn is_very_long_shadow<T: SeriesElement>(shadow: T, body: T, s: &CandleSettings) -> bool {
    shadow > body * T::constant(s.shadow_very_long) && shadow > T::zero()
}

/// Near-equality within the settings' equal tolerance.
#[inline]
pub fn is_equal_price<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    (a - b).abs() <= tolerance
}

/// Close-vs-SMA uptrend test over up to [`AVG_PERIOD`] bars before `idx`,
/// clamped to the bars available. False when no prior bar exists.
pub fn in_uptrend<T: SeriesElement>(close: &[T], idx: usize) -> bool {
    if idx == 0 {
        return false;
    }
    let bars = AVG_PERIOD.min(idx);
    let start = idx - bars;
    let mut sum = T::zero();
    for i in start..idx {
        sum = sum + close[i];
    }
    let sma = sum / T::from_usize(bars).unwrap_or_else(|_| T::one());
    close[idx] > sma
}

/// Close-vs-SMA downtrend test over up to [`AVG_PERIOD`] bars before
/// `idx`, clamped to the bars available. False when no prior bar exists.
pub fn in_downtrend<T: SeriesElement>(close: &[T], idx: usize) -> bool {
    if idx == 0 {
        return false;
    }
    let bars = AVG_PERIOD.min(idx);
    let start = idx - bars;
    let mut sum = T::zero();
    for i in start..idx {
        sum = sum + close[i];
    }
    let sma = sum / T::from_usize(bars).unwrap_or_else(|_| T::one());
    close[idx] < sma
}
