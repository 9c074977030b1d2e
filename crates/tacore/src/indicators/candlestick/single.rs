//! Single-bar candlestick patterns.
//!
//! Shape classifiers over one candle, several of which also consult the
//! prevailing trend (hammer vs hanging man are the same shape on opposite
//! trends). Lookback is 0 for all of them.

use super::core::{
    body_midpoint, candle_range, in_downtrend, in_uptrend, is_black, is_doji, is_long_body,
    is_long_shadow, is_short_body, is_very_long_shadow, is_very_short_shadow, is_white,
    lower_shadow, real_body, upper_shadow, CandleSettings, PATTERN_BEARISH, PATTERN_BULLISH,
    PATTERN_NONE,
};
use super::scan;
use crate::error::Result;
use crate::traits::SeriesElement;

/// Lookback of every single-bar pattern: 0.
#[inline]
#[must_use]
pub const fn cdl_single_lookback() -> usize {
    0
}

#[inline]
fn color_signal<T: SeriesElement>(open: T, close: T) -> i32 {
    if is_white(open, close) {
        PATTERN_BULLISH
    } else if is_black(open, close) {
        PATTERN_BEARISH
    } else {
        PATTERN_NONE
    }
}

/// Doji: the body is negligible relative to the bar's range.
///
/// Returns +100 for every doji regardless of trend; a degenerate
/// zero-range bar (open = high = low = close) qualifies.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_doji<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 1, |i| {
        if is_doji(open[i], high[i], low[i], close[i], &s) {
            PATTERN_BULLISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Dragonfly Doji: doji with a long lower shadow and almost no upper
/// shadow.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_dragonfly_doji<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 1, |i| {
        let range = candle_range(high[i], low[i]);
        let body = real_body(open[i], close[i]);
        if is_doji(open[i], high[i], low[i], close[i], &s)
            && is_long_shadow(lower_shadow(open[i], low[i], close[i]), body, &s)
            && is_very_short_shadow(upper_shadow(open[i], high[i], close[i]), range, &s)
        {
            PATTERN_BULLISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Gravestone Doji: doji with a long upper shadow and almost no lower
/// shadow.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_gravestone_doji<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 1, |i| {
        let range = candle_range(high[i], low[i]);
        let body = real_body(open[i], close[i]);
        if is_doji(open[i], high[i], low[i], close[i], &s)
            && is_long_shadow(upper_shadow(open[i], high[i], close[i]), body, &s)
            && is_very_short_shadow(lower_shadow(open[i], low[i], close[i]), range, &s)
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Long-Legged Doji: doji with at least one long shadow on each side.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_long_legged_doji<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 1, |i| {
        let body = real_body(open[i], close[i]);
        if is_doji(open[i], high[i], low[i], close[i], &s)
            && is_long_shadow(upper_shadow(open[i], high[i], close[i]), body, &s)
            && is_long_shadow(lower_shadow(open[i], low[i], close[i]), body, &s)
        {
            PATTERN_BULLISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Rickshaw Man: long-legged doji whose body sits near the middle of the
/// range.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_rickshaw_man<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 1, |i| {
        let body = real_body(open[i], close[i]);
        let range = candle_range(high[i], low[i]);
        let mid = (high[i] + low[i]) / T::two();
        let centered =
            (body_midpoint(open[i], close[i]) - mid).abs() <= range * T::constant(s.near);
        if is_doji(open[i], high[i], low[i], close[i], &s)
            && is_long_shadow(upper_shadow(open[i], high[i], close[i]), body, &s)
            && is_long_shadow(lower_shadow(open[i], low[i], close[i]), body, &s)
            && centered
        {
            PATTERN_BULLISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Spinning Top: small body with shadows longer than the body on both
/// sides. Sign follows the candle color.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_spinning_top<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 1, |i| {
        let body = real_body(open[i], close[i]);
        if is_short_body(open, close, i, &s)
            && body > T::zero()
            && upper_shadow(open[i], high[i], close[i]) > body
            && lower_shadow(open[i], low[i], close[i]) > body
        {
            color_signal(open[i], close[i])
        } else {
            PATTERN_NONE
        }
    })
}

/// Marubozu: long body with essentially no shadow on either side.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_marubozu<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 1, |i| {
        let range = candle_range(high[i], low[i]);
        if is_long_body(open, close, i, &s)
            && is_very_short_shadow(upper_shadow(open[i], high[i], close[i]), range, &s)
            && is_very_short_shadow(lower_shadow(open[i], low[i], close[i]), range, &s)
        {
            color_signal(open[i], close[i])
        } else {
            PATTERN_NONE
        }
    })
}

/// Closing Marubozu: long body with no shadow on the closing side.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_closing_marubozu<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 1, |i| {
        let range = candle_range(high[i], low[i]);
        if !is_long_body(open, close, i, &s) {
            return PATTERN_NONE;
        }
        if is_white(open[i], close[i])
            && is_very_short_shadow(upper_shadow(open[i], high[i], close[i]), range, &s)
        {
            PATTERN_BULLISH
        } else if is_black(open[i], close[i])
            && is_very_short_shadow(lower_shadow(open[i], low[i], close[i]), range, &s)
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Long Line Candle: long body with shadows shorter than the body.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_long_line<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 1, |i| {
        let body = real_body(open[i], close[i]);
        if is_long_body(open, close, i, &s)
            && upper_shadow(open[i], high[i], close[i]) < body
            && lower_shadow(open[i], low[i], close[i]) < body
        {
            color_signal(open[i], close[i])
        } else {
            PATTERN_NONE
        }
    })
}

/// Short Line Candle: short body with short shadows.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_short_line<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 1, |i| {
        let range = candle_range(high[i], low[i]);
        let tolerance = range * T::constant(s.near);
        if is_short_body(open, close, i, &s)
            && real_body(open[i], close[i]) > T::zero()
            && upper_shadow(open[i], high[i], close[i]) <= tolerance
            && lower_shadow(open[i], low[i], close[i]) <= tolerance
        {
            color_signal(open[i], close[i])
        } else {
            PATTERN_NONE
        }
    })
}

/// Belt-hold: a long candle opening on its extreme against the trend
/// (white opening at the low in a downtrend, black opening at the high in
/// an uptrend).
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_belt_hold<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 1, |i| {
        let range = candle_range(high[i], low[i]);
        if !is_long_body(open, close, i, &s) {
            return PATTERN_NONE;
        }
        if is_white(open[i], close[i])
            && in_downtrend(close, i)
            && is_very_short_shadow(lower_shadow(open[i], low[i], close[i]), range, &s)
        {
            PATTERN_BULLISH
        } else if is_black(open[i], close[i])
            && in_uptrend(close, i)
            && is_very_short_shadow(upper_shadow(open[i], high[i], close[i]), range, &s)
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

#[inline]
fn hammer_shape<T: SeriesElement>(
    open: T,
    high: T,
    low: T,
    close: T,
    s: &CandleSettings,
) -> bool {
    let body = real_body(open, close);
    let range = candle_range(high, low);
    body > T::zero()
        && is_very_long_shadow(lower_shadow(open, low, close), body, s)
        && is_very_short_shadow(upper_shadow(open, high, close), range, s)
}

#[inline]
fn inverted_hammer_shape<T: SeriesElement>(
    open: T,
    high: T,
    low: T,
    close: T,
    s: &CandleSettings,
) -> bool {
    let body = real_body(open, close);
    let range = candle_range(high, low);
    body > T::zero()
        && is_very_long_shadow(upper_shadow(open, high, close), body, s)
        && is_very_short_shadow(lower_shadow(open, low, close), range, s)
}

/// Hammer: small body at the top of a long lower shadow, after a decline.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_hammer<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 1, |i| {
        if in_downtrend(close, i)
            && is_short_body(open, close, i, &s)
            && hammer_shape(open[i], high[i], low[i], close[i], &s)
        {
            PATTERN_BULLISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Hanging Man: the hammer shape printed after an advance.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_hanging_man<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 1, |i| {
        if in_uptrend(close, i)
            && is_short_body(open, close, i, &s)
            && hammer_shape(open[i], high[i], low[i], close[i], &s)
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Inverted Hammer: small body at the bottom of a long upper shadow,
/// after a decline.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_inverted_hammer<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 1, |i| {
        if in_downtrend(close, i)
            && is_short_body(open, close, i, &s)
            && inverted_hammer_shape(open[i], high[i], low[i], close[i], &s)
        {
            PATTERN_BULLISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Shooting Star: the inverted-hammer shape printed after an advance.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_shooting_star<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 1, |i| {
        if in_uptrend(close, i)
            && is_short_body(open, close, i, &s)
            && inverted_hammer_shape(open[i], high[i], low[i], close[i], &s)
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Takuri: a dragonfly doji with an exceptionally long lower shadow,
/// after a decline.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_takuri<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 1, |i| {
        let range = candle_range(high[i], low[i]);
        let lower = lower_shadow(open[i], low[i], close[i]);
        if in_downtrend(close, i)
            && is_doji(open[i], high[i], low[i], close[i], &s)
            && is_very_short_shadow(upper_shadow(open[i], high[i], close[i]), range, &s)
            && range > T::zero()
            && lower > range * T::constant(s.far)
        {
            PATTERN_BULLISH
        } else {
            PATTERN_NONE
        }
    })
}

/// High-Wave Candle: small body with very long shadows on both sides.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_high_wave<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 1, |i| {
        let body = real_body(open[i], close[i]);
        if is_short_body(open, close, i, &s)
            && body > T::zero()
            && is_very_long_shadow(upper_shadow(open[i], high[i], close[i]), body, &s)
            && is_very_long_shadow(lower_shadow(open[i], low[i], close[i]), body, &s)
        {
            color_signal(open[i], close[i])
        } else {
            PATTERN_NONE
        }
    })
}
