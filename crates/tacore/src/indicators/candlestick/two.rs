//! Two-bar candlestick patterns. Lookback is 1 for all of them.

use super::core::{
    body_bottom, body_gap_down, body_gap_up, body_midpoint, body_top, candle_range,
    equal_tolerance, in_downtrend, in_uptrend, is_black, is_doji, is_equal_price, is_long_body,
    is_short_body, is_very_short_shadow, is_white, lower_shadow, real_body, upper_shadow,
    CandleSettings, PATTERN_BEARISH, PATTERN_BULLISH, PATTERN_NONE,
};
use super::{scan, validate_penetration};
use crate::error::Result;
use crate::traits::SeriesElement;

/// Lookback of every two-bar pattern: 1.
#[inline]
#[must_use]
pub const fn cdl_two_lookback() -> usize {
    1
}

/// Default penetration for Dark Cloud Cover.
pub const DEFAULT_DARK_CLOUD_PENETRATION: f64 = 0.5;

/// Engulfing: the current body wraps the previous body with the opposite
/// color. Sign follows the engulfing candle.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_engulfing<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    scan(open, high, low, close, 2, |i| {
        let p = i - 1;
        let engulfs = body_top(open[i], close[i]) > body_top(open[p], close[p])
            && body_bottom(open[i], close[i]) < body_bottom(open[p], close[p]);
        if !engulfs {
            return PATTERN_NONE;
        }
        if is_white(open[i], close[i]) && is_black(open[p], close[p]) {
            PATTERN_BULLISH
        } else if is_black(open[i], close[i]) && is_white(open[p], close[p]) {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Harami: a small body held entirely inside the previous long body. Sign
/// follows the inside candle.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_harami<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 2, |i| {
        let p = i - 1;
        let inside = body_top(open[i], close[i]) < body_top(open[p], close[p])
            && body_bottom(open[i], close[i]) > body_bottom(open[p], close[p]);
        if is_long_body(open, close, p, &s) && is_short_body(open, close, i, &s) && inside {
            if is_black(open[p], close[p]) {
                PATTERN_BULLISH
            } else {
                PATTERN_BEARISH
            }
        } else {
            PATTERN_NONE
        }
    })
}

/// Harami Cross: a harami whose inside candle is a doji. Stronger than the
/// plain harami; sign opposes the first candle.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_harami_cross<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 2, |i| {
        let p = i - 1;
        let inside = high[i] < body_top(open[p], close[p])
            && low[i] > body_bottom(open[p], close[p]);
        if is_long_body(open, close, p, &s)
            && is_doji(open[i], high[i], low[i], close[i], &s)
            && inside
        {
            if is_black(open[p], close[p]) {
                PATTERN_BULLISH
            } else {
                PATTERN_BEARISH
            }
        } else {
            PATTERN_NONE
        }
    })
}

/// Dark Cloud Cover with the default 0.5 penetration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_dark_cloud_cover<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    cdl_dark_cloud_cover_with(open, high, low, close, T::constant(DEFAULT_DARK_CLOUD_PENETRATION))
}

/// Dark Cloud Cover: after an advance, a black candle opens above the
/// prior white high and closes at least `penetration` of the way down its
/// body without engulfing it.
///
/// # Errors
///
/// Returns `Error::EmptyInput`, `Error::LengthMismatch`, or
/// `Error::InvalidParameter` for a penetration outside [0, 1].
pub fn cdl_dark_cloud_cover_with<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    penetration: T,
) -> Result<Vec<i32>> {
    validate_penetration(penetration)?;
    let s = CandleSettings::default();
    scan(open, high, low, close, 2, |i| {
        let p = i - 1;
        if is_long_body(open, close, p, &s)
            && is_white(open[p], close[p])
            && is_black(open[i], close[i])
            && open[i] > high[p]
            && close[i] < close[p] - real_body(open[p], close[p]) * penetration
            && close[i] > open[p]
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Piercing: after a decline, a white candle opens below the prior black
/// low and closes above the midpoint of its body without engulfing it.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_piercing<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 2, |i| {
        let p = i - 1;
        if is_long_body(open, close, p, &s)
            && is_black(open[p], close[p])
            && is_white(open[i], close[i])
            && open[i] < low[p]
            && close[i] > body_midpoint(open[p], close[p])
            && close[i] < open[p]
        {
            PATTERN_BULLISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Doji Star: a doji gapping away from the previous long body in the
/// direction of the trend. Sign warns against that trend.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_doji_star<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 2, |i| {
        let p = i - 1;
        if !is_long_body(open, close, p, &s) || !is_doji(open[i], high[i], low[i], close[i], &s) {
            return PATTERN_NONE;
        }
        if is_white(open[p], close[p]) && body_gap_up(open[p], close[p], open[i], close[i]) {
            PATTERN_BEARISH
        } else if is_black(open[p], close[p])
            && body_gap_down(open[p], close[p], open[i], close[i])
        {
            PATTERN_BULLISH
        } else {
            PATTERN_NONE
        }
    })
}

fn kicking_signal<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    i: usize,
    by_length: bool,
    s: &CandleSettings,
) -> i32 {
    let p = i - 1;
    let marubozu = |j: usize| {
        let range = candle_range(high[j], low[j]);
        is_long_body(open, close, j, s)
            && is_very_short_shadow(upper_shadow(open[j], high[j], close[j]), range, s)
            && is_very_short_shadow(lower_shadow(open[j], low[j], close[j]), range, s)
    };
    if !(marubozu(p) && marubozu(i)) {
        return PATTERN_NONE;
    }
    let up = is_black(open[p], close[p])
        && is_white(open[i], close[i])
        && body_gap_up(open[p], close[p], open[i], close[i]);
    let down = is_white(open[p], close[p])
        && is_black(open[i], close[i])
        && body_gap_down(open[p], close[p], open[i], close[i]);
    if !(up || down) {
        return PATTERN_NONE;
    }
    let sign_bar = if by_length {
        if real_body(open[p], close[p]) > real_body(open[i], close[i]) {
            p
        } else {
            i
        }
    } else {
        i
    };
    if is_white(open[sign_bar], close[sign_bar]) {
        PATTERN_BULLISH
    } else {
        PATTERN_BEARISH
    }
}

/// Kicking: two opposite-color marubozu separated by a body gap. Sign
/// follows the second candle.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_kicking<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 2, |i| {
        kicking_signal(open, high, low, close, i, false, &s)
    })
}

/// Kicking (by length): as [`cdl_kicking`], but the longer marubozu
/// dictates the sign.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_kicking_by_length<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 2, |i| {
        kicking_signal(open, high, low, close, i, true, &s)
    })
}

/// Matching Low: two black candles closing at the same level, proposing a
/// support.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_matching_low<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 2, |i| {
        let p = i - 1;
        let tol = equal_tolerance(high, low, p, &s);
        if is_black(open[p], close[p])
            && is_black(open[i], close[i])
            && is_equal_price(close[i], close[p], tol)
        {
            PATTERN_BULLISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Counterattack: opposite-color long candles with equal closes. Sign
/// follows the second candle.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_counterattack<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 2, |i| {
        let p = i - 1;
        let tol = equal_tolerance(high, low, p, &s);
        let opposite = (is_white(open[p], close[p]) && is_black(open[i], close[i]))
            || (is_black(open[p], close[p]) && is_white(open[i], close[i]));
        if is_long_body(open, close, p, &s)
            && is_long_body(open, close, i, &s)
            && opposite
            && is_equal_price(close[i], close[p], tol)
        {
            if is_white(open[i], close[i]) {
                PATTERN_BULLISH
            } else {
                PATTERN_BEARISH
            }
        } else {
            PATTERN_NONE
        }
    })
}

/// Separating Lines: opposite-color candles sharing the same open, the
/// second resuming the prevailing trend.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_separating_lines<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 2, |i| {
        let p = i - 1;
        let tol = equal_tolerance(high, low, p, &s);
        if !is_equal_price(open[i], open[p], tol) || !is_long_body(open, close, i, &s) {
            return PATTERN_NONE;
        }
        if in_uptrend(close, i)
            && is_black(open[p], close[p])
            && is_white(open[i], close[i])
            && is_very_short_shadow(
                lower_shadow(open[i], low[i], close[i]),
                candle_range(high[i], low[i]),
                &s,
            )
        {
            PATTERN_BULLISH
        } else if in_downtrend(close, i)
            && is_white(open[p], close[p])
            && is_black(open[i], close[i])
            && is_very_short_shadow(
                upper_shadow(open[i], high[i], close[i]),
                candle_range(high[i], low[i]),
                &s,
            )
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// On-Neck: in a decline, a white candle closes right at the prior black
/// candle's low. Continuation, bearish.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_on_neck<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 2, |i| {
        let p = i - 1;
        let tol = equal_tolerance(high, low, p, &s);
        if is_long_body(open, close, p, &s)
            && is_black(open[p], close[p])
            && is_white(open[i], close[i])
            && open[i] < low[p]
            && is_equal_price(close[i], low[p], tol)
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// In-Neck: in a decline, a white candle closes barely inside the prior
/// black body. Continuation, bearish.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_in_neck<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 2, |i| {
        let p = i - 1;
        let tol = equal_tolerance(high, low, p, &s);
        if is_long_body(open, close, p, &s)
            && is_black(open[p], close[p])
            && is_white(open[i], close[i])
            && open[i] < low[p]
            && close[i] >= close[p]
            && close[i] <= close[p] + tol
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Thrusting: in a decline, a white candle closes into the prior black
/// body but short of its midpoint. Continuation, bearish.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_thrusting<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 2, |i| {
        let p = i - 1;
        let tol = equal_tolerance(high, low, p, &s);
        if is_long_body(open, close, p, &s)
            && is_black(open[p], close[p])
            && is_white(open[i], close[i])
            && open[i] < low[p]
            && close[i] > close[p] + tol
            && close[i] <= body_midpoint(open[p], close[p])
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Homing Pigeon: in a decline, a small black body inside the prior long
/// black body. Reversal, bullish.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_homing_pigeon<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 2, |i| {
        let p = i - 1;
        if in_downtrend(close, p)
            && is_long_body(open, close, p, &s)
            && is_black(open[p], close[p])
            && is_black(open[i], close[i])
            && is_short_body(open, close, i, &s)
            && open[i] < open[p]
            && close[i] > close[p]
        {
            PATTERN_BULLISH
        } else {
            PATTERN_NONE
        }
    })
}
