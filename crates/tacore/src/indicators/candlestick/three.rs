//! Three-bar candlestick patterns. Lookback is 2 for all of them.
//!
//! Bars are referred to as `a` (oldest), `b`, `c` (current) below.

use super::core::{
    body_bottom, body_gap_down, body_gap_up, body_top, equal_tolerance, gap_down, gap_up,
    is_black, is_doji, is_equal_price, is_long_body, is_long_shadow, is_short_body, is_white,
    lower_shadow, near_tolerance, real_body, upper_shadow, CandleSettings, PATTERN_BEARISH,
    PATTERN_BULLISH, PATTERN_NONE,
};
use super::{scan, validate_penetration};
use crate::error::Result;
use crate::traits::SeriesElement;

/// Lookback of every three-bar pattern: 2.
#[inline]
#[must_use]
pub const fn cdl_three_lookback() -> usize {
    2
}

/// Default penetration for the star reversals.
pub const DEFAULT_STAR_PENETRATION: f64 = 0.3;

fn star_signal<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    i: usize,
    penetration: T,
    require_doji: bool,
    s: &CandleSettings,
) -> i32 {
    let (a, b, c) = (i - 2, i - 1, i);
    if !is_long_body(open, close, a, s) {
        return PATTERN_NONE;
    }
    let star_small = if require_doji {
        is_doji(open[b], high[b], low[b], close[b], s)
    } else {
        is_short_body(open, close, b, s)
    };
    if !star_small {
        return PATTERN_NONE;
    }

    // Morning: black, star gapping below, white recovery
    if is_black(open[a], close[a])
        && body_gap_down(open[a], close[a], open[b], close[b])
        && is_white(open[c], close[c])
        && close[c] > close[a] + real_body(open[a], close[a]) * penetration
    {
        return PATTERN_BULLISH;
    }
    // Evening: white, star gapping above, black sell-off
    if is_white(open[a], close[a])
        && body_gap_up(open[a], close[a], open[b], close[b])
        && is_black(open[c], close[c])
        && close[c] < close[a] - real_body(open[a], close[a]) * penetration
    {
        return PATTERN_BEARISH;
    }
    PATTERN_NONE
}

/// Morning Star with the default 0.3 penetration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_morning_star<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    cdl_morning_star_with(open, high, low, close, T::constant(DEFAULT_STAR_PENETRATION))
}

/// Morning Star: a long black candle, a small body gapping below it, and
/// a white candle closing at least `penetration` back into the black body.
///
/// # Errors
///
/// Returns `Error::EmptyInput`, `Error::LengthMismatch`, or
/// `Error::InvalidParameter` for a penetration outside [0, 1].
pub fn cdl_morning_star_with<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    penetration: T,
) -> Result<Vec<i32>> {
    validate_penetration(penetration)?;
    let s = CandleSettings::default();
    scan(open, high, low, close, 3, |i| {
        let sig = star_signal(open, high, low, close, i, penetration, false, &s);
        if sig == PATTERN_BULLISH {
            sig
        } else {
            PATTERN_NONE
        }
    })
}

/// Evening Star with the default 0.3 penetration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_evening_star<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    cdl_evening_star_with(open, high, low, close, T::constant(DEFAULT_STAR_PENETRATION))
}

/// Evening Star: the bearish mirror of the morning star.
///
/// # Errors
///
/// Returns `Error::EmptyInput`, `Error::LengthMismatch`, or
/// `Error::InvalidParameter` for a penetration outside [0, 1].
pub fn cdl_evening_star_with<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    penetration: T,
) -> Result<Vec<i32>> {
    validate_penetration(penetration)?;
    let s = CandleSettings::default();
    scan(open, high, low, close, 3, |i| {
        let sig = star_signal(open, high, low, close, i, penetration, false, &s);
        if sig == PATTERN_BEARISH {
            sig
        } else {
            PATTERN_NONE
        }
    })
}

/// Morning Doji Star: a morning star whose middle candle is a doji.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_morning_doji_star<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    let penetration = T::constant(DEFAULT_STAR_PENETRATION);
    scan(open, high, low, close, 3, |i| {
        let sig = star_signal(open, high, low, close, i, penetration, true, &s);
        if sig == PATTERN_BULLISH {
            sig
        } else {
            PATTERN_NONE
        }
    })
}

/// Evening Doji Star: an evening star whose middle candle is a doji.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_evening_doji_star<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    let penetration = T::constant(DEFAULT_STAR_PENETRATION);
    scan(open, high, low, close, 3, |i| {
        let sig = star_signal(open, high, low, close, i, penetration, true, &s);
        if sig == PATTERN_BEARISH {
            sig
        } else {
            PATTERN_NONE
        }
    })
}

/// Abandoned Baby with the default 0.3 penetration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_abandoned_baby<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    cdl_abandoned_baby_with(open, high, low, close, T::constant(DEFAULT_STAR_PENETRATION))
}

/// Abandoned Baby: a doji star isolated by full-range gaps on both sides,
/// with the third candle closing `penetration` back into the first body.
///
/// # Errors
///
/// Returns `Error::EmptyInput`, `Error::LengthMismatch`, or
/// `Error::InvalidParameter` for a penetration outside [0, 1].
pub fn cdl_abandoned_baby_with<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    penetration: T,
) -> Result<Vec<i32>> {
    validate_penetration(penetration)?;
    let s = CandleSettings::default();
    scan(open, high, low, close, 3, |i| {
        let (a, b, c) = (i - 2, i - 1, i);
        if !is_long_body(open, close, a, &s) || !is_doji(open[b], high[b], low[b], close[b], &s) {
            return PATTERN_NONE;
        }
        if is_black(open[a], close[a])
            && gap_down(low[a], high[b])
            && gap_up(high[b], low[c])
            && is_white(open[c], close[c])
            && close[c] > close[a] + real_body(open[a], close[a]) * penetration
        {
            PATTERN_BULLISH
        } else if is_white(open[a], close[a])
            && gap_up(high[a], low[b])
            && gap_down(low[b], high[c])
            && is_black(open[c], close[c])
            && close[c] < close[a] - real_body(open[a], close[a]) * penetration
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Three Advancing White Soldiers: three long white candles, each opening
/// within the prior body and closing at a new high with a small upper
/// shadow.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_three_white_soldiers<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 3, |i| {
        let (a, b, c) = (i - 2, i - 1, i);
        let step_ok = |prev: usize, curr: usize| {
            is_white(open[curr], close[curr])
                && open[curr] > open[prev]
                && open[curr] < close[prev]
                && close[curr] > close[prev]
                && upper_shadow(open[curr], high[curr], close[curr])
                    <= near_tolerance(high, low, curr, &s)
        };
        if is_white(open[a], close[a])
            && is_long_body(open, close, b, &s)
            && is_long_body(open, close, c, &s)
            && step_ok(a, b)
            && step_ok(b, c)
        {
            PATTERN_BULLISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Three Black Crows: three long black candles stair-stepping down, each
/// opening within the prior body and closing near its low.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_three_black_crows<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 3, |i| {
        let (a, b, c) = (i - 2, i - 1, i);
        let step_ok = |prev: usize, curr: usize| {
            is_black(open[curr], close[curr])
                && open[curr] < open[prev]
                && open[curr] > close[prev]
                && close[curr] < close[prev]
                && lower_shadow(open[curr], low[curr], close[curr])
                    <= near_tolerance(high, low, curr, &s)
        };
        if is_black(open[a], close[a])
            && is_long_body(open, close, b, &s)
            && is_long_body(open, close, c, &s)
            && step_ok(a, b)
            && step_ok(b, c)
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Identical Three Crows: three black candles, each opening at the prior
/// close.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_identical_three_crows<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 3, |i| {
        let (a, b, c) = (i - 2, i - 1, i);
        let opens_at_prior_close = |prev: usize, curr: usize| {
            is_equal_price(open[curr], close[prev], equal_tolerance(high, low, prev, &s))
        };
        if is_black(open[a], close[a])
            && is_black(open[b], close[b])
            && is_black(open[c], close[c])
            && close[b] < close[a]
            && close[c] < close[b]
            && opens_at_prior_close(a, b)
            && opens_at_prior_close(b, c)
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Two Crows: after a long white candle, a gapped-up black candle and a
/// second black candle closing back inside the white body.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_two_crows<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 3, |i| {
        let (a, b, c) = (i - 2, i - 1, i);
        if is_long_body(open, close, a, &s)
            && is_white(open[a], close[a])
            && is_black(open[b], close[b])
            && body_gap_up(open[a], close[a], open[b], close[b])
            && is_black(open[c], close[c])
            && open[c] > close[b]
            && open[c] < open[b]
            && close[c] < close[a]
            && close[c] > open[a]
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Three Inside Up/Down: a harami followed by a close beyond the first
/// body.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_three_inside<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 3, |i| {
        let (a, b, c) = (i - 2, i - 1, i);
        let inside = body_top(open[b], close[b]) < body_top(open[a], close[a])
            && body_bottom(open[b], close[b]) > body_bottom(open[a], close[a]);
        if !is_long_body(open, close, a, &s) || !inside || !is_short_body(open, close, b, &s) {
            return PATTERN_NONE;
        }
        if is_black(open[a], close[a]) && is_white(open[c], close[c]) && close[c] > open[a] {
            PATTERN_BULLISH
        } else if is_white(open[a], close[a]) && is_black(open[c], close[c]) && close[c] < open[a] {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Three Outside Up/Down: an engulfing followed by a confirming close.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_three_outside<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    scan(open, high, low, close, 3, |i| {
        let (a, b, c) = (i - 2, i - 1, i);
        let engulfs = body_top(open[b], close[b]) > body_top(open[a], close[a])
            && body_bottom(open[b], close[b]) < body_bottom(open[a], close[a]);
        if !engulfs {
            return PATTERN_NONE;
        }
        if is_black(open[a], close[a])
            && is_white(open[b], close[b])
            && is_white(open[c], close[c])
            && close[c] > close[b]
        {
            PATTERN_BULLISH
        } else if is_white(open[a], close[a])
            && is_black(open[b], close[b])
            && is_black(open[c], close[c])
            && close[c] < close[b]
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Three Stars in the South: three black candles with shrinking bodies
/// and rising lows after a long-lower-shadow first bar.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_three_stars_in_south<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 3, |i| {
        let (a, b, c) = (i - 2, i - 1, i);
        if is_black(open[a], close[a])
            && is_black(open[b], close[b])
            && is_black(open[c], close[c])
            && is_long_body(open, close, a, &s)
            && is_long_shadow(
                lower_shadow(open[a], low[a], close[a]),
                real_body(open[a], close[a]),
                &s,
            )
            && real_body(open[b], close[b]) < real_body(open[a], close[a])
            && real_body(open[c], close[c]) < real_body(open[b], close[b])
            && low[b] >= low[a]
            && low[c] >= low[b]
        {
            PATTERN_BULLISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Advance Block: three white candles making new highs on weakening
/// bodies and lengthening upper shadows.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_advance_block<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 3, |i| {
        let (a, b, c) = (i - 2, i - 1, i);
        let advancing = |prev: usize, curr: usize| {
            is_white(open[curr], close[curr])
                && open[curr] > open[prev]
                && open[curr] < close[prev]
                && close[curr] > close[prev]
        };
        if is_white(open[a], close[a])
            && is_long_body(open, close, a, &s)
            && advancing(a, b)
            && advancing(b, c)
            && real_body(open[b], close[b]) < real_body(open[a], close[a])
            && real_body(open[c], close[c]) < real_body(open[b], close[b])
            && upper_shadow(open[c], high[c], close[c])
                > upper_shadow(open[a], high[a], close[a])
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Stalled Pattern (deliberation): two long white candles, then a small
/// white candle perched at the top of the move.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_stalled_pattern<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 3, |i| {
        let (a, b, c) = (i - 2, i - 1, i);
        if is_white(open[a], close[a])
            && is_white(open[b], close[b])
            && is_white(open[c], close[c])
            && is_long_body(open, close, a, &s)
            && is_long_body(open, close, b, &s)
            && close[b] > close[a]
            && is_short_body(open, close, c, &s)
            && open[c] >= close[b] - near_tolerance(high, low, b, &s)
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Stick Sandwich: two black closes at the same level with a white candle
/// trapped between them.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_stick_sandwich<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 3, |i| {
        let (a, b, c) = (i - 2, i - 1, i);
        if is_black(open[a], close[a])
            && is_white(open[b], close[b])
            && low[b] > close[a]
            && is_black(open[c], close[c])
            && is_equal_price(close[c], close[a], equal_tolerance(high, low, a, &s))
        {
            PATTERN_BULLISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Tristar: three dojis with the middle one gapping away from its
/// neighbors.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_tristar<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 3, |i| {
        let (a, b, c) = (i - 2, i - 1, i);
        let all_doji = is_doji(open[a], high[a], low[a], close[a], &s)
            && is_doji(open[b], high[b], low[b], close[b], &s)
            && is_doji(open[c], high[c], low[c], close[c], &s);
        if !all_doji {
            return PATTERN_NONE;
        }
        if body_gap_up(open[a], close[a], open[b], close[b])
            && body_gap_down(open[b], close[b], open[c], close[c])
        {
            PATTERN_BEARISH
        } else if body_gap_down(open[a], close[a], open[b], close[b])
            && body_gap_up(open[b], close[b], open[c], close[c])
        {
            PATTERN_BULLISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Unique Three River Bottom: a long black candle, a black harami dipping
/// to a new low, and a small white candle holding above that low.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_unique_three_river<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 3, |i| {
        let (a, b, c) = (i - 2, i - 1, i);
        if is_long_body(open, close, a, &s)
            && is_black(open[a], close[a])
            && is_black(open[b], close[b])
            && body_top(open[b], close[b]) < body_top(open[a], close[a])
            && body_bottom(open[b], close[b]) > body_bottom(open[a], close[a])
            && low[b] < low[a]
            && is_white(open[c], close[c])
            && is_short_body(open, close, c, &s)
            && open[c] > low[b]
            && close[c] < close[b]
        {
            PATTERN_BULLISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Upside Gap Two Crows: a gapped-up black pair over a long white candle,
/// the second crow engulfing the first without filling the gap.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_upside_gap_two_crows<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 3, |i| {
        let (a, b, c) = (i - 2, i - 1, i);
        if is_long_body(open, close, a, &s)
            && is_white(open[a], close[a])
            && is_black(open[b], close[b])
            && body_gap_up(open[a], close[a], open[b], close[b])
            && is_black(open[c], close[c])
            && open[c] > open[b]
            && close[c] < close[b]
            && close[c] > close[a]
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Tasuki Gap: a gap in the trend direction, a same-direction candle,
/// then an opposite candle closing inside the gap without filling it.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_tasuki_gap<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 3, |i| {
        let (a, b, c) = (i - 2, i - 1, i);
        let similar = (real_body(open[b], close[b]) - real_body(open[c], close[c])).abs()
            <= near_tolerance(high, low, b, &s);
        // Upside: gap up, white continuation, black pullback into the gap
        if body_gap_up(open[a], close[a], open[b], close[b])
            && is_white(open[b], close[b])
            && is_black(open[c], close[c])
            && open[c] > body_bottom(open[b], close[b])
            && open[c] < body_top(open[b], close[b])
            && close[c] < body_bottom(open[b], close[b])
            && close[c] > body_top(open[a], close[a])
            && similar
        {
            PATTERN_BULLISH
        } else if body_gap_down(open[a], close[a], open[b], close[b])
            && is_black(open[b], close[b])
            && is_white(open[c], close[c])
            && open[c] > body_bottom(open[b], close[b])
            && open[c] < body_top(open[b], close[b])
            && close[c] > body_top(open[b], close[b])
            && close[c] < body_bottom(open[a], close[a])
            && similar
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Upside/Downside Gap Three Methods: a two-candle gap in the trend
/// direction closed by an opposite third candle.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_xside_gap_three_methods<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    scan(open, high, low, close, 3, |i| {
        let (a, b, c) = (i - 2, i - 1, i);
        if is_white(open[a], close[a])
            && is_white(open[b], close[b])
            && body_gap_up(open[a], close[a], open[b], close[b])
            && is_black(open[c], close[c])
            && open[c] > body_bottom(open[b], close[b])
            && open[c] < body_top(open[b], close[b])
            && close[c] < body_top(open[a], close[a])
            && close[c] > body_bottom(open[a], close[a])
        {
            PATTERN_BULLISH
        } else if is_black(open[a], close[a])
            && is_black(open[b], close[b])
            && body_gap_down(open[a], close[a], open[b], close[b])
            && is_white(open[c], close[c])
            && open[c] > body_bottom(open[b], close[b])
            && open[c] < body_top(open[b], close[b])
            && close[c] > body_bottom(open[a], close[a])
            && close[c] < body_top(open[a], close[a])
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Up/Down-gap Side-by-Side White Lines: two similar white candles
/// sitting together on the far side of a gap.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_gap_side_side_white<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 3, |i| {
        let (a, b, c) = (i - 2, i - 1, i);
        let near = near_tolerance(high, low, b, &s);
        let side_by_side = is_white(open[b], close[b])
            && is_white(open[c], close[c])
            && is_equal_price(open[c], open[b], near)
            && (real_body(open[b], close[b]) - real_body(open[c], close[c])).abs() <= near;
        if !side_by_side {
            return PATTERN_NONE;
        }
        if body_gap_up(open[a], close[a], open[b], close[b])
            && body_gap_up(open[a], close[a], open[c], close[c])
        {
            PATTERN_BULLISH
        } else if body_gap_down(open[a], close[a], open[b], close[b])
            && body_gap_down(open[a], close[a], open[c], close[c])
        {
            PATTERN_BEARISH
        } else {
            PATTERN_NONE
        }
    })
}
