//! Four- and five-bar candlestick formations, plus the Hikkake family.

use super::core::{
    body_bottom, body_gap_down, body_gap_up, body_top, candle_range, is_black, is_long_body,
    is_short_body, is_very_short_shadow, is_white, lower_shadow, near_tolerance, real_body,
    upper_shadow, CandleSettings, PATTERN_BEARISH, PATTERN_BULLISH, PATTERN_NONE,
};
use super::{scan, validate_penetration};
use crate::error::Result;
use crate::traits::SeriesElement;

/// Default penetration for Mat Hold.
pub const DEFAULT_MAT_HOLD_PENETRATION: f64 = 0.5;

/// Lookback for [`cdl_three_line_strike`] and
/// [`cdl_concealing_baby_swallow`]: 3.
#[inline]
#[must_use]
pub const fn cdl_four_lookback() -> usize {
    3
}

/// Lookback for the five-bar formations: 4.
#[inline]
#[must_use]
pub const fn cdl_five_lookback() -> usize {
    4
}

/// Lookback for the Hikkake recognizers: 5 (setup window plus the
/// confirmation horizon).
#[inline]
#[must_use]
pub const fn cdl_hikkake_lookback() -> usize {
    5
}

/// Three-Line Strike: three candles marching one way, struck by a fourth
/// that engulfs all three bodies in the other direction. The signal keeps
/// the direction of the march (the strike is read as a continuation
/// shakeout).
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_three_line_strike<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    scan(open, high, low, close, 4, |i| {
        let (a, b, c, d) = (i - 3, i - 2, i - 1, i);
        let white_march = is_white(open[a], close[a])
            && is_white(open[b], close[b])
            && is_white(open[c], close[c])
            && close[b] > close[a]
            && close[c] > close[b];
        if white_march
            && is_black(open[d], close[d])
            && open[d] > close[c]
            && close[d] < open[a]
        {
            return PATTERN_BULLISH;
        }
        let black_march = is_black(open[a], close[a])
            && is_black(open[b], close[b])
            && is_black(open[c], close[c])
            && close[b] < close[a]
            && close[c] < close[b];
        if black_march
            && is_white(open[d], close[d])
            && open[d] < close[c]
            && close[d] > open[a]
        {
            return PATTERN_BEARISH;
        }
        PATTERN_NONE
    })
}

/// Concealing Baby Swallow: four black candles where a gapped-down third
/// bar's upper shadow probes the prior body and the fourth engulfs it
/// entirely, shadows included.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_concealing_baby_swallow<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 4, |i| {
        let (a, b, c, d) = (i - 3, i - 2, i - 1, i);
        let marubozu = |j: usize| {
            let range = candle_range(high[j], low[j]);
            is_black(open[j], close[j])
                && is_very_short_shadow(upper_shadow(open[j], high[j], close[j]), range, &s)
                && is_very_short_shadow(lower_shadow(open[j], low[j], close[j]), range, &s)
        };
        if marubozu(a)
            && marubozu(b)
            && is_black(open[c], close[c])
            && body_gap_down(open[b], close[b], open[c], close[c])
            && high[c] > close[b]
            && is_black(open[d], close[d])
            && open[d] >= high[c]
            && close[d] < low[c]
        {
            PATTERN_BULLISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Breakaway: a long candle, a same-direction gap, two drifting bars, and
/// a long opposite candle closing back inside the gap.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_breakaway<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 5, |i| {
        let (a, b, c, d, e) = (i - 4, i - 3, i - 2, i - 1, i);
        // Bullish: black run gapping down, white recovery into the gap
        if is_long_body(open, close, a, &s)
            && is_black(open[a], close[a])
            && is_black(open[b], close[b])
            && body_gap_down(open[a], close[a], open[b], close[b])
            && close[c] < close[b]
            && is_black(open[d], close[d])
            && close[d] < close[c]
            && is_white(open[e], close[e])
            && is_long_body(open, close, e, &s)
            && close[e] > body_top(open[b], close[b])
            && close[e] < body_bottom(open[a], close[a])
        {
            return PATTERN_BULLISH;
        }
        // Bearish mirror
        if is_long_body(open, close, a, &s)
            && is_white(open[a], close[a])
            && is_white(open[b], close[b])
            && body_gap_up(open[a], close[a], open[b], close[b])
            && close[c] > close[b]
            && is_white(open[d], close[d])
            && close[d] > close[c]
            && is_black(open[e], close[e])
            && is_long_body(open, close, e, &s)
            && close[e] < body_bottom(open[b], close[b])
            && close[e] > body_top(open[a], close[a])
        {
            return PATTERN_BEARISH;
        }
        PATTERN_NONE
    })
}

/// Ladder Bottom: four descending black candles, the last sprouting an
/// upper shadow, answered by a white candle opening above its body.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_ladder_bottom<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 5, |i| {
        let (a, b, c, d, e) = (i - 4, i - 3, i - 2, i - 1, i);
        let descending_black = |prev: usize, curr: usize| {
            is_black(open[curr], close[curr])
                && open[curr] < open[prev]
                && close[curr] < close[prev]
        };
        if is_black(open[a], close[a])
            && descending_black(a, b)
            && descending_black(b, c)
            && descending_black(c, d)
            && upper_shadow(open[d], high[d], close[d])
                > real_body(open[d], close[d]) * T::constant(s.shadow_very_short)
            && upper_shadow(open[d], high[d], close[d]) > T::zero()
            && is_white(open[e], close[e])
            && open[e] > body_top(open[d], close[d])
        {
            PATTERN_BULLISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Mat Hold with the default 0.5 penetration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_mat_hold<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    cdl_mat_hold_with(open, high, low, close, T::constant(DEFAULT_MAT_HOLD_PENETRATION))
}

/// Mat Hold: a long white candle, a gapped-up cluster of three small
/// pullback candles holding above `penetration` of the white body, and a
/// white candle breaking to a new high.
///
/// # Errors
///
/// Returns `Error::EmptyInput`, `Error::LengthMismatch`, or
/// `Error::InvalidParameter` for a penetration outside [0, 1].
pub fn cdl_mat_hold_with<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    penetration: T,
) -> Result<Vec<i32>> {
    validate_penetration(penetration)?;
    let s = CandleSettings::default();
    scan(open, high, low, close, 5, |i| {
        let (a, b, c, d, e) = (i - 4, i - 3, i - 2, i - 1, i);
        let hold_floor = close[a] - real_body(open[a], close[a]) * penetration;
        let pullback_ok = |j: usize| is_short_body(open, close, j, &s) && low[j] > hold_floor;
        if is_long_body(open, close, a, &s)
            && is_white(open[a], close[a])
            && body_gap_up(open[a], close[a], open[b], close[b])
            && is_black(open[b], close[b])
            && pullback_ok(b)
            && pullback_ok(c)
            && pullback_ok(d)
            && close[d] < close[b]
            && is_white(open[e], close[e])
            && close[e] > high[b].max(high[c]).max(high[d])
        {
            PATTERN_BULLISH
        } else {
            PATTERN_NONE
        }
    })
}

/// Rising/Falling Three Methods: a long candle, three small counter-trend
/// bars contained in its range, and a long candle resuming the trend past
/// the first close.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_rise_fall_three_methods<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    scan(open, high, low, close, 5, |i| {
        let (a, b, c, d, e) = (i - 4, i - 3, i - 2, i - 1, i);
        let contained =
            |j: usize| is_short_body(open, close, j, &s) && high[j] < high[a] && low[j] > low[a];
        // Rising: long white, small black drift down, long white breakout
        if is_long_body(open, close, a, &s)
            && is_white(open[a], close[a])
            && contained(b)
            && contained(c)
            && contained(d)
            && is_black(open[b], close[b])
            && is_black(open[d], close[d])
            && close[c] < close[b]
            && close[d] < close[c]
            && is_long_body(open, close, e, &s)
            && is_white(open[e], close[e])
            && close[e] > close[a]
        {
            return PATTERN_BULLISH;
        }
        // Falling mirror
        if is_long_body(open, close, a, &s)
            && is_black(open[a], close[a])
            && contained(b)
            && contained(c)
            && contained(d)
            && is_white(open[b], close[b])
            && is_white(open[d], close[d])
            && close[c] > close[b]
            && close[d] > close[c]
            && is_long_body(open, close, e, &s)
            && is_black(open[e], close[e])
            && close[e] < close[a]
        {
            return PATTERN_BEARISH;
        }
        PATTERN_NONE
    })
}

fn hikkake_scan<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    modified: bool,
) -> Result<Vec<i32>> {
    let s = CandleSettings::default();
    // Pending setup: (sign, confirmation deadline, inside-bar high/low)
    let mut pending: Option<(i32, usize, T, T)> = None;
    scan(open, high, low, close, 6, |i| {
        let mut result = PATTERN_NONE;

        if let Some((sign, deadline, inside_high, inside_low)) = pending {
            if i > deadline {
                pending = None;
            } else if (sign > 0 && close[i] > inside_high)
                || (sign < 0 && close[i] < inside_low)
            {
                result = sign * 2;
                pending = None;
            }
        }

        // Setup: bar i-1 is an inside bar of i-2; bar i breaks out of it
        // on both ends. A downside false break is bullish, an upside one
        // bearish.
        let inside = high[i - 1] < high[i - 2] && low[i - 1] > low[i - 2];
        if inside {
            let mut sign = if high[i] < high[i - 1] && low[i] < low[i - 1] {
                PATTERN_BULLISH
            } else if high[i] > high[i - 1] && low[i] > low[i - 1] {
                PATTERN_BEARISH
            } else {
                PATTERN_NONE
            };
            if modified && sign != PATTERN_NONE {
                // Modified variant: the inside bar must close on the end
                // it is about to fake out of
                let tol = near_tolerance(high, low, i - 1, &s);
                let at_low = (close[i - 1] - low[i - 1]).abs() <= tol;
                let at_high = (high[i - 1] - close[i - 1]).abs() <= tol;
                let qualified = if sign > 0 { at_low } else { at_high };
                if !qualified {
                    sign = PATTERN_NONE;
                }
            }
            if sign != PATTERN_NONE {
                pending = Some((sign, i + 3, high[i - 1], low[i - 1]));
                if result == PATTERN_NONE {
                    result = sign;
                }
            }
        }
        result
    })
}

/// Hikkake: an inside bar, a false breakout beyond it, and an optional
/// confirmation close back through the inside bar within three bars.
///
/// Setups report ±100 (bullish for a downside fake-out); confirmations
/// report ±200 on the confirming bar.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_hikkake<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    hikkake_scan(open, high, low, close, false)
}

/// Modified Hikkake: as [`cdl_hikkake`], but the inside bar must close on
/// the extreme it subsequently fakes out of, filtering casual setups.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch` on malformed
/// input.
pub fn cdl_hikkake_mod<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<Vec<i32>> {
    hikkake_scan(open, high, low, close, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::candlestick::{PATTERN_BULLISH_CONFIRMED, PATTERN_NONE};

    fn quiet_history() -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
        (
            vec![100.0, 100.0, 100.0, 100.0],
            vec![100.6, 100.6, 100.6, 100.6],
            vec![99.4, 99.4, 99.4, 99.4],
            vec![100.4, 99.6, 100.4, 99.6],
        )
    }

    fn push(
        series: &mut (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>),
        bars: &[(f64, f64, f64, f64)],
    ) {
        for &(o, h, l, c) in bars {
            series.0.push(o);
            series.1.push(h);
            series.2.push(l);
            series.3.push(c);
        }
    }

    #[test]
    fn test_three_line_strike_bullish() {
        let mut s = quiet_history();
        push(
            &mut s,
            &[
                (100.0, 102.1, 99.9, 102.0),
                (101.0, 103.6, 100.9, 103.5),
                (102.5, 105.1, 102.4, 105.0),
                (105.5, 105.7, 99.5, 99.8), // strike engulfing all three
            ],
        );
        let out = cdl_three_line_strike(&s.0, &s.1, &s.2, &s.3).unwrap();
        assert_eq!(*out.last().unwrap(), PATTERN_BULLISH);
    }

    #[test]
    fn test_rising_three_methods() {
        let mut s = quiet_history();
        push(
            &mut s,
            &[
                (99.0, 104.2, 98.8, 104.0),   // long white
                (103.5, 103.9, 102.6, 102.8), // small black inside
                (102.9, 103.2, 102.0, 102.2),
                (102.3, 102.6, 101.4, 101.6),
                (102.0, 106.2, 101.8, 106.0), // breakout
            ],
        );
        let out = cdl_rise_fall_three_methods(&s.0, &s.1, &s.2, &s.3).unwrap();
        assert_eq!(*out.last().unwrap(), PATTERN_BULLISH);
    }

    #[test]
    fn test_mat_hold_holds_the_floor() {
        let mut s = quiet_history();
        push(
            &mut s,
            &[
                (99.0, 104.2, 98.8, 104.0),   // long white, body 5
                (105.0, 105.3, 104.2, 104.4), // small black, body gapped up
                (103.7, 104.0, 102.9, 103.1),
                (103.2, 103.5, 102.4, 102.6), // stays above 104 - 2.5
                (103.0, 106.5, 102.9, 106.4), // new high
            ],
        );
        let out = cdl_mat_hold(&s.0, &s.1, &s.2, &s.3).unwrap();
        assert_eq!(*out.last().unwrap(), PATTERN_BULLISH);

        // Pullback pierces the floor: no pattern
        let mut s = quiet_history();
        push(
            &mut s,
            &[
                (99.0, 104.2, 98.8, 104.0),
                (105.0, 105.3, 104.2, 104.4),
                (103.7, 104.0, 100.9, 101.1), // below 101.5 floor
                (103.2, 103.5, 102.4, 102.6),
                (103.0, 106.5, 102.9, 106.4),
            ],
        );
        let out = cdl_mat_hold(&s.0, &s.1, &s.2, &s.3).unwrap();
        assert_eq!(*out.last().unwrap(), PATTERN_NONE);
    }

    #[test]
    fn test_ladder_bottom() {
        let mut s = quiet_history();
        push(
            &mut s,
            &[
                (106.0, 106.2, 103.8, 104.0),
                (105.0, 105.2, 102.8, 103.0),
                (104.0, 104.2, 101.8, 102.0),
                (103.0, 103.8, 100.8, 101.0), // black with upper shadow
                (103.5, 105.5, 103.3, 105.2), // white opening above its body
            ],
        );
        let out = cdl_ladder_bottom(&s.0, &s.1, &s.2, &s.3).unwrap();
        assert_eq!(*out.last().unwrap(), PATTERN_BULLISH);
    }

    #[test]
    fn test_hikkake_setup_and_confirmation() {
        let mut s = quiet_history();
        push(
            &mut s,
            &[
                (100.0, 103.0, 97.0, 101.0),  // wide bar
                (100.5, 101.5, 99.5, 100.0),  // inside bar
                (99.8, 101.0, 99.0, 99.5),    // false break down: bullish setup
                (100.0, 102.5, 99.8, 102.0),  // closes above inside high: confirm
            ],
        );
        let out = cdl_hikkake(&s.0, &s.1, &s.2, &s.3).unwrap();
        let n = out.len();
        assert_eq!(out[n - 2], PATTERN_BULLISH);
        assert_eq!(out[n - 1], PATTERN_BULLISH_CONFIRMED);
    }

    #[test]
    fn test_hikkake_mod_requires_close_at_extreme() {
        // Inside bar closing mid-range: plain hikkake fires, modified does
        // not
        let mut s = quiet_history();
        push(
            &mut s,
            &[
                (100.0, 103.0, 97.0, 101.0),
                (100.5, 101.5, 99.5, 100.5), // closes mid-range
                (99.8, 101.0, 99.0, 99.5),
            ],
        );
        let plain = cdl_hikkake(&s.0, &s.1, &s.2, &s.3).unwrap();
        let modified = cdl_hikkake_mod(&s.0, &s.1, &s.2, &s.3).unwrap();
        assert_eq!(*plain.last().unwrap(), PATTERN_BULLISH);
        assert_eq!(*modified.last().unwrap(), PATTERN_NONE);
    }

    #[test]
    fn test_breakaway() {
        let mut s = quiet_history();
        push(
            &mut s,
            &[
                (105.0, 105.2, 101.8, 102.0), // long black
                (101.0, 101.2, 99.9, 100.1),  // gapped-down black
                (100.0, 100.3, 99.3, 99.5),
                (99.6, 99.8, 98.7, 98.9),
                (99.0, 101.6, 98.9, 101.5), // long white back into the gap
            ],
        );
        let out = cdl_breakaway(&s.0, &s.1, &s.2, &s.3).unwrap();
        assert_eq!(*out.last().unwrap(), PATTERN_BULLISH);
    }
}
