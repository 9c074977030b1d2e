//! Candlestick pattern recognizers.
//!
//! Each recognizer scans four parallel OHLC series with a small trailing
//! window and emits one integer per bar: +100 bullish, −100 bearish, 0 no
//! pattern (±200 for confirmed Hikkake signals). Outputs are trimmed by the
//! pattern's lookback, which is the inspected window minus one; threshold
//! averages clamp to the bars available, so no extra averaging warm-up is
//! imposed.
//!
//! Patterns are grouped by window size: [`single`] (one bar), [`two`]
//! (two bars), [`three`] (three bars), and [`multi`] (four and five bar
//! formations plus the Hikkake family).

pub mod core;
pub mod multi;
pub mod single;
pub mod three;
pub mod two;

pub use self::core::{
    CandleSettings, PATTERN_BEARISH, PATTERN_BEARISH_CONFIRMED, PATTERN_BULLISH,
    PATTERN_BULLISH_CONFIRMED, PATTERN_NONE,
};
pub use self::multi::*;
pub use self::single::*;
pub use self::three::*;
pub use self::two::*;

use crate::error::{Error, Result};
use crate::traits::{validate_ohlc, SeriesElement};
use crate::utils::alloc_int_series;

/// Runs `classify` over every bar with a full `window`, producing the
/// trimmed integer output series.
pub(crate) fn scan<T, F>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    window: usize,
    mut classify: F,
) -> Result<Vec<i32>>
where
    T: SeriesElement,
    F: FnMut(usize) -> i32,
{
    validate_ohlc(open, high, low, close)?;
    let lookback = window - 1;
    if open.len() <= lookback {
        return Ok(Vec::new());
    }
    let mut out = alloc_int_series(open.len() - lookback, PATTERN_NONE)?;
    for i in lookback..open.len() {
        out[i - lookback] = classify(i);
    }
    Ok(out)
}

/// Validates a penetration fraction: finite and within [0, 1].
pub(crate) fn validate_penetration<T: SeriesElement>(penetration: T) -> Result<()> {
    if !(penetration.is_finite() && penetration >= T::zero() && penetration <= T::one()) {
        return Err(Error::InvalidParameter {
            name: "penetration",
            reason: "penetration must be within [0, 1]",
        }
        .record());
    }
    Ok(())
}
