//! Parabolic SAR (stop and reverse), plain and extended.
//!
//! The SAR trails price by an accelerating factor:
//!
//! ```text
//! SAR[i] = SAR[i-1] + AF · (EP − SAR[i-1])
//! ```
//!
//! where EP is the extreme point of the current trend and AF grows by a
//! step (capped) each time a new extreme is made. The SAR may never enter
//! the prior two bars' range, and price crossing it reverses the trend.
//!
//! [`sar`] uses the classic 0.02/0.02/0.20 acceleration schedule. The
//! extended variant adds an explicit start value, an offset applied on
//! reversal, and independent acceleration schedules per direction; its
//! output is signed (negative while in a downtrend) so the trend direction
//! survives in a single series.
//!
//! The initial trend is taken from the directional movement of the second
//! bar. Lookback is 1.

use crate::error::{Error, Result};
use crate::traits::{validate_pair, SeriesElement};
use crate::utils::alloc_series;

/// Lookback for SAR: 1.
#[inline]
#[must_use]
pub const fn sar_lookback() -> usize {
    1
}

/// Default initial/step acceleration factor.
pub const DEFAULT_ACCELERATION: f64 = 0.02;

/// Default acceleration ceiling.
pub const DEFAULT_MAX_ACCELERATION: f64 = 0.20;

fn validate_accel<T: SeriesElement>(name: &'static str, value: T) -> Result<()> {
    if !(value.is_finite() && value >= T::zero()) {
        return Err(Error::InvalidParameter {
            name,
            reason: "acceleration factor must be finite and non-negative",
        }
        .record());
    }
    Ok(())
}

/// Computes the Parabolic SAR with the classic acceleration schedule.
///
/// # Errors
///
/// Returns `Error::EmptyInput`, `Error::LengthMismatch`, or
/// `Error::InvalidParameter` for a malformed acceleration factor.
pub fn sar<T: SeriesElement>(high: &[T], low: &[T]) -> Result<Vec<T>> {
    sar_full(
        high,
        low,
        T::constant(DEFAULT_ACCELERATION),
        T::constant(DEFAULT_MAX_ACCELERATION),
    )
}

/// Computes the Parabolic SAR with an explicit acceleration step and
/// ceiling.
///
/// # Errors
///
/// Returns `Error::EmptyInput`, `Error::LengthMismatch`, or
/// `Error::InvalidParameter` for a malformed acceleration factor.
pub fn sar_full<T: SeriesElement>(
    high: &[T],
    low: &[T],
    acceleration: T,
    max_acceleration: T,
) -> Result<Vec<T>> {
    validate_accel("acceleration", acceleration)?;
    validate_accel("max_acceleration", max_acceleration)?;
    validate_pair(high, low)?;
    if high.len() <= sar_lookback() {
        return Ok(Vec::new());
    }

    let n = high.len();
    let af_cap = if acceleration > max_acceleration {
        acceleration
    } else {
        max_acceleration
    };
    let mut out = alloc_series(n - 1)?;

    // Initial trend from the second bar's directional movement
    let up_move = high[1] - high[0];
    let down_move = low[0] - low[1];
    let mut long = !(down_move > T::zero() && down_move > up_move);

    let mut af = acceleration;
    let (mut sar_val, mut ep) = if long {
        (low[0], high[1])
    } else {
        (high[0], low[1])
    };
    out[0] = sar_val;

    for i in 2..n {
        let mut next = sar_val + af * (ep - sar_val);
        if long {
            // Never above the prior two lows
            next = next.min(low[i - 1]).min(low[i - 2]);
            if low[i] < next {
                long = false;
                next = ep;
                ep = low[i];
                af = acceleration;
            } else if high[i] > ep {
                ep = high[i];
                af = (af + acceleration).min(af_cap);
            }
        } else {
            // Never below the prior two highs
            next = next.max(high[i - 1]).max(high[i - 2]);
            if high[i] > next {
                long = true;
                next = ep;
                ep = high[i];
                af = acceleration;
            } else if low[i] < ep {
                ep = low[i];
                af = (af + acceleration).min(af_cap);
            }
        }
        sar_val = next;
        out[i - 1] = sar_val;
    }
    Ok(out)
}

/// Computes the extended Parabolic SAR.
///
/// - `start_value`: 0 derives the initial trend from the data; a positive
///   value starts long with that SAR, a negative value starts short at its
///   magnitude.
/// - `offset_on_reverse`: fraction of the extreme point added away from the
///   new trend on each reversal.
/// - `af_init/step/max_long` and `..._short`: independent acceleration
///   schedules per direction.
///
/// The output is **signed**: positive SAR while long, negated SAR while
/// short.
///
/// # Errors
///
/// Returns `Error::EmptyInput`, `Error::LengthMismatch`, or
/// `Error::InvalidParameter` for malformed accelerations or offset.
#[allow(clippy::too_many_arguments)]
pub fn sar_ext<T: SeriesElement>(
    high: &[T],
    low: &[T],
    start_value: T,
    offset_on_reverse: T,
    af_init_long: T,
    af_step_long: T,
    af_max_long: T,
    af_init_short: T,
    af_step_short: T,
    af_max_short: T,
) -> Result<Vec<T>> {
    validate_accel("af_init_long", af_init_long)?;
    validate_accel("af_step_long", af_step_long)?;
    validate_accel("af_max_long", af_max_long)?;
    validate_accel("af_init_short", af_init_short)?;
    validate_accel("af_step_short", af_step_short)?;
    validate_accel("af_max_short", af_max_short)?;
    if !(offset_on_reverse.is_finite() && offset_on_reverse >= T::zero()) {
        return Err(Error::InvalidParameter {
            name: "offset_on_reverse",
            reason: "offset must be finite and non-negative",
        }
        .record());
    }
    validate_pair(high, low)?;
    if high.len() <= sar_lookback() {
        return Ok(Vec::new());
    }

    let n = high.len();
    let cap_long = af_max_long.max(af_init_long);
    let cap_short = af_max_short.max(af_init_short);
    let mut out = alloc_series(n - 1)?;

    let mut long = if start_value == T::zero() {
        let up_move = high[1] - high[0];
        let down_move = low[0] - low[1];
        !(down_move > T::zero() && down_move > up_move)
    } else {
        start_value > T::zero()
    };

    let mut af = if long { af_init_long } else { af_init_short };
    let mut sar_val = if start_value == T::zero() {
        if long {
            low[0]
        } else {
            high[0]
        }
    } else {
        start_value.abs()
    };
    let mut ep = if long { high[1] } else { low[1] };

    out[0] = if long { sar_val } else { -sar_val };

    for i in 2..n {
        let mut next = sar_val + af * (ep - sar_val);
        if long {
            next = next.min(low[i - 1]).min(low[i - 2]);
            if low[i] < next {
                long = false;
                next = ep + ep.abs() * offset_on_reverse;
                ep = low[i];
                af = af_init_short;
            } else if high[i] > ep {
                ep = high[i];
                af = (af + af_step_long).min(cap_long);
            }
        } else {
            next = next.max(high[i - 1]).max(high[i - 2]);
            if high[i] > next {
                long = true;
                next = ep - ep.abs() * offset_on_reverse;
                ep = high[i];
                af = af_init_long;
            } else if low[i] < ep {
                ep = low[i];
                af = (af + af_step_short).min(cap_short);
            }
        }
        sar_val = next;
        out[i - 1] = if long { sar_val } else { -sar_val };
    }
    Ok(out)
}
