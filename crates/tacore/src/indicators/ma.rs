//! Generic moving average dispatch ([`ma`]) and moving average with
//! variable period ([`mavp`]).
//!
//! Every indicator with a configurable smoothing method routes through
//! [`ma`], which selects the concrete algorithm from a
//! [`MaType`](crate::settings::MaType). A period of 1 short-circuits to a
//! copy of the input, matching the degenerate behavior expected of every
//! average.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::indicators::{dema, ema, kama, mama, sma, t3, tema, trima, wma};
use crate::settings::{self, MaType, Settings};
use crate::traits::{validate_pair, validate_period, validate_series, SeriesElement};
use crate::utils::alloc_series;

/// Lookback of [`ma`] for the given type and period, under the global
/// configuration.
#[inline]
#[must_use]
pub fn ma_lookback(period: usize, ma_type: MaType) -> usize {
    ma_lookback_with(&settings::snapshot(), period, ma_type)
}

/// Lookback of [`ma`] under an explicit configuration.
#[must_use]
pub fn ma_lookback_with(config: &Settings, period: usize, ma_type: MaType) -> usize {
    if period == 1 {
        return 0;
    }
    match ma_type {
        MaType::Sma => sma::sma_lookback(period),
        MaType::Ema => ema::ema_lookback_with(config, period),
        MaType::Wma => wma::wma_lookback(period),
        MaType::Dema => dema::dema_lookback_with(config, period),
        MaType::Tema => tema::tema_lookback_with(config, period),
        MaType::Trima => trima::trima_lookback(period),
        MaType::Kama => kama::kama_lookback_with(config, period),
        MaType::Mama => mama::mama_lookback_with(config),
        MaType::T3 => t3::t3_lookback_with(config, period),
    }
}

/// Computes a moving average of the selected type under the global
/// configuration.
///
/// For [`MaType::Mama`] the period is ignored (MAMA adapts its own) and the
/// MAMA line is returned.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 1..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn ma<T: SeriesElement>(data: &[T], period: usize, ma_type: MaType) -> Result<Vec<T>> {
    ma_with(&settings::snapshot(), data, period, ma_type)
}

/// Computes a moving average of the selected type under an explicit
/// configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 1..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn ma_with<T: SeriesElement>(
    config: &Settings,
    data: &[T],
    period: usize,
    ma_type: MaType,
) -> Result<Vec<T>> {
    validate_period(period, 1)?;
    validate_series(data)?;
    if period == 1 {
        let mut out = alloc_series(data.len())?;
        out.copy_from_slice(data);
        return Ok(out);
    }
    match ma_type {
        MaType::Sma => sma::sma(data, period),
        MaType::Ema => ema::ema_with(config, data, period),
        MaType::Wma => wma::wma(data, period),
        MaType::Dema => dema::dema_with(config, data, period),
        MaType::Tema => tema::tema_with(config, data, period),
        MaType::Trima => trima::trima(data, period),
        MaType::Kama => kama::kama_with(config, data, period),
        MaType::Mama => Ok(mama::mama_with(
            config,
            data,
            T::constant(mama::DEFAULT_FAST_LIMIT),
            T::constant(mama::DEFAULT_SLOW_LIMIT),
        )?
        .mama),
        MaType::T3 => t3::t3_with(config, data, period, T::constant(t3::DEFAULT_VOLUME_FACTOR)),
    }
}

/// Lookback of [`mavp`]: the dispatched lookback of `max_period`.
#[inline]
#[must_use]
pub fn mavp_lookback(max_period: usize, ma_type: MaType) -> usize {
    ma_lookback(max_period, ma_type)
}

/// Moving average with variable period: each output bar is smoothed with
/// its own period taken from the parallel `periods` series, truncated to an
/// integer and clamped to `[min_period, max_period]`.
///
/// The output is aligned to `max_period`'s lookback so every bar can honor
/// the largest permissible period.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `min_period`/`max_period` are outside
/// 2..=100000 or inverted, `Error::EmptyInput` for empty series, or
/// `Error::LengthMismatch` when `periods` differs in length from `data`.
pub fn mavp<T: SeriesElement>(
    data: &[T],
    periods: &[T],
    min_period: usize,
    max_period: usize,
    ma_type: MaType,
) -> Result<Vec<T>> {
    validate_period(min_period, 2)?;
    validate_period(max_period, 2)?;
    if min_period > max_period {
        return Err(Error::InvalidPeriod {
            period: min_period,
            reason: "minimum period exceeds maximum period",
        }
        .record());
    }
    validate_pair(data, periods)?;

    let config = settings::snapshot();
    let lookback = ma_lookback_with(&config, max_period, ma_type);
    if data.len() <= lookback {
        return Ok(Vec::new());
    }

    let mut out = alloc_series(data.len() - lookback)?;
    // One full MA series per distinct period actually used
    let mut cache: HashMap<usize, Vec<T>> = HashMap::new();
    for i in lookback..data.len() {
        let requested = periods[i].to_f64().map_or(min_period, |p| p as usize);
        let p = requested.clamp(min_period, max_period);
        if !cache.contains_key(&p) {
            cache.insert(p, ma_with(&config, data, p, ma_type)?);
        }
        let series = &cache[&p];
        let p_lookback = ma_lookback_with(&config, p, ma_type);
        out[i - lookback] = series[i - p_lookback];
    }
    Ok(out)
}
