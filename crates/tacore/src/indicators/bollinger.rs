//! Bollinger Bands.
//!
//! A moving-average middle band flanked by deviation envelopes:
//!
//! ```text
//! middle = MA(close, period)           (method selectable)
//! upper  = middle + nb_dev_up · dev
//! lower  = middle − nb_dev_dn · dev
//! ```
//!
//! where `dev` is the root-mean-square deviation of the window's samples
//! around the *selected* middle average (not necessarily the SMA), so the
//! bands stay centered on whichever average was requested. Conventional
//! parameters: period 5–20, multipliers 2.0, SMA.

use crate::error::{Error, Result};
use crate::indicators::ma::{ma_lookback_with, ma_with};
use crate::settings::{self, MaType, Settings};
use crate::traits::{validate_period, validate_series, SeriesElement};
use crate::utils::alloc_series;

/// Upper, middle and lower bands, equally trimmed.
#[derive(Debug, Clone)]
pub struct BbandsOutput<T> {
    /// Middle band plus the upper deviation envelope.
    pub upper: Vec<T>,
    /// The selected moving average.
    pub middle: Vec<T>,
    /// Middle band minus the lower deviation envelope.
    pub lower: Vec<T>,
}

/// Lookback of [`bbands`] under the global configuration: the dispatched MA
/// lookback.
#[inline]
#[must_use]
pub fn bbands_lookback(period: usize, ma_type: MaType) -> usize {
    let config = settings::snapshot();
    ma_lookback_with(&config, period, ma_type).max(period - 1)
}

/// Computes Bollinger Bands under the global configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput` for an empty series, or `Error::InvalidParameter`
/// for a non-finite deviation multiplier.
pub fn bbands<T: SeriesElement>(
    data: &[T],
    period: usize,
    nb_dev_up: T,
    nb_dev_dn: T,
    ma_type: MaType,
) -> Result<BbandsOutput<T>> {
    bbands_with(&settings::snapshot(), data, period, nb_dev_up, nb_dev_dn, ma_type)
}

/// Computes Bollinger Bands under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for a period outside 2..=100000,
/// `Error::EmptyInput` for an empty series, or `Error::InvalidParameter`
/// for a non-finite deviation multiplier.
pub fn bbands_with<T: SeriesElement>(
    config: &Settings,
    data: &[T],
    period: usize,
    nb_dev_up: T,
    nb_dev_dn: T,
    ma_type: MaType,
) -> Result<BbandsOutput<T>> {
    validate_period(period, 2)?;
    validate_series(data)?;
    if !nb_dev_up.is_finite() {
        return Err(Error::InvalidParameter {
            name: "nb_dev_up",
            reason: "deviation multiplier must be finite",
        }
        .record());
    }
    if !nb_dev_dn.is_finite() {
        return Err(Error::InvalidParameter {
            name: "nb_dev_dn",
            reason: "deviation multiplier must be finite",
        }
        .record());
    }

    let lookback = ma_lookback_with(config, period, ma_type).max(period - 1);
    if data.len() <= lookback {
        return Ok(BbandsOutput {
            upper: Vec::new(),
            middle: Vec::new(),
            lower: Vec::new(),
        });
    }

    let ma_series = ma_with(config, data, period, ma_type)?;
    let out_len = data.len() - lookback;
    let ma_offset = ma_series.len() - out_len;
    let period_t = T::from_usize(period)?;

    let mut upper = alloc_series(out_len)?;
    let mut middle = alloc_series(out_len)?;
    let mut lower = alloc_series(out_len)?;
    for i in 0..out_len {
        let center = ma_series[i + ma_offset];
        let bar = i + lookback;
        // RMS deviation of the raw window around the selected average
        let mut acc = T::zero();
        for &x in &data[bar + 1 - period..=bar] {
            let d = x - center;
            acc = acc + d * d;
        }
        let dev = (acc / period_t).sqrt();
        middle[i] = center;
        upper[i] = center + nb_dev_up * dev;
        lower[i] = center - nb_dev_dn * dev;
    }
    Ok(BbandsOutput { upper, middle, lower })
}
