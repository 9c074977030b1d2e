//! Hilbert Transform cycle indicators.
//!
//! Thin selectors over the shared [`ht_core`](crate::indicators::ht_core)
//! sweep: each function runs the pass once and exposes one of its outputs,
//! trimmed by that output's warm-up lookback plus the indicator's configured
//! unstable period.

use crate::error::Result;
use crate::indicators::ht_core::{hilbert_pass, HT_PHASE_LOOKBACK, HT_PHASOR_LOOKBACK};
use crate::settings::{self, Settings, UnstableIndicator};
use crate::traits::{validate_series, SeriesElement};
use crate::utils::{alloc_int_series, alloc_series};

/// In-phase and quadrature phasor components.
#[derive(Debug, Clone)]
pub struct HtPhasorOutput<T> {
    /// In-phase component.
    pub in_phase: Vec<T>,
    /// Quadrature component.
    pub quadrature: Vec<T>,
}

/// Sine and lead-sine of the dominant cycle phase.
#[derive(Debug, Clone)]
pub struct HtSineOutput<T> {
    /// Sine of the dominant cycle phase.
    pub sine: Vec<T>,
    /// Sine of the phase led by 45 degrees.
    pub lead_sine: Vec<T>,
}

fn trimmed<T: SeriesElement>(full: &[T], lookback: usize) -> Result<Vec<T>> {
    let mut out = alloc_series(full.len() - lookback)?;
    out.copy_from_slice(&full[lookback..]);
    Ok(out)
}

macro_rules! ht_lookback_fns {
    ($(#[$doc:meta])* $name:ident, $with_name:ident, $base:expr, $unstable:expr) => {
        $(#[$doc])*
        #[inline]
        #[must_use]
        pub fn $name() -> usize {
            $with_name(&settings::snapshot())
        }

        /// Same lookback under an explicit configuration.
        #[inline]
        #[must_use]
        pub fn $with_name(config: &Settings) -> usize {
            $base + config.unstable_period($unstable)
        }
    };
}

ht_lookback_fns!(
    /// Lookback for `ht_dc_period`: 32 plus its unstable period.
    ht_dc_period_lookback, ht_dc_period_lookback_with, HT_PHASOR_LOOKBACK, UnstableIndicator::HtDcPeriod
);
ht_lookback_fns!(
    /// Lookback for `ht_dc_phase`: 63 plus its unstable period.
    ht_dc_phase_lookback, ht_dc_phase_lookback_with, HT_PHASE_LOOKBACK, UnstableIndicator::HtDcPhase
);
ht_lookback_fns!(
    /// Lookback for `ht_phasor`: 32 plus its unstable period.
    ht_phasor_lookback, ht_phasor_lookback_with, HT_PHASOR_LOOKBACK, UnstableIndicator::HtPhasor
);
ht_lookback_fns!(
    /// Lookback for `ht_sine`: 63 plus its unstable period.
    ht_sine_lookback, ht_sine_lookback_with, HT_PHASE_LOOKBACK, UnstableIndicator::HtSine
);
ht_lookback_fns!(
    /// Lookback for `ht_trendline`: 63 plus its unstable period.
    ht_trendline_lookback, ht_trendline_lookback_with, HT_PHASE_LOOKBACK, UnstableIndicator::HtTrendline
);
ht_lookback_fns!(
    /// Lookback for `ht_trendmode`: 63 plus its unstable period.
    ht_trendmode_lookback, ht_trendmode_lookback_with, HT_PHASE_LOOKBACK, UnstableIndicator::HtTrendmode
);

/// Dominant cycle period, in bars, under the global configuration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` for an empty series.
pub fn ht_dc_period<T: SeriesElement>(data: &[T]) -> Result<Vec<T>> {
    ht_dc_period_with(&settings::snapshot(), data)
}

/// Dominant cycle period under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` for an empty series.
pub fn ht_dc_period_with<T: SeriesElement>(config: &Settings, data: &[T]) -> Result<Vec<T>> {
    validate_series(data)?;
    let lookback = ht_dc_period_lookback_with(config);
    if data.len() <= lookback {
        return Ok(Vec::new());
    }
    let pass = hilbert_pass(data)?;
    trimmed(&pass.smooth_period, lookback)
}

/// Dominant cycle phase, in degrees, under the global configuration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` for an empty series.
pub fn ht_dc_phase<T: SeriesElement>(data: &[T]) -> Result<Vec<T>> {
    ht_dc_phase_with(&settings::snapshot(), data)
}

/// Dominant cycle phase under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` for an empty series.
pub fn ht_dc_phase_with<T: SeriesElement>(config: &Settings, data: &[T]) -> Result<Vec<T>> {
    validate_series(data)?;
    let lookback = ht_dc_phase_lookback_with(config);
    if data.len() <= lookback {
        return Ok(Vec::new());
    }
    let pass = hilbert_pass(data)?;
    trimmed(&pass.dc_phase, lookback)
}

/// Phasor components (in-phase, quadrature) under the global configuration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` for an empty series.
pub fn ht_phasor<T: SeriesElement>(data: &[T]) -> Result<HtPhasorOutput<T>> {
    ht_phasor_with(&settings::snapshot(), data)
}

/// Phasor components under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` for an empty series.
pub fn ht_phasor_with<T: SeriesElement>(
    config: &Settings,
    data: &[T],
) -> Result<HtPhasorOutput<T>> {
    validate_series(data)?;
    let lookback = ht_phasor_lookback_with(config);
    if data.len() <= lookback {
        return Ok(HtPhasorOutput {
            in_phase: Vec::new(),
            quadrature: Vec::new(),
        });
    }
    let pass = hilbert_pass(data)?;
    Ok(HtPhasorOutput {
        in_phase: trimmed(&pass.i1, lookback)?,
        quadrature: trimmed(&pass.q1, lookback)?,
    })
}

/// Cycle sine and lead sine under the global configuration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` for an empty series.
pub fn ht_sine<T: SeriesElement>(data: &[T]) -> Result<HtSineOutput<T>> {
    ht_sine_with(&settings::snapshot(), data)
}

/// Cycle sine and lead sine under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` for an empty series.
pub fn ht_sine_with<T: SeriesElement>(config: &Settings, data: &[T]) -> Result<HtSineOutput<T>> {
    validate_series(data)?;
    let lookback = ht_sine_lookback_with(config);
    if data.len() <= lookback {
        return Ok(HtSineOutput {
            sine: Vec::new(),
            lead_sine: Vec::new(),
        });
    }
    let pass = hilbert_pass(data)?;
    Ok(HtSineOutput {
        sine: trimmed(&pass.sine, lookback)?,
        lead_sine: trimmed(&pass.lead_sine, lookback)?,
    })
}

/// Instantaneous trendline under the global configuration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` for an empty series.
pub fn ht_trendline<T: SeriesElement>(data: &[T]) -> Result<Vec<T>> {
    ht_trendline_with(&settings::snapshot(), data)
}

/// Instantaneous trendline under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` for an empty series.
pub fn ht_trendline_with<T: SeriesElement>(config: &Settings, data: &[T]) -> Result<Vec<T>> {
    validate_series(data)?;
    let lookback = ht_trendline_lookback_with(config);
    if data.len() <= lookback {
        return Ok(Vec::new());
    }
    let pass = hilbert_pass(data)?;
    trimmed(&pass.trendline, lookback)
}

/// Trend-versus-cycle flag (1 trend, 0 cycle) under the global
/// configuration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` for an empty series.
pub fn ht_trendmode<T: SeriesElement>(data: &[T]) -> Result<Vec<i32>> {
    ht_trendmode_with(&settings::snapshot(), data)
}

/// Trend-versus-cycle flag under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` for an empty series.
pub fn ht_trendmode_with<T: SeriesElement>(config: &Settings, data: &[T]) -> Result<Vec<i32>> {
    validate_series(data)?;
    let lookback = ht_trendmode_lookback_with(config);
    if data.len() <= lookback {
        return Ok(Vec::new());
    }
    let pass = hilbert_pass(data)?;
    let mut out = alloc_int_series(data.len() - lookback, 0_i32)?;
    out.copy_from_slice(&pass.trend_mode[lookback..]);
    Ok(out)
}
