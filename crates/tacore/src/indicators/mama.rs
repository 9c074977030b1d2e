//! MESA Adaptive Moving Average (MAMA / FAMA).
//!
//! MAMA adapts its smoothing constant to the phase rate of change measured
//! by the Hilbert Transform: fast phase movement (a short cycle) tightens
//! the average onto price, slow movement relaxes it. FAMA is a half-speed
//! follower of MAMA.
//!
//! ```text
//! Δφ = max(phase[i-1] − phase[i], 1°)
//! α  = clamp(fast_limit / Δφ, slow_limit, fast_limit)
//! MAMA[i] = α·price[i] + (1 − α)·MAMA[i-1]
//! FAMA[i] = α/2·MAMA[i] + (1 − α/2)·FAMA[i-1]
//! ```
//!
//! Defaults: `fast_limit` 0.5, `slow_limit` 0.05. Lookback is the 32-bar
//! Hilbert warm-up plus the configured MAMA unstable period.

use crate::error::{Error, Result};
use crate::indicators::ht_core::{hilbert_pass, HT_PHASOR_LOOKBACK};
use crate::settings::{self, Settings, UnstableIndicator};
use crate::traits::{validate_series, SeriesElement};
use crate::utils::alloc_series;

/// Default fast limit.
pub const DEFAULT_FAST_LIMIT: f64 = 0.5;

/// Default slow limit.
pub const DEFAULT_SLOW_LIMIT: f64 = 0.05;

/// MAMA and FAMA lines.
#[derive(Debug, Clone)]
pub struct MamaOutput<T> {
    /// The adaptive average.
    pub mama: Vec<T>,
    /// The following (half-speed) average.
    pub fama: Vec<T>,
}

/// Lookback for MAMA under the global configuration:
/// `32 + unstable(Mama)`.
#[inline]
#[must_use]
pub fn mama_lookback() -> usize {
    mama_lookback_with(&settings::snapshot())
}

/// Lookback for MAMA under an explicit configuration.
#[inline]
#[must_use]
pub fn mama_lookback_with(config: &Settings) -> usize {
    HT_PHASOR_LOOKBACK + config.unstable_period(UnstableIndicator::Mama)
}

/// Computes MAMA/FAMA with default limits under the global configuration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` for an empty series.
pub fn mama<T: SeriesElement>(data: &[T]) -> Result<MamaOutput<T>> {
    mama_full(
        data,
        T::constant(DEFAULT_FAST_LIMIT),
        T::constant(DEFAULT_SLOW_LIMIT),
    )
}

/// Computes MAMA/FAMA with explicit limits under the global configuration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` for an empty series, or
/// `Error::InvalidParameter` if a limit is outside (0, 1) or the limits are
/// inverted.
pub fn mama_full<T: SeriesElement>(
    data: &[T],
    fast_limit: T,
    slow_limit: T,
) -> Result<MamaOutput<T>> {
    mama_with(&settings::snapshot(), data, fast_limit, slow_limit)
}

/// Computes MAMA/FAMA under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::EmptyInput` for an empty series, or
/// `Error::InvalidParameter` if a limit is outside (0, 1) or the limits are
/// inverted.
pub fn mama_with<T: SeriesElement>(
    config: &Settings,
    data: &[T],
    fast_limit: T,
    slow_limit: T,
) -> Result<MamaOutput<T>> {
    validate_series(data)?;
    if !(fast_limit > T::zero() && fast_limit < T::one()) {
        return Err(Error::InvalidParameter {
            name: "fast_limit",
            reason: "limit must be within (0, 1)",
        }
        .record());
    }
    if !(slow_limit > T::zero() && slow_limit < T::one()) {
        return Err(Error::InvalidParameter {
            name: "slow_limit",
            reason: "limit must be within (0, 1)",
        }
        .record());
    }
    if slow_limit > fast_limit {
        return Err(Error::InvalidParameter {
            name: "slow_limit",
            reason: "slow limit must not exceed the fast limit",
        }
        .record());
    }

    let lookback = mama_lookback_with(config);
    if data.len() <= lookback {
        return Ok(MamaOutput {
            mama: Vec::new(),
            fama: Vec::new(),
        });
    }

    let pass = hilbert_pass(data)?;
    let deg_per_rad = T::constant(180.0 / std::f64::consts::PI);
    let half = T::constant(0.5);
    let one_deg = T::one();

    let mut mama_line = alloc_series(data.len() - lookback)?;
    let mut fama_line = alloc_series(data.len() - lookback)?;

    let mut prev_phase = T::zero();
    let mut prev_mama = data[0];
    let mut prev_fama = data[0];
    for i in 1..data.len() {
        let phase = if pass.i1[i] != T::zero() {
            (pass.q1[i] / pass.i1[i]).atan() * deg_per_rad
        } else {
            prev_phase
        };
        let mut delta = prev_phase - phase;
        if delta < one_deg {
            delta = one_deg;
        }
        prev_phase = phase;

        let alpha = (fast_limit / delta).max(slow_limit).min(fast_limit);
        prev_mama = alpha * data[i] + (T::one() - alpha) * prev_mama;
        prev_fama = half * alpha * prev_mama + (T::one() - half * alpha) * prev_fama;

        if i >= lookback {
            mama_line[i - lookback] = prev_mama;
            fama_line[i - lookback] = prev_fama;
        }
    }

    Ok(MamaOutput {
        mama: mama_line,
        fama: fama_line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle_series(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| 100.0 + 8.0 * (2.0 * std::f64::consts::PI * i as f64 / 18.0).sin())
            .collect()
    }

    #[test]
    fn test_mama_lengths() {
        let data = cycle_series(120);
        let out = mama(&data).unwrap();
        assert_eq!(out.mama.len(), 120 - 32);
        assert_eq!(out.fama.len(), out.mama.len());
    }

    #[test]
    fn test_mama_limit_validation() {
        let data = cycle_series(80);
        assert!(matches!(
            mama_full(&data, 0.0, 0.05),
            Err(Error::InvalidParameter { name: "fast_limit", .. })
        ));
        assert!(matches!(
            mama_full(&data, 0.5, 1.5),
            Err(Error::InvalidParameter { name: "slow_limit", .. })
        ));
        assert!(matches!(
            mama_full(&data, 0.05, 0.5),
            Err(Error::InvalidParameter { name: "slow_limit", .. })
        ));
    }

    #[test]
    fn test_mama_tracks_price_band() {
        let data = cycle_series(200);
        let out = mama(&data).unwrap();
        // Both lines stay inside the series' value envelope
        for v in out.mama.iter().chain(&out.fama) {
            assert!(*v > 85.0 && *v < 115.0, "value {v}");
        }
    }

    #[test]
    fn test_fama_smoother_than_mama() {
        let data = cycle_series(250);
        let out = mama(&data).unwrap();
        let wiggle = |xs: &[f64]| {
            xs.windows(2).map(|w| (w[1] - w[0]).abs()).sum::<f64>()
        };
        assert!(wiggle(&out.fama) <= wiggle(&out.mama));
    }

    #[test]
    fn test_mama_short_input_empty() {
        let data = cycle_series(30);
        let out = mama(&data).unwrap();
        assert!(out.mama.is_empty());
        assert!(out.fama.is_empty());
    }

    #[test]
    fn test_mama_unstable_period() {
        let mut config = Settings::new();
        config.set_unstable_period(UnstableIndicator::Mama, 8);
        let data = cycle_series(120);
        let plain = mama_with(&Settings::new(), &data, 0.5, 0.05).unwrap();
        let trimmed = mama_with(&config, &data, 0.5, 0.05).unwrap();
        assert_eq!(plain.mama.len(), trimmed.mama.len() + 8);
        for (a, b) in plain.mama[8..].iter().zip(&trimmed.mama) {
            assert!((a - b).abs() < 1e-12);
        }
    }
}
