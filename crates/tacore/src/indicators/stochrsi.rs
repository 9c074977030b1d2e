//! Stochastic RSI.
//!
//! Applies the fast stochastic to an RSI series instead of price, measuring
//! where RSI sits inside its own recent range. Twice removed from price, it
//! reacts faster than either parent indicator.
//!
//! Output is the fast %K/%D pair over `rsi(data, rsi_period)`, so the total
//! lookback is the RSI lookback (including the `StochRsi` unstable entry)
//! plus the stochastic stage.

use crate::error::Result;
use crate::indicators::ma::ma_lookback_with;
use crate::indicators::rsi::rsi_with;
use crate::indicators::stochastic::{stoch_fast_with, StochOutput};
use crate::settings::{self, MaType, Settings, UnstableIndicator};
use crate::traits::{validate_period, validate_series, SeriesElement};

/// Lookback of [`stoch_rsi`] under the global configuration.
#[inline]
#[must_use]
pub fn stoch_rsi_lookback(
    rsi_period: usize,
    fast_k_period: usize,
    fast_d_period: usize,
    fast_d_ma_type: MaType,
) -> usize {
    stoch_rsi_lookback_with(
        &settings::snapshot(),
        rsi_period,
        fast_k_period,
        fast_d_period,
        fast_d_ma_type,
    )
}

/// Lookback of [`stoch_rsi`] under an explicit configuration.
#[must_use]
pub fn stoch_rsi_lookback_with(
    config: &Settings,
    rsi_period: usize,
    fast_k_period: usize,
    fast_d_period: usize,
    fast_d_ma_type: MaType,
) -> usize {
    rsi_stage_lookback(config, rsi_period)
        + fast_k_period
        - 1
        + ma_lookback_with(config, fast_d_period, fast_d_ma_type)
}

/// RSI-stage lookback with the `StochRsi` unstable entry applied on top of
/// the plain RSI alignment.
fn rsi_stage_lookback(config: &Settings, rsi_period: usize) -> usize {
    let mut rsi_config = config.clone();
    rsi_config.set_unstable_period(
        UnstableIndicator::Rsi,
        config.unstable_period(UnstableIndicator::StochRsi),
    );
    crate::indicators::rsi::rsi_lookback_with(&rsi_config, rsi_period)
}

/// Computes the Stochastic RSI under the global configuration.
///
/// Conventional parameters: RSI 14, %K 5, %D 3 with SMA smoothing.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for periods outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn stoch_rsi<T: SeriesElement>(
    data: &[T],
    rsi_period: usize,
    fast_k_period: usize,
    fast_d_period: usize,
    fast_d_ma_type: MaType,
) -> Result<StochOutput<T>> {
    stoch_rsi_with(
        &settings::snapshot(),
        data,
        rsi_period,
        fast_k_period,
        fast_d_period,
        fast_d_ma_type,
    )
}

/// Computes the Stochastic RSI under an explicit configuration.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` for periods outside 2..=100000, or
/// `Error::EmptyInput` for an empty series.
pub fn stoch_rsi_with<T: SeriesElement>(
    config: &Settings,
    data: &[T],
    rsi_period: usize,
    fast_k_period: usize,
    fast_d_period: usize,
    fast_d_ma_type: MaType,
) -> Result<StochOutput<T>> {
    validate_period(rsi_period, 2)?;
    validate_period(fast_k_period, 2)?;
    validate_period(fast_d_period, 2)?;
    validate_series(data)?;

    let total =
        stoch_rsi_lookback_with(config, rsi_period, fast_k_period, fast_d_period, fast_d_ma_type);
    if data.len() <= total {
        return Ok(StochOutput {
            k: Vec::new(),
            d: Vec::new(),
        });
    }

    let mut rsi_config = config.clone();
    rsi_config.set_unstable_period(
        UnstableIndicator::Rsi,
        config.unstable_period(UnstableIndicator::StochRsi),
    );
    let rsi_series = rsi_with(&rsi_config, data, rsi_period)?;
    // The RSI series plays all three OHLC roles for the stochastic stage
    stoch_fast_with(
        config,
        &rsi_series,
        &rsi_series,
        &rsi_series,
        fast_k_period,
        fast_d_period,
        fast_d_ma_type,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::approx_eq;

    fn wavy() -> Vec<f64> {
        (0..60)
            .map(|i| 50.0 + 10.0 * (f64::from(i) * 0.5).sin() + f64::from(i % 7))
            .collect()
    }

    #[test]
    fn test_stoch_rsi_length() {
        let data = wavy();
        let out = stoch_rsi(&data, 14, 5, 3, MaType::Sma).unwrap();
        // 14 (RSI) + 4 (%K) + 2 (%D)
        assert_eq!(out.k.len(), data.len() - 20);
        assert_eq!(out.k.len(), out.d.len());
    }

    #[test]
    fn test_stoch_rsi_bounded() {
        let data = wavy();
        let out = stoch_rsi(&data, 10, 5, 3, MaType::Sma).unwrap();
        for v in out.k.iter().chain(&out.d) {
            assert!((0.0..=100.0).contains(v));
        }
    }

    #[test]
    fn test_stoch_rsi_hits_extremes_faster_than_rsi() {
        // A monotone run pins StochRSI to 100 even when RSI itself is lower
        let data: Vec<f64> = (0..40).map(|i| 10.0 + f64::from(i) * 0.5).collect();
        let out = stoch_rsi(&data, 10, 5, 3, MaType::Sma).unwrap();
        let last = out.k[out.k.len() - 1];
        // All-gain RSI is pinned at 100, flat across the window; the
        // midpoint rule reports 50 on a dead-flat range
        assert!(approx_eq(last, 50.0, 1e-9) || last >= 99.0);
    }

    #[test]
    fn test_stoch_rsi_unstable_entry_is_its_own() {
        let mut config = Settings::new();
        config.set_unstable_period(UnstableIndicator::StochRsi, 4);
        let data = wavy();
        let plain = stoch_rsi_with(&Settings::new(), &data, 10, 5, 3, MaType::Sma).unwrap();
        let trimmed = stoch_rsi_with(&config, &data, 10, 5, 3, MaType::Sma).unwrap();
        assert_eq!(plain.k.len(), trimmed.k.len() + 4);

        // The plain RSI entry must not affect StochRSI
        let mut rsi_config = Settings::new();
        rsi_config.set_unstable_period(UnstableIndicator::Rsi, 9);
        let via_rsi_entry = stoch_rsi_with(&rsi_config, &data, 10, 5, 3, MaType::Sma).unwrap();
        assert_eq!(via_rsi_entry.k.len(), plain.k.len());
    }

    #[test]
    fn test_stoch_rsi_short_input_empty() {
        let data = wavy();
        let out = stoch_rsi(&data[..20], 14, 5, 3, MaType::Sma).unwrap();
        assert!(out.k.is_empty());
    }
}
