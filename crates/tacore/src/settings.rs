//! Engine configuration: unstable periods, compatibility mode, MA selection.
//!
//! The engine carries exactly two pieces of mutable state, both process-wide
//! and both owned by this module: the **unstable-period table**, which adds
//! extra suppressed lookback to recursive indicators so their internal state
//! can warm up, and the **compatibility mode**, which selects between the
//! classic and Metastock output-alignment conventions.
//!
//! Both live in a [`Settings`] value. A global instance behind an `RwLock`
//! backs the module-level free functions ([`set_unstable_period`],
//! [`compatibility_mode`], …); indicators read a snapshot of it at call
//! time, so a configuration change affects subsequent calls and never a call
//! in flight. Code that wants isolation from the global table constructs its
//! own [`Settings`] and uses the `*_with` indicator variants instead.
//!
//! # Thread safety
//!
//! The table is a shared-read/exclusive-write resource. Concurrent indicator
//! calls are safe; configure once at startup, or serialize `set_*` calls
//! against in-flight reads if reconfiguring a live process.
//!
//! # Example
//!
//! ```
//! use tacore::settings::{self, Settings, UnstableIndicator};
//!
//! // Global path
//! settings::set_unstable_period(UnstableIndicator::Rsi, 5);
//! assert_eq!(settings::unstable_period(UnstableIndicator::Rsi), 5);
//! settings::set_unstable_period(UnstableIndicator::Rsi, 0);
//!
//! // Injected path: never touches the global table
//! let mut local = Settings::new();
//! local.set_unstable_period(UnstableIndicator::Rsi, 10);
//! assert_eq!(settings::unstable_period(UnstableIndicator::Rsi), 0);
//! ```

use std::sync::RwLock;

/// Indicators whose recursive state warms up over an unstable period.
///
/// Only these identifiers participate in the unstable-period table; every
/// other indicator's lookback is fully determined by its period parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum UnstableIndicator {
    /// Average Directional Movement Index.
    Adx,
    /// ADX Rating.
    Adxr,
    /// Average True Range.
    Atr,
    /// Chande Momentum Oscillator.
    Cmo,
    /// Directional Movement Index.
    Dx,
    /// Exponential Moving Average.
    Ema,
    /// Hilbert Transform - Dominant Cycle Period.
    HtDcPeriod,
    /// Hilbert Transform - Dominant Cycle Phase.
    HtDcPhase,
    /// Hilbert Transform - Phasor Components.
    HtPhasor,
    /// Hilbert Transform - SineWave.
    HtSine,
    /// Hilbert Transform - Instantaneous Trendline.
    HtTrendline,
    /// Hilbert Transform - Trend vs Cycle Mode.
    HtTrendmode,
    /// Kaufman Adaptive Moving Average.
    Kama,
    /// MESA Adaptive Moving Average.
    Mama,
    /// Money Flow Index.
    Mfi,
    /// Minus Directional Indicator.
    MinusDi,
    /// Minus Directional Movement.
    MinusDm,
    /// Normalized Average True Range.
    Natr,
    /// Plus Directional Indicator.
    PlusDi,
    /// Plus Directional Movement.
    PlusDm,
    /// Relative Strength Index.
    Rsi,
    /// Stochastic RSI.
    StochRsi,
    /// Triple Exponential Moving Average (T3).
    T3,
}

/// Number of entries in the unstable-period table.
const UNSTABLE_COUNT: usize = 23;

/// All unstable-period indicator identifiers, in table order.
pub const ALL_UNSTABLE_INDICATORS: [UnstableIndicator; UNSTABLE_COUNT] = [
    UnstableIndicator::Adx,
    UnstableIndicator::Adxr,
    UnstableIndicator::Atr,
    UnstableIndicator::Cmo,
    UnstableIndicator::Dx,
    UnstableIndicator::Ema,
    UnstableIndicator::HtDcPeriod,
    UnstableIndicator::HtDcPhase,
    UnstableIndicator::HtPhasor,
    UnstableIndicator::HtSine,
    UnstableIndicator::HtTrendline,
    UnstableIndicator::HtTrendmode,
    UnstableIndicator::Kama,
    UnstableIndicator::Mama,
    UnstableIndicator::Mfi,
    UnstableIndicator::MinusDi,
    UnstableIndicator::MinusDm,
    UnstableIndicator::Natr,
    UnstableIndicator::PlusDi,
    UnstableIndicator::PlusDm,
    UnstableIndicator::Rsi,
    UnstableIndicator::StochRsi,
    UnstableIndicator::T3,
];

/// Output-alignment convention for the lookback-sensitive indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompatibilityMode {
    /// Classic alignment: recursive seeds are windowed statistics over the
    /// first full period.
    #[default]
    Classic,
    /// Metastock alignment: affected indicators seed from the very first
    /// bar, which moves their first valid output one bar earlier (RSI, CMO)
    /// or changes the warm-up trajectory without moving it (EMA).
    Metastock,
}

/// Smoothing algorithm selector for indicators with a configurable
/// moving-average method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaType {
    /// Simple Moving Average.
    #[default]
    Sma,
    /// Exponential Moving Average.
    Ema,
    /// Weighted Moving Average.
    Wma,
    /// Double Exponential Moving Average.
    Dema,
    /// Triple Exponential Moving Average.
    Tema,
    /// Triangular Moving Average.
    Trima,
    /// Kaufman Adaptive Moving Average.
    Kama,
    /// MESA Adaptive Moving Average (MAMA line).
    Mama,
    /// Tillson T3 Moving Average.
    T3,
}

/// A full engine configuration: unstable-period table plus compatibility
/// mode.
///
/// `Settings::default()` is the all-zeros table in classic mode — the state
/// a fresh process observes through the global functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    unstable: [usize; UNSTABLE_COUNT],
    compatibility: CompatibilityMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            unstable: [0; UNSTABLE_COUNT],
            compatibility: CompatibilityMode::default(),
        }
    }
}

impl Settings {
    /// Creates a configuration with every unstable period at 0 and classic
    /// compatibility.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the unstable period configured for `indicator`.
    #[must_use]
    pub fn unstable_period(&self, indicator: UnstableIndicator) -> usize {
        self.unstable[indicator as usize]
    }

    /// Sets the unstable period for `indicator`.
    pub fn set_unstable_period(&mut self, indicator: UnstableIndicator, period: usize) {
        self.unstable[indicator as usize] = period;
    }

    /// Sets the same unstable period for every indicator in the table.
    pub fn set_unstable_period_all(&mut self, period: usize) {
        self.unstable = [period; UNSTABLE_COUNT];
    }

    /// Returns the configured compatibility mode.
    #[must_use]
    pub const fn compatibility_mode(&self) -> CompatibilityMode {
        self.compatibility
    }

    /// Sets the compatibility mode.
    pub fn set_compatibility_mode(&mut self, mode: CompatibilityMode) {
        self.compatibility = mode;
    }
}

static GLOBAL: RwLock<Settings> = RwLock::new(Settings {
    unstable: [0; UNSTABLE_COUNT],
    compatibility: CompatibilityMode::Classic,
});

/// Returns a snapshot of the global configuration.
///
/// Indicators called through the plain (non-`_with`) API read one snapshot
/// per call, so a call observes a consistent configuration even if another
/// thread reconfigures mid-flight.
#[must_use]
pub fn snapshot() -> Settings {
    GLOBAL
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .clone()
}

/// Reads the global unstable period for `indicator`.
#[must_use]
pub fn unstable_period(indicator: UnstableIndicator) -> usize {
    GLOBAL
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .unstable_period(indicator)
}

/// Sets the global unstable period for `indicator`.
pub fn set_unstable_period(indicator: UnstableIndicator, period: usize) {
    GLOBAL
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .set_unstable_period(indicator, period);
}

/// Sets the same global unstable period for every indicator in the table.
pub fn set_unstable_period_all(period: usize) {
    GLOBAL
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .set_unstable_period_all(period);
}

/// Reads the global compatibility mode.
#[must_use]
pub fn compatibility_mode() -> CompatibilityMode {
    GLOBAL
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .compatibility_mode()
}

/// Sets the global compatibility mode.
pub fn set_compatibility_mode(mode: CompatibilityMode) {
    GLOBAL
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .set_compatibility_mode(mode);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let s = Settings::new();
        for id in ALL_UNSTABLE_INDICATORS {
            assert_eq!(s.unstable_period(id), 0);
        }
        assert_eq!(s.compatibility_mode(), CompatibilityMode::Classic);
    }

    #[test]
    fn test_set_unstable_period_isolated() {
        let mut s = Settings::new();
        s.set_unstable_period(UnstableIndicator::Rsi, 7);
        assert_eq!(s.unstable_period(UnstableIndicator::Rsi), 7);
        // Every other entry untouched
        for id in ALL_UNSTABLE_INDICATORS {
            if id != UnstableIndicator::Rsi {
                assert_eq!(s.unstable_period(id), 0, "{id:?} changed unexpectedly");
            }
        }
    }

    #[test]
    fn test_set_unstable_period_all() {
        let mut s = Settings::new();
        s.set_unstable_period_all(3);
        for id in ALL_UNSTABLE_INDICATORS {
            assert_eq!(s.unstable_period(id), 3);
        }
    }

    #[test]
    fn test_compatibility_mode_roundtrip() {
        let mut s = Settings::new();
        s.set_compatibility_mode(CompatibilityMode::Metastock);
        assert_eq!(s.compatibility_mode(), CompatibilityMode::Metastock);
        s.set_compatibility_mode(CompatibilityMode::Classic);
        assert_eq!(s.compatibility_mode(), CompatibilityMode::Classic);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let snap = snapshot();
        // Mutating the snapshot must not touch the global table.
        let mut local = snap;
        local.set_unstable_period(UnstableIndicator::Kama, 99);
        assert_ne!(unstable_period(UnstableIndicator::Kama), 99);
    }

    #[test]
    fn test_ma_type_default() {
        assert_eq!(MaType::default(), MaType::Sma);
    }
}
