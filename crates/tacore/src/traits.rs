//! Core traits and input validation for tacore.
//!
//! The primary trait is [`SeriesElement`], a common interface for numeric
//! operations on time-series samples that abstracts over `f32` and `f64`.
//! The module also hosts the standalone validation functions every indicator
//! runs before computing: period range checks, empty-input checks, and
//! equal-length checks for parallel OHLCV series.
//!
//! # Example
//!
//! ```
//! use tacore::traits::{SeriesElement, validate_series, validate_period};
//!
//! fn window_mean<T: SeriesElement>(data: &[T], period: usize) -> tacore::error::Result<T> {
//!     validate_period(period, 2)?;
//!     validate_series(data)?;
//!     let period_t = T::from_usize(period)?;
//!     let sum = data.iter().take(period).fold(T::zero(), |acc, &x| acc + x);
//!     Ok(sum / period_t)
//! }
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0];
//! assert!((window_mean(&data, 3).unwrap() - 2.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// Smallest accepted windowing period.
pub const MIN_PERIOD: usize = 2;

/// Largest accepted windowing period.
pub const MAX_PERIOD: usize = 100_000;

/// A trait for types that can be used as samples in a data series.
///
/// Extends `num_traits::Float` with fallible constructors for the parameter
/// conversions indicators need, and the small integer constants that appear
/// throughout oscillator formulas.
///
/// Blanket-implemented for every type satisfying the bounds, in practice
/// `f32` and `f64`.
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Returns the constant 2 as this type.
    #[inline]
    #[must_use]
    fn two() -> Self {
        // 2 is representable in every Float type
        <Self as NumCast>::from(2).unwrap()
    }

    /// Returns the constant 4 as this type.
    #[inline]
    #[must_use]
    fn four() -> Self {
        <Self as NumCast>::from(4).unwrap()
    }

    /// Returns the constant 100 as this type.
    ///
    /// Used for the percentage scaling in RSI, Stochastic, Williams %R and
    /// relatives.
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        <Self as NumCast>::from(100).unwrap()
    }

    /// Returns the constant 50 as this type.
    #[inline]
    #[must_use]
    fn fifty() -> Self {
        <Self as NumCast>::from(50).unwrap()
    }

    /// Converts an `f64` constant, mapping unrepresentable values to NaN.
    ///
    /// For in-range literal constants (thresholds, filter coefficients) this
    /// is infallible; the NaN fallback keeps call sites free of `Result`
    /// plumbing.
    #[inline]
    #[must_use]
    fn constant(value: f64) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::nan)
    }
}

impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Validates that a period lies within `[min, MAX_PERIOD]`.
///
/// `min` is 2 for windowed reductions and 1 for the momentum-style
/// single-offset periods (`mom`, `roc`).
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is outside the range.
#[inline]
pub fn validate_period(period: usize, min: usize) -> Result<()> {
    if period < min {
        return Err(Error::InvalidPeriod {
            period,
            reason: if min <= 1 {
                "period must be at least 1"
            } else {
                "period must be at least 2"
            },
        }
        .record());
    }
    if period > MAX_PERIOD {
        return Err(Error::InvalidPeriod {
            period,
            reason: "period exceeds the maximum of 100000",
        }
        .record());
    }
    Ok(())
}

/// Validates that a single input series is non-empty.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if the series is empty.
#[inline]
pub fn validate_series<T: SeriesElement>(data: &[T]) -> Result<()> {
    if data.is_empty() {
        return Err(Error::EmptyInput.record());
    }
    Ok(())
}

/// Validates that two parallel series are non-empty and of equal length.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch`.
#[inline]
pub fn validate_pair<T: SeriesElement>(a: &[T], b: &[T]) -> Result<()> {
    validate_series(a)?;
    if b.len() != a.len() {
        return Err(Error::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        }
        .record());
    }
    Ok(())
}

/// Validates high/low/close series: non-empty, all the same length.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch`.
#[inline]
pub fn validate_hlc<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<()> {
    validate_pair(high, low)?;
    validate_pair(high, close)
}

/// Validates open/high/low/close series: non-empty, all the same length.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch`.
#[inline]
pub fn validate_ohlc<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
) -> Result<()> {
    validate_pair(open, high)?;
    validate_pair(open, low)?;
    validate_pair(open, close)
}

/// Validates high/low/close/volume series: non-empty, all the same length.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::LengthMismatch`.
#[inline]
pub fn validate_hlcv<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    volume: &[T],
) -> Result<()> {
    validate_hlc(high, low, close)?;
    validate_pair(high, volume)
}
