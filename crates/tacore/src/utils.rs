//! Shared utility functions: float comparison and output allocation.

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point
/// operations.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other, or if
/// both are NaN (for testing convenience).
///
/// # Example
///
/// ```
/// use tacore::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Relative approximate equality check, appropriate when magnitudes vary.
#[inline]
#[must_use]
pub fn approx_eq_relative<T: SeriesElement>(a: T, b: T, rel_tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    let diff = (a - b).abs();
    let max_abs = a.abs().max(b.abs());
    if max_abs == T::zero() {
        return diff == T::zero();
    }
    diff / max_abs < rel_tolerance
}

/// Counts NaN values in a series.
#[must_use]
pub fn count_nans<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().filter(|x| x.is_nan()).count()
}

/// Allocates an output series of `len` elements initialized to NaN.
///
/// Uses `try_reserve_exact` so exhaustion surfaces as a distinct
/// [`Error::AllocationFailed`] instead of aborting the process.
///
/// # Errors
///
/// Returns `Error::AllocationFailed` if the buffer cannot be reserved.
pub fn alloc_series<T: SeriesElement>(len: usize) -> Result<Vec<T>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed { elements: len }.record())?;
    out.resize(len, T::nan());
    Ok(out)
}

/// Allocates an integer output series of `len` elements initialized to
/// `fill`.
///
/// # Errors
///
/// Returns `Error::AllocationFailed` if the buffer cannot be reserved.
pub fn alloc_int_series<I: Copy>(len: usize, fill: I) -> Result<Vec<I>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed { elements: len }.record())?;
    out.resize(len, fill);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0_f64, 1.0 + 1e-12, EPSILON));
        assert!(!approx_eq(1.0_f64, 1.1, EPSILON));
        assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
        assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
    }

    #[test]
    fn test_approx_eq_relative() {
        assert!(approx_eq_relative(1e10_f64, 1e10 + 1.0, 1e-9));
        assert!(!approx_eq_relative(1.0_f64, 2.0, 1e-9));
        assert!(approx_eq_relative(0.0_f64, 0.0, 1e-9));
    }

    #[test]
    fn test_count_nans() {
        let data = [1.0_f64, f64::NAN, 3.0, f64::NAN];
        assert_eq!(count_nans(&data), 2);
    }

    #[test]
    fn test_alloc_series() {
        let out: Vec<f64> = alloc_series(4).unwrap();
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|x| x.is_nan()));

        let empty: Vec<f64> = alloc_series(0).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_alloc_int_series() {
        let out = alloc_int_series(3, 0_i32).unwrap();
        assert_eq!(out, vec![0, 0, 0]);
    }
}
