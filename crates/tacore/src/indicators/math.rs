//! Element-wise vector math transforms and operators.
//!
//! These are the leaf operations of the engine: each applies a pure scalar
//! function to every sample of one series (or combines two equal-length
//! series pairwise) and has no lookback, so the output always has the input
//! length. Domain violations (`vector_asin` outside [-1, 1], `vector_ln` of
//! a negative, division by zero) follow IEEE-754: the affected sample
//! becomes NaN or ±Inf and the call still succeeds.
//!
//! # Example
//!
//! ```
//! use tacore::indicators::math::{vector_add, vector_sub};
//!
//! let a = vec![3.0_f64, 4.0];
//! let b = vec![1.0_f64, 2.5];
//! let diff = vector_sub(&a, &b).unwrap();
//! let back = vector_add(&diff, &b).unwrap();
//! assert!((back[0] - a[0]).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::traits::{validate_pair, validate_series, SeriesElement};
use crate::utils::alloc_series;

/// Lookback of every vector math operation: always 0.
#[inline]
#[must_use]
pub const fn vector_lookback() -> usize {
    0
}

macro_rules! unary_vector_op {
    ($(#[$doc:meta])* $name:ident, $op:ident) => {
        $(#[$doc])*
        ///
        /// # Errors
        ///
        /// Returns `Error::EmptyInput` if `data` is empty, or
        /// `Error::AllocationFailed` if the output cannot be allocated.
        pub fn $name<T: SeriesElement>(data: &[T]) -> Result<Vec<T>> {
            validate_series(data)?;
            let mut out = alloc_series(data.len())?;
            for (o, &x) in out.iter_mut().zip(data) {
                *o = x.$op();
            }
            Ok(out)
        }
    };
}

unary_vector_op!(
    /// Vector inverse cosine, element-wise. Inputs outside [-1, 1] yield NaN.
    vector_acos, acos
);
unary_vector_op!(
    /// Vector inverse sine, element-wise. Inputs outside [-1, 1] yield NaN.
    vector_asin, asin
);
unary_vector_op!(
    /// Vector inverse tangent, element-wise.
    vector_atan, atan
);
unary_vector_op!(
    /// Vector ceiling, element-wise.
    vector_ceil, ceil
);
unary_vector_op!(
    /// Vector cosine, element-wise (input in radians).
    vector_cos, cos
);
unary_vector_op!(
    /// Vector hyperbolic cosine, element-wise.
    vector_cosh, cosh
);
unary_vector_op!(
    /// Vector exponential, element-wise.
    vector_exp, exp
);
unary_vector_op!(
    /// Vector floor, element-wise.
    vector_floor, floor
);
unary_vector_op!(
    /// Vector natural logarithm, element-wise. Non-positive inputs yield
    /// NaN or -Inf.
    vector_ln, ln
);
unary_vector_op!(
    /// Vector base-10 logarithm, element-wise. Non-positive inputs yield
    /// NaN or -Inf.
    vector_log10, log10
);
unary_vector_op!(
    /// Vector sine, element-wise (input in radians).
    vector_sin, sin
);
unary_vector_op!(
    /// Vector hyperbolic sine, element-wise.
    vector_sinh, sinh
);
unary_vector_op!(
    /// Vector square root, element-wise. Negative inputs yield NaN.
    vector_sqrt, sqrt
);
unary_vector_op!(
    /// Vector tangent, element-wise (input in radians).
    vector_tan, tan
);
unary_vector_op!(
    /// Vector hyperbolic tangent, element-wise.
    vector_tanh, tanh
);

macro_rules! binary_vector_op {
    ($(#[$doc:meta])* $name:ident, $op:tt) => {
        $(#[$doc])*
        ///
        /// # Errors
        ///
        /// Returns `Error::EmptyInput` if the inputs are empty,
        /// `Error::LengthMismatch` if their lengths differ, or
        /// `Error::AllocationFailed` if the output cannot be allocated.
        pub fn $name<T: SeriesElement>(a: &[T], b: &[T]) -> Result<Vec<T>> {
            validate_pair(a, b)?;
            let mut out = alloc_series(a.len())?;
            for i in 0..a.len() {
                out[i] = a[i] $op b[i];
            }
            Ok(out)
        }
    };
}

binary_vector_op!(
    /// Vector addition, element-wise.
    vector_add, +
);
binary_vector_op!(
    /// Vector subtraction, element-wise.
    vector_sub, -
);
binary_vector_op!(
    /// Vector multiplication, element-wise.
    vector_mult, *
);
binary_vector_op!(
    /// Vector division, element-wise. Division by zero yields ±Inf (or NaN
    /// for 0/0) per IEEE-754; the call still succeeds.
    vector_div, /
);
