//! Error types for tacore.
//!
//! Every fallible engine operation returns [`Result<T>`]. Validation happens
//! before any computation begins, so a failed call never produces partial
//! output. Domain-level floating-point issues (division by zero, inverse
//! trigonometry outside its domain) are *not* errors: they propagate as
//! NaN/Inf per IEEE-754 semantics.
//!
//! Alongside the structured [`Error`] enum, the engine exposes a closed
//! [`ErrorCode`] vocabulary for callers that need a flat status signal (FFI
//! shims, bindings). [`Error::code`] maps every variant onto it, and
//! [`last_error_code`] reads the code of the most recent failure
//! process-wide.

use std::sync::atomic::{AtomicU8, Ordering};

use thiserror::Error;

/// The main error type for tacore operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An input series is empty.
    #[error("empty input: no data provided")]
    EmptyInput,

    /// The period parameter is outside its documented valid range.
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// A non-period numeric parameter is outside its documented valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Description of why the value is invalid.
        reason: &'static str,
    },

    /// Parallel input series have different lengths.
    ///
    /// All series passed to a single call (e.g. the open/high/low/close of
    /// one OHLCV bar set) must describe the same bars.
    #[error("mismatched input lengths: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Length of the first series, taken as the reference.
        expected: usize,
        /// Length of the series that disagreed.
        actual: usize,
    },

    /// Failed to convert a numeric value to the series element type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },

    /// An output buffer could not be allocated.
    ///
    /// Reported distinctly from parameter misuse so callers can tell
    /// resource exhaustion apart from a bad call.
    #[error("failed to allocate output buffer of {elements} elements")]
    AllocationFailed {
        /// Number of elements the failed allocation asked for.
        elements: usize,
    },

    /// A requested start index lies outside the input series.
    #[error("start index {index} is out of range for length {len}")]
    OutOfRangeStartIndex {
        /// The offending index.
        index: usize,
        /// Length of the series it was checked against.
        len: usize,
    },

    /// A requested end index lies outside the input series or before the
    /// start index.
    #[error("end index {index} is out of range for length {len}")]
    OutOfRangeEndIndex {
        /// The offending index.
        index: usize,
        /// Length of the series it was checked against.
        len: usize,
    },

    /// The requested operation or combination of options is not supported.
    #[error("not supported: {context}")]
    NotSupported {
        /// Description of the unsupported request.
        context: &'static str,
    },

    /// An internal invariant was violated. Indicates a bug in the engine.
    #[error("internal error: {context}")]
    Internal {
        /// Description of the violated invariant.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the tacore [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Flat status vocabulary for the engine boundary.
///
/// This is the closed set a binding layer consumes; richer context lives in
/// the [`Error`] variants themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCode {
    /// The call completed without error.
    Success = 0,
    /// An input or parameter failed validation.
    BadParameter = 1,
    /// An output buffer could not be allocated.
    AllocationError = 2,
    /// A start index was out of range.
    OutOfRangeStartIndex = 3,
    /// An end index was out of range.
    OutOfRangeEndIndex = 4,
    /// The requested operation is not supported.
    NotSupported = 5,
    /// An engine invariant was violated.
    InternalError = 6,
    /// The failure could not be classified.
    UnknownError = 7,
}

impl ErrorCode {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Success,
            1 => Self::BadParameter,
            2 => Self::AllocationError,
            3 => Self::OutOfRangeStartIndex,
            4 => Self::OutOfRangeEndIndex,
            5 => Self::NotSupported,
            6 => Self::InternalError,
            _ => Self::UnknownError,
        }
    }
}

impl Error {
    /// Maps this error onto the flat [`ErrorCode`] vocabulary.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyInput
            | Self::InvalidPeriod { .. }
            | Self::InvalidParameter { .. }
            | Self::LengthMismatch { .. }
            | Self::NumericConversion { .. } => ErrorCode::BadParameter,
            Self::AllocationFailed { .. } => ErrorCode::AllocationError,
            Self::OutOfRangeStartIndex { .. } => ErrorCode::OutOfRangeStartIndex,
            Self::OutOfRangeEndIndex { .. } => ErrorCode::OutOfRangeEndIndex,
            Self::NotSupported { .. } => ErrorCode::NotSupported,
            Self::Internal { .. } => ErrorCode::InternalError,
        }
    }

    /// Records this error's code in the process-wide last-error slot and
    /// returns the error unchanged.
    ///
    /// The central validators call this, so errors surfaced through the
    /// public API are visible to [`last_error_code`] without each indicator
    /// doing its own bookkeeping.
    #[must_use]
    pub(crate) fn record(self) -> Self {
        LAST_ERROR.store(self.code() as u8, Ordering::Relaxed);
        self
    }
}

static LAST_ERROR: AtomicU8 = AtomicU8::new(ErrorCode::Success as u8);

/// Returns the code of the most recent engine error, process-wide.
///
/// [`ErrorCode::Success`] until the first failure. The value is advisory —
/// the `Result` returned by each call is the authoritative signal — and it
/// is not reset by subsequent successful calls.
#[must_use]
pub fn last_error_code() -> ErrorCode {
    ErrorCode::from_u8(LAST_ERROR.load(Ordering::Relaxed))
}
