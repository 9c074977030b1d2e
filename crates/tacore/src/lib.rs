//! tacore: a technical-analysis indicator engine.
//!
//! This crate computes moving averages, oscillators, windowed statistics,
//! Hilbert-transform cycle measures and candlestick pattern signals over
//! OHLCV time series. It is a pure computation library: no I/O, no
//! threads, no wire formats — series in, series out.
//!
//! # Conventions
//!
//! - Inputs are slices of `f32`/`f64` (anything implementing
//!   [`traits::SeriesElement`]); index 0 is the earliest bar, and parallel
//!   OHLCV series must have equal lengths.
//! - Outputs are freshly allocated and **trimmed by the lookback**: an
//!   N-period SMA over n bars yields `n - (N - 1)` values, and an input no
//!   longer than the lookback yields an empty output rather than an error.
//! - Indicators with recursive warm-up consult the process-wide
//!   [`settings`] (unstable periods, compatibility mode); each has a
//!   `*_with` variant taking an explicit [`settings::Settings`] instead.
//! - Validation failures are reported through [`error::Error`] before any
//!   computation; numeric domain issues inside a computation follow
//!   IEEE-754 (NaN/Inf propagate through the output).
//!
//! # Quick start
//!
//! ```
//! use tacore::indicators::{sma, rsi, sma_lookback};
//!
//! let close = vec![44.0_f64, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0];
//!
//! let ma = sma(&close, 5).unwrap();
//! assert_eq!(ma.len(), close.len() - sma_lookback(5));
//!
//! let momentum = rsi(&close, 5).unwrap();
//! assert!(momentum.iter().all(|v| (0.0..=100.0).contains(v)));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::many_single_char_names)]

pub mod error;
pub mod indicators;
pub mod kernels;
pub mod prelude;
pub mod settings;
pub mod traits;
pub mod utils;

pub use error::{last_error_code, Error, ErrorCode, Result};
pub use settings::{CompatibilityMode, MaType, Settings, UnstableIndicator};
pub use traits::SeriesElement;
pub use utils::{approx_eq, approx_eq_relative, count_nans, EPSILON, LOOSE_EPSILON};
