//! Low-level shared algorithms used by multiple indicators.

pub mod rolling_extrema;
