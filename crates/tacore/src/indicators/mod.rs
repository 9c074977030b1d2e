//! Technical analysis indicators.
//!
//! A flat library of stateless transforms over price/volume series, grouped
//! by category:
//!
//! - **Vector math** ([`math`]): element-wise transforms and operators, no
//!   lookback.
//! - **Windowed statistics** ([`minmax`], [`statistics`]): fixed-window
//!   reductions (extrema, sums, variance, regression).
//! - **Moving averages** ([`sma`], [`ema`], [`wma`], [`dema`], [`tema`],
//!   [`trima`], [`kama`], [`mama`], [`t3`], dispatched via [`ma`]).
//! - **Oscillators and composites** ([`macd`], [`rsi`], [`stochastic`],
//!   [`adx`], [`aroon`], [`bollinger`], [`cci`], [`mfi`], …).
//! - **Cycle analysis** ([`ht_core`], [`ht`]): the Hilbert Transform
//!   family.
//! - **Volume** ([`ad`], [`obv`]) and **price transforms**
//!   ([`price_transform`]).
//! - **Candlestick patterns** ([`candlestick`]): 61 window classifiers
//!   over OHLC bars.
//!
//! # Conventions
//!
//! Every indicator trims its output by its lookback: the first output
//! sample is the first fully-formed value, and `output.len() ==
//! input.len() - lookback` (empty, without error, when the input is too
//! short). Each module exposes its `*_lookback` alongside the transform.
//! Multi-output indicators return a named struct of equally trimmed
//! series. Indicators with warm-up state read the process-wide
//! configuration ([`crate::settings`]) and offer `*_with` variants for
//! explicit injection.

pub mod ad;
pub mod adx;
pub mod apo;
pub mod aroon;
pub mod atr;
pub mod bollinger;
pub mod bop;
pub mod candlestick;
pub mod cci;
pub mod cmo;
pub mod dema;
pub mod ema;
pub mod ht;
pub mod ht_core;
pub mod kama;
pub mod ma;
pub mod macd;
pub mod mama;
pub mod math;
pub mod mfi;
pub mod minmax;
pub mod mom;
pub mod obv;
pub mod price_transform;
pub mod roc;
pub mod rsi;
pub mod sar;
pub mod sma;
pub mod statistics;
pub mod stochastic;
pub mod stochrsi;
pub mod t3;
pub mod tema;
pub mod trima;
pub mod trix;
pub mod ultosc;
pub mod willr;
pub mod wma;

pub use ad::{ad, ad_lookback, ad_osc, ad_osc_lookback, ad_osc_with};
pub use adx::{
    adx, adx_lookback, adx_lookback_with, adx_with, adxr, adxr_lookback, adxr_lookback_with,
    adxr_with, dx, dx_lookback, dx_lookback_with, dx_with, minus_di, minus_di_lookback, minus_dm,
    minus_dm_lookback, plus_di, plus_di_lookback, plus_dm, plus_dm_lookback,
};
pub use apo::{apo, apo_lookback, ppo};
pub use aroon::{aroon, aroon_lookback, aroon_osc, AroonOutput};
pub use atr::{
    atr, atr_lookback, atr_lookback_with, atr_with, natr, natr_lookback, natr_lookback_with,
    natr_with, true_range, true_range_lookback,
};
pub use bollinger::{bbands, bbands_lookback, bbands_with, BbandsOutput};
pub use bop::{bop, bop_lookback};
pub use cci::{cci, cci_lookback};
pub use cmo::{cmo, cmo_lookback, cmo_lookback_with, cmo_with};
pub use dema::{dema, dema_lookback, dema_lookback_with, dema_with};
pub use ema::{
    ema, ema_lookback, ema_lookback_with, ema_wilder, ema_wilder_with, ema_with,
};
pub use ht::{
    ht_dc_period, ht_dc_period_lookback, ht_dc_period_with, ht_dc_phase, ht_dc_phase_lookback,
    ht_dc_phase_with, ht_phasor, ht_phasor_lookback, ht_phasor_with, ht_sine, ht_sine_lookback,
    ht_sine_with, ht_trendline, ht_trendline_lookback, ht_trendline_with, ht_trendmode,
    ht_trendmode_lookback, ht_trendmode_with, HtPhasorOutput, HtSineOutput,
};
pub use kama::{kama, kama_lookback, kama_lookback_with, kama_with};
pub use ma::{ma, ma_lookback, ma_lookback_with, ma_with, mavp, mavp_lookback};
pub use macd::{
    macd, macd_ext, macd_ext_lookback_with, macd_ext_with, macd_fix, macd_lookback, MacdOutput,
};
pub use mama::{mama, mama_full, mama_lookback, mama_lookback_with, mama_with, MamaOutput};
pub use math::{
    vector_acos, vector_add, vector_asin, vector_atan, vector_ceil, vector_cos, vector_cosh,
    vector_div, vector_exp, vector_floor, vector_ln, vector_log10, vector_lookback, vector_mult,
    vector_sin, vector_sinh, vector_sqrt, vector_sub, vector_tan, vector_tanh,
};
pub use mfi::{mfi, mfi_lookback, mfi_lookback_with, mfi_with};
pub use minmax::{
    max, max_index, midpoint, midprice, min, min_index, min_max, min_max_index, minmax_lookback,
    sum, MinMaxIndexOutput, MinMaxOutput,
};
pub use mom::{mom, mom_lookback};
pub use obv::{obv, obv_lookback};
pub use price_transform::{avg_price, med_price, price_transform_lookback, typ_price, wcl_price};
pub use roc::{roc, roc_lookback, roc_p, roc_r, roc_r100};
pub use rsi::{rsi, rsi_lookback, rsi_lookback_with, rsi_with};
pub use sar::{sar, sar_ext, sar_full, sar_lookback};
pub use sma::{sma, sma_lookback};
pub use statistics::{
    beta, beta_lookback, correl, linearreg, linearreg_angle, linearreg_intercept,
    linearreg_slope, statistics_lookback, stddev, stddev_sample, tsf, var, var_sample,
};
pub use stochastic::{
    stoch, stoch_fast, stoch_fast_lookback, stoch_fast_with, stoch_lookback, stoch_with,
    StochOutput,
};
pub use stochrsi::{stoch_rsi, stoch_rsi_lookback, stoch_rsi_lookback_with, stoch_rsi_with};
pub use t3::{t3, t3_full, t3_lookback, t3_lookback_with, t3_with};
pub use tema::{tema, tema_lookback, tema_lookback_with, tema_with};
pub use trima::{trima, trima_lookback};
pub use trix::{trix, trix_lookback, trix_lookback_with, trix_with};
pub use ultosc::{ultosc, ultosc_lookback};
pub use willr::{willr, willr_lookback};
pub use wma::{wma, wma_lookback};
