//! Commonly used types and functions for convenient importing.
//!
//! ```
//! use tacore::prelude::*;
//!
//! let close = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let fast = ema(&close, 3).unwrap();
//! let bands = bbands(&close, 5, 2.0, 2.0, MaType::Sma).unwrap();
//! assert_eq!(bands.middle.len(), close.len() - 4);
//! let _ = fast;
//! ```

pub use crate::error::{last_error_code, Error, ErrorCode, Result};
pub use crate::settings::{CompatibilityMode, MaType, Settings, UnstableIndicator};
pub use crate::traits::SeriesElement;

pub use crate::indicators::{
    ad, ad_osc, adx, adxr, apo, aroon, aroon_osc, atr, avg_price, bbands, beta, bop, cci, cmo,
    correl, dema, dx, ema, ema_wilder, ht_dc_period, ht_dc_phase, ht_phasor, ht_sine,
    ht_trendline, ht_trendmode, kama, linearreg, linearreg_angle, linearreg_intercept,
    linearreg_slope, ma, macd, macd_ext, macd_fix, mama, mavp, max, max_index, med_price, mfi,
    midpoint, midprice, min, min_index, min_max, min_max_index, minus_di, minus_dm, mom, natr,
    obv, plus_di, plus_dm, ppo, roc, roc_p, roc_r, roc_r100, rsi, sar, sar_ext, sma, stddev,
    stoch, stoch_fast, stoch_rsi, sum, t3, tema, trima, trix, true_range, tsf, typ_price, ultosc,
    var, wcl_price, willr, wma,
};

pub use crate::indicators::{
    AroonOutput, BbandsOutput, HtPhasorOutput, HtSineOutput, MacdOutput, MamaOutput,
    MinMaxIndexOutput, MinMaxOutput, StochOutput,
};

pub use crate::indicators::candlestick::{
    PATTERN_BEARISH, PATTERN_BEARISH_CONFIRMED, PATTERN_BULLISH, PATTERN_BULLISH_CONFIRMED,
    PATTERN_NONE,
};
