//! Candlestick recognizer behavior over realistic and degenerate bars.

mod common;

use common::fixture;
use tacore::indicators::candlestick::{
    cdl_belt_hold, cdl_doji, cdl_dragonfly_doji, cdl_engulfing, cdl_evening_star,
    cdl_gravestone_doji, cdl_hammer, cdl_harami, cdl_hikkake, cdl_long_legged_doji,
    cdl_marubozu, cdl_morning_star, cdl_piercing, cdl_rickshaw_man, cdl_shooting_star,
    cdl_spinning_top, cdl_three_black_crows, cdl_three_white_soldiers, PATTERN_BEARISH,
    PATTERN_BEARISH_CONFIRMED, PATTERN_BULLISH, PATTERN_BULLISH_CONFIRMED, PATTERN_NONE,
};

#[test]
fn test_flat_bars_classify_as_doji_family_without_error() {
    // A run of perfectly flat bars (open = high = low = close)
    let flat = vec![50.0_f64; 8];

    let doji = cdl_doji(&flat, &flat, &flat, &flat).unwrap();
    assert_eq!(doji.len(), 8);
    // Every flat bar is a doji: non-zero signal, no panic, no error
    assert!(doji.iter().all(|&v| v == PATTERN_BULLISH));

    // The long-legged variant must also tolerate zero ranges (and report
    // nothing, since there are no shadows at all)
    let legged = cdl_long_legged_doji(&flat, &flat, &flat, &flat).unwrap();
    assert!(legged.iter().all(|&v| v == PATTERN_NONE));

    // Shape patterns must simply not fire
    assert!(cdl_marubozu(&flat, &flat, &flat, &flat)
        .unwrap()
        .iter()
        .all(|&v| v == PATTERN_NONE));
    assert!(cdl_engulfing(&flat, &flat, &flat, &flat)
        .unwrap()
        .iter()
        .all(|&v| v == PATTERN_NONE));
}

#[test]
fn test_single_flat_bar_input() {
    let flat = [42.0_f64];
    let out = cdl_doji(&flat, &flat, &flat, &flat).unwrap();
    assert_eq!(out, vec![PATTERN_BULLISH]);
}

#[test]
fn test_outputs_confined_to_documented_values() {
    let f = fixture();
    let plain = [
        cdl_doji(&f.open, &f.high, &f.low, &f.close).unwrap(),
        cdl_dragonfly_doji(&f.open, &f.high, &f.low, &f.close).unwrap(),
        cdl_gravestone_doji(&f.open, &f.high, &f.low, &f.close).unwrap(),
        cdl_rickshaw_man(&f.open, &f.high, &f.low, &f.close).unwrap(),
        cdl_spinning_top(&f.open, &f.high, &f.low, &f.close).unwrap(),
        cdl_marubozu(&f.open, &f.high, &f.low, &f.close).unwrap(),
        cdl_belt_hold(&f.open, &f.high, &f.low, &f.close).unwrap(),
        cdl_hammer(&f.open, &f.high, &f.low, &f.close).unwrap(),
        cdl_shooting_star(&f.open, &f.high, &f.low, &f.close).unwrap(),
        cdl_engulfing(&f.open, &f.high, &f.low, &f.close).unwrap(),
        cdl_harami(&f.open, &f.high, &f.low, &f.close).unwrap(),
        cdl_piercing(&f.open, &f.high, &f.low, &f.close).unwrap(),
        cdl_morning_star(&f.open, &f.high, &f.low, &f.close).unwrap(),
        cdl_evening_star(&f.open, &f.high, &f.low, &f.close).unwrap(),
        cdl_three_white_soldiers(&f.open, &f.high, &f.low, &f.close).unwrap(),
        cdl_three_black_crows(&f.open, &f.high, &f.low, &f.close).unwrap(),
    ];
    for series in &plain {
        for &v in series {
            assert!(
                v == PATTERN_NONE || v == PATTERN_BULLISH || v == PATTERN_BEARISH,
                "unexpected signal {v}"
            );
        }
    }

    // Hikkake additionally emits confirmed ±200 values
    let hikkake = cdl_hikkake(&f.open, &f.high, &f.low, &f.close).unwrap();
    for &v in &hikkake {
        assert!(
            v == PATTERN_NONE
                || v == PATTERN_BULLISH
                || v == PATTERN_BEARISH
                || v == PATTERN_BULLISH_CONFIRMED
                || v == PATTERN_BEARISH_CONFIRMED,
            "unexpected hikkake signal {v}"
        );
    }
}

#[test]
fn test_lookback_trims_output() {
    let f = fixture();
    let n = f.close.len();
    assert_eq!(cdl_doji(&f.open, &f.high, &f.low, &f.close).unwrap().len(), n);
    assert_eq!(
        cdl_engulfing(&f.open, &f.high, &f.low, &f.close).unwrap().len(),
        n - 1
    );
    assert_eq!(
        cdl_morning_star(&f.open, &f.high, &f.low, &f.close).unwrap().len(),
        n - 2
    );
    assert_eq!(
        cdl_hikkake(&f.open, &f.high, &f.low, &f.close).unwrap().len(),
        n - 5
    );
}

#[test]
fn test_fixture_scenario_bullish_engulfing() {
    // Splice a textbook bullish engulfing onto quiet bars
    let open = vec![100.0, 100.0, 100.0, 101.0, 99.5];
    let high = vec![100.6, 100.6, 100.6, 101.5, 102.5];
    let low = vec![99.4, 99.4, 99.4, 99.6, 99.0];
    let close = vec![100.4, 99.6, 100.4, 100.0, 102.2];
    let out = cdl_engulfing(&open, &high, &low, &close).unwrap();
    assert_eq!(*out.last().unwrap(), PATTERN_BULLISH);
    // And the bearish patterns stay silent on it
    let crows = cdl_three_black_crows(&open, &high, &low, &close).unwrap();
    assert!(crows.iter().all(|&v| v == PATTERN_NONE));
}

#[test]
fn test_length_mismatch_is_rejected() {
    let a = [1.0_f64, 2.0];
    let b = [1.0_f64];
    assert!(cdl_doji(&a, &a, &a, &b).is_err());
    assert!(cdl_harami(&a, &b, &a, &a).is_err());
}
