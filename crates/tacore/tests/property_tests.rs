//! Property-based tests: invariants that must hold for arbitrary inputs.

mod common;

use proptest::prelude::*;
use tacore::indicators::{
    ema, max, min, rsi, sma, stoch_fast, vector_add, vector_sub, willr,
};
use tacore::MaType;

fn arb_price_series(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0..1000.0_f64, min_len..=max_len)
}

fn arb_ohlc(min_len: usize, max_len: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>, Vec<f64>)> {
    prop::collection::vec((1.0..1000.0_f64, 0.0..0.1_f64, 0.0..0.1_f64), min_len..=max_len)
        .prop_map(|bars| {
            let mut high = Vec::with_capacity(bars.len());
            let mut low = Vec::with_capacity(bars.len());
            let mut close = Vec::with_capacity(bars.len());
            for (base, up, down) in bars {
                high.push(base * (1.0 + up));
                low.push(base * (1.0 - down));
                close.push(base);
            }
            (high, low, close)
        })
}

proptest! {
    #[test]
    fn prop_add_sub_round_trip(a in arb_price_series(1, 200), b in arb_price_series(1, 200)) {
        let len = a.len().min(b.len());
        let a = &a[..len];
        let b = &b[..len];
        let diff = vector_sub(a, b).unwrap();
        let back = vector_add(&diff, b).unwrap();
        for (x, y) in back.iter().zip(a) {
            prop_assert!((x - y).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_output_length_is_input_minus_lookback(
        data in arb_price_series(2, 300),
        period in 2usize..30,
    ) {
        let out = sma(&data, period).unwrap();
        prop_assert_eq!(out.len(), data.len().saturating_sub(period - 1));

        let out = ema(&data, period).unwrap();
        prop_assert_eq!(out.len(), data.len().saturating_sub(period - 1));
    }

    #[test]
    fn prop_rsi_bounded(data in arb_price_series(20, 300), period in 2usize..15) {
        for v in rsi(&data, period).unwrap() {
            prop_assert!((0.0..=100.0).contains(&v));
        }
    }

    #[test]
    fn prop_min_never_exceeds_max(data in arb_price_series(5, 300), period in 2usize..5) {
        let lo = min(&data, period).unwrap();
        let hi = max(&data, period).unwrap();
        for (a, b) in lo.iter().zip(&hi) {
            prop_assert!(a <= b);
        }
    }

    #[test]
    fn prop_sma_stays_within_data_envelope(data in arb_price_series(10, 300), period in 2usize..10) {
        let floor = data.iter().cloned().fold(f64::MAX, f64::min);
        let ceil = data.iter().cloned().fold(f64::MIN, f64::max);
        for v in sma(&data, period).unwrap() {
            prop_assert!(v >= floor - 1e-9 && v <= ceil + 1e-9);
        }
    }

    #[test]
    fn prop_stochastic_and_willr_bounded((high, low, close) in arb_ohlc(10, 200)) {
        let st = stoch_fast(&high, &low, &close, 5, 3, MaType::Sma).unwrap();
        for v in st.k.iter().chain(&st.d) {
            prop_assert!((-1e-9..=100.0 + 1e-9).contains(v));
        }
        for v in willr(&high, &low, &close, 5).unwrap() {
            prop_assert!((-100.0 - 1e-9..=1e-9).contains(&v));
        }
    }
}
