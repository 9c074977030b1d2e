//! Reference recomputation checks: indicator outputs recomputed
//! independently, straightforwardly, and compared within tolerance.

mod common;

use common::{approx_eq, fixture, LOOSE_EPSILON};
use tacore::indicators::{
    ema, max_index, min_index, rsi, sma, typ_price, vector_add, vector_sub, wma,
};

#[test]
fn test_sma_equals_window_mean_on_fixture() {
    let f = fixture();
    for period in [2usize, 5, 30] {
        let out = sma(&f.close, period).unwrap();
        assert_eq!(out.len(), f.close.len() - (period - 1));
        for (i, &v) in out.iter().enumerate() {
            let mean: f64 = f.close[i..i + period].iter().sum::<f64>() / period as f64;
            assert!(
                approx_eq(v, mean, 1e-9),
                "period {period}, index {i}: {v} vs {mean}"
            );
        }
    }
}

#[test]
fn test_ema_is_idempotent_across_invocations() {
    let f = fixture();
    let first = ema(&f.close, 21).unwrap();
    let second = ema(&f.close, 21).unwrap();
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.to_bits(), b.to_bits(), "EMA must be bit-identical on re-invocation");
    }
}

#[test]
fn test_add_sub_round_trip() {
    let f = fixture();
    let diff = vector_sub(&f.high, &f.low).unwrap();
    let back = vector_add(&diff, &f.low).unwrap();
    for (i, (a, b)) in back.iter().zip(&f.high).enumerate() {
        assert!(approx_eq(*a, *b, 1e-9), "index {i}");
    }
}

#[test]
fn test_max_index_tie_break_prefers_most_recent() {
    // Two equal maxima at indices 0 and 2: index 2 must win
    let series = [5.0_f64, 3.0, 5.0, 1.0];
    assert_eq!(max_index(&series, 4).unwrap(), vec![2]);

    // Same for minima
    let series = [1.0_f64, 4.0, 1.0, 9.0];
    assert_eq!(min_index(&series, 4).unwrap(), vec![2]);

    // Rolling: later equal values keep replacing earlier ones
    let series = [7.0_f64, 7.0, 7.0, 7.0, 7.0];
    assert_eq!(max_index(&series, 3).unwrap(), vec![2, 3, 4]);
}

#[test]
fn test_rsi_matches_wilder_reference_on_fixture() {
    let f = fixture();
    let period = 14;
    let out = rsi(&f.close, period).unwrap();

    // Straightforward Wilder recomputation
    let close = &f.close;
    let mut gain = 0.0;
    let mut loss = 0.0;
    for i in 1..=period {
        let d = close[i] - close[i - 1];
        if d > 0.0 {
            gain += d;
        } else {
            loss -= d;
        }
    }
    let mut avg_gain = gain / period as f64;
    let mut avg_loss = loss / period as f64;
    let rs = |g: f64, l: f64| if g + l == 0.0 { 0.0 } else { 100.0 * g / (g + l) };

    let mut expected = vec![rs(avg_gain, avg_loss)];
    for i in (period + 1)..close.len() {
        let d = close[i] - close[i - 1];
        let (g, l) = if d > 0.0 { (d, 0.0) } else { (0.0, -d) };
        avg_gain = (avg_gain * (period - 1) as f64 + g) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + l) / period as f64;
        expected.push(rs(avg_gain, avg_loss));
    }

    assert_eq!(out.len(), expected.len());
    for (i, (a, b)) in out.iter().zip(&expected).enumerate() {
        assert!(
            approx_eq(*a, *b, LOOSE_EPSILON),
            "index {i}: {a} vs reference {b}"
        );
    }
}

#[test]
fn test_wma_matches_direct_weights_on_fixture() {
    let f = fixture();
    let period = 9;
    let out = wma(&f.close, period).unwrap();
    let total = (period * (period + 1) / 2) as f64;
    for (i, &v) in out.iter().enumerate() {
        let mut direct = 0.0;
        for j in 0..period {
            direct += f.close[i + j] * (j + 1) as f64;
        }
        assert!(approx_eq(v, direct / total, 1e-9), "index {i}");
    }
}

#[test]
fn test_typ_price_reference() {
    let f = fixture();
    let out = typ_price(&f.high, &f.low, &f.close).unwrap();
    for i in 0..f.close.len() {
        let expected = (f.high[i] + f.low[i] + f.close[i]) / 3.0;
        assert!(approx_eq(out[i], expected, 1e-12));
    }
}
