//! Shared test utilities: float comparison helpers and the deterministic
//! 258-bar OHLCV fixture used by the reference suites.

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for accumulated floating-point operations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality; two NaN values compare equal for test purposes.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Number of bars in the fixture series.
#[allow(dead_code)]
pub const FIXTURE_LEN: usize = 258;

/// A deterministic OHLCV bar set.
#[allow(dead_code)]
pub struct Fixture {
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub volume: Vec<f64>,
}

/// xorshift64* keeps the fixture reproducible without external crates.
fn xorshift(state: &mut u64) -> f64 {
    let mut x = *state;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    *state = x;
    let bits = x.wrapping_mul(0x2545_F491_4F6C_DD1D);
    // Map the top 53 bits onto [0, 1)
    (bits >> 11) as f64 / (1u64 << 53) as f64
}

/// Builds the 258-bar fixture: a seeded random walk with a gentle drift
/// and a cyclic component, with highs/lows bracketing each close.
#[allow(dead_code)]
#[must_use]
pub fn fixture() -> Fixture {
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    let mut close = Vec::with_capacity(FIXTURE_LEN);
    let mut level = 91.5_f64;
    for i in 0..FIXTURE_LEN {
        let shock = (xorshift(&mut state) - 0.5) * 2.4;
        let cycle = (i as f64 * 0.12).sin() * 1.1;
        level = (level + 0.035 + shock + cycle * 0.08).max(5.0);
        close.push(level);
    }

    let mut open = Vec::with_capacity(FIXTURE_LEN);
    let mut high = Vec::with_capacity(FIXTURE_LEN);
    let mut low = Vec::with_capacity(FIXTURE_LEN);
    let mut volume = Vec::with_capacity(FIXTURE_LEN);
    for i in 0..FIXTURE_LEN {
        let prev = if i == 0 { close[0] } else { close[i - 1] };
        let o = prev + (xorshift(&mut state) - 0.5) * 0.6;
        let span_up = xorshift(&mut state) * 0.9;
        let span_down = xorshift(&mut state) * 0.9;
        let h = close[i].max(o) + span_up;
        let l = close[i].min(o) - span_down;
        open.push(o);
        high.push(h);
        low.push(l);
        volume.push(4000.0 + xorshift(&mut state) * 6000.0);
    }

    Fixture {
        open,
        high,
        low,
        close,
        volume,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_is_deterministic_and_well_formed() {
        let a = fixture();
        let b = fixture();
        assert_eq!(a.close.len(), FIXTURE_LEN);
        for i in 0..FIXTURE_LEN {
            assert_eq!(a.close[i].to_bits(), b.close[i].to_bits());
            assert!(a.high[i] >= a.low[i]);
            assert!(a.high[i] >= a.close[i] && a.low[i] <= a.close[i]);
            assert!(a.high[i] >= a.open[i] && a.low[i] <= a.open[i]);
            assert!(a.volume[i] > 0.0);
        }
    }
}
