//! Shared Hilbert Transform pass used by the HT_* cycle indicators and MAMA.
//!
//! Implements John Ehlers' homodyne-discriminator approach to measuring the
//! dominant market cycle:
//!
//! 1. Smooth price with a 4-bar WMA.
//! 2. Detrend it with the one-sided Hilbert filter
//!    `0.0962·x[i] + 0.5769·x[i-2] − 0.5769·x[i-4] − 0.0962·x[i-6]`,
//!    amplitude-corrected by the previous bar's period.
//! 3. Build in-phase (`i1`) and quadrature (`q1`) components, advance both
//!    90° with the same filter, and form the homodyne products.
//! 4. The discriminator's `atan(im/re)` yields the instantaneous period,
//!    rate-limited to [0.67×, 1.5×] of its prior value, clamped to [6, 50]
//!    bars, and double-smoothed (0.2, then 0.33).
//!
//! From the smoothed dominant cycle the pass derives the cycle phase (a
//! discrete Fourier projection of smoothed price over one cycle), the sine /
//! lead-sine pair, the instantaneous trendline (price average over one
//! cycle, WMA4-smoothed) and the trend-versus-cycle flag.
//!
//! Everything is computed in one forward sweep over full-length working
//! arrays; the public indicators trim their documented lookback off the
//! front.

use crate::error::Result;
use crate::traits::{validate_series, SeriesElement};
use crate::utils::{alloc_int_series, alloc_series};

/// Warm-up bars before the phasor components are meaningful.
pub const HT_PHASOR_LOOKBACK: usize = 32;

/// Warm-up bars before the phase-derived outputs are meaningful.
pub const HT_PHASE_LOOKBACK: usize = 63;

/// All per-bar outputs of one Hilbert Transform sweep.
///
/// Vectors have the input length; entries before the relevant warm-up are
/// transient filter state, and the public HT_* functions never expose them.
#[derive(Debug, Clone)]
pub struct HilbertPass<T> {
    /// Smoothed dominant cycle period, in bars.
    pub smooth_period: Vec<T>,
    /// Dominant cycle phase, in degrees.
    pub dc_phase: Vec<T>,
    /// In-phase component of the phasor.
    pub i1: Vec<T>,
    /// Quadrature component of the phasor.
    pub q1: Vec<T>,
    /// Sine of the dominant cycle phase.
    pub sine: Vec<T>,
    /// Sine of the phase led by 45 degrees.
    pub lead_sine: Vec<T>,
    /// Instantaneous trendline.
    pub trendline: Vec<T>,
    /// 1 when the market is in trend mode, 0 in cycle mode.
    pub trend_mode: Vec<i32>,
    /// 4-bar WMA smoothed price (input to the detrender).
    pub smooth_price: Vec<T>,
}

/// Runs the full Hilbert Transform sweep over `data`.
///
/// # Errors
///
/// Returns `Error::EmptyInput` for an empty series, or
/// `Error::AllocationFailed` if the working arrays cannot be allocated.
#[allow(clippy::too_many_lines)]
pub fn hilbert_pass<T: SeriesElement>(data: &[T]) -> Result<HilbertPass<T>> {
    validate_series(data)?;
    let n = data.len();

    let mut smooth_period = alloc_series::<T>(n)?;
    let mut dc_phase = alloc_series::<T>(n)?;
    let mut i1 = alloc_series::<T>(n)?;
    let mut q1 = alloc_series::<T>(n)?;
    let mut sine = alloc_series::<T>(n)?;
    let mut lead_sine = alloc_series::<T>(n)?;
    let mut trendline = alloc_series::<T>(n)?;
    let mut trend_mode = alloc_int_series(n, 0_i32)?;
    let mut smooth = alloc_series::<T>(n)?;

    let mut detrender = vec![T::zero(); n];
    let mut ji = vec![T::zero(); n];
    let mut jq = vec![T::zero(); n];
    let mut i2 = vec![T::zero(); n];
    let mut q2 = vec![T::zero(); n];
    let mut re = vec![T::zero(); n];
    let mut im = vec![T::zero(); n];
    let mut period = vec![T::zero(); n];
    let mut it_trend = vec![T::zero(); n];

    let zero = T::zero();
    let a = T::constant(0.0962);
    let b = T::constant(0.5769);
    let smooth_coef = T::constant(0.2);
    let smooth_rest = T::constant(0.8);
    let period_coef = T::constant(0.33);
    let period_rest = T::constant(0.67);
    let min_period = T::constant(6.0);
    let max_period = T::constant(50.0);
    let two_pi = T::constant(2.0 * std::f64::consts::PI);
    let deg_per_rad = T::constant(180.0 / std::f64::consts::PI);
    let rad_per_deg = T::constant(std::f64::consts::PI / 180.0);

    // Zero-index fills so the first six bars have defined state
    for i in 0..n.min(6) {
        smooth[i] = data[i];
        period[i] = min_period;
        smooth_period[i] = min_period;
        dc_phase[i] = zero;
        i1[i] = zero;
        q1[i] = zero;
        sine[i] = zero;
        lead_sine[i] = zero;
        trendline[i] = data[i];
        it_trend[i] = data[i];
    }

    // 4-bar WMA price smoothing
    for i in 3..n {
        smooth[i] = (T::four() * data[i]
            + T::constant(3.0) * data[i - 1]
            + T::two() * data[i - 2]
            + data[i - 3])
            / T::constant(10.0);
    }

    let mut days_in_trend: usize = 0;

    for i in 6..n {
        let adj = T::constant(0.075) * period[i - 1] + T::constant(0.54);

        detrender[i] =
            (a * smooth[i] + b * smooth[i - 2] - b * smooth[i - 4] - a * smooth[i - 6]) * adj;

        // In-phase and quadrature, then advance both by 90 degrees
        q1[i] = (a * detrender[i] + b * detrender[i - 2]
            - b * detrender[i - 4]
            - a * detrender[i - 6])
            * adj;
        i1[i] = detrender[i - 3];
        ji[i] = (a * i1[i] + b * i1[i - 2] - b * i1[i - 4] - a * i1[i - 6]) * adj;
        jq[i] = (a * q1[i] + b * q1[i - 2] - b * q1[i - 4] - a * q1[i - 6]) * adj;

        // Phasor addition and component smoothing
        i2[i] = smooth_coef * (i1[i] - jq[i]) + smooth_rest * i2[i - 1];
        q2[i] = smooth_coef * (q1[i] + ji[i]) + smooth_rest * q2[i - 1];

        // Homodyne discriminator
        re[i] = smooth_coef * (i2[i] * i2[i - 1] + q2[i] * q2[i - 1]) + smooth_rest * re[i - 1];
        im[i] = smooth_coef * (i2[i] * q2[i - 1] - q2[i] * i2[i - 1]) + smooth_rest * im[i - 1];

        let mut p = if im[i] != zero && re[i] != zero {
            two_pi / (im[i] / re[i]).atan()
        } else {
            period[i - 1]
        };
        // Rate-limit against the previous period, then clamp
        let upper = T::constant(1.5) * period[i - 1];
        let lower = T::constant(0.67) * period[i - 1];
        if p > upper {
            p = upper;
        } else if p < lower {
            p = lower;
        }
        p = p.max(min_period).min(max_period);
        period[i] = smooth_coef * p + smooth_rest * period[i - 1];
        smooth_period[i] = period_coef * period[i] + period_rest * smooth_period[i - 1];

        // Dominant cycle phase: project smoothed price onto one cycle
        let dc_bars = smooth_period[i]
            .to_f64()
            .map_or(6usize, |v| v.floor() as usize)
            .clamp(1, i + 1)
            .min(50);
        let dc_bars_t = T::from_usize(dc_bars)?;
        let mut real_part = zero;
        let mut imag_part = zero;
        for j in 0..dc_bars {
            let angle = two_pi * T::from_usize(j)? / dc_bars_t;
            real_part = real_part + angle.sin() * smooth[i - j];
            imag_part = imag_part + angle.cos() * smooth[i - j];
        }
        let mut phase = if imag_part.abs() > zero {
            (real_part / imag_part).atan() * deg_per_rad
        } else {
            dc_phase[i - 1]
        };
        if imag_part < zero {
            phase = phase + T::constant(180.0);
        }
        phase = phase + T::constant(90.0);
        // Compensate the WMA lag at the dominant frequency
        phase = phase + T::constant(360.0) / dc_bars_t;
        if phase > T::constant(315.0) {
            phase = phase - T::constant(360.0);
        }
        dc_phase[i] = phase;

        sine[i] = (phase * rad_per_deg).sin();
        lead_sine[i] = ((phase + T::constant(45.0)) * rad_per_deg).sin();

        // Instantaneous trendline: price average over one dominant cycle,
        // then a 4-bar WMA
        let mut cycle_sum = zero;
        for j in 0..dc_bars {
            cycle_sum = cycle_sum + data[i - j];
        }
        it_trend[i] = cycle_sum / dc_bars_t;
        trendline[i] = if i >= 3 {
            (T::four() * it_trend[i]
                + T::constant(3.0) * it_trend[i - 1]
                + T::two() * it_trend[i - 2]
                + it_trend[i - 3])
                / T::constant(10.0)
        } else {
            it_trend[i]
        };

        // Trend vs cycle decision
        let mut trend = 1_i32;
        let crossed = (sine[i] > lead_sine[i]) != (sine[i - 1] > lead_sine[i - 1]);
        if crossed {
            days_in_trend = 0;
            trend = 0;
        }
        days_in_trend += 1;
        if T::from_usize(days_in_trend)? < T::constant(0.5) * smooth_period[i] {
            trend = 0;
        }
        // A phase advancing at roughly the cycle rate means cycle mode
        let delta_phase = dc_phase[i] - dc_phase[i - 1];
        if smooth_period[i] != zero {
            let expected = T::constant(360.0) / smooth_period[i];
            if delta_phase > T::constant(0.67) * expected
                && delta_phase < T::constant(1.5) * expected
            {
                trend = 0;
            }
        }
        // Price well off the trendline forces trend mode
        if trendline[i] != zero
            && ((smooth[i] - trendline[i]) / trendline[i]).abs() >= T::constant(0.015)
        {
            trend = 1;
        }
        trend_mode[i] = trend;
    }

    Ok(HilbertPass {
        smooth_period,
        dc_phase,
        i1,
        q1,
        sine,
        lead_sine,
        trendline,
        trend_mode,
        smooth_price: smooth,
    })
}
