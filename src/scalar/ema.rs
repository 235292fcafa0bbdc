//! Exponential moving average, a single-pole IIR smoother.
//!
//! `acc' = acc + round((alpha * (x - acc)) >> radix)` where `alpha` is a
//! radix-R coefficient in `[0, 1 << radix]`. The update always rounds half up.
//! The difference and product are formed in `T::Wide`, so the update cannot
//! overflow and the result always lies between `acc` and `x`.

use log::trace;
use num_traits::Zero;

use crate::fixed::SignedFixed;
use crate::fixed_ops::{qconst, round_shift, truncate};

/// One EMA step.
#[inline]
pub fn ema<T: SignedFixed>(acc: T, x: T, alpha: T, radix: u32) -> T {
    debug_assert!(alpha >= T::zero());
    let acc_wide = acc.widen();
    let delta = alpha.widen() * (x.widen() - acc_wide);
    truncate(acc_wide + round_shift(delta, radix))
}

/// Runs the recurrence over a frame of samples and returns the final
/// accumulator.
pub fn ema_frame<T: SignedFixed>(acc: T, x: &[T], alpha: T, radix: u32) -> T {
    x.iter().fold(acc, |state, &sample| ema(state, sample, alpha, radix))
}

/// Runs the recurrence over `x`, writing each intermediate accumulator to
/// `y`, and returns the final accumulator.
///
/// # Panics
/// Panics if `x` and `y` have different lengths.
pub fn ema_vec<T: SignedFixed>(acc: T, x: &[T], y: &mut [T], alpha: T, radix: u32) -> T {
    assert_eq!(
        x.len(),
        y.len(),
        "input and output slices must have identical lengths"
    );

    let mut state = acc;
    for (dst, &sample) in y.iter_mut().zip(x.iter()) {
        state = ema(state, sample, alpha, radix);
        *dst = state;
    }
    state
}

/// Smoothing coefficient for a time constant, `1 - exp(-1 / (time * rate))`,
/// quantised at `radix`.
///
/// This is a host-side helper for building the `alpha` constant; the kernels
/// themselves never touch floating point.
pub fn ema_alpha<T: SignedFixed>(time_constant_s: f64, sample_rate_hz: f64, radix: u32) -> T {
    let samples = time_constant_s * sample_rate_hz;
    let alpha = if samples > 0.0 {
        1.0 - libm::exp(-1.0 / samples)
    } else {
        1.0
    };
    trace!("ema alpha for tau={time_constant_s}s fs={sample_rate_hz}Hz: {alpha}");
    qconst(alpha, radix)
}
