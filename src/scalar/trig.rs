//! Table-free sine and cosine.
//!
//! Angles are normalised so that `±(1 << radix)` is `±pi`. The sine is a
//! Bhaskara-style parabola `4x(1 - x)` refined by one correction term,
//! `y * (0.225 * (|y| - 1) + 1)`, all in fixed point. The result is within
//! about 0.0013 of the true value over the whole domain and exact at
//! `0`, `±0.5` and `±1.0`.
//!
//! `radix` must be at least 2 (the parabola is rescaled by `radix - 2`) and
//! at most `T::BITS - 2` so that `1.0` is representable.

use log::debug;
use num_traits::Zero;

use crate::error::KernelError;
use crate::fixed::SignedFixed;
use crate::fixed_ops::{check_radix, one_wide, qconst_wide, shr, truncate};

/// Correction coefficient of the refined parabola.
const CORRECTION: f64 = 0.225;

/// `sin(pi * x)` for `x` in `[-1.0, 1.0]` at `radix`.
#[inline]
pub fn sin<T: SignedFixed>(x: T, radix: u32) -> T {
    truncate(sin_wide::<T>(x.widen(), radix))
}

/// `cos(pi * x)` for `x` in `[-1.0, 1.0]` at `radix`.
///
/// Evaluated as the sine of `x + 0.5`, wrapped back into the domain when the
/// shifted angle passes `1.0`. Exactly `1.0` is not wrapped.
#[inline]
pub fn cos<T: SignedFixed>(x: T, radix: u32) -> T {
    let one = one_wide::<T>(radix);
    let mut shifted = x.widen() + (one >> 1);
    if shifted > one {
        shifted = shifted - (one << 1);
    }
    truncate(sin_wide::<T>(shifted, radix))
}

/// [`sin`] with the radix validated first.
pub fn try_sin<T: SignedFixed>(x: T, radix: u32) -> Result<T, KernelError> {
    check_trig_radix::<T>(radix)?;
    Ok(sin(x, radix))
}

/// [`cos`] with the radix validated first.
pub fn try_cos<T: SignedFixed>(x: T, radix: u32) -> Result<T, KernelError> {
    check_trig_radix::<T>(radix)?;
    Ok(cos(x, radix))
}

fn check_trig_radix<T: SignedFixed>(radix: u32) -> Result<(), KernelError> {
    check_radix::<T>(radix, 2).inspect_err(|err| debug!("trig kernel rejected: {err}"))
}

fn sin_wide<T: SignedFixed>(x: T::Wide, radix: u32) -> T::Wide {
    debug_assert!(
        (2..=T::max_radix()).contains(&radix),
        "radix {radix} outside the supported sine range"
    );
    let one = one_wide::<T>(radix);
    debug_assert!(x >= -one && x <= one);

    let y = if x < T::Wide::zero() {
        shr(x * (x + one), radix - 2)
    } else {
        shr(x * (one - x), radix - 2)
    };

    let distance = if y < T::Wide::zero() {
        -y - one
    } else {
        y - one
    };
    let gain = shr(distance * qconst_wide::<T::Wide>(CORRECTION, radix), radix) + one;

    shr(y * gain, radix)
}
