//! Magnitude, normalisation and phase of complex scalars.

use num_traits::{Saturating, Zero};

use super::Complex;
use crate::fixed::SignedFixed;
use crate::fixed_ops::saturate;
use crate::scalar::{atan2, isqrt};

/// `re^2 + im^2` in the product type (radix 2R), saturating.
#[inline]
pub fn mag_sq<T: SignedFixed>(a: Complex<T>) -> T::Wide {
    let (re, im) = (a.re.widen(), a.im.widen());
    (re * re).saturating_add(im * im)
}

/// `floor(sqrt(re^2 + im^2))` at the input radix, saturated to `T`.
#[inline]
pub fn mag<T: SignedFixed>(a: Complex<T>) -> T {
    saturate(isqrt(mag_sq(a)))
}

/// Scales `a` to unit magnitude, returning `1.0` at `radix`.
///
/// The zero vector has no direction and is returned unchanged.
pub fn norm<T: SignedFixed>(a: Complex<T>, radix: u32) -> Complex<T> {
    precondition!(radix <= T::max_radix(), "radix {radix} leaves no room for 1.0");
    let m = isqrt(mag_sq(a));
    if m.is_zero() {
        return Complex::new(T::zero(), T::zero());
    }
    Complex::new(
        saturate((a.re.widen() << radix as usize) / m),
        saturate((a.im.widen() << radix as usize) / m),
    )
}

/// Phase of `a` normalised so that `1 << radix` is `pi`.
#[inline]
pub fn arg<T: SignedFixed>(a: Complex<T>, radix: u32) -> T {
    atan2(a.im, a.re, radix)
}
