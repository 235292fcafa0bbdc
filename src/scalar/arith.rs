//! Multiply, divide and saturating add/subtract on real scalars.
//!
//! All products are formed exactly in `T::Wide` and rescaled by `radix`
//! before narrowing. The suffix of each kernel names how the narrowing
//! behaves: plain kernels truncate the shifted product and wrap, `_round`
//! kernels round half up before wrapping, `_sat` kernels clamp.

use num_traits::{Saturating, WrappingAdd, Zero};

use crate::fixed::Fixed;
use crate::fixed_ops::{round_shift, saturate, shr, truncate};

/// Saturating addition.
#[inline]
pub fn add_sat<T: Fixed>(a: T, b: T) -> T {
    a.saturating_add(b)
}

/// Saturating subtraction.
#[inline]
pub fn sub_sat<T: Fixed>(a: T, b: T) -> T {
    a.saturating_sub(b)
}

/// Full-precision product: two radix-R operands yield a radix-2R result.
#[inline]
pub fn mul_wide<T: Fixed>(a: T, b: T) -> T::Wide {
    a.widen() * b.widen()
}

/// `(a * b) >> radix`, wrapping on overflow.
#[inline]
pub fn mul<T: Fixed>(a: T, b: T, radix: u32) -> T {
    truncate(shr(mul_wide(a, b), radix))
}

/// `(a * b + 2^(radix-1)) >> radix`, wrapping on overflow.
#[inline]
pub fn mul_round<T: Fixed>(a: T, b: T, radix: u32) -> T {
    truncate(round_shift(mul_wide(a, b), radix))
}

/// `(a * b) >> radix`, saturated to `T`.
#[inline]
pub fn mul_sat<T: Fixed>(a: T, b: T, radix: u32) -> T {
    saturate(shr(mul_wide(a, b), radix))
}

/// Adds the full-precision product `a * b` to a product-width accumulator.
///
/// The accumulator keeps radix 2R; the caller rescales once at the end.
#[inline]
pub fn mac<T: Fixed>(acc: T::Wide, a: T, b: T) -> T::Wide {
    acc.wrapping_add(&mul_wide(a, b))
}

/// `acc + ((a * b) >> radix)`, with the sum formed in `T::Wide` and
/// saturated to `T`.
#[inline]
pub fn mac_sat<T: Fixed>(acc: T, a: T, b: T, radix: u32) -> T {
    let product = shr(mul_wide(a, b), radix);
    saturate(acc.widen().saturating_add(product))
}

/// `(a << radix) / b`, truncated toward zero and saturated to `T`.
///
/// Division by zero saturates toward the sign of the dividend; `0 / 0` is 0.
#[inline]
pub fn div<T: Fixed>(a: T, b: T, radix: u32) -> T {
    if b.is_zero() {
        return if a > T::zero() {
            T::max_value()
        } else if a < T::zero() {
            T::min_value()
        } else {
            T::zero()
        };
    }
    // `a.widen() << radix` fits for radix <= T::BITS - 1; beyond that the
    // caller asked for more fractional bits than the product type carries.
    precondition!(radix < T::BITS, "radix {radix} exceeds the product width");
    saturate((a.widen() << radix as usize) / b.widen())
}

/// `(a * a) >> radix`, wrapping on overflow.
#[inline]
pub fn square<T: Fixed>(a: T, radix: u32) -> T {
    mul(a, a, radix)
}

/// `(a * a) >> radix`, saturated to `T`.
#[inline]
pub fn square_sat<T: Fixed>(a: T, radix: u32) -> T {
    mul_sat(a, a, radix)
}
