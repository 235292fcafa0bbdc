//! Integer and fixed-point square roots.
//!
//! The integer root is the classic digit-by-digit search: start from the
//! largest power of two not above the root, then try each lower bit once.
//! No division and no floating point, `O(bits)` iterations.

use num_traits::{PrimInt, Zero};

use crate::fixed::{Fixed, UnsignedFixed};
use crate::fixed_ops::saturate;

/// `floor(sqrt(x))` for any non-negative primitive integer.
///
/// Negative inputs return 0.
pub fn isqrt<W: PrimInt>(x: W) -> W {
    if x <= W::zero() {
        return W::zero();
    }

    let bits = (core::mem::size_of::<W>() * 8) as u32;
    let log2 = bits - 1 - x.leading_zeros();
    let mut y = W::one() << (log2 / 2) as usize;
    let mut step = y >> 1;

    while step > W::zero() {
        let candidate = y + step;
        // Only overflows for signed storage near the top of the range, where
        // the candidate is too large anyway.
        if let Some(square) = candidate.checked_mul(&candidate)
            && square <= x
        {
            y = candidate;
        }
        step = step >> 1;
    }

    y
}

/// `floor(sqrt(x))` narrowed to the half-width type.
#[inline]
pub fn isqrt_narrow<T: UnsignedFixed>(x: T) -> T::Half {
    isqrt(x).to_half()
}

/// Floor square root of a 32-bit value.
#[inline]
pub fn sqrt_u32(x: u32) -> u16 {
    isqrt_narrow(x)
}

/// Floor square root of a 64-bit value.
#[inline]
pub fn sqrt_u64(x: u64) -> u32 {
    isqrt_narrow(x)
}

/// Square root of a radix-R value, returned at the same radix.
///
/// The input is pre-shifted by `radix` in the product type so that the
/// integer root lands back on radix R. Negative inputs return 0.
pub fn sqrt<T: Fixed>(x: T, radix: u32) -> T {
    if x <= T::zero() {
        return T::zero();
    }
    precondition!(radix < T::BITS, "radix {radix} exceeds the product width");
    saturate(isqrt(x.widen() << radix as usize))
}
