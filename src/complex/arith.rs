//! Add, subtract and multiply on complex scalars.
//!
//! Products are formed in `T::Wide`. The cross terms of a complex product can
//! exceed the product width only when every component sits at `T::MIN`; the
//! plain kernels wrap in that case and the `_sat` kernels clamp.

use num_traits::{Saturating, WrappingAdd, WrappingSub};

use super::Complex;
use crate::fixed::SignedFixed;
use crate::fixed_ops::{saturate, shr, truncate};

/// Component-wise wrapping addition.
#[inline]
pub fn add<T: SignedFixed>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    Complex::new(a.re.wrapping_add(&b.re), a.im.wrapping_add(&b.im))
}

/// Component-wise wrapping subtraction.
#[inline]
pub fn sub<T: SignedFixed>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    Complex::new(a.re.wrapping_sub(&b.re), a.im.wrapping_sub(&b.im))
}

/// Component-wise saturating addition.
#[inline]
pub fn add_sat<T: SignedFixed>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    Complex::new(a.re.saturating_add(b.re), a.im.saturating_add(b.im))
}

/// `a * b` rescaled by `radix`, wrapping on overflow.
#[inline]
pub fn mul<T: SignedFixed>(a: Complex<T>, b: Complex<T>, radix: u32) -> Complex<T> {
    let (re, im) = product(a, b);
    Complex::new(truncate(shr(re, radix)), truncate(shr(im, radix)))
}

/// `a * b` rescaled by `radix`, saturated to `T`.
#[inline]
pub fn mul_sat<T: SignedFixed>(a: Complex<T>, b: Complex<T>, radix: u32) -> Complex<T> {
    let (re, im) = product_sat(a, b);
    Complex::new(saturate(shr(re, radix)), saturate(shr(im, radix)))
}

/// `a * conj(b)` rescaled by `radix`, wrapping on overflow.
#[inline]
pub fn mul_conj<T: SignedFixed>(a: Complex<T>, b: Complex<T>, radix: u32) -> Complex<T> {
    let (ar, ai) = (a.re.widen(), a.im.widen());
    let (br, bi) = (b.re.widen(), b.im.widen());
    let re = (ar * br).wrapping_add(&(ai * bi));
    let im = (ai * br).wrapping_sub(&(ar * bi));
    Complex::new(truncate(shr(re, radix)), truncate(shr(im, radix)))
}

/// `acc + ((a * b) >> radix)` with the sum formed in `T::Wide` and each
/// component saturated to `T`.
#[inline]
pub fn mac_sat<T: SignedFixed>(
    acc: Complex<T>,
    a: Complex<T>,
    b: Complex<T>,
    radix: u32,
) -> Complex<T> {
    let (re, im) = product_sat(a, b);
    Complex::new(
        saturate(acc.re.widen().saturating_add(shr(re, radix))),
        saturate(acc.im.widen().saturating_add(shr(im, radix))),
    )
}

/// Exact product components at radix 2R, wrapping in the product type.
#[inline]
pub(crate) fn product<T: SignedFixed>(a: Complex<T>, b: Complex<T>) -> (T::Wide, T::Wide) {
    let (ar, ai) = (a.re.widen(), a.im.widen());
    let (br, bi) = (b.re.widen(), b.im.widen());
    (
        (ar * br).wrapping_sub(&(ai * bi)),
        (ar * bi).wrapping_add(&(ai * br)),
    )
}

#[inline]
fn product_sat<T: SignedFixed>(a: Complex<T>, b: Complex<T>) -> (T::Wide, T::Wide) {
    let (ar, ai) = (a.re.widen(), a.im.widen());
    let (br, bi) = (b.re.widen(), b.im.widen());
    (
        (ar * br).saturating_sub(ai * bi),
        (ar * bi).saturating_add(ai * br),
    )
}
