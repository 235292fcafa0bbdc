//! Fixed-point values that carry their radix in the type.
//!
//! The free kernels take the radix as a runtime argument and trust the caller
//! to keep it consistent across a chain of calls. [`Q`] moves that convention
//! into the type system: only values with the same `R` combine through the
//! operators, and [`Q::rescale`] is the only way to change the radix.
//!
//! ```
//! use qkernels::Q;
//!
//! type Q14 = Q<i16, 14>;
//!
//! let a = Q14::from_f64(0.5);
//! let b = Q14::from_f64(0.75);
//! assert_eq!((a * b).to_f64(), 0.375);
//! assert_eq!(Q14::from_f64(-0.5).sin(), Q14::from_f64(-1.0));
//! assert_eq!(a.rescale::<8>(), Q::<i16, 8>::from_f64(0.5));
//! ```

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, WrappingAdd, WrappingSub, Zero};

use crate::fixed::{Fixed, SignedFixed, UnsignedFixed};
use crate::fixed_ops::{qconst, round_shift, to_f64};
use crate::scalar;

/// A `T` interpreted as `inner / 2^R`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Q<T, const R: u32> {
    pub inner: T,
}

impl<T, const R: u32> Q<T, R> {
    /// Number of fractional bits.
    pub const RADIX: u32 = R;

    /// Wraps a raw representation.
    #[inline]
    pub const fn new(inner: T) -> Self {
        Self { inner }
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Fixed, const R: u32> Q<T, R> {
    /// `1.0`, which must be representable (`R < T::BITS - 1` for signed storage).
    #[inline]
    pub fn one() -> Self {
        debug_assert!(R <= T::max_radix());
        Self::new(T::one() << R as usize)
    }

    /// Nearest representable value, saturating at the storage bounds.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self::new(qconst(value, R))
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        to_f64(self.inner, R)
    }

    /// Moves the binary point to `R2`, truncating toward negative infinity
    /// when bits are dropped and wrapping when they are added.
    #[inline]
    pub fn rescale<const R2: u32>(self) -> Q<T, R2> {
        Q::new(if R2 >= R {
            self.inner << (R2 - R) as usize
        } else {
            self.inner >> (R - R2) as usize
        })
    }

    /// Like [`Q::rescale`] but rounds half up when bits are dropped.
    #[inline]
    pub fn rescale_round<const R2: u32>(self) -> Q<T, R2> {
        if R2 >= R {
            self.rescale()
        } else {
            Q::new(round_shift(self.inner, R - R2))
        }
    }

    #[inline]
    #[must_use]
    pub fn add_sat(self, rhs: Self) -> Self {
        Self::new(scalar::add_sat(self.inner, rhs.inner))
    }

    #[inline]
    #[must_use]
    pub fn sub_sat(self, rhs: Self) -> Self {
        Self::new(scalar::sub_sat(self.inner, rhs.inner))
    }

    #[inline]
    #[must_use]
    pub fn mul_round(self, rhs: Self) -> Self {
        Self::new(scalar::mul_round(self.inner, rhs.inner, R))
    }

    #[inline]
    #[must_use]
    pub fn mul_sat(self, rhs: Self) -> Self {
        Self::new(scalar::mul_sat(self.inner, rhs.inner, R))
    }

    /// Exact product, at radix `2R`, in the product type.
    #[inline]
    pub fn mul_wide(self, rhs: Self) -> T::Wide {
        scalar::mul_wide(self.inner, rhs.inner)
    }

    #[inline]
    #[must_use]
    pub fn sqrt(self) -> Self {
        Self::new(scalar::sqrt(self.inner, R))
    }
}

impl<T: SignedFixed, const R: u32> Q<T, R> {
    /// `sin(pi * self)`.
    #[inline]
    #[must_use]
    pub fn sin(self) -> Self {
        Self::new(scalar::sin(self.inner, R))
    }

    /// `cos(pi * self)`.
    #[inline]
    #[must_use]
    pub fn cos(self) -> Self {
        Self::new(scalar::cos(self.inner, R))
    }

    /// `atan2(self, x) / pi`.
    #[inline]
    #[must_use]
    pub fn atan2(self, x: Self) -> Self {
        Self::new(scalar::atan2(self.inner, x.inner, R))
    }

    /// One EMA step toward `x` with smoothing coefficient `alpha`.
    #[inline]
    #[must_use]
    pub fn ema(self, x: Self, alpha: Self) -> Self {
        Self::new(scalar::ema(self.inner, x.inner, alpha.inner, R))
    }
}

impl<T: UnsignedFixed, const R: u32> Q<T, R> {
    /// `log2(self)` at the same radix, in signed 32-bit storage.
    #[inline]
    pub fn log2(self) -> Q<i32, R> {
        Q::new(scalar::log2(self.inner, R))
    }

    /// `ln(self)` at the same radix, in signed 32-bit storage.
    #[inline]
    pub fn ln(self) -> Q<i32, R> {
        Q::new(scalar::ln(self.inner, R))
    }

    /// `log10(self)` at the same radix, in signed 32-bit storage.
    #[inline]
    pub fn log10(self) -> Q<i32, R> {
        Q::new(scalar::log10(self.inner, R))
    }
}

impl<T: Fixed, const R: u32> Add for Q<T, R> {
    type Output = Self;

    /// Wrapping addition.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.inner.wrapping_add(&rhs.inner))
    }
}

impl<T: Fixed, const R: u32> Sub for Q<T, R> {
    type Output = Self;

    /// Wrapping subtraction.
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.inner.wrapping_sub(&rhs.inner))
    }
}

impl<T: SignedFixed, const R: u32> Neg for Q<T, R> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(T::zero().wrapping_sub(&self.inner))
    }
}

impl<T: Fixed, const R: u32> Mul for Q<T, R> {
    type Output = Self;

    /// Truncating, wrapping product.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(scalar::mul(self.inner, rhs.inner, R))
    }
}

impl<T: Fixed, const R: u32> Div for Q<T, R> {
    type Output = Self;

    /// Saturating quotient; see [`scalar::div`] for the zero divisor.
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(scalar::div(self.inner, rhs.inner, R))
    }
}

impl<T: Fixed, const R: u32> fmt::Display for Q<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::Q;
    use alloc::string::ToString;

    type Q14 = Q<i16, 14>;
    type Q16 = Q<u32, 16>;

    #[test]
    fn operators_stay_in_radix() {
        let a = Q14::from_f64(0.5);
        let b = Q14::from_f64(0.25);
        assert_eq!(a + b, Q14::from_f64(0.75));
        assert_eq!(a - b, b);
        assert_eq!(-a, Q14::from_f64(-0.5));
        assert_eq!(a * b, Q14::from_f64(0.125));
        assert_eq!(b / a, a);
        assert_eq!(Q14::one(), Q14::new(16_384));
    }

    #[test]
    fn saturating_helpers() {
        let big = Q14::from_f64(1.5);
        assert_eq!(big.add_sat(big), Q14::new(i16::MAX));
        assert_eq!(big.mul_sat(big), Q14::new(i16::MAX));
        assert_eq!((-big).sub_sat(big), Q14::new(i16::MIN));
        assert_eq!(Q::<i16, 1>::new(3).mul_round(Q::new(3)), Q::new(5));
    }

    #[test]
    fn rescale_moves_the_binary_point() {
        let value = Q::<i32, 16>::from_f64(-1.75);
        assert_eq!(value.rescale::<8>(), Q::<i32, 8>::from_f64(-1.75));
        assert_eq!(value.rescale::<20>().to_f64(), -1.75);
        assert_eq!(Q::<i32, 2>::new(-3).rescale::<1>(), Q::new(-2));
        assert_eq!(Q::<i32, 2>::new(-3).rescale_round::<1>(), Q::new(-1));
        assert_eq!(Q::<i32, 2>::new(3).rescale_round::<1>(), Q::new(2));
    }

    #[test]
    fn transcendental_methods() {
        assert_eq!(Q14::from_f64(0.5).cos(), Q14::new(0));
        assert_eq!(Q14::new(100).atan2(Q14::new(0)), Q14::from_f64(0.5));
        assert_eq!(Q16::from_f64(100.0).log10(), Q::<i32, 16>::from_f64(2.0));
        assert_eq!(Q16::from_f64(1.0).ln(), Q::new(0));
        assert_eq!(Q16::from_f64(8.0).log2(), Q::<i32, 16>::from_f64(3.0));
        assert_eq!(Q::<i32, 12>::from_f64(4.0).sqrt(), Q::from_f64(2.0));
        assert_eq!(Q14::new(0).ema(Q14::new(3), Q14::from_f64(0.5)), Q14::new(2));
    }

    #[test]
    fn display_shows_the_real_value() {
        assert_eq!(Q14::from_f64(-0.5).to_string(), "-0.5");
        assert_eq!(Q16::from_f64(2.25).to_string(), "2.25");
    }
}
