//! Complex fixed-point scalars.
//!
//! A [`Complex`] is an ordered `(re, im)` pair sharing one storage type and
//! one radix. No normalisation is enforced; magnitude and phase are derived
//! on demand by the kernels in [`magnitude`].

pub mod arith;
pub mod magnitude;

pub use arith::{add, add_sat, mac_sat, mul, mul_conj, mul_sat, sub};
pub use magnitude::{arg, mag, mag_sq, norm};

use num_traits::{WrappingSub, Zero};

use crate::fixed::SignedFixed;

/// A complex value stored as two fixed-point integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: SignedFixed> Complex<T> {
    /// Complex conjugate. Negating `T::MIN` wraps, as native negation would.
    #[inline]
    #[must_use]
    pub fn conj(self) -> Self {
        Self::new(self.re, T::zero().wrapping_sub(&self.im))
    }
}

impl<T> From<(T, T)> for Complex<T> {
    fn from((re, im): (T, T)) -> Self {
        Self::new(re, im)
    }
}

impl<T> From<Complex<T>> for (T, T) {
    fn from(value: Complex<T>) -> Self {
        (value.re, value.im)
    }
}

/// 16-bit complex storage.
pub type C16 = Complex<i16>;
/// 32-bit complex storage.
pub type C32 = Complex<i32>;

#[cfg(test)]
mod tests {
    use super::{C16, Complex};

    #[test]
    fn conj_negates_imaginary_part() {
        assert_eq!(C16::new(3, -4).conj(), C16::new(3, 4));
        assert_eq!(C16::new(0, i16::MIN).conj(), C16::new(0, i16::MIN));
    }

    #[test]
    fn tuple_conversions() {
        let value: Complex<i32> = (7, -9).into();
        assert_eq!(value, Complex::new(7, -9));
        assert_eq!(<(i32, i32)>::from(value), (7, -9));
    }
}
