//! Element-wise kernels over fixed-point buffers.
//!
//! Inputs are borrowed read-only and results are written into a separate
//! `&mut` output of the same length, so inputs and outputs cannot alias.
//! [`mac_sat`] is the one kernel whose output is also an input: it
//! accumulates into the buffer it is given.

use crate::complex::{self, Complex};
use crate::fixed::{Fixed, SignedFixed};
use crate::scalar;

#[inline]
#[track_caller]
fn check_len(input: usize, output: usize) {
    assert_eq!(
        input, output,
        "input and output slices must have identical lengths"
    );
}

/// `z[i] = sat(x[i] + y[i])`.
///
/// # Panics
/// Panics if the slices have different lengths.
pub fn add_sat<T: Fixed>(x: &[T], y: &[T], z: &mut [T]) {
    check_len(x.len(), y.len());
    check_len(x.len(), z.len());
    for ((dst, &a), &b) in z.iter_mut().zip(x).zip(y) {
        *dst = scalar::add_sat(a, b);
    }
}

/// `z[i] = sat(x[i] - y[i])`.
///
/// # Panics
/// Panics if the slices have different lengths.
pub fn sub_sat<T: Fixed>(x: &[T], y: &[T], z: &mut [T]) {
    check_len(x.len(), y.len());
    check_len(x.len(), z.len());
    for ((dst, &a), &b) in z.iter_mut().zip(x).zip(y) {
        *dst = scalar::sub_sat(a, b);
    }
}

/// `z[i] = (x[i] * y[i]) >> radix`, wrapping.
///
/// # Panics
/// Panics if the slices have different lengths.
pub fn mul<T: Fixed>(x: &[T], y: &[T], z: &mut [T], radix: u32) {
    check_len(x.len(), y.len());
    check_len(x.len(), z.len());
    for ((dst, &a), &b) in z.iter_mut().zip(x).zip(y) {
        *dst = scalar::mul(a, b, radix);
    }
}

/// `z[i] = sat((x[i] * y[i]) >> radix)`.
///
/// # Panics
/// Panics if the slices have different lengths.
pub fn mul_sat<T: Fixed>(x: &[T], y: &[T], z: &mut [T], radix: u32) {
    check_len(x.len(), y.len());
    check_len(x.len(), z.len());
    for ((dst, &a), &b) in z.iter_mut().zip(x).zip(y) {
        *dst = scalar::mul_sat(a, b, radix);
    }
}

/// `z[i] = sat((x[i] * gain) >> radix)`.
///
/// # Panics
/// Panics if `x` and `z` have different lengths.
pub fn scale<T: Fixed>(x: &[T], gain: T, z: &mut [T], radix: u32) {
    check_len(x.len(), z.len());
    for (dst, &a) in z.iter_mut().zip(x) {
        *dst = scalar::mul_sat(a, gain, radix);
    }
}

/// `acc[i] = sat(acc[i] + ((x[i] * y[i]) >> radix))`.
///
/// # Panics
/// Panics if the slices have different lengths.
pub fn mac_sat<T: Fixed>(acc: &mut [T], x: &[T], y: &[T], radix: u32) {
    check_len(x.len(), y.len());
    check_len(x.len(), acc.len());
    for ((dst, &a), &b) in acc.iter_mut().zip(x).zip(y) {
        *dst = scalar::mac_sat(*dst, a, b, radix);
    }
}

/// `y[i] = sin(pi * x[i])`.
///
/// # Panics
/// Panics if `x` and `y` have different lengths.
pub fn sin<T: SignedFixed>(x: &[T], y: &mut [T], radix: u32) {
    check_len(x.len(), y.len());
    for (dst, &angle) in y.iter_mut().zip(x) {
        *dst = scalar::sin(angle, radix);
    }
}

/// `y[i] = cos(pi * x[i])`.
///
/// # Panics
/// Panics if `x` and `y` have different lengths.
pub fn cos<T: SignedFixed>(x: &[T], y: &mut [T], radix: u32) {
    check_len(x.len(), y.len());
    for (dst, &angle) in y.iter_mut().zip(x) {
        *dst = scalar::cos(angle, radix);
    }
}

/// `z[i] = x[i] * y[i]` for complex buffers, wrapping.
///
/// # Panics
/// Panics if the slices have different lengths.
pub fn complex_mul<T: SignedFixed>(
    x: &[Complex<T>],
    y: &[Complex<T>],
    z: &mut [Complex<T>],
    radix: u32,
) {
    check_len(x.len(), y.len());
    check_len(x.len(), z.len());
    for ((dst, &a), &b) in z.iter_mut().zip(x).zip(y) {
        *dst = complex::mul(a, b, radix);
    }
}

/// `z[i] = x[i] * conj(y[i])` for complex buffers, wrapping.
///
/// # Panics
/// Panics if the slices have different lengths.
pub fn complex_mul_conj<T: SignedFixed>(
    x: &[Complex<T>],
    y: &[Complex<T>],
    z: &mut [Complex<T>],
    radix: u32,
) {
    check_len(x.len(), y.len());
    check_len(x.len(), z.len());
    for ((dst, &a), &b) in z.iter_mut().zip(x).zip(y) {
        *dst = complex::mul_conj(a, b, radix);
    }
}

/// `z[i] = |x[i]|`, saturated.
///
/// # Panics
/// Panics if `x` and `z` have different lengths.
pub fn complex_mag<T: SignedFixed>(x: &[Complex<T>], z: &mut [T]) {
    check_len(x.len(), z.len());
    for (dst, &value) in z.iter_mut().zip(x) {
        *dst = complex::mag(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::C16;

    #[test]
    fn saturating_add_and_sub() {
        let x = [i16::MAX, -5, i16::MIN, 100];
        let y = [1i16, 5, -1, -300];
        let mut z = [0i16; 4];

        add_sat(&x, &y, &mut z);
        assert_eq!(z, [i16::MAX, 0, i16::MIN, -200]);

        sub_sat(&x, &y, &mut z);
        assert_eq!(z, [32_766, -10, -32_767, 400]);
    }

    #[test]
    fn products_and_scaling() {
        let x = [8_192i16, -8_192, 16_384, 24_576];
        let y = [8_192i16, 8_192, 24_576, 24_576];
        let mut z = [0i16; 4];

        mul(&x, &y, &mut z, 14);
        assert_eq!(z, [4_096, -4_096, 24_576, -28_672]);

        mul_sat(&x, &y, &mut z, 14);
        assert_eq!(z, [4_096, -4_096, 24_576, i16::MAX]);

        scale(&x, -16_384, &mut z, 14);
        assert_eq!(z, [-8_192, 8_192, -16_384, -24_576]);
    }

    #[test]
    fn mac_accumulates_into_the_output() {
        let mut acc = [10i32, i32::MAX, -10];
        let x = [4i32, 4, 4];
        let y = [8i32, 8, -8];

        mac_sat(&mut acc, &x, &y, 1);
        assert_eq!(acc, [26, i32::MAX, -26]);

        mac_sat(&mut acc, &x, &y, 1);
        assert_eq!(acc, [42, i32::MAX, -42]);
    }

    #[test]
    fn trig_over_buffers() {
        let x = [-16_384i16, -8_192, 0, 8_192, 16_384];
        let mut y = [0i16; 5];

        sin(&x, &mut y, 14);
        assert_eq!(y, [0, -16_384, 0, 16_384, 0]);

        cos(&x, &mut y, 14);
        assert_eq!(y, [-16_384, 0, 16_384, 0, -16_384]);
    }

    #[test]
    fn complex_buffers() {
        let x = [C16::new(8_192, 4_096), C16::new(3, 4)];
        let y = [C16::new(8_192, -12_288), C16::new(16_384, 0)];
        let mut z = [C16::default(); 2];
        let mut m = [0i16; 2];

        complex_mul(&x, &y, &mut z, 14);
        assert_eq!(z, [C16::new(7_168, -4_096), C16::new(3, 4)]);

        complex_mul_conj(&x, &y, &mut z, 14);
        assert_eq!(z, [C16::new(1_024, 8_192), C16::new(3, 4)]);

        complex_mag(&x, &mut m);
        assert_eq!(m, [9_158, 5]);
    }

    #[test]
    #[should_panic(expected = "input and output slices must have identical lengths")]
    fn mismatched_lengths_panic() {
        let mut z = [0i16; 2];
        add_sat(&[1i16, 2, 3], &[1, 2, 3], &mut z);
    }
}
