//! Reductions of a buffer to a scalar.
//!
//! Each reduction makes one pass, accumulating in `T::Acc` (or `T::Wide` for
//! products), and rescales or divides exactly once at the end.
//!
//! Empty buffers are a caller error. The reductions that divide return 0 for
//! them; [`max_index`] and [`min_index`] panic.

use log::debug;
use num_traits::{One, Saturating, WrappingAdd, WrappingMul, WrappingSub, Zero};

use crate::complex::{self, Complex};
use crate::error::KernelError;
use crate::fixed::{Fixed, SignedFixed};
use crate::fixed_ops::{saturate, saturate_acc, shr};

/// Sum of all elements.
pub fn sum<T: Fixed>(x: &[T]) -> T::Acc {
    x.iter()
        .fold(T::Acc::zero(), |acc, &v| acc.wrapping_add(&v.accumulate()))
}

/// Arithmetic mean, truncated toward zero.
pub fn mean<T: Fixed>(x: &[T]) -> T {
    debug_assert!(!x.is_empty());
    let (total, count) = x.iter().fold((T::Acc::zero(), T::Acc::zero()), |(acc, n), &v| {
        (acc.wrapping_add(&v.accumulate()), n + T::Acc::one())
    });
    if count.is_zero() {
        return T::zero();
    }
    saturate_acc(total / count)
}

/// `sum(x[i]^2) >> radix`.
///
/// Squares are summed at full precision and shifted once. The accumulator
/// wraps if the sum exceeds `T::Acc`, which for 32-bit storage needs a few
/// full-scale elements.
pub fn sum_sqr<T: Fixed>(x: &[T], radix: u32) -> T::Acc {
    let total = x.iter().fold(T::Acc::zero(), |acc, &v| {
        let v = v.accumulate();
        acc.wrapping_add(&v.wrapping_mul(&v))
    });
    shr(total, radix)
}

/// Largest element and the index of its first occurrence.
///
/// # Panics
/// Panics if `x` is empty.
pub fn max_index<T: Fixed>(x: &[T]) -> (T, usize) {
    let mut best = (x[0], 0);
    for (i, &v) in x.iter().enumerate().skip(1) {
        if v > best.0 {
            best = (v, i);
        }
    }
    best
}

/// Smallest element and the index of its first occurrence.
///
/// # Panics
/// Panics if `x` is empty.
pub fn min_index<T: Fixed>(x: &[T]) -> (T, usize) {
    let mut best = (x[0], 0);
    for (i, &v) in x.iter().enumerate().skip(1) {
        if v < best.0 {
            best = (v, i);
        }
    }
    best
}

/// [`max_index`] with the empty case reported as an error.
pub fn try_max_index<T: Fixed>(x: &[T]) -> Result<(T, usize), KernelError> {
    non_empty(x)?;
    Ok(max_index(x))
}

/// [`min_index`] with the empty case reported as an error.
pub fn try_min_index<T: Fixed>(x: &[T]) -> Result<(T, usize), KernelError> {
    non_empty(x)?;
    Ok(min_index(x))
}

fn non_empty<T>(x: &[T]) -> Result<(), KernelError> {
    if x.is_empty() {
        debug!("reduction rejected an empty buffer");
        Err(KernelError::EmptyInput)
    } else {
        Ok(())
    }
}

/// Sum of the magnitudes of a complex buffer, at the input radix.
pub fn sum_mag<T: SignedFixed>(x: &[Complex<T>]) -> T::Acc {
    x.iter().fold(T::Acc::zero(), |acc, &v| {
        acc.wrapping_add(&complex::mag(v).accumulate())
    })
}

/// Centre of mass of `x`, as a 1-based position at `radix`.
///
/// Computes `sum(i * x[i]) / sum(x[i])` with weights `i = 1..=len`. For
/// signed storage the minimum is first removed from every element:
/// `min * len * (len + 1) / 2` comes off the weighted sum and `min * len` off
/// the total, so every contribution is non-negative before the division. A
/// zero total returns 0.
///
/// The quotient is formed as an integer part plus `radix` fraction bits from
/// the remainder, so the weighted sum is never shifted by `radix` and 32-bit
/// buffers of realistic length stay exact.
pub fn center_of_mass<T: Fixed>(x: &[T], radix: u32) -> T {
    let zero = T::Acc::zero();
    let mut weight = zero;
    let mut weighted = zero;
    let mut total = zero;
    let mut triangle = zero;
    let mut minimum = T::max_value();

    for &v in x {
        weight = weight + T::Acc::one();
        let v_acc = v.accumulate();
        weighted = weighted.wrapping_add(&weight.wrapping_mul(&v_acc));
        total = total.wrapping_add(&v_acc);
        triangle = triangle + weight;
        if v < minimum {
            minimum = v;
        }
    }

    if T::SIGNED && !x.is_empty() {
        let offset = minimum.accumulate();
        weighted = weighted.wrapping_sub(&offset.wrapping_mul(&triangle));
        total = total.wrapping_sub(&offset.wrapping_mul(&weight));
    }

    if total.is_zero() {
        return T::zero();
    }
    precondition!(radix < T::BITS, "radix {radix} exceeds the storage width");

    let mut quotient = weighted / total;
    if quotient > T::max_value().accumulate() >> radix as usize {
        return T::max_value();
    }
    let mut remainder = weighted % total;
    for _ in 0..radix {
        quotient = quotient << 1;
        remainder = remainder << 1;
        if remainder >= total {
            remainder = remainder - total;
            quotient = quotient + T::Acc::one();
        }
    }
    saturate_acc(quotient)
}

/// `acc + sum((x[i] * y[i]) >> radix)`, summed in the product type and
/// saturated to `T` once at the end.
///
/// # Panics
/// Panics if `x` and `y` have different lengths.
pub fn dot_sat<T: Fixed>(acc: T, x: &[T], y: &[T], radix: u32) -> T {
    assert_eq!(x.len(), y.len(), "input vectors must have identical lengths");
    let total = x.iter().zip(y).fold(acc.widen(), |sum, (&a, &b)| {
        sum.saturating_add(shr(a.widen() * b.widen(), radix))
    });
    saturate(total)
}

/// [`dot_sat`] with mismatched lengths reported as an error.
pub fn try_dot_sat<T: Fixed>(acc: T, x: &[T], y: &[T], radix: u32) -> Result<T, KernelError> {
    if x.len() != y.len() {
        debug!("dot product rejected lengths {} and {}", x.len(), y.len());
        return Err(KernelError::LengthMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }
    Ok(dot_sat(acc, x, y, radix))
}

/// Complex multiply-accumulate over two buffers: `acc + sum((x[i] * y[i]) >> radix)`.
///
/// Partial sums live in the product type, so they may leave `T`'s range and
/// come back without wrapping; only the final value is saturated.
///
/// # Panics
/// Panics if `x` and `y` have different lengths.
pub fn complex_dot_sat<T: SignedFixed>(
    acc: Complex<T>,
    x: &[Complex<T>],
    y: &[Complex<T>],
    radix: u32,
) -> Complex<T> {
    assert_eq!(x.len(), y.len(), "input vectors must have identical lengths");
    let mut re = acc.re.widen();
    let mut im = acc.im.widen();
    for (&a, &b) in x.iter().zip(y) {
        let (p_re, p_im) = complex::arith::product(a, b);
        re = re.saturating_add(shr(p_re, radix));
        im = im.saturating_add(shr(p_im, radix));
    }
    Complex::new(saturate(re), saturate(im))
}
