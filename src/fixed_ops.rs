//! Saturation and rounding primitives shared by every kernel family.
//!
//! Two rules apply across the crate:
//!
//! * A kernel whose output is narrower than its internal arithmetic either
//!   saturates (`_sat` kernels) or wraps (`truncate`), and the choice is part
//!   of the kernel's name.
//! * A "rounding" rescale adds `1 << (shift - 1)` before shifting right, i.e.
//!   rounds half up toward positive infinity. A zero shift adds nothing.

use num_traits::{AsPrimitive, NumCast, One, PrimInt, WrappingAdd};

use crate::error::KernelError;
use crate::fixed::Fixed;

/// Clamps a product-width value into `T`'s range.
#[inline]
pub fn saturate<T: Fixed>(value: T::Wide) -> T {
    if value > T::max_value().widen() {
        T::max_value()
    } else if value < T::min_value().widen() {
        T::min_value()
    } else {
        truncate(value)
    }
}

/// Clamps an accumulator-width value into `T`'s range.
#[inline]
pub fn saturate_acc<T: Fixed>(value: T::Acc) -> T {
    if value > T::max_value().accumulate() {
        T::max_value()
    } else if value < T::min_value().accumulate() {
        T::min_value()
    } else {
        <T::Acc as AsPrimitive<T>>::as_(value)
    }
}

/// Narrows a product-width value by discarding the high bits.
#[inline]
pub fn truncate<T: Fixed>(value: T::Wide) -> T {
    <T::Wide as AsPrimitive<T>>::as_(value)
}

/// Arithmetic right shift that tolerates a zero shift count.
#[inline]
pub fn shr<W: PrimInt>(value: W, shift: u32) -> W {
    if shift == 0 {
        value
    } else {
        value >> shift as usize
    }
}

/// Right shift with round-half-up, `(value + (1 << (shift - 1))) >> shift`.
#[inline]
pub fn round_shift<W: PrimInt + WrappingAdd>(value: W, shift: u32) -> W {
    if shift == 0 {
        return value;
    }
    let bias = W::one() << (shift - 1) as usize;
    value.wrapping_add(&bias) >> shift as usize
}

/// `1.0` at the given radix, in the product type.
#[inline]
pub(crate) fn one_wide<T: Fixed>(radix: u32) -> T::Wide {
    T::Wide::one() << radix as usize
}

/// Builds the fixed-point representation of `value` at `radix`.
///
/// Rounds half away from zero and saturates at the storage bounds, so
/// `qconst::<i16>(-0.5, 14) == -8192` and `qconst::<i16>(2.0, 14) == i16::MAX`.
#[inline]
pub fn qconst<T: Fixed>(value: f64, radix: u32) -> T {
    T::from_f64_saturating(libm::round(libm::ldexp(value, radix as i32)))
}

/// Like [`qconst`] but produces the constant in an arbitrary primitive
/// integer, typically a kernel's product type where the constant may not fit
/// the storage type (`pi` at Q14 in 16-bit storage).
#[inline]
pub(crate) fn qconst_wide<W: PrimInt>(value: f64, radix: u32) -> W {
    <W as NumCast>::from(libm::round(libm::ldexp(value, radix as i32))).unwrap_or_else(W::zero)
}

/// Checks that `radix` lies in `min..=T::max_radix()`.
pub fn check_radix<T: Fixed>(radix: u32, min: u32) -> Result<(), KernelError> {
    let max = T::max_radix();
    if (min..=max).contains(&radix) {
        Ok(())
    } else {
        Err(KernelError::RadixOutOfRange { radix, min, max })
    }
}

/// Real value of `value` interpreted at `radix`.
#[inline]
pub fn to_f64<T: Fixed>(value: T, radix: u32) -> f64 {
    libm::ldexp(<T as AsPrimitive<f64>>::as_(value), -(radix as i32))
}

#[cfg(test)]
mod tests {
    use super::{
        check_radix, qconst, qconst_wide, round_shift, saturate, saturate_acc, shr, to_f64,
        truncate,
    };

    #[test]
    fn saturate_clamps_to_storage_bounds() {
        assert_eq!(saturate::<i16>(40_000), i16::MAX);
        assert_eq!(saturate::<i16>(-40_000), i16::MIN);
        assert_eq!(saturate::<i16>(i32::from(i16::MAX)), i16::MAX);
        assert_eq!(saturate::<i16>(i32::from(i16::MIN)), i16::MIN);
        assert_eq!(saturate::<u16>(70_000), u16::MAX);
        assert_eq!(saturate::<i32>(i64::MIN), i32::MIN);
        assert_eq!(saturate_acc::<i16>(-1_000_000), i16::MIN);
    }

    #[test]
    fn truncate_wraps() {
        assert_eq!(truncate::<i16>(32_768), i16::MIN);
        assert_eq!(truncate::<u16>(65_537), 1);
    }

    #[test]
    fn round_shift_rounds_half_up() {
        assert_eq!(round_shift(3i32, 1), 2);
        assert_eq!(round_shift(-3i32, 1), -1);
        assert_eq!(round_shift(5i32, 2), 1);
        assert_eq!(round_shift(6i32, 2), 2);
        assert_eq!(round_shift(7i32, 0), 7);
        assert_eq!(shr(-7i32, 1), -4);
        assert_eq!(shr(-7i32, 0), -7);
    }

    #[test]
    fn qconst_rounds_half_away_from_zero() {
        assert_eq!(qconst::<i16>(-0.5, 14), -8192);
        assert_eq!(qconst::<i16>(-1.0, 14), -16384);
        assert_eq!(qconst::<i16>(0.225, 14), 3686);
        assert_eq!(qconst::<i16>(2.0, 14), i16::MAX);
        assert_eq!(qconst::<i16>(-4.0, 14), i16::MIN);
        assert_eq!(qconst::<u32>(-1.0, 8), 0);
        assert_eq!(qconst::<i32>(core::f64::consts::PI, 28), 843_314_857);
    }

    #[test]
    fn wide_constants_exceed_storage() {
        assert_eq!(qconst_wide::<i32>(core::f64::consts::PI, 14), 51_472);
        assert_eq!(qconst_wide::<i32>(-0.225, 14), -3_686);
    }

    #[test]
    fn radix_bounds_follow_storage_width() {
        assert_eq!(check_radix::<i16>(14, 2), Ok(()));
        assert_eq!(
            check_radix::<i16>(15, 2),
            Err(crate::KernelError::RadixOutOfRange {
                radix: 15,
                min: 2,
                max: 14
            })
        );
        assert!(check_radix::<i32>(1, 2).is_err());
        assert_eq!(check_radix::<u16>(15, 0), Ok(()));
    }

    #[test]
    fn to_f64_inverts_radix() {
        assert_eq!(to_f64(-8192i16, 14), -0.5);
        assert_eq!(to_f64(3u32, 1), 1.5);
    }
}
