//! Storage types accepted by the kernels.
//!
//! Every kernel family is written once against [`Fixed`] and instantiated for
//! the six supported integer widths. The trait does not carry the radix: the
//! binary point is a convention between caller and kernel, passed explicitly
//! to every operation that needs it (see [`crate::qformat`] for a typed
//! alternative).
//!
//! Each storage type names two wider integer types:
//!
//! * `Wide` holds the exact product of two values and is where scalar kernels
//!   do their arithmetic before narrowing (`i16 -> i32`, `i32 -> i64`, ...).
//! * `Acc` is the accumulator used by vector reductions. For 16- and 32-bit
//!   storage it is 64 bits wide so sums over realistic buffer lengths cannot
//!   overflow.

use core::fmt::Debug;

use num_traits::{AsPrimitive, PrimInt, Signed, Unsigned, WrappingAdd, WrappingMul, WrappingSub};

/// Integer storage of a fixed-point scalar.
pub trait Fixed:
    PrimInt
    + Debug
    + Default
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + AsPrimitive<Self::Wide>
    + AsPrimitive<Self::Acc>
    + AsPrimitive<f64>
    + 'static
{
    /// Exact product type of two `Self` values.
    type Wide: PrimInt
        + Debug
        + WrappingAdd
        + WrappingSub
        + WrappingMul
        + AsPrimitive<Self>
        + AsPrimitive<Self::Acc>
        + AsPrimitive<f64>
        + 'static;

    /// Accumulator for reductions over vectors.
    type Acc: PrimInt
        + Debug
        + WrappingAdd
        + WrappingSub
        + WrappingMul
        + AsPrimitive<Self>
        + AsPrimitive<Self::Wide>
        + 'static;

    /// Width of the storage type in bits.
    const BITS: u32;

    /// Whether the storage type carries a sign bit.
    const SIGNED: bool;

    /// Sign-or-zero extends `self` into the product type.
    #[inline]
    fn widen(self) -> Self::Wide {
        <Self as AsPrimitive<Self::Wide>>::as_(self)
    }

    /// Sign-or-zero extends `self` into the accumulator type.
    #[inline]
    fn accumulate(self) -> Self::Acc {
        <Self as AsPrimitive<Self::Acc>>::as_(self)
    }

    /// Converts a real number that is already scaled by `2^radix`, rounding
    /// toward zero and saturating at the storage bounds (`NaN` maps to zero).
    fn from_f64_saturating(value: f64) -> Self;

    /// Largest radix for which `1 << radix` is representable in `Self` with
    /// one spare bit, i.e. values in `[-2.0, 2.0)` stay representable.
    #[inline]
    fn max_radix() -> u32 {
        if Self::SIGNED {
            Self::BITS - 2
        } else {
            Self::BITS - 1
        }
    }
}

/// Storage types with a sign bit. Trigonometric, EMA and atan2 kernels are
/// only defined for these.
pub trait SignedFixed: Fixed<Wide: Signed, Acc: Signed> + Signed + AsPrimitive<i128> {}

/// Storage types without a sign bit. Logarithm and integer square root are
/// only defined for these.
pub trait UnsignedFixed: Fixed + Unsigned + AsPrimitive<u64> {
    /// Half-width unsigned type holding `floor(sqrt(x))` for any `x: Self`.
    type Half: PrimInt + Debug + 'static;

    /// Narrows a square root result known to fit into [`Self::Half`].
    fn to_half(self) -> Self::Half;
}

macro_rules! impl_fixed {
    ($t:ty, $wide:ty, $acc:ty, $signed:expr) => {
        impl Fixed for $t {
            type Wide = $wide;
            type Acc = $acc;

            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = $signed;

            #[inline]
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn from_f64_saturating(value: f64) -> Self {
                value as $t
            }
        }
    };
}

impl_fixed!(i16, i32, i64, true);
impl_fixed!(i32, i64, i64, true);
impl_fixed!(i64, i128, i128, true);
impl_fixed!(u16, u32, u64, false);
impl_fixed!(u32, u64, u64, false);
impl_fixed!(u64, u128, u128, false);

impl SignedFixed for i16 {}
impl SignedFixed for i32 {}
impl SignedFixed for i64 {}

macro_rules! impl_unsigned {
    ($t:ty, $half:ty) => {
        impl UnsignedFixed for $t {
            type Half = $half;

            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn to_half(self) -> $half {
                debug_assert!(self <= <$t>::from(<$half>::MAX));
                self as $half
            }
        }
    };
}

impl_unsigned!(u16, u8);
impl_unsigned!(u32, u16);
impl_unsigned!(u64, u32);
