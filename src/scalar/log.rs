//! Base-2, natural and base-10 logarithms of unsigned fixed-point values.
//!
//! `log2` uses Clay Turner's iterative method: normalise the input into
//! `[1.0, 2.0)` one octave at a time (each octave is one whole unit of the
//! result), then recover the fractional bits one per iteration by squaring the
//! mantissa and checking whether it crossed `2.0`. `ln` and `log10` rescale the
//! base-2 result by a Q30 constant; there is no separate series.
//!
//! Zero has no logarithm; by convention all three return 0 for it.

use num_traits::{AsPrimitive, Zero};

use crate::fixed::UnsignedFixed;

/// `ln(2)` in Q30.
const LN_2_Q30: i64 = 744_261_118;
/// `log10(2)` in Q30.
const LOG10_2_Q30: i64 = 323_228_497;

/// `log2(x)` for a radix-R input, returned at radix R and saturated to `i32`.
pub fn log2<T: UnsignedFixed>(x: T, radix: u32) -> i32 {
    clamp_i32(log2_wide(x, radix))
}

/// `ln(x)` for a radix-R input, returned at radix R.
pub fn ln<T: UnsignedFixed>(x: T, radix: u32) -> i32 {
    clamp_i32(scale_q30(log2_wide(x, radix), LN_2_Q30))
}

/// `log10(x)` for a radix-R input, returned at radix R.
pub fn log10<T: UnsignedFixed>(x: T, radix: u32) -> i32 {
    clamp_i32(scale_q30(log2_wide(x, radix), LOG10_2_Q30))
}

fn log2_wide<T: UnsignedFixed>(x: T, radix: u32) -> i64 {
    precondition!(radix <= 31, "radix {radix} leaves no room to square the mantissa");
    if x.is_zero() {
        return 0;
    }

    let one = 1u64 << radix;
    let two = one << 1;
    let mut z: u64 = <T as AsPrimitive<u64>>::as_(x);
    let mut y = 0i64;

    while z < one {
        z <<= 1;
        y -= one as i64;
    }
    while z >= two {
        z >>= 1;
        y += one as i64;
    }

    let mut b = (one >> 1) as i64;
    for _ in 0..radix {
        z = (z * z) >> radix;
        if z >= two {
            z >>= 1;
            y += b;
        }
        b >>= 1;
    }

    y
}

#[inline]
fn scale_q30(value: i64, constant_q30: i64) -> i64 {
    (value * constant_q30 + (1 << 29)) >> 30
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::{ln, log2, log10};

    #[test]
    fn zero_input_returns_zero() {
        for radix in [0, 1, 8, 15, 16, 31] {
            assert_eq!(log2(0u32, radix), 0);
            assert_eq!(ln(0u16, radix.min(15)), 0);
            assert_eq!(log10(0u32, radix), 0);
        }
    }

    #[test]
    fn log2_matches_reference_values() {
        let cases: [(u32, u32, i32); 9] = [
            (1, 0, 0),
            (8, 0, 3),
            (3, 0, 1),
            (3 << 12, 12, 6_491),
            (1 << 12, 12, 0),
            (1, 12, -49_152),
            (12_345, 10, 3_677),
            (100 << 16, 16, 435_411),
            (u32::MAX, 16, 1_048_575),
        ];
        for (input, radix, expected) in cases {
            assert_eq!(log2(input, radix), expected, "log2({input}, {radix})");
        }
    }

    #[test]
    fn sixteen_bit_inputs() {
        assert_eq!(log2(u16::MAX, 15), 32_767);
        assert_eq!(log2(1u16 << 15, 15), 0);
        assert_eq!(ln(u16::MAX, 15), 22_712);
        assert_eq!(log10(u16::MAX, 15), 9_864);
    }

    #[test]
    fn natural_and_common_logs_scale_log2() {
        assert_eq!(ln(3u32 << 12, 12), 4_499);
        assert_eq!(log10(3u32 << 12, 12), 1_954);
        assert_eq!(log10(10u32 << 12, 12), 4_096);
        assert_eq!(log10(100u32 << 16, 16), 131_072);
        assert_eq!(ln(1u32, 16), -726_817);
        assert_eq!(log10(1u32, 16), -315_653);
    }
}
