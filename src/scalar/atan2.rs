//! Octant-based `atan2` approximation.
//!
//! The angle is returned normalised so that `1 << radix` is `pi`. Within the
//! first octant `atan(b / a) / pi ~= a b / (pi a^2 + 0.28125 pi b^2)` for
//! `b = min(|x|, |y|)` and `a = max(|x|, |y|)`; the other seven octants reuse
//! that value with a `0.5` or `1.0` offset and a sign.
//!
//! The rational is evaluated in `i128` with a single truncating division, so
//! every storage width shares one rounding behaviour.

use num_traits::{AsPrimitive, NumCast, Zero};

use crate::fixed::SignedFixed;
use crate::fixed_ops::qconst_wide;

/// Quadratic coefficient of the rational arctangent, already scaled by pi.
const QUADRATIC: f64 = 0.28125 * core::f64::consts::PI;

/// `atan2(y, x) / pi` at `radix`, in `[-1.0, 1.0]`.
///
/// `atan2(0, 0)` is 0.
pub fn atan2<T: SignedFixed>(y: T, x: T, radix: u32) -> T {
    precondition!(radix <= T::max_radix(), "radix {radix} leaves no room for 1.0");
    if x.is_zero() && y.is_zero() {
        return T::zero();
    }

    let one = 1i128 << radix;
    let ax = <T as AsPrimitive<i128>>::as_(x).abs();
    let ay = <T as AsPrimitive<i128>>::as_(y).abs();

    // Flat octants divide by |x|, steep octants by |y|.
    let steep = ay > ax;
    let (minor, major) = if steep { (ax, ay) } else { (ay, ax) };
    let base = atan_unit(minor, major, radix);

    let angle = match (steep, x >= T::zero()) {
        (false, true) => base,
        (false, false) => one - base,
        (true, true) => (one >> 1) - base,
        (true, false) => (one >> 1) + base,
    };
    let angle = if y < T::zero() { -angle } else { angle };

    <T as NumCast>::from(angle).unwrap_or_else(T::zero)
}

/// `atan(minor / major) / pi` at `radix` for `0 <= minor <= major`.
fn atan_unit(minor: i128, major: i128, radix: u32) -> i128 {
    // The ratio is scale free: bring `major` to `width` bits so that
    // `pi * major^2` at `radix` fits and the denominator keeps its precision
    // after dropping `radix` bits.
    let width = (124 - radix) / 2;
    let bits = 128 - major.leading_zeros();
    let (minor, major) = if bits > width {
        let shift = bits - width;
        (minor >> shift, major >> shift)
    } else {
        let shift = width - bits;
        (minor << shift, major << shift)
    };

    let pi = qconst_wide::<i128>(core::f64::consts::PI, radix);
    let quadratic = qconst_wide::<i128>(QUADRATIC, radix);
    let den = (pi * major * major + quadratic * minor * minor) >> radix;
    if den == 0 {
        return 0;
    }
    ((minor * major) << radix) / den
}
