//! Portable Q-format fixed-point kernels for DSP on targets without an FPU.
//!
//! A Q-format value is an integer `v` read as `v / 2^R`, where the radix `R`
//! counts the fractional bits. Kernels are generic over the storage width
//! through [`Fixed`] and take the radix as an explicit argument; [`Q`] offers
//! the same operations with the radix fixed in the type.
//!
//! The crate is `no_std` and allocation-free. Preconditions on radix, length
//! and rank are checked with `debug_assert!` by default; the
//! `strict-preconditions` feature turns them into release-mode panics, and the
//! `try_*` entry points report them as [`KernelError`] instead.

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Asserts a caller obligation: always with `strict-preconditions`, only in
/// debug builds otherwise.
macro_rules! precondition {
    ($($arg:tt)*) => {
        if cfg!(feature = "strict-preconditions") {
            assert!($($arg)*);
        } else {
            debug_assert!($($arg)*);
        }
    };
}

pub mod complex;
pub mod error;
pub mod fixed;
pub mod fixed_ops;
pub mod mem;
pub mod qformat;
pub mod scalar;
pub mod vector;

pub use complex::{C16, C32, Complex};
pub use error::KernelError;
pub use fixed::{Fixed, SignedFixed, UnsignedFixed};
pub use fixed_ops::{qconst, to_f64};
pub use qformat::Q;
