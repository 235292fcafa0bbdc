//! Errors reported by the checked (`try_*`) entry points.
//!
//! The kernels themselves never fail: numeric edge cases have fixed results
//! and out-of-range arguments are caller errors. Callers that cannot
//! guarantee the preconditions use the `try_*` wrappers, which validate their
//! arguments up front and report violations with this type.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelError {
    /// The kernel needs at least one element.
    EmptyInput,
    /// An index argument does not address an element of the buffer.
    IndexOutOfRange { index: usize, len: usize },
    /// Two buffers that must be the same length are not.
    LengthMismatch { expected: usize, actual: usize },
    /// The radix leaves no room for the kernel's intermediate values.
    RadixOutOfRange { radix: u32, min: u32, max: u32 },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => f.write_str("input buffer is empty"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for a buffer of length {len}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "buffer length {actual} does not match expected length {expected}")
            }
            Self::RadixOutOfRange { radix, min, max } => {
                write!(f, "radix {radix} is outside the supported range {min}..={max}")
            }
        }
    }
}

impl core::error::Error for KernelError {}
