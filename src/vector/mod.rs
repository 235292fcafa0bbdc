//! Kernels over buffers of fixed-point scalars.
//!
//! [`elementwise`] applies a scalar kernel across equal-length buffers;
//! [`reduce`] folds a buffer into one value.

pub mod elementwise;
pub mod reduce;

pub use elementwise::{
    add_sat, complex_mag, complex_mul, complex_mul_conj, cos, mac_sat, mul, mul_sat, scale, sin,
    sub_sat,
};
pub use reduce::{
    center_of_mass, complex_dot_sat, dot_sat, max_index, mean, min_index, sum, sum_mag, sum_sqr,
    try_dot_sat, try_max_index, try_min_index,
};
