//! Kernels on one or two real fixed-point scalars.
//!
//! Every kernel is generic over the storage type ([`crate::Fixed`]) and
//! takes the radix explicitly where it needs to know the binary point.

pub mod arith;
pub mod atan2;
pub mod ema;
pub mod log;
pub mod sqrt;
pub mod trig;

pub use arith::{
    add_sat, div, mac, mac_sat, mul, mul_round, mul_sat, mul_wide, square, square_sat, sub_sat,
};
pub use atan2::atan2;
pub use ema::{ema, ema_alpha, ema_frame, ema_vec};
pub use self::log::{ln, log2, log10};
pub use sqrt::{isqrt, isqrt_narrow, sqrt, sqrt_u32, sqrt_u64};
pub use trig::{cos, sin, try_cos, try_sin};
