//! Order statistics on caller-owned buffers.
//!
//! Every kernel here reorders the buffer it is given; callers that need the
//! original order must pass a copy.

pub mod select;
pub mod sort;

pub use select::{kth_min, median, try_kth_min, try_median};
pub use sort::{partial_sort, partial_sort_indexed, sort};
