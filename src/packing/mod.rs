//! Capacity packing of packages into shipments.
//!
//! - [`pack`] — First-fit-decreasing grouping under a weight capacity, O(n·s)

mod first_fit;

pub use first_fit::pack;
