//! Vehicle assignment for timed shipments.
//!
//! - [`assign`] — Earliest-available dispatch over a binary heap, O(s log n)
//! - [`Fleet`] — The vehicle pool a dispatch run works against

mod dispatcher;

pub use dispatcher::{assign, Fleet};
