//! Travel time calculation for packages and shipments.

mod calculator;

pub use calculator::{one_way_time, package_times, round_trip_time, shipment_times};
