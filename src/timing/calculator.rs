//! One-way and round-trip travel times.
//!
//! All times are in hours and truncated (never rounded) to two decimals.
//! Truncation is done on integers, `floor(distance * 100 / speed) / 100`, so
//! that values such as `29 / 100` do not lose a hundredth to binary float
//! representation.

use crate::error::PlanningError;
use crate::models::Shipment;

/// Travel time for `distance` km at `speed` km/h, truncated to two decimals.
///
/// The caller guarantees `speed > 0`.
///
/// # Examples
///
/// ```
/// use u_courier::timing::one_way_time;
///
/// assert_eq!(one_way_time(100, 50), 2.0);
/// assert_eq!(one_way_time(75, 50), 1.5);
/// assert_eq!(one_way_time(125, 70), 1.78); // 1.7857… truncated
/// ```
pub fn one_way_time(distance: u32, speed: u32) -> f64 {
    let hundredths = u64::from(distance) * 100 / u64::from(speed);
    hundredths as f64 / 100.0
}

/// Time to reach `max_distance` and come back: the truncated one-way time,
/// doubled.
///
/// # Examples
///
/// ```
/// use u_courier::timing::round_trip_time;
///
/// assert_eq!(round_trip_time(100, 50), 4.0);
/// assert_eq!(round_trip_time(125, 70), 3.56);
/// ```
pub fn round_trip_time(max_distance: u32, speed: u32) -> f64 {
    one_way_time(max_distance, speed) * 2.0
}

/// Sets every package's delivery time to its one-way travel time.
///
/// Overwrites whatever delivery time the package had, so calling it twice
/// gives the same result.
///
/// # Errors
///
/// [`PlanningError::InvalidSpeed`] if `speed` is zero.
pub fn package_times(shipments: &mut [Shipment], speed: u32) -> Result<(), PlanningError> {
    check_speed(speed)?;
    for shipment in shipments.iter_mut() {
        for package in shipment.packages_mut() {
            package.set_delivery_time(one_way_time(package.distance(), speed))?;
        }
    }
    Ok(())
}

/// Sets every shipment's round-trip time from its farthest package.
///
/// Reads raw distances only, so it is independent of [`package_times`].
///
/// # Errors
///
/// [`PlanningError::InvalidSpeed`] if `speed` is zero.
pub fn shipment_times(shipments: &mut [Shipment], speed: u32) -> Result<(), PlanningError> {
    check_speed(speed)?;
    for shipment in shipments.iter_mut() {
        let time = round_trip_time(shipment.max_distance(), speed);
        shipment.set_time(time)?;
    }
    Ok(())
}

fn check_speed(speed: u32) -> Result<(), PlanningError> {
    if speed == 0 {
        return Err(PlanningError::InvalidSpeed(speed));
    }
    Ok(())
}
