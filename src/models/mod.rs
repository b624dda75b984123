//! Domain model types for courier delivery planning.
//!
//! Packages are the unit of input, shipments group packages onto a single
//! vehicle trip, and vehicles exist only while shipments are being
//! dispatched.

mod package;
mod shipment;
mod vehicle;

pub use package::Package;
pub use shipment::Shipment;
pub use vehicle::Vehicle;

use crate::error::ModelError;

/// Accepts finite, non-negative times.
fn check_time(time: f64) -> Result<f64, ModelError> {
    if !time.is_finite() {
        return Err(ModelError::NonFiniteTime);
    }
    if time < 0.0 {
        return Err(ModelError::NegativeTime(time));
    }
    Ok(time)
}
