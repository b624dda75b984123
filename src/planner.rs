//! Delivery planning pipeline.
//!
//! Runs packing, timing and dispatch in a fixed order over one batch of
//! packages. Each stage mutates the shipments produced by the previous one;
//! nothing is handed back to the caller until every stage has run.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::PlanningError;
use crate::models::{Package, Shipment};
use crate::packing::pack;
use crate::scheduling::assign;
use crate::timing::{package_times, shipment_times};

/// Fleet parameters for a planning run.
///
/// # Examples
///
/// ```
/// use u_courier::planner::PlanConfig;
///
/// let config: PlanConfig =
///     serde_json::from_str(r#"{"capacity": 200, "speed": 70, "vehicle_count": 2}"#).unwrap();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Maximum weight one vehicle carries per trip.
    pub capacity: u32,
    /// Vehicle speed in km/h.
    pub speed: u32,
    /// Number of vehicles.
    pub vehicle_count: u32,
}

impl PlanConfig {
    /// Creates a config.
    pub fn new(capacity: u32, speed: u32, vehicle_count: u32) -> Self {
        Self {
            capacity,
            speed,
            vehicle_count,
        }
    }

    /// Checks every field is positive.
    pub fn validate(&self) -> Result<(), PlanningError> {
        if self.capacity == 0 {
            return Err(PlanningError::InvalidInput(
                "vehicle capacity must be positive".into(),
            ));
        }
        if self.speed == 0 {
            return Err(PlanningError::InvalidSpeed(self.speed));
        }
        if self.vehicle_count == 0 {
            return Err(PlanningError::InvalidFleetSize(self.vehicle_count));
        }
        Ok(())
    }
}

/// Plans deliveries for a batch of packages.
///
/// Packs the packages under `capacity`, computes package and shipment
/// times at `speed`, then dispatches shipments heaviest first over
/// `vehicle_count` vehicles. Returned shipments carry their vehicle and
/// their packages' final delivery times.
///
/// The first failing stage aborts the run.
///
/// # Examples
///
/// ```
/// use u_courier::models::Package;
/// use u_courier::planner::plan;
///
/// let packages = vec![
///     Package::new("A", 100, 100, "").unwrap(),
///     Package::new("B", 100, 50, "").unwrap(),
/// ];
/// let shipments = plan(packages, 100, 50, 1).unwrap();
/// assert_eq!(shipments.len(), 2);
/// // B waits for the vehicle to come back from A's 4h round trip
/// assert_eq!(shipments[1].packages()[0].delivery_time(), 5.0);
/// ```
pub fn plan(
    packages: Vec<Package>,
    capacity: u32,
    speed: u32,
    vehicle_count: u32,
) -> Result<Vec<Shipment>, PlanningError> {
    let package_count = packages.len();

    let mut shipments = pack(packages, capacity)?;
    debug!(shipments = shipments.len(), "packed");

    package_times(&mut shipments, speed)?;
    shipment_times(&mut shipments, speed)?;
    debug!("timed");

    let fleet = assign(&mut shipments, vehicle_count)?;
    let finish = fleet
        .vehicles()
        .iter()
        .map(|v| v.availability())
        .fold(0.0, f64::max);

    info!(
        packages = package_count,
        shipments = shipments.len(),
        vehicles = vehicle_count,
        finish,
        "delivery plan complete"
    );
    Ok(shipments)
}

/// [`plan`] with fleet parameters from a [`PlanConfig`].
pub fn plan_with(packages: Vec<Package>, config: &PlanConfig) -> Result<Vec<Shipment>, PlanningError> {
    plan(packages, config.capacity, config.speed, config.vehicle_count)
}
