//! Shipment type.

use serde::Serialize;

use super::{check_time, Package};
use crate::error::ModelError;

/// A group of packages dispatched together on one vehicle trip.
///
/// The shipment owns its packages and keeps `total_weight` in step with
/// them: the only way to add a package is [`Shipment::push`]. `vehicle` is
/// `0` until the scheduler assigns one.
///
/// # Examples
///
/// ```
/// use u_courier::models::{Package, Shipment};
///
/// let mut s = Shipment::new();
/// s.push(Package::new("PKG1", 50, 30, "").unwrap());
/// s.push(Package::new("PKG2", 75, 125, "").unwrap());
/// assert_eq!(s.total_weight(), 125);
/// assert_eq!(s.max_distance(), 125);
/// assert!(!s.is_assigned());
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Shipment {
    packages: Vec<Package>,
    total_weight: u32,
    time: f64,
    vehicle: u32,
}

impl Shipment {
    /// Creates an empty, unassigned shipment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a package and adds its weight to the total.
    ///
    /// The total saturates at `u32::MAX`; the packer never gets near it.
    pub fn push(&mut self, package: Package) {
        self.total_weight = self.total_weight.saturating_add(package.weight());
        self.packages.push(package);
    }

    /// Packages in the order they were added.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Mutable access to the packages. Membership cannot change through it.
    pub fn packages_mut(&mut self) -> &mut [Package] {
        &mut self.packages
    }

    /// Consumes the shipment, returning its packages.
    pub fn into_packages(self) -> Vec<Package> {
        self.packages
    }

    /// Number of packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns `true` if no package has been added.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Sum of member package weights.
    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    /// Largest member distance, `0` for an empty shipment.
    pub fn max_distance(&self) -> u32 {
        self.packages.iter().map(Package::distance).max().unwrap_or(0)
    }

    /// Round-trip duration in hours (set by the time calculator).
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Sets the round-trip duration.
    pub fn set_time(&mut self, time: f64) -> Result<(), ModelError> {
        self.time = check_time(time)?;
        Ok(())
    }

    /// Assigned vehicle id, `0` when unassigned.
    pub fn vehicle(&self) -> u32 {
        self.vehicle
    }

    /// Returns `true` once a vehicle has been assigned.
    pub fn is_assigned(&self) -> bool {
        self.vehicle != 0
    }

    /// Records the vehicle carrying this shipment.
    pub fn set_vehicle(&mut self, vehicle_id: u32) {
        self.vehicle = vehicle_id;
    }

    /// Package ids in shipment order.
    pub fn package_ids(&self) -> Vec<&str> {
        self.packages.iter().map(Package::id).collect()
    }
}
