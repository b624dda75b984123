//! Earliest-available vehicle dispatch.
//!
//! # Algorithm
//!
//! A fleet of `n` vehicles, all free at time zero, is held in a min-heap
//! keyed by availability (ties go to the lower vehicle id). Shipments are
//! taken in the order given. For each one the earliest-free vehicle is
//! popped, its availability is added to every member package's delivery
//! time as dispatch delay, and it is pushed back free again after the
//! shipment's round trip.
//!
//! # Complexity
//!
//! O(s log n + p) where s = shipments, n = vehicles, p = packages.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::PlanningError;
use crate::models::{Shipment, Vehicle};

#[derive(Debug, Clone, Copy)]
struct Idle(Vehicle);

impl PartialEq for Idle {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Idle {}

impl PartialOrd for Idle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Idle {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flipped on both keys so the max-heap pops the earliest, lowest-id vehicle
        other
            .0
            .availability()
            .total_cmp(&self.0.availability())
            .then_with(|| other.0.id().cmp(&self.0.id()))
    }
}

/// The vehicle fleet during one dispatch run.
///
/// # Examples
///
/// ```
/// use u_courier::scheduling::Fleet;
///
/// let mut fleet = Fleet::new(2).unwrap();
/// let v = fleet.next_free().unwrap();
/// assert_eq!(v.id(), 1);
/// fleet.release(v.after_trip(3.0).unwrap());
/// assert_eq!(fleet.next_free().unwrap().id(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Fleet {
    idle: BinaryHeap<Idle>,
}

impl Fleet {
    /// Creates `vehicle_count` vehicles with ids `1..=vehicle_count`, all free at time zero.
    ///
    /// Every vehicle is allocated up front; [`assign`] sizes the fleet to the work.
    ///
    /// # Errors
    ///
    /// [`PlanningError::InvalidFleetSize`] if `vehicle_count` is zero.
    pub fn new(vehicle_count: u32) -> Result<Self, PlanningError> {
        if vehicle_count == 0 {
            return Err(PlanningError::InvalidFleetSize(vehicle_count));
        }
        let mut idle = BinaryHeap::with_capacity(vehicle_count as usize);
        for id in 1..=vehicle_count {
            idle.push(Idle(Vehicle::new(id, 0.0)?));
        }
        Ok(Self { idle })
    }

    /// Removes and returns the vehicle that is free earliest.
    pub fn next_free(&mut self) -> Option<Vehicle> {
        self.idle.pop().map(|Idle(v)| v)
    }

    /// Returns a vehicle to the fleet.
    pub fn release(&mut self, vehicle: Vehicle) {
        self.idle.push(Idle(vehicle));
    }

    /// Number of vehicles currently in the fleet.
    pub fn len(&self) -> usize {
        self.idle.len()
    }

    /// Returns `true` if every vehicle has been taken out.
    pub fn is_empty(&self) -> bool {
        self.idle.is_empty()
    }

    /// Vehicles sorted by id.
    pub fn vehicles(&self) -> Vec<Vehicle> {
        let mut vehicles: Vec<Vehicle> = self.idle.iter().map(|Idle(v)| *v).collect();
        vehicles.sort_by_key(Vehicle::id);
        vehicles
    }
}

/// Assigns a vehicle to every shipment, in order, and delays each package
/// by the time its vehicle became free.
///
/// Shipment times must already be set. Only the first
/// `min(vehicle_count, shipments.len())` vehicles are created: the rest
/// could never be picked, since ties go to the lower id. Returns that fleet
/// in its final state, so callers can read when each vehicle is next free.
///
/// # Errors
///
/// * [`PlanningError::InvalidFleetSize`] — `vehicle_count` is zero
/// * [`PlanningError::EmptyFleet`] — no vehicle could be taken while
///   shipments remained; shipments before that point stay assigned
///
/// # Examples
///
/// ```
/// use u_courier::models::{Package, Shipment};
/// use u_courier::scheduling::assign;
///
/// let mut a = Shipment::new();
/// a.push(Package::new("A", 10, 100, "").unwrap());
/// a.set_time(4.0).unwrap();
/// let mut b = Shipment::new();
/// b.push(Package::new("B", 10, 50, "").unwrap());
/// b.set_time(2.0).unwrap();
///
/// let mut shipments = vec![a, b];
/// let fleet = assign(&mut shipments, 1).unwrap();
/// assert_eq!(shipments[1].packages()[0].delivery_time(), 4.0);
/// assert_eq!(fleet.vehicles()[0].availability(), 6.0);
/// ```
pub fn assign(shipments: &mut [Shipment], vehicle_count: u32) -> Result<Fleet, PlanningError> {
    if vehicle_count == 0 {
        return Err(PlanningError::InvalidFleetSize(vehicle_count));
    }
    let total = shipments.len();
    let usable = u32::try_from(total).unwrap_or(u32::MAX).clamp(1, vehicle_count);
    let mut fleet = Fleet::new(usable)?;

    for (index, shipment) in shipments.iter_mut().enumerate() {
        let vehicle = fleet.next_free().ok_or_else(|| PlanningError::EmptyFleet {
            remaining: total - index,
        })?;
        let delay = vehicle.availability();

        shipment.set_vehicle(vehicle.id());
        for package in shipment.packages_mut() {
            package.delay_by(delay)?;
        }
        debug!(
            vehicle = vehicle.id(),
            departs = delay,
            round_trip = shipment.time(),
            "dispatched shipment"
        );

        fleet.release(vehicle.after_trip(shipment.time())?);
    }

    Ok(fleet)
}
