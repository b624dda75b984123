//! Vehicle type used by the dispatcher.

use super::check_time;
use crate::error::ModelError;

/// A delivery vehicle and the time at which it is next free.
///
/// Vehicles only live inside a single scheduling run; ids start at 1.
///
/// # Examples
///
/// ```
/// use u_courier::models::Vehicle;
///
/// let v = Vehicle::new(1, 0.0).unwrap();
/// assert_eq!(v.id(), 1);
/// assert_eq!(v.availability(), 0.0);
///
/// let v = v.after_trip(2.84).unwrap();
/// assert_eq!(v.availability(), 2.84);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vehicle {
    id: u32,
    availability: f64,
}

impl Vehicle {
    /// Creates a vehicle.
    ///
    /// Rejects id `0` and negative or non-finite availability.
    pub fn new(id: u32, availability: f64) -> Result<Self, ModelError> {
        if id == 0 {
            return Err(ModelError::InvalidVehicleId(id));
        }
        Ok(Self {
            id,
            availability: check_time(availability)?,
        })
    }

    /// Vehicle ID.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Time in hours at which the vehicle is next free.
    pub fn availability(&self) -> f64 {
        self.availability
    }

    /// The same vehicle once it has completed a trip of `duration` hours.
    pub fn after_trip(self, duration: f64) -> Result<Self, ModelError> {
        Self::new(self.id, self.availability + duration)
    }
}
