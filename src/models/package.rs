//! Package type.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::check_time;
use crate::error::ModelError;

/// A parcel to be delivered.
///
/// Identity is the trimmed `id`: two packages with the same id compare equal
/// and hash the same regardless of their other fields. The delivery time
/// starts at zero and is filled in by the planning pipeline.
///
/// # Examples
///
/// ```
/// use u_courier::models::Package;
///
/// let pkg = Package::new(" PKG1 ", 50, 30, "OFR001").unwrap();
/// assert_eq!(pkg.id(), "PKG1");
/// assert_eq!(pkg.weight(), 50);
/// assert_eq!(pkg.delivery_time(), 0.0);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Package {
    id: String,
    weight: u32,
    distance: u32,
    offer_code: String,
    delivery_time: f64,
}

impl Package {
    /// Creates a package, trimming the id and the offer code.
    ///
    /// Returns [`ModelError::EmptyId`] if the id is blank.
    pub fn new(
        id: impl AsRef<str>,
        weight: u32,
        distance: u32,
        offer_code: impl AsRef<str>,
    ) -> Result<Self, ModelError> {
        let id = id.as_ref().trim();
        if id.is_empty() {
            return Err(ModelError::EmptyId);
        }
        Ok(Self {
            id: id.to_string(),
            weight,
            distance,
            offer_code: offer_code.as_ref().trim().to_string(),
            delivery_time: 0.0,
        })
    }

    /// Package identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Weight in kg.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Distance from the depot in km.
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Offer code, empty when none was given.
    pub fn offer_code(&self) -> &str {
        &self.offer_code
    }

    /// Estimated delivery time in hours.
    pub fn delivery_time(&self) -> f64 {
        self.delivery_time
    }

    /// Sets the delivery time.
    pub fn set_delivery_time(&mut self, time: f64) -> Result<(), ModelError> {
        self.delivery_time = check_time(time)?;
        Ok(())
    }

    /// Pushes the delivery time back by `delay` hours.
    pub fn delay_by(&mut self, delay: f64) -> Result<(), ModelError> {
        self.set_delivery_time(self.delivery_time + delay)
    }
}

impl PartialEq for Package {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Package {}

impl Hash for Package {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_package_new() {
        let p = Package::new("PKG1", 50, 30, "OFR001").expect("valid");
        assert_eq!(p.id(), "PKG1");
        assert_eq!(p.weight(), 50);
        assert_eq!(p.distance(), 30);
        assert_eq!(p.offer_code(), "OFR001");
        assert_eq!(p.delivery_time(), 0.0);
    }

    #[test]
    fn test_package_trims_fields() {
        let p = Package::new("  PKG2\t", 10, 5, " OFR003 ").expect("valid");
        assert_eq!(p.id(), "PKG2");
        assert_eq!(p.offer_code(), "OFR003");
    }

    #[test]
    fn test_package_empty_id() {
        assert_eq!(Package::new("", 1, 1, ""), Err(ModelError::EmptyId));
        assert_eq!(Package::new("   ", 1, 1, ""), Err(ModelError::EmptyId));
    }

    #[test]
    fn test_package_empty_offer_allowed() {
        let p = Package::new("PKG1", 0, 0, "").expect("valid");
        assert!(p.offer_code().is_empty());
    }

    #[test]
    fn test_delivery_time_rejects_invalid() {
        let mut p = Package::new("PKG1", 1, 1, "").expect("valid");
        assert_eq!(p.set_delivery_time(-0.5), Err(ModelError::NegativeTime(-0.5)));
        assert_eq!(p.set_delivery_time(f64::NAN), Err(ModelError::NonFiniteTime));
        assert_eq!(p.delivery_time(), 0.0);
    }

    #[test]
    fn test_delay_by() {
        let mut p = Package::new("PKG1", 1, 1, "").expect("valid");
        p.set_delivery_time(1.5).expect("valid");
        p.delay_by(2.25).expect("valid");
        assert!((p.delivery_time() - 3.75).abs() < 1e-9);
    }

    #[test]
    fn test_identity_by_id() {
        let a = Package::new("PKG1", 10, 20, "OFR001").expect("valid");
        let b = Package::new("PKG1", 99, 1, "").expect("valid");
        let c = Package::new("PKG2", 10, 20, "OFR001").expect("valid");
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Package> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
