//! First-fit-decreasing shipment packing.
//!
//! # Algorithm
//!
//! Packages are stably sorted by descending weight. Shipments are then
//! opened one at a time: each new shipment scans the sorted list once,
//! skipping packages already placed, and takes every package that still
//! fits under the capacity. Once every package is placed the shipments are
//! stably sorted by descending total weight.
//!
//! This is a greedy heuristic and does not minimise the number of
//! shipments. Downstream delivery times depend on this exact grouping.
//!
//! # Complexity
//!
//! O(n·s) where n = number of packages and s = number of shipments
//! produced, plus O(n log n) for the initial sort.

use std::collections::HashSet;

use tracing::debug;

use crate::error::PlanningError;
use crate::models::{Package, Shipment};

/// Groups packages into shipments whose total weight stays within `capacity`.
///
/// Every input package ends up in exactly one shipment. Shipments are
/// returned heaviest first.
///
/// # Errors
///
/// * [`PlanningError::InvalidInput`] — `packages` is empty, `capacity` is
///   zero, or two packages share an id
/// * [`PlanningError::CapacityExceeded`] — a single package is heavier than
///   `capacity`; nothing is packed
///
/// # Examples
///
/// ```
/// use u_courier::models::Package;
/// use u_courier::packing::pack;
///
/// let packages = vec![
///     Package::new("PKG1", 50, 30, "").unwrap(),
///     Package::new("PKG2", 75, 125, "").unwrap(),
///     Package::new("PKG3", 110, 60, "").unwrap(),
/// ];
/// let shipments = pack(packages, 200).unwrap();
/// assert_eq!(shipments.len(), 2);
/// assert_eq!(shipments[0].package_ids(), vec!["PKG3", "PKG2"]);
/// assert_eq!(shipments[1].package_ids(), vec!["PKG1"]);
/// ```
pub fn pack(packages: Vec<Package>, capacity: u32) -> Result<Vec<Shipment>, PlanningError> {
    if packages.is_empty() {
        return Err(PlanningError::InvalidInput(
            "package list cannot be empty".into(),
        ));
    }
    if capacity == 0 {
        return Err(PlanningError::InvalidInput(
            "vehicle capacity must be positive".into(),
        ));
    }

    if let Some(p) = packages.iter().find(|p| p.weight() > capacity) {
        return Err(PlanningError::CapacityExceeded {
            id: p.id().to_string(),
            weight: p.weight(),
            capacity,
        });
    }

    let mut seen = HashSet::with_capacity(packages.len());
    for p in &packages {
        if !seen.insert(p.id()) {
            return Err(PlanningError::InvalidInput(format!(
                "duplicate package id {}",
                p.id()
            )));
        }
    }

    // Stable: equal weights keep their input order
    let mut sorted = packages;
    sorted.sort_by(|a, b| b.weight().cmp(&a.weight()));

    let mut slots: Vec<Option<Package>> = sorted.into_iter().map(Some).collect();
    let mut remaining = slots.len();
    let mut shipments = Vec::new();

    while remaining > 0 {
        let mut shipment = Shipment::new();

        for slot in slots.iter_mut() {
            let fits = slot.as_ref().is_some_and(|p| {
                u64::from(p.weight()) + u64::from(shipment.total_weight()) <= u64::from(capacity)
            });
            if fits {
                if let Some(p) = slot.take() {
                    shipment.push(p);
                    remaining -= 1;
                }
            }
        }

        debug!(
            packages = shipment.len(),
            total_weight = shipment.total_weight(),
            "opened shipment"
        );
        shipments.push(shipment);
    }

    shipments.sort_by(|a, b| b.total_weight().cmp(&a.total_weight()));
    Ok(shipments)
}
