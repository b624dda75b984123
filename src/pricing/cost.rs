//! Delivery cost formula and discount lookup.

use serde::Serialize;

use super::Offer;
use crate::models::Package;

/// Cost charged per kg.
pub const COST_PER_KG: u64 = 10;

/// Cost charged per km.
pub const COST_PER_KM: u64 = 5;

/// Cost breakdown for one package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostEstimate {
    /// Cost before discount.
    pub total_cost: u64,
    /// Amount taken off.
    pub discount: u64,
    /// `total_cost - discount`.
    pub final_cost: u64,
}

/// `base_cost + weight * 10 + distance * 5`.
pub fn delivery_cost(base_cost: u64, package: &Package) -> u64 {
    base_cost
        + u64::from(package.weight()) * COST_PER_KG
        + u64::from(package.distance()) * COST_PER_KM
}

/// Discount for `offer_code` on a package costing `total_cost`.
///
/// Unknown or empty codes, and packages outside the offer's criteria, get 0.
///
/// # Examples
///
/// ```
/// use u_courier::models::Package;
/// use u_courier::pricing::discount;
///
/// let pkg = Package::new("PKG1", 100, 150, "OFR001").unwrap();
/// assert_eq!(discount("OFR001", &pkg, 1000), 100);
/// assert_eq!(discount("NA", &pkg, 1000), 0);
/// ```
pub fn discount(offer_code: &str, package: &Package, total_cost: u64) -> u64 {
    Offer::from_code(offer_code)
        .map(|offer| offer.discount(package, total_cost))
        .unwrap_or(0)
}

/// Prices a package with its own offer code applied.
///
/// # Examples
///
/// ```
/// use u_courier::models::Package;
/// use u_courier::pricing::estimate;
///
/// let pkg = Package::new("PKG3", 10, 100, "OFR003").unwrap();
/// let cost = estimate(100, &pkg);
/// assert_eq!(cost.total_cost, 700);
/// assert_eq!(cost.discount, 35);
/// assert_eq!(cost.final_cost, 665);
/// ```
pub fn estimate(base_cost: u64, package: &Package) -> CostEstimate {
    let total_cost = delivery_cost(base_cost, package);
    let discount = discount(package.offer_code(), package, total_cost);
    CostEstimate {
        total_cost,
        discount,
        final_cost: total_cost - discount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkg(id: &str, weight: u32, distance: u32, offer: &str) -> Package {
        Package::new(id, weight, distance, offer).expect("valid")
    }

    #[test]
    fn test_delivery_cost() {
        assert_eq!(delivery_cost(100, &pkg("A", 5, 5, "")), 175);
        assert_eq!(delivery_cost(0, &pkg("A", 0, 0, "")), 0);
    }

    #[test]
    fn test_delivery_cost_no_overflow() {
        let p = pkg("A", u32::MAX, u32::MAX, "");
        let expected = u64::from(u32::MAX) * 15;
        assert_eq!(delivery_cost(0, &p), expected);
    }

    #[test]
    fn test_cost_mode_sample() {
        // base 100: PKG1 5 5 OFR001, PKG2 15 5 OFR002, PKG3 10 100 OFR003
        let rows: Vec<CostEstimate> = [
            pkg("PKG1", 5, 5, "OFR001"),
            pkg("PKG2", 15, 5, "OFR002"),
            pkg("PKG3", 10, 100, "OFR003"),
        ]
        .iter()
        .map(|p| estimate(100, p))
        .collect();
        let summary: Vec<(u64, u64)> = rows.iter().map(|r| (r.discount, r.final_cost)).collect();
        assert_eq!(summary, vec![(0, 175), (0, 275), (35, 665)]);
    }

    #[test]
    fn test_unknown_code_is_free_of_discount() {
        let p = pkg("A", 100, 100, "OFR008");
        let cost = estimate(100, &p);
        assert_eq!(cost.discount, 0);
        assert_eq!(cost.final_cost, cost.total_cost);
    }

    #[test]
    fn test_discount_by_explicit_code() {
        // the code argument wins over the package's own code
        let p = pkg("A", 100, 150, "");
        assert_eq!(discount("OFR001", &p, 1000), 100);
        assert_eq!(discount("", &p, 1000), 0);
    }
}
