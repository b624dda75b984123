//! Offer codes and their eligibility rules.

use std::fmt;

use serde::Serialize;

use crate::models::Package;

/// A known discount offer.
///
/// # Examples
///
/// ```
/// use u_courier::pricing::Offer;
///
/// let offer = Offer::from_code("OFR001").unwrap();
/// assert_eq!(offer.percent(), 10);
/// assert!(offer.applies_to(100, 150));
/// assert!(!offer.applies_to(100, 250));
/// assert!(Offer::from_code("OFR999").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Offer {
    /// 10% off, distance < 200 and weight 70–200.
    Ofr001,
    /// 7% off, distance 50–150 and weight 100–250.
    Ofr002,
    /// 5% off, distance 50–250 and weight 10–150.
    Ofr003,
}

const OFFERS: [(&str, Offer); 3] = [
    ("OFR001", Offer::Ofr001),
    ("OFR002", Offer::Ofr002),
    ("OFR003", Offer::Ofr003),
];

impl Offer {
    /// All known offers.
    pub const ALL: [Offer; 3] = [Offer::Ofr001, Offer::Ofr002, Offer::Ofr003];

    /// Looks up an offer by its code. Surrounding whitespace is ignored,
    /// case is not.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        OFFERS
            .iter()
            .find(|(known, _)| *known == code)
            .map(|&(_, offer)| offer)
    }

    /// The offer code.
    pub fn code(self) -> &'static str {
        match self {
            Offer::Ofr001 => "OFR001",
            Offer::Ofr002 => "OFR002",
            Offer::Ofr003 => "OFR003",
        }
    }

    /// Discount percentage.
    pub fn percent(self) -> u64 {
        match self {
            Offer::Ofr001 => 10,
            Offer::Ofr002 => 7,
            Offer::Ofr003 => 5,
        }
    }

    /// Returns `true` if a package of this weight and distance qualifies.
    pub fn applies_to(self, weight: u32, distance: u32) -> bool {
        match self {
            Offer::Ofr001 => distance < 200 && (70..=200).contains(&weight),
            Offer::Ofr002 => (50..=150).contains(&distance) && (100..=250).contains(&weight),
            Offer::Ofr003 => (50..=250).contains(&distance) && (10..=150).contains(&weight),
        }
    }

    /// Discount on `total_cost` for `package`, rounded half up.
    pub fn discount(self, package: &Package, total_cost: u64) -> u64 {
        if !self.applies_to(package.weight(), package.distance()) {
            return 0;
        }
        (total_cost * self.percent() + 50) / 100
    }
}

impl fmt::Display for Offer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
