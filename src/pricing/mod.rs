//! Delivery cost and offer discounts.
//!
//! Pricing sits beside the planner: it reads packages but never changes
//! them.

mod cost;
mod offer;

pub use cost::{delivery_cost, discount, estimate, CostEstimate, COST_PER_KG, COST_PER_KM};
pub use offer::Offer;
