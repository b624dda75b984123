//! # u-courier
//!
//! Courier delivery estimation: groups packages into capacity-bounded
//! shipments, derives travel times, and dispatches shipments over a fleet
//! so every package gets an estimated delivery time.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Package, Shipment, Vehicle)
//! - [`packing`] — First-fit-decreasing grouping of packages into shipments
//! - [`timing`] — One-way and round-trip travel times
//! - [`scheduling`] — Earliest-available vehicle dispatch
//! - [`planner`] — The packing → timing → dispatch pipeline
//! - [`pricing`] — Delivery cost formula and offer discounts
//! - [`input`] — Text batch format
//! - [`report`] — Per-package estimate rows
//! - [`generate`] — Seeded random batches
//! - [`error`] — Error types

pub mod error;
pub mod generate;
pub mod input;
pub mod models;
pub mod packing;
pub mod planner;
pub mod pricing;
pub mod report;
pub mod scheduling;
pub mod timing;

pub use error::{InputError, ModelError, PlanningError};
pub use planner::{plan, PlanConfig};
