//! Error types for value construction, planning, and batch parsing.

use thiserror::Error;

/// A value object was constructed or mutated with an invalid field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("package id cannot be empty")]
    EmptyId,
    #[error("time cannot be negative: {0}")]
    NegativeTime(f64),
    #[error("time must be a finite number")]
    NonFiniteTime,
    #[error("vehicle id must be at least 1, got {0}")]
    InvalidVehicleId(u32),
}

/// A planning run was abandoned.
///
/// Every stage of the pipeline reports through this type so the caller
/// sees a single structured failure regardless of where it happened.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanningError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("package {id} weighs {weight}, above the vehicle capacity of {capacity}")]
    CapacityExceeded { id: String, weight: u32, capacity: u32 },
    #[error("speed must be positive, got {0}")]
    InvalidSpeed(u32),
    #[error("vehicle count must be positive, got {0}")]
    InvalidFleetSize(u32),
    #[error("no vehicle available with {remaining} shipment(s) left to dispatch")]
    EmptyFleet { remaining: usize },
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// What went wrong on a line of a batch file.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputErrorKind {
    #[error("expected `base_cost package_count` header")]
    MissingHeader,
    #[error("`{0}` is not a non-negative integer")]
    BadNumber(String),
    #[error("expected {expected} package line(s), found {found}")]
    PackageCount { expected: usize, found: usize },
    #[error("expected `id weight distance [offer_code]`")]
    MalformedPackage,
    #[error("expected `vehicle_count max_speed max_carriable_weight`")]
    MalformedFleet,
    #[error("unexpected content after the fleet line")]
    TrailingContent,
    #[error("time estimation needs a `vehicle_count max_speed max_carriable_weight` line")]
    MissingFleet,
    #[error(transparent)]
    Package(#[from] ModelError),
}

/// A batch file could not be parsed.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("line {line}: {kind}")]
pub struct InputError {
    /// 1-based line number; the line after the last one for end-of-input errors.
    pub line: usize,
    pub kind: InputErrorKind,
}

impl InputError {
    pub(crate) fn new(line: usize, kind: InputErrorKind) -> Self {
        Self { line, kind }
    }
}
