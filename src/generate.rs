//! Seeded random batches for demos and load checks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::PlanningError;
use crate::input::Batch;
use crate::models::Package;
use crate::planner::PlanConfig;
use crate::pricing::Offer;

/// Parameters for [`generate_batch`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub count: usize,
    pub seed: u64,
    pub base_cost: u64,
    pub min_weight: u32,
    pub max_weight: u32,
    pub min_distance: u32,
    pub max_distance: u32,
    pub fleet: PlanConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 5,
            seed: 0,
            base_cost: 100,
            min_weight: 1,
            max_weight: 200,
            min_distance: 1,
            max_distance: 250,
            fleet: PlanConfig::new(200, 70, 2),
        }
    }
}

impl GeneratorConfig {
    /// Sets the number of packages.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the base delivery cost.
    pub fn with_base_cost(mut self, base_cost: u64) -> Self {
        self.base_cost = base_cost;
        self
    }

    /// Sets the inclusive weight range.
    pub fn with_weights(mut self, min: u32, max: u32) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    /// Sets the inclusive distance range.
    pub fn with_distances(mut self, min: u32, max: u32) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    /// Sets the fleet line written with the batch.
    pub fn with_fleet(mut self, fleet: PlanConfig) -> Self {
        self.fleet = fleet;
        self
    }
}

/// Generates a batch of `PKG1..PKGn` packages.
///
/// Weights are clamped to the fleet capacity so the batch always plans.
/// The same config always yields the same batch.
///
/// # Examples
///
/// ```
/// use u_courier::generate::{generate_batch, GeneratorConfig};
/// use u_courier::planner::plan_with;
///
/// let config = GeneratorConfig::default().with_count(20).with_seed(7);
/// let batch = generate_batch(&config).unwrap();
/// assert_eq!(batch.packages.len(), 20);
///
/// let fleet = batch.fleet.unwrap();
/// assert!(plan_with(batch.packages, &fleet).is_ok());
/// ```
pub fn generate_batch(config: &GeneratorConfig) -> Result<Batch, PlanningError> {
    config.fleet.validate()?;
    let max_weight = config.max_weight.min(config.fleet.capacity);
    if config.min_weight > max_weight {
        return Err(PlanningError::InvalidInput(format!(
            "weight range {}..={} does not fit capacity {}",
            config.min_weight, config.max_weight, config.fleet.capacity
        )));
    }
    if config.min_distance > config.max_distance {
        return Err(PlanningError::InvalidInput(format!(
            "distance range {}..={} is empty",
            config.min_distance, config.max_distance
        )));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut packages = Vec::with_capacity(config.count);
    for i in 1..=config.count {
        let weight = rng.random_range(config.min_weight..=max_weight);
        let distance = rng.random_range(config.min_distance..=config.max_distance);
        // one slot past the table means no offer
        let pick = rng.random_range(0..=Offer::ALL.len());
        let offer_code = Offer::ALL.get(pick).map(|o| o.code()).unwrap_or("");
        packages.push(Package::new(format!("PKG{i}"), weight, distance, offer_code)?);
    }

    Ok(Batch::new(config.base_cost, packages, Some(config.fleet)))
}
