//! Per-package cost and delivery time estimates.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::PlanningError;
use crate::input::Batch;
use crate::planner::{plan_with, PlanConfig};
use crate::pricing::estimate;

/// One output line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateRow {
    pub id: String,
    pub discount: u64,
    pub final_cost: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<u32>,
}

impl fmt::Display for EstimateRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.discount, self.final_cost)?;
        if let Some(t) = self.delivery_time {
            write!(f, " {t:.2}")?;
        }
        Ok(())
    }
}

/// Cost and discount for every package, in input order.
///
/// # Examples
///
/// ```
/// use u_courier::input::parse_batch;
/// use u_courier::report::cost_report;
///
/// let batch = parse_batch("100 1\nPKG3 10 100 OFR003\n").unwrap();
/// let rows = cost_report(&batch);
/// assert_eq!(rows[0].to_string(), "PKG3 35 665");
/// ```
pub fn cost_report(batch: &Batch) -> Vec<EstimateRow> {
    batch
        .packages
        .iter()
        .map(|p| {
            let cost = estimate(batch.base_cost, p);
            EstimateRow {
                id: p.id().to_string(),
                discount: cost.discount,
                final_cost: cost.final_cost,
                delivery_time: None,
                vehicle: None,
            }
        })
        .collect()
}

/// Cost, discount and planned delivery time for every package, in input order.
pub fn time_report(batch: &Batch, config: &PlanConfig) -> Result<Vec<EstimateRow>, PlanningError> {
    let shipments = plan_with(batch.packages.clone(), config)?;

    let planned: HashMap<&str, (f64, u32)> = shipments
        .iter()
        .flat_map(|s| s.packages().iter().map(move |p| (p.id(), (p.delivery_time(), s.vehicle()))))
        .collect();

    let mut rows = cost_report(batch);
    for row in rows.iter_mut() {
        if let Some(&(time, vehicle)) = planned.get(row.id.as_str()) {
            row.delivery_time = Some(time);
            row.vehicle = Some(vehicle);
        }
    }
    Ok(rows)
}

/// Renders rows one per line.
pub fn render_text(rows: &[EstimateRow]) -> String {
    rows.iter().map(|r| format!("{r}\n")).collect()
}
