use std::collections::HashMap;

use proptest::prelude::*;
use u_courier::models::{Package, Shipment};
use u_courier::packing::pack;
use u_courier::timing::{package_times, shipment_times};
use u_courier::{plan, PlanningError};

/// Capacity plus a package list that all fits under it.
fn batch() -> impl Strategy<Value = (u32, Vec<(u32, u32)>)> {
    (1u32..=300).prop_flat_map(|capacity| {
        (
            Just(capacity),
            prop::collection::vec((0..=capacity, 0u32..=500), 1..40),
        )
    })
}

fn packages(specs: &[(u32, u32)]) -> Vec<Package> {
    specs
        .iter()
        .enumerate()
        .map(|(i, &(weight, distance))| {
            Package::new(format!("PKG{}", i + 1), weight, distance, "").expect("valid")
        })
        .collect()
}

fn delivery_times(shipments: &[Shipment]) -> Vec<f64> {
    shipments
        .iter()
        .flat_map(|s| s.packages().iter().map(|p| p.delivery_time()))
        .collect()
}

proptest! {
    #[test]
    fn packing_partitions_input((capacity, specs) in batch()) {
        let shipments = pack(packages(&specs), capacity).expect("packable");

        let mut seen: HashMap<String, usize> = HashMap::new();
        for s in &shipments {
            for p in s.packages() {
                *seen.entry(p.id().to_string()).or_default() += 1;
            }
        }
        prop_assert_eq!(seen.len(), specs.len());
        prop_assert!(seen.values().all(|&n| n == 1));
    }

    #[test]
    fn shipments_respect_capacity((capacity, specs) in batch()) {
        let shipments = pack(packages(&specs), capacity).expect("packable");
        for s in &shipments {
            let sum: u32 = s.packages().iter().map(Package::weight).sum();
            prop_assert_eq!(s.total_weight(), sum);
            prop_assert!(s.total_weight() <= capacity);
            prop_assert!(!s.is_empty());
        }
        for pair in shipments.windows(2) {
            prop_assert!(pair[0].total_weight() >= pair[1].total_weight());
        }
    }

    #[test]
    fn oversized_package_always_fails(
        (capacity, specs) in batch(),
        extra in 1u32..100,
        position in any::<prop::sample::Index>(),
    ) {
        let mut list = packages(&specs);
        let heavy = Package::new("HEAVY", capacity + extra, 10, "").expect("valid");
        let at = position.index(list.len() + 1);
        list.insert(at, heavy);

        let result = pack(list, capacity);
        let is_capacity_error = matches!(result, Err(PlanningError::CapacityExceeded { .. }));
        prop_assert!(is_capacity_error);
    }

    #[test]
    fn time_calculators_are_idempotent((capacity, specs) in batch(), speed in 1u32..=120) {
        let mut shipments = pack(packages(&specs), capacity).expect("packable");
        package_times(&mut shipments, speed).expect("valid speed");
        shipment_times(&mut shipments, speed).expect("valid speed");
        let times = delivery_times(&shipments);
        let trips: Vec<f64> = shipments.iter().map(Shipment::time).collect();

        shipment_times(&mut shipments, speed).expect("valid speed");
        package_times(&mut shipments, speed).expect("valid speed");
        prop_assert_eq!(times, delivery_times(&shipments));
        prop_assert_eq!(trips, shipments.iter().map(Shipment::time).collect::<Vec<_>>());
    }

    #[test]
    fn plan_assigns_every_shipment(
        (capacity, specs) in batch(),
        speed in 1u32..=120,
        vehicles in 1u32..=6,
    ) {
        let shipments = plan(packages(&specs), capacity, speed, vehicles).expect("plannable");
        for s in &shipments {
            prop_assert!((1..=vehicles).contains(&s.vehicle()));
            for p in s.packages() {
                prop_assert!(p.delivery_time() >= 0.0);
                // never earlier than the one-way trip itself
                let one_way = u64::from(p.distance()) * 100 / u64::from(speed);
                prop_assert!(p.delivery_time() + 1e-9 >= one_way as f64 / 100.0);
            }
        }
    }

    #[test]
    fn first_shipments_leave_immediately(
        (capacity, specs) in batch(),
        speed in 1u32..=120,
        vehicles in 1u32..=6,
    ) {
        let shipments = plan(packages(&specs), capacity, speed, vehicles).expect("plannable");
        // a zero-length round trip hands the same vehicle straight back
        prop_assume!(shipments.iter().take(vehicles as usize).all(|s| s.time() > 0.0));
        let mut ids: Vec<u32> = shipments
            .iter()
            .take(vehicles as usize)
            .map(Shipment::vehicle)
            .collect();
        let n = ids.len();
        ids.sort_unstable();
        ids.dedup();
        // one shipment per vehicle until the fleet is used up
        prop_assert_eq!(ids.len(), n);
    }
}
