use u_courier::input::parse_batch;
use u_courier::models::Package;
use u_courier::report::{cost_report, render_text, time_report};
use u_courier::{plan, PlanningError};

const TIME_SAMPLE: &str = "\
100 5
PKG1 50 30 OFR001
PKG2 75 125 OFR008
PKG3 175 100 OFR003
PKG4 110 60 OFR002
PKG5 155 95 NA
2 70 200
";

#[test]
fn time_mode_sample_output() {
    let batch = parse_batch(TIME_SAMPLE).expect("valid batch");
    let fleet = batch.require_fleet().expect("fleet line");
    let rows = time_report(&batch, &fleet).expect("plannable");

    assert_eq!(
        render_text(&rows),
        "\
PKG1 0 750 3.98
PKG2 0 1475 1.78
PKG3 0 2350 1.42
PKG4 105 1395 0.85
PKG5 0 2125 4.19
"
    );
}

#[test]
fn time_mode_sample_vehicles() {
    let batch = parse_batch(TIME_SAMPLE).expect("valid batch");
    let shipments = plan(batch.packages, 200, 70, 2).expect("plannable");

    let summary: Vec<(Vec<&str>, u32)> = shipments
        .iter()
        .map(|s| (s.package_ids(), s.vehicle()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (vec!["PKG4", "PKG2"], 1),
            (vec!["PKG3"], 2),
            (vec!["PKG5"], 2),
            (vec!["PKG1"], 1),
        ]
    );

    let times: Vec<f64> = shipments.iter().map(|s| s.time()).collect();
    let expected = [3.56, 2.84, 2.70, 0.84];
    for (t, e) in times.iter().zip(expected) {
        assert!((t - e).abs() < 1e-9, "{t} != {e}");
    }
}

#[test]
fn cost_mode_sample_output() {
    let batch = parse_batch("100 3\nPKG1 5 5 OFR001\nPKG2 15 5 OFR002\nPKG3 10 100 OFR003\n")
        .expect("valid batch");
    assert_eq!(
        render_text(&cost_report(&batch)),
        "PKG1 0 175\nPKG2 0 275\nPKG3 35 665\n"
    );
}

#[test]
fn one_vehicle_two_shipments_delay() {
    // round trips 4.00 then 2.00: the second shipment's package starts after 4.00
    let packages = vec![
        Package::new("FAR", 100, 100, "").expect("valid"),
        Package::new("NEAR", 90, 50, "").expect("valid"),
    ];
    let shipments = plan(packages, 100, 50, 1).expect("plannable");
    assert_eq!(shipments[0].package_ids(), vec!["FAR"]);
    assert_eq!(shipments[0].packages()[0].delivery_time(), 2.0);
    assert_eq!(shipments[1].packages()[0].delivery_time(), 5.0);
}

#[test]
fn oversized_package_aborts_batch() {
    let batch = parse_batch("100 2\nA 10 10\nB 250 10\n2 70 200\n").expect("valid batch");
    let fleet = batch.require_fleet().expect("fleet line");
    let err = time_report(&batch, &fleet).expect_err("oversized");
    assert_eq!(
        err,
        PlanningError::CapacityExceeded {
            id: "B".into(),
            weight: 250,
            capacity: 200,
        }
    );
}
