// File: crates/graph-core/tests/scale.rs
// Purpose: Endpoint and monotonicity properties of the plot-area transforms.

use graph_core::PlotScale;

const EPS: f64 = 1e-9;

#[test]
fn x_endpoints_map_to_plot_edges() {
    let s = PlotScale::new(4.0, 10.0, 100.0, 100.0).unwrap();
    assert!((s.to_px_x(0.0) - 0.0).abs() < EPS);
    assert!((s.to_px_x(4.0) - 100.0).abs() < EPS);
}

#[test]
fn y_endpoints_map_inverted() {
    let s = PlotScale::new(4.0, 10.0, 100.0, 100.0).unwrap();
    // y = 0 sits at the bottom of the plot, y = max at the top.
    assert!((s.to_px_y(0.0) - 100.0).abs() < EPS);
    assert!((s.to_px_y(10.0) - 0.0).abs() < EPS);
}

#[test]
fn x_is_monotone_nondecreasing() {
    let s = PlotScale::new(14.0, 10.0, 320.0, 180.0).unwrap();
    let mut prev = f64::NEG_INFINITY;
    for i in 0..=140 {
        let px = s.to_px_x(i as f64 / 10.0);
        assert!(px >= prev - EPS, "to_px_x must not decrease");
        prev = px;
    }
}

#[test]
fn y_is_monotone_nonincreasing() {
    let s = PlotScale::new(14.0, 10.0, 320.0, 180.0).unwrap();
    let mut prev = f64::INFINITY;
    for i in 0..=100 {
        let py = s.to_px_y(i as f64 / 10.0);
        assert!(py <= prev + EPS, "to_px_y must not increase");
        prev = py;
    }
}

#[test]
fn from_px_x_inverts_to_px_x() {
    let s = PlotScale::new(14.0, 10.0, 320.0, 180.0).unwrap();
    for &x in &[0.0, 0.5, 3.7, 14.0] {
        assert!((s.from_px_x(s.to_px_x(x)) - x).abs() < EPS);
    }
}

#[test]
fn out_of_domain_extrapolates_past_edges() {
    let s = PlotScale::new(4.0, 10.0, 100.0, 100.0).unwrap();
    assert!(s.to_px_x(5.0) > 100.0);
    assert!(s.to_px_x(-1.0) < 0.0);
    assert!(s.to_px_y(12.0) < 0.0);
    assert!(s.to_px_y(-2.0) > 100.0);
}
