// File: crates/graph-core/tests/validate.rs
// Purpose: Every degenerate input is rejected with a typed error, never NaN.

use graph_core::{Dimension, GraphError, GraphProps, PlotScale, Series};

#[test]
fn empty_series_is_rejected() {
    assert_eq!(Series::from_xy(vec![]).unwrap_err(), GraphError::EmptySeries);
}

#[test]
fn zero_or_negative_axis_bounds_are_rejected() {
    assert_eq!(
        GraphProps::new("t", 0.0, 10.0).unwrap_err(),
        GraphError::InvalidScale { axis: "x", value: 0.0 }
    );
    assert_eq!(
        GraphProps::new("t", 4.0, -1.0).unwrap_err(),
        GraphError::InvalidScale { axis: "y", value: -1.0 }
    );
    assert!(PlotScale::new(f64::NAN, 10.0, 100.0, 100.0).is_err());
}

#[test]
fn dimension_leading_digit_parse() {
    assert_eq!(Dimension::parse("180px").unwrap().px(), 180);
    assert_eq!(Dimension::parse("100%").unwrap().px(), 100);
    assert_eq!(Dimension::parse(" 320 ").unwrap().px(), 320);
    // The raw string survives for markup.
    assert_eq!(Dimension::parse("180px").unwrap().raw(), "180px");
}

#[test]
fn unparseable_or_zero_dimensions_are_rejected() {
    for raw in ["auto", "", "px180", "0px"] {
        match Dimension::parse(raw) {
            Err(GraphError::InvalidDimension { raw: r }) => assert_eq!(r, raw),
            other => panic!("expected InvalidDimension for {raw:?}, got {other:?}"),
        }
    }
}

#[test]
fn errors_render_readable_messages() {
    let err = GraphError::InvalidScale { axis: "y", value: 0.0 };
    assert_eq!(err.to_string(), "y-axis upper bound must be positive, got 0");
    assert!(GraphError::EmptySeries.to_string().contains("empty"));
}
