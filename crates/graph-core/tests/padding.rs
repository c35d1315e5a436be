// File: crates/graph-core/tests/padding.rs
// Purpose: Validate baseline padding invariants on the derived series.

use graph_core::{DataPoint, Series};

#[test]
fn padded_adds_one_zero_point_per_end() {
    let series = Series::from_xy(vec![(0.0, 2.0), (1.0, 3.0), (2.0, 8.0)]).unwrap();
    let padded = series.padded();

    assert_eq!(padded.len(), series.points().len() + 2);
    assert_eq!(padded[0], DataPoint::new(-1.0, 0.0));
    assert_eq!(padded[padded.len() - 1], DataPoint::new(3.0, 0.0));
    assert_eq!(&padded[1..padded.len() - 1], series.points());
}

#[test]
fn padded_single_point_series() {
    let series = Series::from_xy(vec![(5.0, 7.0)]).unwrap();
    let padded = series.padded();

    assert_eq!(padded.len(), 3);
    assert_eq!(padded[0], DataPoint::new(4.0, 0.0));
    assert_eq!(padded[1], DataPoint::new(5.0, 7.0));
    assert_eq!(padded[2], DataPoint::new(6.0, 0.0));
}

#[test]
fn padded_is_recomputed_not_cached() {
    let series = Series::from_xy(vec![(0.0, 1.0), (4.0, 2.0)]).unwrap();
    assert_eq!(series.padded(), series.padded());
    // Original points stay untouched.
    assert_eq!(series.points().len(), 2);
}
