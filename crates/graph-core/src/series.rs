// File: crates/graph-core/src/series.rs
// Summary: Ordered data series with baseline padding and nearest-point lookup.

use crate::error::GraphError;
use crate::types::DataPoint;

/// An ordered, non-empty sequence of data points. Ordering by x is the
/// caller's contract and is not validated here.
#[derive(Clone, Debug)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    pub fn new(points: Vec<DataPoint>) -> Result<Self, GraphError> {
        if points.is_empty() {
            return Err(GraphError::EmptySeries);
        }
        Ok(Self { points })
    }

    pub fn from_xy(data: Vec<(f64, f64)>) -> Result<Self, GraphError> {
        Self::new(data.into_iter().map(|(x, y)| DataPoint::new(x, y)).collect())
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Baseline padding: a zero-value point one logical unit outside each
    /// end, so the filled area tapers down to the baseline. Always returns
    /// `points().len() + 2` points.
    pub fn padded(&self) -> Vec<DataPoint> {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        let mut out = Vec::with_capacity(self.points.len() + 2);
        out.push(DataPoint::new(first.x - 1.0, 0.0));
        out.extend_from_slice(&self.points);
        out.push(DataPoint::new(last.x + 1.0, 0.0));
        out
    }
}

/// Select the point closest to `x` by horizontal distance. Exact ties keep
/// the earliest point (strict `<` comparison).
pub fn nearest_point(points: &[DataPoint], x: f64) -> Option<DataPoint> {
    let mut it = points.iter();
    let mut best = *it.next()?;
    for &p in it {
        if (p.x - x).abs() < (best.x - x).abs() {
            best = p;
        }
    }
    Some(best)
}
