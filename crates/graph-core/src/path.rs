// File: crates/graph-core/src/path.rs
// Summary: SVG path-data builder with quadratic midpoint smoothing.

use std::fmt::Write as _;

use crate::scale::PlotScale;
use crate::types::DataPoint;

/// Accumulates SVG path data (the `d` attribute syntax).
#[derive(Clone, Debug, Default)]
pub struct SvgPath {
    d: String,
}

impl SvgPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        let _ = write!(self.d, "M{} {}", x, y);
        self
    }

    /// Quadratic curve to `(x, y)` with control point `(cx, cy)`.
    pub fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) -> &mut Self {
        let _ = write!(self.d, "Q{} {}, {} {}", cx, cy, x, y);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.d.is_empty()
    }

    pub fn data(&self) -> &str {
        &self.d
    }

    pub fn into_data(self) -> String {
        self.d
    }
}

/// Smoothed path through `points`: one `Q` segment per consecutive pair,
/// with the control point at the mapped data-space midpoint of the pair.
/// Returns empty path data when fewer than two points are given.
///
/// No close command is emitted; the filled area relies on SVG treating an
/// open subpath as closed for fill purposes.
pub fn smooth_path(points: &[DataPoint], scale: &PlotScale) -> String {
    if points.len() < 2 {
        return String::new();
    }

    let mut path = SvgPath::new();
    path.move_to(scale.to_px_x(points[0].x), scale.to_px_y(points[0].y));

    for pair in points.windows(2) {
        let (prev, point) = (pair[0], pair[1]);
        let cx = scale.to_px_x((prev.x + point.x) / 2.0);
        let cy = scale.to_px_y((prev.y + point.y) / 2.0);
        path.quad_to(cx, cy, scale.to_px_x(point.x), scale.to_px_y(point.y));
    }

    path.into_data()
}
