// File: crates/graph-core/src/scale.rs
// Summary: Logical-to-pixel transforms for the plot area (X, and inverted Y).

use crate::error::GraphError;

/// Logical X coordinate (e.g., hour index).
pub type Logical = f64;
/// Value Y coordinate (e.g., measured reading).
pub type Value = f64;

/// Maps `[0, max_x] x [0, max_y]` onto a `width_px x height_px` plot area.
/// Y is inverted so larger values draw higher. Inputs outside the logical
/// domain extrapolate linearly past the plot edges; no clamping is applied.
#[derive(Clone, Copy, Debug)]
pub struct PlotScale {
    pub max_x: Logical,
    pub max_y: Value,
    pub width_px: f64,
    pub height_px: f64,
}

impl PlotScale {
    /// Validates the bounds so NaN can never enter the transforms: axis
    /// maxima must be positive (they are divisors) and the pixel box must
    /// have positive extent.
    pub fn new(max_x: Logical, max_y: Value, width_px: f64, height_px: f64) -> Result<Self, GraphError> {
        if !(max_x > 0.0) {
            return Err(GraphError::InvalidScale { axis: "x", value: max_x });
        }
        if !(max_y > 0.0) {
            return Err(GraphError::InvalidScale { axis: "y", value: max_y });
        }
        if !(width_px > 0.0) {
            return Err(GraphError::InvalidDimension { raw: width_px.to_string() });
        }
        if !(height_px > 0.0) {
            return Err(GraphError::InvalidDimension { raw: height_px.to_string() });
        }
        Ok(Self { max_x, max_y, width_px, height_px })
    }

    #[inline]
    pub fn to_px_x(&self, x: Logical) -> f64 {
        (x / self.max_x) * self.width_px
    }

    #[inline]
    pub fn to_px_y(&self, y: Value) -> f64 {
        ((self.max_y - y) / self.max_y) * self.height_px
    }

    /// Inverse horizontal map, used to resolve a pointer offset back to a
    /// data-space x for nearest-point lookup.
    #[inline]
    pub fn from_px_x(&self, px: f64) -> Logical {
        (px / self.width_px) * self.max_x
    }
}
