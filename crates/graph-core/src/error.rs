// File: crates/graph-core/src/error.rs
// Summary: Typed validation errors surfaced at construction/update time.

use thiserror::Error;

/// Everything the widget can reject up front. Once a [`crate::LineGraph`]
/// exists, rendering and pointer handling are infallible.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GraphError {
    /// The data series has no points; padding and nearest-point lookup
    /// both need at least one.
    #[error("series is empty; at least one data point is required")]
    EmptySeries,

    /// An axis upper bound is zero or negative, which would divide the
    /// scale transform by zero.
    #[error("{axis}-axis upper bound must be positive, got {value}")]
    InvalidScale { axis: &'static str, value: f64 },

    /// A CSS length did not yield a positive leading-integer pixel size.
    #[error("cannot derive a pixel size from dimension {raw:?}")]
    InvalidDimension { raw: String },
}
