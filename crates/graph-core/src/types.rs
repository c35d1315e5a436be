// File: crates/graph-core/src/types.rs
// Summary: Shared types and constants (data points, default sizes, label gutters).

/// Default container width (CSS length).
pub const DEFAULT_WIDTH: &str = "100%";
/// Default container height (CSS length).
pub const DEFAULT_HEIGHT: &str = "180px";

/// A logical coordinate in data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Label gutters around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 {
        self.left + self.right
    }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 {
        self.top + self.bottom
    }
}

impl Default for Insets {
    fn default() -> Self {
        // Room for y labels on the left, the title row on top, x labels below.
        Self::new(48, 12, 36, 28)
    }
}
