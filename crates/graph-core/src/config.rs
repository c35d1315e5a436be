// File: crates/graph-core/src/config.rs
// Summary: Widget props with named defaults and CSS-length dimension parsing.

use crate::error::GraphError;
use crate::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// A CSS length kept verbatim for markup, plus its leading-integer pixel
/// value for geometry math.
#[derive(Clone, Debug, PartialEq)]
pub struct Dimension {
    raw: String,
    px: u32,
}

impl Dimension {
    /// Leading-digit parse: `"180px"` -> 180, `"100%"` -> 100. Leading
    /// whitespace is skipped. Anything without leading ASCII digits, or a
    /// zero pixel size, is rejected.
    pub fn parse(raw: impl Into<String>) -> Result<Self, GraphError> {
        let raw = raw.into();
        let s = raw.trim_start();
        let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let px: u32 = s[..end]
            .parse()
            .map_err(|_| GraphError::InvalidDimension { raw: raw.clone() })?;
        if px == 0 {
            return Err(GraphError::InvalidDimension { raw });
        }
        Ok(Self { raw, px })
    }

    /// The CSS length as given (`"100%"`, `"180px"`).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The leading-integer pixel value used for geometry.
    pub fn px(&self) -> u32 {
        self.px
    }
}

/// Widget input contract. Required fields go through [`GraphProps::new`];
/// the rest carry the documented defaults: width `"100%"`, height `"180px"`,
/// no tick labels.
#[derive(Clone, Debug)]
pub struct GraphProps {
    pub title: String,
    pub max_x: f64,
    pub max_y: f64,
    pub width: Dimension,
    pub height: Dimension,
    pub x_axis: Vec<String>,
    pub y_axis: Vec<String>,
}

impl GraphProps {
    pub fn new(title: impl Into<String>, max_x: f64, max_y: f64) -> Result<Self, GraphError> {
        if !(max_x > 0.0) {
            return Err(GraphError::InvalidScale { axis: "x", value: max_x });
        }
        if !(max_y > 0.0) {
            return Err(GraphError::InvalidScale { axis: "y", value: max_y });
        }
        Ok(Self {
            title: title.into(),
            max_x,
            max_y,
            // The defaults are known-good; parse cannot fail on them.
            width: Dimension::parse(DEFAULT_WIDTH)?,
            height: Dimension::parse(DEFAULT_HEIGHT)?,
            x_axis: Vec::new(),
            y_axis: Vec::new(),
        })
    }

    /// Override the container size with CSS lengths.
    pub fn with_size(mut self, width: &str, height: &str) -> Result<Self, GraphError> {
        self.width = Dimension::parse(width)?;
        self.height = Dimension::parse(height)?;
        Ok(self)
    }

    /// Tick labels distributed across the bottom edge.
    pub fn with_x_axis<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.x_axis = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Tick labels distributed down the left edge, top first.
    pub fn with_y_axis<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.y_axis = labels.into_iter().map(Into::into).collect();
        self
    }
}
