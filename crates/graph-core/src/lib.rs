// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports the public line-graph widget API.

pub mod config;
pub mod error;
pub mod graph;
pub mod grid;
pub mod hover;
pub mod path;
pub mod scale;
pub mod series;
pub mod theme;
pub mod types;

pub use config::{Dimension, GraphProps};
pub use error::GraphError;
pub use graph::LineGraph;
pub use hover::{HoverState, PointerEvent};
pub use path::{smooth_path, SvgPath};
pub use scale::PlotScale;
pub use series::{nearest_point, Series};
pub use theme::Theme;
pub use types::DataPoint;
