// File: crates/graph-core/src/hover.rs
// Summary: Pointer-driven hover state machine for the cursor guide and tooltip.

use crate::scale::PlotScale;
use crate::series::nearest_point;
use crate::types::DataPoint;

/// Pointer event in container pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move { px: f64 },
    Leave,
}

/// Two-state machine: no pointer over the plot, or a cursor position paired
/// with the value of the nearest series point. Any UI binding layer can
/// subscribe to this state and draw the guide line / tooltip from it.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering { cursor_px: f64, value: f64 },
}

impl HoverState {
    pub fn is_idle(&self) -> bool {
        matches!(self, HoverState::Idle)
    }

    /// Cursor offset in pixels, when hovering.
    pub fn cursor_px(&self) -> Option<f64> {
        match *self {
            HoverState::Hovering { cursor_px, .. } => Some(cursor_px),
            HoverState::Idle => None,
        }
    }

    /// Tooltip value, when hovering.
    pub fn value(&self) -> Option<f64> {
        match *self {
            HoverState::Hovering { value, .. } => Some(value),
            HoverState::Idle => None,
        }
    }

    /// Advance the machine. `points` is the padded series the tooltip value
    /// resolves against; `Leave` always lands in `Idle` regardless of the
    /// prior state.
    pub fn transition(self, event: PointerEvent, points: &[DataPoint], scale: &PlotScale) -> Self {
        match event {
            PointerEvent::Leave => HoverState::Idle,
            PointerEvent::Move { px } => {
                let x_value = scale.from_px_x(px);
                match nearest_point(points, x_value) {
                    Some(p) => HoverState::Hovering { cursor_px: px, value: p.y },
                    None => HoverState::Idle,
                }
            }
        }
    }
}
