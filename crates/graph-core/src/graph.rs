// File: crates/graph-core/src/graph.rs
// Summary: LineGraph widget: composition, hover wiring, and SVG document rendering.

use std::fmt::Write as _;

use anyhow::Result;

use crate::config::GraphProps;
use crate::error::GraphError;
use crate::grid::linspace;
use crate::hover::{HoverState, PointerEvent};
use crate::path::smooth_path;
use crate::scale::PlotScale;
use crate::series::Series;
use crate::theme::Theme;
use crate::types::Insets;

const GRID_COLUMNS: usize = 10;
const GRID_ROWS: usize = 6;

/// The interactive line-graph widget: props, data, theme, and hover state.
/// All operations are synchronous; pointer events mutate local state only.
pub struct LineGraph {
    props: GraphProps,
    series: Series,
    theme: Theme,
    insets: Insets,
    scale: PlotScale,
    hover: HoverState,
}

impl LineGraph {
    /// Props and series are validated by their own constructors; the scale
    /// is rebuilt here so a hand-assembled `GraphProps` stays honest.
    pub fn new(props: GraphProps, series: Series) -> Result<Self, GraphError> {
        let scale = PlotScale::new(
            props.max_x,
            props.max_y,
            f64::from(props.width.px()),
            f64::from(props.height.px()),
        )?;
        Ok(Self {
            props,
            series,
            theme: Theme::default(),
            insets: Insets::default(),
            scale,
            hover: HoverState::Idle,
        })
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn props(&self) -> &GraphProps {
        &self.props
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn scale(&self) -> &PlotScale {
        &self.scale
    }

    pub fn hover(&self) -> HoverState {
        self.hover
    }

    /// Drive the hover machine with a raw event.
    pub fn apply(&mut self, event: PointerEvent) {
        self.hover = self.hover.transition(event, &self.series.padded(), &self.scale);
    }

    /// Pointer moved to `px` pixels from the plot's left edge.
    pub fn pointer_move(&mut self, px: f64) {
        self.apply(PointerEvent::Move { px });
    }

    /// Pointer left the plot; hides the cursor guide and clears the tooltip.
    pub fn pointer_leave(&mut self) {
        self.apply(PointerEvent::Leave);
    }

    /// Title concatenated with the live tooltip value while hovering.
    pub fn tooltip_text(&self) -> String {
        match self.hover {
            HoverState::Hovering { value, .. } => format!("{} {}", self.props.title, value),
            HoverState::Idle => self.props.title.clone(),
        }
    }

    /// The smoothed path data for the padded series.
    pub fn path_data(&self) -> String {
        smooth_path(&self.series.padded(), &self.scale)
    }

    /// Render the whole widget as one standalone SVG document: title row,
    /// plot with grid and smoothed area path, cursor guide + tooltip while
    /// hovering, and flex-distributed axis tick labels.
    pub fn render_svg(&self) -> String {
        let pw = f64::from(self.props.width.px());
        let ph = f64::from(self.props.height.px());
        let total_w = pw + f64::from(self.insets.hsum());
        let total_h = ph + f64::from(self.insets.vsum());
        let left = f64::from(self.insets.left);
        let top = f64::from(self.insets.top);

        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" viewBox="0 0 {} {}" font-family="sans-serif" font-size="13">"#,
            escape(self.props.width.raw()),
            total_w,
            total_h,
        );
        self.write_defs(&mut out);
        let _ = writeln!(
            out,
            r#"<text x="{}" y="20" font-size="18" fill="{}">{}</text>"#,
            left,
            self.theme.text,
            escape(&self.tooltip_text()),
        );
        let _ = writeln!(out, r#"<g transform="translate({} {})">"#, left, top);
        self.write_plot(&mut out, pw, ph);
        self.write_hover(&mut out, pw, ph);
        let _ = writeln!(out, "</g>");
        self.write_axis_labels(&mut out, pw, ph);
        let _ = writeln!(out, "</svg>");
        out
    }

    /// Write the rendered document to disk, creating parent directories.
    pub fn render_to_svg(&self, output_svg_path: impl AsRef<std::path::Path>) -> Result<()> {
        let svg = self.render_svg();
        if let Some(parent) = output_svg_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_svg_path, svg)?;
        Ok(())
    }

    // ---- document sections --------------------------------------------------

    fn write_defs(&self, out: &mut String) {
        let _ = writeln!(
            out,
            concat!(
                r#"<defs><filter id="line-shadow" x="-20%" y="-20%" width="140%" height="140%">"#,
                r##"<feDropShadow dx="0" dy="0" stdDeviation="5" flood-color="#000000" flood-opacity="0.3"/>"##,
                "</filter></defs>",
            ),
        );
    }

    fn write_plot(&self, out: &mut String, pw: f64, ph: f64) {
        let _ = writeln!(
            out,
            r#"<rect width="{}" height="{}" rx="10" fill="{}"/>"#,
            pw, ph, self.theme.background,
        );
        // Faint grid, teacher-style: fixed column/row counts over the plot.
        for x in linspace(0.0, pw, GRID_COLUMNS) {
            let _ = writeln!(
                out,
                r#"<line x1="{x}" x2="{x}" y1="0" y2="{}" stroke="{}" stroke-width="1"/>"#,
                ph, self.theme.grid,
            );
        }
        for y in linspace(0.0, ph, GRID_ROWS) {
            let _ = writeln!(
                out,
                r#"<line x1="0" x2="{}" y1="{y}" y2="{y}" stroke="{}" stroke-width="1"/>"#,
                pw, self.theme.grid,
            );
        }
        let _ = writeln!(
            out,
            r#"<path d="{}" fill="{}" stroke="{}" stroke-width="{}" filter="url(#line-shadow)"/>"#,
            self.path_data(),
            self.theme.line_fill,
            self.theme.line_stroke,
            self.theme.stroke_width,
        );
    }

    fn write_hover(&self, out: &mut String, pw: f64, ph: f64) {
        let HoverState::Hovering { cursor_px, value } = self.hover else {
            return;
        };
        let _ = writeln!(
            out,
            concat!(
                r#"<line x1="{x}" x2="{x}" y1="0" y2="{h}" stroke="{c}" stroke-width="2" "#,
                r#"stroke-dasharray="3" stroke-linecap="round" opacity="0.5" pointer-events="none"/>"#,
            ),
            x = cursor_px,
            h = ph,
            c = self.theme.cursor,
        );
        // Tooltip box beside the cursor, flipped left near the right edge.
        let label = value.to_string();
        let box_w = 16.0 + 7.0 * label.len() as f64;
        let box_x = if cursor_px + 8.0 + box_w > pw {
            cursor_px - 8.0 - box_w
        } else {
            cursor_px + 8.0
        };
        let _ = writeln!(
            out,
            concat!(
                r#"<g transform="translate({x} 8)">"#,
                r#"<rect width="{w}" height="24" rx="4" fill="{bg}" stroke="{bd}"/>"#,
                r#"<text x="8" y="17" fill="{t}">{v}</text></g>"#,
            ),
            x = box_x,
            w = box_w,
            bg = self.theme.tooltip_bg,
            bd = self.theme.tooltip_border,
            t = self.theme.text,
            v = escape(&label),
        );
    }

    fn write_axis_labels(&self, out: &mut String, pw: f64, ph: f64) {
        let left = f64::from(self.insets.left);
        let top = f64::from(self.insets.top);

        // Y labels down the left gutter, top first.
        let y_offsets = linspace(0.0, ph, self.props.y_axis.len());
        for (label, dy) in self.props.y_axis.iter().zip(&y_offsets) {
            let _ = writeln!(
                out,
                r#"<text x="{}" y="{}" text-anchor="end" fill="{}">{}</text>"#,
                left - 8.0,
                top + dy + 4.0,
                self.theme.text,
                escape(label),
            );
        }

        // X labels across the bottom edge; end labels hug the corners.
        let n = self.props.x_axis.len();
        let x_offsets = linspace(0.0, pw, n);
        for (i, (label, dx)) in self.props.x_axis.iter().zip(&x_offsets).enumerate() {
            let anchor = if i == 0 {
                "start"
            } else if i + 1 == n {
                "end"
            } else {
                "middle"
            };
            let _ = writeln!(
                out,
                r#"<text x="{}" y="{}" text-anchor="{}" fill="{}">{}</text>"#,
                left + dx,
                top + ph + 18.0,
                anchor,
                self.theme.text,
                escape(label),
            );
        }
    }
}

/// Minimal XML text/attribute escaping.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
