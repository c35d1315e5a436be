// File: crates/demo/src/main.rs
// Summary: Demo loads (x, y) rows from CSV (or a built-in sample) and renders
// the widget SVG in both idle and hovering states.

use anyhow::{Context, Result};
use graph_core::{theme, GraphProps, LineGraph, Series};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Accept a CSV path from the CLI or fall back to the built-in sample.
    let (title, data) = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            let rows = load_xy_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Loaded {} rows from {}", rows.len(), path.display());
            (stem_title(&path), rows)
        }
        None => ("Precipitation chance".to_string(), sample_data()),
    };

    if data.is_empty() {
        anyhow::bail!("no data rows loaded; need x,y columns.");
    }

    // Derive axis bounds from the data.
    let max_x = data.iter().map(|&(x, _)| x).fold(f64::NEG_INFINITY, f64::max);
    let max_y = data.iter().map(|&(_, y)| y).fold(f64::NEG_INFINITY, f64::max);
    println!("Axis bounds: x in [0, {max_x}], y in [0, {max_y}]");

    let props = GraphProps::new(&title, max_x, max_y)?
        .with_size("640px", "180px")?
        .with_x_axis(["00", "06", "12", "18", "24"])
        .with_y_axis(["100%", "75%", "50%", "25%", "0%"]);
    let series = Series::from_xy(data)?;

    // 1) Idle widget
    let mut graph = LineGraph::new(props, series)?.with_theme(theme::find("periwinkle"));
    let out_idle = out_name("idle");
    graph.render_to_svg(&out_idle)?;
    println!("Wrote {}", out_idle.display());

    // 2) Hovering: park the pointer mid-plot so the guide and tooltip render.
    graph.pointer_move(f64::from(graph.props().width.px()) / 2.0);
    println!("Tooltip: {}", graph.tooltip_text());
    let out_hover = out_name("hover");
    graph.render_to_svg(&out_hover)?;
    println!("Wrote {}", out_hover.display());

    Ok(())
}

/// Hourly sample series from the widget's reference usage.
fn sample_data() -> Vec<(f64, f64)> {
    vec![
        (0.0, 2.0),
        (1.0, 3.0),
        (2.0, 8.0),
        (3.0, 5.0),
        (4.0, 10.0),
        (5.0, 7.0),
        (6.0, 7.0),
        (7.0, 2.0),
        (8.0, 3.0),
        (9.0, 3.0),
        (10.0, 1.0),
        (11.0, 2.0),
        (12.0, 1.0),
        (13.0, 1.0),
        (14.0, 1.0),
    ]
}

/// Output file name like target/out/graph_<suffix>.svg
fn out_name(suffix: &str) -> PathBuf {
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.join(format!("graph_{suffix}.svg"))
}

/// Title derived from the input file stem.
fn stem_title(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Series")
        .replace('_', " ")
}

/// Load (x, y) rows. Columns named `x`/`y` are preferred; otherwise the first
/// two columns are used, and a missing x column falls back to the row index.
fn load_xy_csv(path: &Path) -> Result<Vec<(f64, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        headers
            .iter()
            .position(|h| names.iter().any(|want| h == want))
    };
    let i_x = idx(&["x", "time", "hour", "index"]);
    let i_y = idx(&["y", "value", "reading"]).or(Some(if i_x == Some(0) { 1 } else { 0 }));

    let mut out = Vec::new();
    let mut row_index = 0_f64;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> {
            i.and_then(|ix| rec.get(ix))
                .and_then(|s| s.trim().parse::<f64>().ok())
        };

        let x = parse(i_x).unwrap_or_else(|| {
            let v = row_index;
            row_index += 1.0;
            v
        });
        if let Some(y) = parse(i_y) {
            out.push((x, y));
        }
    }
    Ok(out)
}
