// File: crates/graph-examples/src/bin/basic.rs
// Summary: Minimal example that renders a small interactive graph to SVG.

use graph_core::{GraphProps, LineGraph, Series};

fn main() {
    let props = GraphProps::new("Precipitation chance", 4.0, 10.0)
        .expect("valid axis bounds")
        .with_size("320px", "180px")
        .expect("valid dimensions")
        .with_x_axis(["00", "06", "12", "18", "24"])
        .with_y_axis(["100%", "75%", "50%", "25%", "0%"]);

    let series = Series::from_xy(vec![
        (0.0, 2.0),
        (1.0, 3.0),
        (2.0, 8.0),
        (3.0, 5.0),
        (4.0, 10.0),
    ])
    .expect("non-empty series");

    let mut graph = LineGraph::new(props, series).expect("valid graph");
    // Park the pointer mid-plot so the cursor guide and tooltip render too.
    graph.pointer_move(160.0);

    let out = std::path::PathBuf::from("target/out/example_basic.svg");
    graph.render_to_svg(&out).expect("render to svg");
    println!("Wrote {}", out.display());
    println!("Tooltip: {}", graph.tooltip_text());
}
