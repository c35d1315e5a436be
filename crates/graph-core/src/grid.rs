// File: crates/graph-core/src/grid.rs
// Summary: Tick layout helper for flex-distributed axis labels.

/// Evenly spaced values from `start` to `end` inclusive. A single step
/// lands on `start`, matching space-between flex layout with one child.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n as f64 - 1.0);
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}
