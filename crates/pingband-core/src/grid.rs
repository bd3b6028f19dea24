// File: crates/pingband-core/src/grid.rs
// Summary: Tick layout and label formatting helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Format a y-axis tick value: integers stay bare, everything else keeps one
/// decimal place.
pub fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{v:.1}")
    }
}

/// Zero-padded hour label, "00" through "23".
pub fn hour_label(hour: usize) -> String {
    format!("{hour:02}")
}
