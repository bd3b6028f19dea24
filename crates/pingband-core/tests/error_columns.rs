// File: crates/pingband-core/tests/error_columns.rs
// Purpose: Validate clean, partially failed, and fully failed column rendering.

use pingband_core::chart::DrawOp;
use pingband_core::geometry::RectF;
use pingband_core::types::Color;
use pingband_core::{CenterStat, ColumnChart, Frame, RenderOptions, SampleRow, Theme};

fn row(fields: &[&str]) -> SampleRow {
    let fields: Vec<String> = fields.iter().map(|s| s.to_string()).collect();
    SampleRow::parse(&fields).expect("test row parses")
}

fn rects(frame: &Frame) -> Vec<(RectF, Color)> {
    frame
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Rect { rect, fill } => Some((*rect, *fill)),
            _ => None,
        })
        .collect()
}

fn lines(frame: &Frame) -> Vec<(f32, f32, Color)> {
    frame
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Line { x0, y0, color, .. } => Some((*x0, *y0, *color)),
            _ => None,
        })
        .collect()
}

#[test]
fn fully_failed_bucket_is_one_tinted_rect_without_line() {
    let mut chart = ColumnChart::new();
    chart.columns[4] = Some(row(&["2024-03-01", "04:00:00", "0/0", "0/0", "0/0"]));
    chart.autoscale_y(1.0);

    let opts = RenderOptions::default();
    let theme = Theme::light();
    let frame = chart.frame(&opts, &theme);

    let rects = rects(&frame);
    assert_eq!(rects.len(), 1, "exactly one error rectangle");
    assert!(lines(&frame).is_empty(), "no center line for a dead hour");

    let (rect, fill) = rects[0];
    assert_eq!(fill, theme.error_fill);
    assert_eq!(rect.y, 0.0, "tint starts at the top of the plot");
    assert_eq!(rect.h, frame.plot.h, "tint covers the full inner height");

    let column_width = frame.plot.w / 24.0;
    assert!((rect.x - 4.0 * column_width).abs() < 1e-3);
    assert!((rect.w - column_width).abs() < 1e-3);
}

#[test]
fn clean_bucket_emits_nine_bands_and_accent_line() {
    let mut chart = ColumnChart::new();
    chart.columns[0] = Some(row(&["2024-03-01", "00:00:00", "5", "15", "25", "35", "45"]));
    chart.autoscale_y(1.0);

    let theme = Theme::light();
    let frame = chart.frame(&RenderOptions::default(), &theme);

    let rects = rects(&frame);
    let lines = lines(&frame);
    assert_eq!(rects.len(), 9, "four band pairs plus the center band");
    assert_eq!(lines.len(), 1);

    // Outermost pair first, solid center band last
    assert_eq!(rects[0].1, theme.band_pairs[0]);
    assert_eq!(rects[8].1, theme.band_center);

    // Median 25 over domain [4, 46] sits exactly mid-plot
    let (x0, y0, color) = lines[0];
    assert_eq!(color, theme.center_line);
    assert_eq!(x0, 0.0, "line starts at the column's left edge");
    assert!((y0 - frame.plot.h * 0.5).abs() < 1e-3);
}

#[test]
fn mixed_bucket_uses_valid_subset_and_degraded_palette() {
    let mut chart = ColumnChart::new();
    chart.columns[2] = Some(row(&["2024-03-01", "02:00:00", "10", "0/0", "30"]));
    chart.autoscale_y(1.0);

    let theme = Theme::light();
    let frame = chart.frame(&RenderOptions::default(), &theme);

    let rects = rects(&frame);
    let lines = lines(&frame);
    assert_eq!(rects.len(), 9, "bands still come from the valid subset");
    assert_eq!(lines.len(), 1);

    assert_eq!(rects[0].1, theme.band_pairs_degraded[0]);
    assert_eq!(rects[8].1, theme.band_center_degraded);

    // Median of the valid subset {10, 30} is 20; domain [9, 31] puts it mid-plot
    let (_, y0, color) = lines[0];
    assert_eq!(color, theme.center_line_degraded);
    assert!((y0 - frame.plot.h * 0.5).abs() < 1e-3);
}

#[test]
fn mean_center_stat_moves_the_accent_line() {
    let mut chart = ColumnChart::new();
    chart.columns[0] = Some(row(&["2024-03-01", "00:00:00", "10", "20", "60"]));
    chart.autoscale_y(1.0);
    let chart = chart.with_center(CenterStat::Mean);

    let theme = Theme::light();
    let frame = chart.frame(&RenderOptions::default(), &theme);

    // Mean 30 over domain [9, 61]: (30 - 9) / 52 of the way up
    let expected = frame.plot.h - (21.0 / 52.0) * frame.plot.h;
    let (_, y0, _) = lines(&frame)[0];
    assert!((y0 - expected).abs() < 1e-2);
}
