// File: crates/pingband-core/tests/scales.rs
// Purpose: Validate scale transforms and the hour hit test behind tooltips.

use pingband_core::scale::{HourScale, ValueScale};
use pingband_core::{ColumnChart, RenderOptions, SampleRow};

#[test]
fn value_scale_round_trips() {
    let s = ValueScale::new_linear(0.0, 560.0, 9.0, 51.0);
    assert_eq!(s.to_px(51.0), 0.0);
    assert_eq!(s.to_px(9.0), 560.0);
    assert_eq!(s.to_px(30.0), 280.0);

    let back = s.from_px(s.to_px(42.0));
    assert!((back - 42.0).abs() < 1e-4);
}

#[test]
fn value_scale_guards_degenerate_span() {
    let s = ValueScale::new_linear(0.0, 100.0, 7.0, 7.0);
    assert_eq!(s.vmax, 8.0, "flat domain widens to a unit span");
    assert!(s.to_px(7.0).is_finite());
}

#[test]
fn hour_scale_hit_test() {
    let s = HourScale::new(0.0, 240.0);
    assert_eq!(s.column_width, 10.0);
    assert_eq!(s.hour_at(0.0), Some(0));
    assert_eq!(s.hour_at(15.0), Some(1));
    assert_eq!(s.hour_at(239.9), Some(23));
    assert_eq!(s.hour_at(240.0), None);
    assert_eq!(s.hour_at(-0.1), None);
}

#[test]
fn chart_hit_test_skips_gaps() {
    let fields: Vec<String> =
        ["2024-03-01", "06:00:00", "12", "13"].iter().map(|s| s.to_string()).collect();
    let mut chart = ColumnChart::new();
    chart.columns[6] = Some(SampleRow::parse(&fields).expect("test row parses"));

    let opts = RenderOptions::default();
    let column_width = (opts.width - opts.insets.hsum() as i32) as f32 / 24.0;
    let left = opts.insets.left as f32;

    // Mid-column 6 hits; mid-column 7 is a gap; the left margin misses
    assert_eq!(chart.hour_at(&opts, left + 6.5 * column_width), Some(6));
    assert_eq!(chart.hour_at(&opts, left + 7.5 * column_width), None);
    assert_eq!(chart.hour_at(&opts, left - 5.0), None);
}
