// File: crates/pingband-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use pingband_core::{ColumnChart, RenderOptions, SampleRow, Theme};

fn row(fields: &[&str]) -> SampleRow {
    let fields: Vec<String> = fields.iter().map(|s| s.to_string()).collect();
    SampleRow::parse(&fields).expect("test row parses")
}

#[test]
fn render_smoke_png() {
    // Minimal data: a clean hour, a degraded hour, a dead hour, gaps elsewhere
    let mut chart = ColumnChart::new();
    chart.columns[1] = Some(row(&["2024-03-01", "01:00:00", "12", "14", "15", "19"]));
    chart.columns[2] = Some(row(&["2024-03-01", "02:00:00", "13", "0/0", "22"]));
    chart.columns[3] = Some(row(&["2024-03-01", "03:00:00", "0/0", "0/0"]));
    chart.autoscale_y(1.0);

    let opts = RenderOptions::default();
    let theme = Theme::light();
    let frame = chart.frame(&opts, &theme);

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    pingband_render_skia::render_to_png(&frame, &opts, &theme, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify the in-memory API and the encoded dimensions
    let bytes =
        pingband_render_skia::render_to_png_bytes(&frame, &opts, &theme).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (opts.width as u32, opts.height as u32));
}
