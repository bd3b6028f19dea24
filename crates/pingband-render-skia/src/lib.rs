// File: crates/pingband-render-skia/src/lib.rs
// Summary: Skia CPU raster backend; paints computed frames and encodes PNG.

use anyhow::Result;
use skia_safe as skia;

use pingband_core::chart::{DrawOp, Frame, RenderOptions};
use pingband_core::theme::Theme;
use pingband_core::types::Color;

/// Render a frame to a PNG file, creating parent directories as needed.
pub fn render_to_png(
    frame: &Frame,
    opts: &RenderOptions,
    theme: &Theme,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let data = render_to_png_bytes(frame, opts, theme)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, data)?;
    Ok(())
}

/// Render a frame to in-memory PNG bytes using a CPU raster surface.
pub fn render_to_png_bytes(frame: &Frame, opts: &RenderOptions, theme: &Theme) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();

    // Background
    canvas.clear(to_skia(theme.background));

    draw_grid(canvas, frame, theme);
    draw_ops(canvas, frame);
    draw_axes(canvas, frame, theme, opts.draw_labels);

    // Snapshot and encode
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn draw_grid(canvas: &skia::Canvas, frame: &Frame, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(to_skia(theme.grid));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, r) = (frame.plot.x, frame.plot.right());
    for tick in &frame.y_ticks {
        let y = frame.plot.y + tick.pos;
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

fn draw_ops(canvas: &skia::Canvas, frame: &Frame) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(false);
    fill.set_style(skia::paint::Style::Fill);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);

    let (ox, oy) = (frame.plot.x, frame.plot.y);
    for op in &frame.ops {
        match op {
            DrawOp::Rect { rect, fill: color } => {
                fill.set_color(to_skia(*color));
                let r = skia::Rect::from_xywh(ox + rect.x, oy + rect.y, rect.w, rect.h);
                canvas.draw_rect(r, &fill);
            }
            DrawOp::Line { x0, y0, x1, y1, color, width } => {
                stroke.set_color(to_skia(*color));
                stroke.set_stroke_width(*width);
                canvas.draw_line((ox + x0, oy + y0), (ox + x1, oy + y1), &stroke);
            }
        }
    }
}

fn draw_axes(canvas: &skia::Canvas, frame: &Frame, theme: &Theme, draw_labels: bool) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(to_skia(theme.axis_line));
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let (l, t) = (frame.plot.x, frame.plot.y);
    let (r, b) = (frame.plot.right(), frame.plot.bottom());

    // X and Y axis lines
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    if !draw_labels {
        return;
    }

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(to_skia(theme.tick));
    let mut tick_font = skia::Font::default();
    tick_font.set_size(12.0);

    for tick in &frame.x_ticks {
        if tick.label.is_empty() {
            continue;
        }
        canvas.draw_str(&tick.label, (l + tick.pos - 7.0, b + 18.0), &tick_font, &tick_paint);
    }
    for tick in &frame.y_ticks {
        canvas.draw_str(&tick.label, (l - 36.0, t + tick.pos + 4.0), &tick_font, &tick_paint);
    }

    let mut label_paint = skia::Paint::default();
    label_paint.set_color(to_skia(theme.axis_label));
    let mut font = skia::Font::default();
    font.set_size(14.0);

    canvas.draw_str(&frame.x_label, ((l + r) * 0.5 - 16.0, b + 36.0), &font, &label_paint);
    canvas.draw_str(&frame.y_label, (l - 56.0, t + 14.0), &font, &label_paint);
    if !frame.title.is_empty() {
        let mut title_font = skia::Font::default();
        title_font.set_size(16.0);
        canvas.draw_str(&frame.title, ((l + r) * 0.5 - 80.0, t - 14.0), &title_font, &label_paint);
    }
}
