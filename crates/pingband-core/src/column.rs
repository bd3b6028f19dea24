// File: crates/pingband-core/src/column.rs
// Summary: Per-bucket draw emission: decile band pairs, center band, accent line.

use crate::chart::{CenterStat, DrawOp};
use crate::geometry::RectF;
use crate::sample::SampleRow;
use crate::scale::{HourScale, ValueScale};
use crate::stats::BucketStats;
use crate::theme::Theme;
use crate::types::Color;

pub(crate) const CENTER_LINE_WIDTH: f32 = 2.0;

/// Emit the draw primitives for one hourly bucket into `ops`.
///
/// Buckets where every probe failed become a single full-height tinted
/// rectangle with no accent line. Buckets with a mix of failed and valid
/// probes band the valid subset only, under the degraded palette.
pub(crate) fn emit(
    ops: &mut Vec<DrawOp>,
    row: &SampleRow,
    column: usize,
    hours: &HourScale,
    yscale: &ValueScale,
    inner_height: f32,
    center: CenterStat,
    theme: &Theme,
) {
    let x = hours.column_left(column);
    let w = hours.column_width;

    let stats = match BucketStats::from_row(row) {
        Some(stats) => stats,
        None => {
            ops.push(DrawOp::Rect {
                rect: RectF::from_xywh(x, 0.0, w, inner_height),
                fill: theme.error_fill,
            });
            return;
        }
    };

    let degraded = row.has_failed();
    let (pairs, center_fill) = if degraded {
        (&theme.band_pairs_degraded, theme.band_center_degraded)
    } else {
        (&theme.band_pairs, theme.band_center)
    };

    // Four symmetric pairs, outermost first, then the solid d4-d6 center band.
    let d = &stats.deciles;
    for (k, &fill) in pairs.iter().enumerate() {
        push_band(ops, x, w, d[k], d[k + 1], yscale, fill);
        push_band(ops, x, w, d[9 - k], d[10 - k], yscale, fill);
    }
    push_band(ops, x, w, d[4], d[6], yscale, center_fill);

    let value = match center {
        CenterStat::Median => stats.median,
        CenterStat::Mean => stats.mean,
    };
    let y = yscale.to_px(value);
    ops.push(DrawOp::Line {
        x0: x,
        y0: y,
        x1: x + w,
        y1: y,
        color: if degraded { theme.center_line_degraded } else { theme.center_line },
        width: CENTER_LINE_WIDTH,
    });
}

fn push_band(
    ops: &mut Vec<DrawOp>,
    x: f32,
    w: f32,
    lo: f64,
    hi: f64,
    yscale: &ValueScale,
    fill: Color,
) {
    let top = yscale.to_px(hi);
    let bottom = yscale.to_px(lo);
    ops.push(DrawOp::Rect {
        rect: RectF::from_xywh(x, top, w, (bottom - top).max(0.0)),
        fill,
    });
}
