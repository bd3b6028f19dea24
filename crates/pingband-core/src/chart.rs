// File: crates/pingband-core/src/chart.rs
// Summary: ColumnChart model and pure frame assembly (draw primitives + axis ticks).

use chrono::NaiveDate;

use crate::axis::Axis;
use crate::column;
use crate::dataset::{HourlyBuckets, HOURS};
use crate::geometry::RectF;
use crate::grid::{format_tick, hour_label, linspace};
use crate::sample::SampleRow;
use crate::scale::{HourScale, ValueScale};
use crate::theme::Theme;
use crate::types::{Color, Insets, HEIGHT, WIDTH};

/// Number of y-axis ticks emitted per frame.
const Y_TICKS: usize = 6;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Tick/axis/title text; disable for deterministic pixel tests.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            draw_labels: true,
        }
    }
}

/// Which statistic the per-column accent line marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CenterStat {
    Median,
    Mean,
}

/// X-tick labeling: fixed hour-of-day order, or read from each column's row
/// (rolling windows, where column index is not hour-of-day).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HourLabels {
    ByIndex,
    FromRows,
}

/// Draw primitives, in plot-relative pixels (origin at the plot's top-left).
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Rect { rect: RectF, fill: Color },
    Line { x0: f32, y0: f32, x1: f32, y1: f32, color: Color, width: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Plot-relative position along the tick's axis.
    pub pos: f32,
    pub label: String,
}

/// Everything a render backend needs to paint one chart. Computing a frame has
/// no side effects; identical inputs yield identical frames.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Plot rectangle in surface pixels; `ops` and ticks are relative to it.
    pub plot: RectF,
    pub ops: Vec<DrawOp>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub x_label: String,
    pub y_label: String,
    pub title: String,
}

pub struct ColumnChart {
    /// Expected length 24; callers pad missing hours with `None`.
    pub columns: Vec<Option<SampleRow>>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub center: CenterStat,
    pub hour_labels: HourLabels,
    pub title: String,
}

impl ColumnChart {
    pub fn new() -> Self {
        Self {
            columns: vec![None; HOURS],
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            center: CenterStat::Median,
            hour_labels: HourLabels::ByIndex,
            title: String::new(),
        }
    }

    /// Chart one calendar day: column index is hour-of-day.
    pub fn for_day(date: NaiveDate, day: &HourlyBuckets) -> Self {
        let mut chart = Self::new();
        chart.columns = day.slots().to_vec();
        chart.title = format!("Response Times for {}", date.format("%Y-%m-%d"));
        chart
    }

    /// Chart a rolling window of chronological rows; labels come from the rows.
    pub fn rolling(columns: Vec<Option<SampleRow>>) -> Self {
        let mut chart = Self::new();
        chart.columns = columns;
        chart.hour_labels = HourLabels::FromRows;
        chart.title = "24 Hour Latency".to_string();
        chart
    }

    pub fn with_center(mut self, center: CenterStat) -> Self {
        self.center = center;
        self
    }

    /// Set the y-domain to the valid-value extent across all columns, padded
    /// by `pad` on both ends. With no valid value anywhere the domain falls
    /// back to a finite default instead of going NaN.
    pub fn autoscale_y(&mut self, pad: f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for row in self.columns.iter().flatten() {
            for v in row.valid_values() {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        if !lo.is_finite() || !hi.is_finite() {
            self.y_axis.min = 0.0;
            self.y_axis.max = 1.0;
            return;
        }
        self.y_axis.min = lo - pad;
        self.y_axis.max = hi + pad;
    }

    /// Assemble the draw primitives and tick layout for one render pass.
    pub fn frame(&self, opts: &RenderOptions, theme: &Theme) -> Frame {
        let plot = plot_rect(opts);
        let hours = HourScale::new(0.0, plot.w);
        let yscale = ValueScale::new_linear(0.0, plot.h, self.y_axis.min, self.y_axis.max);

        let mut ops = Vec::new();
        for (i, slot) in self.columns.iter().enumerate().take(HOURS) {
            if let Some(row) = slot {
                column::emit(&mut ops, row, i, &hours, &yscale, plot.h, self.center, theme);
            }
        }

        let x_ticks = (0..HOURS)
            .map(|i| Tick { pos: hours.center(i), label: self.column_label(i) })
            .collect();
        let y_ticks = linspace(yscale.vmin, yscale.vmax, Y_TICKS)
            .into_iter()
            .map(|v| Tick { pos: yscale.to_px(v), label: format_tick(v) })
            .collect();

        Frame {
            plot,
            ops,
            x_ticks,
            y_ticks,
            x_label: self.x_axis.label.clone(),
            y_label: self.y_axis.label.clone(),
            title: self.title.clone(),
        }
    }

    /// Hit test a surface x-pixel back to a populated column, for tooltip
    /// lookups. `None` over gaps or outside the plot.
    pub fn hour_at(&self, opts: &RenderOptions, px: f32) -> Option<usize> {
        let plot = plot_rect(opts);
        let hours = HourScale::new(plot.x, plot.w);
        hours
            .hour_at(px)
            .filter(|&h| self.columns.get(h).map_or(false, |s| s.is_some()))
    }

    fn column_label(&self, column: usize) -> String {
        match self.hour_labels {
            HourLabels::ByIndex => hour_label(column),
            HourLabels::FromRows => self
                .columns
                .get(column)
                .and_then(|s| s.as_ref())
                .map(|row| hour_label(row.hour()))
                .unwrap_or_default(),
        }
    }
}

impl Default for ColumnChart {
    fn default() -> Self {
        Self::new()
    }
}

fn plot_rect(opts: &RenderOptions) -> RectF {
    let w = (opts.width - opts.insets.hsum() as i32).max(1);
    let h = (opts.height - opts.insets.vsum() as i32).max(1);
    RectF::from_xywh(opts.insets.left as f32, opts.insets.top as f32, w as f32, h as f32)
}
