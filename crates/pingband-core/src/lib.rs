// File: crates/pingband-core/src/lib.rs
// Summary: Core library entry point; exports public API for band-chart construction.

pub mod axis;
pub mod chart;
pub mod column;
pub mod dataset;
pub mod geometry;
pub mod grid;
pub mod sample;
pub mod scale;
pub mod stats;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::Axis;
pub use chart::{CenterStat, ColumnChart, DrawOp, Frame, HourLabels, RenderOptions, Tick};
pub use dataset::{window, DayTable, HourlyBuckets, HOURS};
pub use sample::{Measurement, RowError, SampleRow};
pub use stats::BucketStats;
pub use theme::Theme;
pub use view::Cursor;
