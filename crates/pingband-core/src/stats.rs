// File: crates/pingband-core/src/stats.rs
// Summary: Quantile estimation and per-bucket percentile statistics.

use crate::sample::{Measurement, SampleRow};

/// Linear-interpolation quantile at rank `q * (n - 1)` over ascending `sorted`.
/// `q` is clamped to [0, 1]; an empty slice yields 0.0.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// The 11 decile boundaries d[0..=10]: d[0] = min, d[10] = max, interpolated
/// quantiles between. Non-decreasing for sorted input.
pub fn deciles(sorted: &[f64]) -> [f64; 11] {
    std::array::from_fn(|k| match k {
        0 => sorted.first().copied().unwrap_or(0.0),
        10 => sorted.last().copied().unwrap_or(0.0),
        k => quantile(sorted, k as f64 / 10.0),
    })
}

pub fn median(sorted: &[f64]) -> f64 {
    quantile(sorted, 0.5)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Percentile band set for one hourly bucket, computed over the valid
/// (non-sentinel) probe values only.
#[derive(Clone, Debug, PartialEq)]
pub struct BucketStats {
    pub deciles: [f64; 11],
    pub median: f64,
    pub mean: f64,
    pub valid: usize,
    pub failed: usize,
}

impl BucketStats {
    /// `None` when every probe failed; there is nothing to aggregate then.
    pub fn from_probes(probes: &[Measurement]) -> Option<Self> {
        let mut values: Vec<f64> = probes.iter().filter_map(|m| m.value()).collect();
        let failed = probes.len() - values.len();
        if values.is_empty() {
            return None;
        }
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        Some(Self {
            deciles: deciles(&values),
            median: median(&values),
            mean: mean(&values),
            valid: values.len(),
            failed,
        })
    }

    pub fn from_row(row: &SampleRow) -> Option<Self> {
        Self::from_probes(&row.probes)
    }

    pub fn min(&self) -> f64 {
        self.deciles[0]
    }

    pub fn max(&self) -> f64 {
        self.deciles[10]
    }
}
