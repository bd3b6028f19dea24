// File: crates/pingband-core/src/sample.rs
// Summary: Probe measurement and sample-row model, with wire-format parsing.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use thiserror::Error;

/// Sentinel emitted by the probe when a ping got no reply.
pub const FAILED_PROBE: &str = "0/0";

/// One probe result: a round-trip time in milliseconds, or a failed probe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Measurement {
    Value(f64),
    Failed,
}

impl Measurement {
    /// Parse a wire field: the `"0/0"` sentinel or a finite decimal number.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text == FAILED_PROBE {
            return Some(Self::Failed);
        }
        match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(Self::Value(v)),
            _ => None,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Failed => None,
        }
    }

    pub fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }
}

#[derive(Debug, Error)]
pub enum RowError {
    #[error("row has {len} fields, expected timestamp plus at least one probe")]
    TooShort { len: usize },
    #[error("unparseable date {text:?}")]
    BadDate { text: String },
    #[error("unparseable time {text:?}")]
    BadTime { text: String },
    #[error("unparseable probe value {text:?} at field {index}")]
    BadProbe { index: usize, text: String },
}

/// One measurement row: a calendar timestamp plus repeated probe results.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleRow {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub probes: Vec<Measurement>,
}

impl SampleRow {
    /// Parse a raw wire row. Two shapes are accepted:
    /// `["YYYY-MM-DD", "HH:MM[:SS]", probes...]` and
    /// `["YYYY-MM-DDTHH:MM:SS", probes...]`.
    pub fn parse(fields: &[String]) -> Result<Self, RowError> {
        if fields.len() < 2 {
            return Err(RowError::TooShort { len: fields.len() });
        }

        let (date, time, first_probe) = match parse_datetime(&fields[0]) {
            Some(dt) => (dt.date(), dt.time(), 1),
            None => {
                let date = NaiveDate::parse_from_str(fields[0].trim(), "%Y-%m-%d")
                    .map_err(|_| RowError::BadDate { text: fields[0].clone() })?;
                if fields.len() < 3 {
                    return Err(RowError::TooShort { len: fields.len() });
                }
                let time = parse_time(&fields[1])
                    .ok_or_else(|| RowError::BadTime { text: fields[1].clone() })?;
                (date, time, 2)
            }
        };

        let mut probes = Vec::with_capacity(fields.len() - first_probe);
        for (index, text) in fields.iter().enumerate().skip(first_probe) {
            let m = Measurement::parse(text)
                .ok_or_else(|| RowError::BadProbe { index, text: text.clone() })?;
            probes.push(m);
        }

        Ok(Self { date, time, probes })
    }

    /// Hour-of-day slot this row belongs to (0..=23).
    pub fn hour(&self) -> usize {
        self.time.hour() as usize
    }

    /// Probe values with the failure sentinel discarded.
    pub fn valid_values(&self) -> Vec<f64> {
        self.probes.iter().filter_map(|m| m.value()).collect()
    }

    pub fn has_failed(&self) -> bool {
        self.probes.iter().any(|m| m.is_failed())
    }

    pub fn all_failed(&self) -> bool {
        self.probes.iter().all(|m| m.is_failed())
    }
}

fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt);
        }
    }
    None
}

fn parse_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    for fmt in ["%H:%M:%S", "%H:%M"] {
        if let Ok(t) = NaiveTime::parse_from_str(text, fmt) {
            return Some(t);
        }
    }
    None
}
