// File: crates/pingband-core/src/dataset.rs
// Summary: Grouping of sample rows into per-day hourly buckets and rolling windows.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::sample::SampleRow;

/// Hourly slots per day. Charts always receive exactly this many columns.
pub const HOURS: usize = 24;

/// One day of data: exactly 24 slots, index = hour-of-day, empty slots are
/// `None` and never positionally omitted.
#[derive(Clone, Debug, PartialEq)]
pub struct HourlyBuckets {
    slots: Vec<Option<SampleRow>>,
}

impl Default for HourlyBuckets {
    fn default() -> Self {
        Self::new()
    }
}

impl HourlyBuckets {
    pub fn new() -> Self {
        Self { slots: vec![None; HOURS] }
    }

    /// Place a row into its hour slot. The last row seen for an hour wins.
    pub fn insert(&mut self, row: SampleRow) {
        let hour = row.hour();
        self.slots[hour] = Some(row);
    }

    pub fn get(&self, hour: usize) -> Option<&SampleRow> {
        self.slots.get(hour).and_then(|s| s.as_ref())
    }

    pub fn slots(&self) -> &[Option<SampleRow>] {
        &self.slots
    }

    pub fn into_columns(self) -> Vec<Option<SampleRow>> {
        self.slots
    }

    /// Number of hours that actually received a row.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled() == 0
    }
}

/// All loaded data grouped by calendar date, in date order.
#[derive(Clone, Debug, Default)]
pub struct DayTable {
    days: BTreeMap<NaiveDate, HourlyBuckets>,
}

impl DayTable {
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = SampleRow>,
    {
        let mut days: BTreeMap<NaiveDate, HourlyBuckets> = BTreeMap::new();
        for row in rows {
            days.entry(row.date).or_insert_with(HourlyBuckets::new).insert(row);
        }
        Self { days }
    }

    /// Dates present in the table, oldest first.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.days.keys().copied().collect()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&HourlyBuckets> {
        self.days.get(&date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &HourlyBuckets)> {
        self.days.iter()
    }
}

/// Rolling window: 24 consecutive rows in chronological order starting at
/// `start`, padded with `None` past the end of the data.
pub fn window(rows: &[SampleRow], start: usize) -> Vec<Option<SampleRow>> {
    (0..HOURS).map(|i| rows.get(start + i).cloned()).collect()
}
