// src/data.rs
//
// Plain data produced by the page specs and consumed by the comparator/export.
//
// - SegmentRecord / StatEntry / ActivityDataset: one extracted activity page.
// - ComparisonRow: one matched segment between two activities.
//
// Everything here is owned, immutable-after-build data (Send + Sync), so it can
// cross threads and go straight to serde.

use serde::{Deserialize, Serialize};

use crate::core::parse::{parse_speed_value, parse_time_to_seconds};

/// One segment effort as listed on an activity page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentRecord {
    pub name: String,
    /// Raw display text, e.g. "4:12" (or "N/A").
    pub time: String,
    pub time_seconds: u64,
    /// Raw display text, e.g. "32.1 km/h" (or "N/A").
    pub speed: String,
    pub speed_value: f64,
    pub distance: Option<String>,
    pub power: Option<String>,
    pub link: Option<String>,
    /// 1-based position on the source page.
    pub order: usize,
}

impl SegmentRecord {
    /// Build a record; numeric fields are derived from the display text.
    pub fn new(name: impl Into<String>, time: impl Into<String>, speed: impl Into<String>, order: usize) -> Self {
        let time = time.into();
        let speed = speed.into();
        Self {
            name: name.into(),
            time_seconds: parse_time_to_seconds(&time),
            speed_value: parse_speed_value(&speed),
            time,
            speed,
            distance: None,
            power: None,
            link: None,
            order,
        }
    }

    pub fn with_distance(mut self, distance: Option<String>) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_power(mut self, power: Option<String>) -> Self {
        self.power = power;
        self
    }

    pub fn with_link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }
}

/// One activity-level metric.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    /// Display text as found on the page.
    pub label: String,
    /// `normalize_label(label)`; unique within one dataset.
    pub key: String,
    pub value: String,
}

/// Everything extracted from one activity page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityDataset {
    pub activity_id: String,
    pub title: String,
    pub url: String,
    pub athlete_name: Option<String>,
    pub segments: Vec<SegmentRecord>,
    pub stats: Vec<StatEntry>,
    /// Rows dropped for lacking an effort id.
    pub skipped_rows: usize,
}

impl ActivityDataset {
    pub fn stat(&self, label: &str) -> Option<&str> {
        let key = crate::specs::classify::normalize_label(label);
        self.stats.iter().find(|s| s.key == key).map(|s| s.value.as_str())
    }
}

/// One segment present in both activities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub name: String,
    pub link: Option<String>,
    /// Page position of the segment in the first activity.
    pub order: usize,
    pub time_1: String,
    pub time_2: String,
    pub time_diff: String,
    pub speed_1: String,
    pub speed_2: String,
    pub speed_diff: String,
}

impl ComparisonRow {
    /// Cells in export column order (see `COMPARISON_HEADERS`).
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.time_1.clone(),
            self.time_2.clone(),
            self.time_diff.clone(),
            self.speed_1.clone(),
            self.speed_2.clone(),
            self.speed_diff.clone(),
        ]
    }
}
