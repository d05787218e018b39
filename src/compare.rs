// src/compare.rs
//! Segment-by-segment comparison of two extracted activities.
//!
//! Inner join on the exact segment name (no case/whitespace folding: the same
//! segment rendered differently on two pages will not match). Output follows the
//! first activity's page order.

use std::collections::HashMap;

use crate::config::consts::SPEED_UNIT;
use crate::core::parse::format_time_diff;
use crate::data::{ActivityDataset, ComparisonRow, SegmentRecord};

/// Match `b`'s segments against `a`'s and diff each pair (`b` minus `a`).
pub fn compare(a: &ActivityDataset, b: &ActivityDataset) -> Vec<ComparisonRow> {
    // Duplicate names in `a`: the later row wins the key.
    let mut by_name: HashMap<&str, &SegmentRecord> = HashMap::with_capacity(a.segments.len());
    for seg in &a.segments {
        by_name.insert(seg.name.as_str(), seg);
    }

    let mut rows = Vec::new();
    for seg_b in &b.segments {
        // Removing on hit keeps one `a` segment from pairing twice.
        if let Some(seg_a) = by_name.remove(seg_b.name.as_str()) {
            rows.push(diff_pair(seg_a, seg_b));
        }
    }

    if !by_name.is_empty() {
        let mut unmatched: Vec<&str> = by_name.keys().copied().collect();
        unmatched.sort_unstable();
        logd!("{} segments of activity {} unmatched: {:?}", unmatched.len(), a.activity_id, unmatched);
    }

    rows.sort_by_key(|r| r.order);
    logf!(
        "Compared activity {} with {}: {} common segments",
        a.activity_id, b.activity_id, rows.len()
    );
    rows
}

fn diff_pair(a: &SegmentRecord, b: &SegmentRecord) -> ComparisonRow {
    // Beyond i64 is not a real effort time; diff it as 0 like other junk.
    let secs_a = i64::try_from(a.time_seconds).unwrap_or(0);
    let secs_b = i64::try_from(b.time_seconds).unwrap_or(0);
    let speed_delta = b.speed_value - a.speed_value;

    ComparisonRow {
        name: a.name.clone(),
        link: a.link.clone(),
        order: a.order,
        time_1: a.time.clone(),
        time_2: b.time.clone(),
        time_diff: format_time_diff(secs_b.saturating_sub(secs_a)),
        speed_1: a.speed.clone(),
        speed_2: b.speed.clone(),
        speed_diff: format_speed_diff(speed_delta),
    }
}

/// One decimal, natural sign only: 2.0 → "2.0 km/h", -1.04 → "-1.0 km/h".
pub fn format_speed_diff(delta: f64) -> String {
    format!("{delta:.1} {SPEED_UNIT}")
}
