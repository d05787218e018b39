// src/core/parse.rs
//! Unit-aware text parsers for segment times and speeds.
//!
//! All of these are total: page text is never guaranteed clean, so bad input
//! degrades to a neutral value (0 / "N/A") instead of an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::NOT_AVAILABLE;

static RE_FIRST_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)").expect("invalid regex: first number")
});

/// "1:02:03" → 3723, "2:15" → 135, "45" / "45s" → 45.
/// Empty, "N/A" and anything malformed → 0.
pub fn parse_time_to_seconds(text: &str) -> u64 {
    let t = text.trim();
    if t.is_empty() || t == NOT_AVAILABLE { return 0; }

    let parts: Vec<&str> = t.split(':').map(str::trim).collect();
    let nums: Option<Vec<u64>> = match parts.as_slice() {
        [secs] => {
            let secs = secs.strip_suffix('s').unwrap_or(*secs);
            secs.trim().parse::<u64>().ok().map(|v| vec![v])
        }
        [_, _] | [_, _, _] => parts.iter().map(|p| p.parse::<u64>().ok()).collect(),
        _ => None,
    };

    let total = match nums.as_deref() {
        Some(&[h, m, s]) => clock_seconds(h, m, s),
        Some(&[m, s]) => clock_seconds(0, m, s),
        Some(&[s]) => Some(s),
        _ => None,
    };
    // overflow counts as malformed
    total.unwrap_or(0)
}

fn clock_seconds(h: u64, m: u64, s: u64) -> Option<u64> {
    h.checked_mul(3600)?
        .checked_add(m.checked_mul(60)?)?
        .checked_add(s)
}

/// Signed delta for display: 0 → "0:00", 65 → "+1:05", -3661 → "-1:01:01".
pub fn format_time_diff(delta_seconds: i64) -> String {
    if delta_seconds == 0 { return s!("0:00"); }

    let sign = if delta_seconds > 0 { '+' } else { '-' };
    let abs = delta_seconds.unsigned_abs();
    let (h, m, sec) = (abs / 3600, (abs % 3600) / 60, abs % 60);

    if h > 0 {
        format!("{sign}{h}:{m:02}:{sec:02}")
    } else {
        format!("{sign}{m}:{sec:02}")
    }
}

/// First numeric token of a speed string: "32.4 km/h" → 32.4. No number → 0.
pub fn parse_speed_value(text: &str) -> f64 {
    let t = text.trim();
    if t.is_empty() || t == NOT_AVAILABLE { return 0.0; }

    RE_FIRST_NUMBER
        .captures(t)
        .and_then(|c| c[1].parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Unsigned display form of a duration: "m:ss" or "h:mm:ss".
/// Fractions are floored; NaN, infinities and negatives → "N/A".
pub fn format_seconds_to_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 { return s!(NOT_AVAILABLE); }

    let total = seconds.floor() as u64;
    let (h, m, sec) = (total / 3600, (total % 3600) / 60, total % 60);

    if h > 0 {
        format!("{h}:{m:02}:{sec:02}")
    } else {
        format!("{m}:{sec:02}")
    }
}
