// src/specs/classify.rs
//! Label/value heuristics for activity stats.
//!
//! Stat blocks come in both orders ("Distance 56.78 km" and "56.78 km Distance"),
//! so candidate pairs are classified with two small rule tables and flipped
//! when they are clearly value-first. The tables are plain data; extend them
//! here, not in the extraction control flow.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::sanitize::normalize_ws;

/// Unit alternation shared by the value rules and the value-then-label splitters.
pub(crate) const UNITS: &str = r"km/h|km|mi|mph|m|W|kJ|bpm|%|°C|℃";

/// Whole-text shapes that read as a value.
static VALUE_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // clock time: 4:26:05, 26:05
        r"^\d{1,2}:\d{2}(?::\d{2})?$".to_string(),
        // number + unit: 56.78 km, 126 W, 98%, 32.4 km/h
        format!(r"(?i)^[-+]?\d[\d.,\s]*\s*(?:{UNITS})$"),
        // bare temperature: 9 ℃, 17 °C
        r"(?i)^[-+]?\d[\d.,]*\s*(?:°C|℃)$".to_string(),
        // wind direction: SSW, NE, W
        r"(?i)^[NSEW]{1,3}$".to_string(),
        // plain number
        r"^[-+]?\d[\d.,]*$".to_string(),
        // weather words
        r"(?i)^(?:Cloudy|Sunny|Rainy|Windy|Clear|Overcast|Snowy|Hazy)$".to_string(),
    ]
    .iter()
    .map(|p| Regex::new(p).expect("invalid regex: value rule"))
    .collect()
});

/// Substrings that mark a stat label.
pub const LABEL_KEYWORDS: &[&str] = &[
    "distance", "moving time", "elapsed time", "estimated avg power", "weighted avg power",
    "avg power", "energy output", "calories", "temperature", "humidity", "feels like",
    "wind speed", "wind direction", "heart rate", "avg heart rate", "max heart rate",
    "cadence", "power", "avg speed", "max speed", "device", "bike", "gear",
];

static RE_LABEL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z\s%°/+-]*$").expect("invalid regex: label shape")
});

static RE_THREE_LETTERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z]{3,}").expect("invalid regex: three letters")
});

pub fn is_likely_value(text: &str) -> bool {
    let t = text.trim();
    !t.is_empty() && VALUE_RULES.iter().any(|re| re.is_match(t))
}

pub fn is_likely_label(text: &str) -> bool {
    let t = text.trim();
    if t.is_empty() { return false; }

    let lower = t.to_lowercase();
    if LABEL_KEYWORDS.iter().any(|k| lower.contains(k)) { return true; }

    RE_LABEL_SHAPE.is_match(t) && RE_THREE_LETTERS.is_match(t)
}

/// Dedup/match key for labels: lowercase, collapsed whitespace, trimmed.
pub fn normalize_label(text: &str) -> String {
    normalize_ws(&text.to_lowercase())
}

/// Turn a candidate pair of unknown orientation into `(label, value)`.
/// Flips only when the first side reads as a value and the second as a label.
pub fn orient(first: &str, second: &str) -> (String, String) {
    let (a, b) = (first.trim(), second.trim());
    if is_likely_value(a) && is_likely_label(b) {
        (s!(b), s!(a))
    } else {
        (s!(a), s!(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values() {
        for v in ["4:26:05", "26:05", "56.78 km", "126 W", "1,234 kJ", "152 bpm", "98%", "9 ℃",
                  "17 °C", "32.4 km/h", "SSW", "ne", "42", "-3.5", "Cloudy", "overcast"] {
            assert!(is_likely_value(v), "{v} should be a value");
        }
        for v in ["", "  ", "Distance", "Moving Time", "Garmin Edge 530", "12 apples"] {
            assert!(!is_likely_value(v), "{v} should not be a value");
        }
    }

    #[test]
    fn labels() {
        for l in ["Distance", "Moving Time", "Estimated Avg Power", "Avg Heart Rate", "Bike",
                  "Elevation", "Max Speed (km/h)", "Feels like"] {
            assert!(is_likely_label(l), "{l} should be a label");
        }
        for l in ["", "4:26:05", "56.78", "NE", "7%"] {
            assert!(!is_likely_label(l), "{l} should not be a label");
        }
    }

    #[test]
    fn normalize_label_folds_case_and_space() {
        assert_eq!(normalize_label("  Moving\n   TIME "), "moving time");
    }

    #[test]
    fn orient_swaps_value_first_pairs() {
        assert_eq!(orient("56.78 km", "Distance"), (s!("Distance"), s!("56.78 km")));
        assert_eq!(orient(" 4:26:05 ", "Moving Time"), (s!("Moving Time"), s!("4:26:05")));
        // already label-first: untouched
        assert_eq!(orient("Distance", "56.78 km"), (s!("Distance"), s!("56.78 km")));
        // two values: untouched
        assert_eq!(orient("12", "34"), (s!("12"), s!("34")));
    }
}
