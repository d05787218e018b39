// src/specs/stats.rs
//! Activity-level stats ("Distance 56.78 km", "Moving Time 4:26:05", weather, gear…).
//!
//! The stats panel has no stable markup, so every `.section.more-stats`
//! container is read with four strategies in a fixed order, all of which
//! contribute pairs:
//!
//! 1. two-column table rows
//! 2. `dl` term/definition pairs by index
//! 3. "stat"-classed blocks with label/value children
//! 4. freeform `li`/`div`/`span` text (colon, wide gap, or value-then-label)
//!
//! Every pair is oriented (`classify::orient`) and deduplicated by normalized
//! label; the first occurrence wins. Never fails: worst case is an empty list.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};

use crate::core::html::{child_elements, doc_all, select_all, select_first, text_content, text_norm};
use crate::core::sanitize::split_at_gap;
use crate::data::StatEntry;

use super::classify::{UNITS, normalize_label, orient};

pub const STATS_CONTAINER: &str = ".section.more-stats";

const STAT_BLOCK: &str = r#"[class*="stat" i]"#;
const STAT_LABEL: &str = r#"[class*="label" i], [data-testid*="label" i]"#;
const STAT_VALUE: &str = r#"[class*="value" i], [data-testid*="value" i]"#;
const FREEFORM: &str = "li, div, span";

/// "56.78 km Distance", "4:26:05 Moving Time", "SSW Wind Direction" → (value, label).
static VALUE_THEN_LABEL: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^(\d{1,2}:\d{2}(?::\d{2})?)\s+(.+)$".to_string(),
        format!(r"(?i)^([-+]?\d[\d.,\s]*\s*(?:{UNITS}))\s+(.+)$"),
        r"(?i)^([NSEW]{1,3})\s+(.+)$".to_string(),
    ]
    .iter()
    .map(|p| Regex::new(p).expect("invalid regex: value-then-label"))
    .collect()
});

/// Ordered, first-wins collection of stat pairs.
#[derive(Default)]
struct StatSink {
    seen: HashSet<String>,
    out: Vec<StatEntry>,
}

impl StatSink {
    fn push(&mut self, first: &str, second: &str) {
        let (label, value) = orient(first, second);
        let key = normalize_label(&label);
        if key.is_empty() || value.is_empty() || self.seen.contains(&key) {
            return;
        }
        self.seen.insert(key.clone());
        self.out.push(StatEntry { label, key, value });
    }
}

pub fn extract_stats(doc: &Html) -> Vec<StatEntry> {
    let containers = doc_all(doc, STATS_CONTAINER);
    if containers.is_empty() {
        logw!("No {STATS_CONTAINER:?} container found");
        return Vec::new();
    }

    let mut sink = StatSink::default();
    for container in containers {
        from_tables(container, &mut sink);
        from_definition_lists(container, &mut sink);
        from_stat_blocks(container, &mut sink);
        from_freeform(container, &mut sink);
    }
    sink.out
}

/* ---------- strategies ---------- */

fn from_tables(container: ElementRef<'_>, sink: &mut StatSink) {
    for table in select_all(container, "table") {
        for tr in select_all(table, "tr") {
            let cells = select_all(tr, "th, td");
            if cells.len() < 2 { continue; }
            let label = text_content(cells[0]);
            let value = text_content(cells[1]);
            if !label.trim().is_empty() && !value.trim().is_empty() {
                sink.push(&label, &value);
            }
        }
    }
}

fn from_definition_lists(container: ElementRef<'_>, sink: &mut StatSink) {
    for dl in select_all(container, "dl") {
        let terms = select_all(dl, "dt");
        let defs = select_all(dl, "dd");
        for (dt, dd) in terms.into_iter().zip(defs) {
            sink.push(&text_content(dt), &text_content(dd));
        }
    }
}

fn from_stat_blocks(container: ElementRef<'_>, sink: &mut StatSink) {
    for block in select_all(container, STAT_BLOCK) {
        let label_el = select_first(block, STAT_LABEL);
        let value_el = select_first(block, STAT_VALUE);

        if let (Some(l), Some(v)) = (label_el, value_el) {
            let (label, value) = (text_content(l), text_content(v));
            if !label.trim().is_empty() && !value.trim().is_empty() {
                sink.push(&label, &value);
            }
            continue;
        }

        let children = child_elements(block);
        if children.len() >= 2 {
            let (label, value) = (text_content(children[0]), text_content(children[1]));
            if !label.trim().is_empty() && !value.trim().is_empty() {
                sink.push(&label, &value);
            }
        }
    }
}

fn from_freeform(container: ElementRef<'_>, sink: &mut StatSink) {
    for el in select_all(container, FREEFORM) {
        let text = text_norm(el);
        if text.is_empty() { continue; }
        if let Some((first, second)) = split_freeform(&text, &text_content(el)) {
            sink.push(&first, &second);
        }
    }
}

/// Candidate pair from one freeform element.
/// `text` is whitespace-collapsed; `raw` keeps the original spacing for the gap rule.
fn split_freeform(text: &str, raw: &str) -> Option<(String, String)> {
    if let Some(colon) = text.find(':') {
        if colon > 0 && colon < text.len() - 1 {
            let label = text[..colon].trim();
            let value = text[colon + 1..].trim();
            return (!label.is_empty() && !value.is_empty()).then(|| (s!(label), s!(value)));
        }
    }

    if let Some(pair) = split_at_gap(raw) {
        return Some(pair);
    }

    VALUE_THEN_LABEL.iter().find_map(|re| {
        let caps = re.captures(text)?;
        // stored as (label, value); orient() leaves it alone
        Some((s!(caps[2].trim()), s!(caps[1].trim())))
    })
}
