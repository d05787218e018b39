// src/specs/athlete.rs
//! Athlete display name, best effort.
//!
//! Tried in order, first non-empty answer wins:
//! profile link with the `minimal` class, the owner-name test id, any profile
//! link, then the OpenGraph title and description text.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::config::consts::SITE_NAME;
use crate::core::html::{doc_first, meta_content, text_trim};

type Strategy = fn(&Html) -> Option<String>;

const STRATEGIES: &[(&str, Strategy)] = &[
    ("minimal profile link", from_minimal_link),
    ("owner-name testid", from_owner_testid),
    ("profile link", from_profile_link),
    ("og:title", from_og_title),
    ("og:description by-line", from_og_byline),
    ("og:description verb", from_og_verb),
];

static RE_BYLINE: LazyLock<Regex> = LazyLock::new(|| {
    let site = regex::escape(SITE_NAME);
    Regex::new(&format!(r"(?i)by\s+([^|–-]+?)\s+on\s+{site}")).expect("invalid regex: byline")
});

static RE_NAME_VERB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([\p{L}\s.'-]{3,})\s+(?:ran|rode|walked|hiked|skied|swam)\b")
        .expect("invalid regex: name verb")
});

pub fn extract_athlete_name(doc: &Html) -> Option<String> {
    for (what, strategy) in STRATEGIES {
        if let Some(name) = strategy(doc).filter(|n| !n.is_empty()) {
            logd!("Athlete name from {what}: {name:?}");
            return Some(name);
        }
    }
    logd!("Athlete name not found");
    None
}

/* ---------- strategies ---------- */

fn from_minimal_link(doc: &Html) -> Option<String> {
    doc_first(doc, r#"a.minimal[href^="/athletes/"]"#).map(text_trim)
}

fn from_owner_testid(doc: &Html) -> Option<String> {
    doc_first(doc, r#"[data-testid="owner-name"]"#).map(text_trim)
}

fn from_profile_link(doc: &Html) -> Option<String> {
    doc_first(doc, r#"a[href^="/athletes/"]"#).map(text_trim)
}

/// "Jane Doe - Morning Ride" or "Morning Ride | Jane Doe".
fn from_og_title(doc: &Html) -> Option<String> {
    let title = meta_content(doc, "og:title")?;

    if let Some((left, right)) = split_pair(&title, " - ") {
        if let Some(name) = [left, right].into_iter().find(|s| is_multi_word(s)) {
            return Some(s!(name));
        }
    }
    if let Some((left, right)) = split_pair(&title, " | ") {
        if let Some(name) = [right, left].into_iter().find(|s| is_multi_word(s)) {
            return Some(s!(name));
        }
    }
    None
}

/// "… by Jane Doe on Strava".
fn from_og_byline(doc: &Html) -> Option<String> {
    let desc = meta_content(doc, "og:description")?;
    RE_BYLINE.captures(&desc).map(|c| s!(c[1].trim()))
}

/// "Jane Doe rode 52.3 km …".
fn from_og_verb(doc: &Html) -> Option<String> {
    let desc = meta_content(doc, "og:description")?;
    RE_NAME_VERB.captures(&desc).map(|c| s!(c[1].trim()))
}

/* ---------- helpers ---------- */

/// First two pieces of `s` split on `sep`, trimmed.
fn split_pair<'a>(s: &'a str, sep: &str) -> Option<(&'a str, &'a str)> {
    let mut parts = s.split(sep);
    let left = parts.next()?.trim();
    let right = parts.next()?.trim();
    Some((left, right))
}

fn is_multi_word(s: &str) -> bool {
    s.split(' ').count() >= 2
}
