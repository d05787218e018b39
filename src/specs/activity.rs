// src/specs/activity.rs
//! Scraping *spec* for an activity page.
//!
//! Purpose:
//! - Find the segment-efforts table through an ordered list of container selectors.
//! - Resolve its rows through an ordered list of row selectors.
//! - Pull name / time / speed / distance / power per row, each with its own
//!   fallback chain, and build one `SegmentRecord` per row that carries an effort id.
//! - Attach activity stats (`specs::stats`) and the athlete name (`specs::athlete`).
//!
//! Failure policy:
//! - No container, or a container with no rows → `ExtractError`.
//! - Anything per-row or per-stat is soft: placeholders, `None`, skipped rows, logs.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};

use crate::config::consts::{EFFORT_ID_ATTR, NOT_AVAILABLE, SITE_BASE, UNKNOWN_ACTIVITY};
use crate::core::html::{self, Locator, attr, doc_all, doc_first, locate, select_all, text_trim};
use crate::data::{ActivityDataset, SegmentRecord};

use super::{athlete, stats};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("Segments section not found on this activity")]
    SegmentsNotFound,
    #[error("No segments found for this activity")]
    NoSegmentRows,
}

/* ---------- selector tables ---------- */

/// Segment container candidates, most specific first.
pub const CONTAINER_SELECTORS: &[&str] = &[
    "table.segments",
    ".segments-list",
    ".segments table",
    r#"[data-react-class="SegmentLeaderboard"]"#,
    ".segment-efforts",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowScope {
    Container,
    Document,
}

pub const ROW_SELECTORS: &[(&str, RowScope)] = &[
    ("tbody tr", RowScope::Container),
    ("tr.segment-effort", RowScope::Container),
    (".segment-row", RowScope::Container),
    (r#"[data-testid="segment-effort-row"]"#, RowScope::Document),
];

const NAME_CHAIN: &[Locator] = &[
    Locator::Css(".name"),
    Locator::Css(".segment-name"),
    Locator::Css(r#"[data-testid="segment-name"]"#),
    Locator::Css("a"),
];

const TIME_CHAIN: &[Locator] = &[
    Locator::Css(".time"),
    Locator::Css(".segment-time"),
    Locator::Css(".time-col"),
    Locator::Css(r#"[data-testid="segment-time"]"#),
    Locator::CellText(is_clock_cell),
];

const SPEED_CHAIN: &[Locator] = &[
    Locator::Css(".speeds .text-nowrap"),
    Locator::Css(".speed"),
    Locator::Css(r#"[data-testid="segment-speed"]"#),
    Locator::CellText(is_speed_cell),
];

const DISTANCE_CHAIN: &[Locator] = &[Locator::Css(".distance")];
const POWER_CHAIN: &[Locator] = &[Locator::Css(".power")];

static RE_CLOCK_CELL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+:\d+$").expect("invalid regex: clock cell")
});

static RE_ACTIVITY_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"activities/(\d+)").expect("invalid regex: activity id")
});

static RE_ACTIVITY_URL: LazyLock<Regex> = LazyLock::new(|| {
    let base = regex::escape(SITE_BASE);
    Regex::new(&format!(r"^{base}/activities/\d+")).expect("invalid regex: activity url")
});

fn is_clock_cell(text: &str) -> bool {
    RE_CLOCK_CELL.is_match(text)
}

fn is_speed_cell(text: &str) -> bool {
    text.contains("km/h") || text.contains("mph")
}

/* ---------- entry points ---------- */

/// Parse an HTML snapshot and extract it. `url` overrides the URL found in the page.
pub fn extract_html(html_text: &str, url: Option<&str>) -> Result<ActivityDataset, ExtractError> {
    let doc = Html::parse_document(html_text);
    let url = match url {
        Some(u) => s!(u),
        None => document_url(&doc).unwrap_or_default(),
    };
    extract(&doc, &url)
}

/// Extract segments, stats and athlete name from a loaded activity document.
pub fn extract(doc: &Html, url: &str) -> Result<ActivityDataset, ExtractError> {
    let title = html::title(doc);
    let activity_id = activity_id_from_url(url).unwrap_or_else(|| s!(UNKNOWN_ACTIVITY));
    logf!("Processing activity #{activity_id}: {title:?}");

    let athlete_name = athlete::extract_athlete_name(doc);
    let stats = stats::extract_stats(doc);
    logd!("Extracted {} activity stats entries", stats.len());

    let container = find_container(doc).ok_or_else(|| {
        loge!("Segments section not found ({} tables on page)", doc_all(doc, "table").len());
        ExtractError::SegmentsNotFound
    })?;

    let rows = find_rows(doc, container).ok_or_else(|| {
        loge!("No segment rows found in the segments container");
        ExtractError::NoSegmentRows
    })?;
    logd!("Found {} segment rows", rows.len());

    let mut segments = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;

    for (index, row) in rows.into_iter().enumerate() {
        let position = index + 1;
        match extract_row(row, position, &activity_id) {
            Some(seg) => segments.push(seg),
            None => {
                logw!("Segment #{position}: effort id not found, skipping");
                skipped += 1;
            }
        }
    }

    logf!("Extracted {} segments (skipped {skipped})", segments.len());

    Ok(ActivityDataset {
        activity_id,
        title,
        url: s!(url),
        athlete_name,
        segments,
        stats,
        skipped_rows: skipped,
    })
}

/* ---------- helpers ---------- */

fn find_container(doc: &Html) -> Option<ElementRef<'_>> {
    CONTAINER_SELECTORS.iter().find_map(|css| {
        let hit = doc_first(doc, css);
        if hit.is_some() {
            logd!("Found segments container using selector: {css}");
        }
        hit
    })
}

/// First row selector that yields at least one row.
fn find_rows<'a>(doc: &'a Html, container: ElementRef<'a>) -> Option<Vec<ElementRef<'a>>> {
    ROW_SELECTORS.iter().find_map(|(css, scope)| {
        let rows = match scope {
            RowScope::Container => select_all(container, css),
            RowScope::Document => doc_all(doc, css),
        };
        (!rows.is_empty()).then_some(rows)
    })
}

/// One row → one record. `None` only when the row has no effort id.
fn extract_row(row: ElementRef<'_>, position: usize, activity_id: &str) -> Option<SegmentRecord> {
    let effort_id = attr(row, EFFORT_ID_ATTR)
        .map(str::trim)
        .filter(|id| !id.is_empty())?;

    let link = format!("{SITE_BASE}/activities/{activity_id}/segments/{effort_id}");

    let name = field(row, NAME_CHAIN).unwrap_or_else(|| format!("Segment {position}"));
    let time = field(row, TIME_CHAIN).unwrap_or_else(|| s!(NOT_AVAILABLE));
    let speed = field(row, SPEED_CHAIN).unwrap_or_else(|| s!(NOT_AVAILABLE));
    logd!("Segment #{position}: name={name:?} time={time:?} speed={speed:?}");

    Some(
        SegmentRecord::new(name, time, speed, position)
            .with_distance(field(row, DISTANCE_CHAIN))
            .with_power(field(row, POWER_CHAIN))
            .with_link(Some(link)),
    )
}

fn field(row: ElementRef<'_>, chain: &[Locator]) -> Option<String> {
    locate(row, chain).map(text_trim)
}

/// Page URL from `og:url` or the canonical link, when the snapshot carries one.
pub fn document_url(doc: &Html) -> Option<String> {
    html::meta_content(doc, "og:url").or_else(|| {
        doc_first(doc, r#"link[rel="canonical"]"#)
            .and_then(|l| attr(l, "href"))
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
    })
}

/// "…/activities/123456/…" → "123456".
pub fn activity_id_from_url(url: &str) -> Option<String> {
    RE_ACTIVITY_ID.captures(url).map(|c| s!(&c[1]))
}

/// True for `https://www.strava.com/activities/<digits>…`.
pub fn is_activity_url(url: &str) -> bool {
    RE_ACTIVITY_URL.is_match(url.trim())
}
