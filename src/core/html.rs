// src/core/html.rs
//! Read-only DOM helpers over `scraper`, plus the fallback-chain primitive
//! (`Locator` / `locate`) every page spec is built from.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

/// Parse a CSS selector. A bad selector is a programming error in a spec table,
/// so it is logged and treated as "matches nothing" rather than aborting the page.
pub fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            loge!("Invalid selector {css:?}: {e:?}");
            None
        }
    }
}

/// First element in the whole document matching `css`.
pub fn doc_first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let sel = selector(css)?;
    doc.select(&sel).next()
}

/// All elements in the whole document matching `css`, in document order.
pub fn doc_all<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match selector(css) {
        Some(sel) => doc.select(&sel).collect(),
        None => Vec::new(),
    }
}

/// First descendant of `scope` matching `css` (scope itself excluded).
pub fn select_first<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let sel = selector(css)?;
    scope.select(&sel).next()
}

/// All descendants of `scope` matching `css`, in document order.
pub fn select_all<'a>(scope: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match selector(css) {
        Some(sel) => scope.select(&sel).collect(),
        None => Vec::new(),
    }
}

/// Direct element children only (text nodes skipped).
pub fn child_elements(el: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    el.children().filter_map(ElementRef::wrap).collect()
}

/// Concatenated descendant text, untouched (DOM `textContent`).
pub fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// `textContent` trimmed at both ends.
pub fn text_trim(el: ElementRef<'_>) -> String {
    text_content(el).trim().to_string()
}

/// `textContent` with whitespace runs collapsed.
pub fn text_norm(el: ElementRef<'_>) -> String {
    normalize_ws(&text_content(el))
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// `<meta property=… content=…>` value, trimmed, non-empty.
pub fn meta_content(doc: &Html, property: &str) -> Option<String> {
    let css = format!(r#"meta[property="{property}"]"#);
    doc_first(doc, &css)
        .and_then(|m| attr(m, "content"))
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

/// Document `<title>` text (whitespace-collapsed); empty when missing.
pub fn title(doc: &Html) -> String {
    doc_first(doc, "title").map(text_norm).unwrap_or_default()
}

/* ---------- fallback chains ---------- */

/// One step of an ordered fallback chain.
#[derive(Clone, Copy)]
pub enum Locator {
    /// First descendant matching a CSS selector.
    Css(&'static str),
    /// First `td` whose trimmed text satisfies the predicate.
    CellText(fn(&str) -> bool),
}

impl Locator {
    pub fn find<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        match self {
            Locator::Css(css) => select_first(scope, css),
            Locator::CellText(pred) => select_all(scope, "td")
                .into_iter()
                .find(|td| pred(&text_trim(*td))),
        }
    }
}

/// Evaluate a chain in order; first locator that finds something wins.
pub fn locate<'a>(scope: ElementRef<'a>, chain: &[Locator]) -> Option<ElementRef<'a>> {
    chain.iter().find_map(|loc| loc.find(scope))
}
