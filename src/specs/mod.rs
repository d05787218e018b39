// src/specs/mod.rs
//! # Page "specs"
//!
//! Page-specific scraping specifications: *where the ground truth lives in the
//! HTML* of an activity page and *how to read it robustly*.
//!
//! ## What lives here
//! - **Pure document reading** over an already-loaded snapshot (`scraper::Html`).
//! - **Selector choice & precedence** as ordered tables (container, rows, per-field
//!   chains), evaluated by `core::html::locate`.
//! - **Label/value heuristics** for the free-shape stats panel (`classify`).
//!
//! ## What does **not** live here
//! - Loading pages, retries, waiting for late content. Specs see a finished snapshot.
//! - Matching two activities (`compare`), export formatting (`csv`, `file`).
//!
//! ## Typical call chain
//! ```text
//! runner → specs::activity::extract_html()
//!              ├─ specs::athlete::extract_athlete_name()
//!              ├─ specs::stats::extract_stats()  ─ specs::classify
//!              └─ segment rows
//!        → compare::compare(a, b) → csv / file
//! ```
//!
//! ## Conventions
//! - Only two things are fatal: no segment container, no segment rows.
//! - Everything else degrades to placeholders / `None` / empty, with a log line.
//! - Specs never mutate the document.
pub mod activity;
pub mod athlete;
pub mod classify;
pub mod stats;

pub use activity::{ExtractError, extract, extract_html};
