// src/lib.rs
//! Segment extraction and comparison for saved activity pages.
//!
//! `specs` turns one page snapshot into an [`data::ActivityDataset`];
//! [`compare::compare`] joins two of them by segment name; `csv`/`file`/`runner`
//! handle export. The `cli` module backs the `seg_compare` binary.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod data;
pub mod specs;

pub mod compare;
pub mod csv;
pub mod file;
pub mod runner;

pub mod cli;
