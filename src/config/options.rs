// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator for tabular formats; `None` for JSON.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    /// User-supplied path (file or directory). `None` → default location / stdout.
    pub out: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out: None,
        }
    }
}

impl ExportOptions {
    /// Default file name for a comparison export, e.g. `strava_segment_comparison.csv`.
    pub fn default_compare_filename(&self) -> String {
        join!(DEFAULT_COMPARE_FILE, ".", self.format.ext())
    }

    /// Default comparison path under `out/`.
    pub fn default_compare_path(&self) -> PathBuf {
        PathBuf::from(DEFAULT_OUT_DIR).join(self.default_compare_filename())
    }
}

/// One saved activity page plus the URL it was loaded from (if known).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub path: PathBuf,
    pub url: Option<String>,
}

impl Snapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), url: None }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Extract both pages and write the segment comparison.
    Compare { a: Snapshot, b: Snapshot },
    /// Extract one page and write its segments (or stats).
    Extract { page: Snapshot, stats: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub command: Command,
    pub export: ExportOptions,
}
