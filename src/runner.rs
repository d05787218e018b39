// src/runner.rs
//
// Orchestration: load snapshots → extract → compare/export.
// All I/O lives here; specs/ and compare.rs stay pure.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::thread;

use crate::compare::compare;
use crate::config::options::{Command, ExportFormat, ExportOptions, Params, Snapshot};
use crate::csv::{comparison_to_string, segments_to_string, stats_to_string};
use crate::data::{ActivityDataset, ComparisonRow};
use crate::file::{resolve_single_out_path, write_export};
use crate::specs::activity::{extract_html, is_activity_url};

/// What a run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    /// Export text when no output file was requested (extract → stdout).
    pub stdout: Option<String>,
}

/// Top-level runner: dispatch on command.
pub fn run(params: &Params) -> Result<RunSummary, Box<dyn Error>> {
    match &params.command {
        Command::Compare { a, b } => run_compare(a, b, &params.export),
        Command::Extract { page, stats } => run_extract(page, *stats, &params.export),
    }
}

/// Read one saved page and extract it.
pub fn load_snapshot(snap: &Snapshot) -> Result<ActivityDataset, Box<dyn Error>> {
    if let Some(url) = &snap.url {
        if !is_activity_url(url) {
            return Err(format!("Not an activity URL: {url}").into());
        }
    }
    let html = fs::read_to_string(&snap.path)
        .map_err(|e| format!("Cannot read {}: {e}", snap.path.display()))?;
    logd!("Loaded {} ({} bytes)", snap.path.display(), html.len());

    let dataset = extract_html(&html, snap.url.as_deref())
        .map_err(|e| format!("{}: {e}", snap.path.display()))?;
    Ok(dataset)
}

/// Extract both snapshots, one worker thread each.
pub fn extract_pair(a: &Snapshot, b: &Snapshot) -> Result<(ActivityDataset, ActivityDataset), Box<dyn Error>> {
    // Box<dyn Error> is not Send; carry the message across the join.
    let load = |snap: &Snapshot| load_snapshot(snap).map_err(|e| e.to_string());

    let (ra, rb) = thread::scope(|scope| {
        let ha = scope.spawn(|| load(a));
        let hb = scope.spawn(|| load(b));
        (join_worker(ha.join()), join_worker(hb.join()))
    });

    Ok((ra?, rb?))
}

/// Extract and compare two snapshots, no file output.
pub fn compare_snapshots(a: &Snapshot, b: &Snapshot) -> Result<Vec<ComparisonRow>, Box<dyn Error>> {
    let (da, db) = extract_pair(a, b)?;
    Ok(compare(&da, &db))
}

/* ---------------- commands ---------------- */

fn run_compare(a: &Snapshot, b: &Snapshot, export: &ExportOptions) -> Result<RunSummary, Box<dyn Error>> {
    let sep = export
        .format
        .delim()
        .ok_or("Comparison export supports csv or tsv only")?;

    let rows = compare_snapshots(a, b)?;
    if rows.is_empty() {
        logw!("No common segments between {} and {}", a.path.display(), b.path.display());
    }

    let path = match &export.out {
        Some(out) => resolve_single_out_path(&out.to_string_lossy(), &export.default_compare_filename())?,
        None => export.default_compare_path(),
    };

    let contents = comparison_to_string(&rows, export.include_headers, sep);
    let written = write_export(&path, &contents)?;
    Ok(RunSummary { files_written: vec![written], stdout: None })
}

fn run_extract(page: &Snapshot, stats: bool, export: &ExportOptions) -> Result<RunSummary, Box<dyn Error>> {
    let dataset = load_snapshot(page)?;
    let contents = render_dataset(&dataset, stats, export)?;

    match &export.out {
        Some(out) => {
            let default_name = join!(&dataset.activity_id, ".", export.format.ext());
            let path = resolve_single_out_path(&out.to_string_lossy(), &default_name)?;
            let written = write_export(&path, &contents)?;
            Ok(RunSummary { files_written: vec![written], stdout: None })
        }
        None => Ok(RunSummary { files_written: Vec::new(), stdout: Some(contents) }),
    }
}

/// Serialize one dataset in the requested format.
pub fn render_dataset(dataset: &ActivityDataset, stats: bool, export: &ExportOptions) -> Result<String, Box<dyn Error>> {
    match (export.format, export.format.delim()) {
        (ExportFormat::Json, _) if stats => Ok(serde_json::to_string_pretty(&dataset.stats)?),
        (ExportFormat::Json, _) => Ok(serde_json::to_string_pretty(dataset)?),
        (_, Some(sep)) if stats => Ok(stats_to_string(&dataset.stats, export.include_headers, sep)),
        (_, Some(sep)) => Ok(segments_to_string(&dataset.segments, export.include_headers, sep)),
        (_, None) => Err(format!("Unsupported format: {}", export.format.ext()).into()),
    }
}

/* ---------------- helpers ---------------- */

fn join_worker<T>(
    joined: thread::Result<Result<T, String>>,
) -> Result<T, Box<dyn Error>> {
    match joined {
        Ok(res) => res.map_err(Into::into),
        Err(_) => {
            loge!("Extraction worker panicked");
            Err("Extraction worker panicked".into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_activity_urls_before_reading() {
        let mut snap = Snapshot::new("does/not/exist.html");
        snap.url = Some(s!("https://example.com/activities/1"));
        let err = load_snapshot(&snap).unwrap_err().to_string();
        assert!(err.contains("Not an activity URL"), "{err}");
    }

    #[test]
    fn missing_file_names_the_path() {
        let snap = Snapshot::new("does/not/exist.html");
        let err = load_snapshot(&snap).unwrap_err().to_string();
        assert!(err.contains("exist.html"), "{err}");
    }

    #[test]
    fn render_json_and_tables() {
        let ds = ActivityDataset {
            activity_id: s!("42"),
            title: s!("Ride"),
            url: s!(),
            athlete_name: Some(s!("Jane Doe")),
            segments: vec![crate::data::SegmentRecord::new("Hill", "1:00", "10 km/h", 1)],
            stats: vec![],
            skipped_rows: 0,
        };

        let json_opts = ExportOptions { format: ExportFormat::Json, ..Default::default() };
        let json = render_dataset(&ds, false, &json_opts).unwrap();
        let back: ActivityDataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ds);
        assert_eq!(render_dataset(&ds, true, &json_opts).unwrap(), "[]");

        let tsv_opts = ExportOptions { format: ExportFormat::Tsv, include_headers: false, out: None };
        assert_eq!(render_dataset(&ds, false, &tsv_opts).unwrap(), "1\tHill\t1:00\t10 km/h\t\t\t\n");
    }
}
