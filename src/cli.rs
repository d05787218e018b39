// src/cli.rs
use std::error::Error;
use std::path::PathBuf;

use crate::config::consts::LOG_FILE;
use crate::config::options::{Command, ExportFormat, ExportOptions, Params, Snapshot};

pub const HELP: &str = include_str!("cli_help.txt");

/// Parse `std::env::args()` and run. `-h`/`--help` (or no args) prints usage.
pub fn run() -> Result<(), Box<dyn Error>> {
    let Some(params) = parse_args(std::env::args().skip(1))? else {
        eprintln!("{HELP}");
        return Ok(());
    };

    if let Err(e) = crate::log::init(LOG_FILE) {
        eprintln!("Debug log disabled ({LOG_FILE}): {e}");
    }

    let summary = crate::runner::run(&params)?;
    if let Some(text) = summary.stdout {
        print!("{text}");
    }
    for path in &summary.files_written {
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

/// Parse arguments (program name already stripped). `Ok(None)` means help.
pub fn parse_args<I>(args: I) -> Result<Option<Params>, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let sub = match args.next() {
        None => return Ok(None),
        Some(s) if s == "-h" || s == "--help" => return Ok(None),
        Some(s) => s,
    };

    let mut export = ExportOptions::default();
    let mut positional: Vec<String> = Vec::new();
    let mut url_a = None;
    let mut url_b = None;
    let mut stats = false;

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--url" | "--url-a" => url_a = Some(args.next().ok_or_else(|| format!("Missing value for {a}"))?),
            "--url-b" => url_b = Some(args.next().ok_or("Missing value for --url-b")?),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                export.format = ExportFormat::parse(&v).ok_or_else(|| format!("Unknown format: {v}"))?;}
            "--no-headers" => export.include_headers = false,
            "--stats" => stats = true,
            "-o" | "--out" => export.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "-h" | "--help" => return Ok(None),
            flag if flag.starts_with('-') && flag.len() > 1 => return Err(format!("Unknown arg: {flag}").into()),
            _ => positional.push(a),
        }
    }

    let command = match sub.as_str() {
        "compare" => {
            let [a, b] = <[String; 2]>::try_from(positional)
                .map_err(|_| "compare needs exactly two snapshot files")?;
            if stats {
                return Err("--stats applies to extract only".into());
            }
            if export.format == ExportFormat::Json {
                return Err("compare exports csv or tsv only".into());
            }
            Command::Compare {
                a: Snapshot { path: a.into(), url: url_a },
                b: Snapshot { path: b.into(), url: url_b },
            }
        }
        "extract" => {
            let [page] = <[String; 1]>::try_from(positional)
                .map_err(|_| "extract needs exactly one snapshot file")?;
            if url_b.is_some() {
                return Err("--url-b applies to compare only".into());
            }
            Command::Extract { page: Snapshot { path: page.into(), url: url_a }, stats }
        }
        other => return Err(format!("Unknown command: {other}").into()),
    };

    Ok(Some(Params { command, export }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Option<Params>, Box<dyn Error>> {
        parse_args(line.split_whitespace().map(String::from))
    }

    #[test]
    fn compare_defaults() {
        let p = parse("compare a.html b.html").unwrap().unwrap();
        assert_eq!(
            p.command,
            Command::Compare { a: Snapshot::new("a.html"), b: Snapshot::new("b.html") }
        );
        assert_eq!(p.export, ExportOptions::default());
    }

    #[test]
    fn flags_anywhere() {
        let p = parse("compare --format tsv a.html --no-headers b.html -o out/ --url-b https://www.strava.com/activities/2")
            .unwrap()
            .unwrap();
        assert_eq!(p.export.format, ExportFormat::Tsv);
        assert!(!p.export.include_headers);
        assert_eq!(p.export.out, Some(PathBuf::from("out/")));
        match p.command {
            Command::Compare { a, b } => {
                assert_eq!(a.url, None);
                assert_eq!(b.url.as_deref(), Some("https://www.strava.com/activities/2"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn extract_with_stats_json() {
        let p = parse("extract page.html --stats --format JSON --url https://www.strava.com/activities/9")
            .unwrap()
            .unwrap();
        assert_eq!(p.export.format, ExportFormat::Json);
        match p.command {
            Command::Extract { page, stats } => {
                assert!(stats);
                assert_eq!(page.path, PathBuf::from("page.html"));
                assert_eq!(page.url.as_deref(), Some("https://www.strava.com/activities/9"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn help_and_empty() {
        assert!(parse("").unwrap().is_none());
        assert!(parse("--help").unwrap().is_none());
        assert!(parse("compare a b -h").unwrap().is_none());
    }

    #[test]
    fn errors() {
        assert!(parse("compare a.html").is_err());
        assert!(parse("compare a b c").is_err());
        assert!(parse("compare a b --format json").is_err());
        assert!(parse("compare a b --stats").is_err());
        assert!(parse("extract").is_err());
        assert!(parse("extract p --format xml").is_err());
        assert!(parse("extract p --bogus").is_err());
        assert!(parse("extract p --url-b x").is_err());
        assert!(parse("extract p -o").is_err());
        assert!(parse("merge a b").is_err());
    }
}
