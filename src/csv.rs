// src/csv.rs
use std::io::{self, Write};

use crate::config::consts::{COMPARISON_HEADERS, SEGMENT_HEADERS, STAT_HEADERS};
use crate::data::{ComparisonRow, SegmentRecord, StatEntry};

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer. Fields are quoted only when needed.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Table exports ---------------- */

/// Comparison table in `COMPARISON_HEADERS` column order.
pub fn comparison_to_string(rows: &[ComparisonRow], include_headers: bool, sep: char) -> String {
    table_to_string(&COMPARISON_HEADERS, rows.iter().map(ComparisonRow::to_row), include_headers, sep)
}

/// Segment table of one activity: order, name, time, speed, distance, power, link.
pub fn segments_to_string(segments: &[SegmentRecord], include_headers: bool, sep: char) -> String {
    let rows = segments.iter().map(|seg| {
        vec![
            seg.order.to_string(),
            seg.name.clone(),
            seg.time.clone(),
            seg.speed.clone(),
            seg.distance.clone().unwrap_or_default(),
            seg.power.clone().unwrap_or_default(),
            seg.link.clone().unwrap_or_default(),
        ]
    });
    table_to_string(&SEGMENT_HEADERS, rows, include_headers, sep)
}

/// Two-column label/value table.
pub fn stats_to_string(stats: &[StatEntry], include_headers: bool, sep: char) -> String {
    let rows = stats.iter().map(|st| vec![st.label.clone(), st.value.clone()]);
    table_to_string(&STAT_HEADERS, rows, include_headers, sep)
}

/* ---------------- helpers ---------------- */

fn table_to_string<I>(headers: &[&str], rows: I, include_headers: bool, sep: char) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut buf: Vec<u8> = Vec::new();

    // Writes into a Vec<u8> cannot fail.
    if include_headers {
        let _ = write_row(&mut buf, headers, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, &r[..], sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_string(row: &[&str], sep: char) -> String {
        let mut buf = Vec::new();
        write_row(&mut buf, row, sep).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn quotes_only_when_needed() {
        assert_eq!(row_string(&["a", "b c", "d"], ','), "a,b c,d\n");
        assert_eq!(row_string(&["a,b", "say \"hi\""], ','), "\"a,b\",\"say \"\"hi\"\"\"\n");
        assert_eq!(row_string(&["a,b", "c"], '\t'), "a,b\tc\n");
        assert_eq!(row_string(&["two\nlines"], '\t'), "\"two\nlines\"\n");
    }

    #[test]
    fn comparison_table_headers_toggle() {
        let rows = vec![ComparisonRow {
            name: s!("Hill, North"),
            link: None,
            order: 1,
            time_1: s!("2:00"),
            time_2: s!("2:10"),
            time_diff: s!("+0:10"),
            speed_1: s!("20 km/h"),
            speed_2: s!("19 km/h"),
            speed_diff: s!("-1.0 km/h"),
        }];

        let with = comparison_to_string(&rows, true, ',');
        let mut lines = with.lines();
        assert_eq!(
            lines.next(),
            Some("Segment Name,Time 1,Time 2,Time Difference,Speed 1,Speed 2,Speed Difference")
        );
        assert_eq!(lines.next(), Some("\"Hill, North\",2:00,2:10,+0:10,20 km/h,19 km/h,-1.0 km/h"));
        assert_eq!(lines.next(), None);

        let without = comparison_to_string(&rows, false, '\t');
        assert_eq!(without, "Hill, North\t2:00\t2:10\t+0:10\t20 km/h\t19 km/h\t-1.0 km/h\n");
    }

    #[test]
    fn segment_table_blanks_missing_optionals() {
        let segs = vec![
            SegmentRecord::new("Hill", "4:12", "21.3 km/h", 2)
                .with_power(Some(s!("250 W")))
                .with_link(Some(s!("https://x/1"))),
        ];
        let out = segments_to_string(&segs, false, ',');
        assert_eq!(out, "2,Hill,4:12,21.3 km/h,,250 W,https://x/1\n");
    }

    #[test]
    fn stats_table() {
        let stats = vec![StatEntry { label: s!("Distance"), key: s!("distance"), value: s!("56.78 km") }];
        assert_eq!(stats_to_string(&stats, true, ','), "Stat,Value\nDistance,56.78 km\n");
        assert_eq!(stats_to_string(&[], true, ','), "Stat,Value\n");
    }
}
