// tests/logging.rs
//
// One test only: the log sink and the working directory are process-wide.
use std::fs;

use seg_compare::compare::compare;
use seg_compare::log;
use seg_compare::specs::extract_html;

const PAGE: &str = r#"<html><head><meta property="og:url" content="https://www.strava.com/activities/4"></head><body>
    <table class="segments"><tbody>
      <tr data-segment-effort-id="1"><td class="name">Hill</td><td class="time">2:00</td><td class="speed">20 km/h</td></tr>
      <tr><td class="name">No id</td></tr>
    </tbody></table></body></html>"#;

#[test]
fn log_file_only_after_init() {
    let dir = std::env::temp_dir().join(format!("seg_compare_log_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    std::env::set_current_dir(&dir).unwrap();

    // library use: nothing touches the disk
    assert!(!log::is_enabled());
    let a = extract_html(PAGE, None).unwrap();
    assert!(extract_html("<p>x</p>", None).is_err());
    let rows = compare(&a, &a);
    assert_eq!(rows.len(), 1);
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0, "extraction left files behind");

    // opted in: lines land in the named file
    let log_path = dir.join("logs").join("debug.log");
    log::init(&log_path).unwrap();
    assert!(log::is_enabled());
    extract_html(PAGE, None).unwrap();

    let text = fs::read_to_string(&log_path).unwrap();
    assert!(text.contains("[INFO] Processing activity #4"), "{text}");
    assert!(text.contains("[WARN] Segment #2: effort id not found"), "{text}");
    assert!(!dir.join(".store").exists());

    let _ = fs::remove_dir_all(&dir);
}
