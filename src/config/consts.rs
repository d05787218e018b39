// src/config/consts.rs

// Source site
pub const SITE_BASE: &str = "https://www.strava.com";
pub const SITE_NAME: &str = "Strava";

// Extraction placeholders
pub const NOT_AVAILABLE: &str = "N/A";
pub const UNKNOWN_ACTIVITY: &str = "unknown";

// Row identity attribute; rows without it are skipped
pub const EFFORT_ID_ATTR: &str = "data-segment-effort-id";

// Speed unit appended to comparison diffs
pub const SPEED_UNIT: &str = "km/h";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_COMPARE_FILE: &str = "strava_segment_comparison";
pub const COMPARISON_HEADERS: [&str; 7] = [
    "Segment Name",
    "Time 1",
    "Time 2",
    "Time Difference",
    "Speed 1",
    "Speed 2",
    "Speed Difference",
];
pub const SEGMENT_HEADERS: [&str; 7] = ["#", "Segment Name", "Time", "Speed", "Distance", "Power", "Link"];
pub const STAT_HEADERS: [&str; 2] = ["Stat", "Value"];

// Local diagnostics
pub const LOG_FILE: &str = ".store/debug.log";
