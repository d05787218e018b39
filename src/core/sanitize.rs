// src/core/sanitize.rs

/// Collapse runs of whitespace to a single space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Split at the first run of two or more whitespace characters.
/// Both halves are returned whitespace-normalized; `None` when there is no such gap
/// or either side would be empty.
pub fn split_at_gap(s: &str) -> Option<(String, String)> {
    let t = s.trim();
    let mut run_start: Option<usize> = None;
    let mut run_len = 0usize;

    for (i, ch) in t.char_indices() {
        if ch.is_whitespace() {
            if run_start.is_none() { run_start = Some(i); }
            run_len += 1;
            continue;
        }
        if let Some(start) = run_start.take() {
            if run_len >= 2 {
                let left = normalize_ws(&t[..start]);
                let right = normalize_ws(&t[i..]);
                if left.is_empty() || right.is_empty() { return None; }
                return Some((left, right));
            }
        }
        run_len = 0;
    }
    None
}
