// src/core/sanitize.rs
//
// Cell-level cleanup shared by every ingestion boundary. The coercion helpers
// here are the one place where "missing or junk → 0" is decided.

/// Scraped tables leak a few HTML entities into plain text.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&#183;", "·")
        .replace("&middot;", "·")
}

/// Collapse any whitespace run (NBSP included) into one space and trim.
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

/// Coerce a table cell to a non-negative count.
///
/// Accepts integers and float renderings ("4", "4.0", " 4 "). Anything else,
/// including blanks, NaN markers and negatives, is 0.
pub fn coerce_count(cell: Option<&str>) -> u32 {
    let Some(raw) = cell else { return 0 };
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    if let Ok(v) = raw.parse::<u32>() {
        return v;
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 && f <= u32::MAX as f64 => f.trunc() as u32,
        _ => 0,
    }
}

/// True when a player cell is a section marker rather than a player.
pub fn is_totals_or_blank(cell: &str) -> bool {
    let cell = normalize_ws(cell);
    cell.is_empty() || cell.eq_ignore_ascii_case("team totals")
}
