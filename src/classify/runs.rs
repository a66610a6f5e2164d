// src/classify/runs.rs
//
// Run/RBI bookkeeping and runner names. These read the original-case text
// because names come back out of it.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::normalize_name;

/// "Judge Scores", "Soto Scores/unER", "Rice to Home"
static SCORER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<name>[^;,()]+?)\s+(?:scores\b|to home\b)").expect("scorer pattern")
});

/// "2 RBI", "(1 rbi)"
static EXPLICIT_RBI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?P<n>\d+)\s*rbi\b").expect("rbi pattern"));

/// Any RBI mention without a count: "No RBI", "Scores/No RBI".
static RBI_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\brbi\b").expect("rbi word pattern"));

/// Name in front of the event keyword: "Volpe Caught Stealing 2B".
static RUNNER_BEFORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?P<name>[^;,()]+?)\s+(?:stolen base|caught stealing|picked off|pickoff)")
        .expect("runner-before pattern")
});

/// First runner named in a trailing clause: "; Volpe to 2B", "; Volpe out".
static RUNNER_AFTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?P<name>[^;,()]+?)\s+(?:to\s+\w+|out\b|scores\b|advances\b)")
        .expect("runner-after pattern")
});

/// Distinct runners credited with scoring, as normalized keys, in text order.
pub fn scorers(description: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for clause in description.split([';', ',']) {
        let Some(caps) = SCORER.captures(clause.trim()) else { continue };
        let name = &caps["name"];
        if !looks_like_name(name) {
            continue;
        }
        let key = normalize_name(name);
        if !out.contains(&key) {
            out.push(key);
        }
    }
    out
}

/// Explicit RBI credit: `n` for "<n> RBI", 0 for an RBI mention with no count.
pub fn explicit_rbi(description: &str) -> Option<u32> {
    if let Some(caps) = EXPLICIT_RBI.captures(description) {
        return caps["n"].parse().ok();
    }
    RBI_WORD.is_match(description).then_some(0)
}

/// Runner a stolen base / caught stealing / pickoff is about.
pub fn baserunner(description: &str) -> Option<String> {
    let mut clauses = description.split(';');
    let head = clauses.next().unwrap_or("");

    if let Some(caps) = RUNNER_BEFORE.captures(head) {
        let name = caps["name"].trim();
        if looks_like_name(name) {
            return Some(name.to_string());
        }
    }

    clauses
        .filter_map(|clause| RUNNER_AFTER.captures(clause))
        .map(|caps| caps["name"].trim().to_string())
        .find(|name| looks_like_name(name))
}

/// Reject fragments like "Single to LF" or "2B" that sneak through the patterns.
fn looks_like_name(s: &str) -> bool {
    let s = s.trim();
    let Some(first) = s.chars().next() else { return false };
    if !first.is_alphabetic() || s.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    const PLAY_WORDS: [&str; 14] = [
        "single", "double", "triple", "home", "run", "walk", "error", "out", "play",
        "choice", "stolen", "pitch", "ball", "to",
    ];
    !s.split_whitespace()
        .any(|w| PLAY_WORDS.iter().any(|p| w.eq_ignore_ascii_case(p)))
}
