// src/reconcile.rs
//! Joins parsed and official stat tables and measures how far apart they are.
//!
//! [`reconcile`] is an inner join: players missing from either side are left
//! out of the rows. [`coverage`] reports those players separately.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::stats::{PlayerGameStats, StatCode, StatTable, TRACKED_STATS};

/// Parsed vs official value for one stat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatComparison {
    pub parsed: u32,
    pub official: u32,
    pub diff: i64,
}

impl StatComparison {
    pub fn new(parsed: u32, official: u32) -> Self {
        Self { parsed, official, diff: i64::from(parsed) - i64::from(official) }
    }
}

/// One joined player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReconciliationRow {
    pub player: String,
    stats: [StatComparison; TRACKED_STATS.len()],
}

impl ReconciliationRow {
    pub fn new(parsed: &PlayerGameStats, official: &PlayerGameStats) -> Self {
        let stats = TRACKED_STATS.map(|code| StatComparison::new(parsed.get(code), official.get(code)));
        Self { player: parsed.player.clone(), stats }
    }

    pub fn stat(&self, code: StatCode) -> StatComparison {
        // TRACKED_STATS is in enum order
        self.stats[code as usize]
    }

    pub fn diff(&self, code: StatCode) -> i64 {
        self.stat(code).diff
    }

    pub fn has_diffs(&self) -> bool {
        self.stats.iter().any(|s| s.diff != 0)
    }

    /// Human-readable lines for the stats that disagree: "AB: 4 vs 1 (diff: -3)".
    pub fn difference_lines(&self) -> Vec<String> {
        TRACKED_STATS
            .iter()
            .map(|&code| (code, self.stat(code)))
            .filter(|(_, s)| s.diff != 0)
            .map(|(code, s)| format!("{code}: {} vs {} (diff: {})", s.official, s.parsed, s.diff))
            .collect()
    }

    /// Cells in `report_headers()` order.
    pub fn to_cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(1 + 3 * TRACKED_STATS.len());
        cells.push(self.player.clone());
        for s in &self.stats {
            cells.push(s.parsed.to_string());
            cells.push(s.official.to_string());
            cells.push(s.diff.to_string());
        }
        cells
    }
}

impl Serialize for ReconciliationRow {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(1 + 3 * TRACKED_STATS.len()))?;
        map.serialize_entry("player", &self.player)?;
        for code in TRACKED_STATS {
            let s = self.stat(code);
            map.serialize_entry(&format!("{code}_parsed"), &s.parsed)?;
            map.serialize_entry(&format!("{code}_official"), &s.official)?;
            map.serialize_entry(&format!("{code}_diff"), &s.diff)?;
        }
        map.end()
    }
}

/// `player`, then `{stat}_parsed`, `{stat}_official`, `{stat}_diff` per tracked stat.
pub fn report_headers() -> Vec<String> {
    let mut headers = vec![s!("player")];
    for code in TRACKED_STATS {
        headers.push(format!("{code}_parsed"));
        headers.push(format!("{code}_official"));
        headers.push(format!("{code}_diff"));
    }
    headers
}

/// Inner join on player key, one row per player in both tables, key order.
pub fn reconcile(parsed: &StatTable, official: &StatTable) -> Vec<ReconciliationRow> {
    parsed
        .iter()
        .filter_map(|(player, p)| official.get(player).map(|o| (p, o)))
        .map(|(p, o)| ReconciliationRow::new(p, o))
        .collect()
}

/* ---------------- Summary ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Perfect,
    Good,
    NeedsWork,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Perfect => "PERFECT",
            Status::Good => "GOOD",
            Status::NeedsWork => "NEEDS WORK",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReconciliationSummary {
    pub players_compared: usize,
    pub total_differences: u64,
    pub total_official: u64,
    pub accuracy: f64,
    pub status: Status,
    /// Player -> difference lines, only for players with any difference.
    pub differences: BTreeMap<String, Vec<String>>,
}

pub fn summarize(rows: &[ReconciliationRow]) -> ReconciliationSummary {
    let mut total_differences = 0u64;
    let mut total_official = 0u64;
    let mut differences = BTreeMap::new();

    for row in rows {
        for s in &row.stats {
            total_differences += s.diff.unsigned_abs();
            total_official += u64::from(s.official);
        }
        if row.has_diffs() {
            differences.insert(row.player.clone(), row.difference_lines());
        }
    }

    let accuracy = if total_official == 0 {
        0.0
    } else {
        (total_official as f64 - total_differences as f64) * 100.0 / total_official as f64
    };
    let status = if total_differences == 0 && total_official > 0 {
        Status::Perfect
    } else if accuracy >= 99.0 {
        Status::Good
    } else {
        Status::NeedsWork
    };

    ReconciliationSummary {
        players_compared: rows.len(),
        total_differences,
        total_official,
        accuracy,
        status,
        differences,
    }
}

/* ---------------- Coverage ---------------- */

/// Why an official player has no parsed counterpart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingReason {
    /// No at-bats but a stolen base or caught stealing.
    PinchRunner,
    /// Every stat is zero (defensive replacement, pitcher who never batted).
    EmptyLine,
    /// Had at-bats, so the play-by-play must spell the name differently.
    NameMismatch,
    Other,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub parsed_only: Vec<String>,
    pub official_only: Vec<(String, MissingReason)>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.parsed_only.is_empty() && self.official_only.is_empty()
    }
}

pub fn coverage(parsed: &StatTable, official: &StatTable) -> CoverageReport {
    let parsed_only = parsed
        .keys()
        .filter(|p| !official.contains_key(*p))
        .cloned()
        .collect();

    let official_only = official
        .iter()
        .filter(|(p, _)| !parsed.contains_key(*p))
        .map(|(p, line)| (p.clone(), missing_reason(line)))
        .collect();

    CoverageReport { parsed_only, official_only }
}

fn missing_reason(line: &PlayerGameStats) -> MissingReason {
    let ab = line.get(StatCode::AB);
    if ab == 0 && (line.get(StatCode::SB) > 0 || line.get(StatCode::CS) > 0) {
        MissingReason::PinchRunner
    } else if line.is_empty() {
        MissingReason::EmptyLine
    } else if ab > 0 {
        MissingReason::NameMismatch
    } else {
        MissingReason::Other
    }
}
