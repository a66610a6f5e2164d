// src/stats.rs
//! Tracked batting stats and the per-player stat line.
//!
//! Every aggregator and the reconciliation engine walk [`TRACKED_STATS`], so the
//! parsed and official sides always share one schema.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// One tracked batting stat.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum StatCode {
    AB,
    H,
    HR,
    RBI,
    BB,
    SO,
    SB,
    CS,
    #[serde(rename = "2B")]
    Double,
    #[serde(rename = "3B")]
    Triple,
    SF,
}

/// The fixed stat set, in report column order.
pub const TRACKED_STATS: [StatCode; 11] = [
    StatCode::AB,
    StatCode::H,
    StatCode::HR,
    StatCode::RBI,
    StatCode::BB,
    StatCode::SO,
    StatCode::SB,
    StatCode::CS,
    StatCode::Double,
    StatCode::Triple,
    StatCode::SF,
];

impl StatCode {
    /// Column label as it appears in box scores ("2B", not "Double").
    pub fn label(self) -> &'static str {
        match self {
            StatCode::AB => "AB",
            StatCode::H => "H",
            StatCode::HR => "HR",
            StatCode::RBI => "RBI",
            StatCode::BB => "BB",
            StatCode::SO => "SO",
            StatCode::SB => "SB",
            StatCode::CS => "CS",
            StatCode::Double => "2B",
            StatCode::Triple => "3B",
            StatCode::SF => "SF",
        }
    }

    /// Case-insensitive lookup by label.
    pub fn from_label(label: &str) -> Option<StatCode> {
        let label = label.trim();
        TRACKED_STATS
            .iter()
            .copied()
            .find(|code| code.label().eq_ignore_ascii_case(label))
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One player's counts over the tracked stat set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerGameStats {
    pub player: String,
    counts: [u32; TRACKED_STATS.len()],
}

impl PlayerGameStats {
    /// All-zero line for `player`.
    pub fn new(player: impl Into<String>) -> Self {
        Self { player: player.into(), counts: [0; TRACKED_STATS.len()] }
    }

    pub fn get(&self, code: StatCode) -> u32 {
        self.counts[code.index()]
    }

    pub fn set(&mut self, code: StatCode, value: u32) {
        self.counts[code.index()] = value;
    }

    pub fn add(&mut self, code: StatCode, value: u32) {
        let slot = &mut self.counts[code.index()];
        *slot = slot.saturating_add(value);
    }

    #[inline]
    pub fn bump(&mut self, code: StatCode) {
        self.add(code, 1);
    }

    /// Fold another line for the same player into this one.
    pub fn absorb(&mut self, other: &PlayerGameStats) {
        for code in TRACKED_STATS {
            self.add(code, other.get(code));
        }
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// (code, value) pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (StatCode, u32)> + '_ {
        TRACKED_STATS.iter().map(move |&code| (code, self.get(code)))
    }
}

impl Serialize for PlayerGameStats {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(TRACKED_STATS.len() + 1))?;
        map.serialize_entry("player", &self.player)?;
        for (code, value) in self.iter() {
            map.serialize_entry(code.label(), &value)?;
        }
        map.end()
    }
}

/// Per-player lines keyed by normalized name. Ordered so repeated runs
/// produce identical output.
pub type StatTable = BTreeMap<String, PlayerGameStats>;

/// Insert-or-fold `line` into `table` under its player key.
pub fn merge_line(table: &mut StatTable, line: PlayerGameStats) {
    match table.get_mut(&line.player) {
        Some(existing) => existing.absorb(&line),
        None => {
            table.insert(line.player.clone(), line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_lookup() {
        for code in TRACKED_STATS {
            assert_eq!(StatCode::from_label(code.label()), Some(code));
        }
        assert_eq!(StatCode::from_label(" 2b "), Some(StatCode::Double));
        assert_eq!(StatCode::from_label("PA"), None);
    }

    #[test]
    fn stat_order_matches_enum_order() {
        for (i, code) in TRACKED_STATS.iter().enumerate() {
            assert_eq!(code.index(), i);
        }
    }

    #[test]
    fn merge_line_sums_same_player() {
        let mut table = StatTable::new();
        merge_line(&mut table, stats!("J Doe"; AB => 2, H => 1));
        merge_line(&mut table, stats!("J Doe"; AB => 2, HR => 1));
        merge_line(&mut table, stats!("A Roe"; BB => 1));

        assert_eq!(table.len(), 2);
        let doe = &table["J Doe"];
        assert_eq!(doe.get(StatCode::AB), 4);
        assert_eq!(doe.get(StatCode::H), 1);
        assert_eq!(doe.get(StatCode::HR), 1);
        assert!(table["A Roe"].get(StatCode::AB) == 0);
    }

    #[test]
    fn serializes_with_box_score_labels() {
        let line = stats!("J Doe"; Double => 1);
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["player"], "J Doe");
        assert_eq!(json["2B"], 1);
        assert_eq!(json["SF"], 0);
    }
}
