// src/data.rs
//
// Light wrappers around the tabular inputs.
//
// - DataSet:  a header row plus string rows, as extracted from a page table.
// - Section:  a DataSet tagged with its source table id ("...batting...").
// - PlayRow:  one play-by-play line with the three fields the classifier needs.
//
// Column lookup is by header name, case-insensitive, with aliases; a missing
// column reads as blank cells.

use serde::Serialize;

use crate::core::sanitize::normalize_ws;

/// Header aliases for the play-by-play table.
pub const INNING_COLUMNS: &[&str] = &["inning", "inn"];
pub const PLAYER_COLUMNS: &[&str] = &["player", "batter", "batting", "name"];
pub const DESCRIPTION_COLUMNS: &[&str] = &["description", "play description", "play"];
/// Header aliases for the box-score annotation column.
pub const DETAILS_COLUMNS: &[&str] = &["details", "detail", "notes"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// First row is the header; the rest are data rows.
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        let headers = rows.remove(0);
        Self { headers, rows }
    }

    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    #[inline] pub fn len(&self) -> usize { self.rows.len() }

    /// Index of the first header matching any alias (case-insensitive, trimmed).
    pub fn column(&self, aliases: &[&str]) -> Option<usize> {
        aliases.iter().find_map(|alias| {
            self.headers
                .iter()
                .position(|h| normalize_ws(h).eq_ignore_ascii_case(alias))
        })
    }

    /// Cell at (row, column), `None` when the column is absent or the row is short.
    pub fn cell<'a>(&self, row: &'a [String], col: Option<usize>) -> Option<&'a str> {
        col.and_then(|c| row.get(c)).map(String::as_str)
    }
}

/// One extracted page table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub data: DataSet,
}

impl Section {
    pub fn new(id: impl Into<String>, data: DataSet) -> Self {
        Self { id: id.into(), data }
    }

    /// Batting tables are named by convention: "NYYbatting", "batting_home", ...
    pub fn is_batting(&self) -> bool {
        self.id.to_ascii_lowercase().contains("batting")
    }
}

/// One play-by-play line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PlayRow {
    pub inning: String,
    pub player: String,
    pub description: String,
}

impl PlayRow {
    pub fn new(inning: &str, player: &str, description: &str) -> Self {
        Self { inning: s!(inning), player: s!(player), description: s!(description) }
    }

    /// Pull play rows out of a play-by-play table. A table without a player or
    /// description column yields no rows.
    pub fn from_dataset(ds: &DataSet) -> Vec<PlayRow> {
        let inning = ds.column(INNING_COLUMNS);
        let (Some(player), Some(description)) =
            (ds.column(PLAYER_COLUMNS), ds.column(DESCRIPTION_COLUMNS))
        else {
            log::warn!("play-by-play table has no player/description column: {:?}", ds.headers);
            return Vec::new();
        };

        ds.rows
            .iter()
            .map(|row| PlayRow {
                inning: s!(ds.cell(row, inning).unwrap_or_default()),
                player: s!(ds.cell(row, Some(player)).unwrap_or_default()),
                description: s!(ds.cell(row, Some(description)).unwrap_or_default()),
            })
            .collect()
    }
}
