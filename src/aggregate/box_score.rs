// src/aggregate/box_score.rs
use crate::core::normalize_name;
use crate::core::sanitize::{coerce_count, is_totals_or_blank};
use crate::data::{DataSet, Section, DETAILS_COLUMNS, PLAYER_COLUMNS};
use crate::details::{parse_detail_tokens, DetailCounts};
use crate::stats::{merge_line, PlayerGameStats, StatCode, StatTable};

/// Stats read from literal box-score columns.
const LITERAL_COLUMNS: [StatCode; 6] = [
    StatCode::AB,
    StatCode::H,
    StatCode::BB,
    StatCode::SO,
    StatCode::HR,
    StatCode::RBI,
];

/// Sum every batting section into per-player official lines. Non-batting
/// sections are ignored; an empty slice gives an empty table.
pub fn aggregate_official(sections: &[Section]) -> StatTable {
    let mut table = StatTable::new();
    for section in sections.iter().filter(|s| s.is_batting()) {
        log::debug!("reading batting table {:?} ({} rows)", section.id, section.data.len());
        for line in batting_lines(&section.id, &section.data) {
            merge_line(&mut table, line);
        }
    }
    table
}

/// One stat line per player row of a single batting table.
fn batting_lines(id: &str, ds: &DataSet) -> Vec<PlayerGameStats> {
    let Some(player_col) = ds.column(PLAYER_COLUMNS) else {
        log::warn!("batting table {id:?} has no player column");
        return Vec::new();
    };
    let details_col = ds.column(DETAILS_COLUMNS);

    let literal: Vec<(StatCode, Option<usize>)> = LITERAL_COLUMNS
        .iter()
        .map(|&code| (code, ds.column(&[code.label()])))
        .collect();
    for (code, col) in &literal {
        if col.is_none() {
            log::warn!("batting table {id:?} has no {code} column, reading as 0");
        }
    }

    let mut lines = Vec::with_capacity(ds.len());
    for row in &ds.rows {
        let raw_player = ds.cell(row, Some(player_col)).unwrap_or_default();
        if is_totals_or_blank(raw_player) {
            continue;
        }

        let mut line = PlayerGameStats::new(normalize_name(raw_player));
        for &(code, col) in &literal {
            line.set(code, coerce_count(ds.cell(row, col)));
        }

        // A details column speaks for HR too, over the literal column.
        if details_col.is_some() {
            let details = parse_detail_tokens(ds.cell(row, details_col));
            for code in DetailCounts::CODES {
                line.set(code, details.get(code));
            }
        }

        lines.push(line);
    }
    lines
}
