// src/aggregate/play_by_play.rs
use crate::classify::{classify_for_batter, BaserunningEvent, HitType, SacrificeType};
use crate::core::normalize_name;
use crate::core::sanitize::is_totals_or_blank;
use crate::data::PlayRow;
use crate::stats::{PlayerGameStats, StatCode, StatTable};

/// Inning banners and totals lines interleaved with the plays.
fn is_marker_row(row: &PlayRow) -> bool {
    if is_totals_or_blank(&row.player) || row.inning.trim().eq_ignore_ascii_case("team totals") {
        return true;
    }
    let player = row.player.to_lowercase();
    let desc = row.description.to_lowercase();
    ["top of the", "bottom of the"]
        .iter()
        .any(|m| player.contains(m) || desc.contains(m))
        || player.contains("inning")
}

/// Fold play-by-play rows into per-player batting lines.
pub fn aggregate_parsed(rows: &[PlayRow]) -> StatTable {
    let mut table = StatTable::new();

    for row in rows {
        if is_marker_row(row) {
            continue;
        }
        let batter = normalize_name(&row.player);
        table
            .entry(batter.clone())
            .or_insert_with(|| PlayerGameStats::new(batter.clone()));

        let outcome = classify_for_batter(&row.description, Some(batter.as_str()));

        if !outcome.is_plate_appearance {
            let code = match outcome.baserunning {
                Some(BaserunningEvent::StolenBase) => StatCode::SB,
                Some(BaserunningEvent::CaughtStealing) => StatCode::CS,
                _ => continue,
            };
            let runner = outcome
                .baserunner
                .as_deref()
                .map(normalize_name)
                .unwrap_or_else(|| batter.clone());
            log::debug!("{code} credited to {runner} ({:?})", row.description);
            table
                .entry(runner.clone())
                .or_insert_with(|| PlayerGameStats::new(runner))
                .bump(code);
            continue;
        }

        if !outcome.is_classified() {
            log::debug!("unclassified play for {batter}: {:?}", row.description);
            continue;
        }

        let Some(line) = table.get_mut(&batter) else { continue };
        if outcome.is_at_bat() {
            line.bump(StatCode::AB);
        }
        if outcome.is_hit {
            line.bump(StatCode::H);
        }
        match outcome.hit_type {
            Some(HitType::HomeRun) => line.bump(StatCode::HR),
            Some(HitType::Triple) => line.bump(StatCode::Triple),
            Some(HitType::Double) => line.bump(StatCode::Double),
            _ => {}
        }
        if outcome.is_walk {
            line.bump(StatCode::BB);
        }
        if outcome.is_strikeout {
            line.bump(StatCode::SO);
        }
        if outcome.sacrifice_type == Some(SacrificeType::SacrificeFly) {
            line.bump(StatCode::SF);
        }
        line.add(StatCode::RBI, outcome.rbi);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(player: &str, description: &str) -> PlayRow {
        PlayRow::new("t1", player, description)
    }

    #[test]
    fn home_run_scenario() {
        let t = aggregate_parsed(&[play("J Doe", "Home Run (Fly Ball to Deep CF); J Doe Scores")]);
        let line = &t["J Doe"];
        assert_eq!(line.get(StatCode::AB), 1);
        assert_eq!(line.get(StatCode::H), 1);
        assert_eq!(line.get(StatCode::HR), 1);
    }

    #[test]
    fn at_bats_exclude_walks_hbp_and_sacrifices() {
        let rows = [
            play("A Judge", "Single to LF"),
            play("A Judge", "Walk"),
            play("A Judge", "Hit By Pitch"),
            play("A Judge", "Sacrifice Fly to CF; Rice Scores"),
            play("A Judge", "Double to RF"),
            play("A Judge", "Strikeout Looking"),
        ];
        let t = aggregate_parsed(&rows);
        let line = &t["A Judge"];
        assert_eq!(line.get(StatCode::AB), 3);
        assert_eq!(line.get(StatCode::H), 2);
        assert_eq!(line.get(StatCode::Double), 1);
        assert_eq!(line.get(StatCode::BB), 1);
        assert_eq!(line.get(StatCode::SO), 1);
        assert_eq!(line.get(StatCode::SF), 1);
    }

    #[test]
    fn sacrifice_bunt_is_not_an_at_bat() {
        let rows = [
            play("Ben Rice", "Sacrifice Bunt: P-1B; Volpe to 2B"),
            play("Ben Rice", "Sac Bunt to 3B"),
            play("Ben Rice", "Groundout: 2B-1B"),
        ];
        let line = &aggregate_parsed(&rows)["Ben Rice"];
        assert_eq!(line.get(StatCode::AB), 1);
        assert_eq!(line.get(StatCode::SF), 0);
    }

    #[test]
    fn reaching_on_error_or_fielders_choice_is_an_at_bat() {
        let rows = [
            play("Ben Rice", "Reached on E6 (Ground Ball)"),
            play("Ben Rice", "Reaches on E4; Volpe to 3B"),
            play("Ben Rice", "Fielder's Choice 2B; Volpe out at 2B"),
        ];
        let line = &aggregate_parsed(&rows)["Ben Rice"];
        assert_eq!(line.get(StatCode::AB), 3);
        assert_eq!(line.get(StatCode::H), 0);
    }

    #[test]
    fn markers_and_totals_are_skipped() {
        let rows = [
            PlayRow::new("", "Top of the 1st, Yankees Batting", ""),
            PlayRow::new("t1", "", "Single to LF"),
            PlayRow::new("t1", "Team Totals", "Single"),
            PlayRow::new("t1", "J Doe", "Single to LF"),
        ];
        let t = aggregate_parsed(&rows);
        assert_eq!(t.len(), 1);
        assert_eq!(t["J Doe"].get(StatCode::H), 1);
    }

    #[test]
    fn steals_go_to_the_named_runner() {
        let rows = [
            play("A Judge", "Stolen Base 2B; Anthony Volpe to 2B"),
            play("A Judge", "Caught Stealing 2B (C-SS)"),
        ];
        let t = aggregate_parsed(&rows);
        assert_eq!(t["Anthony Volpe"].get(StatCode::SB), 1);
        assert_eq!(t["A Judge"].get(StatCode::CS), 1);
        assert_eq!(t["A Judge"].get(StatCode::AB), 0);
    }

    #[test]
    fn unclassified_and_other_baserunning_rows_add_nothing() {
        let rows = [play("J Doe", "Defensive Substitution"), play("J Doe", "Wild Pitch; Rice to 3B")];
        let t = aggregate_parsed(&rows);
        assert!(t["J Doe"].is_empty());
    }

    #[test]
    fn empty_input_gives_empty_table() {
        assert!(aggregate_parsed(&[]).is_empty());
    }
}
