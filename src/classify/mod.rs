// src/classify/mod.rs
//
// Play description -> PlateAppearanceOutcome.
//
// Order of evaluation:
//   1. baserunning gate (returns early, not a plate appearance)
//   2. rule groups (hit, on-base, strikeout, sacrifice, out, reached)
//   3. hit/out conflict resolution
//   4. runs and RBI

pub mod outcome;
mod rules;
mod runs;

pub use outcome::{
    BaserunningEvent, HitType, OutType, PlateAppearanceOutcome, RunnerAdvance, SacrificeType,
    NOTE_EXPLICIT_RBI, NOTE_HIT_OVERRIDES_OUT, NOTE_NON_PA, NOTE_RBI_FROM_RUNS, NOTE_UNCLASSIFIED,
};
pub use runs::{baserunner, scorers};

use crate::core::normalize_name;

/// Classify a single play description with no batter context.
pub fn classify(description: &str) -> PlateAppearanceOutcome {
    classify_for_batter(description, None)
}

/// Classify a play description for a known batter.
///
/// Knowing the batter lets a home run credit the batter's own run without
/// double counting it when the description also lists "<batter> Scores".
pub fn classify_for_batter(description: &str, batter: Option<&str>) -> PlateAppearanceOutcome {
    let mut out = PlateAppearanceOutcome::default();
    let lower = description.to_lowercase().replace('\u{2019}', "'");

    if let Some(event) = rules::baserunning_event(&lower) {
        out.mark_non_plate_appearance(event);
        out.baserunner = runs::baserunner(description);
        return out;
    }

    rules::apply_groups(&lower, &mut out);
    out.resolve_hit_out_conflict();
    count_runs(description, batter, &mut out);

    if !out.is_classified() {
        out.note(NOTE_UNCLASSIFIED);
    }
    out
}

fn count_runs(description: &str, batter: Option<&str>, out: &mut PlateAppearanceOutcome) {
    let scorers = runs::scorers(description);
    let mut runs = scorers.len() as u32;

    if out.is_home_run {
        match batter.map(normalize_name) {
            Some(b) if scorers.iter().any(|s| names_batter(s, &b)) => {}
            Some(_) => runs += 1,
            None => runs = runs.max(1),
        }
    }
    out.runs_scored = runs;

    if let Some(rbi) = runs::explicit_rbi(description) {
        out.rbi = rbi;
        out.note(NOTE_EXPLICIT_RBI);
    } else if runs > 0 && !out.is_hit && !out.is_out {
        out.rbi = runs;
        out.note(NOTE_RBI_FROM_RUNS);
    }
}

/// Scorer clauses often carry only the surname: "Judge Scores" for "Aaron Judge".
fn names_batter(scorer: &str, batter: &str) -> bool {
    scorer == batter
        || batter
            .strip_suffix(scorer)
            .is_some_and(|head| head.ends_with(' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_run_with_scorer_counts_one_run() {
        let o = classify("Home Run (Fly Ball to Deep CF); J Doe Scores");
        assert!(o.is_hit);
        assert_eq!(o.hit_type, Some(HitType::HomeRun));
        assert_eq!(o.bases_earned, 4);
        assert!(o.is_home_run);
        assert!(!o.is_out);
        assert_eq!(o.runs_scored, 1);
    }

    #[test]
    fn home_run_batter_context() {
        let solo = classify_for_batter("Home Run (Fly Ball to LF)", Some("J Doe"));
        assert_eq!(solo.runs_scored, 1);

        let two = classify_for_batter("Home Run (Line Drive to RF); Rice Scores", Some("Aaron Judge"));
        assert_eq!(two.runs_scored, 2);

        let listed = classify_for_batter("Home Run; Rice Scores; Aaron Judge Scores", Some("Aaron Judge"));
        assert_eq!(listed.runs_scored, 2);

        let surname = classify_for_batter("Home Run (Fly Ball to LF); Judge Scores", Some("Aaron Judge"));
        assert_eq!(surname.runs_scored, 1);
    }

    #[test]
    fn home_run_never_an_out() {
        // "flyball" would otherwise set a flyout
        let o = classify("Home Run (Flyball to Deep CF)");
        assert!(o.is_home_run);
        assert!(!o.is_out);
        assert_eq!(o.out_type, None);
        assert!(o.notes.iter().any(|n| n == NOTE_HIT_OVERRIDES_OUT));
    }

    #[test]
    fn double_play_without_fielders_choice() {
        let o = classify("Groundball: SS-2B-1B (Double Play)");
        assert!(o.is_out);
        assert_eq!(o.out_type, Some(OutType::DoublePlay));
        assert_eq!(o.hit_type, None);
    }

    #[test]
    fn fielders_choice_wins_out_type_over_double_play() {
        let o = classify("Reached on Fielder's Choice; Double Play attempt");
        assert!(o.is_fielder_choice);
        assert_eq!(o.out_type, Some(OutType::FieldersChoice));

        let curly = classify("Fielder\u{2019}s Choice 2B");
        assert!(curly.is_fielder_choice);
    }

    #[test]
    fn hit_priority() {
        assert_eq!(classify("Triple to RF").hit_type, Some(HitType::Triple));
        assert_eq!(classify("Double to LF (Line Drive)").hit_type, Some(HitType::Double));
        assert_eq!(classify("Single to CF").bases_earned, 1);
        assert_eq!(classify("Lineout: 2B into Triple Play").hit_type, None);
    }

    #[test]
    fn walks_strikeouts_sacrifices() {
        let bb = classify("Walk");
        assert!(bb.is_walk && bb.is_plate_appearance && !bb.is_at_bat());

        let hbp = classify("Hit By Pitch");
        assert!(hbp.is_hbp && !hbp.is_walk);

        let k = classify("Strikeout Swinging");
        assert!(k.is_strikeout && k.is_out);
        assert_eq!(k.out_type, Some(OutType::StrikeoutSwinging));

        let sf = classify("Sacrifice Fly to CF; Rice Scores");
        assert!(sf.is_sacrifice && sf.is_out);
        assert_eq!(sf.sacrifice_type, Some(SacrificeType::SacrificeFly));
        assert_eq!(sf.runs_scored, 1);
        assert_eq!(sf.rbi, 0);
    }

    #[test]
    fn baserunning_rows_are_not_plate_appearances() {
        let o = classify("Volpe Caught Stealing 2B (C-SS)");
        assert!(!o.is_plate_appearance);
        assert_eq!(o.baserunning, Some(BaserunningEvent::CaughtStealing));
        assert_eq!(o.baserunner.as_deref(), Some("Volpe"));
        assert!(!o.is_hit && !o.is_out && !o.is_walk && !o.is_strikeout);
        assert_eq!(o.notes, vec![NOTE_NON_PA.to_string()]);

        // gate wins even when a hit keyword follows
        let wp = classify("Wild Pitch; Judge Scores; Single");
        assert!(!wp.is_plate_appearance);
        assert_eq!(wp.runs_scored, 0);
    }

    #[test]
    fn rbi_rules() {
        assert_eq!(classify("Single to LF (2 RBI); A Scores; B Scores").rbi, 2);
        // no hit or out classified: runs become RBI
        let e = classify("Reached on E6; Rice Scores");
        assert!(e.is_reached_on_error);
        assert_eq!(e.rbi, 1);
        assert!(e.notes.iter().any(|n| n == NOTE_RBI_FROM_RUNS));
        // hit with runs and no explicit token: left at 0
        assert_eq!(classify("Single to RF; Rice Scores").rbi, 0);
    }

    #[test]
    fn no_rbi_mention_blocks_the_runs_fallback() {
        let e = classify("Reached on E6 (Ground Ball); Rice Scores/unER/No RBI");
        assert_eq!(e.runs_scored, 1);
        assert_eq!(e.rbi, 0);
        assert!(!e.notes.iter().any(|n| n == NOTE_RBI_FROM_RUNS));

        let bb = classify("Walk; Rice Scores/No RBI");
        assert_eq!((bb.rbi, bb.runs_scored), (0, 1));
    }

    #[test]
    fn unclassified_text_is_flagged() {
        let o = classify("Offensive Substitution: Grisham replaces Wells");
        assert!(o.is_plate_appearance);
        assert!(!o.is_classified());
        assert!(!o.is_at_bat());
        assert_eq!(o.notes, vec![NOTE_UNCLASSIFIED.to_string()]);
    }
}
