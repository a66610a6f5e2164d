// tests/classify_properties.rs
use pbp_recon::classify::{classify, OutType, HitType, NOTE_NON_PA};

const HOME_RUNS: &[&str] = &[
    "Home Run (Fly Ball to Deep CF); J Doe Scores",
    "home run (line drive to LF)",
    "HOME RUN (Flyball to RF-CF); Soto Scores; Rice Scores",
    "Inside-the-park Home Run; Judge Scores",
];

const BASERUNNING: &[&str] = &[
    "Stolen Base 2B",
    "Volpe Caught Stealing 3B (C-3B)",
    "Picked off 1B (P-1B)",
    "Defensive Indifference; Rice to 2B",
    "Wild Pitch; Soto to 3B",
    "Passed Ball; Judge Scores",
    "Balk; Rice to 2B",
    "Pickoff Error 1B",
];

#[test]
fn every_home_run_is_a_four_base_hit_and_never_an_out() {
    for d in HOME_RUNS {
        let o = classify(d);
        assert!(o.is_hit, "{d}");
        assert_eq!(o.hit_type, Some(HitType::HomeRun), "{d}");
        assert_eq!(o.bases_earned, 4, "{d}");
        assert!(o.is_home_run, "{d}");
        assert!(!o.is_out, "{d}");
        assert!(o.runs_scored >= 1, "{d}");
    }
}

#[test]
fn double_play_without_fielders_choice_is_a_double_play_out() {
    for d in ["Groundball: SS-2B-1B (Double Play)", "Lineout: 3B into Double Play (3B-1B)"] {
        let o = classify(d);
        assert!(o.is_out, "{d}");
        assert_eq!(o.out_type, Some(OutType::DoublePlay), "{d}");
        assert!(!o.is_hit, "{d}");
    }
}

#[test]
fn fielders_choice_wins_over_double_play() {
    for d in [
        "Fielder's Choice SS; Double Play (SS-2B-1B)",
        "Double Play: Groundball SS-2B; Fielder's Choice",
    ] {
        let o = classify(d);
        assert!(o.is_fielder_choice, "{d}");
        assert_eq!(o.out_type, Some(OutType::FieldersChoice), "{d}");
    }
}

#[test]
fn hits_and_outs_never_coexist() {
    let descriptions = HOME_RUNS
        .iter()
        .copied()
        .chain([
            "Single to CF (Line Drive); Flyball",
            "Double to LF; Groundout attempt",
            "Triple to RF (Popup misplayed)",
            "Single; Strikeout Swinging on previous pitch",
            "Sac Fly? no, Single to RF",
        ]);
    for d in descriptions {
        let o = classify(d);
        assert!(!(o.is_hit && o.is_out), "{d}");
        assert!(!(o.is_hit && o.is_strikeout), "{d}");
    }
}

#[test]
fn baserunning_rows_reset_everything_else() {
    for d in BASERUNNING {
        let o = classify(d);
        assert!(!o.is_plate_appearance, "{d}");
        assert!(!o.is_hit && !o.is_out && !o.is_walk && !o.is_strikeout && !o.is_hbp, "{d}");
        assert_eq!(o.hit_type, None, "{d}");
        assert_eq!(o.out_type, None, "{d}");
        assert_eq!((o.rbi, o.runs_scored), (0, 0), "{d}");
        assert!(o.notes.iter().any(|n| n == NOTE_NON_PA), "{d}");
    }
}

#[test]
fn classification_ignores_case() {
    for d in ["Single to LF", "Walk", "Strikeout Looking", "Sacrifice Bunt", "Reaches on E5"] {
        assert_eq!(classify(d), classify(&d.to_uppercase()), "{d}");
        assert_eq!(classify(d), classify(&d.to_lowercase()), "{d}");
    }
}

#[test]
fn runners_advanced_stays_empty() {
    for d in HOME_RUNS.iter().chain(BASERUNNING) {
        assert!(classify(d).runners_advanced.is_empty(), "{d}");
    }
}
