// src/classify/outcome.rs
use serde::Serialize;

pub const NOTE_NON_PA: &str = "non_plate_appearance_event";
pub const NOTE_UNCLASSIFIED: &str = "unclassified";
pub const NOTE_HIT_OVERRIDES_OUT: &str = "hit_overrides_out";
pub const NOTE_EXPLICIT_RBI: &str = "explicit_rbi";
pub const NOTE_RBI_FROM_RUNS: &str = "rbi_from_runs";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HitType {
    Single,
    Double,
    Triple,
    HomeRun,
}

impl HitType {
    pub fn bases(self) -> u8 {
        match self {
            HitType::Single => 1,
            HitType::Double => 2,
            HitType::Triple => 3,
            HitType::HomeRun => 4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutType {
    Groundout,
    Flyout,
    Lineout,
    Popup,
    DoublePlay,
    Forceout,
    StrikeoutSwinging,
    StrikeoutLooking,
    FieldersChoice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SacrificeType {
    SacrificeFly,
    SacrificeBunt,
}

/// Events that happen between pitches and do not use up a plate appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaserunningEvent {
    StolenBase,
    CaughtStealing,
    PickedOff,
    DefensiveIndifference,
    WildPitch,
    PassedBall,
    Balk,
}

/// Reserved: per-runner movement. Nothing fills this yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunnerAdvance {
    pub event_type: String,
    pub runner_name: String,
}

/// Structured reading of one play description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlateAppearanceOutcome {
    pub is_plate_appearance: bool,
    pub is_hit: bool,
    pub hit_type: Option<HitType>,
    pub bases_earned: u8,
    pub is_home_run: bool,
    pub is_out: bool,
    pub out_type: Option<OutType>,
    pub is_walk: bool,
    pub is_strikeout: bool,
    pub is_hbp: bool,
    pub is_reached_on_error: bool,
    pub is_fielder_choice: bool,
    pub is_sacrifice: bool,
    pub sacrifice_type: Option<SacrificeType>,
    pub rbi: u32,
    pub runs_scored: u32,
    pub runners_advanced: Vec<RunnerAdvance>,
    /// Set only when `is_plate_appearance` is false.
    pub baserunning: Option<BaserunningEvent>,
    /// Runner named in a baserunning description, display form.
    pub baserunner: Option<String>,
    pub notes: Vec<String>,
}

impl Default for PlateAppearanceOutcome {
    fn default() -> Self {
        Self {
            is_plate_appearance: true,
            is_hit: false,
            hit_type: None,
            bases_earned: 0,
            is_home_run: false,
            is_out: false,
            out_type: None,
            is_walk: false,
            is_strikeout: false,
            is_hbp: false,
            is_reached_on_error: false,
            is_fielder_choice: false,
            is_sacrifice: false,
            sacrifice_type: None,
            rbi: 0,
            runs_scored: 0,
            runners_advanced: Vec::new(),
            baserunning: None,
            baserunner: None,
            notes: Vec::new(),
        }
    }
}

impl PlateAppearanceOutcome {
    /// Did any outcome branch fire? Unclassified plate appearances are
    /// excluded from aggregation instead of being guessed at.
    pub fn is_classified(&self) -> bool {
        self.is_hit
            || self.is_out
            || self.out_type.is_some()
            || self.is_walk
            || self.is_hbp
            || self.is_strikeout
            || self.is_sacrifice
            || self.is_reached_on_error
            || self.is_fielder_choice
    }

    /// Standard at-bat: a classified plate appearance minus walks, HBP and sacrifices.
    pub fn is_at_bat(&self) -> bool {
        self.is_plate_appearance
            && self.is_classified()
            && !self.is_walk
            && !self.is_hbp
            && !self.is_sacrifice
    }

    pub fn note(&mut self, note: &str) {
        if !self.notes.iter().any(|n| n == note) {
            self.notes.push(note.to_string());
        }
    }

    pub(crate) fn set_hit(&mut self, hit: HitType) {
        self.is_hit = true;
        self.is_plate_appearance = true;
        self.hit_type = Some(hit);
        self.bases_earned = hit.bases();
        self.is_home_run = hit == HitType::HomeRun;
    }

    pub(crate) fn set_out(&mut self, out: OutType) {
        self.is_out = true;
        self.out_type = Some(out);
    }

    pub(crate) fn set_strikeout(&mut self, out: OutType) {
        self.is_strikeout = true;
        self.set_out(out);
    }

    pub(crate) fn set_sacrifice(&mut self, kind: SacrificeType) {
        self.is_sacrifice = true;
        self.sacrifice_type = Some(kind);
        self.is_out = true;
    }

    pub(crate) fn set_fielder_choice(&mut self) {
        self.is_fielder_choice = true;
        self.out_type = Some(OutType::FieldersChoice);
    }

    /// Baserunning rows keep every batter field at its default.
    pub(crate) fn mark_non_plate_appearance(&mut self, event: BaserunningEvent) {
        *self = Self {
            is_plate_appearance: false,
            baserunning: Some(event),
            ..Self::default()
        };
        self.note(NOTE_NON_PA);
    }

    /// A hit and an out never co-exist; the hit keyword wins.
    pub(crate) fn resolve_hit_out_conflict(&mut self) {
        if self.is_hit && (self.is_out || self.is_sacrifice || self.is_strikeout) {
            self.is_out = false;
            self.out_type = None;
            self.is_strikeout = false;
            self.is_sacrifice = false;
            self.sacrifice_type = None;
            self.note(NOTE_HIT_OVERRIDES_OUT);
        }
    }
}
