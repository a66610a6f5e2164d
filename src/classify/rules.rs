// src/classify/rules.rs
//
// Keyword rules as data. Each group is evaluated in table order against the
// lower-cased description; a `FirstMatch` group stops at its first hit, an
// `Every` group applies all matching rules in order (so later rules overwrite
// `out_type`). Groups never short-circuit each other.

use super::outcome::{
    BaserunningEvent, HitType, OutType, PlateAppearanceOutcome, SacrificeType,
};

pub(crate) struct Rule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub apply: fn(&mut PlateAppearanceOutcome),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    FirstMatch,
    Every,
}

pub(crate) struct RuleGroup {
    pub category: &'static str,
    pub mode: Mode,
    pub rules: &'static [Rule],
}

/// Gate keywords, checked before anything else. First match names the event.
pub(crate) const BASERUNNING: &[(&str, BaserunningEvent)] = &[
    ("stolen base", BaserunningEvent::StolenBase),
    ("caught stealing", BaserunningEvent::CaughtStealing),
    ("picked off", BaserunningEvent::PickedOff),
    ("defensive indifference", BaserunningEvent::DefensiveIndifference),
    ("wild pitch", BaserunningEvent::WildPitch),
    ("passed ball", BaserunningEvent::PassedBall),
    ("balk", BaserunningEvent::Balk),
    ("pickoff", BaserunningEvent::PickedOff),
];

pub(crate) fn baserunning_event(desc: &str) -> Option<BaserunningEvent> {
    BASERUNNING
        .iter()
        .find(|(kw, _)| desc.contains(kw))
        .map(|&(_, event)| event)
}

pub(crate) static GROUPS: &[RuleGroup] = &[
    RuleGroup {
        category: "hit",
        mode: Mode::FirstMatch,
        rules: &[
            Rule {
                name: "home_run",
                matches: |d| d.contains("home run"),
                apply: |o| o.set_hit(HitType::HomeRun),
            },
            Rule {
                name: "triple",
                matches: |d| d.contains("triple") && !d.contains("triple play"),
                apply: |o| o.set_hit(HitType::Triple),
            },
            Rule {
                name: "double",
                matches: |d| d.contains("double") && !d.contains("double play"),
                apply: |o| o.set_hit(HitType::Double),
            },
            Rule {
                name: "single",
                matches: |d| d.contains("single"),
                apply: |o| o.set_hit(HitType::Single),
            },
        ],
    },
    RuleGroup {
        category: "on_base",
        mode: Mode::Every,
        rules: &[
            Rule {
                name: "walk",
                matches: |d| d.contains("walk"),
                apply: |o| o.is_walk = true,
            },
            Rule {
                name: "hit_by_pitch",
                matches: |d| d.contains("hit by pitch"),
                apply: |o| o.is_hbp = true,
            },
        ],
    },
    RuleGroup {
        category: "strikeout",
        mode: Mode::FirstMatch,
        rules: &[
            Rule {
                name: "strikeout_swinging",
                matches: |d| d.contains("strikeout swinging"),
                apply: |o| o.set_strikeout(OutType::StrikeoutSwinging),
            },
            Rule {
                name: "strikeout_looking",
                matches: |d| d.contains("strikeout looking"),
                apply: |o| o.set_strikeout(OutType::StrikeoutLooking),
            },
        ],
    },
    RuleGroup {
        category: "sacrifice",
        mode: Mode::FirstMatch,
        rules: &[
            Rule {
                name: "sacrifice_fly",
                matches: |d| d.contains("sac fly") || d.contains("sacrifice fly"),
                apply: |o| o.set_sacrifice(SacrificeType::SacrificeFly),
            },
            Rule {
                name: "sacrifice_bunt",
                matches: |d| d.contains("sac bunt") || d.contains("sacrifice bunt"),
                apply: |o| o.set_sacrifice(SacrificeType::SacrificeBunt),
            },
        ],
    },
    RuleGroup {
        category: "out",
        mode: Mode::Every,
        rules: &[
            Rule {
                name: "groundout",
                matches: |d| d.contains("groundout"),
                apply: |o| o.set_out(OutType::Groundout),
            },
            Rule {
                name: "flyout",
                matches: |d| d.contains("flyout") || d.contains("flyball"),
                apply: |o| o.set_out(OutType::Flyout),
            },
            Rule {
                name: "lineout",
                matches: |d| d.contains("lineout"),
                apply: |o| o.set_out(OutType::Lineout),
            },
            Rule {
                name: "popup",
                matches: |d| d.contains("popup") || d.contains("popfly"),
                apply: |o| o.set_out(OutType::Popup),
            },
            Rule {
                name: "double_play",
                matches: |d| d.contains("double play"),
                apply: |o| o.set_out(OutType::DoublePlay),
            },
            Rule {
                name: "forceout",
                matches: |d| d.contains("forceout"),
                apply: |o| o.set_out(OutType::Forceout),
            },
        ],
    },
    RuleGroup {
        // Runs after "out" so fielder's choice wins the out_type tie with double play.
        category: "reached",
        mode: Mode::Every,
        rules: &[
            Rule {
                name: "reached_on_error",
                matches: |d| {
                    d.contains("reaches on e") || d.contains("reached on e") || d.contains("safe on e")
                },
                apply: |o| o.is_reached_on_error = true,
            },
            Rule {
                name: "fielders_choice",
                matches: |d| d.contains("fielder's choice"),
                apply: |o| o.set_fielder_choice(),
            },
        ],
    },
];

/// Run every group over `desc`, returning the names of the rules that fired.
pub(crate) fn apply_groups(desc: &str, out: &mut PlateAppearanceOutcome) -> Vec<&'static str> {
    let mut fired = Vec::new();
    for group in GROUPS {
        for rule in group.rules {
            if !(rule.matches)(desc) {
                continue;
            }
            (rule.apply)(out);
            log::trace!("rule {}/{} matched", group.category, rule.name);
            fired.push(rule.name);
            if group.mode == Mode::FirstMatch {
                break;
            }
        }
    }
    fired
}
