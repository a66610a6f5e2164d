// src/core/names.rs
//
// Player names arrive in two shapes:
//   play-by-play:  "Aaron Judge", "J Doe"
//   box score:     "Aaron JudgeRF", "J. Doe 1B-DH", "Clay Holmes, W (1-0)"
// `normalize_name` maps both to one join key. `NameResolver` additionally
// expands first-initial abbreviations and bare surnames ("Volpe Caught
// Stealing 2B") against the official roster.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::sanitize::{normalize_entities, normalize_ws};

/// Pitcher decisions / holds tacked onto a name: ", W (1-0)", ", H (2), BS (1)".
static RESULT_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\s*,\s*[WLSHB]+\s*\([^)]*\))+$").expect("result suffix pattern")
});

/// Fielding positions glued to the end of a box-score name. The code must follow
/// whitespace, a lowercase letter, a period, or a generational suffix so that
/// names ending in capitals are left alone.
static POSITION_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    const POS: &str = "(?:P|C|1B|2B|3B|SS|LF|CF|RF|DH|PH|PR)";
    Regex::new(&format!(
        r"^(?P<name>.*?(?:[\s\p{{Ll}}.]|II|IV))\s*{POS}(?:-{POS})*$"
    ))
    .expect("position suffix pattern")
});

/// Canonical join key for a player display string.
///
/// Idempotent: the cleanup runs to a fixed point, so
/// `normalize_name(&normalize_name(x)) == normalize_name(x)`.
pub fn normalize_name(raw: &str) -> String {
    let mut current = clean_once(raw);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_once(raw: &str) -> String {
    let decomposed: String = normalize_entities(raw)
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    let mut name = normalize_ws(&decomposed);

    name = RESULT_SUFFIX.replace(&name, "").into_owned();
    if let Some(caps) = POSITION_SUFFIX.captures(&name) {
        name = caps["name"].to_string();
    }

    normalize_ws(&name.replace('.', ""))
}

/// Expands "A Judge" and "Judge" style short forms to the official full name.
#[derive(Clone, Debug, Default)]
pub struct NameResolver {
    official: HashSet<String>,
    short_forms: HashMap<String, String>,
}

impl NameResolver {
    /// Build from official (already normalized) names. Short forms shared by
    /// two official players are dropped rather than guessed.
    pub fn from_official<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let official: HashSet<String> = names.into_iter().map(normalize_name).collect();

        let mut short_forms: HashMap<String, String> = HashMap::new();
        let mut ambiguous: HashSet<String> = HashSet::new();
        for full in &official {
            for short in [abbreviate(full), surname(full)].into_iter().flatten() {
                if official.contains(&short) || ambiguous.contains(&short) {
                    continue;
                }
                if short_forms.insert(short.clone(), full.clone()).is_some() {
                    short_forms.remove(&short);
                    ambiguous.insert(short);
                }
            }
        }

        Self { official, short_forms }
    }

    /// Normalized key for `name`, mapped onto an official name when one matches.
    pub fn resolve(&self, name: &str) -> String {
        let key = normalize_name(name);
        if self.official.contains(&key) {
            return key;
        }
        match self.short_forms.get(&key) {
            Some(full) => full.clone(),
            None => key,
        }
    }
}

/// "Aaron Judge" → "A Judge". Single-token names have no abbreviation.
fn abbreviate(full: &str) -> Option<String> {
    let (first, rest) = full.split_once(' ')?;
    let initial = first.chars().next()?;
    if first.chars().count() == 1 {
        return None;
    }
    Some(format!("{initial} {rest}"))
}

/// "Aaron Judge" → "Judge", "Jazz Chisholm Jr" → "Chisholm Jr".
fn surname(full: &str) -> Option<String> {
    let (_, rest) = full.split_once(' ')?;
    Some(rest.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_box_score_decorations() {
        assert_eq!(normalize_name("Aaron JudgeRF"), "Aaron Judge");
        assert_eq!(normalize_name("Aaron Judge RF"), "Aaron Judge");
        assert_eq!(normalize_name("Ben Rice 1B-DH"), "Ben Rice");
        assert_eq!(normalize_name("Clay Holmes, W (1-0)"), "Clay Holmes");
        assert_eq!(normalize_name("Devin Williams, H (2), BS (1)"), "Devin Williams");
        assert_eq!(normalize_name("J. Doe"), "J Doe");
        assert_eq!(normalize_name("Aaron\u{a0}Judge"), "Aaron Judge");
    }

    #[test]
    fn keeps_generational_suffixes() {
        assert_eq!(normalize_name("Michael Harris IICF"), "Michael Harris II");
        assert_eq!(normalize_name("Jazz Chisholm Jr.3B"), "Jazz Chisholm Jr");
        assert_eq!(normalize_name("Ken Griffey III"), "Ken Griffey III");
    }

    #[test]
    fn folds_accents() {
        assert_eq!(normalize_name("José Ramírez 3B"), "Jose Ramirez");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in [
            "Aaron JudgeRF",
            "J. Doe",
            "Clay Holmes, W (1-0)",
            "Michael Harris IICF",
            "Smith C-1B",
            "C",
            "",
        ] {
            let once = normalize_name(raw);
            assert_eq!(normalize_name(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn lone_position_code_is_not_a_suffix() {
        assert_eq!(normalize_name("C"), "C");
        assert_eq!(normalize_name("DH"), "DH");
    }

    #[test]
    fn resolver_expands_unique_abbreviations() {
        let r = NameResolver::from_official(["Aaron Judge", "Will Smith", "Wes Smith"]);
        assert_eq!(r.resolve("A Judge"), "Aaron Judge");
        assert_eq!(r.resolve("A. Judge"), "Aaron Judge");
        assert_eq!(r.resolve("Aaron Judge"), "Aaron Judge");
        // ambiguous: two official W Smiths
        assert_eq!(r.resolve("W Smith"), "W Smith");
        assert_eq!(r.resolve("Nobody Here"), "Nobody Here");
    }

    #[test]
    fn resolver_expands_unique_surnames() {
        let r = NameResolver::from_official(["Anthony Volpe", "Will Smith", "Wes Smith", "Jazz Chisholm Jr"]);
        assert_eq!(r.resolve("Volpe"), "Anthony Volpe");
        assert_eq!(r.resolve("Chisholm Jr."), "Jazz Chisholm Jr");
        assert_eq!(r.resolve("Smith"), "Smith");
    }
}
