// src/details.rs
//
// Box-score annotation cells: "2·HR,1·SB", "2B", "GDP". Unknown tokens are ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::sanitize::normalize_entities;
use crate::stats::StatCode;

/// Codes a details cell may carry. GDP is recognized but not surfaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DetailCode {
    Stat(StatCode),
    Gdp,
}

impl DetailCode {
    fn parse(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "HR" => Some(Self::Stat(StatCode::HR)),
            "2B" => Some(Self::Stat(StatCode::Double)),
            "3B" => Some(Self::Stat(StatCode::Triple)),
            "SB" => Some(Self::Stat(StatCode::SB)),
            "CS" => Some(Self::Stat(StatCode::CS)),
            "SF" => Some(Self::Stat(StatCode::SF)),
            "GDP" => Some(Self::Gdp),
            _ => None,
        }
    }
}

/// `<n>·<CODE>`. The middle dot sometimes arrives double-encoded as "Â·" or "¬∑".
static COUNTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<n>\d+)\s*(?:·|Â·|¬∑)\s*(?P<code>[A-Za-z0-9]+)$").expect("detail token pattern")
});

/// Counts pulled out of one details cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DetailCounts {
    pub hr: u32,
    pub doubles: u32,
    pub triples: u32,
    pub sb: u32,
    pub cs: u32,
    pub sf: u32,
    // parsed, not a tracked stat
    gdp: u32,
}

impl DetailCounts {
    pub fn get(&self, code: StatCode) -> u32 {
        match code {
            StatCode::HR => self.hr,
            StatCode::Double => self.doubles,
            StatCode::Triple => self.triples,
            StatCode::SB => self.sb,
            StatCode::CS => self.cs,
            StatCode::SF => self.sf,
            _ => 0,
        }
    }

    /// Stats a details cell can speak for.
    pub const CODES: [StatCode; 6] = [
        StatCode::HR,
        StatCode::SB,
        StatCode::CS,
        StatCode::Double,
        StatCode::Triple,
        StatCode::SF,
    ];

    fn add(&mut self, code: DetailCode, n: u32) {
        let slot = match code {
            DetailCode::Stat(StatCode::HR) => &mut self.hr,
            DetailCode::Stat(StatCode::Double) => &mut self.doubles,
            DetailCode::Stat(StatCode::Triple) => &mut self.triples,
            DetailCode::Stat(StatCode::SB) => &mut self.sb,
            DetailCode::Stat(StatCode::CS) => &mut self.cs,
            DetailCode::Stat(StatCode::SF) => &mut self.sf,
            DetailCode::Stat(_) => return,
            DetailCode::Gdp => &mut self.gdp,
        };
        *slot = slot.saturating_add(n);
    }
}

/// Parse a details cell. `None` or empty gives all zeros.
pub fn parse_detail_tokens(raw: Option<&str>) -> DetailCounts {
    let mut counts = DetailCounts::default();
    let Some(raw) = raw else { return counts };
    let raw = normalize_entities(raw);

    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if let Some(caps) = COUNTED.captures(token) {
            let (Some(code), Ok(n)) = (DetailCode::parse(&caps["code"]), caps["n"].parse::<u32>())
            else {
                continue;
            };
            counts.add(code, n);
        } else if let Some(code) = DetailCode::parse(token) {
            counts.add(code, 1);
        }
    }
    counts
}
