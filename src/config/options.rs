// src/config/options.rs
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use super::consts::*;
use crate::csv::Delim;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn ext(&self) -> &'static str {
        match self { OutputFormat::Csv => "csv", OutputFormat::Tsv => "tsv", OutputFormat::Json => "json" }
    }
    /// Delimiter for the tabular formats; JSON has none.
    pub fn delim(&self) -> Option<Delim> {
        match self {
            OutputFormat::Csv => Some(Delim::Csv),
            OutputFormat::Tsv => Some(Delim::Tsv),
            OutputFormat::Json => None,
        }
    }
    /// Guess from a file extension, `None` when it is not one we write.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" | "txt" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown format: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub include_headers: bool,
    /// Drop players whose every stat agrees.
    pub only_diffs: bool,
    /// File for a single game, directory for a batch.
    pub path: PathBuf,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Csv,
            include_headers: true,
            only_diffs: false,
            path: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl OutputOptions {
    /// Report file for `game_id` inside the output directory.
    pub fn game_path(&self, game_id: &str) -> PathBuf {
        let stem = if game_id.is_empty() { DEFAULT_REPORT_FILE } else { game_id };
        self.path.join(join!(stem, ".", self.format.ext()))
    }

    /// Where a single-game report goes: `path` itself unless it looks like a directory.
    pub fn single_path(&self) -> PathBuf {
        let s = self.path.to_string_lossy();
        if self.path.is_dir() || s.ends_with('/') || s.ends_with('\\') {
            self.path.join(join!(DEFAULT_REPORT_FILE, ".", self.format.ext()))
        } else {
            self.path.clone()
        }
    }
}
