// src/config/file.rs
//
// Optional TOML config:
//
//   workers = 4
//
//   [output]
//   format = "csv"
//   include_headers = true
//   only_diffs = false
//   path = "out"
//
//   [[game]]
//   id = "NYY202404010"
//   play_by_play = "games/nyy/pbp.csv"
//   batting = ["games/nyy/away_batting.csv", "games/nyy/home_batting.csv"]
//
// Relative game paths are resolved against the config file's directory.

use std::{fs, path::{Path, PathBuf}};

use serde::Deserialize;

use super::consts::DEFAULT_WORKERS;
use super::options::OutputOptions;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub workers: usize,
    pub output: OutputOptions,
    #[serde(rename = "game")]
    pub games: Vec<GameManifest>,
}

impl Default for Config {
    fn default() -> Self {
        Self { workers: DEFAULT_WORKERS, output: OutputOptions::default(), games: Vec::new() }
    }
}

/// Where one game's extracted tables live on disk.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GameManifest {
    pub id: String,
    pub play_by_play: PathBuf,
    #[serde(default)]
    pub batting: Vec<PathBuf>,
}

impl Config {
    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::Config { path: origin.to_path_buf(), source })
    }

    /// Load `path`; a missing file is the default config.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let mut cfg = Self::parse(&text, path)?;

        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            for game in &mut cfg.games {
                game.rebase(base);
            }
        }
        Ok(cfg)
    }
}

impl GameManifest {
    fn rebase(&mut self, base: &Path) {
        if self.play_by_play.is_relative() {
            self.play_by_play = base.join(&self.play_by_play);
        }
        for p in &mut self.batting {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        }
    }
}
