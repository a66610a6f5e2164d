// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub mod aggregate;
pub mod classify;
pub mod csv;
pub mod data;
pub mod details;
pub mod file;
pub mod progress;
pub mod reconcile;
pub mod runner;
pub mod stats;

pub use aggregate::{aggregate_official, aggregate_parsed};
pub use classify::{classify, classify_for_batter, PlateAppearanceOutcome};
pub use crate::core::{normalize_name, NameResolver};
pub use data::{DataSet, PlayRow, Section};
pub use details::{parse_detail_tokens, DetailCounts};
pub use error::{Error, Result};
pub use reconcile::{coverage, reconcile, summarize, ReconciliationRow, ReconciliationSummary};
pub use runner::{validate_game, validate_games, GameInput, GameReport};
pub use stats::{PlayerGameStats, StatCode, StatTable, TRACKED_STATS};
