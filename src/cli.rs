// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::classify::classify_for_batter;
use crate::config::{consts::*, Config, GameManifest, OutputFormat, OutputOptions};
use crate::error::{Error, Result};
use crate::file::{ensure_directory, load_game, render_report, write_report, write_summaries};
use crate::progress::Progress;
use crate::runner::{validate_game, validate_games, GameReport};

#[derive(Debug, Parser)]
#[command(name = "pbp_recon", version, about = "Check play-by-play derived batting lines against the box score")]
pub struct Cli {
    /// -v for info, -vv for debug. RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// TOML config file (missing file means defaults).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reconcile one game.
    Validate {
        /// Play-by-play table (CSV/TSV with header).
        #[arg(long)]
        pbp: PathBuf,
        /// Batting tables from the box score.
        #[arg(long, num_args = 1.., required = true)]
        batting: Vec<PathBuf>,
        /// Output file. Prints to stdout when omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long)]
        format: Option<OutputFormat>,
        /// Only players with at least one difference.
        #[arg(long)]
        only_diffs: bool,
        /// Include a header line (default from config).
        #[arg(long)]
        headers: Option<bool>,
    },
    /// Reconcile every game listed in the config.
    Batch {
        #[arg(short, long)]
        workers: Option<usize>,
        /// Output directory.
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// Print the classifier's reading of each description as JSON.
    Classify {
        #[arg(required = true)]
        descriptions: Vec<String>,
        /// Batter the descriptions belong to.
        #[arg(long)]
        batter: Option<String>,
    },
}

/// Default log filter for a `-v` count.
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Classify { descriptions, batter } => {
            for d in &descriptions {
                let outcome = classify_for_batter(d, batter.as_deref());
                println!("{}", serde_json::to_string(&outcome)?);
            }
            Ok(())
        }
        Command::Validate { pbp, batting, out, format, only_diffs, headers } => {
            let cfg = Config::load(&cli.config)?;
            let mut opts = cfg.output;
            if let Some(f) = format.or_else(|| out.as_deref().and_then(OutputFormat::from_path)) {
                opts.format = f;
            }
            opts.only_diffs |= only_diffs;
            if let Some(h) = headers {
                opts.include_headers = h;
            }

            let id = pbp.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
            let game = load_game(&GameManifest { id, play_by_play: pbp, batting })?;
            let report = validate_game(&game);

            match out {
                Some(path) => {
                    opts.path = path;
                    write_report(&opts.single_path(), &report, &opts)?;
                }
                None => print!("{}", render_report(&report, &opts)?),
            }
            print_summary(&report);
            Ok(())
        }
        Command::Batch { workers, out, format } => {
            let cfg = Config::load(&cli.config)?;
            if cfg.games.is_empty() {
                return Err(Error::Input(format!("no [[game]] entries in {}", cli.config.display())));
            }
            let mut opts = cfg.output;
            if let Some(f) = format { opts.format = f; }
            if let Some(dir) = out { opts.path = dir; }
            ensure_directory(&opts.path)?;

            let games = cfg.games.iter().map(load_game).collect::<Result<Vec<_>>>()?;
            let mut progress = StderrProgress::default();
            let reports = validate_games(games, workers.unwrap_or(cfg.workers), Some(&mut progress));

            for report in &reports {
                write_report(&opts.game_path(&report.id), report, &opts)?;
                print_summary(report);
            }
            write_summaries(&opts.path.join(DEFAULT_SUMMARY_FILE), &reports)?;
            Ok(())
        }
    }
}

fn print_summary(report: &GameReport) {
    let s = &report.summary;
    eprintln!(
        "{}: {} players, {} differences / {} stats, {:.2}% [{}]",
        report.id, s.players_compared, s.total_differences, s.total_official, s.accuracy, s.status
    );
    for (player, lines) in &s.differences {
        eprintln!("  {player}: {}", lines.join(", "));
    }
    for player in &report.coverage.parsed_only {
        eprintln!("  only in play-by-play: {player}");
    }
    for (player, reason) in &report.coverage.official_only {
        eprintln!("  only in box score: {player} ({reason:?})");
    }
}

#[derive(Default)]
struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, game_id: &str) {
        self.done += 1;
        log::info!("[{}/{}] {game_id}", self.done, self.total);
    }
    fn item_failed(&mut self, game_id: &str, reason: &str) {
        self.done += 1;
        self.log(&format!("[{}/{}] {game_id} failed: {reason}", self.done, self.total));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_validate_args() {
        let cli = Cli::try_parse_from([
            "pbp_recon", "-vv", "validate", "--pbp", "g/pbp.csv",
            "--batting", "g/away.csv", "g/home.csv", "--format", "json", "--only-diffs",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(log_filter(cli.verbose), "debug");
        match cli.command {
            Command::Validate { batting, format, only_diffs, headers, .. } => {
                assert_eq!(batting.len(), 2);
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(only_diffs);
                assert_eq!(headers, None);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn classify_needs_a_description() {
        assert!(Cli::try_parse_from(["pbp_recon", "classify"]).is_err());
        assert!(Cli::try_parse_from(["pbp_recon", "classify", "Single to LF"]).is_ok());
    }
}
