// src/runner.rs
//
// Whole-game pipeline and the batch runner.
//
// Games share nothing, so a batch is a fixed pool of worker threads pulling
// game indices off an atomic counter and sending reports back on a channel.
// Reports are re-sorted into input order before returning.

use std::{
    panic::{self, AssertUnwindSafe},
    sync::{mpsc, Arc, atomic::{AtomicUsize, Ordering}},
    thread,
};

use serde::Serialize;

use crate::{
    aggregate::{aggregate_official, aggregate_parsed},
    config::consts::DEFAULT_WORKERS,
    core::NameResolver,
    data::{PlayRow, Section},
    progress::Progress,
    reconcile::{coverage, reconcile, summarize, CoverageReport, ReconciliationRow, ReconciliationSummary},
    stats::{merge_line, StatTable},
};

/// Everything the core needs for one game, already extracted from the page.
#[derive(Clone, Debug, Default)]
pub struct GameInput {
    pub id: String,
    pub play_by_play: Vec<PlayRow>,
    pub sections: Vec<Section>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameReport {
    pub id: String,
    pub rows: Vec<ReconciliationRow>,
    pub summary: ReconciliationSummary,
    pub coverage: CoverageReport,
}

/// Parsed and official tables for one game, parsed keys resolved onto official names.
pub fn aggregate_game(game: &GameInput) -> (StatTable, StatTable) {
    let official = aggregate_official(&game.sections);
    let resolver = NameResolver::from_official(official.keys().map(String::as_str));

    let mut parsed = StatTable::new();
    for (_, mut line) in aggregate_parsed(&game.play_by_play) {
        line.player = resolver.resolve(&line.player);
        merge_line(&mut parsed, line);
    }
    (parsed, official)
}

/// Run the full pipeline for one game.
pub fn validate_game(game: &GameInput) -> GameReport {
    let (parsed, official) = aggregate_game(game);
    let rows = reconcile(&parsed, &official);
    let summary = summarize(&rows);
    let coverage = coverage(&parsed, &official);

    log::info!(
        "{}: {} players, {:.1}% accurate ({})",
        game.id, summary.players_compared, summary.accuracy, summary.status
    );
    if !coverage.official_only.is_empty() {
        log::debug!("{}: official-only players {:?}", game.id, coverage.official_only);
    }

    GameReport { id: game.id.clone(), rows, summary, coverage }
}

/// Validate many games on `workers` threads (0 means the default).
/// A game whose validation panics is reported through `progress` and left out.
pub fn validate_games(
    games: Vec<GameInput>,
    workers: usize,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<GameReport> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(games.len());
    }

    type Done = (usize, GameReport);
    type Failed = (usize, String);

    let total = games.len();
    let games = Arc::new(games);
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Result<Done, Failed>>();

    let workers = if workers == 0 { DEFAULT_WORKERS } else { workers };
    let workers = workers.min(total).max(1);

    for _ in 0..workers {
        let games = Arc::clone(&games);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();

        thread::spawn(move || loop {
            let i = idx.fetch_add(1, Ordering::Relaxed);
            if i >= games.len() {
                break;
            }
            let result = panic::catch_unwind(AssertUnwindSafe(|| validate_game(&games[i])))
                .map(|report| (i, report))
                .map_err(|e| (i, panic_message(e.as_ref())));
            if tx.send(result).is_err() {
                break;
            }
        });
    }
    drop(res_tx);

    let mut done: Vec<Done> = Vec::with_capacity(total);
    for _ in 0..total {
        match res_rx.recv() {
            Ok(Ok((i, report))) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&report.id);
                }
                done.push((i, report));
            }
            Ok(Err((i, msg))) => {
                let id = &games[i].id;
                log::error!("{id}: validation failed: {msg}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(id, &msg);
                }
            }
            Err(_) => break,
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    done.sort_by_key(|(i, _)| *i);
    done.into_iter().map(|(_, report)| report).collect()
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        s!("panic")
    }
}
