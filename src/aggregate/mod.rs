// src/aggregate/mod.rs
//
// Two independent reductions into the same `StatTable` shape:
//   play_by_play: classify each play, fold per batter ("parsed")
//   box_score:    read batting table columns + details ("official")

pub mod box_score;
pub mod play_by_play;

pub use box_score::aggregate_official;
pub use play_by_play::aggregate_parsed;
