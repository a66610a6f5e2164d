// src/config/mod.rs
pub mod consts;
pub mod file;
pub mod options;

pub use file::{Config, GameManifest};
pub use options::{OutputFormat, OutputOptions};
