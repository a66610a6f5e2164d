// src/error.rs
use std::io;
use std::path::PathBuf;

/// Failures outside the data itself. Malformed or missing game data is
/// never an error; it degrades to zeros and empty tables.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    Input(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
