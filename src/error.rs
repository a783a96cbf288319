//! Error types for board loading, saving and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, LifeError>;

/// Every failure the simulator can report. All of them are fatal for a run.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("invalid line format on line {line}: must be x,y where x and y are integers, found: {text:?}")]
    MalformedCoordinate { line: usize, text: String },

    #[error("invalid board coordinate {x},{y}: must be 0-indexed and within the bounds (exclusive) {width}x{height}")]
    OutOfBoundsCoordinate {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    #[error("failed to open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid {name}: {reason}")]
    InvalidDimension { name: &'static str, reason: String },

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("stats export error: {0}")]
    StatsWrite(#[from] serde_json::Error),
}

impl LifeError {
    pub(crate) fn invalid_dimension(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidDimension {
            name,
            reason: reason.into(),
        }
    }
}
