use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Step of the store lifecycle that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoragePhase {
    Creating,
    Opening,
    Initializing,
    Reading,
    Truncating,
    Seeking,
    Writing,
    Flushing,
}

impl fmt::Display for StoragePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            StoragePhase::Creating => "creating",
            StoragePhase::Opening => "opening",
            StoragePhase::Initializing => "initializing",
            StoragePhase::Reading => "reading",
            StoragePhase::Truncating => "truncating",
            StoragePhase::Seeking => "seeking",
            StoragePhase::Writing => "writing",
            StoragePhase::Flushing => "flushing",
        };
        f.write_str(phase)
    }
}

/// Tagc error types
#[derive(Error, Debug)]
pub enum TagcError {
    #[error("Storage error while {phase} '{}': {source}", .path.display())]
    Storage {
        phase: StoragePhase,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store format error in '{}': {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TagcError {
    pub fn storage(phase: StoragePhase, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TagcError::Storage {
            phase,
            path: path.into(),
            source,
        }
    }
}

/// Result type for tagc operations
pub type Result<T> = std::result::Result<T, TagcError>;
