//! Run-level errors
//!
//! Anything in here aborts the run. Per-document problems never reach this
//! type: an unreadable post only loses its heading title.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("content directory not found: {}", .0.display())]
    ContentDirMissing(PathBuf),

    #[error("failed to list content directory {}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read metadata for {}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize manifest")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write manifest to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config file {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, IndexError>;
