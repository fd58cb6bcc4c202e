use std::path::PathBuf;

use thiserror::Error;

/// Failures while building the track list.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid playlist {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no such file or directory: {0}")]
    NotFound(PathBuf),

    #[error("not a playlist (.toml) or audio file: {0}")]
    Unsupported(PathBuf),
}
