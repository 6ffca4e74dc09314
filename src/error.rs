use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to persist progress. The in-memory counts are unaffected.
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("failed to write progress file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize progress: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to replace progress file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list contains no usable words")]
    Empty,
}

/// Errors that end the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
    #[error("failed to write config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Corpus(#[from] CorpusError),
}
