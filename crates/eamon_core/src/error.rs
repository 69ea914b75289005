use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DedupError {
    #[error("failed to list {}: {source}", path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read confirmation: {0}")]
    Confirmation(#[source] io::Error),
}

/// A single file that could not be removed. Never aborts the batch.
#[derive(Debug, Error)]
#[error("failed to delete {filename}: {source}")]
pub struct DeleteError {
    pub filename: String,
    #[source]
    pub source: io::Error,
}
