use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{DedupError, DeleteError};

/// The two filesystem operations the tool needs from a collection.
pub trait AdventureStore {
    /// Names of the regular files in the collection.
    fn list(&self) -> Result<Vec<String>, DedupError>;

    fn remove(&mut self, filename: &str) -> io::Result<()>;
}

/// A collection backed by a single flat directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn list_error(&self, source: io::Error) -> DedupError {
        DedupError::ListDirectory {
            path: self.root.clone(),
            source,
        }
    }
}

impl AdventureStore for DirectoryStore {
    fn list(&self) -> Result<Vec<String>, DedupError> {
        let entries = fs::read_dir(&self.root).map_err(|e| self.list_error(e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| self.list_error(e))?;
            let path = entry.path();
            if !path.is_file() {
                debug!(path = %path.display(), "skipping non-file entry");
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => debug!(name = ?raw, "skipping non UTF-8 filename"),
            }
        }
        Ok(names)
    }

    fn remove(&mut self, filename: &str) -> io::Result<()> {
        fs::remove_file(self.root.join(filename))
    }
}

#[derive(Debug)]
pub enum DeletionOutcome {
    Deleted(String),
    Failed(DeleteError),
}

/// Result of every deletion attempted, in attempt order.
#[derive(Debug, Default)]
pub struct DeletionReport {
    pub outcomes: Vec<DeletionOutcome>,
}

impl DeletionReport {
    pub fn deleted_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, DeletionOutcome::Deleted(_)))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.deleted_count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }
}

/// Removes each named file, carrying on past failures.
///
/// `on_outcome` sees every attempt as soon as it finishes so callers can
/// report progress while the batch runs.
pub fn delete_all<S, F>(store: &mut S, filenames: &[&str], mut on_outcome: F) -> DeletionReport
where
    S: AdventureStore + ?Sized,
    F: FnMut(&DeletionOutcome),
{
    let mut report = DeletionReport::default();
    for &filename in filenames {
        let outcome = match store.remove(filename) {
            Ok(()) => {
                info!(filename, "deleted");
                DeletionOutcome::Deleted(filename.to_string())
            }
            Err(source) => {
                debug!(filename, error = %source, "delete failed");
                DeletionOutcome::Failed(DeleteError {
                    filename: filename.to_string(),
                    source,
                })
            }
        };
        on_outcome(&outcome);
        report.outcomes.push(outcome);
    }
    report
}
