use std::collections::BTreeSet;
use std::fs;
use std::io;

use eamon_core::error::DedupError;
use eamon_core::library::{AdventureStore, DeletionOutcome, DirectoryStore, delete_all};

/// In-memory collection whose removals can be made to fail per file.
#[derive(Default)]
struct MemoryStore {
    files: BTreeSet<String>,
    locked: BTreeSet<String>,
}

impl MemoryStore {
    fn with_files(names: &[&str]) -> Self {
        Self {
            files: names.iter().map(|n| n.to_string()).collect(),
            locked: BTreeSet::new(),
        }
    }
}

impl AdventureStore for MemoryStore {
    fn list(&self) -> Result<Vec<String>, DedupError> {
        Ok(self.files.iter().cloned().collect())
    }

    fn remove(&mut self, filename: &str) -> io::Result<()> {
        if self.locked.contains(filename) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "locked"));
        }
        if !self.files.remove(filename) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        }
        Ok(())
    }
}

#[test]
fn failures_are_reported_and_do_not_stop_the_batch() {
    let mut store = MemoryStore::with_files(&["a.do", "b.do", "c.do"]);
    store.locked.insert("b.do".to_string());
    let batch = ["a.do", "b.do", "c.do", "gone.do"];

    let mut seen = Vec::new();
    let report = delete_all(&mut store, &batch, |outcome| {
        seen.push(match outcome {
            DeletionOutcome::Deleted(name) => format!("ok {name}"),
            DeletionOutcome::Failed(e) => format!("err {e}"),
        });
    });

    assert_eq!(report.deleted_count(), 2);
    assert_eq!(report.failed_count(), 2);
    assert!(report.has_failures());
    assert_eq!(
        seen,
        [
            "ok a.do",
            "err failed to delete b.do: locked",
            "ok c.do",
            "err failed to delete gone.do: no such file",
        ]
    );
    assert_eq!(store.list().expect("list"), ["b.do"]);

    match &report.outcomes[1] {
        DeletionOutcome::Failed(failure) => {
            assert_eq!(failure.filename, "b.do");
            assert_eq!(failure.source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn empty_batch_touches_nothing() {
    let mut store = MemoryStore::with_files(&["a.do"]);
    let report = delete_all(&mut store, &[], |_| panic!("no outcomes expected"));
    assert!(report.outcomes.is_empty());
    assert_eq!(store.list().expect("list"), ["a.do"]);
}

#[test]
fn directory_store_lists_only_regular_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = "Eamon Adventure #1 - Main Hall (1980).do";
    let folder = "Eamon Adventure #2 - Folder (1980).do";
    fs::write(dir.path().join(file), b"").expect("file");
    fs::create_dir(dir.path().join(folder)).expect("subdir");

    let store = DirectoryStore::new(dir.path());
    assert_eq!(store.root(), dir.path());
    assert_eq!(store.list().expect("list"), [file]);
}

#[test]
fn directory_store_reports_missing_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope");
    let store = DirectoryStore::new(&missing);

    match store.list() {
        Err(DedupError::ListDirectory { path, source }) => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected ListDirectory error, got {other:?}"),
    }
}

#[test]
fn directory_store_remove_surfaces_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = DirectoryStore::new(dir.path());

    let err = store.remove("absent.do").expect_err("should fail");
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}
