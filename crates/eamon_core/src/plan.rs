use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::DedupError;
use crate::library::AdventureStore;
use crate::parser::parse_all;
use crate::record::VersionRecord;
use crate::selector::select;

/// Keep/delete partition of every recognized adventure in a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedupPlan {
    pub recognized: usize,
    pub keep: Vec<VersionRecord>,
    pub delete: Vec<VersionRecord>,
}

impl DedupPlan {
    /// Groups records by adventure id and runs the selector on each group.
    pub fn build(records: Vec<VersionRecord>) -> Self {
        let recognized = records.len();
        let mut groups: BTreeMap<String, Vec<VersionRecord>> = BTreeMap::new();
        for record in records {
            groups.entry(record.id.clone()).or_default().push(record);
        }

        let mut keep = Vec::new();
        let mut delete = Vec::new();
        for versions in groups.into_values() {
            let survivors: HashSet<String> = select(&versions)
                .into_iter()
                .map(|record| record.filename)
                .collect();
            for record in versions {
                if survivors.contains(&record.filename) {
                    keep.push(record);
                } else {
                    delete.push(record);
                }
            }
        }

        info!(
            recognized,
            keep = keep.len(),
            delete = delete.len(),
            "built dedup plan"
        );

        Self {
            recognized,
            keep,
            delete,
        }
    }

    pub fn from_filenames<I, S>(filenames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(parse_all(filenames))
    }

    /// Takes a single snapshot of the store's listing and plans against it.
    pub fn scan<S: AdventureStore + ?Sized>(store: &S) -> Result<Self, DedupError> {
        Ok(Self::from_filenames(store.list()?))
    }

    /// True when there is nothing to delete.
    pub fn is_empty(&self) -> bool {
        self.delete.is_empty()
    }

    pub fn delete_filenames(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .delete
            .iter()
            .map(|r| r.filename.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}
