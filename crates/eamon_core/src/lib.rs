//! Filename parsing and version selection for Eamon adventure collections.
//!
//! A collection directory is read once into a list of [`VersionRecord`]s,
//! grouped by adventure identifier and reduced to the versions worth keeping.
//! Deletion goes through the [`AdventureStore`] trait so the ranking logic
//! never touches the filesystem.

pub mod confirm;
pub mod error;
pub mod library;
pub mod parser;
pub mod plan;
pub mod record;
pub mod selector;

pub use confirm::{AFFIRMATIVE, confirm, is_affirmative};
pub use error::{DedupError, DeleteError};
pub use library::{AdventureStore, DeletionOutcome, DeletionReport, DirectoryStore, delete_all};
pub use parser::{parse, parse_all};
pub use plan::DedupPlan;
pub use record::VersionRecord;
pub use selector::{RANKING, RankKey, rank, select};
