use serde::{Deserialize, Serialize};

/// Date placeholder for releases known only to be "old".
pub const UNKNOWN_OLD_DATE: &str = "19xx";
/// Date placeholder for filenames without a parenthesized date.
pub const NO_DATE: &str = "0000";

/// One recognized adventure file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub filename: String,
    pub id: String,
    pub date: String,
    pub is_alternate: bool,
    pub is_old_variant: bool,
    pub is_special: bool,
    pub remainder: String,
}

impl VersionRecord {
    /// Numeric form of the date used for ranking: `2021-05-01` becomes
    /// `20210501`. Both placeholders and anything that fails to parse give 0.
    pub fn date_value(&self) -> u64 {
        if self.date == UNKNOWN_OLD_DATE || self.date == NO_DATE {
            return 0;
        }
        self.date.replace('-', "").parse().unwrap_or(0)
    }
}
