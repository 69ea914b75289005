use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::record::{NO_DATE, VersionRecord};

pub const ALTERNATE_MARKER: &str = "[a]";
/// Distributing library superseded by the Eamon Adventurer's Guild.
pub const OLD_DISTRIBUTOR: &str = "Computer Learning Center Library";
/// Feature editions worth keeping alongside the newest release.
pub const SPECIAL_MARKERS: [&str; 4] = [
    "Eamon Utility Master",
    "DDD v",
    "req 80-col",
    "Single-Disk Version",
];

static FILENAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Eamon Adventure #(\d+[A-D]?)\s*-\s*(.+?)\.do$")
        .expect("filename pattern should compile")
});

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([0-9]{4}(?:-[0-9]{2}-[0-9]{2})?|19xx)\)")
        .expect("date pattern should compile")
});

/// Parses an adventure filename such as
/// `Eamon Adventure #42B - Some Title (1987)(Author)[a].do`.
///
/// Returns `None` for anything outside the naming scheme.
pub fn parse(filename: &str) -> Option<VersionRecord> {
    let captures = FILENAME_PATTERN.captures(filename)?;
    let id = captures.get(1)?.as_str();
    let remainder = captures.get(2)?.as_str();

    let date = DATE_PATTERN
        .captures(remainder)
        .and_then(|c| c.get(1))
        .map_or(NO_DATE, |m| m.as_str());

    Some(VersionRecord {
        filename: filename.to_string(),
        id: id.to_string(),
        date: date.to_string(),
        is_alternate: remainder.contains(ALTERNATE_MARKER),
        is_old_variant: remainder.contains(OLD_DISTRIBUTOR),
        is_special: SPECIAL_MARKERS
            .iter()
            .any(|marker| remainder.contains(marker)),
        remainder: remainder.to_string(),
    })
}

/// Parses a directory listing, dropping names that are not adventures.
pub fn parse_all<I, S>(filenames: I) -> Vec<VersionRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    filenames
        .into_iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let parsed = parse(name);
            if parsed.is_none() {
                debug!(filename = name, "skipping unrecognized entry");
            }
            parsed
        })
        .collect()
}
