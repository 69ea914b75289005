use std::cmp::Ordering;

use tracing::debug;

use crate::record::VersionRecord;

/// A single ranking criterion. Every key orders "better" records first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKey {
    /// Feature editions before plain releases.
    Special,
    /// Primary releases before `[a]` alternates.
    Primary,
    /// Current distributor before the superseded library.
    CurrentDistributor,
    /// Newer dates first; undated and `19xx` releases rank as oldest.
    NewestDate,
    /// Alphabetical filename, so full ties do not depend on listing order.
    Filename,
}

/// Keys in priority order. Later keys only break ties left by earlier ones.
pub const RANKING: [RankKey; 5] = [
    RankKey::Special,
    RankKey::Primary,
    RankKey::CurrentDistributor,
    RankKey::NewestDate,
    RankKey::Filename,
];

impl RankKey {
    pub fn compare(self, a: &VersionRecord, b: &VersionRecord) -> Ordering {
        match self {
            Self::Special => b.is_special.cmp(&a.is_special),
            Self::Primary => a.is_alternate.cmp(&b.is_alternate),
            Self::CurrentDistributor => a.is_old_variant.cmp(&b.is_old_variant),
            Self::NewestDate => b.date_value().cmp(&a.date_value()),
            Self::Filename => a.filename.cmp(&b.filename),
        }
    }
}

fn compare(a: &VersionRecord, b: &VersionRecord) -> Ordering {
    RANKING
        .iter()
        .map(|key| key.compare(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Orders a group best-first.
pub fn rank(group: &[VersionRecord]) -> Vec<&VersionRecord> {
    let mut ranked: Vec<&VersionRecord> = group.iter().collect();
    ranked.sort_by(|a, b| compare(a, b));
    ranked
}

/// Picks the versions of one adventure to keep.
///
/// The top-ranked version always survives. When it is a plain release, every
/// special edition in the group survives with it.
pub fn select(group: &[VersionRecord]) -> Vec<VersionRecord> {
    if group.len() <= 1 {
        return group.to_vec();
    }

    let ranked = rank(group);
    let Some((top, rest)) = ranked.split_first() else {
        return Vec::new();
    };

    let mut keep = vec![(*top).clone()];
    if !top.is_special {
        let specials = rest.iter().filter(|r| r.is_special);
        keep.extend(specials.map(|r| (*r).clone()));
    }

    debug!(
        id = %top.id,
        best = %top.filename,
        kept = keep.len(),
        candidates = group.len(),
        "selected versions"
    );
    keep
}
