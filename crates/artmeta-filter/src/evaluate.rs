//! Filter predicate evaluation.
//!
//! The predicate is a pure function of one record and the current criteria;
//! every criteria change recomputes the whole visible set in one O(n) pass.

use artmeta_model::{CanonicalRecord, Criteria};

/// Decide whether a record is visible under the given criteria.
///
/// Checks short-circuit in order: soft-delete flag, keyword substring,
/// exact categorical matches, then numeric ranges. Everything combines with
/// logical AND. Dimensions absent on the record default to 0 here, and only
/// here, so an active minimum excludes records with no data.
#[must_use]
pub fn matches(record: &CanonicalRecord, criteria: &Criteria) -> bool {
    if record.is_soft_deleted() {
        return false;
    }

    let keyword = criteria.keyword.trim().to_lowercase();
    if !keyword.is_empty() {
        let haystack = format!("{} {}", record.artist, record.title).to_lowercase();
        if !haystack.contains(&keyword) {
            return false;
        }
    }

    if !criteria.source.is_empty() && record.source != criteria.source {
        return false;
    }
    if !criteria.artist.is_empty() && record.artist != criteria.artist {
        return false;
    }
    if !criteria.category.is_empty() && record.category != criteria.category {
        return false;
    }

    if !criteria.width.contains(record.width.unwrap_or(0.0)) {
        return false;
    }
    if !criteria.height.contains(record.height.unwrap_or(0.0)) {
        return false;
    }

    true
}

/// One full filtering pass: a fresh sequence of references into the owned
/// collection, never a copy.
#[must_use]
pub fn filter<'a>(
    records: &'a [CanonicalRecord],
    criteria: &Criteria,
) -> Vec<&'a CanonicalRecord> {
    records
        .iter()
        .filter(|record| matches(record, criteria))
        .collect()
}
