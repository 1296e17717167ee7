//! Deduplication of merged location results.
//!
//! Two records are "the same place" when their normalized names are equal,
//! even across different kinds or sources. Name equality is the practical
//! identity for merging; the namespaced `id` only guarantees uniqueness
//! within each source's rows.

use std::collections::HashSet;

use placescout_core::LocationRecord;

use crate::scoring::normalize;

/// Drop records whose normalized name was already seen. First occurrence
/// wins, so callers put the preferred source first — internal records ahead
/// of external ones means internal wins every name collision.
pub fn dedup_by_name(records: Vec<LocationRecord>) -> Vec<LocationRecord> {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(normalize(&record.name)))
        .collect()
}
