//! Class-ordered merge of internal and external search results.
//!
//! Internal records are ordered before external records as a class. Within a
//! class, descending score ranks first, then descending rating, then stable
//! insertion order. Each class is truncated independently so a large internal
//! match set can never starve out external results.

use std::cmp::Ordering;

use tracing::debug;

use placescout_core::defaults;
use placescout_core::LocationRecord;

use crate::dedup::dedup_by_name;

/// Per-class result caps. The defaults keep result lists UI-sized; treat
/// these as configuration, not an invariant.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Cap on internal-source records (N₁).
    pub internal_limit: usize,
    /// Cap on external-source records (N₂).
    pub external_limit: usize,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            internal_limit: defaults::INTERNAL_RESULT_LIMIT,
            external_limit: defaults::EXTERNAL_RESULT_LIMIT,
        }
    }
}

/// Rank within one class: score descending, then rating descending. Equal
/// outcomes compare `Equal` so the surrounding stable sort preserves
/// insertion order as the final tiebreak.
fn rank_cmp(a: &LocationRecord, b: &LocationRecord) -> Ordering {
    b.score
        .unwrap_or(0)
        .cmp(&a.score.unwrap_or(0))
        .then_with(|| {
            b.rating
                .unwrap_or(0.0)
                .partial_cmp(&a.rating.unwrap_or(0.0))
                .unwrap_or(Ordering::Equal)
        })
}

/// Merge scored internal results with external results into one bounded,
/// deduplicated, class-ordered list.
///
/// Internal records go in first so they win name collisions during
/// deduplication.
pub fn merge_results(
    internal: Vec<LocationRecord>,
    external: Vec<LocationRecord>,
    config: &MergeConfig,
) -> Vec<LocationRecord> {
    let internal_in = internal.len();
    let external_in = external.len();

    let mut combined = internal;
    combined.extend(external);

    let (mut internal_part, mut external_part): (Vec<_>, Vec<_>) = dedup_by_name(combined)
        .into_iter()
        .partition(|record| record.kind.is_internal());

    internal_part.sort_by(rank_cmp);
    external_part.sort_by(rank_cmp);

    internal_part.truncate(config.internal_limit);
    external_part.truncate(config.external_limit);

    internal_part.extend(external_part);

    debug!(
        internal_in,
        external_in,
        result_count = internal_part.len(),
        "Merged search results"
    );

    internal_part
}
