//! Relevance scoring for internal-source records.
//!
//! Scores are tiered on the name match (exact > prefix > substring — only
//! the highest tier contributes), with additive bonuses for a detail/address
//! match and for the record's rating. Records with no match signal at all
//! score zero and are dropped.

use placescout_core::defaults;
use placescout_core::LocationRecord;

/// Normalize a query or name for comparison and cache keying:
/// lowercased and trimmed.
///
/// Deliberately no diacritic folding — "Bình Minh" and "Binh Minh" stay
/// distinct, matching how the platform's data is actually keyed.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Score weights, overridable for experimentation but rarely changed.
#[derive(Debug, Clone)]
pub struct ScoreWeights {
    /// Exact case-insensitive name match.
    pub name_exact: u32,
    /// Name starts with the query (not an exact match).
    pub name_prefix: u32,
    /// Name contains the query past the start.
    pub name_substring: u32,
    /// Detail/address contains the query (additive).
    pub detail_substring: u32,
    /// Rating multiplier (additive, rounded).
    pub rating_factor: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            name_exact: defaults::SCORE_NAME_EXACT,
            name_prefix: defaults::SCORE_NAME_PREFIX,
            name_substring: defaults::SCORE_NAME_SUBSTRING,
            detail_substring: defaults::SCORE_DETAIL_SUBSTRING,
            rating_factor: defaults::SCORE_RATING_FACTOR,
        }
    }
}

/// Compute the relevance score of one record against a normalized query.
///
/// `query` must already be normalized (see [`normalize`]); the record's own
/// fields are normalized here.
pub fn relevance_score(record: &LocationRecord, query: &str, weights: &ScoreWeights) -> u32 {
    let name = normalize(&record.name);
    let detail = normalize(&record.detail);

    // Highest-tier name match only; the tiers are mutually exclusive.
    let mut score = if name == query {
        weights.name_exact
    } else if name.starts_with(query) {
        weights.name_prefix
    } else if name.contains(query) {
        weights.name_substring
    } else {
        0
    };

    if !detail.is_empty() && detail.contains(query) {
        score += weights.detail_substring;
    }

    // Rating only sweetens an existing match; a record with no match signal
    // must stay at zero so it can be filtered out.
    if score > 0 {
        if let Some(rating) = record.rating {
            score += (rating * weights.rating_factor).round() as u32;
        }
    }

    score
}

/// Score `records` against `query`, drop zero-score records, and sort the
/// rest by descending score (stable, so insertion order breaks ties).
///
/// The query is normalized here; callers pass the raw user text.
pub fn score_locations(
    records: Vec<LocationRecord>,
    query: &str,
    weights: &ScoreWeights,
) -> Vec<LocationRecord> {
    let query = normalize(query);

    let mut scored: Vec<LocationRecord> = records
        .into_iter()
        .filter_map(|mut record| {
            let score = relevance_score(&record, &query, weights);
            if score == 0 {
                return None;
            }
            record.score = Some(score);
            Some(record)
        })
        .collect();

    scored.sort_by(|a, b| b.score.unwrap_or(0).cmp(&a.score.unwrap_or(0)));
    scored
}
