//! Centralized default constants for placescout.
//!
//! **This module is the single source of truth** for shared default values.
//! All crates reference these constants instead of defining their own magic
//! numbers. When adding new constants, place them in the appropriate section
//! and document the rationale for the chosen value.

// =============================================================================
// ENDPOINTS
// =============================================================================

/// Default base URL for the internal travel-platform API.
/// The external places search is proxied by the same API under
/// `/google-places`, so both clients share this default.
pub const API_BASE_URL: &str = "http://localhost:8000/api";

/// Page size used when pulling whole collections from the internal API.
/// The collections are small (hundreds of rows); one page covers them.
pub const COLLECTION_PER_PAGE: i64 = 1000;

/// Outbound request timeout in seconds. A stalled fetch must surface as
/// `SourceUnavailable` instead of hanging the caller.
pub const REQUEST_TIMEOUT_SECS: u64 = 8;

// =============================================================================
// CACHING
// =============================================================================

/// TTL for cached raw collections (hotels, restaurants, attractions).
/// Collections change rarely, so this is the longer of the two TTLs.
pub const COLLECTION_TTL_SECS: u64 = 600;

/// TTL for cached search results. Shorter than the collection TTL because
/// ranked results are more volatile than the raw collections behind them.
pub const SEARCH_TTL_SECS: u64 = 120;

// =============================================================================
// SEARCH
// =============================================================================

/// Minimum query length (in chars, after normalization) before any
/// network call is made.
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum internal-source records in a merged result list.
pub const INTERNAL_RESULT_LIMIT: usize = 10;

/// Maximum external-source records in a merged result list. Kept separate
/// from the internal cap so external results are never starved out by a
/// large internal match set.
pub const EXTERNAL_RESULT_LIMIT: usize = 5;

// =============================================================================
// SCORING
// =============================================================================

/// Score for an exact (case-insensitive) name match.
pub const SCORE_NAME_EXACT: u32 = 100;

/// Score when the name starts with the query (and is not an exact match).
pub const SCORE_NAME_PREFIX: u32 = 50;

/// Score when the name contains the query somewhere past the start.
pub const SCORE_NAME_SUBSTRING: u32 = 30;

/// Additive score when the detail/address contains the query.
pub const SCORE_DETAIL_SUBSTRING: u32 = 10;

/// Multiplier applied to a record's rating, added to the match score.
pub const SCORE_RATING_FACTOR: f64 = 2.0;
