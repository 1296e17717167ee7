//! Structured logging schema and field name constants for placescout.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized names across every
//! subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, a source degraded to empty results |
//! | INFO  | Lifecycle events, operation completions |
//! | DEBUG | Decision points, cache hits/misses, config choices |
//! | TRACE | Per-record iteration, high-volume data |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "sources", "search", "locations"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "internal_api", "places", "ttl_cache", "location_service"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "search", "all_locations", "fetch_hotels", "refresh_all"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Search query text (normalized).
pub const QUERY: &str = "query";

/// Source collection name ("hotels", "restaurants", "attractions").
pub const SOURCE: &str = "source";

/// Cache key looked up or written.
pub const CACHE_KEY: &str = "cache_key";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of results returned by a search or fetch.
pub const RESULT_COUNT: &str = "result_count";

/// Whether a cache lookup was a hit.
pub const CACHE_HIT: &str = "cache_hit";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
