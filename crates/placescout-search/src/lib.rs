//! # placescout-search
//!
//! Pure ranking logic for placescout: relevance scoring against a free-text
//! query, deduplication by normalized name, and the class-ordered merge that
//! combines internal and external results into one bounded, UI-sized list.
//!
//! Everything in this crate is synchronous and allocation-only; network I/O
//! and caching live in placescout-sources and placescout-locations.

pub mod dedup;
pub mod merge;
pub mod scoring;

// Re-export core types
pub use placescout_core::{LocationKind, LocationRecord};

// Re-export search types
pub use dedup::dedup_by_name;
pub use merge::{merge_results, MergeConfig};
pub use scoring::{normalize, relevance_score, score_locations, ScoreWeights};
