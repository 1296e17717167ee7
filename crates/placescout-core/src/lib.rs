//! # placescout-core
//!
//! Core types, traits, and abstractions for the placescout library.
//!
//! This crate provides the foundational data structures and trait definitions
//! that the other placescout crates depend on: the `LocationRecord` model, the
//! error taxonomy, the source traits implemented by HTTP clients, and the
//! injectable clock used for deterministic cache-expiry testing.

pub mod clock;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use models::{LocationKind, LocationRecord};
pub use traits::{ExternalSource, InternalSource};
