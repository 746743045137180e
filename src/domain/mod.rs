//! Domain value objects for reachability checks
//!
//! # Value Objects with Invariants
//!
//! - [`TagPattern`] - Anchored `<tag>_dev<digits>` server-name matcher

pub mod tag_pattern;

pub use tag_pattern::{TagPattern, TagPatternError};
