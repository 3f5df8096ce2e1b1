//! Project search pipeline.
//!
//! # Responsibility
//! - Debounce raw search text.
//! - Filter and sort the project catalog.
//! - Summarize the filtered result.
//!
//! # Invariants
//! - Filter and stats functions are pure; recomputation is always safe.
//! - An empty result is a valid outcome, not an error.

pub mod debounce;
pub mod filter;
pub mod stats;
