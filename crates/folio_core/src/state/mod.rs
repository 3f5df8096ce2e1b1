//! Small mutable UI state owned by the browsers.
//!
//! # Invariants
//! - State here only references catalog records; it never copies or mutates
//!   them.

pub mod preview;
pub mod reveal;
