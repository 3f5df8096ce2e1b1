//! Catalog domain model.
//!
//! # Responsibility
//! - Define the immutable records shown by the portfolio (projects and
//!   certifications).
//! - Keep construction-time validation next to the record definitions.
//!
//! # Invariants
//! - Every record is identified by a stable kebab-case `id`.
//! - Records are reference data: nothing in core mutates them after load.

pub mod certification;
pub mod project;

use once_cell::sync::Lazy;
use regex::Regex;

static RECORD_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid record id regex"));

/// Returns whether `value` is a valid kebab-case record id.
pub fn is_valid_record_id(value: &str) -> bool {
    RECORD_ID_RE.is_match(value)
}
