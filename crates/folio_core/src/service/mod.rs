//! Core use-case services.
//!
//! # Responsibility
//! - Hold per-session browsing state on top of the immutable catalogs.
//! - Expose the operations a presentation layer calls on user events.
//!
//! # Invariants
//! - Services borrow catalogs; they never own or mutate reference data.
//! - All state transitions run to completion on the caller's thread.

pub mod certification_browser;
pub mod project_browser;
