//! Core logic for the folio portfolio catalog.
//! This crate is the single source of truth for catalog invariants and
//! browsing semantics; front ends only render what it returns.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod state;

pub use catalog::source::{CatalogSource, EmbeddedCatalog, JsonFileCatalog};
pub use catalog::{certifications, projects, Catalog, CatalogError};
pub use config::{ConfigError, ConfigOrigin, FolioConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::certification::{
    Certification, CertificationValidationError, SkillBadges, Verification,
};
pub use model::project::{
    MetricValue, Metrics, ProcessStep, Project, ProjectLinks, ProjectValidationError,
};
pub use search::debounce::{DebounceWorker, Debouncer, DEFAULT_DEBOUNCE};
pub use search::filter::{
    filter_projects, FacetFilter, ParseSortKeyError, ProjectQuery, SortKey, ALL_SENTINEL,
};
pub use search::stats::{project_stats, ProjectStats};
pub use service::certification_browser::CertificationBrowser;
pub use service::project_browser::{ParseViewModeError, ProjectBrowser, ViewMode};
pub use state::preview::{Key, PreviewError, PreviewState, PreviewTransition, ScrollEffect};
pub use state::reveal::Reveal;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
