//! Project browsing use-case service.
//!
//! # Responsibility
//! - Own the project page UI state: raw and debounced search text, facet
//!   selections, sort key, view mode and the preview dialog.
//! - Recompute the visible sequence and its stats from that state on demand.
//!
//! # Invariants
//! - Filtering only ever sees the debounced search text.
//! - Derived data is never cached; every read recomputes from catalog + state.
//! - The catalog is borrowed read-only for the browser lifetime.

use crate::catalog::facets::DEFAULT_FEATURED_PROJECT_ID;
use crate::catalog::Catalog;
use crate::model::project::Project;
use crate::search::debounce::{Debouncer, DEFAULT_DEBOUNCE};
use crate::search::filter::{filter_projects, FacetFilter, ProjectQuery, SortKey};
use crate::search::stats::{project_stats, ProjectStats};
use crate::state::preview::{Key, PreviewError, PreviewState, PreviewTransition};
use log::debug;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Card layout selected by the view toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            _ => Err(ParseViewModeError(value.to_string())),
        }
    }
}

/// Unknown view mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseViewModeError(pub String);

impl Display for ParseViewModeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported view mode `{}`; expected grid|list", self.0)
    }
}

impl Error for ParseViewModeError {}

/// Stateful facade over the project catalog.
pub struct ProjectBrowser<'a> {
    catalog: &'a Catalog<Project>,
    raw_query: String,
    search: Debouncer<String>,
    query: ProjectQuery,
    view_mode: ViewMode,
    preview: PreviewState<'a>,
    featured_id: String,
}

impl<'a> ProjectBrowser<'a> {
    /// Creates a browser with default debounce window and featured project.
    pub fn new(catalog: &'a Catalog<Project>) -> Self {
        Self {
            catalog,
            raw_query: String::new(),
            search: Debouncer::new(DEFAULT_DEBOUNCE),
            query: ProjectQuery::default(),
            view_mode: ViewMode::default(),
            preview: PreviewState::Closed,
            featured_id: DEFAULT_FEATURED_PROJECT_ID.to_string(),
        }
    }

    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.search = Debouncer::new(delay);
        self
    }

    pub fn with_featured_id(mut self, featured_id: impl Into<String>) -> Self {
        self.featured_id = featured_id.into();
        self
    }

    pub fn catalog(&self) -> &'a Catalog<Project> {
        self.catalog
    }

    /// Records a keystroke-level search value. Filtering picks it up only
    /// after it settles (see [`ProjectBrowser::tick`]).
    pub fn set_search_query(&mut self, text: impl Into<String>, now: Instant) {
        self.raw_query = text.into();
        self.search.push(self.raw_query.clone(), now);
    }

    /// Advances the debounce timer. Returns `true` when the effective search
    /// text changed and the visible sequence must be recomputed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(settled) = self.search.poll(now) else {
            return false;
        };
        if *settled == self.query.text {
            return false;
        }
        self.query.text = settled.clone();
        debug!(
            "event=search_settled module=browser status=ok query_chars={}",
            self.query.text.chars().count()
        );
        true
    }

    /// Next instant at which [`ProjectBrowser::tick`] can fire.
    pub fn next_tick(&self) -> Option<Instant> {
        self.search.deadline()
    }

    /// Raw text as typed.
    pub fn search_query(&self) -> &str {
        &self.raw_query
    }

    /// Settled text currently used for filtering.
    pub fn debounced_query(&self) -> &str {
        &self.query.text
    }

    pub fn set_category(&mut self, name: &str) {
        self.query.category = FacetFilter::from_selection(name);
    }

    pub fn set_domain(&mut self, name: &str) {
        self.query.domain = FacetFilter::from_selection(name);
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.query.sort = key;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Effective engine input.
    pub fn query(&self) -> &ProjectQuery {
        &self.query
    }

    /// Visible projects for the current state.
    pub fn filtered_projects(&self) -> Vec<&'a Project> {
        let filtered = filter_projects(self.catalog, &self.query);
        debug!(
            "event=filter_applied module=browser status=ok category={} domain={} sort={} matched={} total={}",
            self.query.category.as_selection(),
            self.query.domain.as_selection(),
            self.query.sort,
            filtered.len(),
            self.catalog.len()
        );
        filtered
    }

    /// Stats over [`ProjectBrowser::filtered_projects`].
    pub fn stats(&self) -> ProjectStats {
        project_stats(&self.filtered_projects())
    }

    /// Opens the preview for the project with `id`.
    pub fn open_preview(&mut self, id: &str) -> Result<PreviewTransition, PreviewError> {
        let project = self
            .catalog
            .get(id)
            .ok_or_else(|| PreviewError::UnknownProject(id.to_string()))?;
        Ok(self.open_preview_project(project))
    }

    pub fn open_preview_project(&mut self, project: &'a Project) -> PreviewTransition {
        let transition = self.preview.open(project);
        debug!(
            "event=preview_open module=browser status=ok id={} transition={:?}",
            project.id, transition
        );
        transition
    }

    pub fn close_preview(&mut self) -> PreviewTransition {
        let transition = self.preview.close();
        debug!(
            "event=preview_close module=browser status=ok transition={:?}",
            transition
        );
        transition
    }

    pub fn current_preview(&self) -> Option<&'a Project> {
        self.preview.current()
    }

    pub fn handle_key(&mut self, key: Key) -> Option<PreviewTransition> {
        self.preview.handle_key(key)
    }

    /// Whether page scrolling behind the dialog must be suppressed.
    pub fn scroll_locked(&self) -> bool {
        self.preview.scroll_locked()
    }

    pub fn available_categories(&self) -> Vec<&'a str> {
        self.catalog.available_categories()
    }

    pub fn available_domains(&self) -> Vec<&'a str> {
        self.catalog.available_domains()
    }

    pub fn counts_by_category(&self) -> BTreeMap<&'a str, usize> {
        self.catalog.counts_by_category()
    }

    pub fn counts_by_domain(&self) -> BTreeMap<&'a str, usize> {
        self.catalog.counts_by_domain()
    }

    pub fn unique_technology_count(&self) -> usize {
        self.catalog.unique_technology_count()
    }

    pub fn featured(&self) -> Option<&'a Project> {
        self.catalog.featured(&self.featured_id)
    }
}
