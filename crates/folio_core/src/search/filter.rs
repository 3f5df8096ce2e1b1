//! Project filter/sort engine.
//!
//! # Responsibility
//! - Narrow a project sequence by category, domain and free text.
//! - Order the survivors by the selected sort key.
//!
//! # Invariants
//! - Pure: identical inputs produce identical, identically ordered output.
//! - Sorting is stable; ties keep catalog order.
//! - The returned vector is freshly allocated; inputs are never reordered.

use crate::model::project::Project;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Selection value meaning "no filter" for a facet.
pub const ALL_SENTINEL: &str = "all";

/// One facet selection (category or domain).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FacetFilter {
    #[default]
    All,
    Exact(String),
}

impl FacetFilter {
    /// Maps a control value to a filter; `"all"` disables the facet.
    pub fn from_selection(value: &str) -> Self {
        if value == ALL_SENTINEL {
            Self::All
        } else {
            Self::Exact(value.to_string())
        }
    }

    /// Control value for this filter.
    pub fn as_selection(&self) -> &str {
        match self {
            Self::All => ALL_SENTINEL,
            Self::Exact(value) => value,
        }
    }

    pub fn admits(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(expected) => expected == value,
        }
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Newest first.
    #[default]
    Year,
    Domain,
    Title,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Year, SortKey::Domain, SortKey::Title];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Domain => "domain",
            Self::Title => "title",
        }
    }

    /// Comparator used by [`filter_projects`].
    pub fn compare(self, left: &Project, right: &Project) -> Ordering {
        match self {
            Self::Year => right.year.cmp(&left.year),
            Self::Domain => collate(&left.domain, &right.domain),
            Self::Title => collate(&left.title, &right.title),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "year" => Ok(Self::Year),
            "domain" => Ok(Self::Domain),
            "title" => Ok(Self::Title),
            _ => Err(ParseSortKeyError(value.to_string())),
        }
    }
}

/// Unknown sort key name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortKeyError(pub String);

impl Display for ParseSortKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported sort key `{}`; expected year|domain|title",
            self.0
        )
    }
}

impl Error for ParseSortKeyError {}

/// Full input of one engine run, minus the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectQuery {
    pub category: FacetFilter,
    pub domain: FacetFilter,
    /// Debounced search text. Matched case-insensitively; empty matches all.
    pub text: String,
    pub sort: SortKey,
}

impl ProjectQuery {
    /// Builds a query from raw control values.
    pub fn from_selections(category: &str, domain: &str, text: &str, sort: SortKey) -> Self {
        Self {
            category: FacetFilter::from_selection(category),
            domain: FacetFilter::from_selection(domain),
            text: text.to_string(),
            sort,
        }
    }

    /// Returns whether `project` survives the category, domain and text filters.
    pub fn admits(&self, project: &Project) -> bool {
        self.admits_folded(project, &self.text.to_lowercase())
    }

    fn admits_folded(&self, project: &Project, needle: &str) -> bool {
        self.category.admits(&project.category)
            && self.domain.admits(&project.domain)
            && (needle.is_empty() || project.matches_text(needle))
    }
}

/// Filters then stably sorts `projects` according to `query`.
pub fn filter_projects<'a, I>(projects: I, query: &ProjectQuery) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    let needle = query.text.to_lowercase();
    let mut matched = projects
        .into_iter()
        .filter(|project| query.admits_folded(project, &needle))
        .collect::<Vec<_>>();
    matched.sort_by(|left, right| query.sort.compare(left, right));
    matched
}

/// Locale-style string collation.
///
/// Compared level by level: base letters ignoring accents and case, then
/// accents (unaccented first), then case (lowercase first).
pub fn collate(left: &str, right: &str) -> Ordering {
    base_letters(left)
        .cmp(&base_letters(right))
        .then_with(|| accented(left).cmp(&accented(right)))
        .then_with(|| right.cmp(left))
}

/// Lower-cased text with combining marks stripped after canonical
/// decomposition, so `É` and `e` share a primary key.
fn base_letters(value: &str) -> String {
    value
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Lower-cased canonical decomposition; marks sort after their base letter.
fn accented(value: &str) -> String {
    value.nfd().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::{collate, FacetFilter, SortKey};
    use std::cmp::Ordering;

    #[test]
    fn collate_ignores_case_for_primary_order() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Zebra", "alpha"), Ordering::Greater);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }

    #[test]
    fn collate_puts_lowercase_first_on_case_only_tie() {
        assert_eq!(collate("data", "Data"), Ordering::Less);
    }

    #[test]
    fn collate_ignores_accents_for_primary_order() {
        assert_eq!(collate("\u{c9}clair", "Fintech"), Ordering::Less);
        assert_eq!(collate("\u{fc}ber", "Zeta"), Ordering::Less);
        assert_eq!(collate("caf\u{e9}", "cafe"), Ordering::Greater);
        assert_eq!(collate("caf\u{e9}", "cafes"), Ordering::Less);
    }

    #[test]
    fn collate_places_composed_and_decomposed_accents_together() {
        for accented in ["caf\u{e9}", "cafe\u{301}"] {
            assert_eq!(collate("cafe", accented), Ordering::Less);
            assert_eq!(collate(accented, "cafes"), Ordering::Less);
        }
    }

    #[test]
    fn all_sentinel_is_exact_and_case_sensitive() {
        assert_eq!(FacetFilter::from_selection("all"), FacetFilter::All);
        assert_eq!(
            FacetFilter::from_selection("All"),
            FacetFilter::Exact("All".to_string())
        );
        assert!(FacetFilter::All.admits("anything"));
    }

    #[test]
    fn sort_key_parses_known_names_only() {
        assert_eq!(" Title ".parse::<SortKey>().unwrap(), SortKey::Title);
        let err = "newest".parse::<SortKey>().unwrap_err();
        assert!(err.to_string().contains("year|domain|title"));
    }
}
