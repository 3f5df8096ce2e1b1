//! Whole-catalog facets used by filter controls and the featured slot.

use crate::catalog::store::Catalog;
use crate::model::project::Project;
use std::collections::{BTreeMap, BTreeSet};

/// Project id shown in the featured slot unless configured otherwise.
pub const DEFAULT_FEATURED_PROJECT_ID: &str = "strategic-merger-ott";

impl Catalog<Project> {
    /// Sorted distinct categories.
    pub fn available_categories(&self) -> Vec<&str> {
        distinct(self.iter().map(|project| project.category.as_str()))
    }

    /// Sorted distinct domains.
    pub fn available_domains(&self) -> Vec<&str> {
        distinct(self.iter().map(|project| project.domain.as_str()))
    }

    pub fn counts_by_category(&self) -> BTreeMap<&str, usize> {
        tally(self.iter().map(|project| project.category.as_str()))
    }

    pub fn counts_by_domain(&self) -> BTreeMap<&str, usize> {
        tally(self.iter().map(|project| project.domain.as_str()))
    }

    /// Distinct technologies across the full catalog, ignoring filters.
    pub fn unique_technology_count(&self) -> usize {
        self.iter()
            .flat_map(|project| project.technologies.iter())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Project with `featured_id`, falling back to the first record.
    pub fn featured(&self, featured_id: &str) -> Option<&Project> {
        self.get(featured_id).or_else(|| self.first())
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}

fn tally<'a>(values: impl Iterator<Item = &'a str>) -> BTreeMap<&'a str, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}
