//! Summary numbers for the currently displayed projects.

use crate::model::project::Project;
use serde::Serialize;
use std::collections::BTreeSet;

/// Derived scalars shown in the stats cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub displayed: usize,
    /// Distinct technology names; duplicates across or within projects count once.
    pub techs: usize,
    /// Rounded mean year, `0` for an empty sequence.
    pub avg_year: i32,
}

/// Computes stats over a filtered project sequence.
pub fn project_stats(projects: &[&Project]) -> ProjectStats {
    if projects.is_empty() {
        return ProjectStats::default();
    }

    let techs = projects
        .iter()
        .flat_map(|project| project.technologies.iter())
        .collect::<BTreeSet<_>>()
        .len();
    let year_sum: i64 = projects.iter().map(|project| i64::from(project.year)).sum();
    let avg_year = (year_sum as f64 / projects.len() as f64).round() as i32;

    ProjectStats {
        displayed: projects.len(),
        techs,
        avg_year,
    }
}
