#![allow(dead_code)]

use folio_core::{Catalog, Metrics, Project, ProjectLinks};

/// Minimal valid project for engine tests.
pub fn project(id: &str, category: &str, domain: &str, year: i32) -> Project {
    Project {
        id: id.to_string(),
        title: format!("Title {id}"),
        description: format!("Description of {id}"),
        full_description: None,
        tagline: None,
        category: category.to_string(),
        domain: domain.to_string(),
        year,
        technologies: Vec::new(),
        tags: Vec::new(),
        metrics: Metrics::default(),
        process: Vec::new(),
        links: ProjectLinks {
            github: format!("https://github.com/example/{id}"),
            dashboard: None,
        },
        image: format!("/images/{id}.png"),
    }
}

pub fn with_technologies(mut project: Project, technologies: &[&str]) -> Project {
    project.technologies = technologies.iter().map(|t| t.to_string()).collect();
    project
}

/// Ten projects, three of them in category `ml`.
pub fn ten_project_catalog() -> Catalog<Project> {
    Catalog::try_new(vec![
        project("p01", "analytics", "retail", 2021),
        project("p02", "ml", "finance", 2022),
        project("p03", "strategy", "media", 2024),
        project("p04", "ml", "health", 2025),
        project("p05", "analytics", "media", 2023),
        project("p06", "data", "retail", 2020),
        project("p07", "ml", "media", 2023),
        project("p08", "data", "telecom", 2024),
        project("p09", "strategy", "finance", 2022),
        project("p10", "analytics", "health", 2021),
    ])
    .unwrap()
}

pub fn ids(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|project| project.id.clone()).collect()
}
