//! Plain-text rendering of core results.

use std::collections::BTreeMap;

use folio_core::model::certification::DEFAULT_SKILL_BADGES;
use folio_core::{Certification, Project, ProjectStats, Verification, ViewMode};

pub fn project_list(projects: &[&Project], view: ViewMode) {
    if projects.is_empty() {
        println!("No projects match the current filters.");
        return;
    }

    for project in projects {
        match view {
            ViewMode::Grid => println!(
                "{:<34} {:<18} {:<12} {}",
                project.id, project.category, project.domain, project.year
            ),
            ViewMode::List => {
                println!("{} ({})", project.title, project.year);
                println!("  {} / {}", project.category, project.domain);
                println!("  {}", project.description);
                println!("  tech: {}", project.technologies.join(", "));
            }
        }
    }
}

pub fn stats(stats: &ProjectStats, catalog_techs: usize) {
    println!("displayed:    {}", stats.displayed);
    println!("technologies: {} (catalog: {catalog_techs})", stats.techs);
    println!("avg year:     {}", stats.avg_year);
}

pub fn facets(
    total: usize,
    categories: &BTreeMap<&str, usize>,
    domains: &BTreeMap<&str, usize>,
) {
    println!("categories (all: {total})");
    for (name, count) in categories {
        println!("  {name} ({count})");
    }
    println!("domains (all: {total})");
    for (name, count) in domains {
        println!("  {name} ({count})");
    }
}

pub fn preview(project: &Project) {
    println!("{}", project.title);
    if let Some(tagline) = &project.tagline {
        println!("{tagline}");
    }
    println!();
    println!("{}", project.long_description());
    println!();
    println!("{} | {} | {}", project.category, project.domain, project.year);
    println!("tech: {}", project.technologies.join(", "));

    if !project.metrics.is_empty() {
        println!();
        for (name, value) in project.metrics.iter() {
            println!("  {name}: {value}");
        }
    }

    if !project.process.is_empty() {
        println!();
        for (index, step) in project.process.iter().enumerate() {
            println!("  {}. {} - {}", index + 1, step.step, step.description);
        }
    }

    println!();
    println!("code: {}", project.links.github);
    if let Some(dashboard) = &project.links.dashboard {
        println!("dashboard: {dashboard}");
    }
}

pub fn certifications(visible: &[Certification], total: usize, has_more: bool) {
    for cert in visible {
        println!("{} - {} [{}]", cert.title, cert.issuer, cert.status);
        println!("  issued {} | {}", cert.date, cert.category);

        let badges = cert.skill_badges(DEFAULT_SKILL_BADGES);
        if !badges.shown.is_empty() {
            let mut line = badges.shown.join(", ");
            if badges.overflow > 0 {
                line.push_str(&format!(" +{}", badges.overflow));
            }
            println!("  skills: {line}");
        }

        match cert.verification() {
            Verification::Available(url) => println!("  verify: {url}"),
            Verification::Unavailable => println!("  verification unavailable"),
        }
    }

    println!();
    if has_more {
        println!(
            "showing {} of {total}; pass --more to load more",
            visible.len()
        );
    } else {
        println!("showing all {total}");
    }
}
