//! folio CLI - terminal front end for the portfolio catalog.
//!
//! Usage: folio <COMMAND>
//!
//! Commands:
//!   projects  List projects matching filters
//!   stats     Summary numbers for matching projects
//!   facets    Categories and domains with counts
//!   preview   Preview one project
//!   certs     List certifications with load-more

mod cli;
mod render;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::{
    certifications, default_log_level, init_logging, projects, Catalog, CatalogError,
    CatalogSource, Certification, CertificationBrowser, ConfigOrigin, FolioConfig,
    JsonFileCatalog, Project, ProjectBrowser,
};
use log::info;

use cli::{Cli, Commands, FilterArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, origin) = FolioConfig::load_with_origin(&cli.config)?;
    start_logging(&cli, &config, &origin)?;

    match cli.command {
        Commands::Projects { filters, view } => {
            let mut slot = None;
            let catalog = project_catalog(&config, &mut slot)?;
            let mut browser = filtered_browser(catalog, &config, &filters);
            browser.set_view_mode(view);
            render::project_list(&browser.filtered_projects(), browser.view_mode());
        }
        Commands::Stats { filters } => {
            let mut slot = None;
            let catalog = project_catalog(&config, &mut slot)?;
            let browser = filtered_browser(catalog, &config, &filters);
            render::stats(&browser.stats(), browser.unique_technology_count());
        }
        Commands::Facets => {
            let mut slot = None;
            let catalog = project_catalog(&config, &mut slot)?;
            render::facets(
                catalog.len(),
                &catalog.counts_by_category(),
                &catalog.counts_by_domain(),
            );
        }
        Commands::Preview { id } => {
            let mut slot = None;
            let catalog = project_catalog(&config, &mut slot)?;
            let mut browser = ProjectBrowser::new(catalog)
                .with_featured_id(config.featured_project_id.clone());
            browser.open_preview(id.trim())?;
            if let Some(project) = browser.current_preview() {
                render::preview(project);
            }
            browser.close_preview();
        }
        Commands::Certs { more } => {
            let mut slot = None;
            let catalog = certification_catalog(&config, &mut slot)?;
            let mut browser = CertificationBrowser::new(catalog)
                .with_reveal(config.reveal_initial, config.reveal_step);
            for _ in 0..more {
                if !browser.has_more() {
                    break;
                }
                browser.load_more();
            }
            render::certifications(browser.visible(), browser.total(), browser.has_more());
        }
    }

    Ok(())
}

fn start_logging(cli: &Cli, config: &FolioConfig, origin: &ConfigOrigin) -> Result<()> {
    let Some(dir) = cli.log_dir.as_ref().or(config.log_dir.as_ref()) else {
        return Ok(());
    };
    let level = cli
        .log_level
        .as_deref()
        .or(config.log_level.as_deref())
        .unwrap_or_else(|| default_log_level());
    init_logging(level, &dir.to_string_lossy())
        .with_context(|| format!("cannot start logging in `{}`", dir.display()))?;
    info!(
        "event=config_load module=cli status={} path={}",
        origin.status(),
        cli.config.display()
    );
    info!("event=cli_start module=cli status=ok command={:?}", cli.command);
    Ok(())
}

/// Browser with the filter flags applied and the search text settled.
fn filtered_browser<'a>(
    catalog: &'a Catalog<Project>,
    config: &FolioConfig,
    filters: &FilterArgs,
) -> ProjectBrowser<'a> {
    let mut browser = ProjectBrowser::new(catalog)
        .with_debounce(config.debounce())
        .with_featured_id(config.featured_project_id.clone());
    browser.set_category(&filters.category);
    browser.set_domain(&filters.domain);
    browser.set_sort_key(filters.sort);

    let typed_at = Instant::now();
    browser.set_search_query(filters.query.clone(), typed_at);
    browser.tick(typed_at + config.debounce());
    browser
}

fn project_catalog<'a>(
    config: &FolioConfig,
    slot: &'a mut Option<Catalog<Project>>,
) -> Result<&'a Catalog<Project>, CatalogError> {
    match &config.catalog_dir {
        Some(dir) => Ok(slot.insert(JsonFileCatalog::new(dir).load_projects()?)),
        None => Ok(projects()),
    }
}

fn certification_catalog<'a>(
    config: &FolioConfig,
    slot: &'a mut Option<Catalog<Certification>>,
) -> Result<&'a Catalog<Certification>, CatalogError> {
    match &config.catalog_dir {
        Some(dir) => Ok(slot.insert(JsonFileCatalog::new(dir).load_certifications()?)),
        None => Ok(certifications()),
    }
}
