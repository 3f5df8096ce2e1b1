//! Catalog loaders.
//!
//! # Responsibility
//! - Decode project/certification JSON into validated catalogs.
//! - Keep the data origin (bundled vs. on-disk) behind one trait.
//!
//! # Invariants
//! - Loaders never hand out a catalog that failed validation.

use crate::catalog::store::{Catalog, CatalogRecord};
use crate::catalog::CatalogError;
use crate::model::certification::Certification;
use crate::model::project::Project;
use log::info;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// File name of the projects document inside a catalog directory.
pub const PROJECTS_FILE: &str = "projects.json";
/// File name of the certifications document inside a catalog directory.
pub const CERTIFICATIONS_FILE: &str = "certifications.json";

const EMBEDDED_PROJECTS: &str = include_str!("data/projects.json");
const EMBEDDED_CERTIFICATIONS: &str = include_str!("data/certifications.json");

/// Origin of catalog reference data.
pub trait CatalogSource {
    fn load_projects(&self) -> Result<Catalog<Project>, CatalogError>;
    fn load_certifications(&self) -> Result<Catalog<Certification>, CatalogError>;
}

/// Catalog data compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl CatalogSource for EmbeddedCatalog {
    fn load_projects(&self) -> Result<Catalog<Project>, CatalogError> {
        decode_catalog("embedded:projects", EMBEDDED_PROJECTS)
    }

    fn load_certifications(&self) -> Result<Catalog<Certification>, CatalogError> {
        decode_catalog("embedded:certifications", EMBEDDED_CERTIFICATIONS)
    }
}

/// Catalog data read from `projects.json` / `certifications.json` in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    dir: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn load<T: DeserializeOwned + CatalogRecord>(
        &self,
        file_name: &str,
    ) -> Result<Catalog<T>, CatalogError> {
        let path = self.dir.join(file_name);
        let text = std::fs::read_to_string(&path).map_err(|source| CatalogError::Io {
            path: path.clone(),
            source,
        })?;
        decode_catalog(&path.display().to_string(), &text)
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load_projects(&self) -> Result<Catalog<Project>, CatalogError> {
        self.load(PROJECTS_FILE)
    }

    fn load_certifications(&self) -> Result<Catalog<Certification>, CatalogError> {
        self.load(CERTIFICATIONS_FILE)
    }
}

/// Decodes one JSON array document into a validated catalog.
pub fn decode_catalog<T: DeserializeOwned + CatalogRecord>(
    origin: &str,
    text: &str,
) -> Result<Catalog<T>, CatalogError> {
    let items: Vec<T> = serde_json::from_str(text).map_err(|source| CatalogError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    let catalog = Catalog::try_new(items)?;
    info!(
        "event=catalog_load module=catalog status=ok origin={} records={}",
        origin,
        catalog.len()
    );
    Ok(catalog)
}
