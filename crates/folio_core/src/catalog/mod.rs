//! Catalog store: loading, validation and process-wide access.
//!
//! # Responsibility
//! - Turn reference data into validated, immutable [`Catalog`] values.
//! - Expose the bundled catalogs as lazily initialized read-only singletons.
//!
//! # Invariants
//! - A catalog never changes length or order after construction.
//! - Ids are unique per catalog.
//! - The singletons are initialized at most once and never torn down.

pub mod facets;
pub mod source;
pub mod store;

pub use store::{Catalog, CatalogRecord};

use crate::model::certification::{Certification, CertificationValidationError};
use crate::model::project::{Project, ProjectValidationError};
use once_cell::sync::Lazy;
use source::{CatalogSource, EmbeddedCatalog};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

static PROJECTS: Lazy<Catalog<Project>> = Lazy::new(|| {
    EmbeddedCatalog
        .load_projects()
        .expect("embedded project catalog is valid")
});

static CERTIFICATIONS: Lazy<Catalog<Certification>> = Lazy::new(|| {
    EmbeddedCatalog
        .load_certifications()
        .expect("embedded certification catalog is valid")
});

/// Bundled project catalog.
pub fn projects() -> &'static Catalog<Project> {
    &PROJECTS
}

/// Bundled certification catalog.
pub fn certifications() -> &'static Catalog<Certification> {
    &CERTIFICATIONS
}

/// Catalog construction error.
#[derive(Debug)]
pub enum CatalogError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        origin: String,
        source: serde_json::Error,
    },
    InvalidProject(ProjectValidationError),
    InvalidCertification(CertificationValidationError),
    DuplicateId(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
            Self::Parse { origin, source } => {
                write!(f, "failed to parse catalog `{origin}`: {source}")
            }
            Self::InvalidProject(err) => write!(f, "{err}"),
            Self::InvalidCertification(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate catalog id `{id}`"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::InvalidProject(err) => Some(err),
            Self::InvalidCertification(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}
