//! Runtime configuration.
//!
//! # Responsibility
//! - Load `folio.toml` settings with defaults for every field.
//! - Reject unknown keys and values that would make browsing inert.
//!
//! # Invariants
//! - A missing config file is not an error; defaults apply.
//! - A config that passed [`FolioConfig::validate`] never yields a zero
//!   debounce window or reveal step.

use crate::catalog::facets::DEFAULT_FEATURED_PROJECT_ID;
use crate::search::debounce::DEFAULT_DEBOUNCE;
use crate::state::reveal::{DEFAULT_REVEAL_INITIAL, DEFAULT_REVEAL_STEP};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default config file name looked up by the CLI.
pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    pub debounce_ms: u64,
    pub reveal_initial: usize,
    pub reveal_step: usize,
    pub featured_project_id: String,
    /// Directory holding `projects.json` and `certifications.json`.
    /// The bundled catalog is used when unset.
    pub catalog_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    /// Absolute directory for rolling log files. Logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            reveal_initial: DEFAULT_REVEAL_INITIAL,
            reveal_step: DEFAULT_REVEAL_STEP,
            featured_project_id: DEFAULT_FEATURED_PROJECT_ID.to_string(),
            catalog_dir: None,
            log_level: None,
            log_dir: None,
        }
    }
}

impl FolioConfig {
    /// Parses and validates TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: None,
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_origin(path).map(|(config, _)| config)
    }

    /// Like [`FolioConfig::load_or_default`], also reporting where the values
    /// came from.
    ///
    /// Config is read before logging starts, so callers log the origin once
    /// their logger is up.
    pub fn load_with_origin(path: &Path) -> Result<(Self, ConfigOrigin), ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok((Self::default(), ConfigOrigin::Defaults));
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = Self::from_toml_str(&text).map_err(|err| err.with_path(path))?;
        Ok((config, ConfigOrigin::File(path.to_path_buf())))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::Invalid(
                "debounce_ms must be greater than zero".to_string(),
            ));
        }
        if self.reveal_step == 0 {
            return Err(ConfigError::Invalid(
                "reveal_step must be greater than zero".to_string(),
            ));
        }
        if self.featured_project_id.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "featured_project_id cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Where a loaded [`FolioConfig`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    File(PathBuf),
    /// No file at the requested path.
    Defaults,
}

impl ConfigOrigin {
    /// `ok` for a parsed file, `default` otherwise; used as a log status.
    pub fn status(&self) -> &'static str {
        match self {
            Self::File(_) => "ok",
            Self::Defaults => "default",
        }
    }
}

/// Config loading error.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: Option<PathBuf>,
        source: toml::de::Error,
    },
    Invalid(String),
}

impl ConfigError {
    fn with_path(self, path: &Path) -> Self {
        match self {
            Self::Parse { source, .. } => Self::Parse {
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse {
                path: Some(path),
                source,
            } => write!(f, "invalid config `{}`: {source}", path.display()),
            Self::Parse { path: None, source } => write!(f, "invalid config: {source}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}
