//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record rendered by cards, lists and the
//!   preview dialog.
//! - Provide display-side fallbacks for optional fields.
//!
//! # Invariants
//! - `category` and `domain` are non-empty; each project has exactly one.
//! - `year` is a plausible 4-digit year.
//! - `metrics` keeps declaration order.

use crate::model::is_valid_record_id;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest year accepted by [`Project::validate`].
pub const MIN_PROJECT_YEAR: i32 = 1900;
/// Highest year accepted by [`Project::validate`].
pub const MAX_PROJECT_YEAR: i32 = 2100;

/// Displayable metric value. Source data mixes strings and numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl Display for MetricValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) if value.fract() == 0.0 && value.is_finite() => {
                write!(f, "{}", *value as i64)
            }
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

/// Ordered metric-name to value pairs.
///
/// Serialized as a JSON/TOML map; declaration order is preserved on read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metrics(Vec<(String, MetricValue)>);

impl Metrics {
    pub fn new(entries: Vec<(String, MetricValue)>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn get(&self, name: &str) -> Option<&MetricValue> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Metrics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Metrics {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MetricsVisitor;

        impl<'de> Visitor<'de> for MetricsVisitor {
            type Value = Metrics;

            fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of metric names to string or number values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Metrics, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, value)) = access.next_entry::<String, MetricValue>()? {
                    entries.push((name, value));
                }
                Ok(Metrics(entries))
            }
        }

        deserializer.deserialize_map(MetricsVisitor)
    }
}

/// One step of the delivery process shown in the preview dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub step: String,
    pub description: String,
    /// Icon key resolved by the render layer.
    pub icon: String,
}

/// Outbound links for one project. `dashboard` is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub github: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<String>,
}

/// Canonical project record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    pub category: String,
    pub domain: String,
    pub year: i32,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Only used for free-text search matching.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metrics: Metrics,
    #[serde(default)]
    pub process: Vec<ProcessStep>,
    pub links: ProjectLinks,
    pub image: String,
}

impl Project {
    /// Validates record-level invariants.
    ///
    /// Called once by catalog construction; browsing code assumes valid data.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if !is_valid_record_id(&self.id) {
            return Err(ProjectValidationError::InvalidId(self.id.clone()));
        }
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::EmptyTitle(self.id.clone()));
        }
        if self.category.trim().is_empty() {
            return Err(ProjectValidationError::EmptyCategory(self.id.clone()));
        }
        if self.domain.trim().is_empty() {
            return Err(ProjectValidationError::EmptyDomain(self.id.clone()));
        }
        if !(MIN_PROJECT_YEAR..=MAX_PROJECT_YEAR).contains(&self.year) {
            return Err(ProjectValidationError::ImplausibleYear {
                id: self.id.clone(),
                year: self.year,
            });
        }
        Ok(())
    }

    /// Long-form text for the preview dialog, falling back to `description`.
    pub fn long_description(&self) -> &str {
        self.full_description
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(&self.description)
    }

    /// Icon key of the first process step, used as the card glyph.
    pub fn lead_icon(&self) -> Option<&str> {
        self.process.first().map(|step| step.icon.as_str())
    }

    /// Returns whether the lower-cased `needle` occurs in any searchable field.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_text(&self, needle: &str) -> bool {
        contains_folded(&self.title, needle)
            || contains_folded(&self.description, needle)
            || self
                .technologies
                .iter()
                .any(|tech| contains_folded(tech, needle))
            || self.tags.iter().any(|tag| contains_folded(tag, needle))
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Validation errors for [`Project`] records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    InvalidId(String),
    EmptyTitle(String),
    EmptyCategory(String),
    EmptyDomain(String),
    ImplausibleYear { id: String, year: i32 },
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "project id `{id}` is not a kebab-case slug"),
            Self::EmptyTitle(id) => write!(f, "project `{id}` has an empty title"),
            Self::EmptyCategory(id) => write!(f, "project `{id}` has an empty category"),
            Self::EmptyDomain(id) => write!(f, "project `{id}` has an empty domain"),
            Self::ImplausibleYear { id, year } => write!(
                f,
                "project `{id}` has year {year}; expected {MIN_PROJECT_YEAR}..={MAX_PROJECT_YEAR}"
            ),
        }
    }
}

impl Error for ProjectValidationError {}
