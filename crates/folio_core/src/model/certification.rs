//! Certification domain model.
//!
//! # Invariants
//! - `verify_url` and `logo` are optional; absence disables the affordance,
//!   it is never an error.

use crate::model::is_valid_record_id;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of skill badges shown on a certification card.
pub const DEFAULT_SKILL_BADGES: usize = 3;

/// Canonical certification record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub issuer: String,
    /// Display date as issued, e.g. `Mar 2024`.
    pub date: String,
    pub status: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Verification affordance for one certification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification<'a> {
    Available(&'a str),
    Unavailable,
}

/// Skill badges split into the shown prefix and an overflow count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBadges<'a> {
    pub shown: &'a [String],
    /// Rendered as a `+N` badge when non-zero.
    pub overflow: usize,
}

impl Certification {
    /// Validates record-level invariants.
    pub fn validate(&self) -> Result<(), CertificationValidationError> {
        if !is_valid_record_id(&self.id) {
            return Err(CertificationValidationError::InvalidId(self.id.clone()));
        }
        if self.title.trim().is_empty() {
            return Err(CertificationValidationError::EmptyTitle(self.id.clone()));
        }
        if self.issuer.trim().is_empty() {
            return Err(CertificationValidationError::EmptyIssuer(self.id.clone()));
        }
        Ok(())
    }

    pub fn verification(&self) -> Verification<'_> {
        match self.verify_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Verification::Available(url),
            _ => Verification::Unavailable,
        }
    }

    /// Returns at most `max` leading skills plus the count left out.
    pub fn skill_badges(&self, max: usize) -> SkillBadges<'_> {
        let shown = &self.skills[..self.skills.len().min(max)];
        SkillBadges {
            shown,
            overflow: self.skills.len() - shown.len(),
        }
    }
}

/// Validation errors for [`Certification`] records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificationValidationError {
    InvalidId(String),
    EmptyTitle(String),
    EmptyIssuer(String),
}

impl Display for CertificationValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "certification id `{id}` is not a kebab-case slug"),
            Self::EmptyTitle(id) => write!(f, "certification `{id}` has an empty title"),
            Self::EmptyIssuer(id) => write!(f, "certification `{id}` has an empty issuer"),
        }
    }
}

impl Error for CertificationValidationError {}
