//! Immutable ordered catalog container.
//!
//! # Invariants
//! - Order and length are fixed at construction.
//! - Record ids are unique; lookups by id are O(1).

use crate::catalog::CatalogError;
use crate::model::certification::Certification;
use crate::model::project::Project;
use std::collections::HashMap;

/// Record kinds that can be held by a [`Catalog`].
pub trait CatalogRecord {
    /// Stable record key.
    fn record_id(&self) -> &str;
    /// Record-level invariant check mapped into the catalog error space.
    fn check(&self) -> Result<(), CatalogError>;
}

impl CatalogRecord for Project {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn check(&self) -> Result<(), CatalogError> {
        self.validate().map_err(CatalogError::InvalidProject)
    }
}

impl CatalogRecord for Certification {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn check(&self) -> Result<(), CatalogError> {
        self.validate().map_err(CatalogError::InvalidCertification)
    }
}

/// Ordered, validated, read-only record sequence.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: CatalogRecord> Catalog<T> {
    /// Builds a catalog, validating every record and id uniqueness.
    pub fn try_new(items: Vec<T>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            item.check()?;
            let id = item.record_id().to_string();
            if index.insert(id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(id));
            }
        }
        Ok(Self { items, index })
    }

    /// Returns one record by stable id. Ids match exactly.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|position| &self.items[*position])
    }
}

impl<T> Catalog<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
