//! Certification list use-case service.
//!
//! # Invariants
//! - Catalog order is display order; the reveal counter only chooses a prefix.

use crate::catalog::Catalog;
use crate::model::certification::Certification;
use crate::state::reveal::Reveal;
use log::debug;

/// Certification grid with progressive disclosure.
pub struct CertificationBrowser<'a> {
    catalog: &'a Catalog<Certification>,
    reveal: Reveal,
}

impl<'a> CertificationBrowser<'a> {
    pub fn new(catalog: &'a Catalog<Certification>) -> Self {
        Self {
            catalog,
            reveal: Reveal::default(),
        }
    }

    pub fn with_reveal(mut self, initial: usize, step: usize) -> Self {
        self.reveal = Reveal::new(initial, step);
        self
    }

    /// Certifications currently shown.
    pub fn visible(&self) -> &'a [Certification] {
        self.reveal.visible(self.catalog.as_slice())
    }

    /// Reveals one more step. Inert for display once everything is shown.
    pub fn load_more(&mut self) -> usize {
        let visible_count = self.reveal.load_more();
        debug!(
            "event=reveal_more module=browser status=ok visible_count={} total={}",
            visible_count,
            self.catalog.len()
        );
        visible_count
    }

    /// Whether the "load more" control is offered.
    pub fn has_more(&self) -> bool {
        self.reveal.has_more(self.catalog.len())
    }

    pub fn visible_count(&self) -> usize {
        self.reveal.visible_count()
    }

    pub fn total(&self) -> usize {
        self.catalog.len()
    }
}
