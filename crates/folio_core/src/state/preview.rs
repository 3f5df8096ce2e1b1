//! Project preview dialog state machine.
//!
//! # Invariants
//! - At most one project is previewed at a time.
//! - `close` is idempotent.
//! - Background scroll is locked exactly while the state is `Open`.

use crate::model::project::Project;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Keyboard signal relevant to the preview dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Char(char),
}

/// Preview dialog state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PreviewState<'a> {
    #[default]
    Closed,
    Open(&'a Project),
}

/// Outcome of one preview transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewTransition {
    /// `Closed -> Open`.
    Opened,
    /// `Open(q) -> Open(p)` with `p != q`.
    Switched,
    /// `Open(p) -> Open(p)`.
    Reopened,
    /// `Open -> Closed`.
    Closed,
    /// `Closed -> Closed`.
    AlreadyClosed,
}

/// What the page should do with background scrolling after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollEffect {
    Suppress,
    Restore,
    Unchanged,
}

impl PreviewTransition {
    pub fn scroll_effect(self) -> ScrollEffect {
        match self {
            Self::Opened => ScrollEffect::Suppress,
            Self::Closed => ScrollEffect::Restore,
            Self::Switched | Self::Reopened | Self::AlreadyClosed => ScrollEffect::Unchanged,
        }
    }
}

impl<'a> PreviewState<'a> {
    /// Shows `project`, replacing any current preview without confirmation.
    pub fn open(&mut self, project: &'a Project) -> PreviewTransition {
        let transition = match self {
            Self::Closed => PreviewTransition::Opened,
            Self::Open(current) if current.id == project.id => PreviewTransition::Reopened,
            Self::Open(_) => PreviewTransition::Switched,
        };
        *self = Self::Open(project);
        transition
    }

    pub fn close(&mut self) -> PreviewTransition {
        match std::mem::take(self) {
            Self::Open(_) => PreviewTransition::Closed,
            Self::Closed => PreviewTransition::AlreadyClosed,
        }
    }

    /// Escape closes; other keys are ignored by the dialog.
    pub fn handle_key(&mut self, key: Key) -> Option<PreviewTransition> {
        match key {
            Key::Escape => Some(self.close()),
            _ => None,
        }
    }

    pub fn current(&self) -> Option<&'a Project> {
        match self {
            Self::Open(project) => Some(*project),
            Self::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }
}

/// Preview request errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    UnknownProject(String),
}

impl Display for PreviewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownProject(id) => write!(f, "project not found: {id}"),
        }
    }
}

impl Error for PreviewError {}
