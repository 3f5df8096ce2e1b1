mod common;

use common::project;
use folio_core::{Key, PreviewState, PreviewTransition, ScrollEffect};

#[test]
fn open_then_close_round_trips_scroll_lock() {
    let first = project("first", "ml", "media", 2024);
    let mut state = PreviewState::default();
    assert!(!state.scroll_locked());

    let opened = state.open(&first);
    assert_eq!(opened, PreviewTransition::Opened);
    assert_eq!(opened.scroll_effect(), ScrollEffect::Suppress);
    assert!(state.scroll_locked());
    assert_eq!(state.current().map(|p| p.id.as_str()), Some("first"));

    let closed = state.close();
    assert_eq!(closed, PreviewTransition::Closed);
    assert_eq!(closed.scroll_effect(), ScrollEffect::Restore);
    assert!(!state.scroll_locked());
    assert!(state.current().is_none());
}

#[test]
fn close_is_idempotent() {
    let mut state = PreviewState::Closed;
    assert_eq!(state.close(), PreviewTransition::AlreadyClosed);
    assert_eq!(state.close(), PreviewTransition::AlreadyClosed);
    assert_eq!(state, PreviewState::Closed);
    assert_eq!(
        PreviewTransition::AlreadyClosed.scroll_effect(),
        ScrollEffect::Unchanged
    );
}

#[test]
fn reopening_same_project_keeps_it_open() {
    let first = project("first", "ml", "media", 2024);
    let mut state = PreviewState::default();

    state.open(&first);
    assert_eq!(state.open(&first), PreviewTransition::Reopened);
    assert_eq!(state, PreviewState::Open(&first));
}

#[test]
fn switching_previews_needs_no_close() {
    let first = project("first", "ml", "media", 2024);
    let second = project("second", "data", "retail", 2022);
    let mut state = PreviewState::default();

    state.open(&first);
    let switched = state.open(&second);
    assert_eq!(switched, PreviewTransition::Switched);
    assert_eq!(switched.scroll_effect(), ScrollEffect::Unchanged);
    assert_eq!(state.current().map(|p| p.id.as_str()), Some("second"));
    assert!(state.scroll_locked());
}

#[test]
fn escape_closes_and_other_keys_are_ignored() {
    let first = project("first", "ml", "media", 2024);
    let mut state = PreviewState::default();
    state.open(&first);

    assert_eq!(state.handle_key(Key::Enter), None);
    assert_eq!(state.handle_key(Key::Char('q')), None);
    assert!(state.is_open());

    assert_eq!(
        state.handle_key(Key::Escape),
        Some(PreviewTransition::Closed)
    );
    assert_eq!(
        state.handle_key(Key::Escape),
        Some(PreviewTransition::AlreadyClosed)
    );
}
