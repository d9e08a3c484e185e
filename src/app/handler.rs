//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and catalog load results, translating them into state changes and action
//! sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Details**: `OpenDetails`, `CloseDetails`, `NextDetails`, `PreviousDetails`, `OpenWebsite`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`, `Char`, `Backspace`, `ClearSearch`
//! - **Filter bar**: `CycleCategory`, `CyclePrice`, `CycleSort`, `ClearAll`
//! - **System**: `CatalogLoaded`, `CloseFocus`
//!
//! Search typing is a field-level patch of the filters. Filter bar controls
//! replace the whole filter state with one field changed, and `ClearAll`
//! resets it atomically; the difference matters for the intro panel.
//!
//! # Example
//!
//! ```rust
//! use toolshelf::app::{handle_event, AppState, Event};
//! use toolshelf::catalog::Catalog;
//! use toolshelf::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::builtin()?, Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), toolshelf::ToolshelfError>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::catalog::Catalog;
use crate::domain::error::Result;
use crate::domain::{FilterPatch, FilterState, FilterUpdate};

/// Events triggered by user input or by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the cursor down by one position (wraps to top).
    KeyDown,
    /// Moves the cursor up by one position (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    /// Opens the detail overlay for the entry under the cursor.
    OpenDetails,
    /// Closes the detail overlay.
    CloseDetails,
    /// Replaces the open entry with the next visible one.
    NextDetails,
    /// Replaces the open entry with the previous visible one.
    PreviousDetails,
    /// Opens the website of the open entry, or of the entry under the cursor.
    OpenWebsite,

    /// Enters search mode with typing focus, keeping the current query.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the results list (from typing mode).
    FocusResults,
    /// Leaves search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears the query without entering search mode.
    ClearSearch,

    /// Selects the next (or previous) category in the filter bar.
    CycleCategory { forward: bool },
    /// Selects the next (or previous) price tier in the filter bar.
    CyclePrice { forward: bool },
    /// Selects the next (or previous) sort option in the filter bar.
    CycleSort { forward: bool },
    /// Resets every filter at once.
    ClearAll,

    /// Reports the outcome of loading a catalog file.
    ///
    /// Errors are carried as display strings since they are only shown.
    CatalogLoaded(std::result::Result<Catalog, String>),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `false` when the event left
/// the visible state unchanged.
///
/// # Errors
///
/// No current event fails; the `Result` keeps the signature uniform with the
/// plugin shim's error path.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::OpenDetails => {
            if state.open_details() {
                Ok((true, vec![]))
            } else {
                tracing::debug!("no entry under cursor");
                Ok((false, vec![]))
            }
        }
        Event::CloseDetails => {
            if !state.selection.is_open() {
                return Ok((false, vec![]));
            }
            state.close_details();
            Ok((true, vec![]))
        }
        Event::NextDetails => Ok((state.step_details(true), vec![])),
        Event::PreviousDetails => Ok((state.step_details(false), vec![])),
        Event::OpenWebsite => {
            let target = state.selected_entry().or_else(|| state.cursor_entry());
            let Some(entry) = target else {
                tracing::debug!("no entry to open");
                return Ok((false, vec![]));
            };
            if entry.website_url.trim().is_empty() {
                tracing::debug!(id = %entry.id, "entry has no website");
                return Ok((false, vec![]));
            }

            tracing::debug!(id = %entry.id, url = %entry.website_url, "opening website");
            Ok((
                false,
                vec![Action::OpenWebsite {
                    url: entry.website_url.clone(),
                }],
            ))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            state.input_mode = if state.filters.search.is_empty() {
                InputMode::Browse
            } else {
                InputMode::Search(SearchFocus::Navigating)
            };
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.filters.search, "exiting search mode");
            state.input_mode = InputMode::Browse;
            clear_search(state);
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            let mut query = state.filters.search.clone();
            query.push(*c);
            tracing::trace!(query = %query, char = %c, "search query updated");
            state.apply_filter_update(FilterUpdate::Patch(FilterPatch::search(query)));
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            let mut query = state.filters.search.clone();
            if query.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.apply_filter_update(FilterUpdate::Patch(FilterPatch::search(query)));
            Ok((true, vec![]))
        }
        Event::ClearSearch => {
            if state.filters.search.is_empty() {
                return Ok((false, vec![]));
            }
            clear_search(state);
            Ok((true, vec![]))
        }
        Event::CycleCategory { forward } => {
            let current = state.filters.category;
            let category = if *forward { current.next() } else { current.prev() };
            let next = FilterState {
                category,
                ..state.filters.clone()
            };
            replace_filters(state, next);
            Ok((true, vec![]))
        }
        Event::CyclePrice { forward } => {
            let current = state.filters.price;
            let price = if *forward { current.next() } else { current.prev() };
            let next = FilterState {
                price,
                ..state.filters.clone()
            };
            replace_filters(state, next);
            Ok((true, vec![]))
        }
        Event::CycleSort { forward } => {
            let current = state.filters.sort;
            let sort = if *forward { current.next() } else { current.prev() };
            let next = FilterState {
                sort,
                ..state.filters.clone()
            };
            replace_filters(state, next);
            Ok((true, vec![]))
        }
        Event::ClearAll => {
            tracing::debug!(filters = ?state.filters, "clearing all filters");
            state.apply_filter_update(FilterUpdate::ResetAll);
            if matches!(state.input_mode, InputMode::Search(SearchFocus::Navigating)) {
                state.input_mode = InputMode::Browse;
            }
            Ok((true, vec![]))
        }
        Event::CatalogLoaded(result) => {
            state.set_catalog(result.clone());
            Ok((true, vec![]))
        }
    }
}

fn clear_search(state: &mut AppState) {
    state.apply_filter_update(FilterUpdate::Patch(FilterPatch::search(String::new())));
}

fn replace_filters(state: &mut AppState, next: FilterState) {
    tracing::debug!(filters = ?next, "filter bar changed");
    state.apply_filter_update(FilterUpdate::Replace(next));
}
