//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold
//! display-ready strings, highlight ranges and flags only; no filtering,
//! sorting or lookup happens after this point.
//!
//! # Example
//!
//! ```rust
//! use toolshelf::ui::viewmodel::{EmptyState, FooterInfo, HeaderInfo};
//!
//! let header = HeaderInfo {
//!     title: "AI Tools Directory".to_string(),
//!     summary: "Showing 0 tools".to_string(),
//! };
//! let empty = EmptyState::no_results();
//! assert_eq!(empty.message, "No tools found");
//! # let _ = (header, FooterInfo { keybindings: String::new() });
//! ```

use crate::domain::PriceTier;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Intro panel, present only while it is visible.
    pub intro: Option<IntroInfo>,

    pub filter_bar: FilterBarInfo,

    /// Search bar, present only in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// Rows in the visible window of the results list.
    pub display_items: Vec<DisplayItem>,

    /// Index of the cursor row within `display_items`.
    pub selected_index: usize,

    /// Replaces the results list when there is nothing to show.
    pub empty_state: Option<EmptyState>,

    /// Detail overlay, present while an entry is selected.
    pub detail: Option<DetailInfo>,

    pub footer: FooterInfo,
}

/// Results heading: fixed title plus the count line.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,

    /// `Showing N tools`, with ` for "<query>"` while searching.
    pub summary: String,
}

/// Intro panel contents, pre-wrapped to the terminal width.
#[derive(Debug, Clone)]
pub struct IntroInfo {
    pub title: String,
    pub tagline_lines: Vec<String>,
    pub highlights: Vec<(String, String)>,
}

impl IntroInfo {
    /// Rows the panel occupies, including its trailing blank line.
    #[must_use]
    pub fn height(&self) -> usize {
        1 + self.tagline_lines.len() + self.highlights.len() + 1
    }
}

/// Current category, price and sort selections.
#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    pub category: String,
    pub price: String,
    pub sort: String,

    /// Whether "clear all" would change anything.
    pub has_active_filter: bool,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// `true` while keystrokes go into the query.
    pub is_typing: bool,
}

/// One entry in the results list, rendered over two lines.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Entry name, truncated to the name column.
    pub name: String,

    /// Character ranges of `name` matching the search query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,

    pub category: String,
    pub price: PriceTier,
    pub rating: String,
    pub is_trending: bool,
    pub is_top_rated: bool,

    /// First features joined, with a `+N more` suffix when truncated.
    pub features: String,

    /// `Added <date>`.
    pub added: String,

    /// Whether the cursor is on this row.
    pub is_selected: bool,
}

/// Everything shown in the detail overlay for one entry.
#[derive(Debug, Clone)]
pub struct DetailInfo {
    pub name: String,
    pub category: String,
    pub price: PriceTier,
    pub rating: String,
    pub is_trending: bool,
    pub is_top_rated: bool,
    pub about_title: String,
    pub description: String,
    pub features: Vec<String>,
    pub added: String,
    pub pricing_details: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub visit_hint: String,
    pub website_url: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Message shown in place of the results list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No tools found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,

    /// Render the message in the error color.
    pub is_error: bool,
}

impl EmptyState {
    /// Filters matched nothing.
    #[must_use]
    pub fn no_results() -> Self {
        Self {
            message: "No tools found".to_string(),
            subtitle: "Try adjusting your search criteria or filters".to_string(),
            is_error: false,
        }
    }

    /// Catalog file is still waiting on host permissions.
    #[must_use]
    pub fn loading(source: &str) -> Self {
        Self {
            message: "Loading catalog".to_string(),
            subtitle: format!("Waiting for permission to read {source}"),
            is_error: false,
        }
    }

    /// Catalog failed to load; `error` is shown verbatim.
    #[must_use]
    pub fn load_failed(error: &str) -> Self {
        Self {
            message: "Could not load the tool catalog".to_string(),
            subtitle: error.to_string(),
            is_error: true,
        }
    }
}
