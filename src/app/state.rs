//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the session: the loaded
//! catalog, the filter selection, the intro panel flag, the open entry and
//! the list cursor. All filter changes go through
//! [`AppState::apply_filter_update`], which keeps the visible list and the
//! intro panel consistent with the new filters.
//!
//! # State Components
//!
//! - **Catalog**: Immutable entry repository plus its load status
//! - **Filters**: Search/category/price/sort selection
//! - **Visible**: Ids of the entries passing the filters, in display order
//! - **Cursor**: Position within the visible list
//! - **Selection**: Entry open in the detail overlay
//! - **Intro**: Whether the intro panel is shown
//! - **Input Mode**: Controls keybinding interpretation and UI layout
//!
//! # Example
//!
//! ```rust
//! use toolshelf::app::AppState;
//! use toolshelf::catalog::Catalog;
//! use toolshelf::domain::{FilterPatch, FilterUpdate};
//! use toolshelf::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::builtin()?, Theme::default());
//! state.apply_filter_update(FilterUpdate::Patch(FilterPatch::search("voice")));
//! assert!(!state.intro.is_visible());
//!
//! let viewmodel = state.compute_viewmodel(40, 100);
//! assert!(viewmodel.header.summary.ends_with("for \"voice\""));
//! # Ok::<(), toolshelf::ToolshelfError>(())
//! ```

use super::intro::IntroPanel;
use super::modes::{InputMode, SearchFocus};
use super::selection::Selection;
use crate::catalog::Catalog;
use crate::domain::{update_filters, Entry, FilterState, FilterUpdate, SortOption};
use crate::engine::compute_visible;
use crate::ui::helpers::{format_rating, match_ranges, truncate, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailInfo, DisplayItem, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, IntroInfo,
    SearchBarInfo, UIViewModel,
};

/// Rows per entry in the results list.
pub const LIST_ROW_HEIGHT: usize = 2;

/// Fixed rows outside the list: blank, title, summary, border, filter bar,
/// border, bottom border, footer, bottom blank.
pub const BASE_CHROME_ROWS: usize = 9;

/// Rows taken by the search box.
pub const SEARCH_BAR_ROWS: usize = 3;

/// Features previewed per list row before `+N more`.
const FEATURE_PREVIEW_LIMIT: usize = 3;

/// Width of the name column, including the cursor marker.
pub const NAME_COLUMN_WIDTH: usize = 28;

const DIRECTORY_TITLE: &str = "AI Tools Directory";
const INTRO_TITLE: &str = "Discover the Future of AI";
const INTRO_TAGLINE: &str = "Your ultimate destination for discovering, comparing, and accessing \
    the most powerful AI tools. From chatbots to image generators, find the perfect AI solution \
    for your needs.";
const INTRO_HIGHLIGHTS: [(&str, &str); 3] = [
    (
        "Smart Discovery",
        "Instantly find and compare AI tools with our advanced search and filtering system.",
    ),
    (
        "Trusted Reviews",
        "Real user reviews and ratings to help you make informed decisions about AI tools.",
    ),
    (
        "Global Collection",
        "Comprehensive collection of AI tools from around the world, updated daily.",
    ),
];

/// Where the catalog is in its load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    /// Entries are available.
    Ready,
    /// A catalog file is waiting on host filesystem permission.
    Loading {
        /// Path shown to the user while waiting.
        source: String,
    },
    /// Loading failed; the catalog is empty.
    Failed {
        error: String,
    },
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Entry repository. Empty until loaded.
    pub catalog: Catalog,

    pub status: CatalogStatus,

    /// Current search/category/price/sort selection.
    ///
    /// Only mutated through [`AppState::apply_filter_update`].
    pub filters: FilterState,

    pub intro: IntroPanel,

    /// Ids of visible entries in display order.
    ///
    /// Recomputed by `recompute_visible()` after every filter or catalog change.
    pub visible: Vec<String>,

    /// Zero-based cursor within `visible`.
    ///
    /// Clamped to valid bounds by `recompute_visible()`. Wraps around during
    /// navigation via `move_cursor_up/down()`.
    pub cursor: usize,

    /// Entry open in the detail overlay.
    pub selection: Selection,

    pub input_mode: InputMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates state for a loaded catalog with default filters.
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        let mut state = Self {
            catalog,
            status: CatalogStatus::Ready,
            filters: FilterState::default(),
            intro: IntroPanel::default(),
            visible: vec![],
            cursor: 0,
            selection: Selection::default(),
            input_mode: InputMode::default(),
            theme,
        };
        state.recompute_visible();
        state
    }

    /// Creates state that waits for a catalog file named `source`.
    #[must_use]
    pub fn loading(source: impl Into<String>, theme: Theme) -> Self {
        let mut state = Self::new(Catalog::default(), theme);
        state.status = CatalogStatus::Loading {
            source: source.into(),
        };
        state
    }

    /// Creates state for a catalog that failed to load.
    #[must_use]
    pub fn failed(error: impl Into<String>, theme: Theme) -> Self {
        let mut state = Self::new(Catalog::default(), theme);
        state.status = CatalogStatus::Failed {
            error: error.into(),
        };
        state
    }

    /// Sets the initial sort without touching the intro panel.
    #[must_use]
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.filters.sort = sort;
        self.recompute_visible();
        self
    }

    /// Installs the result of an asynchronous catalog load.
    ///
    /// Filters, intro panel and input mode are kept; the selection is cleared
    /// since ids from a previous catalog may not exist in the new one.
    pub fn set_catalog(&mut self, result: std::result::Result<Catalog, String>) {
        match result {
            Ok(catalog) => {
                tracing::debug!(entry_count = catalog.len(), "catalog installed");
                self.catalog = catalog;
                self.status = CatalogStatus::Ready;
            }
            Err(error) => {
                tracing::error!(error = %error, "catalog failed to load");
                self.catalog = Catalog::default();
                self.status = CatalogStatus::Failed { error };
            }
        }
        self.selection.clear();
        self.recompute_visible();
    }

    /// Applies a filter update, then the intro panel rules, then recomputes
    /// the visible list.
    pub fn apply_filter_update(&mut self, update: FilterUpdate) {
        let next = update_filters(&self.filters, &update);
        self.intro.apply(&update, &next);

        if next == self.filters {
            return;
        }
        self.filters = next;
        self.recompute_visible();
    }

    /// Recomputes `visible` from the catalog and filters and clamps the cursor.
    pub fn recompute_visible(&mut self) {
        self.visible = compute_visible(self.catalog.entries(), &self.filters)
            .into_iter()
            .map(|entry| entry.id.clone())
            .collect();

        if self.visible.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.visible.len() - 1);
        }
    }

    /// Moves the cursor down by one position, wrapping to top if at end.
    pub fn move_cursor_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.visible.len();
    }

    /// Moves the cursor up by one position, wrapping to bottom if at start.
    pub fn move_cursor_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.visible.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Entry under the cursor.
    #[must_use]
    pub fn cursor_entry(&self) -> Option<&Entry> {
        self.visible
            .get(self.cursor)
            .and_then(|id| self.catalog.get(id))
    }

    /// Entry open in the detail overlay, resolved through the catalog.
    #[must_use]
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selection.id().and_then(|id| self.catalog.get(id))
    }

    /// Opens the entry under the cursor. Returns `false` if the list is empty.
    pub fn open_details(&mut self) -> bool {
        let Some(id) = self.visible.get(self.cursor).cloned() else {
            return false;
        };
        tracing::debug!(id = %id, "opening details");
        self.selection.select(id);
        true
    }

    pub fn close_details(&mut self) {
        self.selection.clear();
    }

    /// Replaces the open entry with its neighbour in the visible list.
    ///
    /// Wraps at both ends and moves the cursor along. Returns `false` when no
    /// entry is open or the open entry is no longer visible.
    pub fn step_details(&mut self, forward: bool) -> bool {
        let Some(position) = self
            .selection
            .id()
            .and_then(|id| self.visible.iter().position(|v| v == id))
        else {
            return false;
        };

        let len = self.visible.len();
        let next = if forward {
            (position + 1) % len
        } else {
            (position + len - 1) % len
        };
        self.cursor = next;
        self.selection.select(self.visible[next].clone());
        true
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate list capacity after subtracting UI chrome (header, intro,
    ///    filter bar, search bar, footer)
    /// 2. Center window around the cursor
    /// 3. Adjust window if near start/end to maximize visible items
    /// 4. Compute relative cursor index within visible window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let intro = self.compute_intro(cols);
        let intro_height = intro.as_ref().map_or(0, IntroInfo::height);
        let capacity = (self.calculate_available_rows(rows, intro_height) / LIST_ROW_HEIGHT).max(1);

        let mut visible_start = self.cursor.saturating_sub(capacity / 2);
        let visible_end = (visible_start + capacity).min(self.visible.len());
        if visible_end - visible_start < capacity && self.visible.len() >= capacity {
            visible_start = visible_end.saturating_sub(capacity);
        }

        let display_items: Vec<DisplayItem> = self.visible[visible_start..visible_end]
            .iter()
            .enumerate()
            .filter_map(|(relative_idx, id)| {
                let entry = self.catalog.get(id)?;
                Some(self.compute_display_item(entry, visible_start + relative_idx, cols))
            })
            .collect();

        UIViewModel {
            header: self.compute_header(),
            intro,
            filter_bar: self.compute_filter_bar(),
            search_bar: self.compute_search_bar(),
            display_items,
            selected_index: self.cursor.saturating_sub(visible_start),
            empty_state: self.compute_empty_state(),
            detail: self.selected_entry().map(Self::compute_detail),
            footer: self.compute_footer(),
        }
    }

    fn compute_display_item(&self, entry: &Entry, absolute_idx: usize, cols: usize) -> DisplayItem {
        let name = truncate(&entry.name, NAME_COLUMN_WIDTH - 4);
        let highlight_ranges = match_ranges(&name, &self.filters.search);

        let (shown, more) = entry.feature_preview(FEATURE_PREVIEW_LIMIT);
        let mut features = shown.join(" · ");
        if more > 0 {
            features.push_str(&format!(" +{more} more"));
        }

        let added = format!("Added {}", entry.added_label());
        let features_width = cols
            .saturating_sub(NAME_COLUMN_WIDTH + added.len() + 2)
            .max(1);

        DisplayItem {
            name,
            highlight_ranges,
            category: entry.category.label().to_string(),
            price: entry.price,
            rating: format_rating(entry.rating, entry.review_count),
            is_trending: entry.trending,
            is_top_rated: entry.top_rated,
            features: truncate(&features, features_width),
            added,
            is_selected: absolute_idx == self.cursor,
        }
    }

    fn compute_detail(entry: &Entry) -> DetailInfo {
        DetailInfo {
            name: entry.name.clone(),
            category: entry.category.label().to_string(),
            price: entry.price,
            rating: format_rating(entry.rating, entry.review_count),
            is_trending: entry.trending,
            is_top_rated: entry.top_rated,
            about_title: format!("About {}", entry.name),
            description: entry.description.clone(),
            features: entry.features.clone(),
            added: format!("Added {}", entry.added_label()),
            pricing_details: entry.pricing_details.clone(),
            pros: entry.pros.clone(),
            cons: entry.cons.clone(),
            visit_hint: format!("Visit {}", entry.name),
            website_url: entry.website_url.clone(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let mut summary = format!("Showing {} tools", self.visible.len());
        if !self.filters.search.is_empty() {
            summary.push_str(&format!(" for \"{}\"", self.filters.search));
        }
        HeaderInfo {
            title: DIRECTORY_TITLE.to_string(),
            summary,
        }
    }

    fn compute_intro(&self, cols: usize) -> Option<IntroInfo> {
        if !self.intro.is_visible() || self.status != CatalogStatus::Ready {
            return None;
        }

        Some(IntroInfo {
            title: INTRO_TITLE.to_string(),
            tagline_lines: wrap(INTRO_TAGLINE, cols.saturating_sub(4)),
            highlights: INTRO_HIGHLIGHTS
                .iter()
                .map(|(label, text)| ((*label).to_string(), (*text).to_string()))
                .collect(),
        })
    }

    fn compute_filter_bar(&self) -> FilterBarInfo {
        FilterBarInfo {
            category: self.filters.category.label().to_string(),
            price: self.filters.price.label().to_string(),
            sort: self.filters.sort.label().to_string(),
            has_active_filter: self.filters.has_active_filter(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.filters.search.clone(),
                is_typing: focus == SearchFocus::Typing,
            }),
            InputMode::Browse => None,
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        match &self.status {
            CatalogStatus::Loading { source } => Some(EmptyState::loading(source)),
            CatalogStatus::Failed { error } => Some(EmptyState::load_failed(error)),
            CatalogStatus::Ready if self.visible.is_empty() => Some(EmptyState::no_results()),
            CatalogStatus::Ready => None,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.selection.is_open() {
            "Esc/q: close  j/k: next/previous  o: open website"
        } else {
            match self.input_mode {
                InputMode::Search(SearchFocus::Typing) => {
                    "Esc: clear search  Enter: results  Ctrl+n/p: navigate  Type to filter"
                }
                InputMode::Search(SearchFocus::Navigating) => {
                    "Esc: clear search  /: edit query  j/k: navigate  Enter: details  o: website"
                }
                InputMode::Browse => {
                    "j/k: navigate  Enter: details  /: search  c/p/s: category/price/sort  x: clear  o: website  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Calculates rows available for the results list after subtracting UI chrome.
    const fn calculate_available_rows(&self, total_rows: usize, intro_height: usize) -> usize {
        let search_rows = match self.input_mode {
            InputMode::Search(_) => SEARCH_BAR_ROWS,
            InputMode::Browse => 0,
        };
        total_rows.saturating_sub(BASE_CHROME_ROWS + intro_height + search_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::fixtures::entry;
    use crate::domain::{Category, CategoryFilter, FilterPatch};

    fn sample_state() -> AppState {
        let mut a = entry("a", "Alpha Chat");
        a.trending = true;
        a.features = vec!["one".into(), "two".into(), "three".into(), "four".into(), "five".into()];
        let mut b = entry("b", "Beta Paint");
        b.category = Category::ImageAi;
        b.rating = 4.9;
        let c = entry("c", "Gamma Code");
        let catalog = Catalog::from_entries(vec![a, b, c]).unwrap();
        AppState::new(catalog, Theme::default())
    }

    #[test]
    fn starts_with_everything_visible_and_intro_shown() {
        let state = sample_state();
        assert_eq!(state.visible, vec!["a", "b", "c"]);
        assert!(state.intro.is_visible());
        assert_eq!(state.status, CatalogStatus::Ready);
    }

    #[test]
    fn initial_sort_does_not_hide_intro() {
        let state = sample_state().with_sort(SortOption::Alphabetical);
        assert_eq!(state.filters.sort, SortOption::Alphabetical);
        assert!(state.intro.is_visible());
    }

    #[test]
    fn filter_update_recomputes_and_clamps_cursor() {
        let mut state = sample_state();
        state.cursor = 2;
        state.apply_filter_update(FilterUpdate::Patch(FilterPatch::search("paint")));
        assert_eq!(state.visible, vec!["b"]);
        assert_eq!(state.cursor, 0);
        assert!(!state.intro.is_visible());
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut state = sample_state();
        state.move_cursor_up();
        assert_eq!(state.cursor, 2);
        state.move_cursor_down();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn step_details_replaces_selection() {
        let mut state = sample_state();
        assert!(state.open_details());
        assert_eq!(state.selection.id(), Some("a"));

        assert!(state.step_details(true));
        assert_eq!(state.selection.id(), Some("b"));
        assert_eq!(state.cursor, 1);

        assert!(state.step_details(false));
        assert!(state.step_details(false));
        assert_eq!(state.selection.id(), Some("c"));
    }

    #[test]
    fn open_details_on_empty_list_does_nothing() {
        let mut state = sample_state();
        state.apply_filter_update(FilterUpdate::Replace(FilterState {
            category: CategoryFilter::Only(Category::VideoAi),
            ..FilterState::default()
        }));
        assert!(!state.open_details());
        assert!(!state.selection.is_open());
    }

    #[test]
    fn viewmodel_header_counts_and_quotes_query() {
        let mut state = sample_state();
        assert_eq!(state.compute_viewmodel(40, 120).header.summary, "Showing 3 tools");

        state.apply_filter_update(FilterUpdate::Patch(FilterPatch::search("a")));
        let vm = state.compute_viewmodel(40, 120);
        assert_eq!(vm.header.title, "AI Tools Directory");
        assert_eq!(vm.header.summary, "Showing 3 tools for \"a\"");
        assert!(vm.intro.is_none());
    }

    #[test]
    fn viewmodel_shows_empty_state_for_no_results() {
        let mut state = sample_state();
        state.apply_filter_update(FilterUpdate::Replace(FilterState {
            category: CategoryFilter::Only(Category::VideoAi),
            ..FilterState::default()
        }));
        let vm = state.compute_viewmodel(40, 120);
        assert!(vm.display_items.is_empty());
        assert_eq!(vm.empty_state, Some(EmptyState::no_results()));
        assert_eq!(vm.header.summary, "Showing 0 tools");
    }

    #[test]
    fn viewmodel_rows_carry_badges_and_feature_preview() {
        let state = sample_state();
        let vm = state.compute_viewmodel(40, 200);
        let first = &vm.display_items[0];
        assert!(first.is_selected);
        assert!(first.is_trending);
        assert_eq!(first.features, "one · two · three +2 more");
        assert_eq!(first.added, "Added Jan 1, 2024");
        assert_eq!(first.rating, "★ 4.0 (10 reviews)");
    }

    #[test]
    fn viewmodel_highlights_search_matches_in_names() {
        let mut state = sample_state();
        state.apply_filter_update(FilterUpdate::Patch(FilterPatch::search("paint")));
        let vm = state.compute_viewmodel(40, 120);
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(5, 10)]);
    }

    #[test]
    fn viewmodel_window_follows_cursor() {
        let entries = (0..30)
            .map(|i| entry(&format!("e{i:02}"), &format!("Entry {i:02}")))
            .collect();
        let mut state = AppState::new(Catalog::from_entries(entries).unwrap(), Theme::default());
        state.cursor = 29;

        let vm = state.compute_viewmodel(BASE_CHROME_ROWS + 20, 120);
        assert!(vm.intro.is_some());
        let capacity = vm.display_items.len();
        assert!(capacity >= 1);
        assert_eq!(vm.selected_index, capacity - 1);
        assert!(vm.display_items[capacity - 1].is_selected);
    }

    #[test]
    fn detail_resolves_through_catalog() {
        let mut state = sample_state();
        state.cursor = 1;
        state.open_details();
        let vm = state.compute_viewmodel(40, 120);
        let detail = vm.detail.unwrap();
        assert_eq!(detail.name, "Beta Paint");
        assert_eq!(detail.about_title, "About Beta Paint");
        assert_eq!(detail.visit_hint, "Visit Beta Paint");
        assert_eq!(detail.category, "Image AI");
    }

    #[test]
    fn loading_and_failure_show_in_empty_state() {
        let state = AppState::loading("~/tools.json", Theme::default());
        let vm = state.compute_viewmodel(40, 120);
        assert!(vm.intro.is_none());
        assert_eq!(vm.empty_state, Some(EmptyState::loading("~/tools.json")));

        let mut state = AppState::loading("~/tools.json", Theme::default());
        state.set_catalog(Err("Catalog error: duplicate tool id: x".to_string()));
        let empty = state.compute_viewmodel(40, 120).empty_state.unwrap();
        assert!(empty.is_error);
        assert_eq!(empty.subtitle, "Catalog error: duplicate tool id: x");
    }

    #[test]
    fn late_catalog_keeps_filters() {
        let mut state = AppState::loading("tools.json", Theme::default());
        state.apply_filter_update(FilterUpdate::Patch(FilterPatch::search("beta")));
        let catalog = sample_state().catalog;
        state.set_catalog(Ok(catalog));
        assert_eq!(state.visible, vec!["b"]);
        assert_eq!(state.status, CatalogStatus::Ready);
    }
}
