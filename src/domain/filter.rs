//! Filter state and filter updates.
//!
//! [`FilterState`] is the user's current search/category/price/sort selection.
//! It changes only through [`update_filters`], which applies a [`FilterUpdate`]:
//! either a partial [`FilterPatch`] or a whole-state replacement. Keeping the
//! update kind explicit lets the intro panel controller tell an atomic reset
//! apart from fields being cleared one at a time.

use super::entry::{Category, PriceTier};
use super::error::ToolshelfError;
use std::str::FromStr;

/// Category selection: a single category or the `all` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Returns `true` when the filter narrows the result set.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Only(_))
    }

    /// Label shown in the filter bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Categories",
            Self::Only(category) => category.label(),
        }
    }

    /// Next option in filter-bar order, wrapping back to `All`.
    #[must_use]
    pub fn next(self) -> Self {
        let options = Self::options();
        let idx = options.iter().position(|o| *o == self).unwrap_or(0);
        options[(idx + 1) % options.len()]
    }

    /// Previous option in filter-bar order, wrapping to the last category.
    #[must_use]
    pub fn prev(self) -> Self {
        let options = Self::options();
        let idx = options.iter().position(|o| *o == self).unwrap_or(0);
        options[(idx + options.len() - 1) % options.len()]
    }

    fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(Category::ALL.into_iter().map(Self::Only))
            .collect()
    }
}

/// Price selection: a single tier or the `all` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceFilter {
    #[default]
    All,
    Only(PriceTier),
}

impl PriceFilter {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Only(_))
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Prices",
            Self::Only(tier) => tier.label(),
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Only(PriceTier::Free),
            Self::Only(PriceTier::Free) => Self::Only(PriceTier::Freemium),
            Self::Only(PriceTier::Freemium) => Self::Only(PriceTier::Paid),
            Self::Only(PriceTier::Paid) => Self::All,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::All => Self::Only(PriceTier::Paid),
            Self::Only(PriceTier::Paid) => Self::Only(PriceTier::Freemium),
            Self::Only(PriceTier::Freemium) => Self::Only(PriceTier::Free),
            Self::Only(PriceTier::Free) => Self::All,
        }
    }
}

/// Ordering applied to the visible entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Trending entries first, then by rating (descending).
    #[default]
    Trending,
    /// Rating, descending.
    TopRated,
    /// Date added, newest first.
    Latest,
    /// Name, ascending, locale-aware.
    Alphabetical,
}

impl SortOption {
    pub const ALL: [Self; 4] = [Self::Trending, Self::TopRated, Self::Latest, Self::Alphabetical];

    /// Identifier used in configuration (`topRated`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trending => "trending",
            Self::TopRated => "topRated",
            Self::Latest => "latest",
            Self::Alphabetical => "alphabetical",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trending => "Trending",
            Self::TopRated => "Top Rated",
            Self::Latest => "Latest Added",
            Self::Alphabetical => "A-Z",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for SortOption {
    type Err = ToolshelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == s.trim())
            .ok_or_else(|| ToolshelfError::Config(format!("unknown sort option: {s}")))
    }
}

/// The user's current search/category/price/sort selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub price: PriceFilter,
    /// Case-insensitive substring query; empty means no search.
    pub search: String,
    pub sort: SortOption,
}

impl FilterState {
    /// Returns `true` if search, category, or price narrows the results.
    ///
    /// Sort order is not a filter and is ignored here.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolshelf::domain::FilterState;
    ///
    /// let mut filters = FilterState::default();
    /// assert!(!filters.has_active_filter());
    ///
    /// filters.search = "gpt".to_string();
    /// assert!(filters.has_active_filter());
    /// ```
    #[must_use]
    pub fn has_active_filter(&self) -> bool {
        !self.search.is_empty() || self.category.is_active() || self.price.is_active()
    }
}

/// Partial update: every `Some` field overwrites the current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPatch {
    pub category: Option<CategoryFilter>,
    pub price: Option<PriceFilter>,
    pub search: Option<String>,
    pub sort: Option<SortOption>,
}

impl FilterPatch {
    /// Patch that only changes the search text.
    #[must_use]
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search: Some(query.into()),
            ..Self::default()
        }
    }
}

/// A change to the filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    /// Field-level merge, e.g. typing in the search box.
    Patch(FilterPatch),
    /// Whole-state replacement, e.g. a filter bar control emitting the full
    /// state with one field changed.
    Replace(FilterState),
    /// The "clear all" control: replacement with the default state.
    ResetAll,
}

impl FilterUpdate {
    /// Returns `true` for updates that replace the entire state atomically.
    #[must_use]
    pub const fn is_replacement(&self) -> bool {
        matches!(self, Self::Replace(_) | Self::ResetAll)
    }
}

/// Applies an update to the current filter state, returning the new state.
///
/// Pure: the current state is not modified.
///
/// # Examples
///
/// ```
/// use toolshelf::domain::{update_filters, FilterPatch, FilterState, FilterUpdate};
///
/// let current = FilterState::default();
/// let next = update_filters(&current, &FilterUpdate::Patch(FilterPatch::search("voice")));
/// assert_eq!(next.search, "voice");
///
/// let reset = update_filters(&next, &FilterUpdate::ResetAll);
/// assert_eq!(reset, FilterState::default());
/// ```
#[must_use]
pub fn update_filters(current: &FilterState, update: &FilterUpdate) -> FilterState {
    match update {
        FilterUpdate::Patch(patch) => FilterState {
            category: patch.category.unwrap_or(current.category),
            price: patch.price.unwrap_or(current.price),
            search: patch.search.clone().unwrap_or_else(|| current.search.clone()),
            sort: patch.sort.unwrap_or(current.sort),
        },
        FilterUpdate::Replace(next) => next.clone(),
        FilterUpdate::ResetAll => FilterState::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_neutral() {
        let filters = FilterState::default();
        assert_eq!(filters.category, CategoryFilter::All);
        assert_eq!(filters.price, PriceFilter::All);
        assert_eq!(filters.search, "");
        assert_eq!(filters.sort, SortOption::Trending);
        assert!(!filters.has_active_filter());
    }

    #[test]
    fn sort_alone_is_not_an_active_filter() {
        let filters = FilterState {
            sort: SortOption::Alphabetical,
            ..FilterState::default()
        };
        assert!(!filters.has_active_filter());
    }

    #[test]
    fn patch_keeps_untouched_fields() {
        let current = FilterState {
            category: CategoryFilter::Only(Category::AudioAi),
            price: PriceFilter::Only(PriceTier::Paid),
            search: "old".to_string(),
            sort: SortOption::Latest,
        };
        let next = update_filters(&current, &FilterUpdate::Patch(FilterPatch::search("new")));

        assert_eq!(next.search, "new");
        assert_eq!(next.category, current.category);
        assert_eq!(next.price, current.price);
        assert_eq!(next.sort, current.sort);
    }

    #[test]
    fn replace_discards_current_state() {
        let current = FilterState {
            search: "gpt".to_string(),
            ..FilterState::default()
        };
        let replacement = FilterState {
            sort: SortOption::TopRated,
            ..FilterState::default()
        };
        let next = update_filters(&current, &FilterUpdate::Replace(replacement.clone()));
        assert_eq!(next, replacement);
    }

    #[test]
    fn reset_all_restores_default_sort_too() {
        let current = FilterState {
            sort: SortOption::Alphabetical,
            search: "x".to_string(),
            ..FilterState::default()
        };
        assert_eq!(update_filters(&current, &FilterUpdate::ResetAll), FilterState::default());
    }

    #[test]
    fn only_replace_and_reset_are_replacements() {
        assert!(FilterUpdate::ResetAll.is_replacement());
        assert!(FilterUpdate::Replace(FilterState::default()).is_replacement());
        assert!(!FilterUpdate::Patch(FilterPatch::default()).is_replacement());
    }

    #[test]
    fn category_cycle_visits_every_option() {
        let mut current = CategoryFilter::All;
        let mut seen = vec![current];
        for _ in 0..Category::ALL.len() {
            current = current.next();
            seen.push(current);
        }
        assert_eq!(current, CategoryFilter::Only(Category::DataAnalysis));
        assert_eq!(current.next(), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.prev(), CategoryFilter::Only(Category::DataAnalysis));
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn price_cycle_wraps_both_ways() {
        assert_eq!(PriceFilter::All.next(), PriceFilter::Only(PriceTier::Free));
        assert_eq!(PriceFilter::Only(PriceTier::Paid).next(), PriceFilter::All);
        assert_eq!(PriceFilter::All.prev(), PriceFilter::Only(PriceTier::Paid));
        assert_eq!(PriceFilter::Only(PriceTier::Free).prev(), PriceFilter::All);
    }

    #[test]
    fn sort_option_parses_config_identifiers() {
        assert_eq!("topRated".parse::<SortOption>().unwrap(), SortOption::TopRated);
        assert_eq!(" latest ".parse::<SortOption>().unwrap(), SortOption::Latest);
        assert!("newest".parse::<SortOption>().is_err());
        assert_eq!(SortOption::Alphabetical.next(), SortOption::Trending);
        assert_eq!(SortOption::Trending.prev(), SortOption::Alphabetical);
    }

    #[test]
    fn labels_match_filter_bar() {
        assert_eq!(CategoryFilter::All.label(), "All Categories");
        assert_eq!(CategoryFilter::Only(Category::CodeGenerators).label(), "Code Generators");
        assert_eq!(PriceFilter::All.label(), "All Prices");
        assert_eq!(SortOption::Latest.label(), "Latest Added");
    }
}
