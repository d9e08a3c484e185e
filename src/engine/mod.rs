//! Filter/sort engine.
//!
//! [`compute_visible`] maps the full catalog and the current [`FilterState`] to
//! the ordered list of entries to display. It is a pure function: the catalog
//! is borrowed immutably and a fresh ordering is produced on every call, so
//! callers simply recompute after any change to the filters.
//!
//! # Pipeline
//!
//! ```text
//! entries → search → category → price → sort → visible
//! ```
//!
//! Each filtering stage is the identity when its filter is neutral (empty
//! search, `All` category, `All` price). The sort stage always runs and is
//! stable, so entries that compare equal keep catalog order.

pub mod collate;

use crate::domain::{CategoryFilter, Entry, FilterState, PriceFilter, SortOption};
use std::cmp::Ordering;

/// Returns the entries matching `filters`, in display order.
///
/// # Examples
///
/// ```
/// use toolshelf::catalog::Catalog;
/// use toolshelf::domain::FilterState;
/// use toolshelf::engine::compute_visible;
///
/// let catalog = Catalog::builtin()?;
/// let visible = compute_visible(catalog.entries(), &FilterState::default());
/// assert_eq!(visible.len(), catalog.len());
/// # Ok::<(), toolshelf::ToolshelfError>(())
/// ```
#[must_use]
pub fn compute_visible<'a>(entries: &'a [Entry], filters: &FilterState) -> Vec<&'a Entry> {
    let _span = tracing::debug_span!(
        "compute_visible",
        total_entries = entries.len(),
        query_len = filters.search.len(),
        category = ?filters.category,
        price = ?filters.price,
        sort = ?filters.sort
    )
    .entered();

    let needle = filters.search.to_lowercase();

    let mut visible: Vec<&Entry> = entries
        .iter()
        .filter(|entry| matches_search(entry, &needle))
        .filter(|entry| matches_category(entry, filters.category))
        .filter(|entry| matches_price(entry, filters.price))
        .collect();

    visible.sort_by(|a, b| compare(a, b, filters.sort));

    tracing::debug!(visible_count = visible.len(), "visible entries computed");
    visible
}

/// Search stage: substring match on name, description, or any feature.
///
/// `needle` must already be lowercased. An empty needle matches everything.
#[must_use]
pub fn matches_search(entry: &Entry, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    entry.name.to_lowercase().contains(needle)
        || entry.description.to_lowercase().contains(needle)
        || entry
            .features
            .iter()
            .any(|feature| feature.to_lowercase().contains(needle))
}

#[must_use]
pub fn matches_category(entry: &Entry, filter: CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => entry.category == category,
    }
}

#[must_use]
pub fn matches_price(entry: &Entry, filter: PriceFilter) -> bool {
    match filter {
        PriceFilter::All => true,
        PriceFilter::Only(tier) => entry.price == tier,
    }
}

/// Comparator for the sort stage.
///
/// Ratings use a total order so out-of-range or odd values can never make the
/// sort panic or behave inconsistently.
#[must_use]
pub fn compare(a: &Entry, b: &Entry, sort: SortOption) -> Ordering {
    match sort {
        SortOption::Trending => b
            .trending
            .cmp(&a.trending)
            .then_with(|| b.rating.total_cmp(&a.rating)),
        SortOption::TopRated => b.rating.total_cmp(&a.rating),
        SortOption::Latest => b.date_added.cmp(&a.date_added),
        SortOption::Alphabetical => collate::compare(&a.name, &b.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::fixtures::entry;
    use crate::domain::{Category, PriceTier};
    use chrono::{TimeZone, Utc};

    fn names<'a>(visible: &[&'a Entry]) -> Vec<&'a str> {
        visible.iter().map(|e| e.name.as_str()).collect()
    }

    fn sorted_by(entries: &[Entry], sort: SortOption) -> Vec<&str> {
        let filters = FilterState {
            sort,
            ..FilterState::default()
        };
        names(&compute_visible(entries, &filters))
    }

    fn mixed_catalog() -> Vec<Entry> {
        let mut chat = entry("chat", "ChatBot X");
        chat.features = vec!["voice".to_string(), "memory".to_string()];
        chat.rating = 4.5;
        chat.trending = true;

        let mut paint = entry("paint", "PaintBrush");
        paint.category = Category::ImageAi;
        paint.price = PriceTier::Paid;
        paint.description = "Turns prompts into art".to_string();
        paint.rating = 4.8;

        let mut code = entry("code", "CodePilot");
        code.category = Category::CodeGenerators;
        code.price = PriceTier::Freemium;
        code.rating = 4.1;
        code.trending = true;

        let mut songs = entry("songs", "SongSmith");
        songs.category = Category::AudioAi;
        songs.price = PriceTier::Paid;
        songs.features = vec!["Voice cloning".to_string()];
        songs.rating = 3.9;

        vec![chat, paint, code, songs]
    }

    #[test]
    fn neutral_filters_keep_everything() {
        let catalog = mixed_catalog();
        for sort in SortOption::ALL {
            let filters = FilterState {
                sort,
                ..FilterState::default()
            };
            assert_eq!(compute_visible(&catalog, &filters).len(), catalog.len());
        }
    }

    #[test]
    fn search_matches_features_case_insensitively() {
        let mut only = entry("chat", "ChatBot X");
        only.features = vec!["voice".to_string()];
        let catalog = vec![only];

        for query in ["voice", "VOICE", "VoIcE"] {
            let filters = FilterState {
                search: query.to_string(),
                ..FilterState::default()
            };
            assert_eq!(names(&compute_visible(&catalog, &filters)), vec!["ChatBot X"]);
        }
    }

    #[test]
    fn search_checks_name_description_and_features() {
        let catalog = mixed_catalog();
        let search = |q: &str| {
            let filters = FilterState {
                search: q.to_string(),
                ..FilterState::default()
            };
            let mut found = names(&compute_visible(&catalog, &filters));
            found.sort_unstable();
            found
        };

        assert_eq!(search("pilot"), vec!["CodePilot"]);
        assert_eq!(search("PROMPTS"), vec!["PaintBrush"]);
        assert_eq!(search("voice"), vec!["ChatBot X", "SongSmith"]);
        assert!(search("nothing like this").is_empty());
    }

    #[test]
    fn search_is_substring_not_fuzzy() {
        let catalog = mixed_catalog();
        let filters = FilterState {
            search: "cdplt".to_string(),
            ..FilterState::default()
        };
        assert!(compute_visible(&catalog, &filters).is_empty());
    }

    #[test]
    fn every_visible_entry_satisfies_active_predicates() {
        let catalog = mixed_catalog();
        let filters = FilterState {
            category: CategoryFilter::Only(Category::AudioAi),
            price: PriceFilter::Only(PriceTier::Paid),
            search: "voice".to_string(),
            sort: SortOption::TopRated,
        };
        let visible = compute_visible(&catalog, &filters);

        assert_eq!(names(&visible), vec!["SongSmith"]);
        for e in visible {
            assert!(matches_search(e, "voice"));
            assert_eq!(e.category, Category::AudioAi);
            assert_eq!(e.price, PriceTier::Paid);
        }
    }

    #[test]
    fn category_without_entries_yields_empty_result() {
        let catalog = mixed_catalog();
        let filters = FilterState {
            category: CategoryFilter::Only(Category::VideoAi),
            ..FilterState::default()
        };
        assert!(compute_visible(&catalog, &filters).is_empty());
    }

    #[test]
    fn price_stage_filters_exact_tier() {
        let catalog = mixed_catalog();
        let filters = FilterState {
            price: PriceFilter::Only(PriceTier::Paid),
            sort: SortOption::Alphabetical,
            ..FilterState::default()
        };
        assert_eq!(
            names(&compute_visible(&catalog, &filters)),
            vec!["PaintBrush", "SongSmith"]
        );
    }

    #[test]
    fn trending_groups_before_rating() {
        let mut a = entry("a", "A");
        a.trending = true;
        a.rating = 3.0;
        let mut b = entry("b", "B");
        b.rating = 5.0;

        assert_eq!(sorted_by(&[b, a], SortOption::Trending), vec!["A", "B"]);
    }

    #[test]
    fn trending_sorts_by_rating_within_groups() {
        assert_eq!(
            sorted_by(&mixed_catalog(), SortOption::Trending),
            vec!["ChatBot X", "CodePilot", "PaintBrush", "SongSmith"]
        );
    }

    #[test]
    fn top_rated_is_descending() {
        let ratings = [2.0, 5.0, 3.0];
        let catalog: Vec<Entry> = ratings
            .iter()
            .enumerate()
            .map(|(i, rating)| {
                let mut e = entry(&i.to_string(), &format!("r{rating}"));
                e.rating = *rating;
                e
            })
            .collect();

        let filters = FilterState {
            sort: SortOption::TopRated,
            ..FilterState::default()
        };
        let got: Vec<f64> = compute_visible(&catalog, &filters)
            .iter()
            .map(|e| e.rating)
            .collect();
        assert_eq!(got, vec![5.0, 3.0, 2.0]);
    }

    #[test]
    fn latest_puts_newest_first() {
        let mut old = entry("old", "Old");
        old.date_added = Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap();
        let mut new = entry("new", "New");
        new.date_added = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut mid = entry("mid", "Mid");
        mid.date_added = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(
            sorted_by(&[old, new, mid], SortOption::Latest),
            vec!["New", "Mid", "Old"]
        );
    }

    #[test]
    fn alphabetical_is_locale_aware() {
        let catalog = vec![
            entry("b", "Banana"),
            entry("a", "apple"),
            entry("c", "Cherry"),
        ];
        assert_eq!(
            sorted_by(&catalog, SortOption::Alphabetical),
            vec!["apple", "Banana", "Cherry"]
        );
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = vec![entry("1", "Same"), entry("2", "Same"), entry("3", "Same")];
        let filters = FilterState {
            sort: SortOption::Alphabetical,
            ..FilterState::default()
        };
        let ids: Vec<&str> = compute_visible(&catalog, &filters)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);

        let filters = FilterState {
            sort: SortOption::TopRated,
            ..FilterState::default()
        };
        let ids: Vec<&str> = compute_visible(&catalog, &filters)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn recomputation_is_deterministic() {
        let catalog = mixed_catalog();
        let filters = FilterState {
            search: "o".to_string(),
            sort: SortOption::TopRated,
            ..FilterState::default()
        };
        let first = compute_visible(&catalog, &filters);
        let second = compute_visible(&catalog, &filters);
        assert_eq!(first, second);
    }

    #[test]
    fn input_is_left_untouched() {
        let catalog = mixed_catalog();
        let before = catalog.clone();
        let filters = FilterState {
            sort: SortOption::Alphabetical,
            ..FilterState::default()
        };
        let _ = compute_visible(&catalog, &filters);
        assert_eq!(catalog, before);
    }
}
