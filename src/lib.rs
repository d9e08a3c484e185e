//! Toolshelf: A Zellij plugin for browsing a catalog of AI tools.
//!
//! Toolshelf shows a read-only catalog of AI tools in a floating pane and
//! provides:
//! - Case-insensitive search across names, descriptions and features
//! - Category and price filters with four sort orders
//! - A detail overlay with features, pricing, pros and cons
//! - An intro panel that steps aside once the user starts narrowing the list
//! - Built-in and file-based catalogs and themes

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Selection and intro panel rules                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Engine        │   │ Catalog       │
//! │ (ui/)         │   │ (engine/)     │   │ (catalog/)    │
//! │ - Rendering   │   │ - Filtering   │   │ - JSON source │
//! │ - Theming     │   │ - Sorting     │   │ - Validation  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │  ← Core types
//! │  - Entry, filter state, errors                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use toolshelf::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::SearchMode)?;
//! handle_event(&mut state, &Event::Char('c'))?;
//! assert_eq!(state.filters.search, "c");
//! # Ok::<(), toolshelf::ToolshelfError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod engine;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{Result, SortOption, ToolshelfError};
pub use ui::Theme;

use catalog::Catalog;
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/toolshelf.wasm" {
///     catalog_file "~/.config/toolshelf/tools.json"
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
///     sort "topRated"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Catalog JSON to load instead of the built-in one.
    ///
    /// `~` expands to the sandbox host mount. Reading it needs the
    /// `FullHdAccess` permission, so the plugin starts in a loading state.
    pub catalog_file: Option<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Initial sort order.
    pub sort: SortOption,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Empty values are treated as absent. An unknown `sort` falls back to
    /// trending.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use toolshelf::{Config, SortOption};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("sort".to_string(), "latest".to_string());
    /// map.insert("catalog_file".to_string(), "~/tools.json".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.sort, SortOption::Latest);
    /// assert_eq!(config.catalog_file.as_deref(), Some("/host/tools.json"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let sort = get("sort").map_or_else(SortOption::default, |raw| {
            raw.parse::<SortOption>().unwrap_or_else(|e| {
                tracing::debug!(sort = %raw, error = %e, "unknown sort option, using trending");
                SortOption::default()
            })
        });

        Self {
            catalog_file: get("catalog_file").map(|p| infrastructure::expand_tilde(&p)),
            theme_name: get("theme"),
            theme_file: get("theme_file").map(|p| infrastructure::expand_tilde(&p)),
            trace_level: get("trace_level"),
            sort,
        }
    }
}

/// Resolves the theme: `theme_file`, then `theme`, then the default.
///
/// Failures fall back to the default theme with a debug trace.
fn resolve_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        return Theme::from_file(theme_file).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with the resolved theme and initial sort. The
/// built-in catalog is loaded right away; a configured `catalog_file` leaves
/// the state loading until the plugin shim has permission to read it and
/// delivers [`Event::CatalogLoaded`].
///
/// # Example
///
/// ```rust
/// use toolshelf::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(!state.visible.is_empty());
/// assert!(state.intro.is_visible());
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing toolshelf plugin");

    let theme = resolve_theme(config);

    let state = match &config.catalog_file {
        Some(path) => AppState::loading(path.clone(), theme),
        None => match Catalog::builtin() {
            Ok(catalog) => AppState::new(catalog, theme),
            Err(e) => {
                tracing::error!(error = %e, "built-in catalog failed to load");
                AppState::failed(e.to_string(), theme)
            }
        },
    };

    state.with_sort(config.sort)
}
