//! Domain layer for the Toolshelf plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or infrastructure concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entry`]: Catalog entry model, categories and price tiers
//! - [`filter`]: Filter state, sort options and filter updates
//!
//! # Examples
//!
//! ```
//! use toolshelf::domain::{update_filters, FilterPatch, FilterState, FilterUpdate};
//!
//! let filters = update_filters(
//!     &FilterState::default(),
//!     &FilterUpdate::Patch(FilterPatch::search("image")),
//! );
//! assert!(filters.has_active_filter());
//! ```

pub mod entry;
pub mod error;
pub mod filter;

pub use entry::{Category, Entry, PriceTier};
pub use error::{Result, ToolshelfError};
pub use filter::{
    update_filters, CategoryFilter, FilterPatch, FilterState, FilterUpdate, PriceFilter,
    SortOption,
};
