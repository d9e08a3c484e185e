//! Catalog source abstraction.
//!
//! This module defines the [`CatalogSource`] trait that abstracts over where
//! catalog records come from. The repository only needs one operation: read
//! every record, once, at load time.

use crate::domain::error::Result;
use crate::domain::Entry;

/// A place catalog records can be read from.
///
/// # Implementations
///
/// - [`JsonFileSource`](super::JsonFileSource): JSON file on the host filesystem
/// - [`EmbeddedSource`](super::EmbeddedSource): catalog compiled into the plugin
///
/// # Examples
///
/// ```
/// use toolshelf::catalog::{CatalogSource, EmbeddedSource};
///
/// let entries = EmbeddedSource.load_entries()?;
/// assert!(!entries.is_empty());
/// # Ok::<(), toolshelf::ToolshelfError>(())
/// ```
pub trait CatalogSource {
    /// Short description used in traces and error messages.
    fn describe(&self) -> String;

    /// Reads and parses every record.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or any record is
    /// malformed. Implementations never return a partial list.
    fn load_entries(&self) -> Result<Vec<Entry>>;
}
