//! In-memory entry repository.

use super::json::{EmbeddedSource, JsonFileSource};
use super::source::CatalogSource;
use crate::domain::error::{Result, ToolshelfError};
use crate::domain::Entry;
use std::collections::HashMap;
use std::path::PathBuf;

/// Valid rating range; values outside it are accepted with a warning.
const RATING_RANGE: std::ops::RangeInclusive<f64> = 0.0..=5.0;

/// Immutable, ordered collection of catalog entries.
///
/// Built once at load time and never mutated afterwards. Entries keep the
/// order of the source document, which is also the tie-break order of the
/// stable sort in [`crate::engine`]. Lookups by id go through a side index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Validates `entries` and builds the repository.
    ///
    /// # Errors
    ///
    /// Returns [`ToolshelfError::Catalog`] if any id is empty or appears more
    /// than once. Nothing is kept in that case.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(ToolshelfError::Catalog(format!(
                    "entry #{} ({:?}) has an empty id",
                    position + 1,
                    entry.name
                )));
            }
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(ToolshelfError::Catalog(format!(
                    "duplicate tool id: {}",
                    entry.id
                )));
            }
            if !RATING_RANGE.contains(&entry.rating) {
                tracing::warn!(
                    id = %entry.id,
                    rating = entry.rating,
                    "rating outside expected range 0-5"
                );
            }
        }

        Ok(Self { entries, index })
    }

    /// Reads every record from `source` and validates the collection.
    ///
    /// # Errors
    ///
    /// Propagates read and parse errors from the source, and validation
    /// errors from [`Catalog::from_entries`].
    pub fn load(source: &dyn CatalogSource) -> Result<Self> {
        let _span = tracing::debug_span!("catalog_load", source = %source.describe()).entered();

        let catalog = Self::from_entries(source.load_entries()?)?;
        tracing::debug!(entry_count = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Loads the catalog compiled into the plugin.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded document itself is invalid.
    pub fn builtin() -> Result<Self> {
        Self::load(&EmbeddedSource)
    }

    /// Loads a catalog from a JSON file in either supported shape.
    ///
    /// # Errors
    ///
    /// Returns [`ToolshelfError::Io`] if the file cannot be read, or
    /// [`ToolshelfError::Catalog`] if it does not validate.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        Self::load(&JsonFileSource::new(path.into()))
    }

    /// All entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
