//! JSON catalog sources.
//!
//! Catalog files come in two shapes, both using camelCase field names:
//!
//! ```json
//! [ { "id": "chatgpt", "name": "ChatGPT", ... } ]
//! ```
//!
//! ```json
//! { "version": 1, "tools": [ { "id": "chatgpt", ... } ] }
//! ```
//!
//! Unknown fields are ignored. Any record that fails to deserialize rejects
//! the whole document.

use super::source::CatalogSource;
use crate::domain::error::{Result, ToolshelfError};
use crate::domain::Entry;
use serde::Deserialize;
use std::path::PathBuf;

/// Catalog compiled into the plugin binary.
const BUILTIN_CATALOG: &str = include_str!("../../catalog/tools.json");

/// Versioned catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    /// Format version; only `1` exists.
    version: u32,
    tools: Vec<Entry>,
}

/// Parses a catalog document in either supported shape.
///
/// `origin` names the source in error messages.
///
/// # Errors
///
/// Returns [`ToolshelfError::Catalog`] on malformed JSON, missing fields,
/// unknown enum values, bad dates, or an unsupported `version`.
pub fn parse_document(json: &str, origin: &str) -> Result<Vec<Entry>> {
    let is_list = json.trim_start().starts_with('[');

    let entries = if is_list {
        serde_json::from_str::<Vec<Entry>>(json)
            .map_err(|e| ToolshelfError::Catalog(format!("{origin}: {e}")))?
    } else {
        let document: CatalogDocument = serde_json::from_str(json)
            .map_err(|e| ToolshelfError::Catalog(format!("{origin}: {e}")))?;
        if document.version != 1 {
            return Err(ToolshelfError::Catalog(format!(
                "{origin}: unsupported catalog version {}",
                document.version
            )));
        }
        document.tools
    };

    tracing::debug!(origin = %origin, entry_count = entries.len(), is_list, "parsed catalog document");
    Ok(entries)
}

/// Catalog stored in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CatalogSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load_entries(&self) -> Result<Vec<Entry>> {
        let _span = tracing::debug_span!("json_file_load", path = ?self.path).entered();

        let contents = std::fs::read_to_string(&self.path)?;
        tracing::debug!(bytes = contents.len(), "read catalog file");

        parse_document(&contents, &self.describe())
    }
}

/// The built-in catalog shipped with the plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl CatalogSource for EmbeddedSource {
    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }

    fn load_entries(&self) -> Result<Vec<Entry>> {
        parse_document(BUILTIN_CATALOG, &self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use std::collections::HashSet;

    const ONE_RECORD: &str = r#"{
        "id": "whisper", "name": "Whisper", "description": "Speech to text",
        "category": "audio-ai", "price": "free", "rating": 4.6, "reviewCount": 900,
        "imageUrl": "", "websiteUrl": "https://openai.com/research/whisper",
        "features": ["Transcription"], "pros": [], "cons": [],
        "pricingDetails": "Open source", "dateAdded": "2023-09-01",
        "trending": false, "topRated": true, "sponsored": false
    }"#;

    #[test]
    fn parses_bare_list() {
        let json = format!("[{ONE_RECORD}]");
        let entries = parse_document(&json, "test").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "whisper");
    }

    #[test]
    fn parses_versioned_document() {
        let json = format!(r#"{{ "version": 1, "tools": [{ONE_RECORD}] }}"#);
        let entries = parse_document(&json, "test").unwrap();
        assert_eq!(entries[0].category, Category::AudioAi);
    }

    #[test]
    fn rejects_unknown_version() {
        let json = format!(r#"{{ "version": 7, "tools": [{ONE_RECORD}] }}"#);
        let err = parse_document(&json, "test").unwrap_err();
        assert!(err.to_string().contains("unsupported catalog version 7"));
    }

    #[test]
    fn one_bad_record_rejects_the_document() {
        let bad = ONE_RECORD.replace(r#""rating": 4.6,"#, "");
        let json = format!("[{ONE_RECORD}, {bad}]");
        let err = parse_document(&json, "tools.json").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Catalog error: tools.json:"));
        assert!(message.contains("rating"));
    }

    #[test]
    fn builtin_catalog_covers_every_category() {
        let entries = EmbeddedSource.load_entries().unwrap();
        let categories: HashSet<Category> = entries.iter().map(|e| e.category).collect();
        for category in Category::ALL {
            assert!(categories.contains(&category), "missing {category:?}");
        }
    }
}
