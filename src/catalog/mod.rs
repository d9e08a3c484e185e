//! Catalog layer: loading and holding the entry collection.
//!
//! The catalog is read once, synchronously, and then treated as immutable for
//! the rest of the session. Records come from a [`CatalogSource`]: the JSON
//! document compiled into the plugin, or a JSON file on the host.
//!
//! # Modules
//!
//! - `source`: Source trait abstraction
//! - `json`: JSON document parsing plus the file and embedded sources
//! - `repository`: The validated, indexed [`Catalog`]

pub mod json;
pub mod repository;
pub mod source;

pub use json::{parse_document, EmbeddedSource, JsonFileSource};
pub use repository::Catalog;
pub use source::CatalogSource;
