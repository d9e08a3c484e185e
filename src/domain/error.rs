//! Error types for the Toolshelf plugin.
//!
//! This module defines the centralized error type [`ToolshelfError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Filtering and sorting never produce errors; an empty result set is a valid
//! outcome. Errors only arise while loading the catalog, themes, or configuration.

use thiserror::Error;

/// The main error type for Toolshelf plugin operations.
///
/// # Examples
///
/// ```
/// use toolshelf::domain::ToolshelfError;
///
/// fn check_catalog() -> Result<(), ToolshelfError> {
///     Err(ToolshelfError::Catalog("duplicate tool id: chatgpt".to_string()))
/// }
///
/// assert!(check_catalog().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ToolshelfError {
    /// The catalog could not be parsed or failed validation.
    ///
    /// Raised for malformed JSON, missing fields, unknown category or price
    /// values, unparseable dates, and duplicate identifiers. The whole
    /// collection is rejected; partially loaded catalogs are never used.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Toolshelf operations.
///
/// # Examples
///
/// ```
/// use toolshelf::domain::Result;
///
/// fn load_nothing() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ToolshelfError>;
