//! Infrastructure layer for filesystem and environment interactions.
//!
//! The Zellij plugin sandbox mounts the host filesystem under `/host`; these
//! helpers translate user-facing paths from the plugin configuration into
//! sandbox paths and locate the plugin's data directory.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
