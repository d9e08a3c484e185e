//! File-based logging for the plugin.
//!
//! The plugin runs inside Zellij's WASM sandbox with no terminal of its own,
//! so `tracing` output goes to a rotating log file:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → toolshelf.log
//! ```
//!
//! # Configuration
//!
//! The filter directive comes from the `trace_level` plugin option and
//! defaults to `"info"`.
//!
//! # Usage
//!
//! ```rust
//! use toolshelf::observability::init_tracing;
//! use toolshelf::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
