//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the plugin data directory.
pub const LOG_FILE_NAME: &str = "toolshelf.log";

/// Initializes the tracing subscriber with a rotating file log.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters spans and events by the configured trace level
/// 2. Formats them as plain text lines (no ANSI colors)
/// 3. Appends them to a size-rotated file with backups
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// # File Location
///
/// `/host/.local/share/zellij/toolshelf/toolshelf.log` in the sandbox, which
/// maps to `~/.local/share/zellij/toolshelf/` when Zellij runs from the home
/// directory.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently gives up if it cannot (logging is optional)
/// - Idempotent: only the first call installs a subscriber
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = FileWriter::new(data_dir.join(LOG_FILE_NAME));
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer)
        .try_init();
}
