//! Path manipulation utilities for Zellij sandbox environment.

use std::path::PathBuf;

/// Returns the data directory holding the plugin's log file.
///
/// The directory is located at `/host/.local/share/zellij/toolshelf` in the
/// Zellij sandbox. `/host` points to the cwd of the last focused terminal, or
/// the folder where Zellij was started, which typically makes this
/// `~/.local/share/zellij/toolshelf` on the host.
///
/// # Examples
///
/// ```
/// use toolshelf::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/toolshelf");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("toolshelf")
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// Used for the `catalog_file` and `theme_file` options, which users write
/// relative to their home directory.
///
/// # Examples
///
/// ```
/// use toolshelf::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/tools.json"), "/host/tools.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/tools.json"), "/absolute/tools.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
