//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! plugin shim executes them in order. Everything that touches the host
//! (hiding the pane, launching a browser) goes through here so the handler
//! itself stays free of Zellij calls.
//!
//! # Example
//!
//! ```rust
//! use toolshelf::app::Action;
//!
//! let actions = vec![Action::OpenWebsite {
//!     url: "https://claude.ai".to_string(),
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,

    /// Opens a tool's website with the host's URL handler.
    OpenWebsite {
        /// Website URL, passed through unvalidated.
        url: String,
    },
}
