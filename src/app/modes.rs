//! Input mode state types for the application.
//!
//! These types decide which keybindings are active and how keystrokes are
//! interpreted. The detail overlay is not a mode of its own: it is open
//! whenever the [`Selection`](super::Selection) is, and takes precedence over
//! the input mode while it is.
//!
//! # State Machine
//!
//! - **Browse**: Navigation and filter-bar commands
//! - **Search**: Active search with typing or result navigation focus
//!
//! # Example
//!
//! ```rust
//! use toolshelf::app::modes::{InputMode, SearchFocus};
//!
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! assert!(input_mode.is_typing());
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is moving through the filtered results.
    ///
    /// Accepts j/k for movement, enter to open details, and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Determines the displayed footer text and whether the search bar is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and filter-bar mode.
    #[default]
    Browse,

    /// Active search mode with focus state.
    Search(SearchFocus),
}

impl InputMode {
    /// Returns `true` while keystrokes go into the search query.
    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Search(SearchFocus::Typing))
    }
}
