//! Intro panel visibility.
//!
//! The intro panel sits above the results while the user has not narrowed
//! anything down. Two rules drive it, evaluated after every filter update:
//!
//! 1. A whole-state replacement that lands on neutral filters shows the panel.
//! 2. Any active filter hides the panel.
//!
//! Rule 1 runs first. Field-level patches never show the panel, so deleting
//! the search text one character at a time leaves it hidden until the user
//! clears everything at once.

use crate::domain::{FilterState, FilterUpdate};

/// Visibility controller for the intro panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroPanel {
    show: bool,
}

impl Default for IntroPanel {
    fn default() -> Self {
        Self { show: true }
    }
}

impl IntroPanel {
    #[must_use]
    pub const fn is_visible(self) -> bool {
        self.show
    }

    /// Applies the visibility rules for `update`, given the state it produced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use toolshelf::app::IntroPanel;
    /// use toolshelf::domain::{update_filters, FilterPatch, FilterState, FilterUpdate};
    ///
    /// let mut intro = IntroPanel::default();
    /// let update = FilterUpdate::Patch(FilterPatch::search("gpt"));
    /// let filters = update_filters(&FilterState::default(), &update);
    /// intro.apply(&update, &filters);
    /// assert!(!intro.is_visible());
    ///
    /// let filters = update_filters(&filters, &FilterUpdate::ResetAll);
    /// intro.apply(&FilterUpdate::ResetAll, &filters);
    /// assert!(intro.is_visible());
    /// ```
    pub fn apply(&mut self, update: &FilterUpdate, result: &FilterState) {
        let was = self.show;

        if update.is_replacement() && !result.has_active_filter() {
            self.show = true;
        }
        if result.has_active_filter() {
            self.show = false;
        }

        if was != self.show {
            tracing::debug!(show = self.show, "intro panel visibility changed");
        }
    }
}
