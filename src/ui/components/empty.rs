//! Empty state component renderer.
//!
//! Shown in place of the results list when the filters match nothing, while
//! the catalog waits on permissions, or after it failed to load.

use super::header::print_centered;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Blank rows between the top of the list area and the message.
const TOP_GAP: usize = 2;

/// Renders the empty state message inside the list area starting at `row`.
///
/// # Layout
///
/// ```text
/// [2 blank lines]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// The message uses `error_fg` for load failures and `empty_state_fg`
/// otherwise. The subtitle is dimmed.
///
/// # Returns
///
/// The next available row position
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let message_row = row + TOP_GAP;
    let color = if empty.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.empty_state_fg
    };

    position_cursor(message_row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(color));
    print_centered(&empty.message, cols);
    print!("{}", Theme::reset());

    position_cursor(message_row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&empty.subtitle, cols);
    print!("{}", Theme::reset());

    message_row + 2
}
