//! Search bar component renderer.
//!
//! Renders the search input box with a bordered frame and query text display.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box at the specified row.
///
/// Displays a 3-line bordered box containing the search query. While the
/// query has focus a block cursor follows the text; once focus moves to the
/// results the border is dimmed instead.
///
/// # Returns
///
/// The next available row position (row + 3, since search box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ Search: ... │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + 2);
    let border = Theme::fg(if search.is_typing {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    });
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let edge = |row: usize, left: char, right: char| {
        position_cursor(row, 1);
        print!("{margin}{border}{left}{}{right}{}", "─".repeat(inner_width), Theme::reset());
    };

    edge(row, '┌', '┐');

    let cursor = if search.is_typing { "█" } else { "" };
    let query = truncate(&format!(" Search: {}{cursor}", search.query), inner_width);
    let fill = inner_width.saturating_sub(display_width(&query));

    position_cursor(row + 1, 1);
    print!("{margin}{border}│{}{query}", Theme::fg(&theme.colors.text_normal));
    print!("{}{border}│{}", " ".repeat(fill), Theme::reset());

    edge(row + 2, '└', '┘');

    row + 3
}
