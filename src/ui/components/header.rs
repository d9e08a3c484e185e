//! Header component renderer.
//!
//! Renders the directory title and the result count line beneath it, both
//! centered, with theme-aware colors and optional title background.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at the specified row.
///
/// # Returns
///
/// The next available row position (row + 2)
///
/// # Layout
///
/// ```text
/// [padding]  AI Tools Directory  [padding]
/// [padding]  Showing 16 tools    [padding]
/// ```
///
/// Padding is split evenly on both sides. If the terminal width cannot evenly
/// divide, right padding is slightly larger.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print_centered(&header.title, cols);
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&header.summary, cols);
    print!("{}", Theme::reset());

    row + 2
}

/// Prints `text` centered in a line of `cols` cells.
pub(super) fn print_centered(text: &str, cols: usize) {
    let text = truncate(text, cols);
    let text_len = display_width(&text);
    let padding = cols.saturating_sub(text_len) / 2;

    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
}
