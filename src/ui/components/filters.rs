//! Filter bar renderer.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Renders the category, price and sort selections on one line.
///
/// The `x: clear all` hint only appears while some filter is active.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_filter_bar(row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    let fields = [
        ("Category", bar.category.as_str()),
        ("Price", bar.price.as_str()),
        ("Sort", bar.sort.as_str()),
    ];

    position_cursor(row, 1);
    let mut used = 0;
    for (label, value) in fields {
        let segment = format!(" {label}: {value} ");
        let segment = truncate(&segment, cols.saturating_sub(used));
        let Some(split) = segment.find(':') else {
            print!("{}{segment}", Theme::fg(&theme.colors.text_dim));
            used += display_width(&segment);
            break;
        };
        print!("{}{}", Theme::fg(&theme.colors.text_dim), &segment[..=split]);
        print!("{}{}", Theme::fg(&theme.colors.accent), &segment[split + 1..]);
        print!("{}", Theme::reset());
        used += display_width(&segment);
    }

    if bar.has_active_filter {
        let hint = "  x: clear all";
        if used + hint.len() <= cols {
            print!("{}{hint}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
            used += hint.len();
        }
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
