//! Results list renderer.
//!
//! Each entry takes two lines: the name column with badges, then a dimmed
//! feature preview with the date it was added. The cursor row is drawn with
//! the selection colors across both lines.

use crate::app::state::NAME_COLUMN_WIDTH;
use crate::ui::helpers::{self, display_width, fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const CURSOR_MARKER: &str = "▸ ";
const NO_MARKER: &str = "  ";

/// Renders all rows starting at `row`.
///
/// # Returns
///
/// The next available row position (row + 2 per item)
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Sets the colors for one span of a row.
///
/// Selected rows ignore per-span colors so the selection background stays
/// uniform.
fn paint(color: &str, theme: &Theme, is_selected: bool) {
    if is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(color));
    }
}

/// Renders a single entry.
///
/// # Layout
///
/// ```text
/// ▸ NAME (column)              Category  Price  ★ 4.8 (1,234 reviews)  Trending  Top Rated
///                              feature · feature · feature +2 more       Added Jan 5, 2024
/// ```
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Search match highlights in the name (unless selected)
/// 3. Per-badge theme colors
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let selected = item.is_selected;

    position_cursor(row, 1);
    paint(&theme.colors.accent, theme, selected);
    print!("{}", if selected { CURSOR_MARKER } else { NO_MARKER });

    paint(&theme.colors.text_normal, theme, selected);
    print!("{}", Theme::bold());
    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, selected);
    print!("{}", Theme::reset());
    paint(&theme.colors.text_normal, theme, selected);
    let name_width = display_width(CURSOR_MARKER) + display_width(&item.name);
    print!("{}", " ".repeat(NAME_COLUMN_WIDTH.saturating_sub(name_width)));

    let mut badges: Vec<(String, &str)> = vec![
        (item.category.clone(), theme.colors.text_normal.as_str()),
        (item.price.label().to_string(), theme.colors.price(item.price)),
        (item.rating.clone(), theme.colors.rating_fg.as_str()),
    ];
    if item.is_trending {
        badges.push(("Trending".to_string(), theme.colors.trending_fg.as_str()));
    }
    if item.is_top_rated {
        badges.push(("Top Rated".to_string(), theme.colors.top_rated_fg.as_str()));
    }

    let mut used = NAME_COLUMN_WIDTH;
    for (text, color) in badges {
        let room = cols.saturating_sub(used);
        if room <= 2 {
            break;
        }
        let text = truncate(&text, room - 2);
        paint(color, theme, selected);
        print!("{text}  ");
        used += display_width(&text) + 2;
    }
    paint(&theme.colors.text_normal, theme, selected);
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    paint(&theme.colors.text_dim, theme, selected);
    print!("{}", " ".repeat(NAME_COLUMN_WIDTH.min(cols)));
    let rest = cols.saturating_sub(NAME_COLUMN_WIDTH);
    let added_width = display_width(&item.added);
    if rest > added_width + 2 {
        print!("{}", fit(&item.features, rest - added_width - 2));
        print!("  {}", item.added);
    } else {
        print!("{}", fit(&item.features, rest));
    }
    print!("{}", Theme::reset());

    row + 2
}
