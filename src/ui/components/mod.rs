//! Composable UI component renderers.
//!
//! Each component prints one part of the interface at a given row and
//! returns the next free row, so layouts read as a top-to-bottom chain.
//!
//! # Components
//!
//! - [`header`]: Directory title and result count
//! - [`intro`]: Intro panel shown until the user narrows the list
//! - [`filters`]: Category, price and sort selections
//! - [`search`]: Search input box
//! - [`table`]: Two-line result rows with badges
//! - [`empty`]: Message in place of the results list
//! - [`detail`]: Full information for the selected entry
//! - [`footer`]: Keybinding hints
//!
//! # Layout Modes
//!
//! - [`render_browse_mode`]: Header + Intro + Filters + `SearchBar` + List + Footer
//! - [`render_detail_mode`]: Header + Detail + Footer

mod detail;
mod empty;
mod filters;
mod footer;
mod header;
mod intro;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailInfo, UIViewModel};

use detail::render_detail;
use empty::render_empty_state;
use filters::render_filter_bar;
use footer::render_footer;
use header::render_header;
use intro::render_intro;
use search::render_search_bar;
use table::render_table_rows;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the bottom border and footer, returning the first row the body
/// must not reach.
fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) -> usize {
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
    border_row
}

/// Renders the directory layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Title]
/// [Summary]
/// [Border]
/// [Intro, while visible]
/// [Filter bar]
/// [Border]
/// [Search Bar - 3 lines, in search mode]
/// [List rows or empty state]
/// [Border]
/// [Footer]
/// [blank line]
/// ```
///
/// The chrome rows match the accounting in
/// [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel),
/// which sizes `display_items` to fit the remaining space.
pub fn render_browse_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(intro) = &vm.intro {
        current_row = render_intro(current_row, intro, theme, cols);
    }
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        render_table_rows(current_row, &vm.display_items, theme, cols);
    }

    render_bottom(vm, theme, cols, rows);
}

/// Renders the detail overlay for the selected entry.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Title]
/// [Summary]
/// [Border]
/// [Detail, clipped]
/// [Border]
/// [Footer]
/// [blank line]
/// ```
pub fn render_detail_mode(
    vm: &UIViewModel,
    detail: &DetailInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let limit = render_bottom(vm, theme, cols, rows);
    render_detail(current_row, limit, detail, theme, cols);
}
