//! Intro panel renderer.
//!
//! Shown above the filter bar until the user starts narrowing the list.

use crate::ui::helpers::{fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::IntroInfo;

const INDENT: usize = 2;

/// Renders the intro panel at `row`.
///
/// # Returns
///
/// The next available row position (row + [`IntroInfo::height`])
///
/// # Layout
///
/// ```text
///   Discover the Future of AI
///   tagline, wrapped
///   ...
///   ◆ Smart Discovery  Instantly find and compare ...
///   ◆ Trusted Reviews  ...
///   ◆ Global Collection  ...
/// [blank]
/// ```
pub fn render_intro(row: usize, intro: &IntroInfo, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(INDENT * 2);
    let indent = " ".repeat(INDENT);
    let mut current_row = row;

    position_cursor(current_row, 1);
    print!("{indent}{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
    print!("{}", fit(&intro.title, width));
    print!("{}", Theme::reset());
    current_row += 1;

    for line in &intro.tagline_lines {
        position_cursor(current_row, 1);
        print!("{indent}{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", fit(line, width));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    for (label, text) in &intro.highlights {
        position_cursor(current_row, 1);
        print!("{indent}{}◆ ", Theme::fg(&theme.colors.accent));
        print!("{}{label}{}", Theme::bold(), Theme::reset());
        let rest = width.saturating_sub(label.chars().count() + 4);
        print!("  {}", Theme::fg(&theme.colors.text_dim));
        print!("{}", fit(&truncate(text, rest), rest));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    position_cursor(current_row, 1);
    print!("{}", " ".repeat(cols));
    current_row + 1
}
