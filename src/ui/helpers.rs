//! Shared rendering utilities and helpers.
//!
//! Low-level pieces used across components: cursor positioning, search-match
//! highlighting, and width-aware text fitting. Widths are measured in terminal
//! cells with `unicode-width`, so names with accents or wide characters line
//! up the same as plain ASCII.
//!
//! # Example
//!
//! ```rust
//! use toolshelf::ui::helpers::{match_ranges, truncate};
//!
//! assert_eq!(match_ranges("Midjourney", "JOUR"), vec![(3, 7)]);
//! assert_eq!(truncate("Stable Diffusion", 10), "Stable ...");
//! ```

use crate::ui::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Display width of `text` in terminal cells.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Shortens `text` to at most `max_width` cells, ending in `...` when cut.
///
/// Never splits a character.
#[must_use]
pub fn truncate(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width <= ELLIPSIS.len() {
        return ".".repeat(max_width);
    }

    let budget = max_width - ELLIPSIS.len();
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}

/// Right-pads `text` with spaces to exactly `width` cells, truncating first.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let mut out = truncate(text, width);
    let pad = width.saturating_sub(display_width(&out));
    out.push_str(&" ".repeat(pad));
    out
}

/// Greedy word wrap to `width` cells.
///
/// Words longer than a whole line are truncated. Always returns at least one
/// line.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = truncate(word, width);
        let needed = if current.is_empty() {
            display_width(&word)
        } else {
            display_width(&current) + 1 + display_width(&word)
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Character ranges of `text` that match `query`, ignoring case.
///
/// Matches are found left to right and never overlap. Ranges are
/// `(start, end)` character indices with exclusive end. An empty query
/// matches nothing.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return vec![];
    }

    // Lowercasing can expand a character, so keep the source index per folded char.
    let folded: Vec<(char, usize)> = text
        .chars()
        .enumerate()
        .flat_map(|(idx, c)| c.to_lowercase().map(move |lc| (lc, idx)))
        .collect();

    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos + needle.len() <= folded.len() {
        let window = &folded[pos..pos + needle.len()];
        if window.iter().map(|(c, _)| *c).eq(needle.iter().copied()) {
            let start = window[0].1;
            let end = window[needle.len() - 1].1 + 1;
            ranges.push((start, end));
            pos += needle.len();
        } else {
            pos += 1;
        }
    }
    ranges
}

/// Groups digits in thousands: `15420` → `15,420`.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `★ 4.8 (15,420 reviews)`.
#[must_use]
pub fn format_rating(rating: f64, review_count: u64) -> String {
    let noun = if review_count == 1 { "review" } else { "reviews" };
    format!("★ {rating:.1} ({} {noun})", group_thousands(review_count))
}

/// Renders text with highlighted character ranges for search matches.
///
/// When `is_selected` is `true`, match highlighting is skipped so it does not
/// fight the selection background.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("Claude", 10), "Claude");
        assert_eq!(truncate("Claude", 6), "Claude");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("Éclair Génial", 8), "Éclai...");
        assert_eq!(display_width(&truncate("日本語のツール", 7)), 7);
    }

    #[test]
    fn truncate_to_tiny_widths() {
        assert_eq!(truncate("Midjourney", 2), "..");
        assert_eq!(truncate("Midjourney", 0), "");
    }

    #[test]
    fn fit_pads_and_cuts() {
        assert_eq!(fit("Free", 6), "Free  ");
        assert_eq!(fit("Freemium", 6), "Fre...");
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap("Discover compare and access tools", 16),
            vec!["Discover compare", "and access tools"]
        );
    }

    #[test]
    fn wrap_of_empty_text_is_one_blank_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn match_ranges_finds_every_occurrence() {
        assert_eq!(match_ranges("Gemini Gem", "gem"), vec![(0, 3), (7, 10)]);
        assert!(match_ranges("Claude", "").is_empty());
        assert!(match_ranges("Claude", "gpt").is_empty());
    }

    #[test]
    fn match_ranges_are_character_indices() {
        assert_eq!(match_ranges("DALL·E 3", "e 3"), vec![(5, 8)]);
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(980), "980");
        assert_eq!(group_thousands(15420), "15,420");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn rating_label() {
        assert_eq!(format_rating(4.76, 1), "★ 4.8 (1 review)");
        assert_eq!(format_rating(4.0, 8930), "★ 4.0 (8,930 reviews)");
    }
}
