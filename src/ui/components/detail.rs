//! Detail overlay renderer.
//!
//! Replaces the intro, filter bar and results list while an entry is
//! selected. Content is laid out as styled lines first, then clipped to the
//! rows between the header and the footer.

use crate::ui::helpers::{fit, position_cursor, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

const INDENT: usize = 2;

struct Line<'a> {
    text: String,
    color: &'a str,
    bold: bool,
}

impl<'a> Line<'a> {
    fn plain(text: impl Into<String>, color: &'a str) -> Self {
        Self { text: text.into(), color, bold: false }
    }

    fn heading(text: impl Into<String>, color: &'a str) -> Self {
        Self { text: text.into(), color, bold: true }
    }

    fn blank() -> Self {
        Self::plain(String::new(), "")
    }
}

fn layout<'a>(detail: &DetailInfo, theme: &'a Theme, width: usize) -> Vec<Line<'a>> {
    let colors = &theme.colors;
    let mut lines = vec![Line::heading(detail.name.clone(), &colors.accent)];

    let mut meta = format!(
        "{} · {} · {}",
        detail.category,
        detail.price.label(),
        detail.rating
    );
    if detail.is_trending {
        meta.push_str(" · Trending");
    }
    if detail.is_top_rated {
        meta.push_str(" · Top Rated");
    }
    lines.push(Line::plain(meta, &colors.rating_fg));
    lines.push(Line::plain(detail.added.clone(), &colors.text_dim));
    lines.push(Line::blank());

    lines.push(Line::heading(detail.about_title.clone(), &colors.header_fg));
    for text in wrap(&detail.description, width) {
        lines.push(Line::plain(text, &colors.text_normal));
    }
    lines.push(Line::blank());

    if !detail.features.is_empty() {
        lines.push(Line::heading("Key Features", &colors.header_fg));
        for feature in &detail.features {
            lines.push(Line::plain(format!("• {feature}"), &colors.text_normal));
        }
        lines.push(Line::blank());
    }

    lines.push(Line::heading("Pricing", &colors.header_fg));
    lines.push(Line::plain(detail.price.label(), colors.price(detail.price)));
    for text in wrap(&detail.pricing_details, width) {
        lines.push(Line::plain(text, &colors.text_normal));
    }
    lines.push(Line::blank());

    if !detail.pros.is_empty() {
        lines.push(Line::heading("Pros", &colors.pros_fg));
        for pro in &detail.pros {
            lines.push(Line::plain(format!("+ {pro}"), &colors.text_normal));
        }
        lines.push(Line::blank());
    }
    if !detail.cons.is_empty() {
        lines.push(Line::heading("Cons", &colors.cons_fg));
        for con in &detail.cons {
            lines.push(Line::plain(format!("- {con}"), &colors.text_normal));
        }
        lines.push(Line::blank());
    }

    lines.push(Line::heading(
        format!("{}: {}", detail.visit_hint, detail.website_url),
        &colors.accent,
    ));
    lines
}

/// Renders the overlay from `row` up to, but not including, `limit`.
///
/// Lines past `limit` are dropped; the footer stays visible.
///
/// # Returns
///
/// The next available row position
pub fn render_detail(
    row: usize,
    limit: usize,
    detail: &DetailInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let width = cols.saturating_sub(INDENT * 2).max(1);
    let indent = " ".repeat(INDENT);
    let mut current_row = row;

    for line in layout(detail, theme, width) {
        if current_row >= limit {
            break;
        }
        position_cursor(current_row, 1);
        if line.bold {
            print!("{}", Theme::bold());
        }
        if !line.color.is_empty() {
            print!("{}", Theme::fg(line.color));
        }
        print!("{indent}{}", fit(&line.text, width));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}
