//! Small rendering helpers shared by the views.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Prefix of the selected row.
pub const SELECTED_MARKER: &str = "▶ ";

/// Prefix of every other row, as wide as the marker.
pub const UNSELECTED_MARKER: &str = "  ";

/// Returns the row prefix for a list index.
pub fn marker(index: usize, selected: usize) -> &'static str {
    if index == selected {
        SELECTED_MARKER
    } else {
        UNSELECTED_MARKER
    }
}

/// Truncate a string with ellipsis, using Unicode display width for accuracy.
///
/// Widths above 3 keep room for a `...` suffix; smaller widths are cut
/// without one.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }

    if max_width > 3 {
        format!("{}...", take_width(s, max_width - 3))
    } else {
        take_width(s, max_width)
    }
}

/// Truncate to `width` columns, then pad with spaces to exactly `width`.
///
/// `format!("{:<w$}")` pads by char count, which misaligns wide glyphs.
pub fn pad_str(s: &str, width: usize) -> String {
    let mut out = truncate_str(s, width);
    let used = UnicodeWidthStr::width(out.as_str());
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

fn take_width(s: &str, max_width: usize) -> String {
    let mut width = 0;
    s.chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > max_width {
                return false;
            }
            width += w;
            true
        })
        .collect()
}

/// Key hint spans for the status bar: `key: description | key: description`.
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", hint_style()));
        }
        spans.push(Span::styled(format!("{key}: "), key_style()));
        spans.push(Span::styled(desc.to_string(), hint_style()));
    }

    spans
}

pub fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

pub fn hint_style() -> Style {
    Style::default().fg(Color::White).bg(Color::DarkGray)
}
