//! Shared rendering utilities and helpers.
//!
//! Low-level text utilities used across UI components. Widths are terminal
//! cells as measured by `unicode-width`, so wide characters count twice.
//! Highlight ranges are character indices, not byte indices.
//!
//! # Example
//!
//! ```rust
//! use book_catalog::ui::helpers::{truncate, wrap_text};
//!
//! assert_eq!(truncate("The Left Hand of Darkness", 12), "The Left ...");
//! assert_eq!(wrap_text("a tale of two cities", 8), vec!["a tale", "of two", "cities"]);
//! ```

use crate::ui::theme::{StyleVariables, Theme};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended to text cut by [`truncate`].
pub const ELLIPSIS: &str = "...";

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for title matches.
///
/// Highlighted sections are drawn bold and underlined in the inverted style.
/// Selected rows are already inverted, so highlighting is skipped for them.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    style: &StyleVariables,
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

        print!("{}{}{}", Theme::inverted(style), Theme::bold(), Theme::underline());
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}{}", Theme::reset(), Theme::base(style));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Number of terminal cells `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Splits `text` after the longest prefix fitting in `max` cells.
fn split_at_width(text: &str, max: usize) -> (&str, &str) {
    let mut used = 0;
    for (i, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            return text.split_at(i);
        }
        used += w;
    }
    (text, "")
}

/// Cuts `text` to at most `max` cells, ending in [`ELLIPSIS`] when shortened.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max <= ELLIPSIS.len() {
        return split_at_width(text, max).0.to_string();
    }
    let (kept, _) = split_at_width(text, max - ELLIPSIS.len());
    format!("{kept}{ELLIPSIS}")
}

/// Greedy word wrap to lines of at most `width` cells.
///
/// Words wider than `width` are split. A single character wider than
/// `width` gets a line of its own.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut rest = word;
        while display_width(rest) > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let (mut head, mut tail) = split_at_width(rest, width);
            if head.is_empty() {
                let first = rest.chars().next().map_or(rest.len(), char::len_utf8);
                (head, tail) = rest.split_at(first);
            }
            lines.push(head.to_string());
            rest = tail;
        }
        if rest.is_empty() {
            continue;
        }

        let line_len = display_width(&line);
        if line_len > 0 && line_len + 1 + display_width(rest) > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(rest);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Left padding that centers `len` cells in `cols`.
#[must_use]
pub const fn centered_padding(len: usize, cols: usize) -> usize {
    cols.saturating_sub(len) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Dune", 10), "Dune");
        assert_eq!(truncate("Dune", 4), "Dune");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Cien años de soledad", 10), "Cien añ...");
        assert_eq!(truncate("Solaris", 2), "So");
    }

    #[test]
    fn wide_characters_take_two_cells() {
        assert_eq!(display_width("三体"), 4);
        assert_eq!(display_width("Dune"), 4);

        let title = "三体：地球往事三部曲之一黑暗森林与死神永生".repeat(3);
        let cut = truncate(&title, 43);
        assert!(cut.ends_with(ELLIPSIS));
        assert!(display_width(&cut) <= 43);
        assert!(display_width(&cut) >= 42);

        assert_eq!(truncate("三体三体", 7), "三体...");
        assert_eq!(truncate("三体", 3), "三");
    }

    #[test]
    fn wrap_measures_wide_characters() {
        assert_eq!(wrap_text("三体三体三", 4), vec!["三体", "三体", "三"]);
        assert_eq!(wrap_text("三体", 3), vec!["三", "体"]);
        assert_eq!(wrap_text("三", 1), vec!["三"]);
        assert_eq!(wrap_text("the 三体 trilogy", 8), vec!["the 三体", "trilogy"]);
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap_text("A planet where it always rains", 12),
            vec!["A planet", "where it", "always rains"]
        );
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
        assert!(wrap_text("anything", 0).is_empty());
        assert!(wrap_text("   ", 5).is_empty());
    }

    #[test]
    fn padding_centers_and_saturates() {
        assert_eq!(centered_padding(4, 10), 3);
        assert_eq!(centered_padding(20, 10), 0);
    }
}
