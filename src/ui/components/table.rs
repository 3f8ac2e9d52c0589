//! Book list component renderer.
//!
//! Renders the rendered list window as a two-column table (TITLE, AUTHOR)
//! with selection and title-match highlighting, followed by the "show more"
//! control.

use crate::app::state::TITLE_COLUMN_WIDTH;
use crate::ui::helpers::{self, centered_padding, display_width, position_cursor};
use crate::ui::theme::{StyleVariables, Theme};
use crate::ui::viewmodel::{DisplayRow, ShowMoreInfo};

/// Renders the column headers at `row`. Returns the next available row.
pub fn render_table_headers(row: usize, style: &StyleVariables, cols: usize) -> usize {
    let line = format!("{:<width$}{}", " TITLE", "AUTHOR", width = TITLE_COLUMN_WIDTH + 1);
    let line_len = display_width(&line);

    position_cursor(row, 1);
    print!("{}", Theme::base(style));
    print!("{}", Theme::bold());
    print!("{line}");
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows starting at `row`. Returns the next available row.
pub fn render_table_rows(row: usize, rows: &[DisplayRow], style: &StyleVariables, cols: usize) -> usize {
    let mut current_row = row;
    for item in rows {
        current_row = render_table_row(current_row, item, style, cols);
    }
    current_row
}

/// Renders one book as `␠TITLE (padded to the title column) AUTHOR`.
///
/// The row is padded to the full width so the selection background spans
/// the whole line.
fn render_table_row(row: usize, item: &DisplayRow, style: &StyleVariables, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::inverted(style));
    } else {
        print!("{}", Theme::base(style));
    }

    print!(" ");
    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, style, item.is_selected);

    let title_len = display_width(&item.title);
    print!("{}", " ".repeat(TITLE_COLUMN_WIDTH.saturating_sub(title_len)));
    print!("{}", item.author);

    let line_len = 1 + TITLE_COLUMN_WIDTH.max(title_len) + display_width(&item.author);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the "show more" control centered on its line.
///
/// Disabled controls are dimmed; enabled ones are underlined to read as
/// clickable.
pub fn render_show_more(show_more: &ShowMoreInfo, style: &StyleVariables, cols: usize) {
    let label = format!("[ {} ]", show_more.label);
    let label_len = display_width(&label);
    let padding = centered_padding(label_len, cols);

    position_cursor(show_more.line, 1);
    print!("{}", Theme::base(style));
    print!("{}", " ".repeat(padding));
    if show_more.disabled {
        print!("{}", Theme::dim());
    } else {
        print!("{}", Theme::bold());
        print!("{}", Theme::underline());
    }
    print!("{label}");
    print!("{}", Theme::reset());
    print!("{}", Theme::base(style));
    print!("{}", " ".repeat(cols.saturating_sub(padding + label_len)));
    print!("{}", Theme::reset());
}

/// Paints `count` empty lines in the base style starting at `row`.
pub fn render_blank_lines(row: usize, count: usize, style: &StyleVariables, cols: usize) {
    for offset in 0..count {
        position_cursor(row + offset, 1);
        print!("{}", Theme::base(style));
        print!("{}", " ".repeat(cols));
        print!("{}", Theme::reset());
    }
}
