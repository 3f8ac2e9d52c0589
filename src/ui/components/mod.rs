//! Composable UI component renderers.
//!
//! Each component renders one part of the screen at explicit rows, using the
//! active [`StyleVariables`] for every color it prints.
//!
//! # Components
//!
//! - [`header`]: Title bar with the match count
//! - [`footer`]: Keybinding hints for the active surface
//! - [`table`]: Book list rows and the "show more" control
//! - [`empty`]: Empty state message for searches with no matches
//! - [`overlay`]: Search, settings and detail boxes

mod empty;
mod footer;
mod header;
mod overlay;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::{StyleVariables, Theme};
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use overlay::render_overlay;
use table::{render_blank_lines, render_show_more, render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row`. Returns the next available row.
fn render_border(row: usize, style: &StyleVariables, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::base(style));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full screen.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Column headers]
/// [List rows or empty state, blank padding to fill]
/// [Show more]
/// [Border]
/// [Footer]
/// ```
///
/// The topmost overlay, if any, is drawn last over the list area.
pub fn render_screen(vm: &UIViewModel, cols: usize, rows: usize) {
    let style = &vm.style;

    render_blank_lines(1, 1, style, cols);
    let mut current_row = render_header(2, &vm.header, style, cols);
    current_row = render_border(current_row, style, cols);
    current_row = render_table_headers(current_row, style, cols);
    debug_assert_eq!(current_row, vm.list_top_line);

    let list_end = vm.show_more.line;
    let rendered_end = render_table_rows(current_row, &vm.rows, style, cols);
    render_blank_lines(rendered_end, list_end.saturating_sub(rendered_end), style, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 1, empty, style, cols);
    }

    render_show_more(&vm.show_more, style, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    render_border(border_row, style, cols);
    render_footer(footer_start, &vm.footer, style, cols);
    render_blank_lines(rows, 1, style, cols);

    if let Some(overlay) = &vm.overlay {
        render_overlay(overlay, style, rows, cols);
    }
}
