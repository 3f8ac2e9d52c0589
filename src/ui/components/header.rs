//! Header component renderer.

use crate::ui::helpers::{centered_padding, display_width, position_cursor};
use crate::ui::theme::{StyleVariables, Theme};
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar centered at `row`, padded to the full width.
///
/// Returns the next available row.
pub fn render_header(row: usize, header: &HeaderInfo, style: &StyleVariables, cols: usize) -> usize {
    let title_len = display_width(&header.title);
    let padding = centered_padding(title_len, cols);

    position_cursor(row, 1);
    print!("{}", Theme::inverted(style));
    print!("{}", Theme::bold());
    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    print!("{}", Theme::reset());
    row + 1
}
