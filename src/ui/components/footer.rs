//! Footer component renderer.
//!
//! Renders the help bar with centered keybinding hints for the active surface.

use crate::ui::helpers::{centered_padding, position_cursor, truncate};
use crate::ui::theme::{StyleVariables, Theme};
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at `row`.
///
/// Text wider than the terminal is truncated so it never wraps onto the next
/// line. Returns the next available row.
pub fn render_footer(row: usize, footer: &FooterInfo, style: &StyleVariables, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = help_text.chars().count();
    let padding = centered_padding(text_len, cols);

    position_cursor(row, 1);
    print!("{}", Theme::base(style));
    print!("{}", Theme::dim());
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
