//! Empty state component renderer.
//!
//! Shown in the list area when the submitted search matched no books.

use crate::ui::helpers::{centered_padding, display_width, position_cursor};
use crate::ui::theme::{StyleVariables, Theme};
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line empty state message starting at `row`.
///
/// Both lines are horizontally centered; the subtitle is dimmed.
pub fn render_empty_state(row: usize, empty: &EmptyState, style: &StyleVariables, cols: usize) {
    let msg_len = display_width(&empty.message);
    let msg_padding = centered_padding(msg_len, cols);

    position_cursor(row, 1);
    print!("{}", Theme::base(style));
    print!("{}", Theme::bold());
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = display_width(&empty.subtitle);
    let sub_padding = centered_padding(sub_len, cols);

    position_cursor(row + 1, 1);
    print!("{}", Theme::base(style));
    print!("{}", Theme::dim());
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}
