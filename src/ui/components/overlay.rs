//! Overlay box renderer for the search, settings and detail surfaces.
//!
//! Overlays are drawn as a bordered box over the list area:
//!
//! ```text
//! [margin] ┌─ Search ─────────────────┐ [margin]
//! [margin] │ ▸ Title:   dune_          │ [margin]
//! [margin] │   Genre:   ‹ All Genres › │ [margin]
//! [margin] └──────────────────────────┘ [margin]
//! ```

use crate::app::modes::SearchField;
use crate::ui::detail::BookDetail;
use crate::ui::helpers::{display_width, position_cursor, truncate, wrap_text};
use crate::ui::theme::{StyleVariables, Theme};
use crate::ui::viewmodel::{OverlayInfo, SearchOverlayInfo, SettingsOverlayInfo};

/// Horizontal margin for the box (spaces on left and right).
const BOX_MARGIN: usize = 5;

/// Row of the box's top border.
const BOX_TOP: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Emphasis {
    Normal,
    Bold,
    Dim,
}

/// One line of box content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BoxLine {
    pub text: String,
    pub emphasis: Emphasis,
}

impl BoxLine {
    fn new(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self { text: text.into(), emphasis }
    }

    fn blank() -> Self {
        Self::new("", Emphasis::Normal)
    }
}

/// Draws `overlay` as a bordered box over the list area.
///
/// Content that does not fit above the footer is cut off.
pub fn render_overlay(overlay: &OverlayInfo, style: &StyleVariables, rows: usize, cols: usize) {
    let box_width = cols.saturating_sub(BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(4);
    if inner_width == 0 {
        return;
    }

    let (title, mut lines) = overlay_lines(overlay, inner_width);
    let max_lines = rows.saturating_sub(BOX_TOP + 4);
    lines.truncate(max_lines);

    let mut row = BOX_TOP;
    let heading = truncate(&format!(" {title} "), inner_width);
    position_cursor(row, BOX_MARGIN + 1);
    print!("{}", Theme::base(style));
    print!("┌─{heading}{}┐", "─".repeat(box_width.saturating_sub(3 + display_width(&heading))));
    print!("{}", Theme::reset());
    row += 1;

    for line in &lines {
        let text = truncate(&line.text, inner_width);
        position_cursor(row, BOX_MARGIN + 1);
        print!("{}", Theme::base(style));
        print!("│ ");
        match line.emphasis {
            Emphasis::Normal => {}
            Emphasis::Bold => print!("{}", Theme::bold()),
            Emphasis::Dim => print!("{}", Theme::dim()),
        }
        print!("{text}");
        print!("{}{}", Theme::reset(), Theme::base(style));
        print!("{} │", " ".repeat(inner_width.saturating_sub(display_width(&text))));
        print!("{}", Theme::reset());
        row += 1;
    }

    position_cursor(row, BOX_MARGIN + 1);
    print!("{}", Theme::base(style));
    print!("└{}┘", "─".repeat(box_width.saturating_sub(2)));
    print!("{}", Theme::reset());
}

/// Heading and content lines for `overlay`, wrapped to `width`.
pub(crate) fn overlay_lines(overlay: &OverlayInfo, width: usize) -> (String, Vec<BoxLine>) {
    match overlay {
        OverlayInfo::Search(search) => ("Search".to_string(), search_lines(search)),
        OverlayInfo::Settings(settings) => ("Settings".to_string(), settings_lines(settings)),
        OverlayInfo::Detail(detail) => (detail.title.clone(), detail_lines(detail, width)),
    }
}

fn field_line(focused: bool, label: &str, value: &str) -> BoxLine {
    let marker = if focused { '▸' } else { ' ' };
    let emphasis = if focused { Emphasis::Bold } else { Emphasis::Normal };
    BoxLine::new(format!("{marker} {label:<8}{value}"), emphasis)
}

fn search_lines(search: &SearchOverlayInfo) -> Vec<BoxLine> {
    let title_focused = search.focus == SearchField::Title;
    let cursor = if title_focused { "_" } else { "" };
    vec![
        BoxLine::blank(),
        field_line(title_focused, "Title:", &format!("{}{cursor}", search.title)),
        field_line(search.focus == SearchField::Genre, "Genre:", &format!("‹ {} ›", search.genre)),
        field_line(search.focus == SearchField::Author, "Author:", &format!("‹ {} ›", search.author)),
        BoxLine::blank(),
    ]
}

fn settings_lines(settings: &SettingsOverlayInfo) -> Vec<BoxLine> {
    vec![
        BoxLine::blank(),
        field_line(true, "Theme:", &format!("‹ {} ›", settings.theme)),
        BoxLine::blank(),
    ]
}

fn detail_lines(detail: &BookDetail, width: usize) -> Vec<BoxLine> {
    let mut lines = vec![BoxLine::new(detail.subtitle(), Emphasis::Bold)];
    if !detail.genres.is_empty() {
        lines.push(BoxLine::new(detail.genres.join(", "), Emphasis::Dim));
    }
    lines.push(BoxLine::blank());
    lines.extend(
        wrap_text(&detail.description, width)
            .into_iter()
            .map(|line| BoxLine::new(line, Emphasis::Normal)),
    );
    lines.push(BoxLine::blank());
    lines.push(BoxLine::new(format!("Cover: {}", detail.image), Emphasis::Dim));
    lines
}
