//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data and
//! the screen lines each clickable element was laid out on.
//!
//! # Screen Layout
//!
//! Lines are 1-indexed, as used by ANSI cursor positioning:
//!
//! ```text
//! 1            [blank]
//! 2            Header
//! 3            Border
//! 4            Column headers (TITLE / AUTHOR)
//! 5..=rows-4   List rows (or empty-state message)
//! rows-3       Show more control
//! rows-2       Border
//! rows-1       Footer
//! ```

use crate::app::modes::SearchField;
use crate::ui::detail::BookDetail;
use crate::ui::list::RowKey;
use crate::ui::theme::StyleVariables;

/// Line of the first list row.
pub const LIST_TOP_LINE: usize = 5;

/// Lines used by everything except list rows.
pub const CHROME_ROWS: usize = 8;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    /// The window of list rows that fits on screen.
    pub rows: Vec<DisplayRow>,
    /// Line of the first entry of `rows`.
    pub list_top_line: usize,
    pub show_more: ShowMoreInfo,
    pub empty_state: Option<EmptyState>,
    /// The topmost open overlay, drawn over the list.
    pub overlay: Option<OverlayInfo>,
    pub footer: FooterInfo,
    pub style: StyleVariables,
}

/// Where a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Row(RowKey),
    ShowMore,
}

impl UIViewModel {
    /// Resolves a screen line to the element drawn on it.
    ///
    /// Overlays are modal: while one is open nothing underneath is clickable.
    #[must_use]
    pub fn hit_test(&self, line: usize) -> Option<HitTarget> {
        if self.overlay.is_some() {
            return None;
        }
        if line == self.show_more.line {
            return Some(HitTarget::ShowMore);
        }
        line.checked_sub(self.list_top_line)
            .and_then(|offset| self.rows.get(offset))
            .map(|row| HitTarget::Row(row.row))
    }
}

/// Display information for one list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Key of the rendered list row this line shows.
    pub row: RowKey,
    /// Title, truncated to the title column.
    pub title: String,
    pub author: String,
    pub is_selected: bool,
    /// Character ranges of the title matching the active title query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowMoreInfo {
    pub label: String,
    pub disabled: bool,
    pub line: usize,
}

/// Shown in place of the list when nothing matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Content of the topmost open overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayInfo {
    Search(SearchOverlayInfo),
    Settings(SettingsOverlayInfo),
    Detail(BookDetail),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOverlayInfo {
    pub title: String,
    pub genre: String,
    pub author: String,
    pub focus: SearchField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsOverlayInfo {
    pub theme: String,
}
