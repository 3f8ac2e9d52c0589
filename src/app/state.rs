//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for a browsing session. It owns
//! the read-only [`Catalog`], the mutable [`SessionState`] (match-set and page
//! cursor) and the bound [`View`] holding every interactive surface.
//!
//! # Example
//!
//! ```rust
//! use book_catalog::app::AppState;
//! use book_catalog::dataset::{DatasetProvider, EmbeddedDataset};
//! use book_catalog::ui::theme::ThemeVariant;
//!
//! let state = AppState::new(EmbeddedDataset.load()?, ThemeVariant::Day);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(!viewmodel.rows.is_empty());
//! # Ok::<(), book_catalog::domain::CatalogError>(())
//! ```

use super::filter::title_match_ranges;
use super::modes::Surface;
use super::session::SessionState;
use crate::domain::Catalog;
use crate::ui::helpers::{truncate, ELLIPSIS};
use crate::ui::list::{ListItem, RowKey};
use crate::ui::theme::ThemeVariant;
use crate::ui::view::View;
use crate::ui::viewmodel::{
    DisplayRow, EmptyState, FooterInfo, HeaderInfo, OverlayInfo, SearchOverlayInfo,
    SettingsOverlayInfo, ShowMoreInfo, UIViewModel, CHROME_ROWS, LIST_TOP_LINE,
};
use std::ops::Range;
use std::rc::Rc;

/// Width of the title column, including its trailing gap.
pub const TITLE_COLUMN_WIDTH: usize = 45;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Rc<Catalog>,
    pub session: SessionState,
    pub view: View,
}

impl AppState {
    /// Creates the startup state.
    ///
    /// Builds the view (selectors, theme, "show more" label) and renders the
    /// first page of the full catalog.
    #[must_use]
    pub fn new(catalog: Catalog, initial_theme: ThemeVariant) -> Self {
        let catalog = Rc::new(catalog);
        let mut session = SessionState::new(&catalog);
        let mut view = View::new(&catalog, initial_theme);
        view.list.render_initial(&mut session, &catalog);

        tracing::debug!(
            books = catalog.books().len(),
            theme = %initial_theme,
            "app state initialized"
        );

        Self { catalog, session, view }
    }

    /// Computes a renderable view model for a terminal of `rows` × `cols`.
    ///
    /// The list is windowed around the selected row so the selection stays
    /// visible, keeping the window full when near either end.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let window = self.visible_window(Self::calculate_available_rows(rows));
        let items = &self.view.list.items()[window.clone()];

        let display_rows = items
            .iter()
            .enumerate()
            .map(|(offset, item)| self.compute_display_row(item, RowKey(window.start + offset), cols))
            .collect();

        UIViewModel {
            header: self.compute_header(),
            rows: display_rows,
            list_top_line: LIST_TOP_LINE,
            show_more: ShowMoreInfo {
                label: self.view.list.show_more.label.clone(),
                disabled: self.view.list.show_more.disabled,
                line: rows.saturating_sub(3).max(LIST_TOP_LINE),
            },
            empty_state: self.compute_empty_state(),
            overlay: self.compute_overlay(),
            footer: self.compute_footer(),
            style: self.view.style,
        }
    }

    fn visible_window(&self, available_rows: usize) -> Range<usize> {
        let len = self.view.list.len();
        let selected = self.view.list.selected();

        let mut start = selected.saturating_sub(available_rows / 2);
        let end = (start + available_rows).min(len);
        if end - start < available_rows && len >= available_rows {
            start = end.saturating_sub(available_rows);
        }
        start..end
    }

    fn compute_display_row(&self, item: &ListItem, row: RowKey, cols: usize) -> DisplayRow {
        let title = truncate(&item.title, TITLE_COLUMN_WIDTH - 2);
        let author_width = cols.saturating_sub(TITLE_COLUMN_WIDTH + 1);

        // Matches are found in the full title and clipped to the part still shown.
        let shown = match title.strip_suffix(ELLIPSIS) {
            Some(kept) if title != item.title => kept.chars().count(),
            _ => title.chars().count(),
        };
        let highlight_ranges = title_match_ranges(&item.title, &self.session.criteria.title)
            .into_iter()
            .filter(|&(start, _)| start < shown)
            .map(|(start, end)| (start, end.min(shown)))
            .collect();

        DisplayRow {
            row,
            author: truncate(&item.author, author_width),
            title,
            is_selected: row.0 == self.view.list.selected(),
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let count = self.session.matches.len();
        let label = if self.session.criteria.is_unconstrained() {
            "Book Catalog"
        } else {
            "Search Results"
        };
        HeaderInfo { title: format!(" {label} ({count}) ") }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        self.view.list.empty_message_shown.then(|| EmptyState {
            message: "No results found. Your filters might be too narrow.".to_string(),
            subtitle: "Press / to change the search".to_string(),
        })
    }

    fn compute_overlay(&self) -> Option<OverlayInfo> {
        let view = &self.view;
        view.active_surface().and_then(|surface| match surface {
            Surface::Search => Some(OverlayInfo::Search(SearchOverlayInfo {
                title: view.search.form.title.clone(),
                genre: view.search.form.genre.label().to_string(),
                author: view.search.form.author.label().to_string(),
                focus: view.search.form.focus,
            })),
            Surface::Settings => Some(OverlayInfo::Settings(SettingsOverlayInfo {
                theme: view.settings.form.theme.label().to_string(),
            })),
            Surface::Detail => view.detail.book.clone().map(OverlayInfo::Detail),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.view.active_surface() {
            Some(Surface::Search) => "Type: title  Tab: next field  ←/→: change option  Enter: search  Esc: close",
            Some(Surface::Settings) => "←/→: change theme  Enter: save  Esc: cancel",
            Some(Surface::Detail) => "Esc/Enter: close",
            None => "j/k: navigate  Enter: details  m: show more  /: search  s: settings  q: quit",
        };
        FooterInfo { keybindings: keybindings.to_string() }
    }

    const fn calculate_available_rows(total_rows: usize) -> usize {
        total_rows.saturating_sub(CHROME_ROWS)
    }
}
