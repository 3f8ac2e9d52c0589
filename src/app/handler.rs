//! Event handling and state transition logic.
//!
//! This module implements the interaction dispatcher: it turns user intents into
//! calls on the filter engine, list renderer, detail presenter and theme
//! controller, mutating [`AppState`] in place.
//!
//! # Event Types
//!
//! - **Overlays**: `OpenSearch`, `SearchCancel`, `OpenSettings`, `SettingsCancel`, `CloseDetail`
//! - **Submissions**: `SubmitSearch`, `SubmitSettings`
//! - **List**: `ShowMore`, `ItemClicked`, `SelectNext`, `SelectPrevious`
//! - **Form editing**: `Char`, `Backspace`, `NextField`, `PreviousField`, `CycleOption`
//! - **Plugin**: `CloseFocus`
//!
//! Form-editing events apply to the topmost open overlay and are ignored when
//! no form is open.
//!
//! # Example
//!
//! ```rust
//! use book_catalog::app::{handle_event, AppState, Event};
//! use book_catalog::dataset::{DatasetProvider, EmbeddedDataset};
//! use book_catalog::ui::theme::ThemeVariant;
//!
//! let catalog = EmbeddedDataset.load()?;
//! let mut state = AppState::new(catalog, ThemeVariant::Day);
//! let (should_render, actions) = handle_event(&mut state, &Event::OpenSearch);
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), book_catalog::domain::CatalogError>(())
//! ```

use super::modes::Surface;
use super::{Action, AppState};
use crate::ui::detail::BookDetail;
use crate::ui::list::RowKey;

/// User intents delivered by the plugin shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Closes the search overlay without searching.
    SearchCancel,
    /// Closes the settings overlay without applying the theme.
    SettingsCancel,
    /// Opens the search overlay and focuses its title field.
    OpenSearch,
    /// Opens the settings overlay.
    OpenSettings,
    /// Closes the detail overlay.
    CloseDetail,
    /// Applies the theme chosen in the settings form and closes the overlay.
    SubmitSettings,
    /// Filters the catalog with the search form's criteria and redraws the list.
    SubmitSearch,
    /// Reveals the next page of matches.
    ShowMore,
    /// Opens the detail overlay for the book rendered at `row`.
    ItemClicked {
        row: RowKey,
    },
    /// Moves the list selection down (wraps to top).
    SelectNext,
    /// Moves the list selection up (wraps to bottom).
    SelectPrevious,
    /// Moves search form focus to the next field.
    NextField,
    /// Moves search form focus to the previous field.
    PreviousField,
    /// Cycles the focused selector of the active form.
    CycleOption {
        forward: bool,
    },
    /// Appends a character to the focused text field.
    Char(char),
    /// Removes the last character of the focused text field.
    Backspace,
    /// Hides the plugin.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`; `should_render` is `false` when the event
/// changed nothing visible.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchCancel => close(state, Surface::Search),
        Event::SettingsCancel => close(state, Surface::Settings),
        Event::CloseDetail => close(state, Surface::Detail),
        Event::OpenSearch => {
            state.view.set_open(Surface::Search, true);
            (true, vec![])
        }
        Event::OpenSettings => {
            state.view.set_open(Surface::Settings, true);
            (true, vec![])
        }
        Event::SubmitSettings => {
            let theme = state.view.settings.form.theme();
            tracing::debug!(theme = %theme, "settings submitted");
            state.view.style.apply_theme(theme);
            state.view.set_open(Surface::Settings, false);
            (true, vec![])
        }
        Event::SubmitSearch => {
            let criteria = state.view.search.form.criteria();
            tracing::debug!(
                title = %criteria.title,
                genre = criteria.genre.value(),
                author = criteria.author.value(),
                "search submitted"
            );
            state.session.apply_filter(&state.catalog, criteria);
            state.view.list.render_initial(&mut state.session, &state.catalog);
            (true, vec![])
        }
        Event::ShowMore => {
            if state.view.list.show_more.disabled {
                tracing::debug!("show more ignored while disabled");
                return (false, vec![]);
            }
            state.view.list.render_next_page(&mut state.session, &state.catalog);
            (true, vec![])
        }
        Event::ItemClicked { row } => {
            let Some(book) = state
                .view
                .list
                .book_id_at(*row)
                .and_then(|id| state.catalog.find_book(id))
            else {
                tracing::debug!(row = row.0, "click did not resolve to a book");
                return (false, vec![]);
            };

            tracing::debug!(book_id = %book.id, title = %book.title, "showing book detail");
            state.view.detail.book = Some(BookDetail::from_book(book, &state.catalog));
            state.view.set_open(Surface::Detail, true);
            (true, vec![])
        }
        Event::SelectNext => {
            state.view.list.select_next();
            (true, vec![])
        }
        Event::SelectPrevious => {
            state.view.list.select_previous();
            (true, vec![])
        }
        Event::NextField | Event::PreviousField => {
            if state.view.active_surface() != Some(Surface::Search) {
                return (false, vec![]);
            }
            let form = &mut state.view.search.form;
            form.focus = if *event == Event::NextField {
                form.focus.next()
            } else {
                form.focus.previous()
            };
            (true, vec![])
        }
        Event::CycleOption { forward } => {
            let changed = match state.view.active_surface() {
                Some(Surface::Settings) => {
                    state.view.settings.form.theme.cycle(*forward);
                    true
                }
                Some(Surface::Search) => state.view.search.form.cycle_focused(*forward),
                _ => false,
            };
            (changed, vec![])
        }
        Event::Char(c) => {
            let changed = state.view.active_surface() == Some(Surface::Search)
                && state.view.search.form.input_char(*c);
            tracing::trace!(title = %state.view.search.form.title, "search title edited");
            (changed, vec![])
        }
        Event::Backspace => {
            let changed = state.view.active_surface() == Some(Surface::Search)
                && state.view.search.form.backspace();
            (changed, vec![])
        }
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
    }
}

fn close(state: &mut AppState, surface: Surface) -> (bool, Vec<Action>) {
    if !state.view.is_open(surface) {
        return (false, vec![]);
    }
    state.view.set_open(surface, false);
    (true, vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filter::Choice;
    use crate::app::modes::SearchField;
    use crate::domain::catalog::tests::sample_catalog;
    use crate::ui::theme::{Rgb, ThemeVariant};

    fn state(count: usize, per_page: usize) -> AppState {
        AppState::new(sample_catalog(count, per_page), ThemeVariant::Day)
    }

    fn type_title(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c));
        }
    }

    #[test]
    fn open_and_cancel_overlays() {
        let mut s = state(5, 2);

        handle_event(&mut s, &Event::OpenSearch);
        handle_event(&mut s, &Event::OpenSettings);
        assert!(s.view.search.open && s.view.settings.open);

        handle_event(&mut s, &Event::SettingsCancel);
        assert!(!s.view.settings.open);
        assert!(s.view.search.open);

        handle_event(&mut s, &Event::SearchCancel);
        assert!(!s.view.search.open);
        assert_eq!(handle_event(&mut s, &Event::SearchCancel), (false, vec![]));
    }

    #[test]
    fn submit_settings_applies_theme_and_closes() {
        let mut s = state(5, 2);
        handle_event(&mut s, &Event::OpenSettings);
        handle_event(&mut s, &Event::CycleOption { forward: true });
        handle_event(&mut s, &Event::SubmitSettings);

        assert!(!s.view.settings.open);
        assert_eq!(s.view.style.color_dark, Rgb::WHITE);
        assert_eq!(s.view.style.color_light, Rgb::NEAR_BLACK);
    }

    #[test]
    fn cancelled_settings_leave_theme_alone() {
        let mut s = state(5, 2);
        handle_event(&mut s, &Event::OpenSettings);
        handle_event(&mut s, &Event::CycleOption { forward: true });
        handle_event(&mut s, &Event::SettingsCancel);
        assert_eq!(s.view.style.color_dark, Rgb::NEAR_BLACK);
    }

    #[test]
    fn submit_search_filters_and_rerenders() {
        let mut s = state(10, 3);
        handle_event(&mut s, &Event::ShowMore);
        assert_eq!(s.view.list.len(), 6);

        handle_event(&mut s, &Event::OpenSearch);
        handle_event(&mut s, &Event::NextField);
        handle_event(&mut s, &Event::NextField);
        assert_eq!(s.view.search.form.focus, SearchField::Author);
        handle_event(&mut s, &Event::CycleOption { forward: true });
        handle_event(&mut s, &Event::SubmitSearch);

        assert_eq!(s.session.criteria.author, Choice::Id("a1".into()));
        assert_eq!(s.session.matches.len(), 5);
        assert_eq!(s.session.cursor.pages(), 1);
        assert_eq!(s.view.list.len(), 3);
        assert!(!s.view.list.show_more.disabled);
        assert!(s.view.search.open);
    }

    #[test]
    fn search_with_no_results_shows_empty_state() {
        let mut s = state(10, 3);
        handle_event(&mut s, &Event::OpenSearch);
        type_title(&mut s, "nothing like this");
        handle_event(&mut s, &Event::SubmitSearch);

        assert!(s.view.list.is_empty());
        assert!(s.view.list.empty_message_shown);
        assert!(s.view.list.show_more.disabled);
    }

    #[test]
    fn show_more_is_ignored_while_disabled() {
        let mut s = state(3, 5);
        assert!(s.view.list.show_more.disabled);
        assert_eq!(handle_event(&mut s, &Event::ShowMore), (false, vec![]));
        assert_eq!(s.session.cursor.pages(), 1);
    }

    #[test]
    fn item_click_opens_detail_for_that_row() {
        let mut s = state(10, 3);
        handle_event(&mut s, &Event::ShowMore);
        handle_event(&mut s, &Event::ItemClicked { row: RowKey(4) });

        assert!(s.view.detail.open);
        let detail = s.view.detail.book.as_ref().unwrap();
        assert_eq!(detail.id, "b4");
        assert_eq!(detail.author, "Ann Author");

        handle_event(&mut s, &Event::CloseDetail);
        assert!(!s.view.detail.open);
    }

    #[test]
    fn click_outside_rendered_rows_is_ignored() {
        let mut s = state(10, 3);
        assert_eq!(handle_event(&mut s, &Event::ItemClicked { row: RowKey(3) }), (false, vec![]));
        assert!(!s.view.detail.open);
    }

    #[test]
    fn typing_only_reaches_open_search_form() {
        let mut s = state(5, 2);
        assert_eq!(handle_event(&mut s, &Event::Char('x')), (false, vec![]));

        handle_event(&mut s, &Event::OpenSearch);
        type_title(&mut s, "ab");
        handle_event(&mut s, &Event::Backspace);
        assert_eq!(s.view.search.form.title, "a");

        handle_event(&mut s, &Event::OpenSettings);
        assert_eq!(handle_event(&mut s, &Event::Char('z')), (false, vec![]));
        assert_eq!(s.view.search.form.title, "a");
    }

    #[test]
    fn close_focus_emits_action() {
        let mut s = state(1, 1);
        assert_eq!(handle_event(&mut s, &Event::CloseFocus), (false, vec![Action::CloseFocus]));
    }
}
