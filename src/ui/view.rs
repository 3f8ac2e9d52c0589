//! The bound view: every interactive surface of the browser in one place.
//!
//! A [`View`] is built once at startup and owned by
//! [`AppState`](crate::app::AppState). Event handlers reach surfaces only
//! through it.

use crate::app::modes::{SearchField, Surface};
use crate::domain::Catalog;
use crate::ui::detail::BookDetail;
use crate::ui::form::{SearchForm, SettingsForm};
use crate::ui::list::BookList;
use crate::ui::theme::{StyleVariables, ThemeVariant};

#[derive(Debug, Clone)]
pub struct SearchOverlay {
    pub open: bool,
    pub form: SearchForm,
}

#[derive(Debug, Clone)]
pub struct SettingsOverlay {
    pub open: bool,
    pub form: SettingsForm,
}

#[derive(Debug, Clone, Default)]
pub struct DetailOverlay {
    pub open: bool,
    /// Last book shown. Kept after closing.
    pub book: Option<BookDetail>,
}

/// All surfaces plus the global style variables.
#[derive(Debug, Clone)]
pub struct View {
    pub search: SearchOverlay,
    pub settings: SettingsOverlay,
    pub detail: DetailOverlay,
    pub list: BookList,
    pub style: StyleVariables,
}

impl View {
    /// Builds the startup view.
    ///
    /// Populates the genre and author selectors, seeds the settings form with
    /// `initial_theme` and applies it, and fixes the "show more" label from the
    /// full catalog size. The list itself starts empty.
    #[must_use]
    pub fn new(catalog: &Catalog, initial_theme: ThemeVariant) -> Self {
        let mut style = StyleVariables::default();
        style.apply_theme(initial_theme);

        Self {
            search: SearchOverlay { open: false, form: SearchForm::new(catalog) },
            settings: SettingsOverlay { open: false, form: SettingsForm::new(initial_theme) },
            detail: DetailOverlay::default(),
            list: BookList::new(catalog.remaining_after_first_page()),
            style,
        }
    }

    #[must_use]
    pub const fn is_open(&self, surface: Surface) -> bool {
        match surface {
            Surface::Search => self.search.open,
            Surface::Settings => self.settings.open,
            Surface::Detail => self.detail.open,
        }
    }

    pub fn set_open(&mut self, surface: Surface, open: bool) {
        tracing::debug!(?surface, open, "surface toggled");
        match surface {
            Surface::Search => {
                self.search.open = open;
                if open {
                    self.search.form.focus = SearchField::Title;
                }
            }
            Surface::Settings => self.settings.open = open,
            Surface::Detail => self.detail.open = open,
        }
    }

    /// Topmost open overlay, if any.
    #[must_use]
    pub fn active_surface(&self) -> Option<Surface> {
        Surface::PRECEDENCE.into_iter().find(|&s| self.is_open(s))
    }
}
