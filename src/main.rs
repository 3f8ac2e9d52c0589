//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the `book_catalog` library and the Zellij
//! plugin system. It translates Zellij key and mouse events into library
//! [`Event`]s, routes keys to the topmost open surface, and executes the
//! returned [`Action`]s.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, load the catalog, build `AppState`
//! 2. **Subscribe**: Register for `Key` and `Mouse` events
//! 3. **Update**: Map events, delegate to `handle_event`, run actions
//! 4. **Render**: Draw the view model and keep it for mouse hit-testing
//!
//! # Keybindings
//!
//! Book list:
//! - `j`/`Down`/`Ctrl+n`: Move down
//! - `k`/`Up`/`Ctrl+p`: Move up
//! - `Enter`: Show details of the selected book
//! - `m`/`Space`: Show more
//! - `/`: Open search
//! - `s`: Open settings
//! - `q`: Close plugin
//!
//! Search overlay:
//! - Characters edit the title
//! - `Tab`/`Shift+Tab`/`Down`/`Up`: Move between fields
//! - `Left`/`Right`: Change the focused genre or author
//! - `Enter`: Search
//! - `Esc`: Close
//!
//! Settings overlay:
//! - `Left`/`Right`: Change theme
//! - `Enter`: Apply
//! - `Esc`: Cancel
//!
//! Detail overlay:
//! - `Esc`/`Enter`/`q`: Close
//!
//! Mouse: clicking a book opens its details, clicking the show-more line
//! reveals the next page, and scrolling moves the selection.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use std::collections::BTreeMap;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
use book_catalog::ui::{HitTarget, UIViewModel};
#[cfg(target_family = "wasm")]
use book_catalog::{handle_event, Action, Config, Event, Surface};

#[cfg(target_family = "wasm")]
register_plugin!(State);

/// The plugin only runs inside Zellij's WASM runtime.
#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("book-catalog is a Zellij plugin; build it for wasm32-wasip1 and load it from a layout");
}

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the last drawn view model so mouse
/// clicks resolve against what is actually on screen.
#[cfg(target_family = "wasm")]
struct State {
    app: book_catalog::AppState,
    last_frame: Option<UIViewModel>,
}

#[cfg(target_family = "wasm")]
impl Default for State {
    fn default() -> Self {
        Self {
            app: book_catalog::initialize(&Config::default()),
            last_frame: None,
        }
    }
}

#[cfg(target_family = "wasm")]
impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        book_catalog::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(?config, "parsed configuration");

        self.app = book_catalog::initialize(&config);
        self.last_frame = None;

        subscribe(&[EventType::Key, EventType::Mouse]);
        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => self.map_key_event(key),
            zellij_tile::prelude::Event::Mouse(mouse) => self.map_mouse_event(mouse),
            _ => None,
        };
        let Some(our_event) = our_event else {
            return false;
        };

        let (should_render, actions) = handle_event(&mut self.app, &our_event);
        tracing::debug!(action_count = actions.len(), should_render, "event handled");
        for action in &actions {
            Self::execute_action(action);
        }
        should_render
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.last_frame = Some(book_catalog::ui::render(&self.app, rows, cols));
    }
}

#[cfg(target_family = "wasm")]
impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            _ => "Other".to_string(),
        }
    }

    /// Maps a key to an event for the topmost open surface.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        match self.app.view.active_surface() {
            None => self.map_list_key(key),
            Some(Surface::Search) => Self::map_search_key(key),
            Some(Surface::Settings) => Self::map_settings_key(key),
            Some(Surface::Detail) => Self::map_detail_key(key),
        }
    }

    fn map_list_key(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::SelectNext),
                BareKey::Char('p') => Some(Event::SelectPrevious),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::SelectNext,
            BareKey::Up | BareKey::Char('k') => Event::SelectPrevious,
            BareKey::Enter => Event::ItemClicked {
                row: self.app.view.list.selected_row()?,
            },
            BareKey::Char('m' | ' ') => Event::ShowMore,
            BareKey::Char('/') => Event::OpenSearch,
            BareKey::Char('s') => Event::OpenSettings,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_search_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Esc => Event::SearchCancel,
            BareKey::Enter => Event::SubmitSearch,
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PreviousField,
            BareKey::Tab | BareKey::Down => Event::NextField,
            BareKey::Up => Event::PreviousField,
            BareKey::Left => Event::CycleOption { forward: false },
            BareKey::Right => Event::CycleOption { forward: true },
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if !key.has_modifiers(&[KeyModifier::Ctrl]) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_settings_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Esc => Event::SettingsCancel,
            BareKey::Enter => Event::SubmitSettings,
            BareKey::Left => Event::CycleOption { forward: false },
            BareKey::Right => Event::CycleOption { forward: true },
            _ => return None,
        })
    }

    fn map_detail_key(key: &KeyWithModifier) -> Option<Event> {
        match key.bare_key {
            BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Some(Event::CloseDetail),
            _ => None,
        }
    }

    /// Resolves a mouse event against the last drawn frame.
    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        let frame = self.last_frame.as_ref()?;
        let list_focused = self.app.view.active_surface().is_none();

        match mouse {
            Mouse::LeftClick(line, _col) => {
                // Zellij reports 0-based lines; the layout is 1-based.
                let line = usize::try_from(line).ok()? + 1;
                match frame.hit_test(line)? {
                    HitTarget::Row(row) => Some(Event::ItemClicked { row }),
                    HitTarget::ShowMore => Some(Event::ShowMore),
                }
            }
            Mouse::ScrollDown(_) if list_focused => Some(Event::SelectNext),
            Mouse::ScrollUp(_) if list_focused => Some(Event::SelectPrevious),
            _ => None,
        }
    }

    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
