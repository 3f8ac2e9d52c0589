//! Form controls for the search and settings overlays.
//!
//! Forms hold their field values directly; submitting a form reads them into
//! a value object ([`FilterCriteria`] or [`ThemeVariant`]) without side effects.

use crate::app::filter::{Choice, FilterCriteria, ANY};
use crate::app::modes::SearchField;
use crate::domain::{Catalog, LookupTable};
use crate::ui::theme::ThemeVariant;

/// One entry of a [`Selector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// A single-choice selector with a current option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    options: Vec<SelectOption>,
    selected: usize,
}

impl Selector {
    /// Builds a selector from options; the first option is selected.
    #[must_use]
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self { options, selected: 0 }
    }

    /// Builds a selector led by an "any" option, followed by the table's
    /// entries in declaration order.
    #[must_use]
    pub fn with_any(table: &LookupTable, any_label: &str) -> Self {
        let any = SelectOption { value: ANY.to_string(), label: any_label.to_string() };
        let entries = table.iter().map(|(id, name)| SelectOption {
            value: id.to_string(),
            label: name.to_string(),
        });
        Self::new(std::iter::once(any).chain(entries).collect())
    }

    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Value of the current option, or an empty string for an empty selector.
    #[must_use]
    pub fn value(&self) -> &str {
        self.options.get(self.selected).map_or("", |o| o.value.as_str())
    }

    /// Label of the current option, or an empty string for an empty selector.
    #[must_use]
    pub fn label(&self) -> &str {
        self.options.get(self.selected).map_or("", |o| o.label.as_str())
    }

    /// Moves to the next or previous option, wrapping around.
    pub fn cycle(&mut self, forward: bool) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        self.selected = if forward {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
    }

    /// Selects the option with `value`. Returns `false` if there is none.
    #[must_use]
    pub fn set_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o.value == value) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }
}

/// The search overlay's form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub title: String,
    pub genre: Selector,
    pub author: Selector,
    pub focus: SearchField,
}

impl SearchForm {
    /// Creates the form with genre and author selectors populated from the catalog.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            title: String::new(),
            genre: Selector::with_any(catalog.genres(), "All Genres"),
            author: Selector::with_any(catalog.authors(), "All Authors"),
            focus: SearchField::Title,
        }
    }

    /// Reads the current field values into fresh criteria.
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            title: self.title.clone(),
            genre: Choice::from_value(self.genre.value()),
            author: Choice::from_value(self.author.value()),
        }
    }

    /// Appends a character when the title field has focus.
    pub fn input_char(&mut self, c: char) -> bool {
        if self.focus != SearchField::Title {
            return false;
        }
        self.title.push(c);
        true
    }

    /// Removes the last character when the title field has focus.
    pub fn backspace(&mut self) -> bool {
        self.focus == SearchField::Title && self.title.pop().is_some()
    }

    /// Cycles the focused selector. No-op on the title field.
    pub fn cycle_focused(&mut self, forward: bool) -> bool {
        match self.focus {
            SearchField::Title => false,
            SearchField::Genre => {
                self.genre.cycle(forward);
                true
            }
            SearchField::Author => {
                self.author.cycle(forward);
                true
            }
        }
    }
}

/// The settings overlay's form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub theme: Selector,
}

impl SettingsForm {
    /// Creates the form with its theme selector showing `initial`.
    #[must_use]
    pub fn new(initial: ThemeVariant) -> Self {
        let options = ThemeVariant::ALL
            .iter()
            .map(|v| SelectOption { value: v.as_str().to_string(), label: capitalize(v.as_str()) })
            .collect();
        let mut theme = Selector::new(options);
        if !theme.set_value(initial.as_str()) {
            tracing::warn!(theme = %initial, "theme missing from settings options");
        }
        Self { theme }
    }

    /// Reads the theme field.
    #[must_use]
    pub fn theme(&self) -> ThemeVariant {
        self.theme.value().parse().unwrap_or_default()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::tests::sample_catalog;

    #[test]
    fn selectors_lead_with_any_option_in_table_order() {
        let form = SearchForm::new(&sample_catalog(1, 1));

        let genres: Vec<(&str, &str)> =
            form.genre.options().iter().map(|o| (o.value.as_str(), o.label.as_str())).collect();
        assert_eq!(genres, vec![("any", "All Genres"), ("g1", "Fiction"), ("g2", "Poetry")]);

        let authors: Vec<&str> = form.author.options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(authors, vec!["All Authors", "Ann Author", "Bob Writer"]);
    }

    #[test]
    fn selector_cycles_both_ways() {
        let mut form = SearchForm::new(&sample_catalog(1, 1));
        form.genre.cycle(false);
        assert_eq!(form.genre.value(), "g2");
        form.genre.cycle(true);
        assert_eq!(form.genre.value(), "any");
    }

    #[test]
    fn criteria_reflect_field_values() {
        let mut form = SearchForm::new(&sample_catalog(1, 1));
        for c in "Book".chars() {
            assert!(form.input_char(c));
        }
        form.focus = SearchField::Author;
        assert!(form.cycle_focused(true));
        assert!(!form.input_char('x'));

        let criteria = form.criteria();
        assert_eq!(criteria.title, "Book");
        assert_eq!(criteria.genre, Choice::Any);
        assert_eq!(criteria.author, Choice::Id("a1".to_string()));
    }

    #[test]
    fn backspace_only_edits_title() {
        let mut form = SearchForm::new(&sample_catalog(1, 1));
        form.title = "ab".to_string();
        assert!(form.backspace());
        assert_eq!(form.title, "a");
        form.focus = SearchField::Genre;
        assert!(!form.backspace());
    }

    #[test]
    fn set_value_reports_unknown_options() {
        let mut form = SettingsForm::new(ThemeVariant::Night);
        assert!(!form.theme.set_value("sepia"));
        assert_eq!(form.theme(), ThemeVariant::Night);

        assert!(form.theme.set_value("day"));
        assert_eq!(form.theme(), ThemeVariant::Day);
    }

    #[test]
    fn settings_form_is_seeded_with_initial_theme() {
        let form = SettingsForm::new(ThemeVariant::Night);
        assert_eq!(form.theme(), ThemeVariant::Night);
        assert_eq!(form.theme.label(), "Night");

        let mut form = SettingsForm::new(ThemeVariant::Day);
        form.theme.cycle(true);
        assert_eq!(form.theme(), ThemeVariant::Night);
    }
}
