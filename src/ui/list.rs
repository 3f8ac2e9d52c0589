//! The visible book list.
//!
//! [`BookList`] is the list renderer: it projects slices of the session's
//! match-set into [`ListItem`]s and appends them to the visible list, keeps the
//! "show more" control and empty-state indicator in sync, and maps each rendered
//! row back to its book id.
//!
//! The list only ever holds a prefix of the match-set: after
//! [`BookList::render_initial`] and `n` calls to [`BookList::render_next_page`]
//! it shows `min(matches, (n + 1) * page_size)` items.

use crate::app::pagination::clamp_range;
use crate::app::session::SessionState;
use crate::domain::{Book, Catalog};
use std::rc::Rc;

/// Stable key of one rendered row: its position in the visible list.
///
/// Rows are append-only between two initial renders, so a key keeps pointing at
/// the same book until the list is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowKey(pub usize);

/// Display projection of one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub id: String,
    pub title: String,
    /// Author display name, or the raw author id if the catalog lacks it.
    pub author: String,
    pub image: String,
}

impl ListItem {
    #[must_use]
    pub fn from_book(book: &Book, catalog: &Catalog) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author: catalog.author_name(&book.author).to_string(),
            image: book.image.clone(),
        }
    }
}

/// The "show more" control below the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowMoreControl {
    pub label: String,
    pub disabled: bool,
}

impl ShowMoreControl {
    /// Creates the control with a fixed label: `Show more (<remaining>)`.
    #[must_use]
    pub fn new(remaining: usize) -> Self {
        Self { label: format!("Show more ({remaining})"), disabled: false }
    }
}

/// Visible list state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookList {
    items: Vec<ListItem>,
    selected: usize,
    pub show_more: ShowMoreControl,
    /// Whether the "no results" message is shown.
    pub empty_message_shown: bool,
}

impl BookList {
    /// Creates an empty list whose "show more" label counts `remaining` books.
    ///
    /// The label is fixed here and not recomputed when the match-set changes.
    #[must_use]
    pub fn new(remaining: usize) -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            show_more: ShowMoreControl::new(remaining),
            empty_message_shown: false,
        }
    }

    /// Clears the list and shows the first page of the session's match-set.
    ///
    /// Resets the page cursor and selection, disables "show more" when a single
    /// page holds every match, and shows the empty-state message when there are
    /// no matches.
    pub fn render_initial(&mut self, session: &mut SessionState, catalog: &Catalog) {
        let page_size = catalog.books_per_page();
        let total = session.matches.len();
        let _span = tracing::debug_span!("render_initial", total, page_size).entered();

        self.items.clear();
        self.selected = 0;
        session.cursor.reset();

        let first_page = clamp_range(0..page_size, total);
        self.append(&session.matches[first_page], catalog);

        self.show_more.disabled = total <= page_size;
        self.empty_message_shown = total == 0;

        tracing::debug!(
            visible = self.items.len(),
            show_more_disabled = self.show_more.disabled,
            empty = self.empty_message_shown,
            "list rendered"
        );
    }

    /// Appends the next page of the match-set and advances the page cursor.
    ///
    /// Already visible rows are never touched. Past the end of the match-set
    /// nothing is appended, but the cursor still advances.
    pub fn render_next_page(&mut self, session: &mut SessionState, catalog: &Catalog) {
        let page_size = catalog.books_per_page();
        let range = clamp_range(session.cursor.next_page(page_size), session.matches.len());
        let _span = tracing::debug_span!(
            "render_next_page",
            page = session.cursor.pages(),
            start = range.start,
            end = range.end
        )
        .entered();

        self.append(&session.matches[range], catalog);
        session.cursor.advance();

        tracing::debug!(
            visible = self.items.len(),
            revealed = session.cursor.revealed(session.matches.len(), page_size),
            pages = session.cursor.pages(),
            "page appended"
        );
    }

    fn append(&mut self, books: &[Rc<Book>], catalog: &Catalog) {
        self.items.extend(books.iter().map(|book| ListItem::from_book(book, catalog)));
    }

    #[must_use]
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Book id rendered at `row`, if the row exists.
    #[must_use]
    pub fn book_id_at(&self, row: RowKey) -> Option<&str> {
        self.items.get(row.0).map(|item| item.id.as_str())
    }

    /// Index of the selected row. Meaningless while the list is empty.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Key of the selected row, or `None` for an empty list.
    #[must_use]
    pub fn selected_row(&self) -> Option<RowKey> {
        (self.selected < self.items.len()).then_some(RowKey(self.selected))
    }

    /// Moves the selection down, wrapping to the top.
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.items.len();
    }

    /// Moves the selection up, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 { self.items.len() - 1 } else { self.selected - 1 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filter::FilterCriteria;
    use crate::domain::catalog::tests::{book, sample_catalog};
    use crate::domain::LookupTable;

    fn setup(count: usize, per_page: usize) -> (Catalog, SessionState, BookList) {
        let catalog = sample_catalog(count, per_page);
        let session = SessionState::new(&catalog);
        let list = BookList::new(catalog.remaining_after_first_page());
        (catalog, session, list)
    }

    #[test]
    fn initial_render_shows_first_page() {
        let (catalog, mut session, mut list) = setup(150, 36);
        list.render_initial(&mut session, &catalog);

        assert_eq!(list.len(), 36);
        assert_eq!(list.show_more.label, "Show more (114)");
        assert!(!list.show_more.disabled);
        assert!(!list.empty_message_shown);
        assert_eq!(session.cursor.pages(), 1);
    }

    #[test]
    fn next_page_appends_without_rerendering() {
        let (catalog, mut session, mut list) = setup(150, 36);
        list.render_initial(&mut session, &catalog);
        let first_page = list.items()[..36].to_vec();

        list.render_next_page(&mut session, &catalog);

        assert_eq!(list.len(), 72);
        assert_eq!(&list.items()[..36], &first_page[..]);
        assert_eq!(list.items()[36].id, "b36");
        assert_eq!(session.cursor.pages(), 2);
        assert_eq!(list.len(), session.cursor.revealed(session.matches.len(), 36));
    }

    #[test]
    fn visible_count_follows_page_formula() {
        for (total, per_page) in [(0, 5), (4, 5), (5, 5), (6, 5), (23, 5), (150, 36)] {
            let (catalog, mut session, mut list) = setup(total, per_page);
            list.render_initial(&mut session, &catalog);
            for n in 0..6 {
                assert_eq!(list.len(), total.min((n + 1) * per_page), "total={total} n={n}");
                list.render_next_page(&mut session, &catalog);
            }
        }
    }

    #[test]
    fn show_more_disabled_iff_single_page() {
        for (total, disabled) in [(0, true), (5, true), (6, false)] {
            let (catalog, mut session, mut list) = setup(total, 5);
            list.render_initial(&mut session, &catalog);
            assert_eq!(list.show_more.disabled, disabled, "total={total}");
        }
    }

    #[test]
    fn empty_message_iff_no_matches() {
        let (catalog, mut session, mut list) = setup(10, 5);
        session.apply_filter(&catalog, FilterCriteria { title: "zzz".into(), ..Default::default() });
        list.render_initial(&mut session, &catalog);
        assert!(list.empty_message_shown);
        assert!(list.is_empty());
        assert!(list.selected_row().is_none());

        session.apply_filter(&catalog, FilterCriteria::default());
        list.render_initial(&mut session, &catalog);
        assert!(!list.empty_message_shown);
    }

    #[test]
    fn render_initial_is_idempotent() {
        let (catalog, mut session, mut list) = setup(20, 5);
        list.render_initial(&mut session, &catalog);
        list.render_next_page(&mut session, &catalog);
        list.render_initial(&mut session, &catalog);
        let once = list.clone();
        list.render_initial(&mut session, &catalog);

        assert_eq!(list, once);
        assert_eq!(list.len(), 5);
        assert_eq!(session.cursor.pages(), 1);
    }

    #[test]
    fn empty_next_page_still_advances_cursor() {
        let (catalog, mut session, mut list) = setup(3, 5);
        list.render_initial(&mut session, &catalog);
        list.render_next_page(&mut session, &catalog);
        assert_eq!(list.len(), 3);
        assert_eq!(session.cursor.pages(), 2);
        assert_eq!(session.cursor.revealed(session.matches.len(), 5), 3);
    }

    #[test]
    fn rows_map_to_book_ids() {
        let (catalog, mut session, mut list) = setup(12, 5);
        list.render_initial(&mut session, &catalog);
        list.render_next_page(&mut session, &catalog);

        assert_eq!(list.book_id_at(RowKey(0)), Some("b0"));
        assert_eq!(list.book_id_at(RowKey(7)), Some("b7"));
        assert_eq!(list.book_id_at(RowKey(10)), None);
    }

    #[test]
    fn projection_falls_back_to_raw_author_id() {
        let catalog = Catalog::new(
            vec![book("x", "Orphan", "nobody", &[])],
            LookupTable::default(),
            LookupTable::default(),
            5,
        )
        .unwrap();
        let item = ListItem::from_book(&catalog.books()[0], &catalog);
        assert_eq!(item.author, "nobody");
        assert_eq!(item.image, "https://img.test/x.jpg");
    }

    #[test]
    fn selection_wraps() {
        let (catalog, mut session, mut list) = setup(3, 5);
        list.render_initial(&mut session, &catalog);
        list.select_previous();
        assert_eq!(list.selected(), 2);
        list.select_next();
        assert_eq!(list.selected_row(), Some(RowKey(0)));
    }
}
