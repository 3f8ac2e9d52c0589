//! Per-session browsing state.

use super::filter::{filter_books, FilterCriteria};
use super::pagination::PageCursor;
use crate::domain::{Book, Catalog};
use std::rc::Rc;

/// The mutable part of a browsing session: the active match-set and how much
/// of it has been revealed.
///
/// Owned by [`AppState`](crate::app::AppState). Only the search-submit handler
/// replaces `matches`; only the list renderer moves `cursor`.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Books satisfying `criteria`, in catalog order.
    pub matches: Vec<Rc<Book>>,
    pub cursor: PageCursor,
    /// Criteria that produced `matches`.
    pub criteria: FilterCriteria,
}

impl SessionState {
    /// Starts a session showing the whole catalog.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            matches: catalog.books().to_vec(),
            cursor: PageCursor::default(),
            criteria: FilterCriteria::default(),
        }
    }

    /// Replaces the match-set with the result of filtering the catalog.
    ///
    /// The cursor is left alone; the list renderer resets it when it redraws
    /// from the first page.
    pub fn apply_filter(&mut self, catalog: &Catalog, criteria: FilterCriteria) {
        self.matches = filter_books(catalog.books(), &criteria);
        self.criteria = criteria;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filter::Choice;
    use crate::domain::catalog::tests::sample_catalog;

    #[test]
    fn new_session_matches_everything() {
        let catalog = sample_catalog(5, 2);
        let session = SessionState::new(&catalog);
        assert_eq!(session.matches.len(), 5);
        assert!(session.criteria.is_unconstrained());
    }

    #[test]
    fn apply_filter_replaces_matches_wholesale() {
        let catalog = sample_catalog(6, 2);
        let mut session = SessionState::new(&catalog);

        let by_author = FilterCriteria { author: Choice::Id("a2".into()), ..Default::default() };
        session.apply_filter(&catalog, by_author.clone());
        assert_eq!(session.matches.len(), 3);
        assert_eq!(session.criteria, by_author);

        session.apply_filter(&catalog, FilterCriteria { title: "book 4".into(), ..Default::default() });
        assert_eq!(session.matches.len(), 1);
        assert_eq!(session.matches[0].id, "b4");
    }
}
