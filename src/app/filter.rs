//! Book filtering.
//!
//! [`filter_books`] computes the match-set for a [`FilterCriteria`]: the ordered
//! subset of the catalog whose genre, title and author all satisfy the criteria.
//! Filtering is a pure linear scan; relative order is always preserved.

use crate::domain::Book;
use std::rc::Rc;

/// Selector value meaning "no constraint on this field".
pub const ANY: &str = "any";

/// A selector value: either the "any" sentinel or a concrete id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Choice {
    #[default]
    Any,
    Id(String),
}

impl Choice {
    /// Parses a selector value, mapping [`ANY`] to [`Choice::Any`].
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == ANY {
            Self::Any
        } else {
            Self::Id(value.to_string())
        }
    }

    /// Returns the selector value, [`ANY`] for the sentinel.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Any => ANY,
            Self::Id(id) => id,
        }
    }

    fn admits(&self, predicate: impl FnOnce(&str) -> bool) -> bool {
        match self {
            Self::Any => true,
            Self::Id(id) => predicate(id),
        }
    }
}

/// Filter settings read from the search form on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive title substring. Ignored when blank after trimming.
    pub title: String,
    pub genre: Choice,
    pub author: Choice,
}

impl FilterCriteria {
    /// Returns `true` when the criteria admit every book.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.title.trim().is_empty() && self.genre == Choice::Any && self.author == Choice::Any
    }

    fn matcher(&self) -> Matcher<'_> {
        let title = if self.title.trim().is_empty() {
            None
        } else {
            Some(self.title.to_lowercase())
        };
        Matcher { criteria: self, title }
    }
}

/// Criteria with the title query case-folded once per filter run.
struct Matcher<'a> {
    criteria: &'a FilterCriteria,
    title: Option<String>,
}

impl Matcher<'_> {
    fn matches(&self, book: &Book) -> bool {
        let genre_match = self.criteria.genre.admits(|genre| book.has_genre(genre));
        let title_match = self
            .title
            .as_ref()
            .map_or(true, |query| book.title.to_lowercase().contains(query.as_str()));
        let author_match = self.criteria.author.admits(|author| book.author == author);

        genre_match && title_match && author_match
    }
}

/// Returns the books matching `criteria`, in their original order.
///
/// # Example
///
/// ```
/// use book_catalog::app::filter::{filter_books, Choice, FilterCriteria};
///
/// let criteria = FilterCriteria { title: "dune".into(), genre: Choice::Any, author: Choice::Any };
/// let matches = filter_books(&[], &criteria);
/// assert!(matches.is_empty());
/// ```
#[must_use]
pub fn filter_books(books: &[Rc<Book>], criteria: &FilterCriteria) -> Vec<Rc<Book>> {
    let _span = tracing::debug_span!(
        "filter_books",
        total_books = books.len(),
        title_len = criteria.title.len(),
        genre = criteria.genre.value(),
        author = criteria.author.value()
    )
    .entered();

    let matcher = criteria.matcher();
    let matches: Vec<Rc<Book>> = books.iter().filter(|book| matcher.matches(book)).cloned().collect();

    tracing::debug!(match_count = matches.len(), "filter applied");
    matches
}

/// Computes character ranges of every case-insensitive occurrence of `query` in `title`.
///
/// Ranges are `(start, end)` character indices with exclusive end, suitable for
/// match highlighting. Returns no ranges for a blank query, or when case folding
/// changes the character count of the title (so indices would not line up).
#[must_use]
pub fn title_match_ranges(title: &str, query: &str) -> Vec<(usize, usize)> {
    if query.trim().is_empty() {
        return vec![];
    }

    let title_chars: Vec<char> = title.to_lowercase().chars().collect();
    if title_chars.len() != title.chars().count() {
        return vec![];
    }
    let query_chars: Vec<char> = query.to_lowercase().chars().collect();

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + query_chars.len() <= title_chars.len() {
        if title_chars[start..start + query_chars.len()] == query_chars[..] {
            ranges.push((start, start + query_chars.len()));
            start += query_chars.len();
        } else {
            start += 1;
        }
    }
    ranges
}
