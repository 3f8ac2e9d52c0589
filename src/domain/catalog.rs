//! The loaded, read-only catalog.
//!
//! [`Catalog`] owns the three fixed collections (books, authors, genres) and the
//! page-size constant. It is built once at startup by a
//! [`DatasetProvider`](crate::dataset::DatasetProvider) and never mutated.

use super::book::Book;
use super::error::{CatalogError, Result};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// An ordered id → display name table.
///
/// Keeps the dataset's declaration order for iteration (selector options are
/// listed in that order) while providing hashed lookups by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl LookupTable {
    /// Builds a table from `(id, name)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Dataset`] if an id appears more than once.
    pub fn new(kind: &str, entries: Vec<(String, String)>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, (id, _)) in entries.iter().enumerate() {
            if index.insert(id.clone(), position).is_some() {
                return Err(CatalogError::Dataset(format!("duplicate {kind} id: {id}")));
            }
        }
        Ok(Self { entries, index })
    }

    /// Looks up the display name for an id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.index.get(id).map(|&i| self.entries[i].1.as_str())
    }

    /// Looks up the display name for an id, falling back to the id itself.
    #[must_use]
    pub fn name_or_id<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).unwrap_or(id)
    }

    /// Iterates `(id, name)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The complete, immutable book catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Rc<Book>>,
    authors: LookupTable,
    genres: LookupTable,
    books_per_page: usize,
}

impl Catalog {
    /// Assembles and validates a catalog.
    ///
    /// Books keep their given order; that order is the order of every match-set.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Dataset`] if `books_per_page` is zero or two books
    /// share an id.
    pub fn new(
        books: Vec<Book>,
        authors: LookupTable,
        genres: LookupTable,
        books_per_page: usize,
    ) -> Result<Self> {
        if books_per_page == 0 {
            return Err(CatalogError::Dataset("books_per_page must be at least 1".to_string()));
        }

        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id.as_str()) {
                return Err(CatalogError::Dataset(format!("duplicate book id: {}", book.id)));
            }
        }

        let unknown_authors = books.iter().filter(|b| authors.get(&b.author).is_none()).count();
        if unknown_authors > 0 {
            tracing::debug!(unknown_authors, "books reference authors missing from the author table");
        }

        Ok(Self {
            books: books.into_iter().map(Rc::new).collect(),
            authors,
            genres,
            books_per_page,
        })
    }

    /// All books in dataset order.
    #[must_use]
    pub fn books(&self) -> &[Rc<Book>] {
        &self.books
    }

    #[must_use]
    pub const fn authors(&self) -> &LookupTable {
        &self.authors
    }

    #[must_use]
    pub const fn genres(&self) -> &LookupTable {
        &self.genres
    }

    /// Number of books revealed per page.
    #[must_use]
    pub const fn books_per_page(&self) -> usize {
        self.books_per_page
    }

    /// Author display name for an author id, or the raw id if unknown.
    #[must_use]
    pub fn author_name<'a>(&'a self, author_id: &'a str) -> &'a str {
        self.authors.name_or_id(author_id)
    }

    /// Genre display name for a genre id, or the raw id if unknown.
    #[must_use]
    pub fn genre_name<'a>(&'a self, genre_id: &'a str) -> &'a str {
        self.genres.name_or_id(genre_id)
    }

    /// Finds a book by id.
    #[must_use]
    pub fn find_book(&self, id: &str) -> Option<&Rc<Book>> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Number of books beyond the first page of the full collection.
    ///
    /// This is the count shown on the "show more" control. It describes the
    /// whole catalog, not the active match-set.
    #[must_use]
    pub fn remaining_after_first_page(&self) -> usize {
        self.books.len().saturating_sub(self.books_per_page)
    }
}

/// An empty catalog with single-book pages.
impl Default for Catalog {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            authors: LookupTable::default(),
            genres: LookupTable::default(),
            books_per_page: 1,
        }
    }
}
