//! Serialized dataset schema.
//!
//! These records mirror the on-disk layout of a catalog document. They are
//! converted into the domain [`Catalog`] by [`CatalogDocument::into_catalog`],
//! which also runs dataset validation.

use crate::domain::error::Result;
use crate::domain::{Book, Catalog, LookupTable};
use serde::{Deserialize, Serialize};

/// One `{ id, name }` entry of the author or genre table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRecord {
    pub id: String,
    pub name: String,
}

/// Top-level catalog document.
///
/// ```json
/// {
///   "books_per_page": 36,
///   "authors": [{ "id": "a-herbert", "name": "Frank Herbert" }],
///   "genres": [{ "id": "g-scifi", "name": "Science Fiction" }],
///   "books": [{
///     "id": "5b1c0f7e-...",
///     "title": "Dune",
///     "author": "a-herbert",
///     "image": "https://...",
///     "description": "...",
///     "published": "1965-08-01T12:00:00.000Z",
///     "genres": ["g-scifi"]
///   }]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub books_per_page: usize,
    #[serde(default)]
    pub authors: Vec<NamedRecord>,
    #[serde(default)]
    pub genres: Vec<NamedRecord>,
    #[serde(default)]
    pub books: Vec<Book>,
}

impl CatalogDocument {
    /// Validates the document and builds the domain catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Dataset`](crate::domain::CatalogError::Dataset)
    /// for duplicate ids or a zero page size.
    pub fn into_catalog(self) -> Result<Catalog> {
        let authors = LookupTable::new("author", Self::pairs(self.authors))?;
        let genres = LookupTable::new("genre", Self::pairs(self.genres))?;
        Catalog::new(self.books, authors, genres, self.books_per_page)
    }

    fn pairs(records: Vec<NamedRecord>) -> Vec<(String, String)> {
        records.into_iter().map(|r| (r.id, r.name)).collect()
    }
}
