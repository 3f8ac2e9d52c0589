//! Detail overlay content for a single book.

use crate::domain::{Book, Catalog};

/// Everything the detail overlay shows for one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Local calendar year of the publication date.
    pub year: i32,
    pub description: String,
    pub image: String,
    /// Genre display names, in the book's genre order.
    pub genres: Vec<String>,
}

impl BookDetail {
    #[must_use]
    pub fn from_book(book: &Book, catalog: &Catalog) -> Self {
        Self::with_year(book, catalog, book.published_year())
    }

    fn with_year(book: &Book, catalog: &Catalog, year: i32) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author: catalog.author_name(&book.author).to_string(),
            year,
            description: book.description.clone(),
            image: book.image.clone(),
            genres: book.genres.iter().map(|g| catalog.genre_name(g).to_string()).collect(),
        }
    }

    /// Subtitle line: `Author (Year)`.
    #[must_use]
    pub fn subtitle(&self) -> String {
        format!("{} ({})", self.author, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::tests::{book, sample_catalog};
    use chrono::Utc;

    #[test]
    fn projects_book_fields() {
        let catalog = sample_catalog(3, 2);
        let detail = BookDetail::from_book(&catalog.books()[1], &catalog);

        assert_eq!(detail.title, "Book 1");
        assert_eq!(detail.author, "Bob Writer");
        assert_eq!(detail.year, 2001);
        assert_eq!(detail.description, "About Book 1");
        assert_eq!(detail.genres, vec!["Fiction".to_string()]);
        assert_eq!(detail.subtitle(), "Bob Writer (2001)");
    }

    #[test]
    fn unknown_references_fall_back_to_ids() {
        let catalog = sample_catalog(1, 1);
        let stray = book("s", "Stray", "ghost", &["g1", "g9"]);
        let year = stray.published_year_in(&Utc);
        let detail = BookDetail::with_year(&stray, &catalog, year);

        assert_eq!(detail.author, "ghost");
        assert_eq!(detail.genres, vec!["Fiction".to_string(), "g9".to_string()]);
    }
}
