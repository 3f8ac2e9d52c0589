//! Book domain model.
//!
//! A [`Book`] is one immutable catalog entry. Books are created once when the
//! dataset is loaded and shared read-only (via `Rc`) by every other component.

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// `author` and `genres` hold ids that reference the catalog's author and genre
/// tables; they are resolved to display names only at presentation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub description: String,
    pub published: DateTime<Utc>,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Book {
    /// Returns the calendar year of the publication date in the local time zone.
    ///
    /// Timestamps close to midnight on New Year's Eve may land in a different
    /// year depending on the host's offset from UTC.
    ///
    /// # Examples
    ///
    /// ```
    /// use book_catalog::domain::Book;
    ///
    /// let book = Book {
    ///     id: "b1".to_string(),
    ///     title: "Dune".to_string(),
    ///     author: "a-herbert".to_string(),
    ///     image: String::new(),
    ///     description: String::new(),
    ///     published: "1965-08-01T12:00:00Z".parse().unwrap(),
    ///     genres: vec![],
    /// };
    /// assert_eq!(book.published_year(), 1965);
    /// ```
    #[must_use]
    pub fn published_year(&self) -> i32 {
        self.published_year_in(&Local)
    }

    /// Returns the calendar year of the publication date in the given time zone.
    #[must_use]
    pub fn published_year_in<Tz: TimeZone>(&self, tz: &Tz) -> i32 {
        self.published.with_timezone(tz).year()
    }

    /// Returns `true` if the book is tagged with the given genre id.
    #[must_use]
    pub fn has_genre(&self, genre_id: &str) -> bool {
        self.genres.iter().any(|g| g == genre_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn book_published(published: &str) -> Book {
        Book {
            id: "b1".to_string(),
            title: "Test".to_string(),
            author: "a1".to_string(),
            image: String::new(),
            description: String::new(),
            published: published.parse().unwrap(),
            genres: vec!["g1".to_string(), "g2".to_string()],
        }
    }

    #[test]
    fn published_year_follows_the_time_zone() {
        let book = book_published("1999-12-31T23:30:00Z");

        assert_eq!(book.published_year_in(&Utc), 1999);
        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(book.published_year_in(&east), 2000);
    }

    #[test]
    fn published_year_uses_local_calendar_for_mid_year_dates() {
        let book = book_published("1965-08-01T12:00:00Z");
        assert_eq!(book.published_year(), 1965);
    }

    #[test]
    fn has_genre_checks_membership() {
        let book = book_published("2000-06-01T00:00:00Z");
        assert!(book.has_genre("g2"));
        assert!(!book.has_genre("g3"));
    }
}
