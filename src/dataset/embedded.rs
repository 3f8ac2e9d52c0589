//! Catalog compiled into the binary.

use super::models::CatalogDocument;
use super::DatasetProvider;
use crate::domain::error::Result;
use crate::domain::Catalog;

const CATALOG_JSON: &str = include_str!("../../data/catalog.json");

/// The built-in catalog shipped with the plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDataset;

impl DatasetProvider for EmbeddedDataset {
    fn load(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("load_embedded_dataset", bytes = CATALOG_JSON.len()).entered();

        let document: CatalogDocument = serde_json::from_str(CATALOG_JSON)?;
        let catalog = document.into_catalog()?;

        tracing::debug!(
            books = catalog.books().len(),
            authors = catalog.authors().len(),
            genres = catalog.genres().len(),
            "embedded catalog loaded"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = EmbeddedDataset.load().unwrap();

        assert_eq!(catalog.books_per_page(), 36);
        assert!(catalog.books().len() > catalog.books_per_page());
        assert!(!catalog.authors().is_empty());
        assert!(!catalog.genres().is_empty());
    }

    #[test]
    fn embedded_books_reference_known_authors_and_genres() {
        let catalog = EmbeddedDataset.load().unwrap();

        for book in catalog.books() {
            assert!(catalog.authors().get(&book.author).is_some(), "unknown author on {}", book.id);
            for genre in &book.genres {
                assert!(catalog.genres().get(genre).is_some(), "unknown genre on {}", book.id);
            }
        }
    }
}
