//! Catalog read from a JSON or TOML file.
//!
//! The format is chosen by file extension (`.json` or `.toml`); both use the
//! [`CatalogDocument`] schema.

use super::models::CatalogDocument;
use super::DatasetProvider;
use crate::domain::error::{CatalogError, Result};
use crate::domain::Catalog;
use std::fs;
use std::path::PathBuf;

/// Supported on-disk encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

/// A catalog document stored on the filesystem.
///
/// # Example
///
/// ```no_run
/// use book_catalog::dataset::{DatasetProvider, FileDataset};
///
/// let catalog = FileDataset::new("/host/books.toml").load()?;
/// # Ok::<(), book_catalog::domain::CatalogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileDataset {
    path: PathBuf,
}

impl FileDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn format(&self) -> Result<Format> {
        match self.path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Format::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Format::Toml),
            _ => Err(CatalogError::Config(format!(
                "unsupported catalog file extension: {}",
                self.path.display()
            ))),
        }
    }
}

impl DatasetProvider for FileDataset {
    fn load(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("load_file_dataset", path = %self.path.display()).entered();

        let format = self.format()?;
        let contents = fs::read_to_string(&self.path)?;

        let document: CatalogDocument = match format {
            Format::Json => serde_json::from_str(&contents)?,
            Format::Toml => toml::from_str(&contents)?,
        };
        let catalog = document.into_catalog()?;

        tracing::debug!(books = catalog.books().len(), ?format, "catalog file loaded");
        Ok(catalog)
    }
}
