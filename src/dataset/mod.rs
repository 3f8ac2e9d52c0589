//! Dataset providers.
//!
//! This module defines the [`DatasetProvider`] trait that abstracts over where the
//! fixed catalog comes from. The catalog is read exactly once at startup; nothing
//! in the crate writes it back.
//!
//! # Implementations
//!
//! - [`EmbeddedDataset`]: the catalog compiled into the plugin binary (default)
//! - [`FileDataset`]: a JSON or TOML document read from disk at startup
//!
//! # Example
//!
//! ```
//! use book_catalog::dataset::{DatasetProvider, EmbeddedDataset};
//!
//! let catalog = EmbeddedDataset.load()?;
//! assert!(catalog.books_per_page() > 0);
//! # Ok::<(), book_catalog::domain::CatalogError>(())
//! ```

pub mod embedded;
pub mod file;
pub mod models;

pub use embedded::EmbeddedDataset;
pub use file::FileDataset;
pub use models::{CatalogDocument, NamedRecord};

use crate::domain::error::Result;
use crate::domain::Catalog;

/// Source of the read-only catalog.
pub trait DatasetProvider {
    /// Loads and validates the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read, cannot be parsed, or
    /// fails dataset validation.
    fn load(&self) -> Result<Catalog>;
}
