//! Error types for the catalog browser.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] used at the fallible boundaries of the crate: loading and validating
//! the book dataset and reading configuration. Event handling itself is total and
//! never produces errors.

use thiserror::Error;

/// The main error type for catalog browser operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]` for
/// automatic conversion with `?`.
///
/// # Examples
///
/// ```
/// use book_catalog::domain::CatalogError;
///
/// fn validate_page_size(size: usize) -> Result<(), CatalogError> {
///     if size == 0 {
///         return Err(CatalogError::Dataset("page size must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The dataset is structurally valid but semantically broken.
    ///
    /// Raised by dataset validation, e.g. for duplicate ids or a zero page size.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Occurs when an external catalog file cannot be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON dataset could not be parsed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML dataset could not be parsed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration is invalid.
    ///
    /// The string describes the specific configuration problem, such as an
    /// unsupported catalog file extension.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
