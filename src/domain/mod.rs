//! Domain layer for the catalog browser.
//!
//! Core data types, independent of Zellij APIs and of how the catalog is
//! drawn.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: The immutable book record
//! - [`catalog`]: The loaded catalog with its author and genre tables

pub mod book;
pub mod catalog;
pub mod error;

pub use book::Book;
pub use catalog::{Catalog, LookupTable};
pub use error::{CatalogError, Result};
