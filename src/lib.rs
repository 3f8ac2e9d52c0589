//! Book Catalog: a Zellij plugin for browsing a fixed book catalog.
//!
//! The plugin provides:
//! - A paginated book list with a "show more" control
//! - Search by title substring, genre and author
//! - A detail overlay for a single book
//! - Day and night themes, seeded from the host color preference
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Dispatcher
//! │  - Event handling                                   │
//! │  - Filter engine and pagination                     │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌───────────────────────┐             ┌───────────────────────┐
//! │ UI Layer (ui/)        │             │ Dataset Layer         │
//! │ - Bound view/surfaces │             │ (dataset/)            │
//! │ - Rendering           │             │ - Embedded JSON       │
//! │ - Theming             │             │ - JSON/TOML files     │
//! └───────────────────────┘             └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Book, Catalog, errors (domain/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/book-catalog.wasm" {
//!         catalog_file "~/books/catalog.toml"
//!         color_scheme "dark"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use book_catalog::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! assert_eq!(state.view.list.show_more.label, "Show more (11)");
//!
//! handle_event(&mut state, &Event::ShowMore);
//! assert_eq!(state.view.list.len(), 47);
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod dataset;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, SearchField, Surface};
pub use domain::{Book, Catalog, CatalogError, Result};
pub use ui::theme::{ColorScheme, ThemeVariant};

use dataset::{DatasetProvider, EmbeddedDataset, FileDataset};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/book-catalog.wasm" {
///     catalog_file "~/books/catalog.json"
///     color_scheme "light"
///     trace_level "book_catalog=debug"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Path to a `.json` or `.toml` catalog replacing the compiled-in one.
    ///
    /// A leading `~` expands to the sandbox `/host` mount.
    pub catalog_file: Option<String>,

    /// Host color preference, `dark` or `light`.
    ///
    /// Anything else (or nothing) starts in the day theme.
    pub color_scheme: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values are treated as absent.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use book_catalog::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("color_scheme".to_string(), "dark".to_string());
    /// map.insert("catalog_file".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.color_scheme.as_deref(), Some("dark"));
    /// assert_eq!(config.catalog_file, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        Self {
            catalog_file: value("catalog_file"),
            color_scheme: value("color_scheme"),
            trace_level: value("trace_level"),
        }
    }

    /// Startup theme from the color preference.
    #[must_use]
    pub fn initial_theme(&self) -> ThemeVariant {
        ThemeVariant::from_preference(self.color_scheme.as_deref().and_then(ColorScheme::parse))
    }
}

/// Loads the configured catalog and builds the startup state.
///
/// A catalog file that fails to load is logged and replaced by the
/// compiled-in catalog. The returned state already shows the first page.
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize", catalog_file = ?config.catalog_file).entered();

    let catalog = load_catalog(config);
    let theme = config.initial_theme();
    tracing::debug!(books = catalog.books().len(), theme = %theme, "catalog ready");

    AppState::new(catalog, theme)
}

fn load_catalog(config: &Config) -> Catalog {
    if let Some(path) = &config.catalog_file {
        let path = infrastructure::expand_tilde(path);
        match FileDataset::new(&path).load() {
            Ok(catalog) => return catalog,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "failed to load catalog file, using built-in catalog");
            }
        }
    }

    EmbeddedDataset.load().unwrap_or_else(|e| {
        tracing::error!(error = %e, "built-in catalog is invalid");
        Catalog::default()
    })
}
