//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain and
//! dataset layers. It owns the filter engine, pagination and the interaction
//! dispatcher.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                             ↓
//!                              compute_viewmodel → Renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter`]: Match-set computation from search criteria
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Surface and search field types
//! - [`pagination`]: Page cursor over the match-set
//! - [`session`]: Match-set, cursor and active criteria
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use book_catalog::app::{handle_event, AppState, Event};
//! use book_catalog::dataset::{DatasetProvider, EmbeddedDataset};
//! use book_catalog::ui::theme::ThemeVariant;
//!
//! let mut state = AppState::new(EmbeddedDataset.load()?, ThemeVariant::Day);
//! let (should_render, _actions) = handle_event(&mut state, &Event::ShowMore);
//! assert!(should_render);
//! # Ok::<(), book_catalog::domain::CatalogError>(())
//! ```

pub mod actions;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod pagination;
pub mod session;
pub mod state;

pub use actions::Action;
pub use filter::{filter_books, Choice, FilterCriteria, ANY};
pub use handler::{handle_event, Event};
pub use modes::{SearchField, Surface};
pub use pagination::PageCursor;
pub use session::SessionState;
pub use state::AppState;
