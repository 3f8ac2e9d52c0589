//! User interface layer: the bound view, its surfaces, and terminal rendering.
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`view`]: Every interactive surface, built once at startup
//! - [`list`]: Paginated book list and its "show more" control
//! - [`form`]: Search and settings form state
//! - [`detail`]: Detail overlay content for one book
//! - [`theme`]: Day/night style variables and ANSI escape sequences
//! - [`viewmodel`]: View model types and click hit-testing
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared text utilities (truncation, wrapping, highlighting)

pub mod components;
pub mod detail;
pub mod form;
pub mod helpers;
pub mod list;
pub mod renderer;
pub mod theme;
pub mod view;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{StyleVariables, Theme, ThemeVariant};
pub use view::View;
pub use viewmodel::{HitTarget, UIViewModel};
