//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! # Example
//!
//! ```rust
//! use book_catalog::app::AppState;
//! use book_catalog::dataset::{DatasetProvider, EmbeddedDataset};
//! use book_catalog::ui::render;
//! use book_catalog::ui::theme::ThemeVariant;
//!
//! let state = AppState::new(EmbeddedDataset.load()?, ThemeVariant::Night);
//! let viewmodel = render(&state, 24, 80);
//! assert_eq!(viewmodel.show_more.line, 21);
//! # Ok::<(), book_catalog::domain::CatalogError>(())
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Returns the view model that was drawn so the caller can resolve mouse
/// clicks against the same layout.
pub fn render(state: &AppState, rows: usize, cols: usize) -> UIViewModel {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_screen(&viewmodel, cols, rows);
    viewmodel
}
