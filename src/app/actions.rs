//! Actions representing side effects to be executed by the plugin runtime.
//!
//! Nearly every event is handled entirely inside [`AppState`](super::AppState);
//! the only effects that reach outside the library are listed here. The plugin
//! shim executes them in order after each event.

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly asks to leave the browser (pressing `q`
    /// on the book list).
    CloseFocus,
}
