//! Surface and focus types for the interaction state machine.
//!
//! Each overlay [`Surface`] is opened and closed independently; nothing couples
//! them. The plugin shim routes keys to the topmost open surface using
//! [`Surface::PRECEDENCE`], falling back to the book list when none is open.
//!
//! # Example
//!
//! ```rust
//! use book_catalog::app::modes::{SearchField, Surface};
//!
//! assert_eq!(SearchField::Title.next(), SearchField::Genre);
//! assert_eq!(Surface::PRECEDENCE[0], Surface::Settings);
//! ```

/// An overlay that can be open on top of the book list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Search form (title, genre, author).
    Search,
    /// Settings form (theme).
    Settings,
    /// Detail view of one book.
    Detail,
}

impl Surface {
    /// Input routing order, topmost first.
    pub const PRECEDENCE: [Self; 3] = [Self::Settings, Self::Search, Self::Detail];
}

/// Focused field within the search form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchField {
    /// Free-text title query. Focused whenever the search overlay opens.
    #[default]
    Title,
    Genre,
    Author,
}

impl SearchField {
    /// Next field in tab order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Genre,
            Self::Genre => Self::Author,
            Self::Author => Self::Title,
        }
    }

    /// Previous field in tab order, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Genre => Self::Title,
            Self::Author => Self::Genre,
        }
    }
}
