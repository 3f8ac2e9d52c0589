//! Page cursor for incremental list reveal.

use std::ops::Range;

/// Counts how many page-sized chunks of the match-set have been revealed.
///
/// Always at least 1. Reset whenever the match-set is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor(usize);

impl Default for PageCursor {
    fn default() -> Self {
        Self(1)
    }
}

impl PageCursor {
    #[must_use]
    pub const fn pages(self) -> usize {
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 1;
    }

    /// Index range of the page after the ones already revealed.
    ///
    /// The range is not clamped to the match-set length; callers slice with
    /// [`clamp_range`].
    #[must_use]
    pub const fn next_page(self, page_size: usize) -> Range<usize> {
        self.0 * page_size..(self.0 + 1) * page_size
    }

    pub fn advance(&mut self) {
        self.0 += 1;
    }

    /// Number of entries revealed for a match-set of `total` entries.
    #[must_use]
    pub fn revealed(self, total: usize, page_size: usize) -> usize {
        total.min(self.0 * page_size)
    }
}

/// Clamps an index range to `len`, yielding an empty range past the end.
#[must_use]
pub fn clamp_range(range: Range<usize>, len: usize) -> Range<usize> {
    range.start.min(len)..range.end.min(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one_page() {
        let cursor = PageCursor::default();
        assert_eq!(cursor.pages(), 1);
        assert_eq!(cursor.next_page(36), 36..72);
    }

    #[test]
    fn advance_and_reset() {
        let mut cursor = PageCursor::default();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.pages(), 3);
        assert_eq!(cursor.revealed(150, 36), 108);
        assert_eq!(cursor.revealed(100, 36), 100);

        cursor.reset();
        assert_eq!(cursor.pages(), 1);
    }

    #[test]
    fn clamp_range_handles_tail_and_overflow() {
        assert_eq!(clamp_range(36..72, 50), 36..50);
        assert_eq!(clamp_range(72..108, 50), 50..50);
        assert!(clamp_range(72..108, 50).is_empty());
    }
}
