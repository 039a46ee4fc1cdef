//! Offset/limit slicing.

use serde::{Deserialize, Serialize};

/// Default page size when the caller gives none.
pub const DEFAULT_LIMIT: usize = 10;

/// An `[offset, offset + limit)` window over a filtered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Number of matching records to skip.
    pub offset: usize,
    /// Maximum number of records to return.
    pub limit: usize,
}

impl Page {
    /// Create a page window.
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// Apply the window to an already filtered, ordered sequence.
    ///
    /// An offset past the end yields nothing; there is no wraparound.
    pub fn slice<I: IntoIterator>(&self, records: I) -> Vec<I::Item> {
        records
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(0, DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page() {
        let page = Page::default();
        assert_eq!(page.offset, 0);
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn test_slice_window() {
        let page = Page::new(2, 3);
        assert_eq!(page.slice(1..=10), vec![3, 4, 5]);
    }

    #[test]
    fn test_slice_past_end_is_empty() {
        let page = Page::new(10, 5);
        assert!(page.slice(1..=10).is_empty());
    }

    #[test]
    fn test_slice_truncated_at_end() {
        let page = Page::new(8, 5);
        assert_eq!(page.slice(1..=10), vec![9, 10]);
    }
}
