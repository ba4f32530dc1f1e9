//! Growing page size for "show more".

use crate::config::paging::{INITIAL_PAGE_SIZE, PAGE_SIZE_INCREMENT};

/// Page size of a view. Every "show more" refetches the whole, larger page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    size: u32,
}

impl Pagination {
    /// Start at the initial page size.
    #[must_use]
    pub const fn new() -> Self {
        Self { size: INITIAL_PAGE_SIZE }
    }

    /// Number of papers currently requested.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Grow the page by one increment and return the new size.
    pub fn show_more(&mut self) -> u32 {
        self.size = self.size.saturating_add(PAGE_SIZE_INCREMENT);
        self.size
    }

    /// Back to the initial size.
    pub fn reset(&mut self) {
        self.size = INITIAL_PAGE_SIZE;
    }

    /// More results may exist when the backend returned exactly a full page.
    #[must_use]
    pub const fn has_more(&self, returned: usize) -> bool {
        returned == self.size as usize
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}
