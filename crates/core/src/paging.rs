//! Filter / search / pagination state over an in-memory result set.
//!
//! Any change to the search term, status filter, or page size resets the
//! current page to 1. Out-of-range page navigation is refused rather than
//! clamped to an edge, mirroring pagination controls that disable their
//! buttons past the known total. Slicing guarantees that the per-page
//! slice lengths over all pages sum to the filtered count.

use serde::Serialize;

/// Default page size for case listings.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Client-side view state: active filters plus the current page window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub search: Option<String>,
    pub status_tag: Option<String>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            search: None,
            status_tag: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    /// Set or clear the search term. Resets to page 1.
    pub fn set_search(&mut self, search: Option<String>) {
        self.search = search;
        self.page = 1;
    }

    /// Set or clear the status filter tag. Resets to page 1.
    pub fn set_status_tag(&mut self, tag: Option<String>) {
        self.status_tag = tag;
        self.page = 1;
    }

    /// Change the page size. Resets to page 1; sizes below 1 are lifted to 1.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 1;
    }

    /// Navigate to a page. Requests outside `1..=total_pages` are ignored.
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        if page >= 1 && page <= total_pages {
            self.page = page;
        }
    }

    /// Number of pages for a filtered count: `ceil(count / page_size)`.
    pub fn total_pages(&self, filtered_count: usize) -> usize {
        filtered_count.div_ceil(self.page_size)
    }

    /// Half-open index range of the current page within the filtered set.
    pub fn slice_bounds(&self, filtered_count: usize) -> (usize, usize) {
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(filtered_count);
        (start.min(filtered_count), end)
    }

    /// The current page's slice of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = self.slice_bounds(items.len());
        &items[start..end]
    }
}
