//! Client-side pagination over an in-memory list of reports.
//!
//! Pages are 1-based. The page size is fixed for the lifetime of a page view;
//! the current page survives pagination clicks and is only clamped when the
//! list is re-populated.

use std::ops::Range;

/// Number of stories shown per page on the home page.
pub const REPORTS_PER_PAGE: usize = 6;

/// One button in the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageButton {
    pub label: String,
    /// Page the button navigates to.
    pub page: usize,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    per_page: usize,
    total: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Pagination {
    pub fn new(total: usize) -> Self {
        Self::with_page_size(total, REPORTS_PER_PAGE)
    }

    /// A zero page size is treated as one item per page.
    pub fn with_page_size(total: usize, per_page: usize) -> Self {
        Self {
            current_page: 1,
            per_page: per_page.max(1),
            total,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// `ceil(total / per_page)`; zero for an empty list.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page)
    }

    /// Replace the record count, keeping the current page when it still exists.
    pub fn repopulate(&mut self, total: usize) {
        self.total = total;
        let last = self.total_pages().max(1);
        self.current_page = self.current_page.clamp(1, last);
    }

    /// Move to `page`. Returns `false` when nothing changed (same page or out of range).
    pub fn select(&mut self, page: usize) -> bool {
        if page == self.current_page || page == 0 || page > self.total_pages() {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Index range of the current page, bounded by the record count.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * self.per_page).min(self.total);
        let end = (start + self.per_page).min(self.total);
        start..end
    }

    /// The current page's slice of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// Buttons for the pagination bar: Prev, one per page, Next.
    ///
    /// Empty when everything fits on a single page.
    pub fn buttons(&self) -> Vec<PageButton> {
        let total_pages = self.total_pages();
        if total_pages <= 1 {
            return Vec::new();
        }

        let mut buttons = Vec::with_capacity(total_pages + 2);
        if self.current_page > 1 {
            buttons.push(PageButton {
                label: "Prev".to_string(),
                page: self.current_page - 1,
                active: false,
            });
        }
        for page in 1..=total_pages {
            buttons.push(PageButton {
                label: page.to_string(),
                page,
                active: page == self.current_page,
            });
        }
        if self.current_page < total_pages {
            buttons.push(PageButton {
                label: "Next".to_string(),
                page: self.current_page + 1,
                active: false,
            });
        }
        buttons
    }
}
