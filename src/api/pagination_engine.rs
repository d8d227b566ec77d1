use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::pagination;

use super::PaginationConfig;

/// Snapshot of every derived pagination value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Page window over an owned ordered collection.
///
/// The requested page is stored as-is and clamped on every read, so the
/// engine never reports a page outside `[1, total_pages]` no matter how the
/// collection changed since the page was set. Collection mutations also write
/// the clamped page back, which keeps a shrink-then-grow sequence from
/// jumping back to a stale page.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationEngine<T> {
    items: Vec<T>,
    page: usize,
    page_size: usize,
}

impl<T> PaginationEngine<T> {
    #[must_use]
    pub fn new(items: Vec<T>, config: PaginationConfig) -> Self {
        let page_size = config.initial_page_size.max(1);
        let total_pages = pagination::total_pages(items.len(), page_size);
        Self {
            page: pagination::clamp_page(config.initial_page, total_pages),
            items,
            page_size,
        }
    }

    #[must_use]
    pub fn with_defaults(items: Vec<T>) -> Self {
        Self::new(items, PaginationConfig::default())
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        pagination::clamp_page(self.page, self.total_pages())
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.items.len(), self.page_size)
    }

    #[must_use]
    pub fn start_index(&self) -> usize {
        self.bounds().0
    }

    /// Exclusive end of the current page.
    #[must_use]
    pub fn end_index(&self) -> usize {
        self.bounds().1
    }

    #[must_use]
    pub fn paginated_data(&self) -> &[T] {
        let (start, end) = self.bounds();
        &self.items[start..end]
    }

    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.current_page() < self.total_pages()
    }

    #[must_use]
    pub fn has_prev_page(&self) -> bool {
        self.current_page() > 1
    }

    #[must_use]
    pub fn window(&self) -> PageWindow {
        let (start_index, end_index) = self.bounds();
        PageWindow {
            current_page: self.current_page(),
            page_size: self.page_size,
            total_pages: self.total_pages(),
            total_items: self.items.len(),
            start_index,
            end_index,
            has_next_page: self.has_next_page(),
            has_prev_page: self.has_prev_page(),
        }
    }

    /// Page numbers to show in a button row of at most `max_visible` entries.
    #[must_use]
    pub fn visible_page_range(&self, max_visible: usize) -> RangeInclusive<usize> {
        pagination::visible_page_range(self.current_page(), self.total_pages(), max_visible)
    }

    /// Moves to `page`, clamped into `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = pagination::clamp_page(page, self.total_pages());
        trace!(requested = page, page = self.page, "go to page");
    }

    pub fn next_page(&mut self) {
        if self.has_next_page() {
            self.go_to_page(self.current_page() + 1);
        }
    }

    pub fn prev_page(&mut self) {
        if self.has_prev_page() {
            self.go_to_page(self.current_page() - 1);
        }
    }

    pub fn first_page(&mut self) {
        self.go_to_page(1);
    }

    pub fn last_page(&mut self) {
        self.go_to_page(self.total_pages());
    }

    /// Changes the page size (minimum 1) and restarts from the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
        debug!(
            requested = page_size,
            page_size = self.page_size,
            total_pages = self.total_pages(),
            "set page size"
        );
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.settle_after_items_change();
        debug!(count = self.items.len(), "set items");
    }

    pub fn push_item(&mut self, item: T) {
        self.items.push(item);
        trace!(count = self.items.len(), "push item");
    }

    /// Mutates the collection in place, then re-clamps the current page.
    pub fn update_items<F>(&mut self, update: F)
    where
        F: FnOnce(&mut Vec<T>),
    {
        update(&mut self.items);
        self.settle_after_items_change();
        debug!(count = self.items.len(), "update items");
    }

    fn settle_after_items_change(&mut self) {
        let clamped = self.current_page();
        if clamped != self.page {
            trace!(from = self.page, to = clamped, "clamp page after items change");
            self.page = clamped;
        }
    }

    fn bounds(&self) -> (usize, usize) {
        pagination::page_bounds(self.current_page(), self.page_size, self.items.len())
    }
}
