//! Paginator implementation
//!
//! Owns a collection plus the current page and page size. All derived
//! values (page count, visible slice, range, flags) are computed on every
//! read from those three inputs; nothing is cached.

use super::types::{PageInfo, PageRange, PageState};
use super::window;
use crate::config::{
    PageSizePolicy, PaginatorConfig, DEFAULT_MAX_VISIBLE_PAGES, DEFAULT_PAGE_SIZE,
};
use crate::error::Result;
use tracing::{debug, warn};

/// Client-side paginator over an ordered collection
///
/// `current_page` is 1-indexed and stays within `[1, total_pages]` after
/// every navigation call. Empty collections keep it at 1.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Vec<T>,
    page_size: usize,
    current_page: usize,
    policy: PageSizePolicy,
}

impl<T> Paginator<T> {
    /// Create a paginator with the default page size
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
            policy: PageSizePolicy::default(),
        }
    }

    /// Create a paginator with a custom page size
    ///
    /// A zero size is handled by the default policy, i.e. rejected.
    pub fn with_page_size(items: Vec<T>, page_size: usize) -> Result<Self> {
        let mut paginator = Self::new(items);
        paginator.page_size = paginator.policy.apply(page_size)?;
        Ok(paginator)
    }

    /// Create a paginator from a config
    ///
    /// The config's own policy decides what a zero page size means.
    pub fn from_config(items: Vec<T>, config: &PaginatorConfig) -> Result<Self> {
        let policy = config.page_size_policy;
        Ok(Self {
            items,
            page_size: policy.apply(config.page_size)?,
            current_page: 1,
            policy,
        })
    }

    /// Set the policy used by later page size changes
    #[must_use]
    pub fn with_policy(mut self, policy: PageSizePolicy) -> Self {
        self.policy = policy;
        self
    }

    // ------------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------------

    /// All items, regardless of page
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replace the collection
    ///
    /// The current page is left untouched, so it may briefly point past the
    /// last page of a shorter collection. Accessors stay well-defined in that
    /// state and the next navigation call clamps it.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Consume the paginator, returning the collection
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn policy(&self) -> PageSizePolicy {
        self.policy
    }

    /// Snapshot the current page and page size
    pub fn state(&self) -> PageState {
        PageState::new(self.current_page, self.page_size)
    }

    /// Restore a snapshot taken with [`Paginator::state`]
    ///
    /// The page size goes through the policy; the page is clamped to the
    /// current collection. On error nothing changes.
    pub fn restore(&mut self, state: PageState) -> Result<()> {
        self.page_size = self.checked_page_size(state.page_size)?;
        self.current_page = self.clamp_page(i64::try_from(state.page).unwrap_or(i64::MAX));
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------------

    /// Number of pages, zero for an empty collection
    pub fn total_pages(&self) -> usize {
        window::total_pages(self.items.len(), self.page_size)
    }

    /// Items on the current page
    pub fn current_items(&self) -> &[T] {
        let bounds = window::page_bounds(self.current_page, self.page_size, self.items.len());
        &self.items[bounds]
    }

    /// 1-indexed bounds of the current page for display
    pub fn range(&self) -> PageRange {
        window::page_range(self.current_page, self.page_size, self.items.len())
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages()
    }

    /// Window of at most `max_visible` page numbers around the current page
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        window::page_numbers(self.current_page, self.total_pages(), max_visible)
    }

    /// Page number window with the default width of 5
    pub fn default_page_numbers(&self) -> Vec<usize> {
        self.page_numbers(DEFAULT_MAX_VISIBLE_PAGES)
    }

    /// Collect all derived values for rendering
    pub fn info(&self, max_visible: usize) -> PageInfo {
        PageInfo {
            page: self.current_page,
            page_size: self.page_size,
            total_items: self.items.len(),
            total_pages: self.total_pages(),
            range: self.range(),
            has_next_page: self.has_next_page(),
            has_prev_page: self.has_prev_page(),
            is_empty: self.is_empty(),
            is_first_page: self.is_first_page(),
            is_last_page: self.is_last_page(),
            page_numbers: self.page_numbers(max_visible),
        }
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    /// Jump to a page, clamping out-of-range input
    pub fn go_to_page(&mut self, page: i64) {
        let target = self.clamp_page(page);
        if i64::try_from(target).ok() != Some(page) {
            debug!(requested = page, page = target, "Clamped page request");
        }
        self.current_page = target;
    }

    /// Advance one page; no-op on the last page
    pub fn next_page(&mut self) {
        if self.has_next_page() {
            self.current_page += 1;
        }
    }

    /// Go back one page; no-op on the first page
    pub fn prev_page(&mut self) {
        if self.has_prev_page() {
            self.current_page -= 1;
        }
    }

    pub fn first_page(&mut self) {
        self.current_page = 1;
    }

    /// Jump to the last page (page 1 when the collection is empty)
    pub fn last_page(&mut self) {
        self.current_page = self.total_pages().max(1);
    }

    /// Alias for [`Paginator::first_page`]
    pub fn reset(&mut self) {
        self.first_page();
    }

    /// Change the page size and return to page 1
    ///
    /// With [`PageSizePolicy::Reject`] a zero size returns an error and leaves
    /// both page size and current page as they were.
    pub fn change_page_size(&mut self, size: usize) -> Result<()> {
        self.page_size = self.checked_page_size(size)?;
        self.current_page = 1;
        debug!(page_size = self.page_size, "Changed page size");
        Ok(())
    }

    fn checked_page_size(&self, size: usize) -> Result<usize> {
        self.policy.apply(size).inspect_err(|_| {
            warn!(size, "Rejected page size, keeping {}", self.page_size);
        })
    }

    fn clamp_page(&self, page: i64) -> usize {
        let total = self.total_pages().max(1);
        let total = i64::try_from(total).unwrap_or(i64::MAX);
        page.clamp(1, total) as usize
    }
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> FromIterator<T> for Paginator<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
