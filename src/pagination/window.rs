//! Page arithmetic
//!
//! Pure functions the paginator derives its values from. Nothing here
//! holds state; every result depends only on its arguments.

use super::types::PageRange;
use std::ops::Range;

/// Number of pages needed for `total_items` at `page_size` items per page
///
/// A zero page size yields zero pages rather than dividing by zero.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Zero-based index bounds of a 1-indexed page
///
/// Pages past the end (or page 0) produce an empty range positioned at
/// `total_items`, so slicing with the result never panics.
pub fn page_bounds(page: usize, page_size: usize, total_items: usize) -> Range<usize> {
    if page == 0 {
        return total_items..total_items;
    }
    let start = (page - 1).saturating_mul(page_size).min(total_items);
    let end = page.saturating_mul(page_size).min(total_items);
    start..end
}

/// 1-indexed bounds of a page for display, `{0, 0}` when the page is empty
pub fn page_range(page: usize, page_size: usize, total_items: usize) -> PageRange {
    let bounds = page_bounds(page, page_size, total_items);
    if bounds.is_empty() {
        PageRange::EMPTY
    } else {
        PageRange::new(bounds.start + 1, bounds.end)
    }
}

/// Sliding window of page numbers centered on `current`
///
/// The window keeps `max_visible` entries whenever that many pages exist
/// and shifts toward the available pages at either end instead of shrinking.
/// `current` is clamped into `[1, total_pages]` first.
pub fn page_numbers(current: usize, total_pages: usize, max_visible: usize) -> Vec<usize> {
    if total_pages == 0 || max_visible == 0 {
        return Vec::new();
    }

    let current = current.clamp(1, total_pages);
    let half = max_visible / 2;

    let mut start = current.saturating_sub(half).max(1);
    let end = start.saturating_add(max_visible - 1).min(total_pages);

    if end - start + 1 < max_visible {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }

    (start..=end).collect()
}
