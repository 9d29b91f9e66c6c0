//! Pagination value types
//!
//! Small serializable values handed to rendering layers and persisted by
//! callers between views.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-indexed bounds of the items shown on a page
///
/// Both ends are inclusive. An empty page is `{0, 0}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageRange {
    /// Position of the first visible item
    pub start: usize,
    /// Position of the last visible item
    pub end: usize,
}

impl PageRange {
    /// Range of a page with no items
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Create a new range
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check if the range covers no items
    pub fn is_empty(&self) -> bool {
        self.start == 0 || self.end < self.start
    }

    /// Number of items covered
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Snapshot of the mutable part of a paginator
///
/// Items are not included; callers restore a snapshot against whatever
/// collection they currently hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// Current page (1-indexed)
    pub page: usize,
    /// Items per page
    pub page_size: usize,
}

impl PageState {
    /// Create a new snapshot
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }
}

/// Everything a view needs to render one page's navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub range: PageRange,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub is_empty: bool,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub page_numbers: Vec<usize>,
}

impl PageInfo {
    /// Human-readable summary, e.g. "Showing 21-30 of 57"
    pub fn label(&self) -> String {
        if self.range.is_empty() {
            "No items".to_string()
        } else {
            format!("Showing {} of {}", self.range, self.total_items)
        }
    }
}
