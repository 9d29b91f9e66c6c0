//! Pagination module
//!
//! # Overview
//!
//! - `Paginator` - owns a collection, the current page and the page size,
//!   and exposes navigation plus derived accessors
//! - `window` - pure page arithmetic (page count, slice bounds, page number window)
//! - `PageInfo` / `PageState` / `PageRange` - serializable values for views and persistence

mod paginator;
mod types;
pub mod window;

pub use paginator::Paginator;
pub use types::{PageInfo, PageRange, PageState};
