//! # Solidafy Paginate
//!
//! Deterministic client-side pagination over an ordered collection.
//!
//! ## Features
//!
//! - **Paginator**: current page, page size, visible slice and navigation flags
//! - **Page Window**: sliding window of page numbers for navigation controls
//! - **Page Size Policy**: reject or clamp zero page sizes, never divide by zero
//! - **Snapshots**: serializable page state to persist between views
//! - **CLI**: page through line-oriented input from a file or stdin
//!
//! ## Quick Start
//!
//! ```rust
//! use solidafy_paginate::{Paginator, PageRange};
//!
//! let mut paginator = Paginator::new((1..=57).collect::<Vec<u32>>());
//! assert_eq!(paginator.total_pages(), 6);
//!
//! paginator.go_to_page(6);
//! assert_eq!(paginator.range(), PageRange::new(51, 57));
//! assert_eq!(paginator.current_items().len(), 7);
//! assert!(!paginator.has_next_page());
//!
//! paginator.go_to_page(5);
//! assert_eq!(paginator.default_page_numbers(), vec![2, 3, 4, 5, 6]);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  Paginator                   │
//! │  go_to_page  next/prev  first/last  resize   │
//! └──────────────────────┬───────────────────────┘
//!                        │
//! ┌───────────────┬──────┴────────┬──────────────┐
//! │    window     │    config     │     cli      │
//! ├───────────────┼───────────────┼──────────────┤
//! │ total_pages   │ YAML defaults │ show         │
//! │ page_bounds   │ size policy   │ info         │
//! │ page_numbers  │ validation    │ pages        │
//! └───────────────┴───────────────┴──────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Paginator defaults and page size policy
pub mod config;

/// Paginator and page arithmetic
pub mod pagination;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{load_config, load_config_from_str, PageSizePolicy, PaginatorConfig};
pub use error::{Error, Result};
pub use pagination::{PageInfo, PageRange, PageState, Paginator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
