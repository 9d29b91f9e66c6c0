//! CLI module
//!
//! Command-line interface for paging through line-oriented input.
//!
//! # Commands
//!
//! - `show` - Print the items on one page followed by navigation
//! - `info` - Print page metadata
//! - `pages` - Print the page number window for a collection size

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PageArgs};
pub use runner::Runner;
