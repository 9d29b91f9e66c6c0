//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Page through line-oriented input
#[derive(Parser, Debug)]
#[command(name = "solidafy-paginate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Paginator configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the items on one page followed by navigation
    Show {
        /// Input file, one item per line; invalid UTF-8 is replaced (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Print page metadata without the items
    Info {
        /// Input file, one item per line; invalid UTF-8 is replaced (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Print the page number window for a collection of a given size
    Pages {
        /// Number of items in the collection
        #[arg(long)]
        total_items: usize,

        #[command(flatten)]
        page: PageArgs,
    },
}

/// Page selection shared by all commands
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Page to show (1-indexed, out-of-range values are clamped)
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    pub page: i64,

    /// Items per page (overrides config)
    #[arg(short = 's', long)]
    pub page_size: Option<usize>,

    /// Width of the page number window (overrides config)
    #[arg(short = 'w', long)]
    pub max_visible: Option<usize>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Human-readable output
    Pretty,
}
