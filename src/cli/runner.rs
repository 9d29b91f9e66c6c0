//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, PageArgs};
use crate::config::{load_config, PaginatorConfig};
use crate::error::{Error, Result, ResultExt};
use crate::pagination::{PageInfo, Paginator};
use serde_json::json;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command against stdin and stdout
    pub fn run(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), &mut stdout.lock())
    }

    /// Run the CLI command with explicit input and output streams
    ///
    /// `input` is only read when a command needs items and no `--input`
    /// file was given.
    pub fn run_with<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Show { input: path, page } => {
                let items = read_items(path.as_deref(), input)?;
                let paginator = build_paginator(items, &config, page)?;
                self.show(&paginator, max_visible(&config, page), out)
            }
            Commands::Info { input: path, page } => {
                let items = read_items(path.as_deref(), input)?;
                let paginator = build_paginator(items, &config, page)?;
                self.info(&paginator.info(max_visible(&config, page)), out)
            }
            Commands::Pages { total_items, page } => {
                let paginator = build_paginator(vec![(); *total_items], &config, page)?;
                let numbers = paginator.page_numbers(max_visible(&config, page));
                self.pages(&numbers, paginator.current_page(), out)
            }
        }
    }

    /// Load the paginator config, falling back to defaults
    fn load_config(&self) -> Result<PaginatorConfig> {
        match &self.cli.config {
            Some(path) => load_config(path),
            None => Ok(PaginatorConfig::default()),
        }
    }

    /// Print one page of items plus navigation
    fn show<W: Write>(
        &self,
        paginator: &Paginator<String>,
        max_visible: usize,
        out: &mut W,
    ) -> Result<()> {
        let info = paginator.info(max_visible);
        match self.cli.format {
            OutputFormat::Json => {
                let msg = json!({
                    "items": paginator.current_items(),
                    "info": info,
                });
                let line = serde_json::to_string(&msg).context("Failed to encode page")?;
                writeln!(out, "{line}")?;
            }
            OutputFormat::Pretty => {
                for item in paginator.current_items() {
                    writeln!(out, "{item}")?;
                }
                if !info.is_empty {
                    writeln!(out)?;
                }
                writeln!(out, "{}", info.label())?;
                if !info.page_numbers.is_empty() {
                    writeln!(
                        out,
                        "Pages: {}",
                        render_page_numbers(&info.page_numbers, info.page)
                    )?;
                }
            }
        }
        Ok(())
    }

    /// Print page metadata
    fn info<W: Write>(&self, info: &PageInfo, out: &mut W) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string(info)?)?;
            }
            OutputFormat::Pretty => {
                writeln!(out, "page: {} of {}", info.page, info.total_pages)?;
                writeln!(out, "page_size: {}", info.page_size)?;
                writeln!(out, "total_items: {}", info.total_items)?;
                writeln!(out, "range: {}", info.range)?;
                writeln!(out, "has_prev_page: {}", info.has_prev_page)?;
                writeln!(out, "has_next_page: {}", info.has_next_page)?;
                writeln!(out, "is_first_page: {}", info.is_first_page)?;
                writeln!(out, "is_last_page: {}", info.is_last_page)?;
                writeln!(out, "is_empty: {}", info.is_empty)?;
                writeln!(
                    out,
                    "pages: {}",
                    render_page_numbers(&info.page_numbers, info.page)
                )?;
            }
        }
        Ok(())
    }

    /// Print the page number window
    fn pages<W: Write>(&self, numbers: &[usize], current: usize, out: &mut W) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(numbers)?)?,
            OutputFormat::Pretty => writeln!(out, "{}", render_page_numbers(numbers, current))?,
        }
        Ok(())
    }
}

/// Build a paginator from config and command-line overrides
fn build_paginator<T>(
    items: Vec<T>,
    config: &PaginatorConfig,
    args: &PageArgs,
) -> Result<Paginator<T>> {
    let mut paginator = Paginator::from_config(items, config)?;
    if let Some(size) = args.page_size {
        paginator.change_page_size(size)?;
    }
    paginator.go_to_page(args.page);
    tracing::debug!(
        page = paginator.current_page(),
        total_pages = paginator.total_pages(),
        "Built paginator"
    );
    Ok(paginator)
}

fn max_visible(config: &PaginatorConfig, args: &PageArgs) -> usize {
    args.max_visible.unwrap_or(config.max_visible_pages)
}

/// Read items, one per line, from a file or the given reader
///
/// Bytes that are not valid UTF-8 are replaced rather than failing the
/// whole read.
fn read_items<R: BufRead>(path: Option<&Path>, input: R) -> Result<Vec<String>> {
    let items = match path {
        Some(path) => {
            let content = fs::read(path).map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    Error::file_not_found(path.display().to_string())
                } else {
                    Error::Io(e)
                }
            })?;
            read_lines_lossy(content.as_slice())
                .with_context(|| format!("Failed to read items from '{}'", path.display()))?
        }
        None => read_lines_lossy(input).context("Failed to read items from stdin")?,
    };
    tracing::debug!(count = items.len(), "Read items");
    Ok(items)
}

/// Split input on `\n`, dropping a trailing `\r` like `BufRead::lines`
fn read_lines_lossy<R: BufRead>(input: R) -> io::Result<Vec<String>> {
    input
        .split(b'\n')
        .map(|line| {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            Ok(String::from_utf8_lossy(&line).into_owned())
        })
        .collect()
}

/// Render a page number window with the current page bracketed
fn render_page_numbers(numbers: &[usize], current: usize) -> String {
    numbers
        .iter()
        .map(|&n| {
            if n == current {
                format!("[{n}]")
            } else {
                n.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_page_numbers() {
        assert_eq!(render_page_numbers(&[3, 4, 5, 6, 7], 5), "3 4 [5] 6 7");
        assert_eq!(render_page_numbers(&[1], 1), "[1]");
        assert_eq!(render_page_numbers(&[], 1), "");
    }

    #[test]
    fn test_read_items_from_reader() {
        let items = read_items(None, "a\nb\n\nc".as_bytes()).unwrap();
        assert_eq!(items, vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_read_items_replaces_invalid_utf8() {
        let input: &[u8] = b"ok\n\xff\xfe bad\r\nnext";
        let items = read_items(None, input).unwrap();
        assert_eq!(items, vec!["ok", "\u{fffd}\u{fffd} bad", "next"]);
    }

    #[test]
    fn test_read_items_file_with_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"first\n\xc3\x28\nlast\n").unwrap();

        let items = read_items(Some(file.path()), io::empty()).unwrap();
        assert_eq!(items, vec!["first", "\u{fffd}(", "last"]);
    }

    #[test]
    fn test_read_items_missing_file() {
        let path = Path::new("/definitely/not/here.txt");
        let err = read_items(Some(path), io::empty()).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
