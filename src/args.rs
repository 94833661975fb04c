//! Command line interface of the `statement-summary` binary.

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

/// statement-summary: categorize a bank account history export.
///
/// Reads the CSV account history (rows of `date, description, comment, amount`,
/// newest first), assigns every transaction a category using ordered pattern
/// rules and prints a summary of money in and money out, the totals per
/// category and the transactions that matched no rule.
#[derive(Debug, Parser, Clone)]
#[command(name = "statement-summary", version)]
pub struct Args {
    /// The bank account statement file to process
    file: PathBuf,

    /// Only list the transactions of this category (case-insensitive)
    #[arg(short, long)]
    category: Option<String>,

    /// A JSON file of ordered `{"category", "pattern"}` rules replacing the built-in list
    #[arg(long, env = "STATEMENT_SUMMARY_RULES")]
    rules: Option<PathBuf>,

    /// Treat the first row of the file as a header and skip it
    #[arg(long)]
    has_headers: bool,

    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,
}

impl Args {
    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn rules(&self) -> Option<&Path> {
        self.rules.as_deref()
    }

    pub fn has_headers(&self) -> bool {
        self.has_headers
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}
