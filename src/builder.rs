use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    errors::{SummaryError, SummaryResult},
    parsers::prelude::*,
    rules::RuleSet,
    types::{Transaction, TransactionCollection},
};
use tracing::{debug, warn};

/// Reads an account export and produces a categorized, chronological
/// [`TransactionCollection`].
#[derive(Default)]
pub struct StatementBuilder {
    content: Option<String>,
    filepath: Option<PathBuf>,
    rules: Option<RuleSet>,
    has_headers: bool,
}

impl StatementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn filename(mut self, filename: impl AsRef<Path>) -> Self {
        self.filepath = Some(filename.as_ref().to_path_buf());
        self
    }

    /// Rules used for categorization. Defaults to [`RuleSet::builtin`].
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn has_headers(mut self, yes: bool) -> Self {
        self.has_headers = yes;
        self
    }

    pub fn build(self) -> SummaryResult<TransactionCollection> {
        let content = match self.content {
            Some(content) => content,
            None => {
                let path = self
                    .filepath
                    .ok_or(SummaryError::MissingContentAndFilepath)?;
                debug!("Reading {}", path.display());
                fs::read_to_string(&path)?
            }
        };

        let rules = match self.rules {
            Some(rules) => rules,
            None => RuleSet::builtin()?,
        };

        let entries = CsvParser::new()
            .has_headers(self.has_headers)
            .parse(&content)?;

        let transactions = entries
            .into_iter()
            .map(|entry| Transaction::categorize(entry, &rules))
            .collect();

        Ok(TransactionCollection::from_ordered(chronological(transactions)))
    }
}

/// Puts rows from a newest-first export into oldest-first order.
///
/// The rows are reversed and then stable-sorted by date, so same-day rows keep
/// their reversed relative order and an export that was not newest-first still
/// comes out chronological.
fn chronological(mut transactions: Vec<Transaction>) -> Vec<Transaction> {
    transactions.reverse();
    if !transactions.is_sorted_by_key(Transaction::date) {
        warn!("Input rows were not listed newest-first; sorting by date");
        transactions.sort_by_key(Transaction::date);
    }
    transactions
}
