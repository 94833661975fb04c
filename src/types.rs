use crate::parsers::prelude::CsvEntry;
use crate::rules::RuleSet;
use crate::summary::{self, CategoryTotals, Summary};
use crate::errors::SummaryResult;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Sign of a transaction amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Withdrawal,
    Deposit,
}

impl Direction {
    /// Negative amounts are withdrawals, everything else (zero included) is a deposit.
    pub fn of(amount: Decimal) -> Self {
        if amount < Decimal::ZERO {
            Direction::Withdrawal
        } else {
            Direction::Deposit
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Withdrawal => f.write_str("withdrawal"),
            Direction::Deposit => f.write_str("deposit"),
        }
    }
}

/// A parsed and categorized account entry.
///
/// The category is assigned once, when the entry is categorized, and cannot be
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    date: NaiveDate,
    description: String,
    amount: Decimal,
    category: String,
}

impl Transaction {
    pub fn categorize(entry: CsvEntry, rules: &RuleSet) -> Self {
        let category = rules.categorize(&entry.description).to_string();
        Transaction {
            date: entry.date,
            description: entry.description,
            amount: entry.amount,
            category,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn direction(&self) -> Direction {
        Direction::of(self.amount)
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_unknown(&self) -> bool {
        self.category == crate::rules::UNKNOWN_CATEGORY
    }
}

/// Transactions in ascending date order, oldest first.
#[derive(Debug, Clone, Default)]
pub struct TransactionCollection {
    transactions: Vec<Transaction>,
}

impl TransactionCollection {
    /// Wraps transactions that are already in chronological order.
    pub(crate) fn from_ordered(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn summary(&self) -> SummaryResult<Summary> {
        Summary::from_transactions(&self.transactions)
    }

    pub fn category_totals(&self) -> SummaryResult<CategoryTotals> {
        CategoryTotals::from_transactions(&self.transactions)
    }

    pub fn unknown_entries(&self) -> impl Iterator<Item = &Transaction> {
        summary::unknown_entries(&self.transactions)
    }

    pub fn entries_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a Transaction> {
        summary::entries_in_category(&self.transactions, category)
    }
}

impl<'a> IntoIterator for &'a TransactionCollection {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
