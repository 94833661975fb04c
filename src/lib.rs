//! Categorize a bank account's CSV transaction history and summarize it.
//!
//! ```rust,ignore
//! use statement_summary::{RuleSet, StatementBuilder};
//!
//! let transactions = StatementBuilder::new()
//!     .filename("history.csv")
//!     .rules(RuleSet::builtin()?)
//!     .build()?;
//!
//! let summary = transactions.summary()?;
//! for (category, total) in transactions.category_totals()?.iter() {
//!     println!("{category}: {total}");
//! }
//! ```

mod builder;
mod types;

pub mod args;
pub mod errors;
pub mod parsers;
pub mod report;
pub mod rules;
pub mod summary;

pub use builder::StatementBuilder;
pub use errors::{SummaryError, SummaryResult};
pub use parsers::prelude::*;
pub use rules::{categorize, CategoryRule, RuleSet, RulesConfig, UNKNOWN_CATEGORY};
pub use summary::{CategoryTotals, Summary};
pub use types::{Direction, Transaction, TransactionCollection};
