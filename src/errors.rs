use thiserror::Error;

/// Errors raised while turning an account export into a summary
#[derive(Error, Debug)]
pub enum SummaryError {
    /// A non-empty record could not be turned into a transaction
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// Aggregation was asked for on zero transactions
    #[error("No transactions found: the statement period is undefined")]
    EmptyCollection,

    /// A running total went past the range of an exact decimal
    #[error("Amount overflow while summing {what}")]
    AmountOverflow { what: String },

    /// The CSV reader itself failed (bad quoting, invalid UTF-8, ...)
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    /// Reading the input file or writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The builder was called with neither content nor a file path
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,

    // ── Category rules ─────────────────────────────────────────────────────────

    /// A rule pattern is not a valid regular expression
    #[error("Invalid pattern for category '{category}': {source}")]
    InvalidRulePattern {
        category: String,
        #[source]
        source: regex::Error,
    },

    /// The rules document could not be read or deserialized
    #[error("Invalid rules configuration: {0}")]
    RulesConfig(String),
}

impl SummaryError {
    pub(crate) fn malformed(line: u64, reason: impl Into<String>) -> Self {
        SummaryError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}

/// Result alias for everything in this crate
pub type SummaryResult<T> = Result<T, SummaryError>;
