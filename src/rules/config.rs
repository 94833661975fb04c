use crate::errors::{SummaryError, SummaryResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One `(category, pattern)` pair as written in a rules document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleConfig {
    pub category: String,
    pub pattern: String,
}

/// An ordered rules document: a JSON array of [`RuleConfig`].
///
/// ```json
/// [
///   { "category": "Groceries", "pattern": "COSTCO|SAFEWAY" },
///   { "category": "Paypal", "pattern": "PAYPAL" }
/// ]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RulesConfig {
    pub rules: Vec<RuleConfig>,
}

impl RulesConfig {
    pub fn from_json(content: &str) -> SummaryResult<Self> {
        serde_json::from_str(content).map_err(|e| SummaryError::RulesConfig(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> SummaryResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SummaryError::RulesConfig(format!("unable to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }
}
