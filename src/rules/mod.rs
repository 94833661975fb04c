//! Ordered pattern rules that assign a category to a transaction description.
//!
//! Rules form a precedence chain: the first rule whose pattern is found
//! anywhere in the description wins, so a specific merchant rule placed before
//! a generic payment-processor rule takes priority over it.

mod config;

pub use config::{RuleConfig, RulesConfig};

use crate::errors::{SummaryError, SummaryResult};
use regex::{Regex, RegexBuilder};
use std::path::Path;
use tracing::{debug, trace};

/// Category assigned when no rule matches.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

const BUILTIN_RULES: &str = include_str!("default_rules.json");

/// A category name and the case-insensitive pattern that selects it.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    category: String,
    pattern: Regex,
}

impl CategoryRule {
    pub fn new(category: impl Into<String>, pattern: &str) -> SummaryResult<Self> {
        let category = category.into();
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| SummaryError::InvalidRulePattern {
                category: category.clone(),
                source,
            })?;
        Ok(Self { category, pattern })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn is_match(&self, description: &str) -> bool {
        self.pattern.is_match(description)
    }
}

impl TryFrom<RuleConfig> for CategoryRule {
    type Error = SummaryError;

    fn try_from(config: RuleConfig) -> Result<Self, Self::Error> {
        CategoryRule::new(config.category, &config.pattern)
    }
}

/// Returns the category of the first rule in `rules` matching `description`,
/// or [`UNKNOWN_CATEGORY`].
pub fn categorize<'a>(description: &str, rules: &'a [CategoryRule]) -> &'a str {
    match rules.iter().find(|rule| rule.is_match(description)) {
        Some(rule) => {
            trace!("'{}' -> {}", description, rule.category);
            &rule.category
        }
        None => {
            trace!("'{}' matched no rule", description);
            UNKNOWN_CATEGORY
        }
    }
}

/// An ordered list of [`CategoryRule`]s.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<CategoryRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// The rule list shipped with the crate.
    pub fn builtin() -> SummaryResult<Self> {
        Self::from_json(BUILTIN_RULES)
    }

    pub fn from_config(config: RulesConfig) -> SummaryResult<Self> {
        let rules = config
            .rules
            .into_iter()
            .map(CategoryRule::try_from)
            .collect::<SummaryResult<Vec<_>>>()?;
        debug!("Compiled {} category rule(s)", rules.len());
        Ok(Self::new(rules))
    }

    pub fn from_json(content: &str) -> SummaryResult<Self> {
        Self::from_config(RulesConfig::from_json(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> SummaryResult<Self> {
        Self::from_config(RulesConfig::load(path)?)
    }

    pub fn categorize(&self, description: &str) -> &str {
        categorize(description, &self.rules)
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<CategoryRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = CategoryRule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
