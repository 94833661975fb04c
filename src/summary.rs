use crate::errors::{SummaryError, SummaryResult};
use crate::types::Transaction;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Period and totals over a chronologically ordered set of transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub net_delta: Decimal,
    pub total_withdrawals: Decimal,
    pub total_deposits: Decimal,
}

impl Summary {
    pub fn from_transactions(transactions: &[Transaction]) -> SummaryResult<Self> {
        let (Some(first), Some(last)) = (transactions.first(), transactions.last()) else {
            return Err(SummaryError::EmptyCollection);
        };

        let mut net_delta = Decimal::ZERO;
        let mut total_withdrawals = Decimal::ZERO;
        let mut total_deposits = Decimal::ZERO;

        for txn in transactions {
            let amount = txn.amount();
            net_delta = checked_sum(net_delta, amount, "the net balance")?;
            if amount < Decimal::ZERO {
                total_withdrawals = checked_sum(total_withdrawals, amount, "withdrawals")?;
            } else {
                total_deposits = checked_sum(total_deposits, amount, "deposits")?;
            }
        }

        Ok(Summary {
            period_start: first.date(),
            period_end: last.date(),
            net_delta,
            total_withdrawals,
            total_deposits,
        })
    }
}

/// Sum of amounts per category, iterated in category-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryTotals(BTreeMap<String, Decimal>);

impl CategoryTotals {
    pub fn from_transactions(transactions: &[Transaction]) -> SummaryResult<Self> {
        let mut totals = BTreeMap::new();
        for txn in transactions {
            let total = totals
                .entry(txn.category().to_string())
                .or_insert(Decimal::ZERO);
            *total = checked_sum(*total, txn.amount(), txn.category())?;
        }
        Ok(Self(totals))
    }

    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.0.get(category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.0.iter().map(|(name, total)| (name.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> SummaryResult<Decimal> {
        self.0
            .values()
            .try_fold(Decimal::ZERO, |sum, total| checked_sum(sum, *total, "category totals"))
    }
}

fn checked_sum(total: Decimal, amount: Decimal, what: &str) -> SummaryResult<Decimal> {
    total
        .checked_add(amount)
        .ok_or_else(|| SummaryError::AmountOverflow {
            what: what.to_string(),
        })
}

/// Transactions that matched no rule, in their original order.
pub fn unknown_entries(transactions: &[Transaction]) -> impl Iterator<Item = &Transaction> {
    transactions.iter().filter(|txn| txn.is_unknown())
}

/// Transactions whose category equals `category`, ignoring case.
pub fn entries_in_category<'a>(
    transactions: &'a [Transaction],
    category: &'a str,
) -> impl Iterator<Item = &'a Transaction> {
    let wanted = category.to_lowercase();
    transactions
        .iter()
        .filter(move |txn| txn.category().to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::prelude::CsvEntry;
    use crate::rules::{CategoryRule, RuleSet};
    use rstest::rstest;
    use std::str::FromStr;

    fn rules() -> RuleSet {
        RuleSet::new(vec![
            CategoryRule::new("Groceries", "COSTCO|SAFEWAY").unwrap(),
            CategoryRule::new("Income", "PAYROLL").unwrap(),
            CategoryRule::new("Eating Out", "STARBUCKS").unwrap(),
        ])
    }

    fn txn(date: (i32, u32, u32), description: &str, amount: &str) -> Transaction {
        let entry = CsvEntry {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            description: description.to_string(),
            amount: Decimal::from_str(amount).unwrap(),
        };
        Transaction::categorize(entry, &rules())
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn((2024, 1, 2), "ACME PAYROLL", "2500.00"),
            txn((2024, 1, 5), "COSTCO WHOLESALE #123", "-54.32"),
            txn((2024, 1, 9), "MYSTERY SHOP", "-19.99"),
            txn((2024, 1, 12), "STARBUCKS 0042", "-4.75"),
            txn((2024, 1, 20), "SAFEWAY #1811", "-23.10"),
            txn((2024, 1, 28), "REFUND MYSTERY SHOP", "19.99"),
            txn((2024, 1, 31), "STARBUCKS 0042", "-0.10"),
        ]
    }

    #[test]
    fn test_single_transaction() {
        let summary = Summary::from_transactions(&[txn((2024, 3, 2), "ACME PAYROLL", "100.00")])
            .unwrap();
        assert_eq!(summary.period_start, summary.period_end);
        assert_eq!(summary.net_delta, dec("100.00"));
        assert_eq!(summary.total_withdrawals, Decimal::ZERO);
        assert_eq!(summary.total_deposits, dec("100.00"));
    }

    #[test]
    fn test_empty_collection() {
        let err = Summary::from_transactions(&[]).unwrap_err();
        assert!(matches!(err, SummaryError::EmptyCollection));
    }

    #[test]
    fn test_summary_totals() {
        let summary = Summary::from_transactions(&sample()).unwrap();
        assert_eq!(summary.period_start, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(summary.period_end, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(summary.total_deposits, dec("2519.99"));
        assert_eq!(summary.total_withdrawals, dec("-102.26"));
        assert_eq!(summary.net_delta, dec("2417.73"));
        assert_eq!(
            summary.total_withdrawals + summary.total_deposits,
            summary.net_delta
        );
    }

    #[test]
    fn test_zero_amount_counts_as_deposit() {
        let summary = Summary::from_transactions(&[
            txn((2024, 1, 1), "FEE REVERSAL", "0.00"),
            txn((2024, 1, 2), "COSTCO", "-1.00"),
        ])
        .unwrap();
        assert_eq!(summary.total_deposits, Decimal::ZERO);
        assert_eq!(summary.total_withdrawals, dec("-1.00"));
    }

    #[test]
    fn test_sums_are_exact() {
        let txns: Vec<_> = (1..=10)
            .map(|day| txn((2024, 2, day), "STARBUCKS", "0.10"))
            .collect();
        let summary = Summary::from_transactions(&txns).unwrap();
        assert_eq!(summary.net_delta, dec("1.00"));
        assert_eq!(
            CategoryTotals::from_transactions(&txns).unwrap().get("Eating Out"),
            Some(dec("1.00"))
        );
    }

    #[rstest]
    #[case("PAYROLL", "79228162514264337593543950335", "Income")]
    #[case("COSTCO", "-79228162514264337593543950335", "Groceries")]
    fn test_sum_past_decimal_range_is_an_error(
        #[case] description: &str,
        #[case] amount: &str,
        #[case] category: &str,
    ) {
        let txns = vec![
            txn((2024, 1, 1), description, amount),
            txn((2024, 1, 2), description, amount),
        ];
        assert!(matches!(
            Summary::from_transactions(&txns),
            Err(SummaryError::AmountOverflow { .. })
        ));
        assert!(matches!(
            CategoryTotals::from_transactions(&txns),
            Err(SummaryError::AmountOverflow { ref what }) if what == category
        ));
    }

    #[test]
    fn test_category_totals_total_overflow() {
        let max = Decimal::MAX.to_string();
        let txns = vec![
            txn((2024, 1, 1), "PAYROLL", &max),
            txn((2024, 1, 2), "STARBUCKS", "1"),
        ];
        // Each category fits on its own; their sum does not.
        let totals = CategoryTotals::from_transactions(&txns).unwrap();
        assert!(matches!(totals.total(), Err(SummaryError::AmountOverflow { .. })));
    }

    #[test]
    fn test_category_totals_sorted_by_name() {
        let totals = CategoryTotals::from_transactions(&sample()).unwrap();
        let names: Vec<_> = totals.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Eating Out", "Groceries", "Income", "Unknown"]);
        assert_eq!(totals.get("Groceries"), Some(dec("-77.42")));
        assert_eq!(totals.get("Eating Out"), Some(dec("-4.85")));
        assert_eq!(totals.get("Unknown"), Some(dec("0.00")));
        assert_eq!(totals.get("Pets"), None);
    }

    #[test]
    fn test_category_totals_sum_to_net_delta() {
        let txns = sample();
        let summary = Summary::from_transactions(&txns).unwrap();
        let totals = CategoryTotals::from_transactions(&txns).unwrap();
        assert_eq!(totals.len(), 4);
        assert_eq!(totals.total().unwrap(), summary.net_delta);
    }

    #[test]
    fn test_unknown_entries_keep_order() {
        let txns = sample();
        let unknown: Vec<_> = unknown_entries(&txns).map(|t| t.description()).collect();
        assert_eq!(unknown, ["MYSTERY SHOP", "REFUND MYSTERY SHOP"]);
        assert!(unknown_entries(&txns[..2]).next().is_none());
    }

    #[rstest]
    #[case("Eating Out", 2)]
    #[case("eating out", 2)]
    #[case("GROCERIES", 2)]
    #[case("unknown", 2)]
    #[case("Pets", 0)]
    fn test_entries_in_category(#[case] category: &str, #[case] expected: usize) {
        let txns = sample();
        assert_eq!(entries_in_category(&txns, category).count(), expected);
    }

    #[test]
    fn test_summary_serialization() {
        let summary = Summary::from_transactions(&sample()).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["period_start"], "2024-01-02");
        assert_eq!(json["net_delta"], "2417.73");

        let totals = serde_json::to_value(CategoryTotals::from_transactions(&sample()).unwrap()).unwrap();
        assert_eq!(totals["Groceries"], "-77.42");
    }
}
