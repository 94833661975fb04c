use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Date layout used by the account history export.
pub const CSV_DATE_FORMAT: &str = "%m/%d/%Y";

/// A date as it appears in the first column of the account export.
///
/// The export always writes `MM/DD/YYYY`; no other layout is accepted, so a
/// day-first date is rejected rather than silently swapped.
#[derive(Debug, Clone)]
pub struct CsvDate(String);

impl CsvDate {
    pub fn parse(&self) -> Result<NaiveDate, String> {
        let s = self.0.trim();
        NaiveDate::parse_from_str(s, CSV_DATE_FORMAT)
            .map_err(|e| format!("invalid date '{}' (expected MM/DD/YYYY): {}", self.0, e))
    }
}

impl From<String> for CsvDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CsvDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<CsvDate> for NaiveDate {
    type Error = String;

    fn try_from(date: CsvDate) -> Result<Self, Self::Error> {
        date.parse()
    }
}

/// A signed amount column. Negative values are withdrawals.
#[derive(Debug, Clone)]
pub struct CsvAmount(String);

impl CsvAmount {
    /// Parses plain (`-54.32`) and exponent (`1.5E2`) forms.
    ///
    /// Plain amounts with more fractional digits than a [`Decimal`] can hold
    /// are rejected instead of rounded.
    pub fn parse(&self) -> Result<Decimal, String> {
        let s = self.0.trim();
        let invalid = |e: &dyn std::fmt::Display| format!("invalid amount '{}': {}", self.0, e);

        if s.contains(['e', 'E']) {
            return Decimal::from_scientific(s).map_err(|e| invalid(&e));
        }

        let amount = Decimal::from_str(s).map_err(|e| invalid(&e))?;
        let fraction_digits = s
            .split_once('.')
            .map(|(_, fraction)| fraction.chars().filter(char::is_ascii_digit).count())
            .unwrap_or(0);
        if (amount.scale() as usize) < fraction_digits {
            return Err(invalid(&"more decimal places than can be held exactly"));
        }
        Ok(amount)
    }
}

impl From<&str> for CsvAmount {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<CsvAmount> for Decimal {
    type Error = String;

    fn try_from(amount: CsvAmount) -> Result<Self, Self::Error> {
        amount.parse()
    }
}
