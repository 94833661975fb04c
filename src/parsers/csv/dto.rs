use super::types::{CsvAmount, CsvDate};
use crate::errors::{SummaryError, SummaryResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;

const DATE_FIELD: usize = 0;
const DESCRIPTION_FIELD: usize = 1;
const AMOUNT_FIELD: usize = 3;

/// One parsed row of the account export, not yet categorized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvEntry {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}

impl CsvEntry {
    /// Parses the fields of a single record.
    ///
    /// Returns `Ok(None)` when the record has no fields at all (blank trailing
    /// lines in exports). Column 2 is never read.
    pub fn from_record<S: AsRef<str>>(fields: &[S], line: u64) -> SummaryResult<Option<Self>> {
        if fields.is_empty() {
            return Ok(None);
        }

        let date = CsvDate::from(field(fields, DATE_FIELD, "date", line)?)
            .parse()
            .map_err(|reason| SummaryError::malformed(line, reason))?;
        let description = field(fields, DESCRIPTION_FIELD, "description", line)?.to_string();
        let amount = CsvAmount::from(field(fields, AMOUNT_FIELD, "amount", line)?)
            .parse()
            .map_err(|reason| SummaryError::malformed(line, reason))?;

        Ok(Some(CsvEntry {
            date,
            description,
            amount,
        }))
    }
}

fn field<'a, S: AsRef<str>>(
    fields: &'a [S],
    index: usize,
    name: &str,
    line: u64,
) -> SummaryResult<&'a str> {
    fields.get(index).map(|f| f.as_ref()).ok_or_else(|| {
        SummaryError::malformed(
            line,
            format!(
                "missing {} field (column {}), record has {} field(s)",
                name,
                index + 1,
                fields.len()
            ),
        )
    })
}
