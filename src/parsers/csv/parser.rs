use super::dto::CsvEntry;
use crate::errors::SummaryResult;
use crate::parsers::traits::Parser;
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

/// Reads an account history export: `date, description, <unused>, amount, ...`.
///
/// Rows keep the order they have in the file; reordering is the builder's job.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvParser {
    has_headers: bool,
}

impl CsvParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the first row. The bank export has no header, so this is off by default.
    pub fn has_headers(mut self, yes: bool) -> Self {
        self.has_headers = yes;
        self
    }
}

impl Parser for CsvParser {
    type Output = CsvEntry;

    fn parse(&self, content: &str) -> SummaryResult<Vec<Self::Output>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(self.has_headers)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut entries = Vec::new();
        let mut skipped = 0usize;
        let mut record = StringRecord::new();

        while reader.read_record(&mut record)? {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let fields: Vec<&str> = record.iter().collect();
            match CsvEntry::from_record(&fields, line)? {
                Some(entry) => entries.push(entry),
                None => skipped += 1,
            }
        }

        debug!("Parsed {} record(s), skipped {} empty", entries.len(), skipped);
        Ok(entries)
    }
}
