//! Plain-text console rendering of a [`TransactionCollection`].

use crate::errors::SummaryResult;
use crate::parsers::prelude::CSV_DATE_FORMAT;
use crate::summary::{CategoryTotals, Summary};
use crate::types::{Transaction, TransactionCollection};
use std::io::Write;

pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> SummaryResult<()> {
    writeln!(out, "----------SUMMARY----------")?;
    writeln!(
        out,
        "{:<30} {}",
        "Account period start:",
        summary.period_start.format(CSV_DATE_FORMAT)
    )?;
    writeln!(
        out,
        "{:<30} {}",
        "Account period end:",
        summary.period_end.format(CSV_DATE_FORMAT)
    )?;
    writeln!(out, "{:<30} {}", "Balance over account period:", summary.net_delta)?;
    writeln!(out, "{:<30} {}", "Total withdrawals:", summary.total_withdrawals)?;
    writeln!(out, "{:<30} {}", "Total deposits:", summary.total_deposits)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_categories<W: Write>(out: &mut W, totals: &CategoryTotals) -> SummaryResult<()> {
    writeln!(out, "----------CATEGORIES----------")?;
    for (category, total) in totals.iter() {
        writeln!(out, "{:<40}{}", format!("{category}:"), total)?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_entries<'a, W, I>(out: &mut W, entries: I) -> SummaryResult<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Transaction>,
{
    for txn in entries {
        writeln!(
            out,
            "{:<8} {} {:<14} {:<144} {:<10} {}",
            "Date:",
            txn.date().format(CSV_DATE_FORMAT),
            "Description:",
            txn.description(),
            "Amount:",
            txn.amount()
        )?;
    }
    Ok(())
}

pub fn write_unknown_entries<W: Write>(
    out: &mut W,
    collection: &TransactionCollection,
) -> SummaryResult<()> {
    writeln!(out, "----------UNKNOWN ENTRIES----------")?;
    write_entries(out, collection.unknown_entries())
}

pub fn write_category<W: Write>(
    out: &mut W,
    collection: &TransactionCollection,
    category: &str,
) -> SummaryResult<()> {
    writeln!(out, "----------CATEGORY {category} ENTRIES----------")?;
    write_entries(out, collection.entries_in_category(category))
}

/// Summary, category totals and unknown entries, in that order.
pub fn write_full_report<W: Write>(
    out: &mut W,
    collection: &TransactionCollection,
) -> SummaryResult<()> {
    let summary = collection.summary()?;
    write_summary(out, &summary)?;
    write_categories(out, &collection.category_totals()?)?;
    write_unknown_entries(out, collection)
}
