use std::path::{Path, PathBuf};

use rust_decimal::Decimal;

use super::error::ConvertError;
use super::journal::{convert_applied_bill_credits, convert_applied_invoice_credits, group_by_journal_number};
use super::types::*;
use super::validation::{
    find_duplicate_bill_numbers, find_duplicate_invoice_numbers, validate_applied_bill_credits,
    validate_applied_invoice_credits,
};

/// Source of raw Qoyod records, one method per record type.
///
/// Chart of accounts, invoices, bills, and payments are required inputs:
/// a missing file is a [`ConvertError::FileNotFound`]. Applied-credit
/// files are optional and yield an empty list instead. Journal reading
/// takes several paths and silently skips missing files. Implementations
/// locate the header row themselves; callers receive fully materialized
/// lists.
pub trait SourceReader {
    fn read_chart_of_accounts(&self, path: &Path) -> Result<Vec<QoyodAccount>, ConvertError>;
    fn read_invoice_transactions(
        &self,
        path: &Path,
    ) -> Result<Vec<QoyodInvoiceTransaction>, ConvertError>;
    fn read_bill_transactions(
        &self,
        path: &Path,
    ) -> Result<Vec<QoyodBillTransaction>, ConvertError>;
    fn read_payment_transactions(
        &self,
        path: &Path,
    ) -> Result<Vec<QoyodPaymentTransaction>, ConvertError>;
    fn read_journal_lines(&self, paths: &[PathBuf]) -> Result<Vec<QoyodJournalLine>, ConvertError>;
    fn read_applied_invoice_credits(
        &self,
        path: &Path,
    ) -> Result<Vec<QoyodAppliedInvoiceCredit>, ConvertError>;
    fn read_applied_bill_credits(
        &self,
        path: &Path,
    ) -> Result<Vec<QoyodAppliedBillCredit>, ConvertError>;
}

/// Input file locations for a dry run.
#[derive(Debug, Clone)]
pub struct DryRunPaths {
    pub invoices: PathBuf,
    pub bills: PathBuf,
    pub journals: Vec<PathBuf>,
    pub applied_invoice_credits: PathBuf,
    pub applied_bill_credits: PathBuf,
}

/// Summary of a pre-conversion dry run. Rebuilt fresh on every run, never
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct DryRunReport {
    pub total_invoices: usize,
    pub total_bills: usize,
    pub applied_invoice_credits: usize,
    pub applied_bill_credits: usize,
    /// Always starts with a count-of-journals message, so this list is
    /// non-empty whenever any journal file was read.
    pub validation_messages: Vec<String>,
    /// Applied credits whose date could not be inferred.
    pub missing_date_warnings: Vec<String>,
    /// Structurally invalid applied-credit rows.
    pub credit_errors: Vec<String>,
}

impl DryRunReport {
    /// True when any validation message or credit error exists. Note the
    /// journal-count message alone makes this true; "nothing to review"
    /// is a narrower condition than `!has_issues()`.
    pub fn has_issues(&self) -> bool {
        !self.validation_messages.is_empty() || !self.credit_errors.is_empty()
    }
}

/// Read every source record set and assemble a summary report without
/// writing any output.
///
/// The journal balance check here deliberately works on the raw lines
/// rather than calling [`convert_journals`]; its message wording differs
/// from the converter's and downstream consumers rely on both.
///
/// [`convert_journals`]: super::journal::convert_journals
pub fn perform_dry_run<R: SourceReader + ?Sized>(
    reader: &R,
    paths: &DryRunPaths,
) -> Result<DryRunReport, ConvertError> {
    let mut report = DryRunReport::default();

    let invoices = reader.read_invoice_transactions(&paths.invoices)?;
    let bills = reader.read_bill_transactions(&paths.bills)?;
    let journal_lines = reader.read_journal_lines(&paths.journals)?;
    let invoice_credits = reader.read_applied_invoice_credits(&paths.applied_invoice_credits)?;
    let bill_credits = reader.read_applied_bill_credits(&paths.applied_bill_credits)?;

    let converted_invoice_credits = convert_applied_invoice_credits(&invoice_credits, &journal_lines);
    let converted_bill_credits = convert_applied_bill_credits(&bill_credits, &journal_lines);

    let duplicate_invoices = find_duplicate_invoice_numbers(&invoices);
    if !duplicate_invoices.is_empty() {
        report.validation_messages.push(format!(
            "Warning: Found {} duplicate invoice numbers: {}",
            duplicate_invoices.len(),
            duplicate_invoices.join(", ")
        ));
    }

    let duplicate_bills = find_duplicate_bill_numbers(&bills);
    if !duplicate_bills.is_empty() {
        report.validation_messages.push(format!(
            "Warning: Found {} duplicate bill numbers: {}",
            duplicate_bills.len(),
            duplicate_bills.join(", ")
        ));
    }

    let journal_groups = group_by_journal_number(&journal_lines);
    for (number, group) in &journal_groups {
        let debit: Decimal = group.iter().map(|line| line.debit).sum();
        let credit: Decimal = group.iter().map(|line| line.credit).sum();
        if debit != credit {
            report
                .validation_messages
                .push(format!("Error: Journal {number} is unbalanced."));
        }
    }

    report
        .credit_errors
        .extend(validate_applied_invoice_credits(&invoice_credits));
    report
        .credit_errors
        .extend(validate_applied_bill_credits(&bill_credits));

    report.total_invoices = invoices.len();
    report.total_bills = bills.len();
    report.applied_invoice_credits = converted_invoice_credits.records.len();
    report.applied_bill_credits = converted_bill_credits.records.len();

    report
        .missing_date_warnings
        .extend(converted_invoice_credits.warnings);
    report
        .missing_date_warnings
        .extend(converted_bill_credits.warnings);

    report.validation_messages.insert(
        0,
        format!("Found {} journals to process.", journal_groups.len()),
    );

    Ok(report)
}
