//! XLSX source reader for Qoyod export files.
//!
//! Qoyod statements carry a variable amount of preamble (report title,
//! date range, totals) above the actual table, so each reader locates the
//! header row by matching a known set of column names case-insensitively
//! within the first [`HEADER_SCAN_ROWS`] rows, then maps named columns
//! positionally.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use calamine::{Data, DataType as _, Reader, Xlsx, open_workbook};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::core::{
    ConvertError, QoyodAccount, QoyodAppliedBillCredit, QoyodAppliedInvoiceCredit,
    QoyodBillTransaction, QoyodInvoiceTransaction, QoyodJournalLine, QoyodPaymentTransaction,
    SALES_INVOICE_MARKER, SourceReader,
};

/// How many leading rows are searched for the header row.
pub const HEADER_SCAN_ROWS: usize = 20;

const ACCOUNT_COLUMNS: &[&str] = &[
    "Account Code",
    "Account Name",
    "Account Type",
    "Description",
    "Parent Account",
    "Payable/Receivable",
];

const INVOICE_COLUMNS: &[&str] = &[
    "Date",
    "Account",
    "Transaction Type",
    "Description",
    "Invoice Number",
    "Total Amount",
];

const BILL_COLUMNS: &[&str] = &[
    "Date",
    "Account",
    "Description",
    "Transaction Type",
    "Bill Number",
    "Amount",
];

const PAYMENT_COLUMNS: &[&str] = &[
    "Date",
    "Contact",
    "Payment Account",
    "Transaction Type",
    "Invoice Number",
    "Amount",
];

const JOURNAL_COLUMNS: &[&str] = &[
    "Journal Number",
    "Date",
    "Notes",
    "Reference",
    "Description",
    "Debit",
    "Credit",
    "Account",
    "Currency",
];

const INVOICE_CREDIT_COLUMNS: &[&str] = &[
    "Date",
    "Journal Number",
    "Invoice Date",
    "Invoice Number",
    "Amount",
];

const BILL_CREDIT_COLUMNS: &[&str] =
    &["Date", "Journal Number", "Bill Date", "Bill Number", "Amount"];

/// Reads Qoyod XLSX exports from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxReader;

impl XlsxReader {
    pub fn new() -> Self {
        Self
    }
}

impl SourceReader for XlsxReader {
    fn read_chart_of_accounts(&self, path: &Path) -> Result<Vec<QoyodAccount>, ConvertError> {
        let sheet = Sheet::open_required(path, ACCOUNT_COLUMNS)?;
        let mut accounts = Vec::new();

        for row in &sheet.rows {
            let code = sheet.text(row, "Account Code");
            if code.is_empty() {
                continue;
            }
            accounts.push(QoyodAccount {
                code,
                name: sheet.text(row, "Account Name"),
                account_type: sheet.text(row, "Account Type"),
                description: sheet.text(row, "Description"),
                parent_code: parse_parent_code(&sheet.text(row, "Parent Account")),
                payable_receivable: sheet
                    .text(row, "Payable/Receivable")
                    .eq_ignore_ascii_case("yes"),
            });
        }
        Ok(accounts)
    }

    fn read_invoice_transactions(
        &self,
        path: &Path,
    ) -> Result<Vec<QoyodInvoiceTransaction>, ConvertError> {
        let sheet = Sheet::open_required(path, INVOICE_COLUMNS)?;
        let mut transactions = Vec::new();

        for row in &sheet.rows {
            if sheet.text(row, "Transaction Type") != SALES_INVOICE_MARKER {
                continue;
            }
            let Some(invoice_date) = sheet.date(row, "Date") else {
                continue;
            };
            transactions.push(QoyodInvoiceTransaction {
                invoice_date,
                account_name: sheet.text(row, "Account"),
                description: sheet.text(row, "Description"),
                invoice_number: sheet.text(row, "Invoice Number"),
                total_amount: sheet.decimal(row, "Total Amount"),
            });
        }
        Ok(transactions)
    }

    fn read_bill_transactions(
        &self,
        path: &Path,
    ) -> Result<Vec<QoyodBillTransaction>, ConvertError> {
        let sheet = Sheet::open_required(path, BILL_COLUMNS)?;
        let mut transactions = Vec::new();

        for row in &sheet.rows {
            if sheet.text(row, "Transaction Type") != "bill" {
                continue;
            }
            let Some(bill_date) = sheet.date(row, "Date") else {
                continue;
            };
            transactions.push(QoyodBillTransaction {
                bill_date,
                account_name: sheet.text(row, "Account"),
                description: sheet.text(row, "Description"),
                bill_number: sheet.text(row, "Bill Number"),
                total_amount: sheet.decimal(row, "Amount"),
            });
        }
        Ok(transactions)
    }

    fn read_payment_transactions(
        &self,
        path: &Path,
    ) -> Result<Vec<QoyodPaymentTransaction>, ConvertError> {
        let sheet = Sheet::open_required(path, PAYMENT_COLUMNS)?;
        let mut payments = Vec::new();

        for row in &sheet.rows {
            if sheet.text(row, "Transaction Type") != "customer_payment" {
                continue;
            }
            let Some(payment_date) = sheet.date(row, "Date") else {
                continue;
            };
            payments.push(QoyodPaymentTransaction {
                payment_date,
                customer_name: sheet.text(row, "Contact"),
                invoice_number: sheet.text(row, "Invoice Number"),
                amount: sheet.decimal(row, "Amount"),
                payment_account: sheet.text(row, "Payment Account"),
            });
        }
        Ok(payments)
    }

    /// Journal exports are often split across several files (one per
    /// period). Missing files are skipped, not an error.
    fn read_journal_lines(&self, paths: &[PathBuf]) -> Result<Vec<QoyodJournalLine>, ConvertError> {
        let mut lines = Vec::new();

        for path in paths {
            if !path.exists() {
                continue;
            }
            let sheet = Sheet::open(path, JOURNAL_COLUMNS)?;
            for row in &sheet.rows {
                let journal_number = sheet.text(row, "Journal Number");
                if journal_number.is_empty() {
                    continue;
                }
                let Some(journal_date) = sheet.date(row, "Date") else {
                    continue;
                };
                lines.push(QoyodJournalLine {
                    journal_number,
                    journal_date,
                    notes: sheet.text(row, "Notes"),
                    reference_number: sheet.text(row, "Reference"),
                    description: sheet.text(row, "Description"),
                    debit: sheet.decimal(row, "Debit"),
                    credit: sheet.decimal(row, "Credit"),
                    account: sheet.text(row, "Account"),
                    currency: sheet.text(row, "Currency"),
                });
            }
        }
        Ok(lines)
    }

    /// Applied-credit exports are optional: a missing file means zero
    /// records, not a failure.
    fn read_applied_invoice_credits(
        &self,
        path: &Path,
    ) -> Result<Vec<QoyodAppliedInvoiceCredit>, ConvertError> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let sheet = Sheet::open(path, INVOICE_CREDIT_COLUMNS)?;
        let mut records = Vec::new();

        for row in &sheet.rows {
            let journal_number = sheet.text(row, "Journal Number");
            let invoice_number = sheet.text(row, "Invoice Number");
            if journal_number.is_empty() && invoice_number.is_empty() {
                continue;
            }
            records.push(QoyodAppliedInvoiceCredit {
                date: sheet.date(row, "Date"),
                journal_number,
                invoice_date: sheet.date(row, "Invoice Date"),
                invoice_number,
                amount: sheet.decimal(row, "Amount"),
            });
        }
        Ok(records)
    }

    fn read_applied_bill_credits(
        &self,
        path: &Path,
    ) -> Result<Vec<QoyodAppliedBillCredit>, ConvertError> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let sheet = Sheet::open(path, BILL_CREDIT_COLUMNS)?;
        let mut records = Vec::new();

        for row in &sheet.rows {
            let journal_number = sheet.text(row, "Journal Number");
            let bill_number = sheet.text(row, "Bill Number");
            if journal_number.is_empty() && bill_number.is_empty() {
                continue;
            }
            records.push(QoyodAppliedBillCredit {
                date: sheet.date(row, "Date"),
                journal_number,
                bill_date: sheet.date(row, "Bill Date"),
                bill_number,
                amount: sheet.decimal(row, "Amount"),
            });
        }
        Ok(records)
    }
}

/// A worksheet with its header resolved: lowercase column label → index,
/// plus the data rows below the header.
struct Sheet {
    columns: HashMap<String, usize>,
    rows: Vec<Vec<Data>>,
}

impl Sheet {
    /// Open the first worksheet of a required file.
    fn open_required(path: &Path, required: &[&str]) -> Result<Self, ConvertError> {
        if !path.exists() {
            return Err(ConvertError::FileNotFound(path.to_path_buf()));
        }
        Self::open(path, required)
    }

    fn open(path: &Path, required: &[&str]) -> Result<Self, ConvertError> {
        let mut workbook: Xlsx<_> =
            open_workbook(path).map_err(|e: calamine::XlsxError| ConvertError::Workbook(e.to_string()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| {
                ConvertError::Workbook(format!("{} has no worksheets", path.display()))
            })?
            .map_err(|e| ConvertError::Workbook(e.to_string()))?;

        let all_rows: Vec<Vec<Data>> = range.rows().map(<[Data]>::to_vec).collect();
        let (header_idx, columns) = locate_header(&all_rows, required).ok_or_else(|| {
            ConvertError::Header(format!(
                "no row in the first {HEADER_SCAN_ROWS} rows of {} contains the columns {:?}",
                path.display(),
                required
            ))
        })?;

        Ok(Self {
            columns,
            rows: all_rows.into_iter().skip(header_idx + 1).collect(),
        })
    }

    /// Trimmed cell text; empty string for missing or blank cells.
    fn text(&self, row: &[Data], column: &str) -> String {
        self.cell(row, column)
            .map(|cell| cell.to_string().trim().to_string())
            .unwrap_or_default()
    }

    /// Cell as an exact decimal; zero for missing or unparseable cells.
    fn decimal(&self, row: &[Data], column: &str) -> Decimal {
        match self.cell(row, column) {
            Some(Data::Float(f)) => Decimal::from_f64(*f).unwrap_or_default(),
            Some(Data::Int(i)) => Decimal::from(*i),
            Some(Data::String(s)) => s.trim().parse().unwrap_or_default(),
            _ => Decimal::ZERO,
        }
    }

    /// Cell as a date, from an Excel datetime cell or a `yyyy-MM-dd` /
    /// `dd/MM/yyyy` string. Blank cells are `None`.
    fn date(&self, row: &[Data], column: &str) -> Option<NaiveDate> {
        let cell = self.cell(row, column)?;
        if let Some(date) = cell.as_date() {
            return Some(date);
        }
        let text = cell.to_string();
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(text, "%d/%m/%Y"))
            .ok()
    }

    fn cell<'a>(&self, row: &'a [Data], column: &str) -> Option<&'a Data> {
        let idx = *self.columns.get(&column.to_lowercase())?;
        match row.get(idx) {
            Some(Data::Empty) | None => None,
            Some(cell) => Some(cell),
        }
    }
}

/// Find the first row containing every required column name
/// (case-insensitive, trimmed) and build the label → index map from it.
fn locate_header(
    rows: &[Vec<Data>],
    required: &[&str],
) -> Option<(usize, HashMap<String, usize>)> {
    for (idx, row) in rows.iter().take(HEADER_SCAN_ROWS).enumerate() {
        let mut columns = HashMap::new();
        for (col, cell) in row.iter().enumerate() {
            let label = cell.to_string().trim().to_lowercase();
            if !label.is_empty() {
                columns.entry(label).or_insert(col);
            }
        }
        if required
            .iter()
            .all(|name| columns.contains_key(&name.to_lowercase()))
        {
            return Some((idx, columns));
        }
    }
    None
}

/// The parent cell reads "101 - Current Assets"; the code is the part
/// before the first dash.
fn parse_parent_code(raw: &str) -> Option<String> {
    let code = raw.split('-').next()?.trim();
    if code.is_empty() {
        None
    } else {
        Some(code.to_string())
    }
}
