//! Zoho Books CSV output.
//!
//! Every field is quoted and the column headers are exactly what the
//! Zoho import screens expect; do not reorder them. Dates serialize as
//! `yyyy-MM-dd` with an empty quoted field for missing dates; amounts
//! use plain decimal display with no forced scale (`100`, not `100.00`).

use std::io;

use chrono::NaiveDate;
use csv::{QuoteStyle, Writer, WriterBuilder};

use crate::core::{
    ConvertError, ZohoAccount, ZohoAppliedBillCredit, ZohoAppliedInvoiceCredit, ZohoBill,
    ZohoInvoice, ZohoJournalLine, ZohoPayment,
};

const ACCOUNT_HEADER: &[&str] = &[
    "Account Name",
    "Account Type",
    "Account Code",
    "Description",
    "Parent Account",
];

const INVOICE_HEADER: &[&str] = &[
    "Customer Name",
    "Invoice Number",
    "Invoice Date",
    "Due Date",
    "Item Name",
    "Account",
    "Quantity",
    "Rate",
    "Tax Name",
    "Currency Code",
];

const BILL_HEADER: &[&str] = &[
    "Vendor Name",
    "Bill Number",
    "Bill Date",
    "Due Date",
    "Item Name",
    "Account",
    "Quantity",
    "Rate",
    "Tax Name",
    "Currency Code",
];

const JOURNAL_HEADER: &[&str] = &[
    "Journal Date",
    "Notes",
    "Reference Number",
    "Account",
    "Debit",
    "Credit",
    "Description",
    "Currency",
];

const PAYMENT_HEADER: &[&str] = &[
    "Customer Name",
    "Payment Date",
    "Invoice Number",
    "Amount",
    "Payment Account",
    "Reference#",
];

const INVOICE_CREDIT_HEADER: &[&str] = &[
    "Date",
    "Journal Number",
    "Invoice Date",
    "Invoice Number",
    "Amount",
];

const BILL_CREDIT_HEADER: &[&str] =
    &["Date", "Journal Number", "Bill Date", "Bill Number", "Amount"];

/// Write the chart-of-accounts import file.
pub fn write_accounts<W: io::Write>(out: W, records: &[ZohoAccount]) -> Result<(), ConvertError> {
    let mut csv = quoted_writer(out);
    write_record(&mut csv, ACCOUNT_HEADER)?;
    for account in records {
        write_record(
            &mut csv,
            &[
                &account.name,
                &account.account_type,
                &account.code,
                &account.description,
                account.parent_account.as_deref().unwrap_or(""),
            ],
        )?;
    }
    flush(csv)
}

/// Write the invoice import file.
pub fn write_invoices<W: io::Write>(out: W, records: &[ZohoInvoice]) -> Result<(), ConvertError> {
    let mut csv = quoted_writer(out);
    write_record(&mut csv, INVOICE_HEADER)?;
    for invoice in records {
        write_record(
            &mut csv,
            &[
                &invoice.customer_name,
                &invoice.invoice_number,
                &date_field(Some(invoice.invoice_date)),
                &date_field(Some(invoice.due_date)),
                &invoice.item_name,
                &invoice.account,
                &invoice.quantity.to_string(),
                &invoice.rate.to_string(),
                invoice.tax_name.as_deref().unwrap_or(""),
                &invoice.currency_code,
            ],
        )?;
    }
    flush(csv)
}

/// Write the bill import file.
pub fn write_bills<W: io::Write>(out: W, records: &[ZohoBill]) -> Result<(), ConvertError> {
    let mut csv = quoted_writer(out);
    write_record(&mut csv, BILL_HEADER)?;
    for bill in records {
        write_record(
            &mut csv,
            &[
                &bill.vendor_name,
                &bill.bill_number,
                &date_field(Some(bill.bill_date)),
                &date_field(Some(bill.due_date)),
                &bill.item_name,
                &bill.account,
                &bill.quantity.to_string(),
                &bill.rate.to_string(),
                bill.tax_name.as_deref().unwrap_or(""),
                &bill.currency_code,
            ],
        )?;
    }
    flush(csv)
}

/// Write the journal import file.
pub fn write_journal_lines<W: io::Write>(
    out: W,
    records: &[ZohoJournalLine],
) -> Result<(), ConvertError> {
    let mut csv = quoted_writer(out);
    write_record(&mut csv, JOURNAL_HEADER)?;
    for line in records {
        write_record(
            &mut csv,
            &[
                &date_field(Some(line.journal_date)),
                &line.notes,
                &line.reference_number,
                &line.account,
                &line.debit.to_string(),
                &line.credit.to_string(),
                &line.description,
                &line.currency,
            ],
        )?;
    }
    flush(csv)
}

/// Write the customer payment import file.
pub fn write_payments<W: io::Write>(out: W, records: &[ZohoPayment]) -> Result<(), ConvertError> {
    let mut csv = quoted_writer(out);
    write_record(&mut csv, PAYMENT_HEADER)?;
    for payment in records {
        write_record(
            &mut csv,
            &[
                &payment.customer_name,
                &date_field(Some(payment.payment_date)),
                &payment.invoice_number,
                &payment.amount.to_string(),
                &payment.payment_account,
                &payment.reference_number,
            ],
        )?;
    }
    flush(csv)
}

/// Write the "Journal Credits Applied to Invoices" file.
pub fn write_applied_invoice_credits<W: io::Write>(
    out: W,
    records: &[ZohoAppliedInvoiceCredit],
) -> Result<(), ConvertError> {
    let mut csv = quoted_writer(out);
    write_record(&mut csv, INVOICE_CREDIT_HEADER)?;
    for credit in records {
        write_record(
            &mut csv,
            &[
                &date_field(credit.date),
                &credit.journal_number,
                &date_field(credit.invoice_date),
                &credit.invoice_number,
                &credit.amount.to_string(),
            ],
        )?;
    }
    flush(csv)
}

/// Write the "Journal Credits Applied to Bills" file.
pub fn write_applied_bill_credits<W: io::Write>(
    out: W,
    records: &[ZohoAppliedBillCredit],
) -> Result<(), ConvertError> {
    let mut csv = quoted_writer(out);
    write_record(&mut csv, BILL_CREDIT_HEADER)?;
    for credit in records {
        write_record(
            &mut csv,
            &[
                &date_field(credit.date),
                &credit.journal_number,
                &date_field(credit.bill_date),
                &credit.bill_number,
                &credit.amount.to_string(),
            ],
        )?;
    }
    flush(csv)
}

fn quoted_writer<W: io::Write>(out: W) -> Writer<W> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(out)
}

fn write_record<W: io::Write>(csv: &mut Writer<W>, fields: &[&str]) -> Result<(), ConvertError> {
    csv.write_record(fields)
        .map_err(|e| ConvertError::Csv(e.to_string()))
}

fn flush<W: io::Write>(mut csv: Writer<W>) -> Result<(), ConvertError> {
    csv.flush()?;
    Ok(())
}

fn date_field(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
