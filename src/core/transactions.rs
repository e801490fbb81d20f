use super::mapping::MappingTable;
use super::types::*;

/// Convert Qoyod revenue statement lines into Zoho invoices.
///
/// Only rows whose description carries the sales-invoice marker are
/// converted; credit notes and other transaction types in the same
/// statement are silently dropped. Each surviving row becomes a
/// single-line invoice: quantity 1, rate equal to the transaction total,
/// due date equal to the invoice date.
pub fn convert_invoices(
    transactions: &[QoyodInvoiceTransaction],
    placeholder_item_name: &str,
) -> Vec<ZohoInvoice> {
    transactions
        .iter()
        .filter(|trx| trx.description.contains(SALES_INVOICE_MARKER))
        .map(|trx| ZohoInvoice {
            customer_name: parse_customer_name(&trx.description),
            invoice_number: trx.invoice_number.clone(),
            invoice_date: trx.invoice_date,
            due_date: trx.invoice_date,
            item_name: placeholder_item_name.to_string(),
            account: trx.account_name.clone(),
            quantity: 1,
            rate: trx.total_amount,
            tax_name: None,
            currency_code: DEFAULT_CURRENCY.to_string(),
        })
        .collect()
}

/// Convert Qoyod payables statement lines into Zoho bills.
///
/// The input is assumed pre-filtered to bill rows. The vendor name is the
/// full trimmed description; unlike the invoice path, nothing is split
/// off. Do not unify the two parsers, importers depend on both behaviors.
pub fn convert_bills(
    transactions: &[QoyodBillTransaction],
    placeholder_item_name: &str,
) -> Vec<ZohoBill> {
    transactions
        .iter()
        .map(|trx| ZohoBill {
            vendor_name: trx.description.trim().to_string(),
            bill_number: trx.bill_number.clone(),
            bill_date: trx.bill_date,
            due_date: trx.bill_date,
            item_name: placeholder_item_name.to_string(),
            account: trx.account_name.clone(),
            quantity: 1,
            rate: trx.total_amount,
            tax_name: None,
            currency_code: DEFAULT_CURRENCY.to_string(),
        })
        .collect()
}

/// Convert Qoyod customer payments into Zoho payment rows, mapping the
/// bank/cash account through the table and synthesizing a reference
/// number from the invoice number.
pub fn convert_payments(
    payments: &[QoyodPaymentTransaction],
    mapping: &MappingTable,
) -> Vec<ZohoPayment> {
    payments
        .iter()
        .map(|payment| ZohoPayment {
            customer_name: payment.customer_name.clone(),
            payment_date: payment.payment_date,
            invoice_number: payment.invoice_number.clone(),
            amount: payment.amount,
            payment_account: mapping.resolve(&payment.payment_account).to_string(),
            reference_number: format!("{PAYMENT_REFERENCE_PREFIX}{}", payment.invoice_number),
        })
        .collect()
}

/// Extract the customer name from an invoice description of the form
/// "Customer Name - details". Falls back to [`UNKNOWN_CUSTOMER`] when the
/// text before the first `-` is empty.
fn parse_customer_name(description: &str) -> String {
    description
        .split('-')
        .next()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_CUSTOMER)
        .to_string()
}
