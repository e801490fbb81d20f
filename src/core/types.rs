use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency code written to every Zoho invoice and bill. The Qoyod
/// statement exports carry no currency column.
pub const DEFAULT_CURRENCY: &str = "SAR";

/// Transaction-type marker identifying a sales invoice row in the Qoyod
/// account statement ("sales invoice" in Arabic).
pub const SALES_INVOICE_MARKER: &str = "فاتورة مبيعات";

/// Prefix for synthesized payment reference numbers.
pub const PAYMENT_REFERENCE_PREFIX: &str = "Qoyod-";

/// Counterparty fallback when an invoice description yields no name.
pub const UNKNOWN_CUSTOMER: &str = "Unknown Customer";

/// A single account from the Qoyod chart-of-accounts export.
///
/// Accounts form a forest: `parent_code` optionally references another
/// account's `code`. Hierarchy links are resolved at conversion time
/// from an index, never stored on the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QoyodAccount {
    /// Unique account code, e.g. "10101".
    pub code: String,
    /// Account display name.
    pub name: String,
    /// Free-text classification, translated via the mapping table.
    pub account_type: String,
    pub description: String,
    /// Code of the parent account, if any.
    pub parent_code: Option<String>,
    /// Whether this is a payable/receivable control account.
    pub payable_receivable: bool,
}

/// An account row shaped for the Zoho Books chart-of-accounts import.
///
/// Zoho references the parent by **name**, not code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZohoAccount {
    pub name: String,
    /// Mapped account type.
    pub account_type: String,
    pub code: String,
    pub description: String,
    /// Name of the parent account; `None` for roots.
    pub parent_account: Option<String>,
}

/// A sales invoice row from a Qoyod revenue account statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QoyodInvoiceTransaction {
    pub invoice_date: NaiveDate,
    pub account_name: String,
    /// Free text, usually "Customer Name - details". The customer name
    /// is parsed out of this field during conversion.
    pub description: String,
    pub invoice_number: String,
    pub total_amount: Decimal,
}

/// An invoice row shaped for the Zoho Books invoice import.
///
/// Each source transaction becomes a single-line invoice: quantity 1,
/// rate equal to the transaction total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZohoInvoice {
    pub customer_name: String,
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    /// Always equal to `invoice_date`; the source carries no terms.
    pub due_date: NaiveDate,
    /// Caller-supplied placeholder for the single line item.
    pub item_name: String,
    pub account: String,
    pub quantity: u32,
    pub rate: Decimal,
    pub tax_name: Option<String>,
    pub currency_code: String,
}

/// A vendor bill row from a Qoyod payables account statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QoyodBillTransaction {
    pub bill_date: NaiveDate,
    pub account_name: String,
    pub description: String,
    pub bill_number: String,
    pub total_amount: Decimal,
}

/// A bill row shaped for the Zoho Books bill import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZohoBill {
    pub vendor_name: String,
    pub bill_number: String,
    pub bill_date: NaiveDate,
    pub due_date: NaiveDate,
    pub item_name: String,
    pub account: String,
    pub quantity: u32,
    pub rate: Decimal,
    pub tax_name: Option<String>,
    pub currency_code: String,
}

/// A customer payment row from a Qoyod receivables statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QoyodPaymentTransaction {
    pub payment_date: NaiveDate,
    pub customer_name: String,
    /// The invoice this payment settles.
    pub invoice_number: String,
    pub amount: Decimal,
    /// Identifier of the bank/cash account, translated via the mapping table.
    pub payment_account: String,
}

/// A payment row shaped for the Zoho Books payment import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZohoPayment {
    pub customer_name: String,
    pub payment_date: NaiveDate,
    pub invoice_number: String,
    pub amount: Decimal,
    /// Mapped name of the bank/cash account in Zoho.
    pub payment_account: String,
    pub reference_number: String,
}

/// One line of a Qoyod journal entry.
///
/// A complete journal entry is the set of lines sharing one
/// `journal_number`; it is well-formed only when the debit and credit
/// sums over that set are exactly equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QoyodJournalLine {
    pub journal_number: String,
    pub journal_date: NaiveDate,
    pub notes: String,
    pub reference_number: String,
    pub description: String,
    pub debit: Decimal,
    pub credit: Decimal,
    pub account: String,
    pub currency: String,
}

/// One line of a journal entry shaped for the Zoho Books journal import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZohoJournalLine {
    pub journal_date: NaiveDate,
    pub notes: String,
    pub reference_number: String,
    /// Mapped account name.
    pub account: String,
    pub debit: Decimal,
    pub credit: Decimal,
    pub description: String,
    pub currency: String,
}

/// A raw record of a journal credit applied to an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QoyodAppliedInvoiceCredit {
    /// Explicit application date; inferred from the journal when absent.
    pub date: Option<NaiveDate>,
    pub journal_number: String,
    pub invoice_date: Option<NaiveDate>,
    pub invoice_number: String,
    pub amount: Decimal,
}

/// A raw record of a journal credit applied to a bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QoyodAppliedBillCredit {
    pub date: Option<NaiveDate>,
    pub journal_number: String,
    pub bill_date: Option<NaiveDate>,
    pub bill_number: String,
    pub amount: Decimal,
}

/// A row for the Zoho "Journal Credits Applied to Invoices" import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZohoAppliedInvoiceCredit {
    pub date: Option<NaiveDate>,
    pub journal_number: String,
    pub invoice_date: Option<NaiveDate>,
    pub invoice_number: String,
    pub amount: Decimal,
}

/// A row for the Zoho "Journal Credits Applied to Bills" import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZohoAppliedBillCredit {
    pub date: Option<NaiveDate>,
    pub journal_number: String,
    pub bill_date: Option<NaiveDate>,
    pub bill_number: String,
    pub amount: Decimal,
}
