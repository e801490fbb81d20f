use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tahweel::core::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn invoice_trx(number: &str, description: &str) -> QoyodInvoiceTransaction {
    QoyodInvoiceTransaction {
        invoice_date: date(2024, 5, 2),
        account_name: "Revenue".into(),
        description: description.into(),
        invoice_number: number.into(),
        total_amount: dec!(1500.50),
    }
}

fn bill_trx(number: &str, description: &str) -> QoyodBillTransaction {
    QoyodBillTransaction {
        bill_date: date(2024, 5, 9),
        account_name: "Expenses".into(),
        description: description.into(),
        bill_number: number.into(),
        total_amount: dec!(320),
    }
}

// --- Invoices ---

#[test]
fn invoice_conversion_synthesizes_single_line() {
    let transactions = vec![invoice_trx("INV-1", "Acme Trading - فاتورة مبيعات 1")];
    let converted = convert_invoices(&transactions, "Migrated Sales");

    assert_eq!(converted.len(), 1);
    let invoice = &converted[0];
    assert_eq!(invoice.customer_name, "Acme Trading");
    assert_eq!(invoice.invoice_number, "INV-1");
    assert_eq!(invoice.due_date, invoice.invoice_date);
    assert_eq!(invoice.item_name, "Migrated Sales");
    assert_eq!(invoice.quantity, 1);
    assert_eq!(invoice.rate, dec!(1500.50));
    assert_eq!(invoice.tax_name, None);
    assert_eq!(invoice.currency_code, "SAR");
}

#[test]
fn non_sales_rows_are_silently_dropped() {
    let transactions = vec![
        invoice_trx("INV-1", "Acme - فاتورة مبيعات 1"),
        invoice_trx("CN-1", "Acme - credit note"),
        invoice_trx("INV-2", "Gulf Co - فاتورة مبيعات 2"),
    ];
    let converted = convert_invoices(&transactions, "Item");
    let numbers: Vec<&str> = converted.iter().map(|i| i.invoice_number.as_str()).collect();
    assert_eq!(numbers, vec!["INV-1", "INV-2"]);
}

#[test]
fn invoice_customer_falls_back_to_unknown() {
    let transactions = vec![invoice_trx("INV-1", " - فاتورة مبيعات")];
    let converted = convert_invoices(&transactions, "Item");
    assert_eq!(converted[0].customer_name, "Unknown Customer");
}

#[test]
fn empty_input_converts_to_empty_output() {
    assert!(convert_invoices(&[], "Item").is_empty());
    assert!(convert_bills(&[], "Item").is_empty());
    assert!(convert_payments(&[], &MappingTable::new()).is_empty());
}

// --- Bills ---

#[test]
fn bill_conversion_synthesizes_single_line() {
    let transactions = vec![bill_trx("B-7", "  Supplies Warehouse  ")];
    let converted = convert_bills(&transactions, "Migrated Purchase");

    assert_eq!(converted.len(), 1);
    let bill = &converted[0];
    assert_eq!(bill.bill_number, "B-7");
    assert_eq!(bill.due_date, bill.bill_date);
    assert_eq!(bill.item_name, "Migrated Purchase");
    assert_eq!(bill.quantity, 1);
    assert_eq!(bill.rate, dec!(320));
    assert_eq!(bill.currency_code, "SAR");
}

// The bill path keeps the whole description as the vendor name; it is
// not split on a dash the way the invoice path is.
#[test]
fn bill_vendor_is_full_trimmed_description() {
    let transactions = vec![bill_trx("B-1", " Supplies Warehouse - bill 1 ")];
    let converted = convert_bills(&transactions, "Item");
    assert_eq!(converted[0].vendor_name, "Supplies Warehouse - bill 1");
}

#[test]
fn bills_are_not_filtered() {
    let transactions = vec![bill_trx("B-1", "anything"), bill_trx("B-2", "at all")];
    assert_eq!(convert_bills(&transactions, "Item").len(), 2);
}

// --- Payments ---

#[test]
fn payment_account_is_mapped_and_reference_synthesized() {
    let mapping = MappingTable::from_map(HashMap::from([(
        "1010".to_string(),
        "Main Bank Account".to_string(),
    )]));
    let payments = vec![QoyodPaymentTransaction {
        payment_date: date(2024, 6, 1),
        customer_name: "Acme Trading".into(),
        invoice_number: "INV-1".into(),
        amount: dec!(500),
        payment_account: "1010".into(),
    }];

    let converted = convert_payments(&payments, &mapping);

    assert_eq!(converted.len(), 1);
    assert_eq!(converted[0].payment_account, "Main Bank Account");
    assert_eq!(converted[0].reference_number, "Qoyod-INV-1");
    assert_eq!(converted[0].amount, dec!(500));
}

#[test]
fn unmapped_payment_account_passes_through() {
    let payments = vec![QoyodPaymentTransaction {
        payment_date: date(2024, 6, 1),
        customer_name: "Acme".into(),
        invoice_number: "INV-2".into(),
        amount: dec!(75.25),
        payment_account: "9999".into(),
    }];
    let converted = convert_payments(&payments, &MappingTable::new());
    assert_eq!(converted[0].payment_account, "9999");
}
