use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tahweel::core::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn line(number: &str, account: &str, debit: Decimal, credit: Decimal) -> QoyodJournalLine {
    QoyodJournalLine {
        journal_number: number.into(),
        journal_date: date(2024, 2, 10),
        notes: "migration".into(),
        reference_number: format!("REF-{number}"),
        description: String::new(),
        debit,
        credit,
        account: account.into(),
        currency: "SAR".into(),
    }
}

fn invoice_credit(
    date: Option<NaiveDate>,
    journal: &str,
    invoice: &str,
    amount: Decimal,
) -> QoyodAppliedInvoiceCredit {
    QoyodAppliedInvoiceCredit {
        date,
        journal_number: journal.into(),
        invoice_date: None,
        invoice_number: invoice.into(),
        amount,
    }
}

// --- Journal conversion ---

#[test]
fn balanced_journal_converts_every_line() {
    let lines = vec![
        line("J-1", "Cash", dec!(100), dec!(0)),
        line("J-1", "Sales", dec!(0), dec!(100)),
    ];
    let result = convert_journals(&lines, &MappingTable::new());
    assert_eq!(result.lines.len(), 2);
    assert!(result.errors.is_empty());
}

#[test]
fn unbalanced_journal_is_excluded_entirely() {
    let lines = vec![
        line("J-1", "Cash", dec!(100), dec!(0)),
        line("J-1", "Sales", dec!(0), dec!(90)),
        line("J-2", "Cash", dec!(50), dec!(0)),
        line("J-2", "Sales", dec!(0), dec!(50)),
    ];
    let result = convert_journals(&lines, &MappingTable::new());

    assert_eq!(result.lines.len(), 2);
    assert!(result.lines.iter().all(|l| l.reference_number == "REF-J-2"));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0],
        "Journal number J-1 is unbalanced. Debit: 100, Credit: 90."
    );
}

#[test]
fn balance_check_is_exact_not_approximate() {
    let lines = vec![
        line("J-1", "Cash", dec!(0.1), dec!(0)),
        line("J-1", "Cash", dec!(0.2), dec!(0)),
        line("J-1", "Sales", dec!(0), dec!(0.3)),
    ];
    let result = convert_journals(&lines, &MappingTable::new());
    assert_eq!(result.lines.len(), 3);
    assert!(result.errors.is_empty());
}

#[test]
fn journal_account_is_mapped() {
    let mapping = MappingTable::from_map(HashMap::from([(
        "النقدية".to_string(),
        "Cash".to_string(),
    )]));
    let lines = vec![
        line("J-1", "النقدية", dec!(10), dec!(0)),
        line("J-1", "Sales", dec!(0), dec!(10)),
    ];
    let result = convert_journals(&lines, &mapping);
    assert_eq!(result.lines[0].account, "Cash");
    assert_eq!(result.lines[1].account, "Sales");
}

#[test]
fn one_error_per_unbalanced_journal() {
    let lines = vec![
        line("J-1", "Cash", dec!(1), dec!(0)),
        line("J-2", "Cash", dec!(2), dec!(0)),
    ];
    let result = convert_journals(&lines, &MappingTable::new());
    assert!(result.lines.is_empty());
    assert_eq!(result.errors.len(), 2);
}

// --- Applied credit conversion ---

#[test]
fn explicit_credit_date_is_never_overwritten() {
    let explicit = date(2024, 7, 1);
    let lines = vec![line("J-1", "Cash", dec!(0), dec!(0))];
    let credits = vec![invoice_credit(Some(explicit), "J-1", "INV-1", dec!(40))];

    let result = convert_applied_invoice_credits(&credits, &lines);

    assert_eq!(result.records[0].date, Some(explicit));
    assert!(result.warnings.is_empty());
}

#[test]
fn missing_credit_date_is_inferred_from_first_journal_line() {
    let mut first = line("J-1", "Cash", dec!(0), dec!(0));
    first.journal_date = date(2024, 3, 1);
    let mut second = line("J-1", "Sales", dec!(0), dec!(0));
    second.journal_date = date(2024, 3, 9);

    let credits = vec![invoice_credit(None, "J-1", "INV-1", dec!(40))];
    let result = convert_applied_invoice_credits(&credits, &[first, second]);

    assert_eq!(result.records[0].date, Some(date(2024, 3, 1)));
    assert!(result.warnings.is_empty());
}

#[test]
fn unresolvable_credit_date_stays_empty_with_one_warning() {
    let credits = vec![invoice_credit(None, "J-404", "INV-1", dec!(40))];
    let result = convert_applied_invoice_credits(&credits, &[]);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].date, None);
    assert_eq!(
        result.warnings,
        vec!["Could not find Journal Date for JournalNumber: J-404.".to_string()]
    );
}

#[test]
fn every_credit_row_produces_exactly_one_output_row() {
    let credits = vec![
        invoice_credit(None, "J-404", "INV-1", dec!(1)),
        invoice_credit(Some(date(2024, 1, 1)), "J-1", "INV-2", dec!(2)),
        invoice_credit(None, "J-405", "INV-3", dec!(3)),
    ];
    let result = convert_applied_invoice_credits(&credits, &[]);
    assert_eq!(result.records.len(), 3);
    assert_eq!(result.warnings.len(), 2);
}

#[test]
fn bill_credit_conversion_mirrors_invoice_path() {
    let mut journal = line("J-9", "Cash", dec!(0), dec!(0));
    journal.journal_date = date(2024, 4, 4);

    let credits = vec![QoyodAppliedBillCredit {
        date: None,
        journal_number: "J-9".into(),
        bill_date: Some(date(2024, 4, 1)),
        bill_number: "B-1".into(),
        amount: dec!(12),
    }];
    let result = convert_applied_bill_credits(&credits, &[journal]);

    assert_eq!(result.records[0].date, Some(date(2024, 4, 4)));
    assert_eq!(result.records[0].bill_date, Some(date(2024, 4, 1)));
    assert!(result.warnings.is_empty());
}
