use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::mapping::MappingTable;
use super::types::*;

/// Outcome of a journal conversion: the lines of every balanced journal,
/// plus one error per unbalanced journal.
#[derive(Debug, Clone, Default)]
pub struct JournalConversion {
    pub lines: Vec<ZohoJournalLine>,
    pub errors: Vec<String>,
}

/// Outcome of an applied-credit conversion. Strictly one output record
/// per input record; warnings only note dates that could not be inferred.
#[derive(Debug, Clone)]
pub struct CreditConversion<T> {
    pub records: Vec<T>,
    pub warnings: Vec<String>,
}

/// Convert a flat list of Qoyod journal lines into Zoho journal lines.
///
/// Lines are grouped by journal number (exact string equality, first-seen
/// order). A group whose debit and credit sums are not exactly equal is
/// excluded in full (no partial emission) and contributes one error.
/// Balanced groups are converted line by line with the account field
/// mapped through the table.
pub fn convert_journals(lines: &[QoyodJournalLine], mapping: &MappingTable) -> JournalConversion {
    let mut result = JournalConversion::default();

    for (number, group) in group_by_journal_number(lines) {
        let total_debit: Decimal = group.iter().map(|line| line.debit).sum();
        let total_credit: Decimal = group.iter().map(|line| line.credit).sum();

        if total_debit != total_credit {
            result.errors.push(format!(
                "Journal number {number} is unbalanced. Debit: {total_debit}, Credit: {total_credit}."
            ));
            continue;
        }

        for line in group {
            result.lines.push(ZohoJournalLine {
                journal_date: line.journal_date,
                notes: line.notes.clone(),
                reference_number: line.reference_number.clone(),
                account: mapping.resolve(&line.account).to_string(),
                debit: line.debit,
                credit: line.credit,
                description: line.description.clone(),
                currency: line.currency.clone(),
            });
        }
    }

    result
}

/// Convert raw invoice-applied credits, inferring missing dates from the
/// journal lines.
///
/// A credit that already carries a date keeps it untouched. A dateless
/// credit takes the date of the first journal line with the same journal
/// number; when no such line exists the date stays empty and a warning
/// names the journal number. Every input record yields exactly one
/// output record.
pub fn convert_applied_invoice_credits(
    credits: &[QoyodAppliedInvoiceCredit],
    journal_lines: &[QoyodJournalLine],
) -> CreditConversion<ZohoAppliedInvoiceCredit> {
    let dates = journal_date_lookup(journal_lines);
    let mut records = Vec::with_capacity(credits.len());
    let mut warnings = Vec::new();

    for credit in credits {
        let date = resolve_credit_date(credit.date, &credit.journal_number, &dates, &mut warnings);
        records.push(ZohoAppliedInvoiceCredit {
            date,
            journal_number: credit.journal_number.clone(),
            invoice_date: credit.invoice_date,
            invoice_number: credit.invoice_number.clone(),
            amount: credit.amount,
        });
    }

    CreditConversion { records, warnings }
}

/// Bill analogue of [`convert_applied_invoice_credits`].
pub fn convert_applied_bill_credits(
    credits: &[QoyodAppliedBillCredit],
    journal_lines: &[QoyodJournalLine],
) -> CreditConversion<ZohoAppliedBillCredit> {
    let dates = journal_date_lookup(journal_lines);
    let mut records = Vec::with_capacity(credits.len());
    let mut warnings = Vec::new();

    for credit in credits {
        let date = resolve_credit_date(credit.date, &credit.journal_number, &dates, &mut warnings);
        records.push(ZohoAppliedBillCredit {
            date,
            journal_number: credit.journal_number.clone(),
            bill_date: credit.bill_date,
            bill_number: credit.bill_number.clone(),
            amount: credit.amount,
        });
    }

    CreditConversion { records, warnings }
}

fn resolve_credit_date(
    explicit: Option<NaiveDate>,
    journal_number: &str,
    dates: &HashMap<&str, NaiveDate>,
    warnings: &mut Vec<String>,
) -> Option<NaiveDate> {
    if explicit.is_some() {
        return explicit;
    }
    match dates.get(journal_number) {
        Some(date) => Some(*date),
        None => {
            warnings.push(format!(
                "Could not find Journal Date for JournalNumber: {journal_number}."
            ));
            None
        }
    }
}

/// Journal number → date of the first line seen for that number. Later
/// lines never overwrite the date.
fn journal_date_lookup(lines: &[QoyodJournalLine]) -> HashMap<&str, NaiveDate> {
    let mut dates = HashMap::new();
    for line in lines {
        dates
            .entry(line.journal_number.as_str())
            .or_insert(line.journal_date);
    }
    dates
}

/// Group lines by journal number, preserving first-seen group order and
/// line order within each group.
pub(crate) fn group_by_journal_number(
    lines: &[QoyodJournalLine],
) -> Vec<(&str, Vec<&QoyodJournalLine>)> {
    let mut order: Vec<(&str, Vec<&QoyodJournalLine>)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for line in lines {
        let number = line.journal_number.as_str();
        let slot = *slots.entry(number).or_insert_with(|| {
            order.push((number, Vec::new()));
            order.len() - 1
        });
        order[slot].1.push(line);
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn line(number: &str, debit: Decimal, credit: Decimal) -> QoyodJournalLine {
        QoyodJournalLine {
            journal_number: number.into(),
            journal_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            notes: String::new(),
            reference_number: String::new(),
            description: String::new(),
            debit,
            credit,
            account: "1010".into(),
            currency: "SAR".into(),
        }
    }

    #[test]
    fn groups_preserve_first_seen_order() {
        let lines = vec![
            line("J-2", dec!(10), dec!(0)),
            line("J-1", dec!(5), dec!(0)),
            line("J-2", dec!(0), dec!(10)),
        ];
        let groups = group_by_journal_number(&lines);
        assert_eq!(groups[0].0, "J-2");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "J-1");
    }

    #[test]
    fn date_lookup_keeps_first_line_date() {
        let mut first = line("J-1", dec!(1), dec!(0));
        first.journal_date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut second = line("J-1", dec!(0), dec!(1));
        second.journal_date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

        let lines = [first, second];
        let dates = journal_date_lookup(&lines);
        assert_eq!(dates["J-1"], NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }
}
