use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use super::types::*;

/// Invoice numbers that occur more than once, each reported exactly once,
/// in first-seen order.
pub fn find_duplicate_invoice_numbers(transactions: &[QoyodInvoiceTransaction]) -> Vec<String> {
    duplicate_keys(transactions.iter().map(|t| t.invoice_number.as_str()))
}

/// Bill numbers that occur more than once, each reported exactly once,
/// in first-seen order.
pub fn find_duplicate_bill_numbers(transactions: &[QoyodBillTransaction]) -> Vec<String> {
    duplicate_keys(transactions.iter().map(|t| t.bill_number.as_str()))
}

fn duplicate_keys<'a>(keys: impl Iterator<Item = &'a str> + Clone) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for key in keys.clone() {
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut reported: HashSet<&str> = HashSet::new();
    keys.filter(|key| counts[key] > 1 && reported.insert(key))
        .map(str::to_string)
        .collect()
}

/// Validate applied invoice credits row by row.
///
/// Each row is checked independently and may contribute several messages:
/// blank journal number, blank invoice number, non-positive amount, and
/// a duplicate (journal, invoice) business key. The key is normalized by
/// trimming and lowercasing; only the second and later occurrences are
/// flagged.
pub fn validate_applied_invoice_credits(rows: &[QoyodAppliedInvoiceCredit]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen_pairs: HashSet<(String, String)> = HashSet::new();

    for row in rows {
        if row.journal_number.trim().is_empty() {
            errors.push(
                "Validation Error: A record in the Applied Invoice Credits file is missing a JournalNumber."
                    .to_string(),
            );
        }
        if row.invoice_number.trim().is_empty() {
            errors.push(format!(
                "Validation Error: JournalCredit for Journal '{}' is missing an InvoiceNumber.",
                row.journal_number
            ));
        }
        if row.amount <= Decimal::ZERO {
            errors.push(format!(
                "Validation Error: JournalCredit for Journal '{}' has a non-positive Amount.",
                row.journal_number
            ));
        }

        let pair = business_key(&row.journal_number, &row.invoice_number);
        if !seen_pairs.insert(pair) {
            errors.push(format!(
                "Validation Error: Duplicate applied credit found for Journal '{}' and Invoice '{}'.",
                row.journal_number, row.invoice_number
            ));
        }
    }

    errors
}

/// Bill analogue of [`validate_applied_invoice_credits`].
pub fn validate_applied_bill_credits(rows: &[QoyodAppliedBillCredit]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen_pairs: HashSet<(String, String)> = HashSet::new();

    for row in rows {
        if row.journal_number.trim().is_empty() {
            errors.push(
                "Validation Error: A record in the Applied Bill Credits file is missing a JournalNumber."
                    .to_string(),
            );
        }
        if row.bill_number.trim().is_empty() {
            errors.push(format!(
                "Validation Error: JournalCredit for Journal '{}' is missing a BillNumber.",
                row.journal_number
            ));
        }
        if row.amount <= Decimal::ZERO {
            errors.push(format!(
                "Validation Error: JournalCredit for Journal '{}' has a non-positive Amount.",
                row.journal_number
            ));
        }

        let pair = business_key(&row.journal_number, &row.bill_number);
        if !seen_pairs.insert(pair) {
            errors.push(format!(
                "Validation Error: Duplicate applied credit found for Journal '{}' and Bill '{}'.",
                row.journal_number, row.bill_number
            ));
        }
    }

    errors
}

/// Normalized duplicate-detection key: trimmed, case-folded.
fn business_key(journal_number: &str, document_number: &str) -> (String, String) {
    (
        journal_number.trim().to_lowercase(),
        document_number.trim().to_lowercase(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_key_normalizes_case_and_whitespace() {
        assert_eq!(
            business_key(" J-1 ", "INV-9"),
            business_key("j-1", " inv-9 ")
        );
    }

    #[test]
    fn duplicate_keys_reports_each_key_once_in_first_seen_order() {
        let keys = ["A", "B", "A", "C", "B", "B"];
        assert_eq!(
            duplicate_keys(keys.iter().copied()),
            vec!["A".to_string(), "B".to_string()]
        );
    }
}
