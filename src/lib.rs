//! # tahweel
//!
//! Converts Qoyod accounting exports into Zoho Books import files:
//! chart of accounts, invoices, bills, payments, journal entries, and
//! journal credits applied to invoices or bills.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating
//! point, so journal balance checks compare exactly.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use tahweel::core::*;
//!
//! let lines = vec![
//!     QoyodJournalLine {
//!         journal_number: "J-1".into(),
//!         journal_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//!         notes: "Opening".into(),
//!         reference_number: "REF-1".into(),
//!         description: String::new(),
//!         debit: dec!(100),
//!         credit: dec!(0),
//!         account: "Cash".into(),
//!         currency: "SAR".into(),
//!     },
//!     QoyodJournalLine {
//!         journal_number: "J-1".into(),
//!         journal_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//!         notes: "Opening".into(),
//!         reference_number: "REF-1".into(),
//!         description: String::new(),
//!         debit: dec!(0),
//!         credit: dec!(100),
//!         account: "Capital".into(),
//!         currency: "SAR".into(),
//!     },
//! ];
//!
//! let result = convert_journals(&lines, &MappingTable::new());
//! assert_eq!(result.lines.len(), 2);
//! assert!(result.errors.is_empty());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Record types, converters, validation, dry-run orchestrator |
//! | `reader` (default) | XLSX source reader built on `calamine` |
//! | `writer` (default) | Always-quoted CSV output built on `csv` |
//! | `cli` | The `tahweel` dry-run binary |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "reader")]
pub mod reader;

#[cfg(feature = "writer")]
pub mod writer;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
