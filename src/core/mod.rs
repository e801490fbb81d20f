//! Conversion core: record types, mapping table, converters, validation,
//! and the dry-run orchestrator.
//!
//! Converters are plain functions over in-memory lists. Business-rule
//! violations come back as diagnostic strings alongside the converted
//! records, never as errors.

mod accounts;
mod dry_run;
mod error;
mod journal;
mod mapping;
mod transactions;
mod types;
mod validation;

pub use accounts::*;
pub use dry_run::*;
pub use error::*;
pub use journal::*;
pub use mapping::*;
pub use transactions::*;
pub use types::*;
pub use validation::*;
