use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading source files or writing output.
///
/// Business-rule violations (unbalanced journals, duplicate numbers,
/// invalid applied-credit rows) are never surfaced through this type;
/// they are collected as diagnostic strings so a single bad record
/// cannot abort a run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required input file does not exist. Applied-credit files are
    /// optional and degrade to an empty record set instead.
    #[error("required input file not found: {0}")]
    FileNotFound(PathBuf),

    /// The workbook could not be opened or has no worksheets.
    #[error("workbook error: {0}")]
    Workbook(String),

    /// No row matching the expected column names was found.
    #[error("header row not found: {0}")]
    Header(String),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(String),

    /// The mapping configuration could not be loaded.
    #[error("mapping configuration error: {0}")]
    Config(String),
}
