use std::collections::HashMap;
use std::path::Path;

use super::error::ConvertError;

/// Lookup table translating a Qoyod classification string (account type,
/// or bank/cash account identifier) to its Zoho counterpart.
///
/// Resolution never fails: an unmapped key is returned unchanged, so a
/// missing mapping surfaces downstream as a literal source value in the
/// output file, where an operator will notice it.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: HashMap<String, String>,
}

impl MappingTable {
    /// Create an empty table (every key resolves to itself).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from an existing map.
    pub fn from_map(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Load a table from a JSON object of `{"source type": "target type"}`.
    pub fn from_json_str(json: &str) -> Result<Self, ConvertError> {
        let entries: HashMap<String, String> =
            serde_json::from_str(json).map_err(|e| ConvertError::Config(e.to_string()))?;
        Ok(Self { entries })
    }

    /// Load a table from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ConvertError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Replace the entire table. No partial merge.
    pub fn load(&mut self, entries: HashMap<String, String>) {
        self.entries = entries;
    }

    /// Resolve a source classification to its mapped value, or return the
    /// key unchanged when no mapping exists.
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
