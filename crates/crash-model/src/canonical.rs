//! Canonical label lookup tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// How raw values are matched against map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchMode {
    /// The raw value must equal a key byte for byte.
    #[default]
    Exact,
    /// Keys and canonical labels are folded to lowercase, and so is the probe.
    CaseInsensitive,
}

/// Fixed mapping from raw label to canonical label for one column.
///
/// Values without an entry are left to the caller; lookups never chain, so a
/// canonical label that is itself a key is not rewritten a second time.
#[derive(Debug, Clone)]
pub struct CanonicalMap {
    column: String,
    mode: MatchMode,
    entries: HashMap<String, String>,
}

impl CanonicalMap {
    pub fn new(column: impl Into<String>, mode: MatchMode) -> Self {
        Self {
            column: column.into(),
            mode,
            entries: HashMap::new(),
        }
    }

    pub fn from_pairs(column: impl Into<String>, mode: MatchMode, pairs: &[(&str, &str)]) -> Self {
        let mut map = Self::new(column, mode);
        for (raw, canonical) in pairs {
            map.insert(raw, canonical);
        }
        map
    }

    /// Add an entry; a later entry for the same key replaces the earlier one.
    pub fn insert(&mut self, raw: &str, canonical: &str) {
        let (key, value) = match self.mode {
            MatchMode::Exact => (raw.to_string(), canonical.to_string()),
            MatchMode::CaseInsensitive => (raw.to_lowercase(), canonical.to_lowercase()),
        };
        self.entries.insert(key, value);
    }

    pub fn lookup(&self, raw: &str) -> Option<&str> {
        let found = match self.mode {
            MatchMode::Exact => self.entries.get(raw),
            MatchMode::CaseInsensitive => self.entries.get(&raw.to_lowercase()),
        };
        found.map(String::as_str)
    }

    pub fn column(&self) -> &str {
        &self.column
    }
}
