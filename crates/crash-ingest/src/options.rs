//! Parsing and serialization options.

use serde::{Deserialize, Serialize};

/// Cell values read as missing unless `keep_default_na` is turned off.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options shared by the CSV reader and writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Treat [`DEFAULT_NA_VALUES`] as missing.
    pub keep_default_na: bool,
    /// Additional literal values read as missing.
    pub na_values: Vec<String>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            keep_default_na: true,
            na_values: Vec::new(),
        }
    }
}

impl CsvOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_default_na(mut self, enable: bool) -> Self {
        self.keep_default_na = enable;
        self
    }

    #[must_use]
    pub fn with_na_values(mut self, values: Vec<String>) -> Self {
        self.na_values = values;
        self
    }

    /// Returns true if a raw cell should be read as missing.
    ///
    /// Empty fields are always missing.
    pub fn is_na(&self, raw: &str) -> bool {
        raw.is_empty()
            || (self.keep_default_na && DEFAULT_NA_VALUES.contains(&raw))
            || self.na_values.iter().any(|value| value == raw)
    }
}
