//! Run configuration loaded from TOML.
//!
//! Every key is optional; missing sections fall back to the defaults below.
//!
//! ```toml
//! [paths]
//! input = "crash.csv"
//! output = "crash2.csv"
//!
//! [csv]
//! delimiter = ","
//!
//! [missing]
//! keep_default_na = true
//! na_values = ["?"]
//! ```

use std::path::{Path, PathBuf};

use crash_ingest::CsvOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_INPUT: &str = "crash.csv";
pub const DEFAULT_OUTPUT: &str = "crash2.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("delimiter must be a single ASCII character, got {value:?}")]
    InvalidDelimiter { value: char },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub paths: PathsConfig,
    pub csv: CsvConfig,
    pub missing: MissingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    pub delimiter: char,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissingConfig {
    /// Read the standard NA tokens (`NA`, `NULL`, `N/A`, ...) as missing.
    pub keep_default_na: bool,
    /// Extra literal values read as missing.
    pub na_values: Vec<String>,
}

impl Default for MissingConfig {
    fn default() -> Self {
        Self {
            keep_default_na: true,
            na_values: Vec::new(),
        }
    }
}

impl NormalizerConfig {
    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// CSV reader/writer options for this config.
    pub fn csv_options(&self) -> Result<CsvOptions, ConfigError> {
        let delimiter = self.csv.delimiter;
        if !delimiter.is_ascii() {
            return Err(ConfigError::InvalidDelimiter { value: delimiter });
        }
        Ok(CsvOptions::new()
            .with_delimiter(delimiter as u8)
            .with_default_na(self.missing.keep_default_na)
            .with_na_values(self.missing.na_values.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: NormalizerConfig = toml::from_str("").unwrap();
        assert_eq!(config, NormalizerConfig::default());
        assert_eq!(config.paths.input, PathBuf::from("crash.csv"));
        assert_eq!(config.paths.output, PathBuf::from("crash2.csv"));
        assert_eq!(config.csv_options().unwrap(), CsvOptions::default());
    }

    #[test]
    fn partial_config_overrides_keys() {
        let config: NormalizerConfig = toml::from_str(
            r#"
            [paths]
            output = "out/clean.csv"

            [csv]
            delimiter = ";"

            [missing]
            keep_default_na = false
            na_values = ["?"]
            "#,
        )
        .unwrap();

        assert_eq!(config.paths.input, PathBuf::from("crash.csv"));
        assert_eq!(config.paths.output, PathBuf::from("out/clean.csv"));
        let options = config.csv_options().unwrap();
        assert_eq!(options.delimiter, b';');
        assert!(!options.is_na("NA"));
        assert!(options.is_na("?"));
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        let config: NormalizerConfig = toml::from_str("[csv]\ndelimiter = \"§\"").unwrap();
        assert!(matches!(
            config.csv_options(),
            Err(ConfigError::InvalidDelimiter { value: '§' })
        ));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = NormalizerConfig::load(&dir.path().join("normalizer.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("normalizer.toml");
        std::fs::write(&path, "[paths\ninput = 3").unwrap();
        assert!(matches!(
            NormalizerConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
