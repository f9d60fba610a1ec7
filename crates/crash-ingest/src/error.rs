//! Error types for crash record ingestion.

use std::path::PathBuf;

use crash_model::ModelError;
use thiserror::Error;

/// Errors that can occur while loading or saving a table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Input Errors ===
    /// Input file does not exist.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Parsed columns could not form a table.
    #[error(transparent)]
    Model(#[from] ModelError),

    // === Output Errors ===
    /// Failed to create or write the output file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode a record.
    #[error("failed to write CSV {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },
}

/// Coarse classification used when reporting failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Problem with the input file or its contents.
    Input,
    /// Problem persisting the output.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Io => write!(f, "io"),
        }
    }
}

impl IngestError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileNotFound { .. }
            | Self::FileRead { .. }
            | Self::CsvParse { .. }
            | Self::EmptyCsv { .. }
            | Self::Model(_) => ErrorCategory::Input,
            Self::FileWrite { .. } | Self::CsvWrite { .. } => ErrorCategory::Io,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/crash.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/crash.csv");
    }

    #[test]
    fn test_error_category() {
        let missing = IngestError::FileNotFound {
            path: PathBuf::from("crash.csv"),
        };
        let write = IngestError::FileWrite {
            path: PathBuf::from("out/crash2.csv"),
            source: std::io::Error::other("disk full"),
        };
        assert_eq!(missing.category(), ErrorCategory::Input);
        assert_eq!(write.category(), ErrorCategory::Io);
        assert_eq!(write.category().to_string(), "io");
    }

    #[test]
    fn test_error_from_model() {
        let model = ModelError::DuplicateColumn {
            column: "Light".to_string(),
        };
        let err: IngestError = model.into();
        assert!(matches!(err, IngestError::Model(_)));
        assert_eq!(err.category(), ErrorCategory::Input);
    }
}
