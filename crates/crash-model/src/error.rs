use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("column '{column}' has {actual} values, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("duplicate column '{column}'")]
    DuplicateColumn { column: String },
    #[error("column '{column}' not found in table")]
    MissingColumn { column: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
