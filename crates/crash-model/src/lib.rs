//! Data model for crash record normalization.
//!
//! - **table**: column-oriented in-memory table with missing-aware cells
//! - **canonical**: raw label to canonical label lookup tables

pub mod canonical;
pub mod error;
pub mod table;

pub use canonical::{CanonicalMap, MatchMode};
pub use error::{ModelError, Result};
pub use table::{CellValue, Column, ColumnKind, Table, is_numeric_literal};
