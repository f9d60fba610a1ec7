#![deny(unsafe_code)]

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Inferred storage kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// At least one present value is not a number.
    Text,
    /// Every present value parses as a number.
    Numeric,
    /// No present values.
    #[default]
    Empty,
}

impl ColumnKind {
    pub fn infer<'a>(values: impl IntoIterator<Item = &'a CellValue>) -> Self {
        let mut kind = Self::Empty;
        for value in values {
            let Some(text) = value.as_str() else {
                continue;
            };
            if !is_numeric_literal(text) {
                return Self::Text;
            }
            kind = Self::Numeric;
        }
        kind
    }

    pub fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }
}

/// Returns true when the value reads as an integer or floating point number.
///
/// Spelled-out specials such as `inf` or `NaN` are not numbers here.
pub fn is_numeric_literal(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.bytes().any(|byte| byte.is_ascii_digit()) && trimmed.parse::<f64>().is_ok()
}

/// A named column of cells.
///
/// The number of cells is fixed at construction; callers can rewrite cells
/// through [`Column::values_mut`] but cannot add or remove rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    kind: ColumnKind,
    values: Vec<CellValue>,
}

impl Column {
    /// Build a column, inferring its kind from the values.
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        let kind = ColumnKind::infer(&values);
        Self {
            name: name.into(),
            kind,
            values,
        }
    }

    /// Build a column from optional strings (`None` is missing).
    pub fn from_options<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<S>>,
    ) -> Self {
        let values = values
            .into_iter()
            .map(|value| value.map_or(CellValue::Missing, CellValue::text))
            .collect();
        Self::new(name, values)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: ColumnKind) {
        self.kind = kind;
    }

    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [CellValue] {
        &mut self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_missing()).count()
    }

    /// Present values in row order.
    pub fn present_values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().filter_map(CellValue::as_str)
    }
}

/// Ordered collection of equally sized columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
    height: usize,
}

impl Table {
    /// Assemble a table, rejecting ragged or duplicate columns.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let height = columns.first().map_or(0, Column::len);
        let mut seen = BTreeSet::new();
        for column in &columns {
            if column.len() != height {
                return Err(ModelError::ColumnLengthMismatch {
                    column: column.name.clone(),
                    expected: height,
                    actual: column.len(),
                });
            }
            if !seen.insert(column.name.as_str()) {
                return Err(ModelError::DuplicateColumn {
                    column: column.name.clone(),
                });
            }
        }
        Ok(Self { columns, height })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.name == name)
    }

    pub fn require_column_mut(&mut self, name: &str) -> Result<&mut Column> {
        self.column_mut(name)
            .ok_or_else(|| ModelError::MissingColumn {
                column: name.to_string(),
            })
    }

    /// Names from `required` that are absent, in the order given.
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| !self.has_column(name))
            .map(|name| (*name).to_string())
            .collect()
    }

    pub fn text_columns_mut(&mut self) -> impl Iterator<Item = &mut Column> {
        self.columns
            .iter_mut()
            .filter(|column| column.kind.is_text())
    }

    /// Cells of one row in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&CellValue>> {
        if index >= self.height {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|column| &column.values[index])
                .collect(),
        )
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<&CellValue>> {
        (0..self.height).filter_map(|index| self.row(index))
    }
}
