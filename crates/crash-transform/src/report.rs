//! Statistics gathered while normalizing a table.

use std::collections::BTreeSet;

use serde::Serialize;

/// What one column rule did to its column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassStats {
    pub column: String,
    /// Missing cells replaced by the fill literal.
    pub filled: usize,
    /// Cells changed by case folding before the lookup.
    pub recased: usize,
    /// Cells replaced by a different canonical label.
    pub rewritten: usize,
    /// Present cells with no canonical label.
    pub unmapped_cells: usize,
    /// Distinct values with no canonical label.
    pub unmapped: BTreeSet<String>,
}

/// Summary of a full normalizer run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizationReport {
    pub rows: usize,
    pub columns: usize,
    /// Cells changed by the lowercase pass before the column rules.
    pub initial_lowercased: usize,
    pub passes: Vec<PassStats>,
    /// Cells changed by the lowercase pass after the column rules.
    pub final_lowercased: usize,
}

impl NormalizationReport {
    pub fn pass(&self, column: &str) -> Option<&PassStats> {
        self.passes.iter().find(|pass| pass.column == column)
    }

    pub fn total_filled(&self) -> usize {
        self.passes.iter().map(|pass| pass.filled).sum()
    }

    pub fn total_rewritten(&self) -> usize {
        self.passes.iter().map(|pass| pass.rewritten).sum()
    }

    pub fn total_unmapped(&self) -> usize {
        self.passes.iter().map(|pass| pass.unmapped_cells).sum()
    }
}
