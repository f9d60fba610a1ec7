//! Canonical map application.

use std::collections::BTreeSet;

use crash_model::{CanonicalMap, CellValue, Column};

/// Outcome of running one canonical map over a column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapOutcome {
    /// Cells rewritten to a different label.
    pub rewritten: usize,
    /// Cells with no entry in the map.
    pub unmapped_cells: usize,
    /// Distinct values with no entry in the map.
    pub unmapped: BTreeSet<String>,
}

/// Replaces each present value that has an entry in `map` with its canonical label.
///
/// Values without an entry and missing cells pass through unchanged.
pub fn apply_canonical_map(column: &mut Column, map: &CanonicalMap) -> MapOutcome {
    let mut outcome = MapOutcome::default();
    for cell in column.values_mut() {
        let CellValue::Text(value) = cell else {
            continue;
        };
        match map.lookup(value) {
            Some(canonical) => {
                if canonical != value.as_str() {
                    *value = canonical.to_string();
                    outcome.rewritten += 1;
                }
            }
            None => {
                outcome.unmapped_cells += 1;
                if !outcome.unmapped.contains(value.as_str()) {
                    outcome.unmapped.insert(value.clone());
                }
            }
        }
    }
    outcome
}
