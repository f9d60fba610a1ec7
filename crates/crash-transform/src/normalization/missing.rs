//! Missing-value fill.

use crash_model::{CellValue, Column, ColumnKind};

/// Replaces every missing cell with `literal` and returns how many were filled.
///
/// The column kind is re-inferred when anything was filled, so an all-missing
/// column filled with a word becomes a text column.
pub fn fill_missing(column: &mut Column, literal: &str) -> usize {
    let mut filled = 0;
    for cell in column.values_mut() {
        if cell.is_missing() {
            *cell = CellValue::text(literal);
            filled += 1;
        }
    }
    if filled > 0 {
        let kind = ColumnKind::infer(column.values());
        column.set_kind(kind);
    }
    filled
}
