//! Case folding over table cells.

use crash_model::{CellValue, Column, Table};

/// Lowercases every present value of every text column.
///
/// Returns the number of cells whose value changed. Numeric and empty columns
/// are left alone, as are missing cells.
pub fn lowercase_text_columns(table: &mut Table) -> usize {
    table.text_columns_mut().map(lowercase_column).sum()
}

/// Lowercases the present values of one column regardless of its kind.
pub fn lowercase_column(column: &mut Column) -> usize {
    rewrite_present(column, str::to_lowercase)
}

/// Uppercases and trims surrounding whitespace from the present values of one column.
///
/// A value that is blank after trimming becomes missing.
pub fn uppercase_trim_column(column: &mut Column) -> usize {
    let mut changed = 0;
    for cell in column.values_mut() {
        let Some(value) = cell.as_str() else {
            continue;
        };
        let folded = uppercase_trim(value);
        if folded == value {
            continue;
        }
        *cell = if folded.is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(folded)
        };
        changed += 1;
    }
    changed
}

/// Uppercase first, then trim, so whitespace produced by case mapping is trimmed too.
pub fn uppercase_trim(value: &str) -> String {
    value.to_uppercase().trim().to_string()
}

fn rewrite_present(column: &mut Column, fold: impl Fn(&str) -> String) -> usize {
    let mut changed = 0;
    for cell in column.values_mut() {
        if let CellValue::Text(value) = cell {
            let folded = fold(value.as_str());
            if folded != *value {
                *value = folded;
                changed += 1;
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crash_model::ColumnKind;

    #[test]
    fn lowercases_only_text_columns() {
        let mut table = Table::new(vec![
            Column::from_options("Light", [Some("DAYLIGHT"), None, Some("dusk")]),
            Column::from_options("Speed", [Some("1E3"), Some("25"), None]),
        ])
        .unwrap();

        assert_eq!(lowercase_text_columns(&mut table), 1);
        let light = table.column("Light").unwrap();
        assert_eq!(light.values()[0], CellValue::text("daylight"));
        assert!(light.values()[1].is_missing());
        let speed = table.column("Speed").unwrap();
        assert_eq!(speed.kind(), ColumnKind::Numeric);
        assert_eq!(speed.values()[0], CellValue::text("1E3"));
    }

    #[test]
    fn blank_values_become_missing_when_trimmed() {
        let mut column =
            Column::from_options("Traffic.Control", [Some("   "), Some(" stop sign"), Some("\t")]);

        assert_eq!(uppercase_trim_column(&mut column), 3);
        assert!(column.values()[0].is_missing());
        assert_eq!(column.values()[1], CellValue::text("STOP SIGN"));
        assert!(column.values()[2].is_missing());
    }

    #[test]
    fn uppercase_trim_folds_then_trims() {
        assert_eq!(uppercase_trim("  stop sign \t"), "STOP SIGN");
        assert_eq!(uppercase_trim("straße"), "STRASSE");
        assert_eq!(uppercase_trim(""), "");
    }
}
