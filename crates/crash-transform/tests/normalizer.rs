//! End-to-end tests for the normalizer passes.

use crash_model::{CellValue, Column, ColumnKind, Table};
use crash_transform::{Normalizer, REQUIRED_COLUMNS, TransformError};

fn crash_table(rows: &[[Option<&str>; 5]]) -> Table {
    let names = ["Report.Number", "Route.Type", "Light", "Traffic.Control", "Collision.Type"];
    let columns = names
        .iter()
        .enumerate()
        .map(|(index, name)| Column::from_options(*name, rows.iter().map(|row| row[index])))
        .collect();
    Table::new(columns).expect("build table")
}

fn cell(table: &Table, column: &str, row: usize) -> Option<String> {
    table
        .column(column)
        .expect("column present")
        .values()[row]
        .as_str()
        .map(str::to_string)
}

#[test]
fn canonicalizes_each_category_column() {
    let mut table = crash_table(&[
        [Some("1"), None, Some("DARK LIGHTS ON"), Some("TRAFFIC CONTROL SIGNAL"), Some("HEAD ON LEFT TURN")],
        [Some("2"), Some("County Route"), Some("Foggy"), Some("  Stop Sign "), None],
        [Some("3"), Some("Maryland (State) Route"), None, None, Some("Angle Meets Right Turn")],
    ]);

    let report = Normalizer::new().run(&mut table).expect("normalize");

    assert_eq!(cell(&table, "Route.Type", 0).as_deref(), Some("unknown"));
    assert_eq!(cell(&table, "Route.Type", 1).as_deref(), Some("county"));
    assert_eq!(cell(&table, "Route.Type", 2).as_deref(), Some("maryland (state)"));

    assert_eq!(cell(&table, "Light", 0).as_deref(), Some("dark - lighted"));
    assert_eq!(cell(&table, "Light", 1).as_deref(), Some("foggy"));
    assert_eq!(cell(&table, "Light", 2), None);

    assert_eq!(cell(&table, "Traffic.Control", 0).as_deref(), Some("traffic signal"));
    assert_eq!(cell(&table, "Traffic.Control", 1).as_deref(), Some("stop sign"));
    assert_eq!(cell(&table, "Traffic.Control", 2).as_deref(), Some("unknown"));

    assert_eq!(cell(&table, "Collision.Type", 0).as_deref(), Some("head-on collisions"));
    assert_eq!(cell(&table, "Collision.Type", 1).as_deref(), Some("unknown"));
    assert_eq!(cell(&table, "Collision.Type", 2).as_deref(), Some("turning collisions"));

    assert_eq!(report.rows, 3);
    assert_eq!(report.passes.len(), 4);
    let route = report.pass("Route.Type").expect("route pass");
    assert_eq!(route.filled, 1);
    assert_eq!(route.rewritten, 2);
}

#[test]
fn report_counts_unmapped_values() {
    let mut table = crash_table(&[
        [Some("1"), Some("Interstate"), Some("Foggy"), Some("Stop Sign"), Some("Jackknife")],
        [Some("2"), Some("Interstate"), Some("Dusk"), Some("Roundabout"), Some("Head On")],
    ]);

    let report = Normalizer::new().run(&mut table).expect("normalize");

    let route = report.pass("Route.Type").expect("route pass");
    assert_eq!(route.unmapped_cells, 2);
    assert_eq!(route.unmapped.len(), 1);
    assert!(route.unmapped.contains("interstate"));
    let traffic = report.pass("Traffic.Control").expect("traffic pass");
    assert!(traffic.unmapped.contains("ROUNDABOUT"));
    assert_eq!(cell(&table, "Traffic.Control", 1).as_deref(), Some("roundabout"));
}

#[test]
fn other_text_columns_are_lowercased_and_numbers_kept() {
    let mut table = crash_table(&[[Some("1"), None, None, None, None]]);
    let mut columns: Vec<Column> = table.columns().to_vec();
    columns.push(Column::from_options("Agency.Name", [Some("Montgomery County Police")]));
    columns.push(Column::from_options("Latitude", [Some("39.1E0")]));
    table = Table::new(columns).expect("rebuild table");

    Normalizer::new().run(&mut table).expect("normalize");

    assert_eq!(
        cell(&table, "Agency.Name", 0).as_deref(),
        Some("montgomery county police")
    );
    assert_eq!(cell(&table, "Latitude", 0).as_deref(), Some("39.1E0"));
    assert_eq!(
        table.column("Report.Number").expect("column").kind(),
        ColumnKind::Numeric
    );
}

#[test]
fn every_required_column_is_checked() {
    for skipped in REQUIRED_COLUMNS {
        let columns = REQUIRED_COLUMNS
            .iter()
            .filter(|name| **name != skipped)
            .map(|name| Column::new(*name, vec![CellValue::text("x")]))
            .collect();
        let mut table = Table::new(columns).expect("build table");

        match Normalizer::new().run(&mut table) {
            Err(TransformError::MissingColumns { columns }) => {
                assert_eq!(columns, vec![skipped.to_string()]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }
}

#[test]
fn empty_table_is_normalized() {
    let mut table = crash_table(&[]);
    let report = Normalizer::new().run(&mut table).expect("normalize");

    assert_eq!(report.rows, 0);
    assert_eq!(report.total_filled(), 0);
}

#[test]
fn boolean_looking_columns_are_lowercased_as_text() {
    let mut table = crash_table(&[[Some("1"), None, None, None, None]]);
    let mut columns: Vec<Column> = table.columns().to_vec();
    columns.push(Column::from_options("Hit.And.Run", [Some("True")]));
    table = Table::new(columns).expect("rebuild table");

    Normalizer::new().run(&mut table).expect("normalize");

    let column = table.column("Hit.And.Run").expect("column");
    assert_eq!(column.kind(), ColumnKind::Text);
    assert_eq!(cell(&table, "Hit.And.Run", 0).as_deref(), Some("true"));
}
