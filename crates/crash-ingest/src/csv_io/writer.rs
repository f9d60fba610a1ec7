//! CSV serialization of a table.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crash_model::Table;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::options::CsvOptions;

/// Writes a table to `path`: header row first, then rows in table order.
///
/// Missing cells are written as empty fields and no index column is added.
pub fn write_csv_table(table: &Table, path: &Path, options: &CsvOptions) -> Result<()> {
    let file = File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_csv_writer(table, BufWriter::new(file), path, options)?;
    debug!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "csv written"
    );
    Ok(())
}

/// Writes a table to any writer; `target` is used in errors.
pub fn write_csv_writer<W: Write>(
    table: &Table,
    writer: W,
    target: &Path,
    options: &CsvOptions,
) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter)
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    writer
        .write_record(table.column_names())
        .map_err(|e| csv_error(target, e))?;
    for row in table.rows() {
        let fields = row
            .into_iter()
            .map(|cell| cell.as_str().unwrap_or_default());
        writer
            .write_record(fields)
            .map_err(|e| csv_error(target, e))?;
    }
    writer.flush().map_err(|e| IngestError::FileWrite {
        path: target.to_path_buf(),
        source: e,
    })
}

fn csv_error(path: &Path, err: csv::Error) -> IngestError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::FileWrite {
            path: path.to_path_buf(),
            source,
        },
        _ => IngestError::CsvWrite {
            path: path.to_path_buf(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crash_model::Column;

    fn render(table: &Table) -> String {
        let mut buffer = Vec::new();
        write_csv_writer(table, &mut buffer, Path::new("out.csv"), &CsvOptions::default())
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_missing_cells_are_empty_fields() {
        let table = Table::new(vec![
            Column::from_options("Light", [Some("dusk"), None]),
            Column::from_options("Route.Type", [Some("county"), Some("unknown")]),
        ])
        .unwrap();

        assert_eq!(render(&table), "Light,Route.Type\ndusk,county\n,unknown\n");
    }

    #[test]
    fn test_fields_are_quoted_only_when_needed() {
        let table = Table::new(vec![Column::from_options(
            "Collision.Type",
            [Some("sideswipe, same direction"), Some("head on")],
        )])
        .unwrap();

        assert_eq!(
            render(&table),
            "Collision.Type\n\"sideswipe, same direction\"\nhead on\n"
        );
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("crash2.csv");
        let table = Table::new(vec![Column::from_options("A", [Some("x")])]).unwrap();
        let result = write_csv_table(&table, &path, &CsvOptions::default());

        assert!(matches!(result, Err(IngestError::FileWrite { .. })));
    }
}
