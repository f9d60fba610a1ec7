//! CSV file reading into a column-oriented table.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crash_model::{CellValue, Column, Table};
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::options::CsvOptions;

use super::header::dedupe_headers;

/// Reads a CSV file with a single header row into a [`Table`].
///
/// Empty fields and NA tokens become [`CellValue::Missing`]; column kinds are
/// inferred from the remaining values.
pub fn read_csv_table(path: &Path, options: &CsvOptions) -> Result<Table> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_csv_reader(BufReader::new(file), path, options)
}

/// Reads CSV content from any reader; `source` is used in errors and logs.
pub fn read_csv_reader<R: Read>(reader: R, source: &Path, options: &CsvOptions) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let mut records = reader.records();
    let header = loop {
        match records.next() {
            Some(record) => {
                let record = record.map_err(|e| csv_error(source, e))?;
                if !is_blank(&record) {
                    break record;
                }
            }
            None => {
                return Err(IngestError::EmptyCsv {
                    path: source.to_path_buf(),
                });
            }
        }
    };

    let names = dedupe_headers(header.iter().map(str::to_string).collect());
    let width = names.len();
    let mut cells: Vec<Vec<CellValue>> = vec![Vec::new(); width];
    let mut padded_rows = 0usize;

    for record in records {
        let record = record.map_err(|e| csv_error(source, e))?;
        if is_blank(&record) {
            continue;
        }
        if record.len() > width {
            let line = record.position().map_or(0, csv::Position::line);
            return Err(IngestError::CsvParse {
                path: source.to_path_buf(),
                message: format!(
                    "line {line}: expected {width} fields, found {}",
                    record.len()
                ),
            });
        }
        if record.len() < width {
            padded_rows += 1;
        }
        for (index, column) in cells.iter_mut().enumerate() {
            let value = match record.get(index) {
                Some(raw) if !options.is_na(raw) => CellValue::text(raw),
                _ => CellValue::Missing,
            };
            column.push(value);
        }
    }

    if padded_rows > 0 {
        warn!(
            path = %source.display(),
            rows = padded_rows,
            "short rows padded with missing values"
        );
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, values)| Column::new(name, values))
        .collect();
    let table = Table::new(columns)?;

    debug!(
        path = %source.display(),
        rows = table.height(),
        columns = table.width(),
        "csv loaded"
    );
    Ok(table)
}

/// A record produced by an empty line.
fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty) && record.len() <= 1
}

fn csv_error(path: &Path, err: csv::Error) -> IngestError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}
