//! Crash records ingestion utilities.
//!
//! This crate loads delimited crash record files into a [`crash_model::Table`]
//! and writes tables back out.
//!
//! # Features
//!
//! - **CSV Loading**: header row, missing-value tokens, per-column type inference
//! - **Header Cleanup**: BOM removal, unnamed and duplicate header disambiguation
//! - **CSV Output**: minimal quoting, `\n` terminators, no index column
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use crash_ingest::{CsvOptions, read_csv_table, write_csv_table};
//!
//! let options = CsvOptions::default();
//! let table = read_csv_table(Path::new("crash.csv"), &options)?;
//! write_csv_table(&table, Path::new("crash2.csv"), &options)?;
//! ```

mod csv_io;
mod error;
mod options;

// === Error Types ===
pub use error::{ErrorCategory, IngestError, Result};

// === Options ===
pub use options::{CsvOptions, DEFAULT_NA_VALUES};

// === CSV Reading / Writing ===
pub use csv_io::{
    dedupe_headers, read_csv_reader, read_csv_table, write_csv_table, write_csv_writer,
};
