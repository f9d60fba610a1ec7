//! CSV reading and writing.

mod header;
mod reader;
mod writer;

pub use header::dedupe_headers;
pub use reader::{read_csv_reader, read_csv_table};
pub use writer::{write_csv_table, write_csv_writer};
