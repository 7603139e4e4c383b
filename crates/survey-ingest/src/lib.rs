//! Survey export ingestion.
//!
//! Loads a survey tool's CSV export into a [`survey_model::RawTable`] with
//! every row kept as text, and optionally adds the sequential column-tag row
//! that raw exports lack.

mod csv_table;
mod error;
mod options;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv_table::{
    MAX_CSV_FILE_SIZE, check_file_size, prepend_column_tags, read_raw_table, validate_encoding,
};

// === Configuration ===
pub use options::IngestOptions;
