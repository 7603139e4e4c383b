use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use survey_model::{FIRST_RESPONSE_ROW, HeaderRow, RawTable};
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};
use crate::options::IngestOptions;

/// Maximum export size accepted (256 MB).
pub const MAX_CSV_FILE_SIZE: u64 = 256 * 1024 * 1024;

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Header labels are matched exactly, so only the BOM is removed.
fn normalize_header_cell(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').to_string()
}

/// Checks the file exists and is within the size limit.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Rejects UTF-16 exports; a UTF-8 BOM is fine.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let mut buffer = [0u8; 2];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|e| IngestError::from_io(path, e))?;
    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }
    Ok(())
}

/// Reads a survey export into a [`RawTable`].
///
/// Every record is kept, header rows included: no header detection, no type
/// inference. Header cells keep their text as read, minus a UTF-8 BOM;
/// respondent cells are also trimmed. Records may have different lengths.
pub fn read_raw_table(path: &Path, options: &IngestOptions) -> Result<RawTable> {
    check_file_size(path, MAX_CSV_FILE_SIZE)?;
    validate_encoding(path)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    // A raw export lacks the column-tag row, so its answers start one row earlier.
    let header_rows = if options.prepend_column_tags {
        FIRST_RESPONSE_ROW - 1
    } else {
        FIRST_RESPONSE_ROW
    };
    let mut rows: Vec<Vec<String>> = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let row = if index < header_rows {
            record.iter().map(normalize_header_cell).collect()
        } else {
            record.iter().map(normalize_cell).collect()
        };
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut table = RawTable::new(rows);
    if options.prepend_column_tags {
        prepend_column_tags(&mut table);
    }
    if !table.has_header_rows() {
        warn!(
            path = %path.display(),
            rows = table.height(),
            "export has fewer rows than the three header rows"
        );
    }

    info!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        respondents = table.respondent_count(),
        "survey export loaded"
    );
    Ok(table)
}

/// Inserts the column-tag row `"1", "2", ..., "N"` above the label rows.
///
/// `N` is the width of the widest row.
pub fn prepend_column_tags(table: &mut RawTable) {
    let width = table.width();
    let tags = (1..=width).map(|tag| tag.to_string()).collect();
    table.insert_row(HeaderRow::ColumnTag.index(), tags);
    debug!(columns = width, "column tag row prepended");
}

fn csv_error(path: &Path, error: csv::Error) -> IngestError {
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::from_io(path, source),
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}
