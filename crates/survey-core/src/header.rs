//! Column lookup by exact header text.

use survey_model::{HeaderRow, RawTable, Result, ScoringError};

/// Zero-based index of the first cell in `row` equal to `target`.
///
/// Matching is exact: no trimming, case folding or partial matches.
pub fn locate(row: &[String], target: &str) -> Option<usize> {
    row.iter().position(|cell| cell == target)
}

/// Looks up `target` in one of the table's header rows.
pub fn locate_in(table: &RawTable, which: HeaderRow, target: &str) -> Result<usize> {
    table
        .header(which)
        .and_then(|row| locate(row, target))
        .ok_or_else(|| ScoringError::HeaderNotFound {
            label: target.to_string(),
            row: which,
        })
}
