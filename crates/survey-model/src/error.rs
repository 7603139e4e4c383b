//! Errors raised while resolving the survey layout and scoring respondents.
//!
//! Row and column fields are zero-based table indices; messages print them
//! one-based, the way a spreadsheet shows them.

use thiserror::Error;

use crate::instrument::Instrument;
use crate::table::HeaderRow;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    // === Layout Errors ===
    /// A required label is absent from the expected header row.
    #[error("header value '{label}' was not found in the {row}")]
    HeaderNotFound { label: String, row: HeaderRow },

    /// The table does not have the three header rows.
    #[error("expected 3 header rows, found {found} rows")]
    MissingHeaderRows { found: usize },

    /// An instrument's end label precedes its start label.
    #[error("{instrument} block ends at column {} before it starts at column {}", .end + 1, .start + 1)]
    InvertedRange {
        instrument: Instrument,
        start: usize,
        end: usize,
    },

    /// An instrument block does not span the expected number of columns.
    #[error("{instrument} block spans {found} columns, expected {expected}")]
    UnexpectedItemCount {
        instrument: Instrument,
        expected: usize,
        found: usize,
    },

    // === Response Errors ===
    /// A cell that must be numeric is missing or cannot be parsed.
    #[error("{instrument}: row {}, column {} has invalid value '{value}'", .row + 1, .column + 1)]
    InvalidResponseValue {
        instrument: Instrument,
        row: usize,
        column: usize,
        value: String,
    },

    /// A numeric answer lies outside the instrument's item scale.
    #[error("{instrument}: row {}, column {} has value {value} outside [{min}, {max}]", .row + 1, .column + 1)]
    ResponseOutOfRange {
        instrument: Instrument,
        row: usize,
        column: usize,
        value: f64,
        min: f64,
        max: f64,
    },

    // === ASSIST Errors ===
    /// "None of the above" was chosen but substance answers are present.
    #[error(
        "ASSIST: row {} selected none of the above but has answers in columns {}",
        .row + 1,
        one_based(.columns)
    )]
    AssistRowInconsistency { row: usize, columns: Vec<usize> },

    /// A follow-up answer is not one of the codes allowed for its question.
    #[error(
        "ASSIST: row {}, column {}: question {question} found {code}, allowed values are {allowed:?}",
        .row + 1,
        .column + 1
    )]
    InvalidAssistCode {
        row: usize,
        column: usize,
        question: u8,
        code: i64,
        allowed: &'static [i64],
    },

    // === Join Errors ===
    /// Two respondent rows share a username, so results cannot be joined.
    #[error("username '{username}' appears on rows {} and {}", .first_row + 1, .row + 1)]
    DuplicateUsername {
        username: String,
        first_row: usize,
        row: usize,
    },
}

fn one_based(columns: &[usize]) -> String {
    columns
        .iter()
        .map(|column| (column + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for layout resolution and scoring.
pub type Result<T> = std::result::Result<T, ScoringError>;
