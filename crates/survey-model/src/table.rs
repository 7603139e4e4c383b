//! Raw survey export as an untyped grid of cells.

use serde::{Deserialize, Serialize};

/// Index of the first respondent row; rows before it are header rows.
pub const FIRST_RESPONSE_ROW: usize = 3;

/// The three header rows that precede respondent answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderRow {
    /// Sequential column tags ("1", "2", ...).
    ColumnTag,
    /// Instrument or section label; set on the first column of a block.
    Label,
    /// Item-level label (question text or choice text).
    ItemLabel,
}

impl HeaderRow {
    /// Zero-based row index inside the raw table.
    pub fn index(self) -> usize {
        match self {
            HeaderRow::ColumnTag => 0,
            HeaderRow::Label => 1,
            HeaderRow::ItemLabel => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HeaderRow::ColumnTag => "column tag",
            HeaderRow::Label => "label",
            HeaderRow::ItemLabel => "item label",
        }
    }
}

impl std::fmt::Display for HeaderRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} row", self.as_str())
    }
}

/// Rows of string cells exactly as read from the export.
///
/// Row 0 holds column tags, rows 1 and 2 hold labels and rows 3+ hold one
/// respondent each. Rows may be ragged; absent trailing cells read as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    /// Number of rows including the header rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn header(&self, which: HeaderRow) -> Option<&[String]> {
        self.row(which.index())
    }

    /// Returns true when all three header rows are present.
    pub fn has_header_rows(&self) -> bool {
        self.rows.len() >= FIRST_RESPONSE_ROW
    }

    /// Cell text, or `""` when the cell is absent.
    pub fn raw_cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }

    /// Trimmed cell text, or `None` when the cell is missing.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        let value = self.raw_cell(row, column).trim();
        if value.is_empty() { None } else { Some(value) }
    }

    pub fn is_missing(&self, row: usize, column: usize) -> bool {
        self.cell(row, column).is_none()
    }

    /// Zero-based indices of respondent rows.
    pub fn response_rows(&self) -> std::ops::Range<usize> {
        FIRST_RESPONSE_ROW.min(self.rows.len())..self.rows.len()
    }

    pub fn respondent_count(&self) -> usize {
        self.response_rows().len()
    }

    /// Inserts a row before `index`, shifting later rows down.
    pub fn insert_row(&mut self, index: usize, row: Vec<String>) {
        self.rows.insert(index, row);
    }
}
