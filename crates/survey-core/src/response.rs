//! Numeric reading of respondent cells.

use survey_model::{Instrument, RawTable, Result, ScoringError, ScoringOptions};

/// Reads one instrument's answers, applying the configured item checks.
#[derive(Debug, Clone, Copy)]
pub struct ResponseReader<'a> {
    table: &'a RawTable,
    instrument: Instrument,
    options: &'a ScoringOptions,
}

impl<'a> ResponseReader<'a> {
    pub fn new(table: &'a RawTable, instrument: Instrument, options: &'a ScoringOptions) -> Self {
        Self {
            table,
            instrument,
            options,
        }
    }

    /// Parses a cell as a number; `None` when the cell is missing.
    ///
    /// Strict mode also rejects a missing `required` answer and values
    /// outside the instrument's item scale.
    pub fn read(&self, row: usize, column: usize, required: bool) -> Result<Option<f64>> {
        let Some(raw) = self.table.cell(row, column) else {
            if required && self.options.is_strict() {
                return Err(self.invalid(row, column, ""));
            }
            return Ok(None);
        };
        let value = parse_number(raw).ok_or_else(|| self.invalid(row, column, raw))?;
        if self.options.is_strict()
            && let Some(scale) = self.instrument.item_scale()
            && !scale.contains(value)
        {
            return Err(ScoringError::ResponseOutOfRange {
                instrument: self.instrument,
                row,
                column,
                value,
                min: scale.min,
                max: scale.max,
            });
        }
        Ok(Some(value))
    }

    /// Parses a cell that must always be present, regardless of mode.
    pub fn read_required(&self, row: usize, column: usize) -> Result<f64> {
        match self.read(row, column, true)? {
            Some(value) => Ok(value),
            None => Err(self.invalid(row, column, "")),
        }
    }

    fn invalid(&self, row: usize, column: usize, value: &str) -> ScoringError {
        ScoringError::InvalidResponseValue {
            instrument: self.instrument,
            row,
            column,
            value: value.to_string(),
        }
    }
}

/// Parses a finite number, accepting integer and decimal text.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Largest magnitude accepted for a response code.
///
/// Six follow-up codes of this size still sum without overflowing `i64`.
pub const MAX_CODE_MAGNITUDE: i64 = i32::MAX as i64;

/// Parses an integral response code such as `"6"` or `"6.0"`.
///
/// Codes beyond [`MAX_CODE_MAGNITUDE`] are rejected.
pub fn parse_code(raw: &str) -> Option<i64> {
    let value = parse_number(raw)?;
    if value.fract() != 0.0 || value.abs() > MAX_CODE_MAGNITUDE as f64 {
        return None;
    }
    Some(value as i64)
}

/// Truncates a float sum toward zero, the way totals are reported.
pub fn truncate_total(sum: f64) -> i64 {
    sum.trunc() as i64
}
