//! Plain-sum instruments: PHQ, BAI and OCI-R.

use survey_model::{Instrument, InstrumentRange, RawTable, Result, ScoringOptions};

use crate::response::{ResponseReader, truncate_total};

/// PHQ symptom total plus the functional-difficulty answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhqScore {
    pub total: i64,
    pub difficulty: Option<i64>,
}

/// Sums the columns of `range` for one respondent, skipping missing cells.
pub fn sum_range(
    table: &RawTable,
    range: &InstrumentRange,
    row: usize,
    options: &ScoringOptions,
) -> Result<i64> {
    let reader = ResponseReader::new(table, range.instrument(), options);
    let mut sum = 0.0;
    for column in range.columns() {
        if let Some(value) = reader.read(row, column, true)? {
            sum += value;
        }
    }
    Ok(truncate_total(sum))
}

/// Scores the PHQ block.
///
/// The block's last column is the difficulty question: it may be empty and is
/// not part of the symptom total.
pub fn score_phq(
    table: &RawTable,
    range: &InstrumentRange,
    row: usize,
    options: &ScoringOptions,
) -> Result<PhqScore> {
    let reader = ResponseReader::new(table, Instrument::Phq, options);
    let mut sum = 0.0;
    for column in range.start()..range.end() {
        if let Some(value) = reader.read(row, column, true)? {
            sum += value;
        }
    }
    let difficulty = reader.read(row, range.end(), false)?.map(truncate_total);
    Ok(PhqScore {
        total: truncate_total(sum),
        difficulty,
    })
}

pub fn score_bai(
    table: &RawTable,
    range: &InstrumentRange,
    row: usize,
    options: &ScoringOptions,
) -> Result<i64> {
    sum_range(table, range, row, options)
}

pub fn score_oci(
    table: &RawTable,
    range: &InstrumentRange,
    row: usize,
    options: &ScoringOptions,
) -> Result<i64> {
    sum_range(table, range, row, options)
}
