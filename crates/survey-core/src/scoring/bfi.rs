//! Big Five Inventory subscale means.

use survey_model::{
    BfiScores, BfiTrait, Instrument, InstrumentRange, RawTable, Result, ScoringOptions,
};

use crate::response::ResponseReader;

/// Highest answer plus one; reversal maps `v` to `6 - v`.
pub const BFI_REVERSE_BASE: f64 = 6.0;

/// 1-based question numbers belonging to a subscale.
pub fn bfi_items(dimension: BfiTrait) -> &'static [usize] {
    match dimension {
        BfiTrait::Extraversion => &[1, 6, 11, 16, 21, 26, 31, 36],
        BfiTrait::Agreeableness => &[2, 7, 12, 17, 22, 27, 32, 37, 42],
        BfiTrait::Conscientiousness => &[3, 8, 13, 18, 23, 28, 33, 38, 43],
        BfiTrait::Neuroticism => &[4, 9, 14, 19, 24, 29, 34, 39],
        BfiTrait::Openness => &[5, 10, 15, 20, 25, 30, 35, 40, 41, 44],
    }
}

/// 1-based question numbers scored in reverse within a subscale.
pub fn bfi_reversed(dimension: BfiTrait) -> &'static [usize] {
    match dimension {
        BfiTrait::Extraversion => &[6, 21, 31],
        BfiTrait::Agreeableness => &[2, 12, 27, 37],
        BfiTrait::Conscientiousness => &[8, 18, 23, 43],
        BfiTrait::Neuroticism => &[9, 24, 34],
        BfiTrait::Openness => &[35, 41],
    }
}

pub fn reverse_bfi(value: f64) -> f64 {
    BFI_REVERSE_BASE - value
}

/// Rounds to two decimals, ties to even.
pub fn round_mean(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Mean of each subscale for one respondent. Every item is required.
pub fn score_bfi(
    table: &RawTable,
    range: &InstrumentRange,
    row: usize,
    options: &ScoringOptions,
) -> Result<BfiScores> {
    let reader = ResponseReader::new(table, Instrument::Bfi, options);
    let mut scores = BfiScores::default();
    for dimension in BfiTrait::ALL {
        let items = bfi_items(dimension);
        let reversed = bfi_reversed(dimension);
        let mut sum = 0.0;
        for &question in items {
            let value = reader.read_required(row, range.column(question - 1))?;
            sum += if reversed.contains(&question) {
                reverse_bfi(value)
            } else {
                value
            };
        }
        scores.set(dimension, round_mean(sum / items.len() as f64));
    }
    Ok(scores)
}
