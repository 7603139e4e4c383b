//! STAI trait-anxiety scoring.

use survey_model::{Instrument, InstrumentRange, RawTable, Result, ScoringOptions};

use crate::response::{ResponseReader, truncate_total};

/// Offsets from the block start of the positively worded items.
pub const STAI_REVERSED_OFFSETS: [usize; 7] = [0, 5, 6, 9, 12, 15, 18];

/// Highest answer on the STAI scale; reversal maps `v` to `max - v`.
pub const STAI_SCALE_MAX: f64 = 3.0;

pub fn reverse_stai(value: f64) -> f64 {
    STAI_SCALE_MAX - value
}

/// Sums the block after reversing the positively worded items.
///
/// Missing answers are skipped; they are neither reversed nor defaulted.
pub fn score_stai(
    table: &RawTable,
    range: &InstrumentRange,
    row: usize,
    options: &ScoringOptions,
) -> Result<i64> {
    let reader = ResponseReader::new(table, Instrument::Stai, options);
    let mut sum = 0.0;
    for (offset, column) in range.columns().enumerate() {
        let Some(value) = reader.read(row, column, true)? else {
            continue;
        };
        sum += if STAI_REVERSED_OFFSETS.contains(&offset) {
            reverse_stai(value)
        } else {
            value
        };
    }
    Ok(truncate_total(sum))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_table(answers: &[&str]) -> RawTable {
        let width = answers.len();
        RawTable::new(vec![
            (1..=width).map(|idx| idx.to_string()).collect(),
            vec![String::new(); width],
            vec![String::new(); width],
            answers.iter().map(|value| value.to_string()).collect(),
        ])
    }

    #[test]
    fn reversed_items_flip() {
        // All zeros: only the seven reversed items count, as 3 each.
        let table = row_table(&["0"; 20]);
        let range = InstrumentRange::new(Instrument::Stai, 0, 19).expect("range");
        let total = score_stai(&table, &range, 3, &ScoringOptions::default()).expect("score");
        assert_eq!(total, 21);
    }

    #[test]
    fn missing_reversed_item_is_not_defaulted() {
        let mut answers = ["0"; 20];
        answers[0] = "";
        answers[5] = "";
        let table = row_table(&answers);
        let range = InstrumentRange::new(Instrument::Stai, 0, 19).expect("range");
        let total = score_stai(&table, &range, 3, &ScoringOptions::default()).expect("score");
        assert_eq!(total, 15);
    }

    #[test]
    fn reversal_is_involutive() {
        for value in [0.0, 1.0, 2.0, 3.0] {
            assert_eq!(reverse_stai(reverse_stai(value)), value);
        }
    }
}
