//! ASSIST substance involvement scoring.
//!
//! Each substance has seven questions laid out nine columns apart: question 1
//! ("ever used") at the substance's base column, question `q` at
//! `base + 9 * (q - 1)`. Questions 2-7 carry the scored response codes.
//!
//! Per respondent row:
//!
//! 1. When "none of the above" is answered with 0 the whole substance block
//!    must be empty; otherwise the row is rejected.
//! 2. For each substance used at least once (except the free-text "other"),
//!    a question-2 answer of 0 ("never in the past three months") forces
//!    questions 3-5 to 0.
//! 3. The same substances have questions 2-7 checked against their allowed
//!    codes.
//!
//! The substance total is the sum of the present answers to questions 2-7,
//! leaving out question 5 for tobacco.

use survey_model::{
    Instrument, RawTable, Result, ScoringError, Substance, SubstanceKind, SubstanceScore,
};
use tracing::trace;

use crate::classify::classify_risk;
use crate::layout::{ASSIST_QUESTION_STRIDE, AssistLayout};
use crate::response::parse_code;

/// First and last scored question numbers.
pub const FIRST_FOLLOW_UP: u8 = 2;
pub const LAST_FOLLOW_UP: u8 = 7;

/// Question excluded from the tobacco total.
pub const TOBACCO_EXCLUDED_QUESTION: u8 = 5;

/// Questions forced to 0 when question 2 is answered with 0.
pub const ZEROED_QUESTIONS: [u8; 3] = [3, 4, 5];

/// Allowed response codes for questions 2-7.
pub fn allowed_codes(question: u8) -> &'static [i64] {
    match question {
        2 => &[0, 2, 3, 4, 6],
        3 => &[0, 3, 4, 5, 6],
        4 => &[0, 4, 5, 6, 7],
        5 => &[0, 5, 6, 7, 8],
        6 | 7 => &[0, 3, 6],
        _ => &[],
    }
}

/// Column of question `question` for a substance whose question 1 sits at `base`.
pub fn question_column(base: usize, question: u8) -> usize {
    base + ASSIST_QUESTION_STRIDE * usize::from(question - 1)
}

/// Follow-up answers of one substance, indexed by question number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FollowUps([Option<i64>; 6]);

impl FollowUps {
    pub fn get(&self, question: u8) -> Option<i64> {
        self.0[Self::slot(question)]
    }

    pub fn set(&mut self, question: u8, value: Option<i64>) {
        self.0[Self::slot(question)] = value;
    }

    fn slot(question: u8) -> usize {
        debug_assert!((FIRST_FOLLOW_UP..=LAST_FOLLOW_UP).contains(&question));
        usize::from(question - FIRST_FOLLOW_UP)
    }

    /// Applies the question-2 skip rule.
    pub fn zero_after_never(&mut self) {
        if self.get(2) == Some(0) {
            for question in ZEROED_QUESTIONS {
                self.set(question, Some(0));
            }
        }
    }

    /// Sum of present answers, leaving out question 5 for tobacco.
    pub fn total(&self, kind: SubstanceKind) -> i64 {
        (FIRST_FOLLOW_UP..=LAST_FOLLOW_UP)
            .filter(|&question| {
                !(kind == SubstanceKind::Tobacco && question == TOBACCO_EXCLUDED_QUESTION)
            })
            .filter_map(|question| self.get(question))
            .sum()
    }
}

/// ASSIST results of one respondent row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistRow {
    pub row: usize,
    pub substances: Vec<SubstanceScore>,
}

/// Scores every respondent row of the table.
pub fn score_assist(table: &RawTable, assist: &AssistLayout) -> Result<Vec<AssistRow>> {
    table
        .response_rows()
        .map(|row| {
            Ok(AssistRow {
                row,
                substances: score_assist_row(table, assist, row)?,
            })
        })
        .collect()
}

/// Scores one respondent row, in catalog order.
pub fn score_assist_row(
    table: &RawTable,
    assist: &AssistLayout,
    row: usize,
) -> Result<Vec<SubstanceScore>> {
    let none_selected = read_code(table, row, assist.none_of_above)? == Some(0);
    if none_selected {
        check_block_empty(table, assist, row)?;
    }

    let mut scores = Vec::with_capacity(assist.catalog.len());
    for substance in &assist.catalog {
        let mut answers = read_follow_ups(table, substance, row)?;
        let screened = !none_selected
            && substance.kind != SubstanceKind::Other
            && !table.is_missing(row, substance.base_column);
        if screened {
            answers.zero_after_never();
            validate_follow_ups(&answers, substance, row)?;
        }
        let total = answers.total(substance.kind);
        trace!(row, substance = substance.kind.as_str(), total, "assist substance scored");
        scores.push(SubstanceScore {
            kind: substance.kind,
            total,
            risk: classify_risk(substance.kind, total),
        });
    }
    Ok(scores)
}

fn check_block_empty(table: &RawTable, assist: &AssistLayout, row: usize) -> Result<()> {
    let answered: Vec<usize> = assist
        .substance_block()
        .filter(|&column| !table.is_missing(row, column))
        .collect();
    if answered.is_empty() {
        Ok(())
    } else {
        Err(ScoringError::AssistRowInconsistency {
            row,
            columns: answered,
        })
    }
}

fn read_follow_ups(table: &RawTable, substance: &Substance, row: usize) -> Result<FollowUps> {
    let mut answers = FollowUps::default();
    for question in FIRST_FOLLOW_UP..=LAST_FOLLOW_UP {
        let column = question_column(substance.base_column, question);
        answers.set(question, read_code(table, row, column)?);
    }
    Ok(answers)
}

fn validate_follow_ups(answers: &FollowUps, substance: &Substance, row: usize) -> Result<()> {
    for question in FIRST_FOLLOW_UP..=LAST_FOLLOW_UP {
        let Some(code) = answers.get(question) else {
            continue;
        };
        let allowed = allowed_codes(question);
        if !allowed.contains(&code) {
            return Err(ScoringError::InvalidAssistCode {
                row,
                column: question_column(substance.base_column, question),
                question,
                code,
                allowed,
            });
        }
    }
    Ok(())
}

fn read_code(table: &RawTable, row: usize, column: usize) -> Result<Option<i64>> {
    let Some(raw) = table.cell(row, column) else {
        return Ok(None);
    };
    parse_code(raw)
        .map(Some)
        .ok_or_else(|| ScoringError::InvalidResponseValue {
            instrument: Instrument::Assist,
            row,
            column,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_columns_step_by_nine() {
        assert_eq!(question_column(100, 1), 100);
        assert_eq!(question_column(100, 2), 109);
        assert_eq!(question_column(100, 5), 136);
        assert_eq!(question_column(100, 7), 154);
    }

    #[test]
    fn tobacco_total_skips_question_five() {
        let mut answers = FollowUps::default();
        for question in FIRST_FOLLOW_UP..=LAST_FOLLOW_UP {
            answers.set(question, Some(i64::from(question)));
        }
        // 2 + 3 + 4 + 5 + 6 + 7
        assert_eq!(answers.total(SubstanceKind::Alcohol), 27);
        assert_eq!(answers.total(SubstanceKind::Tobacco), 22);
    }

    #[test]
    fn never_used_recently_zeroes_deeper_questions() {
        let mut answers = FollowUps::default();
        answers.set(2, Some(0));
        answers.set(3, Some(6));
        answers.set(5, Some(8));
        answers.set(6, Some(3));
        answers.zero_after_never();
        assert_eq!(answers.get(3), Some(0));
        assert_eq!(answers.get(4), Some(0));
        assert_eq!(answers.get(5), Some(0));
        assert_eq!(answers.get(6), Some(3));
        assert_eq!(answers.total(SubstanceKind::Cannabis), 3);
    }

    #[test]
    fn missing_answers_contribute_nothing() {
        let mut answers = FollowUps::default();
        answers.set(7, Some(6));
        assert_eq!(answers.total(SubstanceKind::Opioids), 6);
        answers.zero_after_never();
        assert_eq!(answers.get(3), None);
    }

    #[test]
    fn allowed_codes_cover_questions_two_to_seven() {
        for question in FIRST_FOLLOW_UP..=LAST_FOLLOW_UP {
            assert!(allowed_codes(question).contains(&0));
        }
        assert!(allowed_codes(1).is_empty());
        assert!(!allowed_codes(6).contains(&4));
    }
}
