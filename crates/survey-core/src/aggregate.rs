//! Whole-table scoring: layout, ASSIST, per-instrument scorers and the join.

use std::collections::HashMap;

use survey_model::{
    RawTable, RespondentRecord, Result, ScoringError, ScoringOptions, SubstanceScore,
    SurveyScores,
};
use tracing::{debug, info, info_span};

use crate::assist::{AssistRow, score_assist};
use crate::classify::{classify_bai, classify_oci, classify_phq, classify_stai};
use crate::layout::SurveyLayout;
use crate::scoring::{score_bai, score_bfi, score_oci, score_phq, score_stai};

/// Scores every respondent row of a table.
///
/// The table is read only. ASSIST totals for all rows are computed first and
/// joined back to each respondent by username; the first failing row aborts
/// the run.
pub fn score_survey(table: &RawTable, options: &ScoringOptions) -> Result<SurveyScores> {
    let span = info_span!("score_survey", respondents = table.respondent_count());
    let _guard = span.enter();

    let layout = SurveyLayout::resolve(table)?;
    let assist_rows = score_assist(table, &layout.assist)?;
    let assist_index = index_by_username(table, &layout, assist_rows)?;

    let mut records = Vec::with_capacity(table.respondent_count());
    for row in table.response_rows() {
        let mut record = score_respondent(table, &layout, row, options)?;
        record.substances = assist_index
            .get(record.username.as_str())
            .cloned()
            .unwrap_or_default();
        records.push(record);
    }

    info!(
        respondents = records.len(),
        substances = layout.assist.catalog.len(),
        strict = options.is_strict(),
        "survey scored"
    );

    Ok(SurveyScores {
        catalog: layout.assist.catalog,
        records,
    })
}

/// Scores the non-ASSIST instruments of one respondent row.
///
/// The returned record has no substance scores; `score_survey` fills them.
pub fn score_respondent(
    table: &RawTable,
    layout: &SurveyLayout,
    row: usize,
    options: &ScoringOptions,
) -> Result<RespondentRecord> {
    let phq = score_phq(table, &layout.phq, row, options)?;
    let bai_total = score_bai(table, &layout.bai, row, options)?;
    let oci_total = score_oci(table, &layout.oci, row, options)?;
    let stai_total = score_stai(table, &layout.stai, row, options)?;
    let bfi = score_bfi(table, &layout.bfi, row, options)?;
    let username = username_at(table, layout, row).to_string();
    let sex = table.cell(row, layout.sex_column).unwrap_or_default().to_string();

    debug!(row, phq_total = phq.total, bai_total, oci_total, stai_total, "respondent scored");

    Ok(RespondentRecord {
        row,
        phq_total: phq.total,
        phq_classification: classify_phq(phq.total),
        phq_difficulty: phq.difficulty,
        bai_total,
        bai_classification: classify_bai(bai_total),
        oci_total,
        oci_classification: classify_oci(oci_total),
        stai_total,
        stai_classification: classify_stai(stai_total, &sex),
        bfi,
        substances: Vec::new(),
        username,
        sex,
    })
}

fn username_at<'a>(table: &'a RawTable, layout: &SurveyLayout, row: usize) -> &'a str {
    table.cell(row, layout.user_column).unwrap_or_default()
}

fn index_by_username<'a>(
    table: &'a RawTable,
    layout: &SurveyLayout,
    assist_rows: Vec<AssistRow>,
) -> Result<HashMap<&'a str, Vec<SubstanceScore>>> {
    let mut first_rows: HashMap<&str, usize> = HashMap::with_capacity(assist_rows.len());
    let mut index = HashMap::with_capacity(assist_rows.len());
    for assist in assist_rows {
        let username = username_at(table, layout, assist.row);
        if let Some(&first_row) = first_rows.get(username) {
            return Err(ScoringError::DuplicateUsername {
                username: username.to_string(),
                first_row,
                row: assist.row,
            });
        }
        first_rows.insert(username, assist.row);
        index.insert(username, assist.substances);
    }
    Ok(index)
}
