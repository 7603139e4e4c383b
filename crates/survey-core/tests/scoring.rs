//! End-to-end scoring of synthetic survey exports.

mod common;

use common::{
    ASSIST_END, ASSIST_START, BAI, FIRST_SUBSTANCE, PHQ, Respondent, SUBSTANCES, assist_column,
    ele01, header_rows, miltos2, survey,
};
use survey_core::{SurveyLayout, score_survey};
use survey_model::{
    BaiLevel, HeaderRow, Instrument, OciStatus, PhqSeverity, RawTable, RiskTier, ScoringError,
    ScoringOptions, StaiLevel, SubstanceKind,
};

fn score(table: &RawTable) -> survey_model::SurveyScores {
    score_survey(table, &ScoringOptions::default()).expect("score survey")
}

/// One respondent under header rows adjusted by `edit`.
fn survey_with_headers(edit: impl FnOnce(&mut [Vec<String>])) -> RawTable {
    let mut rows = header_rows();
    edit(&mut rows);
    rows.push(ele01().into_cells());
    RawTable::new(rows)
}

fn move_label(rows: &mut [Vec<String>], row: HeaderRow, from: usize, to: usize) {
    let cells = &mut rows[row.index()];
    let label = std::mem::take(&mut cells[from]);
    cells[to] = label;
}

#[test]
fn layout_resolves_every_block() {
    let table = survey(vec![ele01()]);
    let layout = SurveyLayout::resolve(&table).expect("layout");
    assert_eq!(layout.user_column, 0);
    assert_eq!(layout.sex_column, 1);
    assert_eq!((layout.phq.start(), layout.phq.end()), (PHQ, PHQ + 9));
    assert_eq!(layout.bai.len(), 21);
    assert_eq!(layout.oci.len(), 18);
    assert_eq!(layout.stai.len(), 20);
    assert_eq!(layout.bfi.len(), 44);
    assert_eq!(layout.assist.start, ASSIST_START);
    assert_eq!(layout.assist.none_of_above, ASSIST_START);
    assert_eq!(layout.assist.first_substance, FIRST_SUBSTANCE);
    let names: Vec<&str> = layout.assist.catalog.names().collect();
    assert_eq!(names, SUBSTANCES);
}

#[test]
fn miltos2_scores_match_reference_values() {
    let scores = score(&survey(vec![ele01(), miltos2()]));
    let record = scores.find("Miltos2").expect("Miltos2 scored");

    assert_eq!(record.phq_total, 18);
    assert_eq!(record.phq_classification, PhqSeverity::ModeratelySevere);
    assert_eq!(record.phq_difficulty, Some(2));
    assert_eq!(record.oci_total, 54);
    assert_eq!(record.oci_classification, OciStatus::AboveCutoff);
    assert_eq!(record.bai_total, 63);
    assert_eq!(record.bai_classification, BaiLevel::PotentiallyConcerning);
    assert_eq!(record.stai_total, 33);
    assert_eq!(record.stai_classification, StaiLevel::Normal);

    assert_eq!(record.bfi.extraversion, 3.25);
    assert_eq!(record.bfi.agreeableness, 3.11);
    assert_eq!(record.bfi.conscientiousness, 3.11);
    assert_eq!(record.bfi.neuroticism, 3.25);
    assert_eq!(record.bfi.openness, 3.6);

    assert_eq!(scores.substance_total("Miltos2", SUBSTANCES[0]), Some(12));
    assert_eq!(scores.substance_total("Miltos2", SUBSTANCES[4]), Some(19));
    assert_eq!(scores.substance_total("Miltos2", "Otro (especifique)"), Some(20));
    assert_eq!(scores.substance_total("Miltos2", SUBSTANCES[1]), Some(0));

    let tobacco = record.substance(SubstanceKind::Tobacco).expect("tobacco");
    assert_eq!(tobacco.risk, RiskTier::BriefIntervention);
    let alcohol = record.substance(SubstanceKind::Alcohol).expect("alcohol");
    assert_eq!(alcohol.risk, RiskTier::NoIntervention);
}

#[test]
fn ele01_scores_match_reference_values() {
    let scores = score(&survey(vec![miltos2(), ele01()]));
    let record = scores.find("Ele01").expect("Ele01 scored");

    assert_eq!(record.phq_total, 0);
    assert_eq!(record.phq_classification, PhqSeverity::Minimal);
    assert_eq!(record.phq_difficulty, None);
    assert_eq!(record.oci_total, 0);
    assert_eq!(record.bai_total, 21);
    assert_eq!(record.bai_classification, BaiLevel::Low);
    assert_eq!(record.stai_total, 21);

    assert_eq!(record.bfi.extraversion, 2.62);
    assert_eq!(record.bfi.agreeableness, 2.78);
    assert_eq!(record.bfi.conscientiousness, 2.78);
    assert_eq!(record.bfi.neuroticism, 2.5);
    assert_eq!(record.bfi.openness, 1.8);

    assert_eq!(record.substances.len(), 9);
    for score in &record.substances {
        assert_eq!(score.total, 0, "{:?}", score.kind);
        assert_eq!(score.risk, RiskTier::NoIntervention);
    }
}

#[test]
fn records_follow_row_order() {
    let scores = score(&survey(vec![miltos2(), ele01()]));
    let rows: Vec<(usize, &str)> = scores
        .records
        .iter()
        .map(|record| (record.row, record.username.as_str()))
        .collect();
    assert_eq!(rows, vec![(3, "Miltos2"), (4, "Ele01")]);
}

#[test]
fn scoring_is_idempotent_and_leaves_input_untouched() {
    let table = survey(vec![miltos2(), ele01()]);
    let before = table.clone();
    let first = score(&table);
    let second = score(&table);
    assert_eq!(first, second);
    assert_eq!(table, before);
}

#[test]
fn header_only_table_has_no_records() {
    let scores = score(&survey(Vec::new()));
    assert!(scores.is_empty());
    assert_eq!(scores.catalog.len(), 9);
}

#[test]
fn missing_header_label_is_reported() {
    let mut rows = survey(vec![ele01()]).into_rows();
    rows[HeaderRow::Label.index()][BAI].clear();
    let err = score_survey(&RawTable::new(rows), &ScoringOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ScoringError::HeaderNotFound { row: HeaderRow::Label, ref label } if label.starts_with("En el cuestionario")
    ));
}

#[test]
fn too_few_rows_for_headers() {
    let rows = survey(Vec::new()).into_rows().into_iter().take(2).collect();
    let err = score_survey(&RawTable::new(rows), &ScoringOptions::default()).unwrap_err();
    assert_eq!(err, ScoringError::MissingHeaderRows { found: 2 });
}

#[test]
fn assist_end_before_first_substance_is_inverted() {
    let table = survey_with_headers(|rows| move_label(rows, HeaderRow::Label, ASSIST_END, 100));
    assert_eq!(
        SurveyLayout::resolve(&table),
        Err(ScoringError::InvertedRange {
            instrument: Instrument::Assist,
            start: FIRST_SUBSTANCE,
            end: 100,
        })
    );
}

#[test]
fn narrow_assist_block_is_rejected() {
    let table = survey_with_headers(|rows| move_label(rows, HeaderRow::Label, ASSIST_END, 150));
    assert_eq!(
        SurveyLayout::resolve(&table),
        Err(ScoringError::UnexpectedItemCount {
            instrument: Instrument::Assist,
            expected: 63,
            found: 150 - FIRST_SUBSTANCE,
        })
    );
}

#[test]
fn shifted_end_label_changes_block_width() {
    let table =
        survey_with_headers(|rows| move_label(rows, HeaderRow::ItemLabel, BAI + 20, BAI + 19));
    let err = score_survey(&table, &ScoringOptions::default()).unwrap_err();
    assert_eq!(
        err,
        ScoringError::UnexpectedItemCount {
            instrument: Instrument::Bai,
            expected: 21,
            found: 20,
        }
    );
    assert_eq!(err.to_string(), "BAI block spans 20 columns, expected 21");
}

#[test]
fn none_of_the_above_with_answers_is_rejected() {
    let respondent = ele01()
        .set(assist_column(2, 1), "3")
        .set(assist_column(2, 2), "2");
    let err = score_survey(&survey(vec![respondent]), &ScoringOptions::default()).unwrap_err();
    assert_eq!(
        err,
        ScoringError::AssistRowInconsistency {
            row: 3,
            columns: vec![assist_column(2, 1), assist_column(2, 2)],
        }
    );
}

#[test]
fn disallowed_assist_code_is_rejected() {
    let respondent = miltos2().substance(2, [Some(2), Some(3), Some(4), Some(5), Some(4), None]);
    let err = score_survey(&survey(vec![respondent]), &ScoringOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ScoringError::InvalidAssistCode { row: 3, question: 6, code: 4, column, .. }
            if column == assist_column(2, 6)
    ));
}

#[test]
fn fractional_assist_code_is_invalid_value() {
    let respondent = miltos2().set(assist_column(1, 3), "2.5");
    let err = score_survey(&survey(vec![respondent]), &ScoringOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ScoringError::InvalidResponseValue { instrument: Instrument::Assist, ref value, .. } if value == "2.5"
    ));
}

#[test]
fn never_in_past_months_zeroes_frequency_questions() {
    // Question 4 would be rejected if it were not zeroed first.
    let respondent = miltos2()
        .substance(1, [Some(0), Some(6), Some(9), Some(8), Some(3), Some(0)]);
    let scores = score(&survey(vec![respondent]));
    assert_eq!(scores.substance_total("Miltos2", SUBSTANCES[1]), Some(3));
}

#[test]
fn other_substance_is_not_validated() {
    let respondent =
        Respondent::baseline("O", "1").substance(8, [Some(1), None, None, None, Some(4), None]);
    let scores = score(&survey(vec![respondent]));
    assert_eq!(scores.substance_total("O", SUBSTANCES[8]), Some(5));
}

#[test]
fn oversized_unvalidated_codes_are_invalid_values() {
    let respondent = Respondent::baseline("O", "1")
        .substance(8, [None; 6])
        .set(assist_column(8, 2), "9e18")
        .set(assist_column(8, 3), "9e18");
    let err = score_survey(&survey(vec![respondent]), &ScoringOptions::default()).unwrap_err();
    assert_eq!(
        err,
        ScoringError::InvalidResponseValue {
            instrument: Instrument::Assist,
            row: 3,
            column: assist_column(8, 2),
            value: "9e18".to_string(),
        }
    );
}

#[test]
fn large_unvalidated_codes_still_sum() {
    let respondent = Respondent::baseline("O", "1")
        .substance(8, [None; 6])
        .set(assist_column(8, 2), "2147483647")
        .set(assist_column(8, 3), "2147483647");
    let scores = score(&survey(vec![respondent]));
    assert_eq!(scores.substance_total("O", SUBSTANCES[8]), Some(4_294_967_294));
    let record = scores.find("O").expect("O scored");
    assert_eq!(
        record.substance(SubstanceKind::Other).map(|score| score.risk),
        Some(RiskTier::IntensiveTreatment)
    );
}

#[test]
fn tobacco_total_excludes_question_five() {
    let tobacco = Respondent::baseline("T", "1")
        .substance(0, [Some(2), Some(3), Some(4), Some(8), Some(3), Some(3)]);
    let cannabis = Respondent::baseline("C", "1")
        .substance(2, [Some(2), Some(3), Some(4), Some(8), Some(3), Some(3)]);
    let scores = score(&survey(vec![tobacco, cannabis]));
    assert_eq!(scores.substance_total("T", SUBSTANCES[0]), Some(15));
    assert_eq!(scores.substance_total("C", SUBSTANCES[2]), Some(23));
}

#[test]
fn alcohol_has_a_higher_low_risk_bound() {
    let alcohol = Respondent::baseline("A", "2")
        .substance(1, [Some(4), Some(3), Some(0), Some(0), Some(3), None]);
    let scores = score(&survey(vec![alcohol]));
    let record = scores.find("A").expect("record");
    let alcohol = record.substance(SubstanceKind::Alcohol).expect("alcohol");
    assert_eq!(alcohol.total, 10);
    assert_eq!(alcohol.risk, RiskTier::NoIntervention);
}

#[test]
fn duplicate_usernames_cannot_be_joined() {
    let err = score_survey(
        &survey(vec![ele01(), miltos2(), ele01()]),
        &ScoringOptions::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ScoringError::DuplicateUsername {
            username: "Ele01".to_string(),
            first_row: 3,
            row: 5,
        }
    );
}

#[test]
fn stai_binary_code_ignores_total() {
    let scores = score(&survey(vec![Respondent::baseline("B", "3")]));
    assert_eq!(
        scores.find("B").expect("record").stai_classification,
        StaiLevel::Binary
    );
}

#[test]
fn lenient_mode_skips_missing_items() {
    let respondent = ele01().set(BAI, "").set(BAI + 1, "");
    let scores = score(&survey(vec![respondent]));
    assert_eq!(scores.find("Ele01").expect("record").bai_total, 19);
}

#[test]
fn strict_mode_rejects_out_of_scale_and_missing_items() {
    let out_of_scale = ele01().set(BAI + 3, "5");
    let err = score_survey(&survey(vec![out_of_scale]), &ScoringOptions::strict()).unwrap_err();
    assert!(matches!(
        err,
        ScoringError::ResponseOutOfRange { instrument: Instrument::Bai, row: 3, column, .. }
            if column == BAI + 3
    ));

    let missing = ele01().set(PHQ + 4, "");
    let err = score_survey(&survey(vec![missing]), &ScoringOptions::strict()).unwrap_err();
    assert!(matches!(
        err,
        ScoringError::InvalidResponseValue { instrument: Instrument::Phq, column, .. }
            if column == PHQ + 4
    ));

    score_survey(&survey(vec![ele01(), miltos2()]), &ScoringOptions::strict())
        .expect("in-range answers pass strict checks");
}
