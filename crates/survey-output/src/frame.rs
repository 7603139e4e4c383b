//! Flat score table, one row per respondent.

use polars::prelude::{Column, DataFrame, NamedFrom};
use survey_model::{BfiTrait, SubstanceCatalog, SurveyScores};

use crate::error::Result;

/// Fixed leading columns, before the BFI and substance columns.
pub const SCORE_COLUMNS: [&str; 10] = [
    "username",
    "gender",
    "phq_total",
    "phq_classification",
    "bai_total",
    "bai_classification",
    "oci_total",
    "oci_classification",
    "stai_total",
    "stai_classification",
];

/// Risk column name for a substance.
pub fn risk_column(substance_name: &str) -> String {
    format!("{substance_name}_risk")
}

/// Column names of the score table, in order.
pub fn output_columns(catalog: &SubstanceCatalog) -> Vec<String> {
    let mut columns: Vec<String> = SCORE_COLUMNS.iter().map(ToString::to_string).collect();
    columns.extend(BfiTrait::ALL.into_iter().map(BfiTrait::column_name));
    for name in catalog.names() {
        columns.push(name.to_string());
        columns.push(risk_column(name));
    }
    columns
}

fn text_column<I>(name: &str, values: I) -> Column
where
    I: IntoIterator<Item = String>,
{
    Column::new(name.into(), values.into_iter().collect::<Vec<String>>())
}

fn int_column<I>(name: &str, values: I) -> Column
where
    I: IntoIterator<Item = i64>,
{
    Column::new(name.into(), values.into_iter().collect::<Vec<i64>>())
}

/// Builds the score table.
///
/// Classification columns hold the label text. A respondent without a score
/// for a catalog substance gets a null total and risk.
pub fn scores_frame(scores: &SurveyScores) -> Result<DataFrame> {
    let records = &scores.records;
    let mut columns = vec![
        text_column("username", records.iter().map(|r| r.username.clone())),
        text_column("gender", records.iter().map(|r| r.sex.clone())),
        int_column("phq_total", records.iter().map(|r| r.phq_total)),
        text_column(
            "phq_classification",
            records.iter().map(|r| r.phq_classification.to_string()),
        ),
        int_column("bai_total", records.iter().map(|r| r.bai_total)),
        text_column(
            "bai_classification",
            records.iter().map(|r| r.bai_classification.to_string()),
        ),
        int_column("oci_total", records.iter().map(|r| r.oci_total)),
        text_column(
            "oci_classification",
            records.iter().map(|r| r.oci_classification.to_string()),
        ),
        int_column("stai_total", records.iter().map(|r| r.stai_total)),
        text_column(
            "stai_classification",
            records.iter().map(|r| r.stai_classification.to_string()),
        ),
    ];

    for dimension in BfiTrait::ALL {
        let values: Vec<f64> = records.iter().map(|r| r.bfi.get(dimension)).collect();
        columns.push(Column::new(dimension.column_name().into(), values));
    }

    for substance in &scores.catalog {
        let totals: Vec<Option<i64>> = records
            .iter()
            .map(|r| r.substance(substance.kind).map(|score| score.total))
            .collect();
        let risks: Vec<Option<String>> = records
            .iter()
            .map(|r| r.substance(substance.kind).map(|score| score.risk.to_string()))
            .collect();
        columns.push(Column::new(substance.name.as_str().into(), totals));
        columns.push(Column::new(risk_column(&substance.name).into(), risks));
    }

    Ok(DataFrame::new(columns)?)
}
