//! Survey layout: every column position the scorers need, resolved once per
//! table from the header rows.

use survey_model::{
    HeaderRow, Instrument, InstrumentRange, RawTable, Result, ScoringError, SubstanceCatalog,
};
use tracing::debug;

use crate::header::locate_in;
use crate::labels;

/// Columns between a substance's consecutive ASSIST questions.
pub const ASSIST_QUESTION_STRIDE: usize = 9;

/// Number of substances in the ASSIST catalog.
pub const SUBSTANCE_COUNT: usize = 9;

/// Column positions of the ASSIST block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistLayout {
    /// Column carrying the question-1 label.
    pub start: usize,
    /// Column of the injection question that follows the substance block.
    pub end: usize,
    /// Question-1 column of the first substance.
    pub first_substance: usize,
    /// "None of the above" choice of question 1.
    pub none_of_above: usize,
    pub catalog: SubstanceCatalog,
}

impl AssistLayout {
    /// Columns of questions 1-7 for all substances, end exclusive.
    pub fn substance_block(&self) -> std::ops::Range<usize> {
        self.first_substance..self.end
    }
}

/// Column positions of one survey export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyLayout {
    pub user_column: usize,
    pub sex_column: usize,
    pub phq: InstrumentRange,
    pub bai: InstrumentRange,
    pub oci: InstrumentRange,
    pub stai: InstrumentRange,
    pub bfi: InstrumentRange,
    pub assist: AssistLayout,
}

impl SurveyLayout {
    /// Resolves all positions from the table's header rows.
    pub fn resolve(table: &RawTable) -> Result<Self> {
        if !table.has_header_rows() {
            return Err(ScoringError::MissingHeaderRows {
                found: table.height(),
            });
        }

        let user_column = locate_in(table, HeaderRow::Label, labels::USER_ID)?;
        let sex_column = locate_in(table, HeaderRow::Label, labels::SEX)?;

        let phq = instrument_range(
            table,
            Instrument::Phq,
            labels::PHQ_START,
            (HeaderRow::Label, labels::PHQ_END),
        )?;
        let bai = instrument_range(
            table,
            Instrument::Bai,
            labels::BAI_START,
            (HeaderRow::ItemLabel, labels::BAI_END),
        )?;
        let oci = instrument_range(
            table,
            Instrument::Oci,
            labels::OCI_START,
            (HeaderRow::ItemLabel, labels::OCI_END),
        )?;
        let stai = instrument_range(
            table,
            Instrument::Stai,
            labels::STAI_START,
            (HeaderRow::ItemLabel, labels::STAI_END),
        )?;
        let bfi = instrument_range(
            table,
            Instrument::Bfi,
            labels::BFI_START,
            (HeaderRow::ItemLabel, labels::BFI_END),
        )?;
        let assist = resolve_assist(table)?;

        debug!(
            user_column,
            sex_column,
            phq_start = phq.start(),
            bai_start = bai.start(),
            oci_start = oci.start(),
            stai_start = stai.start(),
            bfi_start = bfi.start(),
            assist_start = assist.start,
            substances = assist.catalog.len(),
            "survey layout resolved"
        );

        Ok(Self {
            user_column,
            sex_column,
            phq,
            bai,
            oci,
            stai,
            bfi,
            assist,
        })
    }

    pub fn range(&self, instrument: Instrument) -> Option<&InstrumentRange> {
        match instrument {
            Instrument::Phq => Some(&self.phq),
            Instrument::Bai => Some(&self.bai),
            Instrument::Oci => Some(&self.oci),
            Instrument::Stai => Some(&self.stai),
            Instrument::Bfi => Some(&self.bfi),
            Instrument::Assist => None,
        }
    }
}

/// Start label always sits in the label row; the end label row varies.
fn instrument_range(
    table: &RawTable,
    instrument: Instrument,
    start_label: &str,
    (end_row, end_label): (HeaderRow, &str),
) -> Result<InstrumentRange> {
    let start = locate_in(table, HeaderRow::Label, start_label)?;
    let end = locate_in(table, end_row, end_label)?;
    InstrumentRange::new(instrument, start, end)?.expect_len(instrument.column_count())
}

fn resolve_assist(table: &RawTable) -> Result<AssistLayout> {
    let start = locate_in(table, HeaderRow::Label, labels::ASSIST_START)?;
    let end = locate_in(table, HeaderRow::Label, labels::ASSIST_END)?;
    let none_of_above = locate_in(table, HeaderRow::ItemLabel, labels::ASSIST_NONE)?;
    let first_substance = start + 1;
    if end < first_substance {
        return Err(ScoringError::InvertedRange {
            instrument: Instrument::Assist,
            start: first_substance,
            end,
        });
    }
    let width = end - first_substance;
    let expected = Instrument::Assist.column_count();
    if width < expected {
        return Err(ScoringError::UnexpectedItemCount {
            instrument: Instrument::Assist,
            expected,
            found: width,
        });
    }
    let catalog = SubstanceCatalog::from_columns((0..SUBSTANCE_COUNT).map(|offset| {
        let column = first_substance + offset;
        let name = table.raw_cell(HeaderRow::ItemLabel.index(), column).to_string();
        (column, name)
    }));
    Ok(AssistLayout {
        start,
        end,
        first_substance,
        none_of_above,
        catalog,
    })
}
