//! Synthetic survey exports for end-to-end scoring tests.
//!
//! Builds the three header rows with the real labels and one row per
//! respondent, with every instrument block at a fixed position.

#![allow(dead_code)]

use survey_core::labels;
use survey_core::scoring::{bfi_items, bfi_reversed};
use survey_model::{BfiTrait, RawTable};

pub const USER: usize = 0;
pub const SEX: usize = 1;
pub const PHQ: usize = 2;
pub const BAI: usize = 12;
pub const OCI: usize = 33;
pub const STAI: usize = 51;
pub const BFI: usize = 71;
pub const ASSIST_START: usize = 115;
pub const FIRST_SUBSTANCE: usize = 116;
pub const ASSIST_END: usize = 179;
pub const WIDTH: usize = 180;

pub const SUBSTANCES: [&str; 9] = [
    "Tabaco (cigarrillos, tabaco de mascar, puros, etc.)",
    "Bebidas alcohólicas (cerveza, vinos, licores, etc.)",
    "Cannabis (marihuana, mota, hierba, hachís, etc.)",
    "Estimulantes tipo anfetamina (speed, anfetaminas, éxtasis, etc.)",
    "Inhalantes (óxido nitroso, pegamento, gasolina, solvente para pintura, etc.)",
    "Sedantes o pastillas para dormir (diazepam, alprazolam, flunitrazepam, midazolam, etc.)",
    "Alucinógenos (LSD, ácidos, hongos, ketamina, etc.)",
    "Opiáceos (heroína, morfina, metadona, buprenorfina, codeína, etc.)",
    "Otro (especifique)",
];

/// Column of ASSIST question `question` for the substance at `position`.
pub fn assist_column(position: usize, question: usize) -> usize {
    FIRST_SUBSTANCE + position + 9 * (question - 1)
}

pub fn header_rows() -> Vec<Vec<String>> {
    let tags = (1..=WIDTH).map(|tag| tag.to_string()).collect();
    let mut label = vec![String::new(); WIDTH];
    let mut item = vec![String::new(); WIDTH];

    label[USER] = labels::USER_ID.to_string();
    label[SEX] = labels::SEX.to_string();
    label[PHQ] = labels::PHQ_START.to_string();
    label[PHQ + 9] = labels::PHQ_END.to_string();
    label[BAI] = labels::BAI_START.to_string();
    item[BAI + 20] = labels::BAI_END.to_string();
    label[OCI] = labels::OCI_START.to_string();
    item[OCI + 17] = labels::OCI_END.to_string();
    label[STAI] = labels::STAI_START.to_string();
    item[STAI + 19] = labels::STAI_END.to_string();
    label[BFI] = labels::BFI_START.to_string();
    item[BFI + 43] = labels::BFI_END.to_string();
    label[ASSIST_START] = labels::ASSIST_START.to_string();
    item[ASSIST_START] = labels::ASSIST_NONE.to_string();
    for (offset, name) in SUBSTANCES.iter().enumerate() {
        item[FIRST_SUBSTANCE + offset] = name.to_string();
    }
    label[ASSIST_END] = labels::ASSIST_END.to_string();
    item[ASSIST_END] = "Response".to_string();

    vec![tags, label, item]
}

/// One respondent row under construction.
#[derive(Debug, Clone)]
pub struct Respondent {
    cells: Vec<String>,
}

impl Respondent {
    /// A respondent with only the username and sex code filled in.
    pub fn blank(username: &str, sex: &str) -> Self {
        let mut cells = vec![String::new(); WIDTH];
        cells[USER] = username.to_string();
        cells[SEX] = sex.to_string();
        Self { cells }
    }

    /// Every item answered with the lowest value, BFI neutral, no substances.
    pub fn baseline(username: &str, sex: &str) -> Self {
        Self::blank(username, sex)
            .fill(PHQ, &["0"; 9])
            .fill(BAI, &["0"; 21])
            .fill(OCI, &["0"; 18])
            .fill(STAI, &["0"; 20])
            .fill(BFI, &["3"; 44])
            .set(ASSIST_START, "0")
    }

    pub fn set(mut self, column: usize, value: &str) -> Self {
        self.cells[column] = value.to_string();
        self
    }

    pub fn fill(mut self, start: usize, values: &[&str]) -> Self {
        for (offset, value) in values.iter().enumerate() {
            self.cells[start + offset] = value.to_string();
        }
        self
    }

    /// Sets a BFI subscale from item scores after reversal.
    pub fn bfi_trait(mut self, dimension: BfiTrait, effective: &[u8]) -> Self {
        let items = bfi_items(dimension);
        assert_eq!(items.len(), effective.len(), "{dimension:?} item count");
        for (&question, &score) in items.iter().zip(effective) {
            let raw = if bfi_reversed(dimension).contains(&question) {
                6 - score
            } else {
                score
            };
            self.cells[BFI + question - 1] = raw.to_string();
        }
        self
    }

    /// Marks the substance as ever used and fills questions 2-7.
    pub fn substance(mut self, position: usize, follow_ups: [Option<i64>; 6]) -> Self {
        self.cells[ASSIST_START].clear();
        self.cells[assist_column(position, 1)] = "3".to_string();
        for (index, answer) in follow_ups.iter().enumerate() {
            if let Some(code) = answer {
                self.cells[assist_column(position, index + 2)] = code.to_string();
            }
        }
        self
    }

    pub fn into_cells(self) -> Vec<String> {
        self.cells
    }
}

pub fn survey(respondents: Vec<Respondent>) -> RawTable {
    let mut rows = header_rows();
    rows.extend(respondents.into_iter().map(Respondent::into_cells));
    RawTable::new(rows)
}

/// Scores PHQ 18, BAI 63, OCI 54, STAI 33; uses tobacco, inhalants and other.
pub fn miltos2() -> Respondent {
    Respondent::blank("Miltos2", "1")
        .fill(PHQ, &["3", "3", "3", "3", "3", "3", "0", "0", "0", "2"])
        .fill(BAI, &["3"; 21])
        .fill(OCI, &["3"; 18])
        .fill(STAI, &["1"; 20])
        .fill(STAI + 1, &["2"; 4])
        .fill(STAI + 7, &["2"; 2])
        .bfi_trait(BfiTrait::Extraversion, &[3, 3, 3, 3, 3, 3, 4, 4])
        .bfi_trait(BfiTrait::Agreeableness, &[3, 3, 3, 3, 3, 3, 3, 3, 4])
        .bfi_trait(BfiTrait::Conscientiousness, &[4, 3, 3, 3, 3, 3, 3, 3, 3])
        .bfi_trait(BfiTrait::Neuroticism, &[4, 4, 3, 3, 3, 3, 3, 3])
        .bfi_trait(BfiTrait::Openness, &[4, 4, 4, 4, 4, 4, 3, 3, 3, 3])
        .substance(0, [Some(6), Some(6), Some(0), Some(8), Some(0), Some(0)])
        .substance(4, [Some(4), Some(3), Some(4), Some(5), Some(3), Some(0)])
        .substance(8, [Some(6), Some(6), Some(5), Some(0), Some(3), Some(0)])
}

/// Scores PHQ 0, BAI 21, OCI 0, STAI 21; answered "none of the above".
pub fn ele01() -> Respondent {
    Respondent::baseline("Ele01", "2")
        .fill(BAI, &["1"; 21])
        .bfi_trait(BfiTrait::Extraversion, &[3, 3, 3, 3, 3, 2, 2, 2])
        .bfi_trait(BfiTrait::Agreeableness, &[3, 3, 3, 3, 3, 3, 3, 2, 2])
        .bfi_trait(BfiTrait::Conscientiousness, &[2, 2, 3, 3, 3, 3, 3, 3, 3])
        .bfi_trait(BfiTrait::Neuroticism, &[3, 3, 3, 3, 2, 2, 2, 2])
        .bfi_trait(BfiTrait::Openness, &[2, 2, 2, 2, 2, 2, 2, 2, 1, 1])
}
