//! Per-respondent scoring results.

use serde::{Deserialize, Serialize};

use crate::classification::{BaiLevel, OciStatus, PhqSeverity, RiskTier, StaiLevel};
use crate::substance::{SubstanceCatalog, SubstanceKind};

/// Big Five personality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BfiTrait {
    Extraversion,
    Agreeableness,
    Conscientiousness,
    Neuroticism,
    Openness,
}

impl BfiTrait {
    pub const ALL: [BfiTrait; 5] = [
        BfiTrait::Extraversion,
        BfiTrait::Agreeableness,
        BfiTrait::Conscientiousness,
        BfiTrait::Neuroticism,
        BfiTrait::Openness,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BfiTrait::Extraversion => "Extraversion",
            BfiTrait::Agreeableness => "Agreeableness",
            BfiTrait::Conscientiousness => "Conscientiousness",
            BfiTrait::Neuroticism => "Neuroticism",
            BfiTrait::Openness => "Openness",
        }
    }

    /// Output column name, e.g. `BFI_Openness`.
    pub fn column_name(self) -> String {
        format!("BFI_{}", self.as_str())
    }
}

/// Mean item score per Big Five dimension, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BfiScores {
    pub extraversion: f64,
    pub agreeableness: f64,
    pub conscientiousness: f64,
    pub neuroticism: f64,
    pub openness: f64,
}

impl BfiScores {
    pub fn get(&self, dimension: BfiTrait) -> f64 {
        match dimension {
            BfiTrait::Extraversion => self.extraversion,
            BfiTrait::Agreeableness => self.agreeableness,
            BfiTrait::Conscientiousness => self.conscientiousness,
            BfiTrait::Neuroticism => self.neuroticism,
            BfiTrait::Openness => self.openness,
        }
    }

    pub fn set(&mut self, dimension: BfiTrait, value: f64) {
        match dimension {
            BfiTrait::Extraversion => self.extraversion = value,
            BfiTrait::Agreeableness => self.agreeableness = value,
            BfiTrait::Conscientiousness => self.conscientiousness = value,
            BfiTrait::Neuroticism => self.neuroticism = value,
            BfiTrait::Openness => self.openness = value,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (BfiTrait, f64)> + '_ {
        BfiTrait::ALL
            .into_iter()
            .map(|dimension| (dimension, self.get(dimension)))
    }
}

/// ASSIST involvement total and tier for one substance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstanceScore {
    pub kind: SubstanceKind,
    pub total: i64,
    pub risk: RiskTier,
}

/// One output record per respondent row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RespondentRecord {
    /// Zero-based row in the raw table.
    pub row: usize,
    pub username: String,
    /// Raw sex code ("1", "2", "3" or other).
    pub sex: String,
    pub phq_total: i64,
    pub phq_classification: PhqSeverity,
    /// Functional-difficulty answer that closes the PHQ block; not summed.
    pub phq_difficulty: Option<i64>,
    pub bai_total: i64,
    pub bai_classification: BaiLevel,
    pub oci_total: i64,
    pub oci_classification: OciStatus,
    pub stai_total: i64,
    pub stai_classification: StaiLevel,
    pub bfi: BfiScores,
    /// One entry per catalog substance, in catalog order.
    pub substances: Vec<SubstanceScore>,
}

impl RespondentRecord {
    pub fn substance(&self, kind: SubstanceKind) -> Option<&SubstanceScore> {
        self.substances.iter().find(|score| score.kind == kind)
    }
}

/// Scored output of one survey table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyScores {
    pub catalog: SubstanceCatalog,
    pub records: Vec<RespondentRecord>,
}

impl SurveyScores {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, username: &str) -> Option<&RespondentRecord> {
        self.records
            .iter()
            .find(|record| record.username == username)
    }

    /// Substance total for a respondent, looked up by the header name.
    pub fn substance_total(&self, username: &str, substance_name: &str) -> Option<i64> {
        let kind = self
            .catalog
            .iter()
            .find(|substance| substance.name == substance_name)?
            .kind;
        self.find(username)?.substance(kind).map(|score| score.total)
    }
}
