//! Categorical labels assigned to instrument totals.
//!
//! The labels are the exact strings written to the output table. Cut-off
//! values live with the classifier in `survey-core`.

use serde::{Deserialize, Serialize};

/// PHQ depression severity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PhqSeverity {
    #[serde(rename = "minimal depression")]
    Minimal,
    #[serde(rename = "mild depression")]
    Mild,
    #[serde(rename = "moderate depression")]
    Moderate,
    #[serde(rename = "moderately severe depression")]
    ModeratelySevere,
    #[serde(rename = "severe depression")]
    Severe,
}

impl PhqSeverity {
    pub const ALL: [PhqSeverity; 5] = [
        PhqSeverity::Minimal,
        PhqSeverity::Mild,
        PhqSeverity::Moderate,
        PhqSeverity::ModeratelySevere,
        PhqSeverity::Severe,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PhqSeverity::Minimal => "minimal depression",
            PhqSeverity::Mild => "mild depression",
            PhqSeverity::Moderate => "moderate depression",
            PhqSeverity::ModeratelySevere => "moderately severe depression",
            PhqSeverity::Severe => "severe depression",
        }
    }
}

/// BAI anxiety level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BaiLevel {
    #[serde(rename = "low anxiety")]
    Low,
    #[serde(rename = "moderate anxiety")]
    Moderate,
    #[serde(rename = "potentially concerning levels of anxiety")]
    PotentiallyConcerning,
}

impl BaiLevel {
    pub const ALL: [BaiLevel; 3] = [
        BaiLevel::Low,
        BaiLevel::Moderate,
        BaiLevel::PotentiallyConcerning,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BaiLevel::Low => "low anxiety",
            BaiLevel::Moderate => "moderate anxiety",
            BaiLevel::PotentiallyConcerning => "potentially concerning levels of anxiety",
        }
    }
}

/// Coarse OCI-R screening flag. Not a diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OciStatus {
    #[serde(rename = "does not have OCD")]
    BelowCutoff,
    #[serde(rename = "has OCD")]
    AboveCutoff,
}

impl OciStatus {
    pub const ALL: [OciStatus; 2] = [OciStatus::BelowCutoff, OciStatus::AboveCutoff];

    pub fn as_str(self) -> &'static str {
        match self {
            OciStatus::BelowCutoff => "does not have OCD",
            OciStatus::AboveCutoff => "has OCD",
        }
    }
}

/// STAI trait-anxiety level, which depends on the respondent's sex code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StaiLevel {
    Normal,
    High,
    /// Sex code "3"; no cut-off is defined for this group.
    Binary,
}

impl StaiLevel {
    pub const ALL: [StaiLevel; 3] = [StaiLevel::Normal, StaiLevel::High, StaiLevel::Binary];

    pub fn as_str(self) -> &'static str {
        match self {
            StaiLevel::Normal => "Normal",
            StaiLevel::High => "High",
            StaiLevel::Binary => "Binary",
        }
    }
}

/// ASSIST substance involvement tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    #[serde(rename = "No requiere intervención")]
    NoIntervention,
    #[serde(rename = "Recibir intervención breve")]
    BriefIntervention,
    #[serde(rename = "Tratamiento más intensivo")]
    IntensiveTreatment,
    /// Only produced for a negative total.
    Unknown,
}

impl RiskTier {
    pub const ALL: [RiskTier; 4] = [
        RiskTier::NoIntervention,
        RiskTier::BriefIntervention,
        RiskTier::IntensiveTreatment,
        RiskTier::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::NoIntervention => "No requiere intervención",
            RiskTier::BriefIntervention => "Recibir intervención breve",
            RiskTier::IntensiveTreatment => "Tratamiento más intensivo",
            RiskTier::Unknown => "Unknown",
        }
    }
}

macro_rules! impl_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

impl_display!(PhqSeverity, BaiLevel, OciStatus, StaiLevel, RiskTier);
