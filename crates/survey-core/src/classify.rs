//! Cut-offs that turn instrument totals into categories.

use survey_model::{BaiLevel, OciStatus, PhqSeverity, RiskTier, StaiLevel, SubstanceKind};

/// Upper bound (inclusive) of the moderate ASSIST tier for every substance.
pub const MODERATE_RISK_MAX: i64 = 26;

/// OCI-R totals at or above this value are flagged.
pub const OCI_CUTOFF: i64 = 21;

/// STAI cut-off for sex code "2".
pub const STAI_FEMALE_CUTOFF: i64 = 29;

/// STAI cut-off for sex code "1".
pub const STAI_MALE_CUTOFF: i64 = 37;

pub fn classify_phq(total: i64) -> PhqSeverity {
    if total < 5 {
        PhqSeverity::Minimal
    } else if total < 10 {
        PhqSeverity::Mild
    } else if total < 15 {
        PhqSeverity::Moderate
    } else if total < 20 {
        PhqSeverity::ModeratelySevere
    } else {
        PhqSeverity::Severe
    }
}

pub fn classify_bai(total: i64) -> BaiLevel {
    if total <= 21 {
        BaiLevel::Low
    } else if total <= 35 {
        BaiLevel::Moderate
    } else {
        BaiLevel::PotentiallyConcerning
    }
}

pub fn classify_oci(total: i64) -> OciStatus {
    if total >= OCI_CUTOFF {
        OciStatus::AboveCutoff
    } else {
        OciStatus::BelowCutoff
    }
}

/// STAI level from the total and the raw sex code.
///
/// Code "3" is reported as `Binary` whatever the total.
pub fn classify_stai(total: i64, sex: &str) -> StaiLevel {
    match sex {
        "2" if total >= STAI_FEMALE_CUTOFF => StaiLevel::High,
        "1" if total >= STAI_MALE_CUTOFF => StaiLevel::High,
        "3" => StaiLevel::Binary,
        _ => StaiLevel::Normal,
    }
}

/// Highest total that needs no intervention.
pub fn low_risk_max(kind: SubstanceKind) -> i64 {
    match kind {
        SubstanceKind::Alcohol => 10,
        _ => 3,
    }
}

pub fn classify_risk(kind: SubstanceKind, total: i64) -> RiskTier {
    let low_max = low_risk_max(kind);
    if total < 0 {
        RiskTier::Unknown
    } else if total <= low_max {
        RiskTier::NoIntervention
    } else if total <= MODERATE_RISK_MAX {
        RiskTier::BriefIntervention
    } else {
        RiskTier::IntensiveTreatment
    }
}
