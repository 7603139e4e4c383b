//! Scoring engine for psychometric survey exports.
//!
//! Resolves column positions from the three header rows, scores PHQ-9, BAI,
//! OCI-R, STAI, BFI and ASSIST for every respondent row and classifies the
//! totals. Everything here is synchronous and free of I/O; reading and writing
//! files lives in `survey-ingest` and `survey-output`.

pub mod aggregate;
pub mod assist;
pub mod classify;
pub mod header;
pub mod labels;
pub mod layout;
pub mod response;
pub mod scoring;

pub use aggregate::{score_respondent, score_survey};
pub use assist::{AssistRow, FollowUps, allowed_codes, score_assist, score_assist_row};
pub use classify::{
    MODERATE_RISK_MAX, OCI_CUTOFF, STAI_FEMALE_CUTOFF, STAI_MALE_CUTOFF, classify_bai,
    classify_oci, classify_phq, classify_risk, classify_stai, low_risk_max,
};
pub use header::{locate, locate_in};
pub use layout::{AssistLayout, SurveyLayout};
