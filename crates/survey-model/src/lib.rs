//! Data model for scoring psychometric survey exports.
//!
//! Pure data: raw tables, instrument blocks, classification labels and the
//! per-respondent records produced by `survey-core`.

pub mod classification;
pub mod error;
pub mod instrument;
pub mod options;
pub mod record;
pub mod substance;
pub mod table;

pub use classification::{BaiLevel, OciStatus, PhqSeverity, RiskTier, StaiLevel};
pub use error::{Result, ScoringError};
pub use instrument::{Instrument, InstrumentRange, ItemScale};
pub use options::{ItemCheckMode, ScoringOptions};
pub use record::{BfiScores, BfiTrait, RespondentRecord, SubstanceScore, SurveyScores};
pub use substance::{Substance, SubstanceCatalog, SubstanceKind};
pub use table::{FIRST_RESPONSE_ROW, HeaderRow, RawTable};
