//! Output generation for scored surveys.
//!
//! Turns [`survey_model::SurveyScores`] into a flat polars table written as
//! delimited text, or into JSON with typed records.

mod error;
mod frame;
mod options;
mod writer;

pub use error::{OutputError, Result};
pub use frame::{SCORE_COLUMNS, output_columns, risk_column, scores_frame};
pub use options::{OutputFormat, OutputOptions};
pub use writer::{ensure_parent_dir, write_csv, write_json, write_scores};
