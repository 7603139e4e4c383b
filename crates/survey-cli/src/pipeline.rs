//! Scoring pipeline: ingest, score, output.
//!
//! Each stage runs inside its own `info_span!` and wraps failures with the
//! stage's context.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use survey_core::score_survey;
use survey_ingest::{IngestOptions, read_raw_table};
use survey_model::{RawTable, ScoringOptions, SurveyScores};
use survey_output::{OutputOptions, write_scores};

use crate::logging::redact_value;
use crate::types::RunResult;

/// Default export read when no input path is given.
pub const DEFAULT_INPUT: &str = "data/PORTRAIT_v3_updated.csv";

/// Everything one scoring run needs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    /// Scores are only returned when `None`.
    pub output: Option<PathBuf>,
    pub ingest: IngestOptions,
    pub scoring: ScoringOptions,
    pub output_options: OutputOptions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: None,
            ingest: IngestOptions::default(),
            scoring: ScoringOptions::default(),
            output_options: OutputOptions::default(),
        }
    }
}

pub fn run_pipeline(config: &PipelineConfig) -> Result<RunResult> {
    let started = Instant::now();
    let table = ingest(&config.input, &config.ingest)?;
    let scores = score(&table, &config.scoring)?;
    if let Some(path) = &config.output {
        output(path, &scores, &config.output_options)?;
    }
    let elapsed = started.elapsed();
    info!(
        respondents = scores.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "pipeline finished"
    );
    Ok(RunResult {
        input: config.input.clone(),
        output: config.output.clone(),
        scores,
        elapsed,
    })
}

pub fn ingest(path: &Path, options: &IngestOptions) -> Result<RawTable> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    read_raw_table(path, options).with_context(|| format!("read survey export {}", path.display()))
}

pub fn score(table: &RawTable, options: &ScoringOptions) -> Result<SurveyScores> {
    let span = info_span!("score", strict = options.is_strict());
    let _guard = span.enter();
    let scores = score_survey(table, options).context("score survey")?;
    for record in &scores.records {
        debug!(
            row = record.row + 1,
            username = redact_value(&record.username),
            phq_total = record.phq_total,
            "respondent record ready"
        );
    }
    Ok(scores)
}

pub fn output(path: &Path, scores: &SurveyScores, options: &OutputOptions) -> Result<()> {
    let span = info_span!("output", path = %path.display(), format = %options.format);
    let _guard = span.enter();
    write_scores(path, scores, options).with_context(|| format!("write {}", path.display()))
}
