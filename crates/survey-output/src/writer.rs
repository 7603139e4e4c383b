use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use polars::prelude::{CsvWriter, SerWriter};
use survey_model::SurveyScores;
use tracing::info;

use crate::error::{OutputError, Result};
use crate::frame::scores_frame;
use crate::options::{OutputFormat, OutputOptions};

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> OutputError + '_ {
    move |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    Ok(())
}

/// Writes the scores to `path` in the configured format.
pub fn write_scores(path: &Path, scores: &SurveyScores, options: &OutputOptions) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(io_error(path))?;
    let mut writer = BufWriter::new(file);
    match options.format {
        OutputFormat::Csv => write_csv(&mut writer, scores, options.separator)?,
        OutputFormat::Json => write_json(&mut writer, scores)?,
    }
    writer.flush().map_err(io_error(path))?;

    info!(
        path = %path.display(),
        format = %options.format,
        respondents = scores.len(),
        "scores written"
    );
    Ok(())
}

/// Writes the flat score table as delimited text with a header line.
pub fn write_csv<W: Write>(writer: &mut W, scores: &SurveyScores, separator: u8) -> Result<()> {
    let mut frame = scores_frame(scores)?;
    CsvWriter::new(writer)
        .include_header(true)
        .with_separator(separator)
        .finish(&mut frame)?;
    Ok(())
}

/// Writes the substance catalog and typed records as pretty JSON.
pub fn write_json<W: Write>(writer: &mut W, scores: &SurveyScores) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, scores)?;
    writer.write_all(b"\n").map_err(serde_json::Error::io)?;
    Ok(())
}
