use anyhow::{Result, bail};
use tracing::info_span;

use survey_cli::pipeline::{PipelineConfig, run_pipeline};
use survey_cli::summary::{instruments_table, print_summary, processed_line};
use survey_cli::types::RunResult;
use survey_ingest::IngestOptions;
use survey_model::{ItemCheckMode, ScoringOptions};
use survey_output::{OutputFormat, OutputOptions};

use crate::cli::{OutputFormatArg, ScoreArgs};

pub fn run_instruments() -> Result<()> {
    println!("{}", instruments_table());
    Ok(())
}

pub fn run_score(args: &ScoreArgs) -> Result<RunResult> {
    let span = info_span!("run", input = %args.input.display());
    let _guard = span.enter();

    let config = pipeline_config(args)?;
    let result = run_pipeline(&config)?;
    println!("{}", processed_line(result.respondents()));
    if args.summary {
        print_summary(&result);
    }
    Ok(result)
}

fn pipeline_config(args: &ScoreArgs) -> Result<PipelineConfig> {
    if !args.separator.is_ascii() {
        bail!("separator must be ASCII, got '{}'", args.separator);
    }
    let separator = args.separator as u8;

    let ingest = IngestOptions {
        prepend_column_tags: args.raw_export,
        delimiter: separator,
    };
    let item_checks = if args.strict {
        ItemCheckMode::Strict
    } else {
        ItemCheckMode::Lenient
    };
    let format = match args.format {
        OutputFormatArg::Csv => OutputFormat::Csv,
        OutputFormatArg::Json => OutputFormat::Json,
    };

    Ok(PipelineConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        ingest,
        scoring: ScoringOptions::new().with_item_checks(item_checks),
        output_options: OutputOptions::new(format).with_separator(separator),
    })
}
