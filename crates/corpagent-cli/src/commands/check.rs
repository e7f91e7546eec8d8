//! Check command implementation.

use crate::cli::CheckArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use corpagent_analyzer::{AnalysisOutcome, AnalysisRequest, AnalyzerConfig, Pipeline};
use corpagent_docx::DocxContainer;
use corpagent_llm::CompletionClient;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Execute the check command.
pub fn execute_check(args: CheckArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let request = build_request(&args)?;
    let analyzer = analyzer_config(&args, &config.analyzer);

    let client = if args.mock {
        CompletionClient::mock()
    } else {
        CompletionClient::from_config(&config.completion_config())
    };
    if !client.is_live() {
        eprintln!("{}", formatter.info("Using offline suggestions (no completion credentials)"));
    }

    let pipeline = Pipeline::new(DocxContainer::new(), client, analyzer)?;
    let outcome = pipeline.process(request)?;
    debug!(
        "Review finished in {}ms ({} characters)",
        outcome.metadata.processing_time_ms, outcome.metadata.text_chars
    );

    write_outputs(&args, &outcome, formatter)?;
    println!("{}", formatter.format_outcome(&outcome)?);

    Ok(())
}

/// Turn the input flags into a review request.
fn build_request(args: &CheckArgs) -> Result<AnalysisRequest> {
    let mut request = match &args.file {
        Some(path) => {
            let bytes = fs::read(path).map_err(|e| {
                CliError::InvalidInput(format!("Cannot read {}: {}", path.display(), e))
            })?;
            AnalysisRequest::document(bytes)
        }
        None => AnalysisRequest::default(),
    };

    if let Some(query) = &args.query {
        request = request.with_query(query.clone());
    }

    if request.document.is_none() && request.query.as_deref().map_or(true, str::is_empty) {
        return Err(CliError::InvalidInput(
            "Provide a document with --file or text with --query".to_string(),
        ));
    }

    Ok(request)
}

/// Apply command-line overrides to the configured analyzer settings.
fn analyzer_config(args: &CheckArgs, base: &AnalyzerConfig) -> AnalyzerConfig {
    let mut config = base.clone();
    if let Some(top_k) = args.top_k {
        config = config.with_top_k(top_k);
    }
    if let Some(path) = &args.references {
        config = config.with_reference_path(path);
    }
    config
}

fn write_outputs(args: &CheckArgs, outcome: &AnalysisOutcome, formatter: &Formatter) -> Result<()> {
    if let Some(path) = &args.marked_out {
        match &outcome.marked_document {
            Some(bytes) => {
                fs::write(path, bytes)?;
                status(formatter, &format!("Marked-up document written to {}", path.display()));
            }
            None => eprintln!(
                "{}",
                formatter.warning("No marked-up document was produced; nothing written")
            ),
        }
    }

    if let Some(path) = &args.report_out {
        write_text(path, &outcome.report())?;
        status(formatter, &format!("Report written to {}", path.display()));
    }

    if let Some(path) = &args.json_out {
        write_text(path, &serde_json::to_string_pretty(&outcome.summary_json())?)?;
        status(formatter, &format!("JSON summary written to {}", path.display()));
    }

    Ok(())
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)?;
    Ok(())
}

fn status(formatter: &Formatter, message: &str) {
    if formatter.format() != OutputFormat::Json {
        eprintln!("{}", formatter.success(message));
    }
}
