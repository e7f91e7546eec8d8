//! Self-test command implementation.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use corpagent_analyzer::{AnalysisOutcome, AnalysisRequest, Pipeline};
use corpagent_docx::DocxContainer;
use corpagent_domain::{ContainerContent, DocType};
use corpagent_llm::CompletionClient;

/// Paragraphs of the built-in sample filing.
const SAMPLE_PARAGRAPHS: [&str; 4] = [
    "BOARD RESOLUTION OF THE DIRECTORS",
    "The directors resolve to proceed with the incorporation of the company and adopt the memorandum of association.",
    "The registered address shall be to be determined by the sole discretion of the founders.",
    "Profit share may vary from 0-100 percent as necessary.",
];

/// Execute the selftest command.
pub fn execute_selftest(config: &Config, formatter: &Formatter) -> Result<()> {
    let outcome = run_sample(config)?;
    verify(&outcome)?;

    eprintln!("{}", formatter.success("Self-test passed"));
    println!("{}", formatter.format_outcome(&outcome)?);
    Ok(())
}

fn sample_content() -> ContainerContent {
    ContainerContent {
        paragraphs: SAMPLE_PARAGRAPHS.iter().map(|p| p.to_string()).collect(),
        tables: vec![vec![
            vec!["Shareholder".to_string(), "Shares".to_string()],
            vec!["Founder Holdings Ltd".to_string(), "1000".to_string()],
        ]],
    }
}

/// Review the sample filing with the offline completion model.
fn run_sample(config: &Config) -> Result<AnalysisOutcome> {
    let container = DocxContainer::new();
    let bytes = container.create(&sample_content())?;

    let pipeline = Pipeline::new(container, CompletionClient::mock(), config.analyzer.clone())?;
    Ok(pipeline.process(AnalysisRequest::document(bytes))?)
}

fn verify(outcome: &AnalysisOutcome) -> Result<()> {
    if outcome.findings.doc_type != DocType::Incorporation {
        return Err(CliError::SelfTest(format!(
            "sample classified as {}, expected {}",
            outcome.findings.doc_type,
            DocType::Incorporation
        )));
    }
    if outcome.marked_document.is_none() {
        return Err(CliError::SelfTest("no marked-up document was produced".to_string()));
    }
    Ok(())
}
