//! Corpagent Analyzer
//!
//! Heuristic compliance review for corporate legal documents, aimed at ADGM
//! filing conventions.
//!
//! # Overview
//!
//! A review takes a `.docx` document or a free-text query and produces a
//! finding set: the document type, required sections that are missing, and
//! risky phrasing. Related reference paragraphs are retrieved by keyword
//! overlap, a marked-up copy of the document is written, and a completion
//! service is asked for a readable summary.
//!
//! # Architecture
//!
//! ```text
//! bytes → extract → classify → checklist → red flags → citations
//!                                                   ↓
//!                      notes → annotate → completion → AnalysisOutcome
//! ```
//!
//! Nothing here understands the text: every check is keyword or substring
//! matching against the static tables in [`rules`].
//!
//! # Example Usage
//!
//! ```no_run
//! use corpagent_analyzer::{AnalysisRequest, AnalyzerConfig, Pipeline};
//! use corpagent_docx::DocxContainer;
//! use corpagent_llm::CompletionClient;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = Pipeline::new(
//!     DocxContainer::new(),
//!     CompletionClient::from_env(),
//!     AnalyzerConfig::default(),
//! )?;
//!
//! let outcome = pipeline.process(AnalysisRequest::query(
//!     "Board resolution approving the memorandum of association",
//! ))?;
//!
//! println!("{}", outcome.report());
//! for citation in &outcome.citations {
//!     println!("[{}] {}", citation.score, citation.snippet);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod prompt;
mod pipeline;

pub mod annotate;
pub mod checklist;
pub mod citations;
pub mod classifier;
pub mod extract;
pub mod red_flags;
pub mod report;
pub mod rules;


pub use error::AnalyzerError;
pub use config::{AnalyzerConfig, DEFAULT_REFERENCE_PATH};
pub use types::{AnalysisMetadata, AnalysisOutcome, AnalysisRequest, InputKind};
pub use prompt::PromptBuilder;
pub use pipeline::{build_notes, Pipeline, NO_ISSUES_NOTE};
