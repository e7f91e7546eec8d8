//! The review pipeline

use crate::annotate::annotate;
use crate::checklist::missing_sections;
use crate::citations::retrieve_citations;
use crate::classifier::classify;
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::extract::extract_text;
use crate::prompt::{citation_context, PromptBuilder};
use crate::red_flags::detect_red_flags;
use crate::types::{AnalysisMetadata, AnalysisOutcome, AnalysisRequest, InputKind};
use corpagent_domain::traits::{CompletionProvider, DocumentContainer};
use corpagent_domain::{CitationMatch, CompletionResult, FindingSet, Notes};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Note recorded when no check raised an issue
pub const NO_ISSUES_NOTE: &str = "No immediate issues detected by heuristic checks.";

/// Runs every check for one document or query
///
/// Only a missing input or an unreadable document stop a run. Retrieval,
/// annotation and completion failures degrade to an empty list, no
/// marked-up document, and a placeholder result respectively.
pub struct Pipeline<C, P>
where
    C: DocumentContainer,
    P: CompletionProvider,
{
    container: C,
    completion: P,
    config: AnalyzerConfig,
}

impl<C, P> Pipeline<C, P>
where
    C: DocumentContainer,
    P: CompletionProvider,
    C::Error: std::fmt::Display,
    P::Error: std::fmt::Display,
{
    /// Create a new pipeline
    pub fn new(container: C, completion: P, config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        config.validate().map_err(AnalyzerError::Config)?;
        Ok(Self {
            container,
            completion,
            config,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Review a document or query
    pub fn process(&self, request: AnalysisRequest) -> Result<AnalysisOutcome, AnalyzerError> {
        let start = Instant::now();
        let document = request.document_bytes();
        let query = request.query_text();

        if document.is_none() && query.is_none() {
            return Err(AnalyzerError::Input("No document or query provided.".to_string()));
        }

        let (text, input) = match document {
            Some(bytes) => {
                let text = extract_text(&self.container, bytes)
                    .map_err(|e| AnalyzerError::Extraction(e.to_string()))?;
                (text, InputKind::Document)
            }
            None => (query.unwrap_or_default().to_string(), InputKind::Query),
        };

        info!("Reviewing {:?} input, {} chars", input, text.chars().count());

        let doc_type = classify(&text);
        let missing = missing_sections(&text, doc_type);
        let red_flags = detect_red_flags(&text);
        info!(
            "Classified as {}: {} missing sections, {} red flags",
            doc_type,
            missing.len(),
            red_flags.len()
        );

        // An empty document still lets the query drive retrieval and the prompt
        let review_text = if text.is_empty() {
            query.unwrap_or_default()
        } else {
            text.as_str()
        };

        let citations = self.citations(review_text);
        let notes = build_notes(&missing, &red_flags);
        let findings = FindingSet::new(doc_type, missing, red_flags).with_notes(notes);

        let marked_document = document.and_then(|bytes| self.mark_up(bytes, &findings.notes));
        let completion = self.suggest(review_text, &citations);

        let metadata = AnalysisMetadata {
            input,
            text_chars: text.chars().count(),
            completion_provider: self.completion.name().to_string(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        Ok(AnalysisOutcome {
            findings,
            marked_document,
            citations,
            completion,
            metadata,
        })
    }

    fn citations(&self, text: &str) -> Vec<CitationMatch> {
        match retrieve_citations(text, &self.config) {
            Ok(citations) => {
                debug!("Retrieved {} citations", citations.len());
                citations
            }
            Err(e) => {
                warn!("Citation retrieval failed, continuing without citations: {}", e);
                Vec::new()
            }
        }
    }

    fn mark_up(&self, bytes: &[u8], notes: &Notes) -> Option<Vec<u8>> {
        match annotate(&self.container, bytes, notes) {
            Ok(marked) => Some(marked),
            Err(e) => {
                warn!("Could not write review notes into document: {}", e);
                None
            }
        }
    }

    fn suggest(&self, text: &str, citations: &[CitationMatch]) -> CompletionResult {
        let prompt = PromptBuilder::new(text)
            .with_char_limit(self.config.prompt_char_limit)
            .build();
        let context = citation_context(citations.iter().map(|c| c.snippet.as_str()));
        let context = (!context.is_empty()).then_some(context.as_str());

        debug!(
            "Asking '{}' for suggestions, prompt {} chars",
            self.completion.name(),
            prompt.len()
        );

        match self.completion.complete(&prompt, context) {
            Ok(result) => result,
            Err(e) => {
                warn!("Completion service '{}' failed: {}", self.completion.name(), e);
                CompletionResult::unavailable(e)
            }
        }
    }
}

/// Summarise findings as notes; never returns an empty mapping
pub fn build_notes(missing: &[String], red_flags: &[String]) -> Notes {
    let mut notes = Notes::new();
    if !missing.is_empty() {
        notes.insert("Missing sections", missing.join(", "));
    }
    if !red_flags.is_empty() {
        notes.insert("Red flags", red_flags.join(", "));
    }
    if notes.is_empty() {
        notes.insert("Notes", NO_ISSUES_NOTE);
    }
    notes
}
