//! Request and response types for a review run

use crate::report::{citations_json, completion_json, format_report, summary_json};
use corpagent_domain::{CitationMatch, CompletionResult, FindingSet};
use serde_json::Value;

/// Input to one review run
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    /// Document container bytes
    pub document: Option<Vec<u8>>,

    /// Free-text query, used as the document text when no document is given
    pub query: Option<String>,
}

impl AnalysisRequest {
    /// Review a document
    pub fn document(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            document: Some(bytes.into()),
            query: None,
        }
    }

    /// Review a piece of text
    pub fn query(text: impl Into<String>) -> Self {
        Self {
            document: None,
            query: Some(text.into()),
        }
    }

    /// Attach a query to a document request
    pub fn with_query(mut self, text: impl Into<String>) -> Self {
        self.query = Some(text.into());
        self
    }

    /// Document bytes, treating an empty buffer as absent
    pub(crate) fn document_bytes(&self) -> Option<&[u8]> {
        self.document.as_deref().filter(|b| !b.is_empty())
    }

    /// Query text, treating an empty string as absent
    pub(crate) fn query_text(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }
}

/// What a review run read its text from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Text extracted from a document container
    Document,

    /// Raw query string
    Query,
}

/// Metadata about a review run
#[derive(Debug, Clone)]
pub struct AnalysisMetadata {
    /// Source of the reviewed text
    pub input: InputKind,

    /// Characters of reviewed text
    pub text_chars: usize,

    /// Completion provider that was asked
    pub completion_provider: String,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Everything one review run produced
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// Heuristic findings
    pub findings: FindingSet,

    /// Marked-up copy of the document, when one could be written
    pub marked_document: Option<Vec<u8>>,

    /// Best-matching reference snippets
    pub citations: Vec<CitationMatch>,

    /// Suggestions from the completion service (or its placeholder)
    pub completion: CompletionResult,

    /// Metadata about the run
    pub metadata: AnalysisMetadata,
}

impl AnalysisOutcome {
    /// The findings, for report generation
    pub fn summary(&self) -> &FindingSet {
        &self.findings
    }

    /// Plain-text report of the findings
    pub fn report(&self) -> String {
        format_report(&self.findings)
    }

    /// Findings as JSON
    pub fn summary_json(&self) -> Value {
        summary_json(&self.findings)
    }

    /// The full outcome as JSON (document bytes reduced to a flag)
    pub fn to_json(&self) -> Value {
        let mut value = summary_json(&self.findings);
        value["summary"] = summary_json(&self.findings);
        value["top_citations"] = citations_json(&self.citations);
        value["gemini"] = completion_json(&self.completion);
        value["has_marked_document"] = Value::Bool(self.marked_document.is_some());
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_count_as_absent() {
        let request = AnalysisRequest {
            document: Some(Vec::new()),
            query: Some(String::new()),
        };
        assert!(request.document_bytes().is_none());
        assert!(request.query_text().is_none());
    }

    #[test]
    fn test_request_builders() {
        let request = AnalysisRequest::document(vec![1u8, 2]).with_query("check");
        assert_eq!(request.document_bytes(), Some(&[1u8, 2][..]));
        assert_eq!(request.query_text(), Some("check"));
    }
}
