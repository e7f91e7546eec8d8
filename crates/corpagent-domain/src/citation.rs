//! Reference snippets retrieved for a review

/// A reference paragraph that shares vocabulary with the reviewed text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationMatch {
    /// Number of distinct query words found in the paragraph
    pub score: usize,

    /// Paragraph text, truncated to the configured snippet length
    pub snippet: String,
}

impl CitationMatch {
    /// Create a new citation match
    pub fn new(score: usize, snippet: impl Into<String>) -> Self {
        Self {
            score,
            snippet: snippet.into(),
        }
    }
}
