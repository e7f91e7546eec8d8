//! Configuration for the analyzer

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the reference corpus
pub const DEFAULT_REFERENCE_PATH: &str = "data/adgm_references.txt";

/// Configuration for a review pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Reference corpus file (paragraphs separated by blank lines)
    pub reference_path: PathBuf,

    /// Number of citations returned per review
    pub top_k: usize,

    /// Paragraphs read from the corpus, counted from the start
    pub max_corpus_paragraphs: usize,

    /// Characters kept from each cited paragraph
    pub snippet_chars: usize,

    /// Shortest query word (characters) that counts toward overlap
    pub min_word_len: usize,

    /// Characters of document text sent to the completion service
    pub prompt_char_limit: usize,
}

impl AnalyzerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.top_k == 0 {
            return Err("top_k must be greater than 0".to_string());
        }
        if self.max_corpus_paragraphs == 0 {
            return Err("max_corpus_paragraphs must be greater than 0".to_string());
        }
        if self.snippet_chars == 0 {
            return Err("snippet_chars must be greater than 0".to_string());
        }
        if self.prompt_char_limit == 0 {
            return Err("prompt_char_limit must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Use a different reference corpus
    pub fn with_reference_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.reference_path = path.into();
        self
    }

    /// Return a different number of citations
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            reference_path: PathBuf::from(DEFAULT_REFERENCE_PATH),
            top_k: 3,
            max_corpus_paragraphs: 500,
            snippet_chars: 800,
            min_word_len: 5,
            prompt_char_limit: 4000,
        }
    }
}
