//! Corpagent Completion Layer
//!
//! Implementations of the `CompletionProvider` trait from `corpagent-domain`.
//!
//! # Providers
//!
//! - `MockCompletion`: Fixed offline result, used when no credentials are configured
//! - `LiveCompletion`: Google Gemini `generateContent` API
//! - `CompletionClient`: One of the two, picked once at construction by probing credentials
//!
//! # Examples
//!
//! ```
//! use corpagent_llm::MockCompletion;
//! use corpagent_domain::traits::CompletionProvider;
//!
//! let provider = MockCompletion::with_text("Looks fine.");
//! let result = provider.complete("review this", None).unwrap();
//! assert_eq!(result.text, "Looks fine.");
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod gemini;

use corpagent_domain::traits::CompletionProvider;
use corpagent_domain::{CompletionResult, CompletionSource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

pub use client::CompletionClient;
pub use config::CompletionConfig;
pub use gemini::LiveCompletion;

/// Errors that can occur during completion calls
#[derive(Error, Debug)]
pub enum LlmError {
    /// No API key configured
    #[error("Missing credentials: {0} is not set")]
    MissingCredentials(String),

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

const MOCK_SUMMARY: &str = "Mocked Gemini response: This document appears to be an incorporation-style document. Recommended: verify Memorandum of Association, clarify beneficiary clauses, and remove 'sole discretion' phrasing.";

const MOCK_SUGGESTIONS: [&str; 3] = [
    "Add a clear beneficiary disclosure section.",
    "Replace 'sole discretion' with defined approval process.",
    "Add registered address and shareholder agreement references.",
];

/// Offline completion provider
///
/// Returns a fixed summary, a fixed suggestion list and the current
/// timestamp without making any network calls. This is the documented
/// stand-in when no credentials are configured, and doubles as a test double.
///
/// # Examples
///
/// ```
/// use corpagent_llm::MockCompletion;
/// use corpagent_domain::traits::CompletionProvider;
///
/// let provider = MockCompletion::new();
/// let result = provider.complete("prompt", Some("context")).unwrap();
/// assert_eq!(result.suggestions.len(), 3);
/// assert!(result.timestamp.is_some());
/// assert_eq!(provider.call_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockCompletion {
    text: String,
    suggestions: Vec<String>,
    fail_with: Option<String>,
    call_count: Arc<AtomicUsize>,
}

impl MockCompletion {
    /// Create the standard offline provider
    pub fn new() -> Self {
        Self {
            text: MOCK_SUMMARY.to_string(),
            suggestions: MOCK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            fail_with: None,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a provider that answers every prompt with `text` and no suggestions
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            suggestions: Vec::new(),
            ..Self::new()
        }
    }

    /// Create a provider whose every call fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::new()
        }
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionProvider for MockCompletion {
    type Error = LlmError;

    fn complete(&self, _prompt: &str, _context: Option<&str>) -> Result<CompletionResult, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.fail_with {
            return Err(LlmError::Communication(message.clone()));
        }

        Ok(CompletionResult {
            text: self.text.clone(),
            suggestions: self.suggestions.clone(),
            timestamp: Some(unix_timestamp()),
            raw: None,
            source: CompletionSource::Mock,
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Seconds since the Unix epoch, with sub-second precision
pub(crate) fn unix_timestamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
