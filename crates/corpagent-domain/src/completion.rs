//! Output of the text-generation capability

/// Where a completion result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionSource {
    /// A live model answered the prompt
    Live,

    /// The offline stand-in answered (no credentials configured)
    Mock,

    /// The service failed and an explanatory placeholder was substituted
    Fallback,
}

impl CompletionSource {
    /// Get the source name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionSource::Live => "live",
            CompletionSource::Mock => "mock",
            CompletionSource::Fallback => "fallback",
        }
    }
}

/// Text returned by a completion service
///
/// The text is untrusted and only ever displayed, never parsed for structure.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResult {
    /// Display text
    pub text: String,

    /// Suggestion list (only the mock variant fills this in)
    pub suggestions: Vec<String>,

    /// Unix timestamp in seconds, when the producer records one
    pub timestamp: Option<f64>,

    /// Raw provider payload, kept as opaque text
    pub raw: Option<String>,

    /// Producer of this result
    pub source: CompletionSource,
}

impl CompletionResult {
    /// Create a plain result with only display text
    pub fn text(text: impl Into<String>, source: CompletionSource) -> Self {
        Self {
            text: text.into(),
            suggestions: Vec::new(),
            timestamp: None,
            raw: None,
            source,
        }
    }

    /// Create the placeholder used when the service could not be reached
    pub fn unavailable(cause: impl std::fmt::Display) -> Self {
        Self::text(
            format!("Completion service not available: {}", cause),
            CompletionSource::Fallback,
        )
    }
}
