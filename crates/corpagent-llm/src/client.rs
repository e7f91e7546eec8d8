//! Completion client selection
//!
//! The live/offline decision is made once, when the client is built, by
//! probing for credentials. Call sites only ever see a `CompletionClient`.

use crate::config::CompletionConfig;
use crate::{LiveCompletion, LlmError, MockCompletion};
use corpagent_domain::traits::CompletionProvider;
use corpagent_domain::CompletionResult;
use tracing::{info, warn};

/// A completion provider chosen at construction time
pub enum CompletionClient {
    /// Talks to the Gemini API
    Live(LiveCompletion),

    /// Returns the fixed offline result
    Mock(MockCompletion),
}

impl CompletionClient {
    /// Pick a provider for the given configuration
    ///
    /// Credentials present selects `Live`; otherwise `Mock`. A live client
    /// that cannot be built also falls back to `Mock`.
    pub fn from_config(config: &CompletionConfig) -> Self {
        if config.credentials().is_none() {
            info!("No completion credentials configured, using offline mock");
            return CompletionClient::Mock(MockCompletion::new());
        }

        match LiveCompletion::new(config) {
            Ok(live) => {
                info!("Using live completion model '{}'", live.model());
                CompletionClient::Live(live)
            }
            Err(e) => {
                warn!("Live completion unavailable ({}), using offline mock", e);
                CompletionClient::Mock(MockCompletion::new())
            }
        }
    }

    /// Pick a provider from environment variables
    pub fn from_env() -> Self {
        Self::from_config(&CompletionConfig::from_env())
    }

    /// Always use the offline provider
    pub fn mock() -> Self {
        CompletionClient::Mock(MockCompletion::new())
    }

    /// Whether this client calls a live service
    pub fn is_live(&self) -> bool {
        matches!(self, CompletionClient::Live(_))
    }
}

impl CompletionProvider for CompletionClient {
    type Error = LlmError;

    fn complete(&self, prompt: &str, context: Option<&str>) -> Result<CompletionResult, Self::Error> {
        match self {
            CompletionClient::Live(live) => live.complete(prompt, context),
            CompletionClient::Mock(mock) => mock.complete(prompt, context),
        }
    }

    fn name(&self) -> &str {
        match self {
            CompletionClient::Live(live) => live.name(),
            CompletionClient::Mock(mock) => mock.name(),
        }
    }
}
