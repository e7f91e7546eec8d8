//! Gemini Provider Implementation
//!
//! Calls Google's `generateContent` REST endpoint.
//!
//! # Features
//!
//! - Async HTTP communication driven from a private runtime, so callers stay synchronous
//! - Configurable endpoint, model and timeout
//! - Retry logic with exponential backoff
//!
//! # Examples
//!
//! ```no_run
//! use corpagent_llm::{CompletionConfig, LiveCompletion};
//! use corpagent_domain::traits::CompletionProvider;
//!
//! let config = CompletionConfig::from_env();
//! let provider = LiveCompletion::new(&config).unwrap();
//! let result = provider.complete("Summarise this clause", None).unwrap();
//! println!("{}", result.text);
//! ```

use crate::config::{CompletionConfig, API_KEY_ENV};
use crate::{unix_timestamp, LlmError};
use corpagent_domain::traits::CompletionProvider;
use corpagent_domain::{CompletionResult, CompletionSource};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Gemini API provider
pub struct LiveCompletion {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
    max_retries: u32,
}

/// Request body for the generateContent API
#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

/// Response from the generateContent API
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl LiveCompletion {
    /// Create a new provider from configuration
    ///
    /// # Errors
    ///
    /// Returns `MissingCredentials` when no API key is configured, or
    /// `Other` when the HTTP client cannot be built.
    pub fn new(config: &CompletionConfig) -> Result<Self, LlmError> {
        let api_key = config
            .credentials()
            .ok_or_else(|| LlmError::MissingCredentials(API_KEY_ENV.to_string()))?
            .to_string();

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            client,
            max_retries: config.max_retries.max(1),
        })
    }

    /// Set the maximum number of attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Model this provider talks to
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text using the Gemini API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The endpoint cannot be reached
    /// - The model is not available
    /// - The response body is not a generateContent response
    pub async fn generate(&self, prompt: &str) -> Result<(String, String), LlmError> {
        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);

        let request_body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response
                            .text()
                            .await
                            .map_err(|e| LlmError::InvalidResponse(format!("Failed to read body: {}", e)))?;
                        let text = parse_generate_response(&body)?;
                        return Ok((text, body));
                    } else if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else {
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                debug!("Completion attempt {} failed, retrying in {:?}", attempts, delay);
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error.unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

impl CompletionProvider for LiveCompletion {
    type Error = LlmError;

    fn complete(&self, prompt: &str, context: Option<&str>) -> Result<CompletionResult, Self::Error> {
        let full_prompt = compose_prompt(prompt, context);

        // Blocking wrapper for the async call
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?;
        let (text, raw) = runtime.block_on(self.generate(&full_prompt))?;

        Ok(CompletionResult {
            text,
            suggestions: Vec::new(),
            timestamp: Some(unix_timestamp()),
            raw: Some(raw),
            source: CompletionSource::Live,
        })
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

/// Append non-empty side context to the prompt
fn compose_prompt(prompt: &str, context: Option<&str>) -> String {
    match context {
        Some(ctx) if !ctx.is_empty() => format!("{}\n\nContext:\n{}", prompt, ctx),
        _ => prompt.to_string(),
    }
}

/// Pull the first candidate's text out of a response body
fn parse_generate_response(body: &str) -> Result<String, LlmError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("no candidates in response".to_string()))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    Ok(text)
}
