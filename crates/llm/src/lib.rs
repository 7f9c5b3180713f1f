//! HTTP client for the analysis language-model oracle.
//!
//! Speaks the Anthropic-style messages wire: one system prompt, one user
//! message, no streaming, no tools. The reply text is returned raw; parsing
//! it into an analysis is the caller's concern.

use std::time::Duration;

use serde::Deserialize;

/// Default messages endpoint host.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Default model id for analyses.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-6";

/// Default completion budget. Analyses are short structured JSON.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Wire protocol version header value.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// HTTP request timeout for one completion.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the model oracle layer.
///
/// Callers treat these as opaque analysis failures; the detail is only
/// logged.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request itself failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code (auth, quota, overload).
    #[error("model API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The API answered 2xx but carried no text content.
    #[error("model reply contained no text content")]
    EmptyResponse,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Connection settings for the model oracle.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

impl LlmConfig {
    /// Config with an API key and every other field at its default.
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Response body of the messages endpoint. Only the content blocks are
/// read; usage and metadata fields are ignored.
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

/// One content block of a reply. Non-text blocks deserialize with
/// `text: None`.
#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for the model oracle.
pub struct LlmClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl LlmClient {
    /// Create a client from connection settings.
    pub fn new(config: LlmConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    /// The model id requests are sent with.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Run one completion and return the raw reply text.
    ///
    /// Sends `POST /v1/messages` with the system prompt and a single user
    /// message. Returns the text of the first content block.
    pub async fn complete(&self, system: &str, user_message: &str) -> Result<String, LlmError> {
        let body = serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "system": system,
            "messages": [{ "role": "user", "content": user_message }],
        });

        let response = self
            .client
            .post(format!("{}/v1/messages", self.config.base_url))
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let reply = response.json::<MessagesResponse>().await?;
        reply
            .content
            .into_iter()
            .find_map(|block| block.text)
            .ok_or(LlmError::EmptyResponse)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
