//! HTTP client for the video transcription service.
//!
//! The service is an opaque dependency: it receives a social video URL and
//! a shared secret, downloads the video, and returns whatever speech and
//! caption text it could extract. One request per analysis, no retry.

use std::time::Duration;

use serde::Deserialize;

/// HTTP request timeout. Covers video download plus speech-to-text, which
/// routinely runs tens of seconds.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the transcription service layer.
///
/// All variants surface to the submitter as the same fixed message; the
/// variant detail is only logged.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    /// No transcription service is configured for this deployment.
    #[error("transcription service is not configured")]
    NotConfigured,

    /// The HTTP request itself failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("transcription service error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// What the transcription service extracted from a video.
///
/// Either field may be absent or empty; that is a valid outcome (silent
/// video, no caption), not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptResult {
    pub transcript: Option<String>,
    pub description: Option<String>,
}

/// HTTP client for one transcription service deployment.
pub struct TranscriptClient {
    client: reqwest::Client,
    base_url: String,
    secret: String,
}

impl TranscriptClient {
    /// Create a client for the service at `base_url`.
    ///
    /// `secret` is sent with every request; the service rejects calls
    /// without it.
    pub fn new(base_url: String, secret: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            base_url,
            secret,
        }
    }

    /// Fetch transcript and description for a video URL.
    ///
    /// Sends a single `POST /transcribe` request. Failures are terminal;
    /// the caller decides whether to surface or fall back.
    pub async fn fetch(&self, video_url: &str) -> Result<TranscriptResult, TranscriptError> {
        let body = serde_json::json!({
            "url": video_url,
            "secret": self.secret,
        });

        let response = self
            .client
            .post(format!("{}/transcribe", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(TranscriptError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<TranscriptResult>().await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
