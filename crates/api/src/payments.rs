//! HTTP client for the payment-session service.
//!
//! One call: create a checkout session for an analysis and hand back the
//! hosted URL the browser should be redirected to. The service owns
//! pricing, payment capture, and the post-payment redirect; this side only
//! forwards the analysis id and relays the session URL.

use std::time::Duration;

use serde::Deserialize;

/// HTTP request timeout for a session-creation call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for payment-session failures.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    /// This deployment has no payment service configured.
    #[error("No payment service is configured")]
    NotConfigured,

    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("Payment service request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Payment service returned HTTP {status}: {body}")]
    Api { status: u16, body: String },
}

// ---------------------------------------------------------------------------
// PaymentClient
// ---------------------------------------------------------------------------

/// A created checkout session.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    /// Hosted checkout page to send the browser to.
    pub url: String,
}

/// Client for the payment-session service.
#[derive(Debug, Clone)]
pub struct PaymentClient {
    client: reqwest::Client,
    base_url: String,
    secret: String,
}

impl PaymentClient {
    /// Create a new client for the service at `base_url`.
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

    /// Create a checkout session that will unlock the analysis with
    /// `analysis_id` once paid.
    pub async fn create_session(
        &self,
        analysis_id: &str,
    ) -> Result<CheckoutSession, PaymentError> {
        let url = format!("{}/sessions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret)
            .json(&serde_json::json!({ "analysisId": analysis_id }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(PaymentError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<CheckoutSession>().await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_does_not_panic() {
        let _client = PaymentClient::new(
            "http://localhost:9999".to_string(),
            "secret".to_string(),
        );
    }

    #[test]
    fn payment_error_display_api() {
        let err = PaymentError::Api {
            status: 502,
            body: "upstream down".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Payment service returned HTTP 502: upstream down"
        );
    }

    #[test]
    fn payment_error_display_not_configured() {
        let err = PaymentError::NotConfigured;
        assert_eq!(err.to_string(), "No payment service is configured");
    }

    #[test]
    fn checkout_session_deserializes_url() {
        let session: CheckoutSession =
            serde_json::from_str(r#"{"url":"https://pay.example/s/abc"}"#).unwrap();
        assert_eq!(session.url, "https://pay.example/s/abc");
    }
}
