use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use claimcheck_core::AnalysisParseError;
use claimcheck_llm::LlmError;
use claimcheck_transcript::TranscriptError;
use serde_json::json;

use crate::payments::PaymentError;

/// Body text for video submissions that could not be processed.
pub const VIDEO_FETCH_USER_MESSAGE: &str =
    "Could not process that video. Try a different link or enter the idea manually.";

/// Body text for any failure inside the analysis pipeline itself.
pub const ANALYSIS_FAILED_USER_MESSAGE: &str = "Analysis failed. Try again.";

/// Body text when the payment-session service call fails.
pub const CHECKOUT_FAILED_USER_MESSAGE: &str = "Could not start checkout. Try again.";

/// Application-level error type for HTTP handlers.
///
/// Variants keep the detailed cause for the log line; [`IntoResponse`]
/// maps each to a status and the client-facing body `{"error": message}`.
/// Internal causes never appear in the body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request is missing something the pipeline needs.
    #[error("Bad request: {0}")]
    Validation(String),

    /// The transcription service failed, or is not deployed.
    #[error("Video fetch failed: {0}")]
    VideoFetch(#[from] TranscriptError),

    /// The model oracle call failed.
    #[error("Oracle call failed: {0}")]
    Llm(#[from] LlmError),

    /// The oracle reply was not a valid analysis.
    #[error(transparent)]
    Parse(#[from] AnalysisParseError),

    /// The payment-session service failed, or is not deployed.
    #[error("Checkout failed: {0}")]
    Payment(#[from] PaymentError),

    /// Missing or wrong admin capability token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            ApiError::VideoFetch(err) => {
                tracing::error!(error = %err, "Video fetch failed");
                (
                    StatusCode::BAD_REQUEST,
                    VIDEO_FETCH_USER_MESSAGE.to_string(),
                )
            }

            ApiError::Llm(err) => {
                tracing::error!(error = %err, "Model oracle call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ANALYSIS_FAILED_USER_MESSAGE.to_string(),
                )
            }

            ApiError::Parse(err) => {
                tracing::error!(error = %err, "Oracle reply rejected");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ANALYSIS_FAILED_USER_MESSAGE.to_string(),
                )
            }

            ApiError::Payment(err) => {
                tracing::error!(error = %err, "Checkout session creation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    CHECKOUT_FAILED_USER_MESSAGE.to_string(),
                )
            }

            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),

            ApiError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
