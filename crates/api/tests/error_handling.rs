//! Tests for `ApiError` → HTTP response mapping.
//!
//! These tests verify that each `ApiError` variant produces the correct
//! HTTP status code and client-facing message. They do NOT need an HTTP
//! server -- they call `IntoResponse` directly on `ApiError` values.

use axum::response::IntoResponse;
use http_body_util::BodyExt;

use claimcheck_api::error::ApiError;
use claimcheck_api::payments::PaymentError;
use claimcheck_core::AnalysisParseError;
use claimcheck_llm::LlmError;
use claimcheck_transcript::TranscriptError;

/// Helper: convert an `ApiError` into its status code and parsed JSON body.
async fn error_to_response(err: ApiError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: Validation maps to 400 with the message as-is
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400_with_message() {
    let err = ApiError::Validation("Add the income claim.".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Add the income claim.");
}

// ---------------------------------------------------------------------------
// Test: VideoFetch maps to 400 with the fixed user-safe message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn video_fetch_error_returns_400_with_fixed_message() {
    let err = ApiError::VideoFetch(TranscriptError::Api {
        status: 500,
        body: "yt-dlp stack trace".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"],
        "Could not process that video. Try a different link or enter the idea manually."
    );

    // The internal cause must not leak.
    assert!(!json.to_string().contains("yt-dlp"));
}

#[tokio::test]
async fn unconfigured_transcript_service_maps_like_fetch_failure() {
    let err = ApiError::VideoFetch(TranscriptError::NotConfigured);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"],
        "Could not process that video. Try a different link or enter the idea manually."
    );
}

// ---------------------------------------------------------------------------
// Test: Llm and Parse map to 500 with the generic analysis message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn llm_error_returns_500_with_generic_message() {
    let err = ApiError::Llm(LlmError::Api {
        status: 529,
        body: "overloaded_error".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Analysis failed. Try again.");
    assert!(!json.to_string().contains("overloaded_error"));
}

#[tokio::test]
async fn empty_oracle_reply_returns_500() {
    let err = ApiError::Llm(LlmError::EmptyResponse);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Analysis failed. Try again.");
}

#[tokio::test]
async fn malformed_analysis_returns_500() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{\"a\":1").unwrap_err();
    let err = ApiError::Parse(AnalysisParseError::Malformed(parse_err));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Analysis failed. Try again.");
}

#[tokio::test]
async fn schema_violation_returns_500() {
    let err = ApiError::Parse(AnalysisParseError::Schema(
        "missing field `effortScore`".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Analysis failed. Try again.");
    assert!(!json.to_string().contains("effortScore"));
}

// ---------------------------------------------------------------------------
// Test: Payment maps to 500 with the checkout message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn payment_error_returns_500_with_checkout_message() {
    let err = ApiError::Payment(PaymentError::NotConfigured);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Could not start checkout. Try again.");
}

// ---------------------------------------------------------------------------
// Test: Unauthorized maps to 401 with the message as-is
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = ApiError::Unauthorized("Invalid admin token".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Invalid admin token");
}

// ---------------------------------------------------------------------------
// Test: Database maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_error_returns_500_and_sanitizes_message() {
    let err = ApiError::Database(sqlx::Error::PoolClosed);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");

    let body_text = json.to_string();
    assert!(
        !body_text.contains("pool"),
        "Database error response must not leak internals"
    );
}
