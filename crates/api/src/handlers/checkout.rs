//! Handler for checkout-session creation.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::payments::PaymentError;
use crate::state::AppState;

/// Request body for `POST /create-checkout`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutRequest {
    pub analysis_id: Option<String>,
}

/// Response body carrying the hosted checkout URL.
#[derive(Debug, Serialize)]
pub struct CreateCheckoutResponse {
    pub url: String,
}

/// POST /create-checkout
///
/// Create a payment session for the given analysis and return the URL the
/// browser should redirect to.
pub async fn create_checkout(
    State(state): State<AppState>,
    Json(request): Json<CreateCheckoutRequest>,
) -> ApiResult<Json<CreateCheckoutResponse>> {
    let analysis_id = request
        .analysis_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Missing analysisId.".to_string()))?;

    let payments = state
        .payments
        .as_ref()
        .ok_or(PaymentError::NotConfigured)?;
    let session = payments.create_session(&analysis_id).await?;

    tracing::info!(analysis_id = %analysis_id, "Checkout session created");

    Ok(Json(CreateCheckoutResponse { url: session.url }))
}
