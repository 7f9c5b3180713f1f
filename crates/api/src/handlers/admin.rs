//! Handlers for the read-only admin surface.

use axum::extract::State;
use axum::Json;

use claimcheck_db::models::StoredAnalysis;
use claimcheck_db::repositories::AnalysisRepo;

use crate::error::ApiResult;
use crate::middleware::admin::AdminToken;
use crate::state::AppState;

/// GET /get-analyses?token=...
///
/// List every stored analysis, newest first, exactly as persisted.
pub async fn list_analyses(
    _admin: AdminToken,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<StoredAnalysis>>> {
    let analyses = AnalysisRepo::list_all(&state.pool).await?;

    Ok(Json(analyses))
}
