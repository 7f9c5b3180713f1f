//! Admin capability extractor for Axum handlers.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Admin capability proven by the `token` query parameter.
///
/// There are no user accounts. Whoever presents the configured shared
/// secret holds the capability; everyone else gets a 401. Use this as an
/// extractor parameter in any handler on the admin surface:
///
/// ```ignore
/// async fn my_handler(_admin: AdminToken) -> ApiResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminToken;

#[derive(Debug, Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

impl FromRequestParts<AppState> for AdminToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let expected = state
            .config
            .admin_token
            .as_deref()
            .ok_or_else(|| ApiError::Unauthorized("Admin access is not enabled".into()))?;

        let Query(query) = Query::<TokenQuery>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Unauthorized("Missing admin token".into()))?;

        match query.token.as_deref() {
            Some(token) if token == expected => Ok(AdminToken),
            Some(_) => Err(ApiError::Unauthorized("Invalid admin token".into())),
            None => Err(ApiError::Unauthorized("Missing admin token".into())),
        }
    }
}
