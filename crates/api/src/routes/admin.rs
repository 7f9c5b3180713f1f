//! Route definitions for the read-only admin surface.
//!
//! All endpoints require the admin capability token.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at the application root.
///
/// ```text
/// GET    /get-analyses    -> list_analyses
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/get-analyses", get(admin::list_analyses))
}
