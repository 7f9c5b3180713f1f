//! Route definitions for the analysis pipeline.

use axum::routing::post;
use axum::Router;

use crate::handlers::analysis;
use crate::state::AppState;

/// Routes mounted at the application root.
///
/// Only POST is registered, so any other method on `/analyze` gets a 405
/// without the body ever being read.
///
/// ```text
/// POST   /analyze    -> analyze
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/analyze", post(analysis::analyze))
}
