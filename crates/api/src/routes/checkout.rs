//! Route definitions for checkout-session creation.

use axum::routing::post;
use axum::Router;

use crate::handlers::checkout;
use crate::state::AppState;

/// Routes mounted at the application root.
///
/// ```text
/// POST   /create-checkout    -> create_checkout
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/create-checkout", post(checkout::create_checkout))
}
