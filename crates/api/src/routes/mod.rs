//! Route definitions.

pub mod admin;
pub mod analysis;
pub mod checkout;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /analyze            run an analysis (POST)
/// /create-checkout    create a payment session (POST)
/// /get-analyses       list stored analyses (GET, admin token)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(analysis::router())
        .merge(checkout::router())
        .merge(admin::router())
}
