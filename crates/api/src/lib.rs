//! HTTP API server for the ClaimCheck analysis service.
//!
//! Everything the binary wires together is public here so integration
//! tests can build the same app with stub oracle services:
//!
//! - [`config`] -- Environment-driven server configuration.
//! - [`state`] -- Shared [`state::AppState`] injected into handlers.
//! - [`error`] -- [`error::ApiError`] and its HTTP mapping.
//! - [`router`] -- [`router::build_app_router`], the single router builder.
//! - [`routes`] / [`handlers`] -- Endpoint definitions and their logic.
//! - [`middleware`] -- The admin capability extractor.
//! - [`payments`] -- Client for the payment-session service.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod payments;
pub mod router;
pub mod routes;
pub mod state;
