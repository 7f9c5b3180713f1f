//! Request handlers.
//!
//! Each submodule provides the async handler functions for one endpoint
//! group. Handlers run the domain logic from `claimcheck_core`, call the
//! oracle clients held in [`AppState`](crate::state::AppState), and map
//! errors via [`ApiError`](crate::error::ApiError).

pub mod admin;
pub mod analysis;
pub mod checkout;
