//! Capability extractors.
//!
//! - [`admin::AdminToken`] -- Proves possession of the shared admin secret.

pub mod admin;
