//! Database row structs.

pub mod analysis;

pub use analysis::StoredAnalysis;
