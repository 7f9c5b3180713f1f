//! Row struct for the `analyses` table.

use claimcheck_core::types::{AnalysisId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A persisted analysis exactly as written at request time.
///
/// `data` is the full analysis record JSON, identical to the body the
/// client received.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoredAnalysis {
    pub id: AnalysisId,
    pub data: serde_json::Value,
    pub created_at: Timestamp,
}
