//! Repository for the `analyses` table.
//!
//! Analyses are write-once: there is no update or delete path. Inserts are
//! issued best-effort by the analyze pipeline; reads serve the admin list.

use sqlx::PgPool;

use crate::models::analysis::StoredAnalysis;

/// Data access for persisted analyses.
pub struct AnalysisRepo;

impl AnalysisRepo {
    /// Insert a completed analysis.
    ///
    /// `data` must be the full record JSON including `id`; the `id` column
    /// duplicates it for keyed lookup.
    pub async fn insert(
        pool: &PgPool,
        id: &str,
        data: &serde_json::Value,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO analyses (id, data) VALUES ($1, $2)")
            .bind(id)
            .bind(data)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// All analyses, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<StoredAnalysis>, sqlx::Error> {
        sqlx::query_as::<_, StoredAnalysis>(
            "SELECT id, data, created_at FROM analyses ORDER BY created_at DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Look up one analysis by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<StoredAnalysis>, sqlx::Error> {
        sqlx::query_as::<_, StoredAnalysis>(
            "SELECT id, data, created_at FROM analyses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
