use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::stored::StoredScreeningResult;
use crate::storage::ResultsRepository;

/// Results store backed by the `screening_results` table. Each record is kept
/// whole in a JSONB payload; the other columns exist for ordering and search.
pub struct PgResultsRepository {
    pool: PgPool,
    capacity: usize,
}

impl PgResultsRepository {
    pub fn new(pool: PgPool, capacity: usize) -> Self {
        Self { pool, capacity }
    }
}

#[async_trait]
impl ResultsRepository for PgResultsRepository {
    /// Upsert and eviction share one transaction.
    async fn upsert(&self, result: StoredScreeningResult) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO screening_results (id, job_title, company, created_at, saved_at, payload)
            VALUES ($1, $2, $3, $4, now(), $5)
            ON CONFLICT (id) DO UPDATE
            SET job_title = EXCLUDED.job_title,
                company   = EXCLUDED.company,
                saved_at  = now(),
                payload   = EXCLUDED.payload
            "#,
        )
        .bind(result.id)
        .bind(&result.job_title)
        .bind(&result.company)
        .bind(result.created_at)
        .bind(Json(&result))
        .execute(&mut *tx)
        .await?;

        let evicted = sqlx::query(
            r#"
            DELETE FROM screening_results
            WHERE id NOT IN (
                SELECT id FROM screening_results
                ORDER BY saved_at DESC
                LIMIT $1
            )
            "#,
        )
        .bind(self.capacity as i64)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;

        info!("Saved screening result {}", result.id);
        if evicted > 0 {
            info!("Evicted {evicted} stored results beyond capacity {}", self.capacity);
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<StoredScreeningResult>, AppError> {
        let rows: Vec<(Json<StoredScreeningResult>,)> =
            sqlx::query_as("SELECT payload FROM screening_results ORDER BY saved_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|(Json(result),)| result).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredScreeningResult>, AppError> {
        let row: Option<(Json<StoredScreeningResult>,)> =
            sqlx::query_as("SELECT payload FROM screening_results WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(Json(result),)| result))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let deleted = sqlx::query("DELETE FROM screening_results WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(deleted > 0)
    }

    async fn clear(&self) -> Result<u64, AppError> {
        let deleted = sqlx::query("DELETE FROM screening_results")
            .execute(&self.pool)
            .await?
            .rows_affected();
        info!("Cleared {deleted} stored results");
        Ok(deleted)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
