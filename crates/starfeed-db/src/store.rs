//! Dedup key persistence in the `seen_reviews` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use starfeed_reviews::{SeenStore, StoreError};

use crate::DbError;

/// One recorded dedup key.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SeenReviewRow {
    pub dedup_key: String,
    pub first_seen_at: DateTime<Utc>,
}

/// Postgres-backed membership set of delivered review keys.
///
/// Rows are only ever inserted. There is no expiry; volume is low enough
/// that unbounded growth is fine.
#[derive(Clone)]
pub struct DedupStore {
    pool: PgPool,
}

impl DedupStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Total number of recorded keys.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlx`] if the query fails.
    pub async fn count(&self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM seen_reviews")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// The most recently recorded keys, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlx`] if the query fails.
    pub async fn recent(&self, limit: i64) -> Result<Vec<SeenReviewRow>, DbError> {
        let rows = sqlx::query_as::<_, SeenReviewRow>(
            "SELECT dedup_key, first_seen_at FROM seen_reviews \
             ORDER BY first_seen_at DESC, dedup_key LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

#[async_trait]
impl SeenStore for DedupStore {
    async fn is_member(&self, key: &str) -> Result<bool, StoreError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM seen_reviews WHERE dedup_key = $1)",
        )
        .bind(key)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::new(e.to_string()))
    }

    async fn add(&self, key: &str) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO seen_reviews (dedup_key) VALUES ($1) \
             ON CONFLICT (dedup_key) DO NOTHING",
        )
        .bind(key)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::new(e.to_string()))?;
        Ok(())
    }
}
