//! `PostgreSQL` implementation of the `ReviewRepository` trait.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use cinelog_core::error::DomainError;
use cinelog_core::repository::ReviewRepository;
use cinelog_core::review::Review;

use crate::infra;

/// PostgreSQL-backed review repository.
#[derive(Debug, Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    /// Creates a new `PgReviewRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn review_from_row(row: &PgRow) -> Result<Review, DomainError> {
    let map = |e: sqlx::Error| infra(&e);
    Ok(Review {
        id: row.try_get("id").map_err(map)?,
        imdb_id: row.try_get("imdb_id").map_err(map)?,
        body: row.try_get("body").map_err(map)?,
        created_at: row.try_get("created_at").map_err(map)?,
    })
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn insert(&self, review: &Review) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO reviews (id, imdb_id, body, created_at)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(review.id)
        .bind(&review.imdb_id)
        .bind(&review.body)
        .bind(review.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| infra(&e))?;

        Ok(())
    }

    async fn find_by_id(&self, review_id: Uuid) -> Result<Option<Review>, DomainError> {
        let row = sqlx::query(
            "SELECT id, imdb_id, body, created_at
             FROM reviews
             WHERE id = $1",
        )
        .bind(review_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| infra(&e))?;

        row.as_ref().map(review_from_row).transpose()
    }

    async fn find_by_imdb_id(&self, imdb_id: &str) -> Result<Vec<Review>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, imdb_id, body, created_at
             FROM reviews
             WHERE imdb_id = $1
             ORDER BY created_at",
        )
        .bind(imdb_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| infra(&e))?;

        rows.iter().map(review_from_row).collect()
    }
}
