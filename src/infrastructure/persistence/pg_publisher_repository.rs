//! PostgreSQL implementation of publisher repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Publisher, NewPublisher};
use crate::domain::repositories::PublisherRepository;
use crate::error::AppError;

/// PostgreSQL repository for publishers.
pub struct PgPublisherRepository {
    pool: Arc<PgPool>,
}

impl PgPublisherRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PublisherRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PublisherRow> for Publisher {
    fn from(r: PublisherRow) -> Self {
        Publisher::new(r.id, r.name, r.created_at, r.updated_at)
    }
}

#[async_trait]
impl PublisherRepository for PgPublisherRepository {
    async fn create(&self, new_publisher: NewPublisher) -> Result<Publisher, AppError> {
        let row = sqlx::query_as::<_, PublisherRow>(
            r#"
            INSERT INTO publishers (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(new_publisher.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Publisher>, AppError> {
        let row = sqlx::query_as::<_, PublisherRow>(
            "SELECT id, name, created_at, updated_at FROM publishers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Publisher::from))
    }

    async fn list(&self) -> Result<Vec<Publisher>, AppError> {
        let rows = sqlx::query_as::<_, PublisherRow>(
            "SELECT id, name, created_at, updated_at FROM publishers ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Publisher::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM publishers")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
