//! PostgreSQL implementation of book repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Book, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// PostgreSQL repository for books.
///
/// Author and publisher references are enforced by foreign keys; a violation
/// surfaces as [`AppError::Validation`] through `From<sqlx::Error>`.
pub struct PgBookRepository {
    pool: Arc<PgPool>,
}

impl PgBookRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i64,
    title: String,
    genre: Option<String>,
    language: Option<String>,
    edition: Option<String>,
    place: Option<String>,
    year: Option<i32>,
    author_id: i64,
    publisher_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BookRow> for Book {
    fn from(r: BookRow) -> Self {
        Book {
            id: r.id,
            title: r.title,
            genre: r.genre,
            language: r.language,
            edition: r.edition,
            place: r.place,
            year: r.year,
            author_id: r.author_id,
            publisher_id: r.publisher_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (title, genre, language, edition, place, year, author_id, publisher_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, title, genre, language, edition, place, year, author_id, publisher_id,
                      created_at, updated_at
            "#,
        )
        .bind(new_book.title)
        .bind(new_book.genre)
        .bind(new_book.language)
        .bind(new_book.edition)
        .bind(new_book.place)
        .bind(new_book.year)
        .bind(new_book.author_id)
        .bind(new_book.publisher_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, genre, language, edition, place, year, author_id, publisher_id,
                   created_at, updated_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Book::from))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Book>, AppError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, genre, language, edition, place, year, author_id, publisher_id,
                   created_at, updated_at
            FROM books
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, book: NewBook) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            UPDATE books SET
                title        = $2,
                genre        = $3,
                language     = $4,
                edition      = $5,
                place        = $6,
                year         = $7,
                author_id    = $8,
                publisher_id = $9,
                updated_at   = NOW()
            WHERE id = $1
            RETURNING id, title, genre, language, edition, place, year, author_id, publisher_id,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(book.title)
        .bind(book.genre)
        .bind(book.language)
        .bind(book.edition)
        .bind(book.place)
        .bind(book.year)
        .bind(book.author_id)
        .bind(book.publisher_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Book::from))
    }

    async fn delete(&self, id: i64) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            DELETE FROM books
            WHERE id = $1
            RETURNING id, title, genre, language, edition, place, year, author_id, publisher_id,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Book::from))
    }
}
