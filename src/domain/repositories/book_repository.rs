//! Repository trait for books.

use crate::domain::entities::{Book, NewBook};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for books.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryCatalog`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Inserts a new book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the author or publisher does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError>;

    /// Finds a book by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError>;

    /// Lists books ordered by id ascending, skipping `offset` and returning at
    /// most `limit` records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Book>, AppError>;

    /// Counts all books.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Replaces every field of book `id`. Returns `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the author or publisher does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, book: NewBook) -> Result<Option<Book>, AppError>;

    /// Deletes book `id` and returns the removed record, or `None` if it did
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<Option<Book>, AppError>;
}
