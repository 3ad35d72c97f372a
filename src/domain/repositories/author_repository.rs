//! Repository trait for authors.

use crate::domain::entities::{Author, NewAuthor};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for authors.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAuthorRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryCatalog`] - In-process implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Inserts a new author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError>;

    /// Finds an author by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError>;

    /// Lists all authors ordered by id ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Author>, AppError>;

    /// Counts all authors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
