//! Repository trait for publishers.

use crate::domain::entities::{Publisher, NewPublisher};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for publishers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPublisherRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryCatalog`] - In-process implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PublisherRepository: Send + Sync {
    /// Inserts a new publisher.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_publisher: NewPublisher) -> Result<Publisher, AppError>;

    /// Finds a publisher by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Publisher>, AppError>;

    /// Lists all publishers ordered by id ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Publisher>, AppError>;

    /// Counts all publishers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
