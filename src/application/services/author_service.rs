//! Author management service.

use std::sync::Arc;

use validator::Validate;

use crate::domain::entities::{Author, NameDraft, NewAuthor};
use crate::domain::repositories::AuthorRepository;
use crate::domain::validation::full_messages;
use crate::error::AppError;

/// Service for authors referenced by books.
pub struct AuthorService {
    repository: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    /// Creates a new author service.
    pub fn new(repository: Arc<dyn AuthorRepository>) -> Self {
        Self { repository }
    }

    /// Creates an author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is missing or blank.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_author(&self, name: Option<String>) -> Result<Author, AppError> {
        let draft = NameDraft::new(name);
        if let Err(errors) = draft.validate() {
            return Err(AppError::validation(full_messages(&errors, &["name"])));
        }

        let name = draft.name.unwrap_or_default().trim().to_string();
        let author = self.repository.create(NewAuthor { name }).await?;

        tracing::info!(author_id = author.id, name = %author.name, "Author created");
        Ok(author)
    }

    /// Looks up an author by the identifier as received from the client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `id` is not an integer or no such
    /// author exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_author(&self, id: &str) -> Result<Author, AppError> {
        let not_found = || AppError::record_not_found("Author", id);

        let Ok(numeric_id) = id.trim().parse::<i64>() else {
            return Err(not_found());
        };

        self.repository
            .find_by_id(numeric_id)
            .await?
            .ok_or_else(not_found)
    }

    /// Lists all authors ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_authors(&self) -> Result<Vec<Author>, AppError> {
        self.repository.list().await
    }

    /// Counts all authors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_authors(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
