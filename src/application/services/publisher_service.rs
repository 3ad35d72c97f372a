//! Publisher management service.

use std::sync::Arc;

use validator::Validate;

use crate::domain::entities::{Publisher, NameDraft, NewPublisher};
use crate::domain::repositories::PublisherRepository;
use crate::domain::validation::full_messages;
use crate::error::AppError;

/// Service for publishers referenced by books.
pub struct PublisherService {
    repository: Arc<dyn PublisherRepository>,
}

impl PublisherService {
    /// Creates a new publisher service.
    pub fn new(repository: Arc<dyn PublisherRepository>) -> Self {
        Self { repository }
    }

    /// Creates a publisher.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is missing or blank.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_publisher(&self, name: Option<String>) -> Result<Publisher, AppError> {
        let draft = NameDraft::new(name);
        if let Err(errors) = draft.validate() {
            return Err(AppError::validation(full_messages(&errors, &["name"])));
        }

        let name = draft.name.unwrap_or_default().trim().to_string();
        let publisher = self.repository.create(NewPublisher { name }).await?;

        tracing::info!(publisher_id = publisher.id, name = %publisher.name, "Publisher created");
        Ok(publisher)
    }

    /// Looks up a publisher by the identifier as received from the client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `id` is not an integer or no such
    /// publisher exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_publisher(&self, id: &str) -> Result<Publisher, AppError> {
        let not_found = || AppError::record_not_found("Publisher", id);

        let Ok(numeric_id) = id.trim().parse::<i64>() else {
            return Err(not_found());
        };

        self.repository
            .find_by_id(numeric_id)
            .await?
            .ok_or_else(not_found)
    }

    /// Lists all publishers ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_publishers(&self) -> Result<Vec<Publisher>, AppError> {
        self.repository.list().await
    }

    /// Counts all publishers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_publishers(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
