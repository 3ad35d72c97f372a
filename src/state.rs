//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthorService, BookService, PublisherService};
use crate::domain::repositories::{AuthorRepository, BookRepository, PublisherRepository};
use crate::infrastructure::persistence::{
    MemoryCatalog, PgAuthorRepository, PgBookRepository, PgPublisherRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService>,
    pub author_service: Arc<AuthorService>,
    pub publisher_service: Arc<PublisherService>,
}

impl AppState {
    /// Wires the services on top of the given repositories.
    pub fn new(
        books: Arc<dyn BookRepository>,
        authors: Arc<dyn AuthorRepository>,
        publishers: Arc<dyn PublisherRepository>,
    ) -> Self {
        Self {
            book_service: Arc::new(BookService::new(
                books,
                authors.clone(),
                publishers.clone(),
            )),
            author_service: Arc::new(AuthorService::new(authors)),
            publisher_service: Arc::new(PublisherService::new(publishers)),
        }
    }

    /// State backed by PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        let pool = Arc::new(pool);
        Self::new(
            Arc::new(PgBookRepository::new(pool.clone())),
            Arc::new(PgAuthorRepository::new(pool.clone())),
            Arc::new(PgPublisherRepository::new(pool)),
        )
    }

    /// State backed by a fresh [`MemoryCatalog`].
    pub fn in_memory() -> Self {
        let catalog = MemoryCatalog::new();
        Self::new(
            Arc::new(catalog.clone()),
            Arc::new(catalog.clone()),
            Arc::new(catalog),
        )
    }
}
