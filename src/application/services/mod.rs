//! Business logic services for the application layer.

pub mod author_service;
pub mod book_service;
pub mod publisher_service;

pub use author_service::AuthorService;
pub use book_service::BookService;
pub use publisher_service::PublisherService;
