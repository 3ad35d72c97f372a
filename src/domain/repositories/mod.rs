//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented in `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`BookRepository`] - Book CRUD and ordered paging
//! - [`AuthorRepository`] - Author storage and lookup
//! - [`PublisherRepository`] - Publisher storage and lookup
//!
//! Mock implementations are generated via `mockall` for unit tests. See
//! `tests/repository_*.rs` for the PostgreSQL implementations in action.

pub mod author_repository;
pub mod book_repository;
pub mod publisher_repository;

pub use author_repository::AuthorRepository;
pub use book_repository::BookRepository;
pub use publisher_repository::PublisherRepository;

#[cfg(test)]
pub use author_repository::MockAuthorRepository;
#[cfg(test)]
pub use book_repository::MockBookRepository;
#[cfg(test)]
pub use publisher_repository::MockPublisherRepository;
