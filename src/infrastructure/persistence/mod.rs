//! Repository implementations.
//!
//! PostgreSQL repositories use SQLx with runtime-checked queries. The
//! in-memory catalog implements the same traits for development and tests.
//!
//! # Repositories
//!
//! - [`PgBookRepository`] - Book storage and ordered paging
//! - [`PgAuthorRepository`] - Author storage and lookup
//! - [`PgPublisherRepository`] - Publisher storage and lookup
//! - [`MemoryCatalog`] - All three, kept in process memory

pub mod memory_catalog;
pub mod pg_author_repository;
pub mod pg_book_repository;
pub mod pg_publisher_repository;

pub use memory_catalog::MemoryCatalog;
pub use pg_author_repository::PgAuthorRepository;
pub use pg_book_repository::PgBookRepository;
pub use pg_publisher_repository::PgPublisherRepository;
