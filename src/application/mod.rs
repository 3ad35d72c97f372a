//! Application layer services implementing the catalog rules.
//!
//! Services orchestrate repository calls and validation and offer a small API
//! to the HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::book_service::BookService`] - Book listing, lookup and writes
//! - [`services::author_service::AuthorService`] - Author creation and lookup
//! - [`services::publisher_service::PublisherService`] - Publisher creation and lookup

pub mod services;
