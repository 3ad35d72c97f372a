//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod authors;
pub mod books;
pub mod health;
pub mod publishers;

pub use authors::{create_author_handler, list_authors_handler, show_author_handler};
pub use books::{
    create_book_handler, destroy_book_handler, list_books_handler, show_book_handler,
    update_book_handler,
};
pub use health::health_handler;
pub use publishers::{create_publisher_handler, list_publishers_handler, show_publisher_handler};
