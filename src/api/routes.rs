//! API route configuration.

use crate::api::handlers::{
    create_author_handler, create_book_handler, create_publisher_handler, destroy_book_handler,
    list_authors_handler, list_books_handler, list_publishers_handler, show_author_handler,
    show_book_handler, show_publisher_handler, update_book_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Catalog resource routes.
///
/// # Endpoints
///
/// - `GET    /books`              - List books (paginated, `?page=N`)
/// - `POST   /books`              - Create a book
/// - `GET    /books/{id}`         - Fetch a book
/// - `PUT    /books/{id}`         - Update a book
/// - `PATCH  /books/{id}`         - Update a book
/// - `DELETE /books/{id}`         - Delete a book
/// - `GET    /authors`            - List authors
/// - `POST   /authors`            - Create an author
/// - `GET    /authors/{id}`       - Fetch an author
/// - `GET    /publishers`         - List publishers
/// - `POST   /publishers`         - Create a publisher
/// - `GET    /publishers/{id}`    - Fetch a publisher
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route(
            "/books/{id}",
            get(show_book_handler)
                .put(update_book_handler)
                .patch(update_book_handler)
                .delete(destroy_book_handler),
        )
        .route(
            "/authors",
            get(list_authors_handler).post(create_author_handler),
        )
        .route("/authors/{id}", get(show_author_handler))
        .route(
            "/publishers",
            get(list_publishers_handler).post(create_publisher_handler),
        )
        .route("/publishers/{id}", get(show_publisher_handler))
}
