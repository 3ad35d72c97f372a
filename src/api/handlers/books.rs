//! Handlers for the book resource.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::book::{BookItem, BookListResponse, BookParams};
use crate::api::dto::message::MessageResponse;
use crate::api::dto::pagination::PageParams;
use crate::api::extract::{RecordId, Required};
use crate::error::AppError;
use crate::state::AppState;

/// Lists books ordered by id, 25 per page.
///
/// # Endpoint
///
/// `GET /books?page=N`
///
/// # Response
///
/// ```json
/// {
///   "total_books": 55,
///   "list": [ { "id": 26, "title": "..." } ],
///   "pagination": "2 of 3"
/// }
/// ```
///
/// A page past the end returns an empty `list` with 200.
pub async fn list_books_handler(
    State(state): State<AppState>,
    params: PageParams,
) -> Result<Json<BookListResponse>, AppError> {
    let page = state.book_service.list_books(params.page()).await?;

    Ok(Json(BookListResponse::from(page)))
}

/// Returns a single book.
///
/// # Endpoint
///
/// `GET /books/{id}`
///
/// # Errors
///
/// Returns 404 if the book does not exist.
pub async fn show_book_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
) -> Result<Json<BookItem>, AppError> {
    let book = state.book_service.get_book(&id).await?;

    Ok(Json(book.into()))
}

/// Creates a book.
///
/// # Endpoint
///
/// `POST /books`
///
/// # Request Body
///
/// ```json
/// {
///   "book": {
///     "title": "1984",
///     "genre": "Dystopia",
///     "language": "English",
///     "edition": "1",
///     "place": "London",
///     "year": 1949,
///     "author_id": 1,
///     "publisher_id": 1
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if the `book` key is missing or empty.
/// Returns 422 if the author or publisher does not exist or the title is blank.
pub async fn create_book_handler(
    State(state): State<AppState>,
    Required(params): Required<BookParams>,
) -> Result<(StatusCode, Json<BookItem>), AppError> {
    let book = state.book_service.create_book(params.into()).await?;

    Ok((StatusCode::CREATED, Json(book.into())))
}

/// Updates the fields of a book present under the `book` key.
///
/// # Endpoint
///
/// `PUT /books/{id}` or `PATCH /books/{id}`
///
/// Responds 204 with an empty body.
///
/// # Errors
///
/// Returns 404 if the book does not exist.
/// Returns 400 if the `book` key is missing or empty.
/// Returns 422 if the merged record breaks a rule.
pub async fn update_book_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
    params: Result<Required<BookParams>, AppError>,
) -> Result<StatusCode, AppError> {
    // The record lookup is reported before any parameter problem.
    let book = state.book_service.get_book(&id).await?;
    let Required(params) = params?;

    state.book_service.update_book(book, params.into()).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a book.
///
/// # Endpoint
///
/// `DELETE /books/{id}`
///
/// # Response
///
/// ```json
/// { "message": "1984 was deleted" }
/// ```
///
/// # Errors
///
/// Returns 404 if the book does not exist.
pub async fn destroy_book_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let book = state.book_service.delete_book(&id).await?;

    Ok(Json(MessageResponse::new(format!("{} was deleted", book.title))))
}
