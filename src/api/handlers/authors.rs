//! Handlers for the author resource.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::author::{AuthorItem, AuthorListResponse, AuthorParams};
use crate::api::extract::{RecordId, Required};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all authors ordered by id.
///
/// # Endpoint
///
/// `GET /authors`
pub async fn list_authors_handler(
    State(state): State<AppState>,
) -> Result<Json<AuthorListResponse>, AppError> {
    let authors = state.author_service.list_authors().await?;

    Ok(Json(AuthorListResponse {
        total_authors: authors.len(),
        list: authors.into_iter().map(AuthorItem::from).collect(),
    }))
}

/// Returns a single author.
///
/// # Endpoint
///
/// `GET /authors/{id}`
///
/// # Errors
///
/// Returns 404 if the author does not exist.
pub async fn show_author_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
) -> Result<Json<AuthorItem>, AppError> {
    let author = state.author_service.get_author(&id).await?;

    Ok(Json(author.into()))
}

/// Creates an author.
///
/// # Endpoint
///
/// `POST /authors` with `{ "author": { "name": "..." } }`
///
/// # Errors
///
/// Returns 400 if the `author` key is missing or empty.
/// Returns 422 if the name is blank.
pub async fn create_author_handler(
    State(state): State<AppState>,
    Required(params): Required<AuthorParams>,
) -> Result<(StatusCode, Json<AuthorItem>), AppError> {
    let author = state.author_service.create_author(params.name).await?;

    Ok((StatusCode::CREATED, Json(author.into())))
}
