//! Handlers for the publisher resource.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::publisher::{PublisherItem, PublisherListResponse, PublisherParams};
use crate::api::extract::{RecordId, Required};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all publishers ordered by id.
///
/// # Endpoint
///
/// `GET /publishers`
pub async fn list_publishers_handler(
    State(state): State<AppState>,
) -> Result<Json<PublisherListResponse>, AppError> {
    let publishers = state.publisher_service.list_publishers().await?;

    Ok(Json(PublisherListResponse {
        total_publishers: publishers.len(),
        list: publishers.into_iter().map(PublisherItem::from).collect(),
    }))
}

/// Returns a single publisher.
///
/// # Endpoint
///
/// `GET /publishers/{id}`
///
/// # Errors
///
/// Returns 404 if the publisher does not exist.
pub async fn show_publisher_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
) -> Result<Json<PublisherItem>, AppError> {
    let publisher = state.publisher_service.get_publisher(&id).await?;

    Ok(Json(publisher.into()))
}

/// Creates a publisher.
///
/// # Endpoint
///
/// `POST /publishers` with `{ "publisher": { "name": "..." } }`
///
/// # Errors
///
/// Returns 400 if the `publisher` key is missing or empty.
/// Returns 422 if the name is blank.
pub async fn create_publisher_handler(
    State(state): State<AppState>,
    Required(params): Required<PublisherParams>,
) -> Result<(StatusCode, Json<PublisherItem>), AppError> {
    let publisher = state.publisher_service.create_publisher(params.name).await?;

    Ok((StatusCode::CREATED, Json(publisher.into())))
}
