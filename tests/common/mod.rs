#![allow(dead_code)]

use axum_test::TestServer;
use book_catalog::api::routes::catalog_routes;
use book_catalog::domain::entities::{Book, BookPatch};
use book_catalog::state::AppState;

/// Test server over the catalog routes backed by in-memory storage.
pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(catalog_routes().with_state(state)).unwrap()
}

pub async fn create_test_author(state: &AppState, name: &str) -> i64 {
    state
        .author_service
        .create_author(Some(name.to_string()))
        .await
        .unwrap()
        .id
}

pub async fn create_test_publisher(state: &AppState, name: &str) -> i64 {
    state
        .publisher_service
        .create_publisher(Some(name.to_string()))
        .await
        .unwrap()
        .id
}

pub async fn create_test_book(
    state: &AppState,
    title: &str,
    author_id: i64,
    publisher_id: i64,
) -> Book {
    let patch = BookPatch {
        title: Some(Some(title.to_string())),
        genre: Some(Some("Fiction".to_string())),
        language: Some(Some("English".to_string())),
        year: Some(Some(1949)),
        author_id: Some(Some(author_id)),
        publisher_id: Some(Some(publisher_id)),
        ..Default::default()
    };

    state.book_service.create_book(patch).await.unwrap()
}

/// Seeds one author, one publisher and `count` books titled `Book 1..count`.
///
/// Returns the state with the author and publisher ids.
pub async fn seeded_state(count: usize) -> (AppState, i64, i64) {
    let state = AppState::in_memory();
    let author_id = create_test_author(&state, "George Orwell").await;
    let publisher_id = create_test_publisher(&state, "Secker & Warburg").await;

    for n in 1..=count {
        create_test_book(&state, &format!("Book {n}"), author_id, publisher_id).await;
    }

    (state, author_id, publisher_id)
}
