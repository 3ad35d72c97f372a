mod common;

use axum::http::StatusCode;
use book_catalog::state::AppState;
use serde_json::{Value, json};

#[tokio::test]
async fn test_create_publisher_success() {
    let server = common::make_server(AppState::in_memory());

    let response = server
        .post("/publishers")
        .json(&json!({ "publisher": { "name": "Penguin Books" } }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["name"], "Penguin Books");
}

#[tokio::test]
async fn test_create_publisher_without_name() {
    let server = common::make_server(AppState::in_memory());

    let response = server
        .post("/publishers")
        .json(&json!({ "publisher": { "city": "London" } }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    response.assert_json(&json!({ "message": "Validation failed: Name can't be blank" }));
}

#[tokio::test]
async fn test_list_and_show_publishers() {
    let state = AppState::in_memory();
    let id = common::create_test_publisher(&state, "Faber & Faber").await;
    let server = common::make_server(state);

    let list = server.get("/publishers").await;
    list.assert_status_ok();
    let json = list.json::<Value>();
    assert_eq!(json["total_publishers"], 1);
    assert_eq!(json["list"][0]["id"], id);

    let show = server.get(&format!("/publishers/{id}")).await;
    show.assert_status_ok();
    assert_eq!(show.json::<Value>()["name"], "Faber & Faber");
}

#[tokio::test]
async fn test_show_publisher_not_found() {
    let server = common::make_server(AppState::in_memory());

    let response = server.get("/publishers/x1").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "message": "Couldn't find Publisher with 'id'=x1" }));
}
