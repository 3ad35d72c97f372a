mod common;

use axum::http::StatusCode;
use book_catalog::state::AppState;
use serde_json::{Value, json};

#[tokio::test]
async fn test_create_author_success() {
    let server = common::make_server(AppState::in_memory());

    let response = server
        .post("/authors")
        .json(&json!({ "author": { "name": "  Jorge Luis Borges " } }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert!(json["id"].is_i64());
    assert_eq!(json["name"], "Jorge Luis Borges");
}

#[tokio::test]
async fn test_create_author_blank_name() {
    let server = common::make_server(AppState::in_memory());

    let response = server
        .post("/authors")
        .json(&json!({ "author": { "name": "" } }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    response.assert_json(&json!({ "message": "Validation failed: Name can't be blank" }));
}

#[tokio::test]
async fn test_create_author_missing_nested_key() {
    let server = common::make_server(AppState::in_memory());

    let response = server
        .post("/authors")
        .json(&json!({ "name": "Borges" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "message": "param is missing or the value is empty: author" }));
}

#[tokio::test]
async fn test_list_authors() {
    let state = AppState::in_memory();
    common::create_test_author(&state, "Ursula K. Le Guin").await;
    common::create_test_author(&state, "Italo Calvino").await;
    let server = common::make_server(state);

    let response = server.get("/authors").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["total_authors"], 2);
    assert_eq!(json["list"][0]["name"], "Ursula K. Le Guin");
    assert_eq!(json["list"][1]["name"], "Italo Calvino");
}

#[tokio::test]
async fn test_show_author() {
    let state = AppState::in_memory();
    let id = common::create_test_author(&state, "Italo Calvino").await;
    let server = common::make_server(state);

    let response = server.get(&format!("/authors/{id}")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["name"], "Italo Calvino");
}

#[tokio::test]
async fn test_show_author_not_found() {
    let server = common::make_server(AppState::in_memory());

    let response = server.get("/authors/77").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "message": "Couldn't find Author with 'id'=77" }));
}

#[tokio::test]
async fn test_show_author_undecodable_id_is_json_bad_request() {
    let server = common::make_server(AppState::in_memory());

    let response = server.get("/authors/%FF").await;

    response.assert_status_bad_request();
    assert!(response.json::<Value>()["message"].is_string());
}
