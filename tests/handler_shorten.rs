mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_shorten_first_url_on_empty_store() {
    let server = common::test_server(common::create_test_state().await);

    let response = server.get("/shorten/https://example.com/page").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "originalURL": "https://example.com/page",
        "shortenedID": "2Bj"
    }));
}

#[tokio::test]
async fn test_shorten_assigns_sequential_ids() {
    let server = common::test_server(common::create_test_state().await);

    let first: Value = server.get("/shorten/https://one.example.com").await.json();
    let second: Value = server.get("/shorten/https://two.example.com").await.json();
    let third: Value = server.get("/shorten/https://three.example.com").await.json();

    assert_eq!(first["shortenedID"], "2Bj");
    assert_eq!(second["shortenedID"], "2Bk");
    assert_eq!(third["shortenedID"], "2Bl");
}

#[tokio::test]
async fn test_shorten_continues_after_existing_records() {
    let state = common::create_state_with_mappings(&[
        ("https://a.example.com", "2Bj"),
        ("https://b.example.com", "2Bk"),
        ("https://c.example.com", "2Bl"),
    ])
    .await;
    let server = common::test_server(state);

    let body: Value = server.get("/shorten/https://d.example.com").await.json();

    assert_eq!(body["shortenedID"], "2Bm");
}

#[tokio::test]
async fn test_shorten_same_url_twice_gets_two_ids() {
    let server = common::test_server(common::create_test_state().await);

    let first: Value = server.get("/shorten/https://example.com").await.json();
    let second: Value = server.get("/shorten/https://example.com").await.json();

    assert_ne!(first["shortenedID"], second["shortenedID"]);
}

#[tokio::test]
async fn test_shorten_keeps_query_string() {
    let server = common::test_server(common::create_test_state().await);

    let response = server
        .get("/shorten/https://example.com/search?q=rust&page=2")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["originalURL"], "https://example.com/search?q=rust&page=2");
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = common::test_server(common::create_test_state().await);

    let response = server.get("/shorten/not-a-url").await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "error": "not-a-url is not a valid URL." }));
}

#[tokio::test]
async fn test_shorten_rejects_unsupported_scheme() {
    let server = common::test_server(common::create_test_state().await);

    let response = server.get("/shorten/mailto:someone@example.com").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_rejects_oversized_url() {
    let server = common::test_server(common::create_test_state().await);
    let url = format!("https://example.com/{}", "a".repeat(2100));

    let response = server.get(&format!("/shorten/{}", url)).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_rejected_url_does_not_consume_an_id() {
    let state = common::create_test_state().await;
    let server = common::test_server(state.clone());

    server.get("/shorten/not-a-url").await.assert_status_bad_request();
    let body: Value = server.get("/shorten/https://example.com").await.json();

    assert_eq!(body["shortenedID"], "2Bj");
    assert_eq!(state.shortener.record_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_undecodable_path_returns_json_error() {
    let server = common::test_server(common::create_test_state().await);

    let response = server.get("/shorten/https://example.com/%FF").await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "error": "https://example.com/%FF is not a valid URL." }));
}
