mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use edge_shortener::prelude::UrlStore;

#[tokio::test]
async fn test_redirect_success() {
    let (state, store) = common::test_state();
    store
        .set("redirect1", "https://example.com/target")
        .await
        .unwrap();

    let server = common::test_server(state);

    let response = server.get("/s/redirect1").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _store) = common::test_state();
    let server = common::test_server(state);

    let response = server.get("/s/doesnotexist").await;

    response.assert_status_not_found();
    response.assert_text("Not found");
}

#[tokio::test]
async fn test_redirect_store_error_is_500() {
    let state = common::state_with_store(Arc::new(common::FailingStore));
    let server = common::test_server(state);

    let response = server.get("/s/any").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_text("Internal Server Error");
}

#[tokio::test]
async fn test_redirect_publishes_visit_event() {
    let publisher = Arc::new(common::RecordingPublisher::new());
    let (state, store) = common::state_with_publisher(publisher.clone());
    store.set("track", "https://example.com").await.unwrap();

    let server = common::test_server(state);

    let response = server
        .get("/s/track")
        .add_header("cf-ipcountry", "DE")
        .add_header("cf-ipcity", "Berlin")
        .add_header("cf-connecting-ip", "203.0.113.7")
        .await;

    response.assert_status(StatusCode::FOUND);

    let events = publisher.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].short_code, "track");
    assert_eq!(events[0].long_url, "https://example.com");
    assert_eq!(events[0].country, "DE");
    assert_eq!(events[0].city, "Berlin");
    assert_eq!(events[0].ip, "203.0.113.7");
}

#[tokio::test]
async fn test_redirect_defaults_client_meta_to_unknown() {
    let publisher = Arc::new(common::RecordingPublisher::new());
    let (state, store) = common::state_with_publisher(publisher.clone());
    store.set("bare", "https://example.com").await.unwrap();

    let server = common::test_server(state);

    server.get("/s/bare").await.assert_status(StatusCode::FOUND);

    let events = publisher.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].country, "unknown");
    assert_eq!(events[0].city, "unknown");
    assert_eq!(events[0].ip, "unknown");
}

#[tokio::test]
async fn test_publish_failure_never_affects_redirect() {
    let (state, store) = common::state_with_publisher(Arc::new(common::FailingPublisher));
    store.set("abc", "https://example.com").await.unwrap();

    let server = common::test_server(state);

    let response = server.get("/s/abc").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_hanging_publisher_never_stalls_redirect() {
    let (state, store) = common::state_with_publisher(Arc::new(common::HangingPublisher));
    store.set("slow", "https://example.com").await.unwrap();

    let server = common::test_server(state);

    let response = server.get("/s/slow").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_redirect_not_found_publishes_nothing() {
    let publisher = Arc::new(common::RecordingPublisher::new());
    let (state, _store) = common::state_with_publisher(publisher.clone());

    let server = common::test_server(state);

    server.get("/s/ghost").await.assert_status_not_found();

    assert!(publisher.events().is_empty());
}
