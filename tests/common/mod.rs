#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;
use edge_shortener::domain::VisitEvent;
use edge_shortener::infrastructure::publisher::{NullPublisher, PublishError, PublishResult, VisitPublisher};
use edge_shortener::infrastructure::store::{MemoryStore, StoreError, StoreResult, UrlStore};
use edge_shortener::routes::app_router;
use edge_shortener::state::AppState;

/// Kept short so hanging-publisher tests stay fast.
pub const TEST_PUBLISH_TIMEOUT: Duration = Duration::from_millis(200);

/// A publisher that records every event it is handed.
#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<VisitEvent>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<VisitEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl VisitPublisher for RecordingPublisher {
    async fn publish(&self, event: &VisitEvent) -> PublishResult<()> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// A publisher that always fails.
pub struct FailingPublisher;

#[async_trait]
impl VisitPublisher for FailingPublisher {
    async fn publish(&self, _event: &VisitEvent) -> PublishResult<()> {
        Err(PublishError::Transport("connection refused".to_string()))
    }
}

/// A publisher that never completes, to exercise the publish time bound.
pub struct HangingPublisher;

#[async_trait]
impl VisitPublisher for HangingPublisher {
    async fn publish(&self, _event: &VisitEvent) -> PublishResult<()> {
        std::future::pending().await
    }
}

/// A store whose every operation fails, to exercise 500 paths.
pub struct FailingStore;

#[async_trait]
impl UrlStore for FailingStore {
    async fn get(&self, _short_code: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Operation("store unreachable".to_string()))
    }

    async fn set(&self, _short_code: &str, _long_url: &str) -> StoreResult<()> {
        Err(StoreError::Operation("store unreachable".to_string()))
    }

    async fn keys(&self, _pattern: &str) -> StoreResult<Vec<String>> {
        Err(StoreError::Operation("store unreachable".to_string()))
    }
}

/// State backed by a fresh in-memory store and a no-op publisher.
///
/// Returns the store handle alongside, so tests can seed and inspect
/// mappings directly.
pub fn test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(
        store.clone(),
        Arc::new(NullPublisher::new()),
        TEST_PUBLISH_TIMEOUT,
    );
    (state, store)
}

/// State with a custom publisher and a fresh in-memory store.
pub fn state_with_publisher(publisher: Arc<dyn VisitPublisher>) -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), publisher, TEST_PUBLISH_TIMEOUT);
    (state, store)
}

/// State with a custom store and a no-op publisher.
pub fn state_with_store(store: Arc<dyn UrlStore>) -> AppState {
    AppState::new(store, Arc::new(NullPublisher::new()), TEST_PUBLISH_TIMEOUT)
}

/// A test server running the full application router.
pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}
