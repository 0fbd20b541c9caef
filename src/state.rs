use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::publisher::VisitPublisher;
use crate::infrastructure::store::UrlStore;

/// Shared application state injected into all handlers.
///
/// Collaborators are constructed once at startup and passed in explicitly,
/// so handlers can be exercised against stub implementations in tests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UrlStore>,
    pub publisher: Arc<dyn VisitPublisher>,
    /// Upper bound on any single visit-publish attempt.
    pub publish_timeout: Duration,
}

impl AppState {
    pub fn new(
        store: Arc<dyn UrlStore>,
        publisher: Arc<dyn VisitPublisher>,
        publish_timeout: Duration,
    ) -> Self {
        Self {
            store,
            publisher,
            publish_timeout,
        }
    }
}
