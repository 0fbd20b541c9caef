//! HTTP sink publisher implementation.

use super::service::{PublishError, PublishResult, VisitPublisher};
use crate::domain::VisitEvent;
use async_trait::async_trait;
use tracing::{debug, info};

/// Publishes visit events to an external HTTP sink as JSON.
///
/// One POST per event, authenticated with an optional bearer token. The
/// client carries no timeout of its own; callers bound every attempt via
/// [`crate::infrastructure::publisher::publish_best_effort`].
pub struct HttpPublisher {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpPublisher {
    /// Creates a publisher targeting `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Transport`] if the HTTP client cannot be
    /// constructed.
    pub fn new(endpoint: String, token: Option<String>) -> PublishResult<Self> {
        info!("Visit events will be published to {}", endpoint);

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| PublishError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint,
            token,
        })
    }
}

#[async_trait]
impl VisitPublisher for HttpPublisher {
    async fn publish(&self, event: &VisitEvent) -> PublishResult<()> {
        let mut request = self.http.post(&self.endpoint).json(event);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PublishError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PublishError::Rejected(format!("sink returned {}", status)));
        }

        debug!("Published visit event for {}", event.short_code);
        Ok(())
    }
}
