//! Visit publisher trait and error types.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::VisitEvent;

/// Errors that can occur while delivering a visit event.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("publish transport error: {0}")]
    Transport(String),
    #[error("publish rejected by sink: {0}")]
    Rejected(String),
}

/// Result type for publish operations.
pub type PublishResult<T> = Result<T, PublishError>;

/// Trait for the external sink receiving visit events.
///
/// Delivery is secondary to the redirect it describes: callers never
/// propagate these errors to the client. Use
/// [`crate::infrastructure::publisher::publish_best_effort`] rather than
/// calling [`publish`](VisitPublisher::publish) directly from a handler, so
/// every attempt is time-bounded and its outcome acknowledged.
///
/// # Implementations
///
/// - [`crate::infrastructure::publisher::HttpPublisher`] - HTTP sink
/// - [`crate::infrastructure::publisher::NullPublisher`] - publishing disabled
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitPublisher: Send + Sync {
    /// Delivers one visit event to the sink.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] if the sink cannot be reached or rejects
    /// the event.
    async fn publish(&self, event: &VisitEvent) -> PublishResult<()>;
}
