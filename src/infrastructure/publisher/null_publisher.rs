//! No-op publisher for disabled visit logging.

use super::service::{PublishResult, VisitPublisher};
use crate::domain::VisitEvent;
use async_trait::async_trait;
use tracing::debug;

/// A publisher that discards every event.
///
/// Used when no event sink is configured. Events are logged at debug level
/// and dropped.
///
/// # Use Cases
///
/// - Development environments without a sink
/// - Deployments that only want redirects, not visit logging
pub struct NullPublisher;

impl NullPublisher {
    /// Creates a new NullPublisher instance.
    pub fn new() -> Self {
        debug!("Using NullPublisher (visit logging disabled)");
        Self
    }
}

impl Default for NullPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VisitPublisher for NullPublisher {
    async fn publish(&self, event: &VisitEvent) -> PublishResult<()> {
        debug!(
            short_code = %event.short_code,
            long_url = %event.long_url,
            "Discarding visit event (publishing disabled)"
        );
        Ok(())
    }
}
