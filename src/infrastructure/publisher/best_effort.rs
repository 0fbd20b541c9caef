//! Time-bounded, acknowledge-or-nothing publish helper.

use std::time::Duration;

use super::service::{PublishError, VisitPublisher};
use crate::domain::VisitEvent;

/// Outcome of a best-effort publish attempt.
///
/// Marked `#[must_use]` so a caller cannot drop a failed delivery on the
/// floor without at least matching on it. The minimum acknowledgment is a
/// log line.
#[derive(Debug)]
#[must_use = "the publish outcome must be acknowledged, at minimum by logging it"]
pub enum PublishOutcome {
    /// The sink accepted the event within the deadline.
    Delivered,
    /// The sink failed or rejected the event.
    Failed(PublishError),
    /// The attempt did not complete within the deadline and was cancelled.
    TimedOut,
}

/// Publishes a visit event, bounded by `deadline`.
///
/// Never returns an error: any failure mode collapses into an outcome
/// variant. The in-flight request is dropped on timeout, so a hanging sink
/// cannot stall the caller past the deadline.
pub async fn publish_best_effort(
    publisher: &dyn VisitPublisher,
    event: &VisitEvent,
    deadline: Duration,
) -> PublishOutcome {
    match tokio::time::timeout(deadline, publisher.publish(event)).await {
        Ok(Ok(())) => PublishOutcome::Delivered,
        Ok(Err(e)) => PublishOutcome::Failed(e),
        Err(_) => PublishOutcome::TimedOut,
    }
}
