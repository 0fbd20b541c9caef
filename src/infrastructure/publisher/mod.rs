//! Best-effort visit event publishing.
//!
//! Provides a [`VisitPublisher`] trait with two implementations:
//! - [`HttpPublisher`] - POSTs events as JSON to an external HTTP sink
//! - [`NullPublisher`] - No-op implementation for disabled publishing
//!
//! All publishing goes through [`publish_best_effort`], which bounds the
//! attempt with a timeout and returns an outcome the caller must
//! acknowledge.

mod best_effort;
mod http_publisher;
mod null_publisher;
mod service;

pub use best_effort::{PublishOutcome, publish_best_effort};
pub use http_publisher::HttpPublisher;
pub use null_publisher::NullPublisher;
pub use service::{PublishError, PublishResult, VisitPublisher};

#[cfg(test)]
pub use service::MockVisitPublisher;
