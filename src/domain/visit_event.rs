//! Visit event model for best-effort redirect logging.

use serde::Serialize;

use crate::utils::ClientMeta;

/// A record describing one redirect occurrence.
///
/// Constructed per redirect and handed to the publisher; never persisted or
/// read back by this service. Field names serialize camelCase to match the
/// sink's expected payload shape.
///
/// # Design
///
/// - Carries denormalized data (code + resolved URL) so the sink needs no
///   follow-up lookups
/// - Client metadata fields hold `"unknown"` rather than being optional:
///   the sink contract is all-string-valued
///
/// # Usage Flow
///
/// 1. Created in the redirect handler after a successful lookup
/// 2. Handed to [`crate::infrastructure::publisher::publish_best_effort`]
/// 3. Dropped regardless of the publish outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitEvent {
    pub short_code: String,
    pub long_url: String,
    pub country: String,
    pub city: String,
    pub ip: String,
}

impl VisitEvent {
    /// Creates a new visit event.
    ///
    /// # Arguments
    ///
    /// - `short_code` - The short code that was visited
    /// - `long_url` - The resolved redirect target
    /// - `meta` - Client metadata extracted from the request headers
    pub fn new(short_code: impl Into<String>, long_url: impl Into<String>, meta: ClientMeta) -> Self {
        Self {
            short_code: short_code.into(),
            long_url: long_url.into(),
            country: meta.country,
            city: meta.city,
            ip: meta.ip,
        }
    }
}
