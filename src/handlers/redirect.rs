//! Handler for short URL redirect with visit logging.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
};
use tracing::{debug, error, warn};

use super::found;
use crate::domain::VisitEvent;
use crate::error::AppError;
use crate::infrastructure::publisher::{PublishOutcome, publish_best_effort};
use crate::state::AppState;
use crate::utils::ClientMeta;

/// Redirects a short code to its stored URL, logging the visit.
///
/// # Endpoint
///
/// `GET /s/{url}`
///
/// # Request Flow
///
/// 1. Look up the long URL for the code
/// 2. Build a visit event from the code, URL, and client metadata
/// 3. Publish the event, bounded by the configured timeout
/// 4. Return 302 Found with `Location` set to the long URL
///
/// The redirect is the primary contract: a publish failure or timeout is
/// logged and swallowed, never changing the response.
///
/// # Errors
///
/// Returns 404 Not Found if the code has no mapping.
/// Returns 500 if the store lookup fails; the cause is logged, not leaked.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let long_url = state
        .store
        .get(&code)
        .await
        .map_err(|e| {
            error!(short_code = %code, error = %e, "store lookup failed");
            AppError::Internal
        })?
        .ok_or(AppError::NotFound)?;

    let meta = ClientMeta::from_headers(&headers);
    let event = VisitEvent::new(&code, &long_url, meta);

    match publish_best_effort(state.publisher.as_ref(), &event, state.publish_timeout).await {
        PublishOutcome::Delivered => {
            debug!(short_code = %code, "visit event delivered");
        }
        PublishOutcome::Failed(e) => {
            warn!(short_code = %code, error = %e, "visit event publish failed");
        }
        PublishOutcome::TimedOut => {
            warn!(
                short_code = %code,
                timeout = ?state.publish_timeout,
                "visit event publish timed out"
            );
        }
    }

    Ok(found(&long_url))
}
