//! Handler listing every stored mapping.

use axum::{extract::State, response::Html};
use futures_util::future::try_join_all;
use serde::Serialize;
use tracing::error;

use crate::error::AppError;
use crate::infrastructure::store::StoreError;
use crate::state::AppState;

/// One stored mapping as returned by the listing endpoint.
///
/// `value` is `null` when the key vanished between the scan and the fetch.
#[derive(Debug, Serialize)]
pub struct UrlEntry {
    pub key: String,
    pub value: Option<String>,
}

/// Returns every mapping in the store as a JSON array.
///
/// # Endpoint
///
/// `GET /admin/urls`
///
/// # Behavior
///
/// Scans all keys, then fetches each value concurrently; entries follow the
/// store's enumeration order and the handler waits for every fetch before
/// responding. The body is JSON served with an HTML content type, which the
/// admin tooling consuming this endpoint expects.
///
/// Every key is fetched on every call, no pagination. Acceptable while the
/// store stays small; a known scalability limit otherwise.
///
/// # Errors
///
/// The first failing lookup aborts the batch and returns 500.
pub async fn list_urls_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let keys = state.store.keys("*").await.map_err(|e| {
        error!(error = %e, "store key scan failed");
        AppError::Internal
    })?;

    let entries = try_join_all(keys.iter().map(|key| {
        let store = state.store.clone();
        async move {
            let value = store.get(key).await?;
            Ok::<_, StoreError>(UrlEntry {
                key: key.clone(),
                value,
            })
        }
    }))
    .await
    .map_err(|e| {
        error!(error = %e, "store value fetch failed");
        AppError::Internal
    })?;

    let body = serde_json::to_string(&entries).map_err(|e| {
        error!(error = %e, "failed to serialize mapping list");
        AppError::Internal
    })?;

    Ok(Html(body))
}
