//! Handler for storing a URL mapping.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};
use serde::Deserialize;
use tracing::{error, info};
use validator::Validate;

use super::found;
use crate::error::AppError;
use crate::state::AppState;

/// Request to store one short-code to long-URL mapping.
///
/// Both fields are required and must be non-empty; a body that is not valid
/// JSON or is missing a field fails closed with a 400-class response.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StoreMappingRequest {
    #[validate(length(min = 1, message = "shortCode must not be empty"))]
    pub short_code: String,
    #[validate(length(min = 1, message = "longUrl must not be empty"))]
    pub long_url: String,
}

/// Stores a mapping, overwriting any prior value for the code.
///
/// # Endpoint
///
/// `POST /admin/store`
///
/// # Request Body
///
/// ```json
/// { "shortCode": "abc", "longUrl": "https://example.com" }
/// ```
///
/// # Response
///
/// 302 Found with `Location: /admin` on success, sending the admin back to
/// the form.
///
/// # Errors
///
/// Returns 400 for malformed JSON or missing/empty fields.
/// Returns 500 with a generic body if the store write fails; the raw error
/// is logged, never echoed to the client.
pub async fn store_mapping_handler(
    State(state): State<AppState>,
    payload: Result<Json<StoreMappingRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    payload.validate()?;

    state
        .store
        .set(&payload.short_code, &payload.long_url)
        .await
        .map_err(|e| {
            error!(short_code = %payload.short_code, error = %e, "store write failed");
            AppError::Internal
        })?;

    info!(
        short_code = %payload.short_code,
        long_url = %payload.long_url,
        "stored mapping"
    );

    Ok(found("/admin"))
}
