use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

/// Request-level error surfaced to HTTP clients.
///
/// Response bodies are deliberately fixed plain text: clients never see
/// details of a store or publisher failure. The underlying error is logged
/// at the point where the variant is produced.
#[derive(Debug)]
pub enum AppError {
    /// The requested short code has no mapping. Maps to 404 `"Not found"`.
    NotFound,
    /// Malformed or incomplete request input. Maps to 400 with a short message.
    BadRequest { message: String },
    /// A store or other infrastructure failure. Maps to 500
    /// `"Internal Server Error"`; details stay server-side.
    Internal,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message).into_response(),
            AppError::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::bad_request(format!("Invalid request body: {errors}"))
    }
}
