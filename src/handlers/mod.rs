//! HTTP request handlers.

mod list_urls;
mod pages;
mod redirect;
mod store_mapping;

pub use list_urls::list_urls_handler;
pub use pages::{admin_form_handler, home_handler};
pub use redirect::redirect_handler;
pub use store_mapping::store_mapping_handler;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Builds a 302 Found response pointing at `location`.
///
/// Axum's `Redirect` helpers emit 303/307/308; this service's contract is a
/// plain 302.
pub(crate) fn found(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}
