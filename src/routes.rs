//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Landing page
//! - `GET  /admin`       - URL-submission form
//! - `GET  /admin/urls`  - JSON array of all stored mappings
//! - `GET  /s/{url}`     - Short link redirect with visit logging
//! - `POST /admin/store` - Store a mapping
//! - anything else       - 404, fixed body
//!
//! Literal segments win over parameter segments, so `/admin/urls` is never
//! captured by a parameterized route. The catch-all also covers method
//! mismatches on known paths.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::handlers::{
    admin_form_handler, home_handler, list_urls_handler, redirect_handler, store_mapping_handler,
};
use crate::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Constructs the application router with all routes and middleware.
///
/// Trailing-slash normalization wraps this router at serve time in
/// [`crate::server::run`], since the layer has to run before routing.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/admin", get(admin_form_handler))
        .route("/admin/urls", get(list_urls_handler))
        .route("/admin/store", post(store_mapping_handler))
        .route("/s/{url}", get(redirect_handler))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state)
        .layer(trace_layer())
}

/// Catch-all for any method/path with no matching route.
async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404, not found!")
}

/// Creates the tracing middleware for HTTP requests.
///
/// Spans carry method, path, and version at `INFO`; responses log status
/// and latency.
fn trace_layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}
