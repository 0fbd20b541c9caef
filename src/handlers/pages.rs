//! Home page and admin form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the public landing page.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {}

/// Template for the admin URL-submission form.
///
/// The form submits JSON to `POST /admin/store` via a small inline script
/// and links to `/admin/urls` for the raw mapping list.
#[derive(Template, WebTemplate)]
#[template(path = "admin.html")]
pub struct AdminFormTemplate {}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate {}
}

/// Renders the URL-submission form.
///
/// # Endpoint
///
/// `GET /admin`
pub async fn admin_form_handler() -> impl IntoResponse {
    AdminFormTemplate {}
}
