//! API route configuration.

use crate::api::handlers::add_ssl_handler;
use crate::state::AppState;
use crate::web::handlers::page_handler;
use axum::{Router, routing::post};

/// Path of the relay endpoint, relative to the application root.
pub const ADD_SSL_PATH: &str = "/api/add-ssl";

/// API routes.
///
/// # Endpoints
///
/// - `POST /api/add-ssl` - Enable Universal SSL for a zone
///
/// Other methods on this path are answered by the page responder instead
/// of `405 Method Not Allowed`.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        ADD_SSL_PATH,
        post(add_ssl_handler).fallback(page_handler),
    )
}
