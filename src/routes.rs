//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/add-ssl` - Relay credentials to Cloudflare
//! - anything else        - The form page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web::handlers::page_handler;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::routes())
        .fallback(page_handler)
        .with_state(state)
        .layer(tracing::layer())
}
